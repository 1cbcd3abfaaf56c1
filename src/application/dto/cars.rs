use crate::domain::car::Car;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CarDto {
    pub id: i64,
    pub year: i32,
    pub license_plate: String,
    pub model: String,
    pub color: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, example = "05/03/2024 14:07:09.042")]
    pub created_at: DateTime<Utc>,
    pub usage_counter: i64,
}

impl From<Car> for CarDto {
    fn from(car: Car) -> Self {
        Self {
            id: car.id.into(),
            year: car.year.value(),
            license_plate: car.license_plate.into(),
            model: car.model.into(),
            color: car.color.into(),
            created_at: car.created_at,
            usage_counter: car.usage_counter,
        }
    }
}
