// src/domain/car/entity.rs
use crate::domain::car::value_objects::{CarAttribute, CarId, LicensePlate, ModelYear};
use crate::domain::user::value_objects::UserId;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Car {
    pub id: CarId,
    pub year: ModelYear,
    pub license_plate: LicensePlate,
    pub model: CarAttribute,
    pub color: CarAttribute,
    pub created_at: DateTime<Utc>,
    pub usage_counter: i64,
    pub owner_id: UserId,
}

impl Car {
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.owner_id == user_id
    }
}

#[derive(Debug, Clone)]
pub struct NewCar {
    pub year: ModelYear,
    pub license_plate: LicensePlate,
    pub model: CarAttribute,
    pub color: CarAttribute,
    pub owner_id: UserId,
    pub created_at: DateTime<Utc>,
}

/// Replaces the mutable attributes of a car. Owner, creation time and the
/// usage counter stay as stored.
#[derive(Debug, Clone)]
pub struct CarUpdate {
    pub id: CarId,
    pub year: ModelYear,
    pub license_plate: LicensePlate,
    pub model: CarAttribute,
    pub color: CarAttribute,
}
