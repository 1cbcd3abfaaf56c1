use crate::domain::user::User;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::serde_time;

/// Public view of a user. The password hash never leaves the service.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(with = "serde_time::date")]
    #[schema(value_type = String, example = "15/03/1990")]
    pub birth_date: NaiveDate,
    pub email: String,
    pub login: String,
    pub phone: String,
    #[serde(with = "serde_time")]
    #[schema(value_type = String, example = "05/03/2024 14:07:09.042")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "serde_time::option")]
    #[schema(value_type = Option<String>, example = "06/03/2024 09:00:00.000")]
    pub last_login: Option<DateTime<Utc>>,
    pub total_usage_counter: i64,
}

impl From<User> for UserDto {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into(),
            first_name: user.first_name.into(),
            last_name: user.last_name.into(),
            birth_date: user.birth_date.value(),
            email: user.email.into(),
            login: user.login.into(),
            phone: user.phone.into(),
            created_at: user.created_at,
            last_login: user.last_login,
            total_usage_counter: user.total_usage_counter,
        }
    }
}
