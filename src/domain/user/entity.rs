// src/domain/user/entity.rs
use crate::domain::user::value_objects::{
    BirthDate, Email, Login, PasswordHash, PersonName, Phone, UserId,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub birth_date: BirthDate,
    pub email: Email,
    pub login: Login,
    pub password_hash: PasswordHash,
    pub phone: Phone,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    /// Cached sum of the usage counters of every car the user owns.
    pub total_usage_counter: i64,
}

impl User {
    /// Moment the account last showed activity.
    pub fn last_activity(&self) -> DateTime<Utc> {
        self.last_login.unwrap_or(self.created_at)
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub birth_date: BirthDate,
    pub email: Email,
    pub login: Login,
    pub password_hash: PasswordHash,
    pub phone: Phone,
    pub created_at: DateTime<Utc>,
}

/// Profile replacement for an existing user. Creation time, last login and
/// the usage aggregate are never part of an update.
#[derive(Debug, Clone)]
pub struct UserUpdate {
    pub id: UserId,
    pub first_name: PersonName,
    pub last_name: PersonName,
    pub birth_date: BirthDate,
    pub email: Email,
    pub login: Login,
    pub password_hash: PasswordHash,
    pub phone: Phone,
}
