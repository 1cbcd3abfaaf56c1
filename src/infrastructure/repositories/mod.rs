// src/infrastructure/repositories/mod.rs
mod error;
mod postgres_car;
mod postgres_user;

pub use error::map_sqlx;
pub use postgres_car::PostgresCarRepository;
pub use postgres_user::PostgresUserRepository;

use crate::domain::{errors::DomainResult, pagination::PageRequest};

fn to_count(value: i64) -> u64 {
    u64::try_from(value).unwrap_or_default()
}

fn limit_offset(page: PageRequest) -> DomainResult<(i64, i64)> {
    let offset = i64::try_from(page.offset()).map_err(|_| {
        crate::domain::errors::DomainError::Persistence("page offset out of range".into())
    })?;
    Ok((i64::from(page.size()), offset))
}
