use crate::domain::errors::{DomainError, Resource, UniqueField};

const CNT_USER_LOGIN: &str = "users_login_key";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_CAR_PLATE: &str = "cars_license_plate_key";
const CNT_CAR_OWNER: &str = "cars_user_id_fkey";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return match constraint {
                    CNT_USER_LOGIN => DomainError::AlreadyExists(UniqueField::Login),
                    CNT_USER_EMAIL => DomainError::AlreadyExists(UniqueField::Email),
                    CNT_CAR_PLATE => DomainError::AlreadyExists(UniqueField::LicensePlate),
                    CNT_CAR_OWNER => DomainError::NotFound(Resource::User),
                    other => {
                        DomainError::Persistence(format!("database constraint violation: {other}"))
                    }
                };
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
