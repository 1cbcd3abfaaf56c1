// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Unauthorized - permission denied")]
    PermissionDenied,

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid Token")]
    InvalidToken,

    #[error("Invalid login or password")]
    BadCredentials,

    #[error("{0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn missing_fields() -> Self {
        Self::Domain(DomainError::MissingFields)
    }

    pub fn invalid_fields() -> Self {
        Self::Domain(DomainError::InvalidFields)
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }
}
