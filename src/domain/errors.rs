// src/domain/errors.rs
use std::fmt;
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Fields that must stay unique across the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Login,
    Email,
    LicensePlate,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Login => "Login already exists",
            Self::Email => "Email already exists",
            Self::LicensePlate => "License plate already exists",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Car,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::User => "User not found",
            Self::Car => "Car not found",
        })
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Missing fields")]
    MissingFields,
    #[error("Invalid fields")]
    InvalidFields,
    #[error("{0}")]
    AlreadyExists(UniqueField),
    #[error("{0}")]
    NotFound(Resource),
    #[error("persistence error: {0}")]
    Persistence(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_the_wire_contract() {
        assert_eq!(DomainError::MissingFields.to_string(), "Missing fields");
        assert_eq!(
            DomainError::AlreadyExists(UniqueField::LicensePlate).to_string(),
            "License plate already exists"
        );
        assert_eq!(
            DomainError::NotFound(Resource::Car).to_string(),
            "Car not found"
        );
    }
}
