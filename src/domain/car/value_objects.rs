// src/domain/car/value_objects.rs
use crate::domain::errors::{DomainError, DomainResult};
use std::fmt;

pub const LICENSE_PLATE_LENGTH: usize = 8;
pub const FIRST_MODEL_YEAR: i32 = 1885;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CarId(pub i64);

impl CarId {
    pub fn new(id: i64) -> DomainResult<Self> {
        if id <= 0 {
            Err(DomainError::InvalidFields)
        } else {
            Ok(Self(id))
        }
    }
}

impl From<CarId> for i64 {
    fn from(value: CarId) -> Self {
        value.0
    }
}

impl fmt::Display for CarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed-length plate, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicensePlate(String);

impl LicensePlate {
    pub fn new(value: impl AsRef<str>) -> DomainResult<Self> {
        let value = value.as_ref();
        if value.trim().is_empty() {
            return Err(DomainError::MissingFields);
        }
        if value.chars().count() != LICENSE_PLATE_LENGTH {
            return Err(DomainError::InvalidFields);
        }
        Ok(Self(value.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<LicensePlate> for String {
    fn from(value: LicensePlate) -> Self {
        value.0
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelYear(i32);

impl ModelYear {
    /// Accepts 1885 up to and including `current_year`.
    pub fn new(year: i32, current_year: i32) -> DomainResult<Self> {
        if (FIRST_MODEL_YEAR..=current_year).contains(&year) {
            Ok(Self(year))
        } else {
            Err(DomainError::InvalidFields)
        }
    }

    pub fn from_stored(year: i32) -> Self {
        Self(year)
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

/// Free-text car attribute such as model or color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarAttribute(String);

impl CarAttribute {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::MissingFields);
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<CarAttribute> for String {
    fn from(value: CarAttribute) -> Self {
        value.0
    }
}
