// src/domain/mod.rs
pub mod car;
pub mod errors;
pub mod pagination;
pub mod user;

pub use errors::{DomainError, DomainResult, Resource, UniqueField};
