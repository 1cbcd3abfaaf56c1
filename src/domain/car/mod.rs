// src/domain/car/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{Car, CarUpdate, NewCar};
pub use repository::CarRepository;
pub use specifications::CarOwnershipSpec;
pub use value_objects::{CarAttribute, CarId, LicensePlate, ModelYear};
