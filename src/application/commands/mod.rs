pub mod cars;
mod fields;
pub mod users;
