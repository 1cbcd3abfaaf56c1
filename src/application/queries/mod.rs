pub mod cars;
pub mod users;
