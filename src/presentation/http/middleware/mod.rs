pub mod authenticate;
pub mod usage;

pub use authenticate::require_principal;
pub use usage::track_car_usage;
