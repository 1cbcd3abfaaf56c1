mod delete;
mod save;
mod service;
mod usage;

pub use save::SaveCarCommand;
pub use service::CarCommandService;
pub(crate) use service::load_owned_car;
