mod delete;
mod password;
mod save;
mod service;
mod sign_in;
mod sweep;
mod usage;

pub use save::SaveUserCommand;
pub use service::UserCommandService;
pub use sign_in::SignInCommand;
pub use sweep::INACTIVITY_WINDOW_DAYS;
