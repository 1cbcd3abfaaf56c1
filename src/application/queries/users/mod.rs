mod get_by_id;
mod list;
mod profile;
mod service;

pub use list::ListUsersQuery;
pub use service::UserQueryService;
