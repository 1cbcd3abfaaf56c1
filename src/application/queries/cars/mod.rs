mod get_by_id;
mod list;
mod service;

pub use list::ListCarsQuery;
pub use service::CarQueryService;
