pub mod auth;
pub mod cars;
pub mod pagination;
pub mod serde_time;
pub mod users;

pub use auth::{AuthTokenDto, Principal, SignInDto, TokenClaims, TokenSubject};
pub use cars::CarDto;
pub use pagination::PaginatedResult;
pub use users::UserDto;
