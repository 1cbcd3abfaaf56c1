use super::ApplicationServices;
use crate::{
    application::{
        dto::Principal,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Login,
};

pub const BEARER_PREFIX: &str = "Bearer ";

/// Returns the token carried by a `Bearer` authorization header.
pub fn extract_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl ApplicationServices {
    /// Turns the raw `Authorization` header of a request into the calling user.
    ///
    /// A missing or blank header is `Unauthorized`; a header that is not a
    /// bearer token, or whose token fails verification, is `InvalidToken`; a
    /// valid token for a login that no longer exists is `NotFound`.
    pub async fn resolve_principal(&self, authorization: Option<&str>) -> ApplicationResult<Principal> {
        let header = authorization
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or(ApplicationError::Unauthorized)?;
        let token = extract_bearer(header).ok_or(ApplicationError::InvalidToken)?;

        let claims = self.token_manager.authenticate(token).await?;
        let login = Login::new(&claims.login).map_err(|_| ApplicationError::InvalidToken)?;

        let user = self.user_queries.find_by_login(&login).await?;

        Ok(Principal {
            user,
            role: claims.role,
            issued_at: claims.issued_at,
            expires_at: claims.expires_at,
        })
    }
}
