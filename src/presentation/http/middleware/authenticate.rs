// src/presentation/http/middleware/authenticate.rs
use crate::application::error::ApplicationError;
use crate::presentation::http::error::HttpError;
use crate::presentation::http::state::HttpState;
use axum::{
    Extension,
    extract::Request,
    http::{HeaderMap, Method, header::AUTHORIZATION},
    middleware::Next,
    response::{IntoResponse, Response},
};

const PROTECTED_PREFIX: &str = "/api/";

/// Routes under `/api/` reachable without a token.
const PUBLIC_ROUTES: &[(Method, &str)] = &[(Method::POST, "/api/signin"), (Method::POST, "/api/users")];

fn is_public(method: &Method, path: &str) -> bool {
    let path = path.trim_end_matches('/');
    let protected = path.starts_with(PROTECTED_PREFIX) || path == "/api";
    !protected
        || PUBLIC_ROUTES
            .iter()
            .any(|(m, p)| m == method && *p == path)
}

/// `None` when the header is absent; a non-text header value is an invalid token.
fn authorization_header(headers: &HeaderMap) -> Result<Option<&str>, ApplicationError> {
    headers
        .get(AUTHORIZATION)
        .map(|value| value.to_str().map_err(|_| ApplicationError::InvalidToken))
        .transpose()
}

/// Resolves the caller of every protected route and stores the principal in
/// the request extensions.
pub async fn require_principal(
    Extension(state): Extension<HttpState>,
    mut req: Request,
    next: Next,
) -> Response {
    if is_public(req.method(), req.uri().path()) {
        return next.run(req).await;
    }

    let resolved = match authorization_header(req.headers()) {
        Ok(header) => state.services.resolve_principal(header).await,
        Err(err) => Err(err),
    };

    match resolved {
        Ok(principal) => {
            tracing::debug!(user_id = %principal.id(), "principal resolved");
            req.extensions_mut().insert(principal);
            next.run(req).await
        }
        Err(err) => {
            tracing::info!(
                method = %req.method(),
                path = %req.uri().path(),
                error = %err,
                "request rejected by authentication"
            );
            HttpError::from_error(err).into_response()
        }
    }
}
