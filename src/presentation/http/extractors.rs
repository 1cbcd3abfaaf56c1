// src/presentation/http/extractors.rs
use crate::application::{dto::Principal, error::ApplicationError};
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::{Deserialize, de::DeserializeOwned};
use utoipa::IntoParams;

use super::error::HttpError;

/// The caller resolved by the authentication middleware.
#[derive(Debug, Clone)]
pub struct Authenticated(pub Principal);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Principal>()
            .cloned()
            .map(Self)
            .ok_or_else(|| HttpError::from_error(ApplicationError::Unauthorized))
    }
}

/// JSON request body. An empty body is `Missing fields`; anything that does
/// not deserialize is `Invalid fields`.
#[derive(Debug, Clone)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| HttpError::from_error(ApplicationError::invalid_fields()))?;

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Err(HttpError::from_error(ApplicationError::missing_fields()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(|err| {
                tracing::debug!(error = %err, "request body rejected");
                HttpError::from_error(ApplicationError::invalid_fields())
            })
    }
}

/// Numeric `{id}` path segment.
#[derive(Debug, Clone, Copy)]
pub struct IdPath(pub i64);

impl<S> FromRequestParts<S> for IdPath
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Path::<i64>::from_request_parts(parts, state)
            .await
            .map(|Path(id)| Self(id))
            .map_err(|_| HttpError::from_error(ApplicationError::invalid_fields()))
    }
}

fn default_page_size() -> u32 {
    crate::domain::pagination::DEFAULT_PAGE_SIZE
}

#[derive(Debug, Clone, Copy, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query, rename_all = "camelCase")]
pub struct PageParams {
    /// Zero-based page index.
    #[serde(default)]
    pub page_number: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// `pageNumber`/`pageSize` query parameters.
#[derive(Debug, Clone, Copy)]
pub struct Pagination(pub PageParams);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<PageParams>::from_request_parts(parts, state)
            .await
            .map(|Query(params)| Self(params))
            .map_err(|_| HttpError::from_error(ApplicationError::invalid_fields()))
    }
}
