// src/presentation/http/controllers/users.rs
use crate::application::{
    commands::users::SaveUserCommand,
    dto::{PaginatedResult, UserDto},
    queries::users::ListUsersQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, IdPath, JsonBody, Pagination};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

/// Profile fields accepted on sign-up and update. Every field is optional at
/// the wire level so absent values surface as `Missing fields`.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// `dd/MM/yyyy`
    #[schema(example = "15/03/1990")]
    pub birth_date: Option<String>,
    pub email: Option<String>,
    pub login: Option<String>,
    /// Required on sign-up; on update a blank value keeps the current password.
    pub password: Option<String>,
    #[schema(example = "81988887777")]
    pub phone: Option<String>,
}

impl UserRequest {
    fn into_command(self, id: Option<i64>) -> SaveUserCommand {
        SaveUserCommand {
            id,
            first_name: self.first_name,
            last_name: self.last_name,
            birth_date: self.birth_date,
            email: self.email,
            login: self.login,
            password: self.password,
            phone: self.phone,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserRequest,
    responses(
        (status = 201, description = "User created.", body = crate::application::dto::UserDto),
        (status = 400, description = "Validation or uniqueness failure.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(()),
    tag = "Users"
)]
pub async fn create_user(
    Extension(state): Extension<HttpState>,
    JsonBody(payload): JsonBody<UserRequest>,
) -> HttpResult<(StatusCode, Json<UserDto>)> {
    let user = state
        .services
        .user_commands
        .save(payload.into_command(None))
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    get,
    path = "/api/users",
    params(crate::presentation::http::extractors::PageParams),
    responses(
        (status = 200, description = "Users ranked by total usage.", body = crate::application::dto::PaginatedResult<crate::application::dto::UserDto>),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn list_users(
    Extension(state): Extension<HttpState>,
    Authenticated(_principal): Authenticated,
    Pagination(params): Pagination,
) -> HttpResult<Json<PaginatedResult<UserDto>>> {
    state
        .services
        .user_queries
        .list_users(ListUsersQuery {
            page_number: params.page_number,
            page_size: params.page_size,
        })
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User found.", body = crate::application::dto::UserDto),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn get_user(
    Extension(state): Extension<HttpState>,
    Authenticated(_principal): Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_queries
        .get_by_id(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated.", body = crate::application::dto::UserDto),
        (status = 400, description = "Validation or uniqueness failure.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn update_user(
    Extension(state): Extension<HttpState>,
    Authenticated(_principal): Authenticated,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<UserRequest>,
) -> HttpResult<Json<UserDto>> {
    state
        .services
        .user_commands
        .save(payload.into_command(Some(id)))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    params(("id" = i64, Path, description = "User identifier")),
    responses(
        (status = 204, description = "User and their cars deleted."),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "User not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Users"
)]
pub async fn delete_user(
    Extension(state): Extension<HttpState>,
    Authenticated(_principal): Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<StatusCode> {
    state
        .services
        .user_commands
        .delete(id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
