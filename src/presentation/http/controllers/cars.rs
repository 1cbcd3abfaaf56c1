// src/presentation/http/controllers/cars.rs
use crate::application::{
    commands::cars::SaveCarCommand,
    dto::{CarDto, PaginatedResult},
    queries::cars::ListCarsQuery,
};
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{Authenticated, IdPath, JsonBody, Pagination};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct CarRequest {
    #[schema(example = 2018)]
    pub year: Option<i32>,
    #[schema(example = "PLK-6721")]
    pub license_plate: Option<String>,
    pub model: Option<String>,
    pub color: Option<String>,
}

impl CarRequest {
    fn into_command(self, id: Option<i64>) -> SaveCarCommand {
        SaveCarCommand {
            id,
            year: self.year,
            license_plate: self.license_plate,
            model: self.model,
            color: self.color,
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/cars",
    request_body = CarRequest,
    responses(
        (status = 201, description = "Car created for the caller.", body = crate::application::dto::CarDto),
        (status = 400, description = "Validation or uniqueness failure.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn create_car(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    JsonBody(payload): JsonBody<CarRequest>,
) -> HttpResult<(StatusCode, Json<CarDto>)> {
    let car = state
        .services
        .car_commands
        .save(&principal, payload.into_command(None))
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(car)))
}

#[utoipa::path(
    get,
    path = "/api/cars",
    params(crate::presentation::http::extractors::PageParams),
    responses(
        (status = 200, description = "The caller's cars, most used first.", body = crate::application::dto::PaginatedResult<crate::application::dto::CarDto>),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn list_cars(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    Pagination(params): Pagination,
) -> HttpResult<Json<PaginatedResult<CarDto>>> {
    state
        .services
        .car_queries
        .list_cars(
            &principal,
            ListCarsQuery {
                page_number: params.page_number,
                page_size: params.page_size,
            },
        )
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/api/cars/{id}",
    params(("id" = i64, Path, description = "Car identifier")),
    responses(
        (status = 200, description = "Car found; counts as one use.", body = crate::application::dto::CarDto),
        (status = 400, description = "Car belongs to another user.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Car not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn get_car(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<Json<CarDto>> {
    state
        .services
        .car_queries
        .get_by_id(&principal, id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    put,
    path = "/api/cars/{id}",
    params(("id" = i64, Path, description = "Car identifier")),
    request_body = CarRequest,
    responses(
        (status = 200, description = "Car updated.", body = crate::application::dto::CarDto),
        (status = 400, description = "Validation, uniqueness or ownership failure.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Car not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn update_car(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    IdPath(id): IdPath,
    JsonBody(payload): JsonBody<CarRequest>,
) -> HttpResult<Json<CarDto>> {
    state
        .services
        .car_commands
        .save(&principal, payload.into_command(Some(id)))
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/api/cars/{id}",
    params(("id" = i64, Path, description = "Car identifier")),
    responses(
        (status = 204, description = "Car deleted."),
        (status = 400, description = "Car belongs to another user.", body = crate::presentation::http::error::ErrorResponse),
        (status = 401, description = "Unauthorized.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Car not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    security(("bearerAuth" = [])),
    tag = "Cars"
)]
pub async fn delete_car(
    Extension(state): Extension<HttpState>,
    Authenticated(principal): Authenticated,
    IdPath(id): IdPath,
) -> HttpResult<StatusCode> {
    state
        .services
        .car_commands
        .delete(&principal, id)
        .await
        .into_http()?;

    Ok(StatusCode::NO_CONTENT)
}
