use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use service::customer::domain::{CustomerId, CustomerRegistrationRequest, CustomerUpdateRequest, CustomerView};

use crate::{
    errors::JsonApiError,
    extract::{ApiJson, ApiPath},
    state::AppState,
};

#[utoipa::path(
    get, path = "/api/v1/customers", tag = "customers",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CustomerViewDoc]),
        (status = 500, description = "List Failed", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<CustomerView>>, JsonApiError> {
    let customers = state.customers.list().await?;
    Ok(Json(customers))
}

#[utoipa::path(
    get, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CustomerViewDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn get(State(state): State<AppState>, ApiPath(id): ApiPath<CustomerId>) -> Result<Json<CustomerView>, JsonApiError> {
    Ok(Json(state.customers.get(id).await?))
}

#[utoipa::path(
    post, path = "/api/v1/customers", tag = "customers",
    request_body = crate::openapi::CustomerRegistrationRequestDoc,
    responses(
        (status = 201, description = "Registered"),
        (status = 400, description = "Validation Error", body = crate::openapi::ErrorResponseDoc),
        (status = 409, description = "Email already taken", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ApiJson(input): ApiJson<CustomerRegistrationRequest>,
) -> Result<StatusCode, JsonApiError> {
    state.customers.register(input).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    request_body = crate::openapi::CustomerUpdateRequestDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "No data changes found", body = crate::openapi::ErrorResponseDoc),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponseDoc),
        (status = 409, description = "Email already taken", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<CustomerId>,
    ApiJson(input): ApiJson<CustomerUpdateRequest>,
) -> Result<StatusCode, JsonApiError> {
    state.customers.update(id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/v1/customers/{id}", tag = "customers",
    params(("id" = i64, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found", body = crate::openapi::ErrorResponseDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, ApiPath(id): ApiPath<CustomerId>) -> Result<StatusCode, JsonApiError> {
    state.customers.delete(id).await?;
    info!(id, "deleted customer");
    Ok(StatusCode::NO_CONTENT)
}
