//! Service catalog handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{CreateService, Service, UpdateService};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Updated};

/// Create service routes
pub fn service_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(get_all))
        .route("/:id", get(get_by_id).patch(update).delete(remove))
}

/// Create a new service
#[utoipa::path(
    post,
    path = "/services",
    tag = "Services",
    request_body = CreateService,
    responses(
        (status = 201, description = "Service created", body = Service),
        (status = 400, description = "Validation failure or duplicate code"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateService>,
) -> AppResult<Created<Service>> {
    let service = state.service_service.create(payload).await?;
    Ok(Created(service))
}

/// Get a service by id
#[utoipa::path(
    get,
    path = "/services/{id}",
    tag = "Services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 200, description = "Service found", body = Service),
        (status = 404, description = "Service not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Service>> {
    let service = state.service_service.get_by_id(id).await?;
    Ok(Json(service))
}

/// List all services
#[utoipa::path(
    get,
    path = "/services",
    tag = "Services",
    responses((status = 200, description = "All services", body = [Service])),
    security(("bearer_auth" = []))
)]
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<Service>>> {
    let services = state.service_service.get_all().await?;
    Ok(Json(services))
}

/// Update a service
#[utoipa::path(
    patch,
    path = "/services/{id}",
    tag = "Services",
    params(("id" = i32, Path, description = "Service id")),
    request_body = UpdateService,
    responses(
        (status = 200, description = "Service updated", body = Service),
        (status = 400, description = "Validation failure or conflicting code"),
        (status = 404, description = "Service not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateService>,
) -> AppResult<Updated<Service>> {
    let service = state.service_service.update(id, payload).await?;
    Ok(Updated::new(service, "Service updated successfully"))
}

/// Delete a service
#[utoipa::path(
    delete,
    path = "/services/{id}",
    tag = "Services",
    params(("id" = i32, Path, description = "Service id")),
    responses(
        (status = 204, description = "Service deleted"),
        (status = 404, description = "Service not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<NoContent> {
    state.service_service.delete(id).await?;
    Ok(NoContent)
}
