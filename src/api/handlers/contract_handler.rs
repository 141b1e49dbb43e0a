//! Contract handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Contract, CreateContract, UpdateContract};
use crate::errors::AppResult;
use crate::types::{Created, NoContent};

/// Create contract routes
pub fn contract_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create).get(get_all))
        .route("/:id", get(get_by_id).patch(update).delete(remove))
}

/// Create a new contract
#[utoipa::path(
    post,
    path = "/contracts",
    tag = "Contracts",
    request_body = CreateContract,
    responses(
        (status = 201, description = "Contract created", body = Contract),
        (status = 400, description = "Validation failure or duplicate contract code"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateContract>,
) -> AppResult<Created<Contract>> {
    let contract = state.contract_service.create(payload).await?;
    Ok(Created(contract))
}

/// Get a contract by id
#[utoipa::path(
    get,
    path = "/contracts/{id}",
    tag = "Contracts",
    params(("id" = i32, Path, description = "Contract id")),
    responses(
        (status = 200, description = "Contract found", body = Contract),
        (status = 404, description = "Contract not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Contract>> {
    let contract = state.contract_service.get_by_id(id).await?;
    Ok(Json(contract))
}

/// List all contracts
#[utoipa::path(
    get,
    path = "/contracts",
    tag = "Contracts",
    responses((status = 200, description = "All contracts", body = [Contract])),
    security(("bearer_auth" = []))
)]
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<Contract>>> {
    let contracts = state.contract_service.get_all().await?;
    Ok(Json(contracts))
}

/// Update a contract
#[utoipa::path(
    patch,
    path = "/contracts/{id}",
    tag = "Contracts",
    params(("id" = i32, Path, description = "Contract id")),
    request_body = UpdateContract,
    responses(
        (status = 200, description = "Contract updated", body = Contract),
        (status = 400, description = "Validation failure or conflicting contract code"),
        (status = 404, description = "Contract not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateContract>,
) -> AppResult<Json<Contract>> {
    let contract = state.contract_service.update(id, payload).await?;
    Ok(Json(contract))
}

/// Delete a contract
#[utoipa::path(
    delete,
    path = "/contracts/{id}",
    tag = "Contracts",
    params(("id" = i32, Path, description = "Contract id")),
    responses(
        (status = 204, description = "Contract deleted"),
        (status = 404, description = "Contract not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<NoContent> {
    state.contract_service.delete(id).await?;
    Ok(NoContent)
}
