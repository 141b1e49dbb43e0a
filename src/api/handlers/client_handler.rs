//! Client handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{Client, Contract, CreateClient, UpdateClient};
use crate::errors::AppResult;
use crate::types::{Created, NoContent, Updated};

/// Create client routes
pub fn client_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(register).get(get_all))
        .route("/:id", get(get_by_id).patch(update).delete(remove))
        .route("/:id/contracts", get(contracts_by_client))
}

/// Register a new client
#[utoipa::path(
    post,
    path = "/clients",
    tag = "Clients",
    request_body = CreateClient,
    responses(
        (status = 201, description = "Client registered", body = Client),
        (status = 400, description = "Validation failure or duplicate CNPJ/code"),
        (status = 401, description = "Missing or invalid token")
    ),
    security(("bearer_auth" = []))
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateClient>,
) -> AppResult<Created<Client>> {
    let client = state.client_service.register(payload).await?;
    Ok(Created(client))
}

/// Get a client by id
#[utoipa::path(
    get,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 200, description = "Client found", body = Client),
        (status = 404, description = "Client not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Client>> {
    let client = state.client_service.get_by_id(id).await?;
    Ok(Json(client))
}

/// List all clients
#[utoipa::path(
    get,
    path = "/clients",
    tag = "Clients",
    responses((status = 200, description = "All clients", body = [Client])),
    security(("bearer_auth" = []))
)]
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<Client>>> {
    let clients = state.client_service.get_all().await?;
    Ok(Json(clients))
}

/// Update a client
#[utoipa::path(
    patch,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client id")),
    request_body = UpdateClient,
    responses(
        (status = 200, description = "Client updated", body = Client),
        (status = 400, description = "Validation failure or conflicting CNPJ/code"),
        (status = 404, description = "Client not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateClient>,
) -> AppResult<Updated<Client>> {
    let client = state.client_service.update(id, payload).await?;
    Ok(Updated::new(client, "Client updated successfully"))
}

/// Delete a client
#[utoipa::path(
    delete,
    path = "/clients/{id}",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client id")),
    responses(
        (status = 204, description = "Client deleted"),
        (status = 404, description = "Client not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<NoContent> {
    state.client_service.delete(id).await?;
    Ok(NoContent)
}

/// List contracts belonging to a client
#[utoipa::path(
    get,
    path = "/clients/{id}/contracts",
    tag = "Clients",
    params(("id" = i32, Path, description = "Client id")),
    responses((status = 200, description = "Contracts for the client", body = [Contract])),
    security(("bearer_auth" = []))
)]
pub async fn contracts_by_client(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<Vec<Contract>>> {
    let contracts = state.contract_service.get_by_client(id).await?;
    Ok(Json(contracts))
}
