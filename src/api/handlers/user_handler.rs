//! User management handlers (protected).

use axum::{extract::State, response::Json, routing::get, Router};

use crate::api::extractors::{IdPath, ValidatedJson};
use crate::api::AppState;
use crate::domain::{UpdateUser, UserResponse};
use crate::errors::AppResult;
use crate::types::{NoContent, Updated};

/// Create user management routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_all))
        .route("/:id", get(get_by_id).patch(update).delete(remove))
}

/// Get a user by id
#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserResponse),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    IdPath(id): IdPath,
) -> AppResult<Json<UserResponse>> {
    let user = state.user_service.get_by_id(id).await?;
    Ok(Json(user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses((status = 200, description = "All users", body = [UserResponse])),
    security(("bearer_auth" = []))
)]
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<Vec<UserResponse>>> {
    let users = state.user_service.get_all().await?;
    Ok(Json(users))
}

/// Update a user's email and/or password
#[utoipa::path(
    patch,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = UserResponse),
        (status = 400, description = "Validation failure or conflicting email"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update(
    State(state): State<AppState>,
    IdPath(id): IdPath,
    ValidatedJson(payload): ValidatedJson<UpdateUser>,
) -> AppResult<Updated<UserResponse>> {
    let user = state.user_service.update(id, payload).await?;
    Ok(Updated::new(user, "User updated successfully"))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn remove(State(state): State<AppState>, IdPath(id): IdPath) -> AppResult<NoContent> {
    state.user_service.delete(id).await?;
    Ok(NoContent)
}
