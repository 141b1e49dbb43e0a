//! Authentication handlers: registration and login.
//!
//! These are the only public routes; everything else sits behind the
//! bearer-token middleware.

use axum::{extract::State, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::AppState;
use crate::domain::{CreateUser, UserResponse};
use crate::errors::AppResult;
use crate::services::AuthResponse;
use crate::types::Created;

/// User login request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    #[schema(example = "user@example.com")]
    pub email: String,
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "Authentication",
    request_body = CreateUser,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Validation failure or duplicate email")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateUser>,
) -> AppResult<Created<UserResponse>> {
    let user = state.user_service.register(payload).await?;
    Ok(Created(UserResponse::from(user)))
}

/// Login and get a bearer token
#[utoipa::path(
    post,
    path = "/users/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = AuthResponse),
        (status = 400, description = "Validation failure"),
        (status = 401, description = "Incorrect email or password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<AuthResponse>> {
    let result = state
        .auth_service
        .login(payload.email, payload.password)
        .await?;

    Ok(Json(result))
}
