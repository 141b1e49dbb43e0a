//! Authentication service - Verifies credentials and mints JWT tokens.
//!
//! Tokens are minted only here; the auth middleware verifies them but
//! never issues one.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

use crate::config::Config;
use crate::domain::{Password, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// JWT claims payload
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i32,
    pub email: String,
    pub role: String,
    pub exp: i64,
    pub iat: i64,
}

/// Payload returned after successful authentication
#[derive(Debug, Serialize, ToSchema)]
pub struct AuthResponse {
    /// Signed JWT bearer token
    #[schema(example = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...")]
    pub token: String,
    /// The authenticated user, without password material
    pub user: UserResponse,
}

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Authenticate by email and password, returning a token and the user
    async fn login(&self, email: String, password: String) -> AppResult<AuthResponse>;

    /// Verify a JWT token and extract its claims
    fn verify_token(&self, token: &str) -> AppResult<Claims>;
}

/// Sign a token for an authenticated user
fn generate_token(user: &User, config: &Config) -> AppResult<String> {
    let id = user
        .id
        .ok_or_else(|| AppError::internal("Persisted user is missing an id"))?;

    let now = Utc::now();
    let expires_at = now + Duration::hours(config.jwt_expiration_hours);

    let claims = Claims {
        sub: id,
        email: user.email.clone(),
        role: user.role.to_string(),
        exp: expires_at.timestamp(),
        iat: now.timestamp(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret_bytes()),
    )
    .map_err(|e| AppError::internal(format!("Token encoding failed: {}", e)))
}

/// Concrete implementation of AuthService
pub struct Authenticator {
    repo: Arc<dyn UserRepository>,
    config: Config,
}

impl Authenticator {
    /// Create new auth service instance with repository and config
    pub fn new(repo: Arc<dyn UserRepository>, config: Config) -> Self {
        Self { repo, config }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, email: String, password: String) -> AppResult<AuthResponse> {
        let user_result = self.repo.find_by_email(&email).await?;

        // Verify against a dummy hash when the user is absent so that a
        // missing account takes as long as a wrong password; the response
        // does not reveal which of the two it was either.
        let dummy_hash =
            "$argon2id$v=19$m=19456,t=2,p=1$dummysalt123456$dummyhash1234567890123456789012";

        let (password_hash, user_exists) = match &user_result {
            Some(user) => (user.password_hash.as_str(), true),
            None => (dummy_hash, false),
        };

        let password_valid = Password::from_hash(password_hash.to_string()).verify(&password);

        if !user_exists || !password_valid {
            return Err(AppError::InvalidCredentials);
        }

        let user = user_result.expect("checked above");
        let token = generate_token(&user, &self.config)?;

        Ok(AuthResponse {
            token,
            user: UserResponse::from(user),
        })
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret_bytes()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}
