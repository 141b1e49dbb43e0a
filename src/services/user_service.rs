//! User service - Handles user-related business logic.
//!
//! Hashing happens here, through the Password value object, and only when a
//! raw password is actually supplied. Read-oriented methods return
//! `UserResponse`, which carries no password material.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateUser, Password, UpdateUser, User, UserResponse};
use crate::errors::{AppError, AppResult};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Register a new user; the email must be unused
    async fn register(&self, data: CreateUser) -> AppResult<User>;

    /// Get user by id
    async fn get_by_id(&self, id: i32) -> AppResult<UserResponse>;

    /// List all users
    async fn get_all(&self) -> AppResult<Vec<UserResponse>>;

    /// Apply a partial update; a changed email is re-checked, a new
    /// password is hashed
    async fn update(&self, id: i32, data: UpdateUser) -> AppResult<UserResponse>;

    /// Delete user by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of UserService
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, data: CreateUser) -> AppResult<User> {
        if self.repo.find_by_email(&data.email).await?.is_some() {
            return Err(AppError::conflict("User with this email already exists."));
        }

        let password_hash = Password::new(&data.password)?.into_string();
        let user = User::new(data.email, password_hash);
        self.repo.save(user).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<UserResponse> {
        self.repo
            .find_by_id(id)
            .await?
            .map(UserResponse::from)
            .ok_or(AppError::not_found("User"))
    }

    async fn get_all(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.repo.list_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    async fn update(&self, id: i32, data: UpdateUser) -> AppResult<UserResponse> {
        let mut user = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("User"))?;

        if let Some(email) = data.email {
            if email != user.email {
                if self.repo.find_by_email(&email).await?.is_some() {
                    return Err(AppError::conflict("User with this email already exists."));
                }
                user.email = email;
            }
        }

        // Credential update: hash only when a new raw password arrives,
        // never re-hash the stored hash
        if let Some(password) = data.password {
            user.password_hash = Password::new(&password)?.into_string();
        }

        let saved = self.repo.save(user).await?;
        Ok(UserResponse::from(saved))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("User"))?;

        self.repo.delete(id).await
    }
}
