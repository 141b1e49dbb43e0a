//! User repository implementation.
//!
//! Passwords arrive here already hashed; this layer never touches raw
//! credential material.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
    Unchanged,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::User;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert when the user has no id, update otherwise.
    async fn save(&self, user: User) -> AppResult<User>;

    /// Find user by primary id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>>;

    /// Find user by email address (natural key)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Delete user by id
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all users
    async fn list_all(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn save(&self, user: User) -> AppResult<User> {
        let active = ActiveModel {
            id: match user.id {
                None => NotSet,
                Some(id) => Unchanged(id),
            },
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            role: Set(user.role.to_string()),
        };

        let model = if user.id.is_none() {
            active.insert(&self.db).await.map_err(AppError::from)?
        } else {
            active.update(&self.db).await.map_err(AppError::from)?
        };

        Ok(User::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<User>> {
        let result = UserEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(User::from))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = UserEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("User"));
        }

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<User>> {
        let models = UserEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(User::from).collect())
    }
}
