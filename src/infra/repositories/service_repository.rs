//! Service repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
    Unchanged,
};

use super::entities::service::{self, ActiveModel, Entity as ServiceEntity};
use crate::domain::Service;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ServiceRepository: Send + Sync {
    /// Insert when the service has no id, update otherwise.
    async fn save(&self, service: Service) -> AppResult<Service>;

    /// Find service by primary id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Service>>;

    /// Find service by code (natural key)
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Service>>;

    /// Delete service by id
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all services
    async fn list_all(&self) -> AppResult<Vec<Service>>;
}

/// Concrete implementation of ServiceRepository
pub struct ServiceStore {
    db: DatabaseConnection,
}

impl ServiceStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ServiceRepository for ServiceStore {
    async fn save(&self, svc: Service) -> AppResult<Service> {
        let active = ActiveModel {
            id: match svc.id {
                None => NotSet,
                Some(id) => Unchanged(id),
            },
            name: Set(svc.name),
            code: Set(svc.code),
            default_price: Set(svc.default_price),
        };

        let model = if svc.id.is_none() {
            active.insert(&self.db).await.map_err(AppError::from)?
        } else {
            active.update(&self.db).await.map_err(AppError::from)?
        };

        Ok(Service::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Service>> {
        let result = ServiceEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Service::from))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Service>> {
        let result = ServiceEntity::find()
            .filter(service::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Service::from))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ServiceEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Service"));
        }

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Service>> {
        let models = ServiceEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Service::from).collect())
    }
}
