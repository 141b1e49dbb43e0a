//! Service catalog service - Handles service-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{CreateService, Service, UpdateService};
use crate::errors::{AppError, AppResult};
use crate::infra::ServiceRepository;

/// Service catalog trait for dependency injection.
#[async_trait]
pub trait ServiceService: Send + Sync {
    /// Create a new service; the code must be unused
    async fn create(&self, data: CreateService) -> AppResult<Service>;

    /// Get service by id
    async fn get_by_id(&self, id: i32) -> AppResult<Service>;

    /// List all services
    async fn get_all(&self) -> AppResult<Vec<Service>>;

    /// Apply a partial update; a changed code is re-checked
    async fn update(&self, id: i32, data: UpdateService) -> AppResult<Service>;

    /// Delete service by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ServiceService
pub struct ServiceManager {
    repo: Arc<dyn ServiceRepository>,
}

impl ServiceManager {
    /// Create new service instance with repository
    pub fn new(repo: Arc<dyn ServiceRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ServiceService for ServiceManager {
    async fn create(&self, data: CreateService) -> AppResult<Service> {
        if self.repo.find_by_code(&data.code).await?.is_some() {
            return Err(AppError::conflict("Service with this code already exists."));
        }

        let service = Service::new(data.name, data.code, data.default_price);
        self.repo.save(service).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Service> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("Service"))
    }

    async fn get_all(&self) -> AppResult<Vec<Service>> {
        self.repo.list_all().await
    }

    async fn update(&self, id: i32, data: UpdateService) -> AppResult<Service> {
        let mut service = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("Service"))?;

        if let Some(code) = data.code {
            if code != service.code {
                if self.repo.find_by_code(&code).await?.is_some() {
                    return Err(AppError::conflict("Service code already in use."));
                }
                service.code = code;
            }
        }

        if let Some(name) = data.name {
            service.name = name;
        }
        if let Some(default_price) = data.default_price {
            service.default_price = Some(default_price);
        }

        self.repo.save(service).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("Service"))?;

        self.repo.delete(id).await
    }
}
