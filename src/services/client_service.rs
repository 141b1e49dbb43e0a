//! Client service - Handles client-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Client, CreateClient, UpdateClient};
use crate::errors::{AppError, AppResult};
use crate::infra::ClientRepository;

/// Client service trait for dependency injection.
#[async_trait]
pub trait ClientService: Send + Sync {
    /// Register a new client; CNPJ and code must be unused
    async fn register(&self, data: CreateClient) -> AppResult<Client>;

    /// Get client by id
    async fn get_by_id(&self, id: i32) -> AppResult<Client>;

    /// List all clients
    async fn get_all(&self) -> AppResult<Vec<Client>>;

    /// Apply a partial update; changed unique fields are re-checked
    async fn update(&self, id: i32, data: UpdateClient) -> AppResult<Client>;

    /// Delete client by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ClientService
pub struct ClientManager {
    repo: Arc<dyn ClientRepository>,
}

impl ClientManager {
    /// Create new client service instance with repository
    pub fn new(repo: Arc<dyn ClientRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ClientService for ClientManager {
    async fn register(&self, data: CreateClient) -> AppResult<Client> {
        if self.repo.find_by_cnpj(&data.cnpj).await?.is_some() {
            return Err(AppError::conflict("Client with this CNPJ already exists."));
        }

        if let Some(code) = data.code {
            if self.repo.find_by_code(code).await?.is_some() {
                return Err(AppError::conflict("Client with this Code already exists."));
            }
        }

        let client = Client::new(data.code, data.nickname, data.company_name, data.cnpj);
        self.repo.save(client).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Client> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("Client"))
    }

    async fn get_all(&self) -> AppResult<Vec<Client>> {
        self.repo.list_all().await
    }

    async fn update(&self, id: i32, data: UpdateClient) -> AppResult<Client> {
        let mut client = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("Client"))?;

        if let Some(cnpj) = data.cnpj {
            if cnpj != client.cnpj {
                if self.repo.find_by_cnpj(&cnpj).await?.is_some() {
                    return Err(AppError::conflict(
                        "CNPJ is already in use by another client.",
                    ));
                }
                client.cnpj = cnpj;
            }
        }

        // Outer Option is presence, inner Option allows clearing the code
        if let Some(code) = data.code {
            if code != client.code {
                if let Some(new_code) = code {
                    if self.repo.find_by_code(new_code).await?.is_some() {
                        return Err(AppError::conflict(
                            "Code is already in use by another client.",
                        ));
                    }
                }
                client.code = code;
            }
        }

        if let Some(nickname) = data.nickname {
            client.nickname = nickname;
        }
        if let Some(company_name) = data.company_name {
            client.company_name = company_name;
        }

        self.repo.save(client).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("Client"))?;

        self.repo.delete(id).await
    }
}
