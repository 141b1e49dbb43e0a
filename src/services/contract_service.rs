//! Contract service - Handles contract-related business logic.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{Contract, CreateContract, UpdateContract};
use crate::errors::{AppError, AppResult};
use crate::infra::ContractRepository;

/// Contract service trait for dependency injection.
#[async_trait]
pub trait ContractService: Send + Sync {
    /// Create a new contract; the contract code must be unused
    async fn create(&self, data: CreateContract) -> AppResult<Contract>;

    /// Get contract by id
    async fn get_by_id(&self, id: i32) -> AppResult<Contract>;

    /// List all contracts
    async fn get_all(&self) -> AppResult<Vec<Contract>>;

    /// List contracts belonging to a client
    async fn get_by_client(&self, client_id: i32) -> AppResult<Vec<Contract>>;

    /// Apply a partial update; a changed contract code is re-checked
    async fn update(&self, id: i32, data: UpdateContract) -> AppResult<Contract>;

    /// Delete contract by id
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of ContractService
pub struct ContractManager {
    repo: Arc<dyn ContractRepository>,
}

impl ContractManager {
    /// Create new contract service instance with repository
    pub fn new(repo: Arc<dyn ContractRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl ContractService for ContractManager {
    async fn create(&self, data: CreateContract) -> AppResult<Contract> {
        if self.repo.find_by_code(&data.contract_code).await?.is_some() {
            return Err(AppError::conflict(
                "Contract with this code already exists.",
            ));
        }

        let contract = Contract {
            id: None,
            contract_code: data.contract_code,
            client_id: data.client_id,
            service_id: data.service_id,
            quantity: data.quantity,
            unit_price: data.unit_price,
            start_date: data.start_date,
            end_date: data.end_date,
            status: data.status,
            observation: data.observation,
        };

        self.repo.save(contract).await
    }

    async fn get_by_id(&self, id: i32) -> AppResult<Contract> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("Contract"))
    }

    async fn get_all(&self) -> AppResult<Vec<Contract>> {
        self.repo.list_all().await
    }

    async fn get_by_client(&self, client_id: i32) -> AppResult<Vec<Contract>> {
        self.repo.find_by_client_id(client_id).await
    }

    async fn update(&self, id: i32, data: UpdateContract) -> AppResult<Contract> {
        let mut contract = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("Contract"))?;

        if let Some(contract_code) = data.contract_code {
            if contract_code != contract.contract_code {
                if self.repo.find_by_code(&contract_code).await?.is_some() {
                    return Err(AppError::conflict(
                        "Contract code is already in use by another contract.",
                    ));
                }
                contract.contract_code = contract_code;
            }
        }

        if let Some(client_id) = data.client_id {
            contract.client_id = client_id;
        }
        if let Some(service_id) = data.service_id {
            contract.service_id = service_id;
        }
        if let Some(quantity) = data.quantity {
            contract.quantity = quantity;
        }
        if let Some(unit_price) = data.unit_price {
            contract.unit_price = unit_price;
        }
        if let Some(start_date) = data.start_date {
            contract.start_date = start_date;
        }
        if let Some(end_date) = data.end_date {
            contract.end_date = end_date;
        }
        if let Some(status) = data.status {
            contract.status = status;
        }
        if let Some(observation) = data.observation {
            contract.observation = observation;
        }

        self.repo.save(contract).await
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(AppError::not_found("Contract"))?;

        self.repo.delete(id).await
    }
}
