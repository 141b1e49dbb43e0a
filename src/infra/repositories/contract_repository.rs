//! Contract repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
    Unchanged,
};

use super::entities::contract::{self, ActiveModel, Entity as ContractEntity};
use crate::domain::Contract;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Contract repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ContractRepository: Send + Sync {
    /// Insert when the contract has no id, update otherwise.
    async fn save(&self, contract: Contract) -> AppResult<Contract>;

    /// Find contract by primary id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Contract>>;

    /// Find contract by contract code (natural key)
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Contract>>;

    /// List contracts belonging to a client
    async fn find_by_client_id(&self, client_id: i32) -> AppResult<Vec<Contract>>;

    /// Delete contract by id
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all contracts
    async fn list_all(&self) -> AppResult<Vec<Contract>>;
}

/// Concrete implementation of ContractRepository
pub struct ContractStore {
    db: DatabaseConnection,
}

impl ContractStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ContractRepository for ContractStore {
    async fn save(&self, contract: Contract) -> AppResult<Contract> {
        let active = ActiveModel {
            id: match contract.id {
                None => NotSet,
                Some(id) => Unchanged(id),
            },
            contract_code: Set(contract.contract_code),
            client_id: Set(contract.client_id),
            service_id: Set(contract.service_id),
            quantity: Set(contract.quantity),
            unit_price: Set(contract.unit_price),
            start_date: Set(contract.start_date),
            end_date: Set(contract.end_date),
            status: Set(contract.status.to_string()),
            observation: Set(contract.observation),
        };

        let model = if contract.id.is_none() {
            active.insert(&self.db).await.map_err(AppError::from)?
        } else {
            active.update(&self.db).await.map_err(AppError::from)?
        };

        Ok(Contract::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Contract>> {
        let result = ContractEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Contract::from))
    }

    async fn find_by_code(&self, code: &str) -> AppResult<Option<Contract>> {
        let result = ContractEntity::find()
            .filter(contract::Column::ContractCode.eq(code))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Contract::from))
    }

    async fn find_by_client_id(&self, client_id: i32) -> AppResult<Vec<Contract>> {
        let models = ContractEntity::find()
            .filter(contract::Column::ClientId.eq(client_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Contract::from).collect())
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ContractEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Contract"));
        }

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Contract>> {
        let models = ContractEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Contract::from).collect())
    }
}
