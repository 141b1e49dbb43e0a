//! Client repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, NotSet, QueryFilter, Set,
    Unchanged,
};

use super::entities::client::{self, ActiveModel, Entity as ClientEntity};
use crate::domain::Client;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Client repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert when the client has no id, update otherwise. Returns the
    /// client with its assigned identity.
    async fn save(&self, client: Client) -> AppResult<Client>;

    /// Find client by primary id
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Client>>;

    /// Find client by CNPJ (natural key)
    async fn find_by_cnpj(&self, cnpj: &str) -> AppResult<Option<Client>>;

    /// Find client by internal numeric code
    async fn find_by_code(&self, code: i32) -> AppResult<Option<Client>>;

    /// Delete client by id
    async fn delete(&self, id: i32) -> AppResult<()>;

    /// List all clients
    async fn list_all(&self) -> AppResult<Vec<Client>>;
}

/// Concrete implementation of ClientRepository
pub struct ClientStore {
    db: DatabaseConnection,
}

impl ClientStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClientRepository for ClientStore {
    async fn save(&self, client: Client) -> AppResult<Client> {
        let active = ActiveModel {
            id: match client.id {
                None => NotSet,
                Some(id) => Unchanged(id),
            },
            code: Set(client.code),
            nickname: Set(client.nickname),
            company_name: Set(client.company_name),
            cnpj: Set(client.cnpj),
        };

        let model = if client.id.is_none() {
            active.insert(&self.db).await.map_err(AppError::from)?
        } else {
            active.update(&self.db).await.map_err(AppError::from)?
        };

        Ok(Client::from(model))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Client>> {
        let result = ClientEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Client::from))
    }

    async fn find_by_cnpj(&self, cnpj: &str) -> AppResult<Option<Client>> {
        let result = ClientEntity::find()
            .filter(client::Column::Cnpj.eq(cnpj))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Client::from))
    }

    async fn find_by_code(&self, code: i32) -> AppResult<Option<Client>> {
        let result = ClientEntity::find()
            .filter(client::Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Client::from))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = ClientEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Client"));
        }

        Ok(())
    }

    async fn list_all(&self) -> AppResult<Vec<Client>> {
        let models = ClientEntity::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Client::from).collect())
    }
}
