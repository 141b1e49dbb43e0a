//! Contract database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Contract, ContractStatus};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "contracts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub contract_code: String,
    pub client_id: i32,
    pub service_id: i32,
    pub quantity: i32,
    pub unit_price: f64,
    pub start_date: Date,
    pub end_date: Option<Date>,
    pub status: String,
    pub observation: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Contract {
    fn from(model: Model) -> Self {
        Contract {
            id: Some(model.id),
            contract_code: model.contract_code,
            client_id: model.client_id,
            service_id: model.service_id,
            quantity: model.quantity,
            unit_price: model.unit_price,
            start_date: model.start_date,
            end_date: model.end_date,
            status: ContractStatus::from(model.status.as_str()),
            observation: model.observation,
        }
    }
}
