//! Client database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Client;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "clients")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub code: Option<i32>,
    pub nickname: String,
    pub company_name: String,
    #[sea_orm(unique)]
    pub cnpj: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Client {
    fn from(model: Model) -> Self {
        Client {
            id: Some(model.id),
            code: model.code,
            nickname: model.nickname,
            company_name: model.company_name,
            cnpj: model.cnpj,
        }
    }
}
