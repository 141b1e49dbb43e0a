//! Service database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Service;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "services")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub code: String,
    pub default_price: Option<f64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Service {
    fn from(model: Model) -> Self {
        Service {
            id: Some(model.id),
            name: model.name,
            code: model.code,
            default_price: model.default_price,
        }
    }
}
