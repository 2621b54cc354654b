//! Product database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::Product;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "products")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    /// `type` is a Rust keyword, so the field is named `kind`
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub sku: String,
    pub image_url: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Product {
    fn from(model: Model) -> Self {
        Product {
            id: model.id,
            name: model.name,
            kind: model.kind,
            sku: model.sku,
            image_url: model.image_url,
            description: model.description,
            quantity: model.quantity,
            price: model.price,
        }
    }
}
