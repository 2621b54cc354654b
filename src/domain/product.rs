//! Product domain entity.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Product domain entity
///
/// `kind` serializes as `type` on the wire. The quantity field is the
/// only mutable piece of state; there is no delete operation. SKUs are
/// not required to be unique.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Unique product identifier
    #[schema(example = 1)]
    pub id: i32,
    /// Product name
    #[schema(example = "Phone")]
    pub name: String,
    /// Product category
    #[serde(rename = "type")]
    #[schema(example = "Electronics")]
    pub kind: String,
    /// Stock keeping unit
    #[schema(example = "PHN-001")]
    pub sku: String,
    /// Product image URL
    #[schema(example = "http://example.com/image.png")]
    pub image_url: String,
    /// Product description
    #[schema(example = "Smartphone")]
    pub description: String,
    /// Units in stock
    #[schema(example = 10)]
    pub quantity: i32,
    /// Unit price
    #[schema(example = 299.99)]
    pub price: f64,
}

/// Product creation data carrier (no id yet)
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub kind: String,
    pub sku: String,
    pub image_url: String,
    pub description: String,
    pub quantity: i32,
    pub price: f64,
}
