//! Product handlers.
//!
//! All routes here run behind the authentication middleware.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::{get, put},
    Extension, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::ValidatedJson;
use crate::api::middleware::CurrentUser;
use crate::api::AppState;
use crate::domain::{NewProduct, Product};
use crate::errors::AppResult;
use crate::types::ListParams;

/// Product creation request
///
/// Quantity is expected to be non-negative but, like SKU uniqueness,
/// this is not enforced.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    /// Product name
    #[validate(length(min = 1, message = "Name is required"))]
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

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        NewProduct {
            name: req.name,
            kind: req.kind,
            sku: req.sku,
            image_url: req.image_url,
            description: req.description,
            quantity: req.quantity,
            price: req.price,
        }
    }
}

/// Quantity update request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateQuantityRequest {
    /// New quantity value
    #[schema(example = 20)]
    pub quantity: i32,
}

/// Quantity update response
#[derive(Debug, Serialize, ToSchema)]
pub struct QuantityResponse {
    #[schema(example = "Quantity updated")]
    pub message: String,
    /// Quantity after the update
    #[schema(example = 20)]
    pub quantity: i32,
}

/// Create product routes (nested under /products)
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_products).post(add_product))
        .route("/:id", get(get_product))
        .route("/:id/quantity", put(update_quantity))
}

/// Add a new product
#[utoipa::path(
    post,
    path = "/products",
    tag = "Products",
    request_body = CreateProductRequest,
    responses(
        (status = 201, description = "Product created", body = Product),
        (status = 401, description = "Not authenticated"),
        (status = 422, description = "Validation error")
    ),
    security(("bearer_auth" = []))
)]
pub async fn add_product(
    State(state): State<AppState>,
    Extension(current_user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateProductRequest>,
) -> AppResult<(StatusCode, Json<Product>)> {
    let product = state.product_service.add_product(payload.into()).await?;

    tracing::info!(
        user = %current_user.username,
        product_id = product.id,
        "product created"
    );

    Ok((StatusCode::CREATED, Json(product)))
}

/// Get a product by id
#[utoipa::path(
    get,
    path = "/products/{id}",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Product found", body = Product),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<Product>> {
    let product = state.product_service.get_product(id).await?;

    Ok(Json(product))
}

/// Update the quantity of a product
#[utoipa::path(
    put,
    path = "/products/{id}/quantity",
    tag = "Products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = UpdateQuantityRequest,
    responses(
        (status = 200, description = "Quantity updated", body = QuantityResponse),
        (status = 401, description = "Not authenticated"),
        (status = 404, description = "Product not found")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_quantity(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateQuantityRequest>,
) -> AppResult<Json<QuantityResponse>> {
    let product = state
        .product_service
        .update_quantity(id, payload.quantity)
        .await?;

    Ok(Json(QuantityResponse {
        message: "Quantity updated".to_string(),
        quantity: product.quantity,
    }))
}

/// List products with offset/limit pagination
#[utoipa::path(
    get,
    path = "/products",
    tag = "Products",
    params(ListParams),
    responses(
        (status = 200, description = "Page of products", body = [Product]),
        (status = 401, description = "Not authenticated")
    ),
    security(("bearer_auth" = []))
)]
pub async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<Vec<Product>>> {
    let products = state
        .product_service
        .list_products(params.skip, params.limit())
        .await?;

    Ok(Json(products))
}
