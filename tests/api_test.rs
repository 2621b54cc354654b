//! Integration tests for API endpoints.
//!
//! These tests run real requests through the full router, with mock
//! services standing in for the database-backed implementations.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::Utc;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use serde_json::{json, Value};
use tower::ServiceExt;

use inventory_api::api::{create_router, AppState};
use inventory_api::domain::{NewProduct, Product, User};
use inventory_api::errors::{AppError, AppResult};
use inventory_api::infra::Database;
use inventory_api::services::{AuthService, Claims, ProductService, TokenResponse};

// =============================================================================
// Mock Services
// =============================================================================

const VALID_TOKEN: &str = "valid-test-token";

/// Mock auth service: one known user ("puja"/"mypassword"), one
/// reserved username ("existing"), one accepted token.
struct MockAuthService;

#[async_trait]
impl AuthService for MockAuthService {
    async fn register(&self, username: String, _password: String) -> AppResult<User> {
        if username == "existing" {
            return Err(AppError::conflict("User"));
        }
        Ok(User::new(1, username, "hashed".to_string()))
    }

    async fn login(&self, username: String, password: String) -> AppResult<TokenResponse> {
        if username == "puja" && password == "mypassword" {
            Ok(TokenResponse {
                access_token: VALID_TOKEN.to_string(),
                token_type: "bearer".to_string(),
            })
        } else {
            Err(AppError::InvalidCredentials)
        }
    }

    fn verify_token(&self, token: &str) -> AppResult<Claims> {
        if token == VALID_TOKEN {
            Ok(Claims {
                sub: "puja".to_string(),
                exp: Utc::now().timestamp() + 3600,
            })
        } else {
            Err(AppError::Unauthorized)
        }
    }

    async fn authenticate(&self, token: &str) -> AppResult<User> {
        let claims = self.verify_token(token)?;
        Ok(User::new(1, claims.sub, "hashed".to_string()))
    }
}

fn phone(id: i32, quantity: i32) -> Product {
    Product {
        id,
        name: format!("Phone {}", id),
        kind: "Electronics".to_string(),
        sku: format!("PHN-{:03}", id),
        image_url: "http://example.com/image.png".to_string(),
        description: "Smartphone".to_string(),
        quantity,
        price: 299.99,
    }
}

/// Mock product service over a fixed three-product inventory.
struct MockProductService {
    products: Vec<Product>,
}

impl MockProductService {
    fn new() -> Self {
        Self {
            products: vec![phone(1, 10), phone(2, 5), phone(3, 7)],
        }
    }
}

#[async_trait]
impl ProductService for MockProductService {
    async fn add_product(&self, product: NewProduct) -> AppResult<Product> {
        Ok(Product {
            id: 42,
            name: product.name,
            kind: product.kind,
            sku: product.sku,
            image_url: product.image_url,
            description: product.description,
            quantity: product.quantity,
            price: product.price,
        })
    }

    async fn get_product(&self, id: i32) -> AppResult<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found("Product"))
    }

    async fn update_quantity(&self, id: i32, quantity: i32) -> AppResult<Product> {
        match self.products.iter().find(|p| p.id == id) {
            Some(product) => Ok(Product {
                quantity,
                ..product.clone()
            }),
            None => Err(AppError::not_found("Product")),
        }
    }

    async fn list_products(&self, skip: u64, limit: u64) -> AppResult<Vec<Product>> {
        Ok(self
            .products
            .iter()
            .skip(skip as usize)
            .take(limit as usize)
            .cloned()
            .collect())
    }
}

// =============================================================================
// Test Helpers
// =============================================================================

fn app() -> Router {
    // One prepared exec result so the health probe's `SELECT 1` succeeds
    let connection = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results(vec![MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let state = AppState::new(
        Arc::new(MockAuthService),
        Arc::new(MockProductService::new()),
        Arc::new(Database::from_connection(connection)),
    );

    create_router(state)
}

fn json_request(method: &str, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = app().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn valid_product_body() -> Value {
    json!({
        "name": "Phone",
        "type": "Electronics",
        "sku": "PHN-001",
        "image_url": "http://example.com/image.png",
        "description": "Smartphone",
        "quantity": 10,
        "price": 299.99
    })
}

// =============================================================================
// Authentication Endpoints
// =============================================================================

#[tokio::test]
async fn register_returns_201_with_user_id() {
    let body = json!({"username": "puja", "password": "mypassword"});
    let (status, body) = send(json_request("POST", "/register", None, body)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["user_id"], 1);
}

#[tokio::test]
async fn register_duplicate_username_returns_409() {
    let body = json!({"username": "existing", "password": "mypassword"});
    let (status, body) = send(json_request("POST", "/register", None, body)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["detail"], "User already exists");
}

#[tokio::test]
async fn register_with_missing_field_returns_422() {
    let body = json!({"username": "puja"});
    let (status, _) = send(json_request("POST", "/register", None, body)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn login_returns_bearer_token() {
    let body = json!({"username": "puja", "password": "mypassword"});
    let (status, body) = send(json_request("POST", "/login", None, body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["token_type"], "bearer");
    assert!(!body["access_token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn login_with_wrong_password_returns_401() {
    let body = json!({"username": "puja", "password": "wrong"});
    let (status, body) = send(json_request("POST", "/login", None, body)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["detail"], "Invalid credentials");
}

// =============================================================================
// Product Endpoints
// =============================================================================

#[tokio::test]
async fn add_product_without_token_returns_401() {
    // A valid body does not help without credentials
    let (status, _) = send(json_request("POST", "/products", None, valid_product_body())).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn add_product_with_invalid_token_returns_401() {
    let request = json_request("POST", "/products", Some("bogus"), valid_product_body());
    let (status, _) = send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn add_product_returns_201_with_generated_id() {
    let request = json_request("POST", "/products", Some(VALID_TOKEN), valid_product_body());
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 42);
    assert_eq!(body["type"], "Electronics");
    assert_eq!(body["quantity"], 10);
}

#[tokio::test]
async fn get_product_returns_product() {
    let (status, body) = send(get_request("/products/2", Some(VALID_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);
    assert_eq!(body["type"], "Electronics");
    assert_eq!(body["quantity"], 5);
}

#[tokio::test]
async fn get_unknown_product_returns_404() {
    let (status, body) = send(get_request("/products/999", Some(VALID_TOKEN))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Product not found");
}

#[tokio::test]
async fn get_product_without_token_returns_401() {
    let (status, _) = send(get_request("/products/2", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn update_quantity_returns_new_quantity() {
    let request = json_request(
        "PUT",
        "/products/1/quantity",
        Some(VALID_TOKEN),
        json!({"quantity": 20}),
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Quantity updated");
    assert_eq!(body["quantity"], 20);
}

#[tokio::test]
async fn update_quantity_unknown_product_returns_404() {
    let request = json_request(
        "PUT",
        "/products/999/quantity",
        Some(VALID_TOKEN),
        json!({"quantity": 20}),
    );
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["detail"], "Product not found");
}

#[tokio::test]
async fn list_products_without_token_returns_401() {
    let (status, _) = send(get_request("/products", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn list_products_returns_full_page_by_default() {
    let (status, body) = send(get_request("/products", Some(VALID_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 3);
    // Insertion order, `type` field spelled out on the wire
    assert_eq!(items[0]["id"], 1);
    assert_eq!(items[0]["type"], "Electronics");
}

#[tokio::test]
async fn list_products_applies_skip_and_limit() {
    let (status, body) = send(get_request("/products?skip=1&limit=1", Some(VALID_TOKEN))).await;

    assert_eq!(status, StatusCode::OK);
    let items = body.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], 2);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let (status, body) = send(get_request("/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
