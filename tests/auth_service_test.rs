//! Auth service unit tests.

use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{decode, DecodingKey, Validation};
use mockall::mock;

use inventory_api::config::Config;
use inventory_api::domain::{NewProduct, Password, Product, User};
use inventory_api::errors::{AppError, AppResult};
use inventory_api::infra::{ProductRepository, UnitOfWork, UserRepository};
use inventory_api::services::{AuthService, Authenticator, Claims};

mock! {
    pub UserRepo {}

    #[async_trait]
    impl UserRepository for UserRepo {
        async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
        async fn create(&self, username: String, password_hash: String) -> AppResult<User>;
    }
}

mock! {
    pub ProductRepo {}

    #[async_trait]
    impl ProductRepository for ProductRepo {
        async fn insert(&self, product: NewProduct) -> AppResult<Product>;
        async fn find_by_id(&self, id: i32) -> AppResult<Option<Product>>;
        async fn set_quantity(&self, id: i32, quantity: i32) -> AppResult<Product>;
        async fn list(&self, skip: u64, limit: u64) -> AppResult<Vec<Product>>;
    }
}

/// Test mock for UnitOfWork wrapping mocked repositories
struct TestUnitOfWork {
    user_repo: Arc<MockUserRepo>,
    product_repo: Arc<MockProductRepo>,
}

impl TestUnitOfWork {
    fn new(user_repo: MockUserRepo) -> Self {
        Self {
            user_repo: Arc::new(user_repo),
            product_repo: Arc::new(MockProductRepo::new()),
        }
    }
}

impl UnitOfWork for TestUnitOfWork {
    fn users(&self) -> Arc<dyn UserRepository> {
        self.user_repo.clone()
    }

    fn products(&self) -> Arc<dyn ProductRepository> {
        self.product_repo.clone()
    }
}

fn test_config() -> Config {
    Config::new(
        "postgres://unused",
        "test-secret-key-for-testing-only-32chars",
    )
}

fn service(repo: MockUserRepo) -> Authenticator<TestUnitOfWork> {
    Authenticator::new(Arc::new(TestUnitOfWork::new(repo)), test_config())
}

fn stored_user(username: &str, password: &str) -> User {
    let hash = Password::new(password).unwrap().into_string();
    User::new(1, username.to_string(), hash)
}

#[tokio::test]
async fn register_hashes_password_before_storing() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .withf(|u| u == "puja")
        .returning(|_| Ok(None));
    repo.expect_create()
        .withf(|username, hash| {
            username == "puja" && hash != "mypassword" && hash.starts_with("$argon2")
        })
        .returning(|username, hash| Ok(User::new(1, username, hash)));

    let result = service(repo)
        .register("puja".to_string(), "mypassword".to_string())
        .await;

    assert!(result.is_ok());
    assert_eq!(result.unwrap().id, 1);
}

#[tokio::test]
async fn register_duplicate_username_conflicts() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(stored_user("puja", "mypassword"))));

    let result = service(repo)
        .register("puja".to_string(), "otherpassword".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn login_issues_token_with_username_as_subject() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(stored_user("puja", "mypassword"))));

    let result = service(repo)
        .login("puja".to_string(), "mypassword".to_string())
        .await;

    assert!(result.is_ok());
    let token = result.unwrap();
    assert_eq!(token.token_type, "bearer");

    // The token decodes to the username submitted at login
    let data = decode::<Claims>(
        &token.access_token,
        &DecodingKey::from_secret(test_config().jwt_secret_bytes()),
        &Validation::default(),
    )
    .unwrap();
    assert_eq!(data.claims.sub, "puja");
}

#[tokio::test]
async fn login_with_wrong_password_fails() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .returning(|_| Ok(Some(stored_user("puja", "mypassword"))));

    let result = service(repo)
        .login("puja".to_string(), "not-the-password".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn login_with_unknown_user_fails() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username().returning(|_| Ok(None));

    let result = service(repo)
        .login("nobody".to_string(), "whatever".to_string())
        .await;

    assert!(matches!(result.unwrap_err(), AppError::InvalidCredentials));
}

#[tokio::test]
async fn authenticate_resolves_token_back_to_user() {
    let mut repo = MockUserRepo::new();
    repo.expect_find_by_username()
        .times(2)
        .returning(|_| Ok(Some(stored_user("puja", "mypassword"))));

    let service = service(repo);
    let token = service
        .login("puja".to_string(), "mypassword".to_string())
        .await
        .unwrap();

    let user = service.authenticate(&token.access_token).await.unwrap();
    assert_eq!(user.username, "puja");
}

#[tokio::test]
async fn authenticate_fails_when_subject_no_longer_exists() {
    // Issue a token against one store, then resolve it against a store
    // where the user is gone; re-querying on every request makes the
    // token unusable immediately.
    let mut issuing_repo = MockUserRepo::new();
    issuing_repo
        .expect_find_by_username()
        .returning(|_| Ok(Some(stored_user("puja", "mypassword"))));
    let token = service(issuing_repo)
        .login("puja".to_string(), "mypassword".to_string())
        .await
        .unwrap();

    let mut empty_repo = MockUserRepo::new();
    empty_repo.expect_find_by_username().returning(|_| Ok(None));

    let result = service(empty_repo).authenticate(&token.access_token).await;
    assert!(matches!(result.unwrap_err(), AppError::Unauthorized));
}

#[tokio::test]
async fn authenticate_rejects_garbage_token() {
    let repo = MockUserRepo::new();
    let result = service(repo).authenticate("garbage").await;
    assert!(matches!(result.unwrap_err(), AppError::Jwt(_)));
}
