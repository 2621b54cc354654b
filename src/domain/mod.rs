//! Domain layer - Core business entities and logic
//!
//! Contains the core domain models independent of infrastructure
//! concerns: entities and value objects.

pub mod password;
pub mod product;
pub mod user;

pub use password::Password;
pub use product::{NewProduct, Product};
pub use user::User;
