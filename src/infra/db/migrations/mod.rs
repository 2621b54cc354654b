//! Database schema definitions.
//!
//! Each table is created by a separate module following SeaORM
//! migration conventions. The full set runs at startup so the schema
//! is auto-created if absent; there is no standalone migration CLI.

use sea_orm_migration::prelude::*;

mod m20240101_000001_create_users_table;
mod m20240101_000002_create_products_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_users_table::Migration),
            Box::new(m20240101_000002_create_products_table::Migration),
        ]
    }
}
