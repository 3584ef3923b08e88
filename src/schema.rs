//! Schema bootstrap.
//!
//! The service owns a single table; startup issues an idempotent CREATE so
//! a fresh database works out of the box. Anything beyond that (altering
//! columns, backfills) is out of scope here.

use sea_orm::{ConnectionTrait, DatabaseBackend, DatabaseConnection, DbErr, Statement};

/// Create the `products` table when it does not exist yet.
///
/// # Errors
///
/// Propagates the store error when the DDL statement fails.
pub async fn bootstrap(db: &DatabaseConnection) -> Result<(), DbErr> {
    let ddl = match db.get_database_backend() {
        DatabaseBackend::Postgres => {
            r"CREATE TABLE IF NOT EXISTS products (
                id SERIAL PRIMARY KEY,
                name VARCHAR(100) NOT NULL,
                price DECIMAL(10, 2) NOT NULL,
                stock INTEGER NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            );"
        }
        DatabaseBackend::MySql => {
            r"CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTO_INCREMENT,
                name VARCHAR(100) NOT NULL,
                price DECIMAL(10, 2) NOT NULL,
                stock INTEGER NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            );"
        }
        DatabaseBackend::Sqlite => {
            r"CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name VARCHAR(100) NOT NULL,
                price DECIMAL(10, 2) NOT NULL,
                stock INTEGER NOT NULL,
                created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
            );"
        }
    };

    db.execute(Statement::from_string(
        db.get_database_backend(),
        ddl.to_owned(),
    ))
    .await?;
    Ok(())
}
