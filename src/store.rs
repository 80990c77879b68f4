//! Pool setup and table DDL for restaurants, pizzas, and restaurant_pizzas.

use crate::config::Config;
use crate::error::AppError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Application tables in creation order. Dropped or cleared in reverse.
const TABLES: &[&str] = &["restaurants", "pizzas", "restaurant_pizzas"];

/// Open a pool for `config.database_url`, creating the database file if it does not exist.
/// Foreign keys are enforced on every connection.
pub async fn connect(config: &Config) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(opts)
        .await?;
    Ok(pool)
}

/// Create the application tables if they do not exist.
pub async fn ensure_tables(pool: &SqlitePool) -> Result<(), AppError> {
    let ddl = [
        r#"
        CREATE TABLE IF NOT EXISTS restaurants (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            address TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            ingredients TEXT NOT NULL
        )
        "#,
        r#"
        CREATE TABLE IF NOT EXISTS restaurant_pizzas (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            price INTEGER NOT NULL CHECK (price BETWEEN 1 AND 30),
            pizza_id INTEGER NOT NULL REFERENCES pizzas(id) ON DELETE CASCADE,
            restaurant_id INTEGER NOT NULL REFERENCES restaurants(id) ON DELETE CASCADE
        )
        "#,
        "CREATE INDEX IF NOT EXISTS restaurant_pizzas_restaurant_id ON restaurant_pizzas (restaurant_id)",
        "CREATE INDEX IF NOT EXISTS restaurant_pizzas_pizza_id ON restaurant_pizzas (pizza_id)",
    ];
    for stmt in ddl {
        sqlx::query(stmt).execute(pool).await?;
    }
    tracing::debug!(tables = ?TABLES, "tables ensured");
    Ok(())
}

/// Delete every row from the application tables in one transaction.
pub async fn clear_tables(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for table in TABLES.iter().rev() {
        sqlx::query(&format!("DELETE FROM {}", table))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    Ok(())
}
