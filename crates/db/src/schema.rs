//! Hand-written DDL for the four repair-shop tables.
//!
//! There is no migration history: the lifecycle is a destructive
//! drop-then-create on every reset, so the DDL lives here as plain
//! statement arrays executed in dependency order.

use tracing::info;

use crate::{DbError, DbPool};

/// CREATE TABLE statements in dependency order (referenced tables first).
const CREATE_TABLES: [&str; 4] = [
    r#"
    CREATE TABLE customers (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        phone TEXT NOT NULL
    )
    "#,
    r#"
    CREATE TABLE mechanics (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        first_name TEXT NOT NULL,
        last_name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        address TEXT NOT NULL,
        schedule TEXT NOT NULL,
        salary INTEGER
    )
    "#,
    r#"
    CREATE TABLE service_tickets (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        vin TEXT NOT NULL UNIQUE,
        customer_id INTEGER NOT NULL REFERENCES customers(id),
        service_desc TEXT NOT NULL,
        price REAL NOT NULL
    )
    "#,
    r#"
    CREATE TABLE mechanics_service_tickets (
        ticket_id INTEGER NOT NULL REFERENCES service_tickets(id),
        mechanic_id INTEGER NOT NULL REFERENCES mechanics(id),
        PRIMARY KEY (ticket_id, mechanic_id)
    )
    "#,
];

/// DROP TABLE statements in reverse dependency order (referencing tables first).
const DROP_TABLES: [&str; 4] = [
    "DROP TABLE IF EXISTS mechanics_service_tickets",
    "DROP TABLE IF EXISTS service_tickets",
    "DROP TABLE IF EXISTS mechanics",
    "DROP TABLE IF EXISTS customers",
];

/// Create every table in the schema.
pub async fn create_all(pool: &DbPool) -> Result<(), DbError> {
    for ddl in CREATE_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Drop every table in the schema, if present.
pub async fn drop_all(pool: &DbPool) -> Result<(), DbError> {
    for ddl in DROP_TABLES {
        sqlx::query(ddl).execute(pool).await?;
    }
    Ok(())
}

/// Drop and recreate every table.  Destroys all existing data.
pub async fn reset(pool: &DbPool) -> Result<(), DbError> {
    info!("Resetting schema (dropping and recreating all tables)");
    drop_all(pool).await?;
    create_all(pool).await?;
    Ok(())
}
