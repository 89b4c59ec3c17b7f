//! Customer repository functions.

use crate::models::{CustomerRow, NewCustomer};
use crate::{DbError, DbPool};

/// Insert a new customer and return the stored row.
///
/// Fails with a unique-violation database error if the email is already
/// taken.
pub async fn create_customer(pool: &DbPool, new: &NewCustomer) -> Result<CustomerRow, DbError> {
    let row = sqlx::query_as::<_, CustomerRow>(
        r#"
        INSERT INTO customers (first_name, last_name, email, password_hash, phone)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id, first_name, last_name, email, password_hash, phone
        "#,
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.email)
    .bind(&new.password_hash)
    .bind(&new.phone)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Fetch a single customer by its primary key.
pub async fn get_customer(pool: &DbPool, id: i64) -> Result<CustomerRow, DbError> {
    let row = sqlx::query_as::<_, CustomerRow>(
        "SELECT id, first_name, last_name, email, password_hash, phone FROM customers WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Return all customers ordered by id.
pub async fn list_customers(pool: &DbPool) -> Result<Vec<CustomerRow>, DbError> {
    let rows = sqlx::query_as::<_, CustomerRow>(
        "SELECT id, first_name, last_name, email, password_hash, phone FROM customers ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
