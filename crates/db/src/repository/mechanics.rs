//! Mechanic repository functions.

use crate::models::{MechanicRow, NewMechanic, ServiceTicketRow};
use crate::{DbError, DbPool};

/// Insert a new mechanic and return the stored row.
pub async fn create_mechanic(pool: &DbPool, new: &NewMechanic) -> Result<MechanicRow, DbError> {
    let row = sqlx::query_as::<_, MechanicRow>(
        r#"
        INSERT INTO mechanics (first_name, last_name, email, address, schedule, salary)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id, first_name, last_name, email, address, schedule, salary
        "#,
    )
    .bind(&new.first_name)
    .bind(&new.last_name)
    .bind(&new.email)
    .bind(&new.address)
    .bind(&new.schedule)
    .bind(new.salary)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Fetch a single mechanic by its primary key.
pub async fn get_mechanic(pool: &DbPool, id: i64) -> Result<MechanicRow, DbError> {
    let row = sqlx::query_as::<_, MechanicRow>(
        "SELECT id, first_name, last_name, email, address, schedule, salary FROM mechanics WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Return all mechanics ordered by id.
pub async fn list_mechanics(pool: &DbPool) -> Result<Vec<MechanicRow>, DbError> {
    let rows = sqlx::query_as::<_, MechanicRow>(
        "SELECT id, first_name, last_name, email, address, schedule, salary FROM mechanics ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return every service ticket the given mechanic is assigned to.
pub async fn tickets_for_mechanic(
    pool: &DbPool,
    mechanic_id: i64,
) -> Result<Vec<ServiceTicketRow>, DbError> {
    let rows = sqlx::query_as::<_, ServiceTicketRow>(
        r#"
        SELECT t.id, t.vin, t.customer_id, t.service_desc, t.price
        FROM service_tickets t
        JOIN mechanics_service_tickets mst ON mst.ticket_id = t.id
        WHERE mst.mechanic_id = ?1
        ORDER BY t.id
        "#,
    )
    .bind(mechanic_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
