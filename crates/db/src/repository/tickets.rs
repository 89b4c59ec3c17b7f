//! Service-ticket repository functions, including the ticket↔mechanic
//! association.

use crate::models::{MechanicRow, NewServiceTicket, ServiceTicketRow};
use crate::{DbError, DbPool};

/// Insert a new service ticket and return the stored row.
///
/// `customer_id` must reference an existing customer; foreign-key
/// enforcement rejects the insert otherwise.  A duplicate VIN fails with
/// a unique-violation database error.
pub async fn create_ticket(
    pool: &DbPool,
    new: &NewServiceTicket,
) -> Result<ServiceTicketRow, DbError> {
    let row = sqlx::query_as::<_, ServiceTicketRow>(
        r#"
        INSERT INTO service_tickets (vin, customer_id, service_desc, price)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, vin, customer_id, service_desc, price
        "#,
    )
    .bind(&new.vin)
    .bind(new.customer_id)
    .bind(&new.service_desc)
    .bind(new.price)
    .fetch_one(pool)
    .await?;

    Ok(row)
}

/// Fetch a single service ticket by its primary key.
pub async fn get_ticket(pool: &DbPool, id: i64) -> Result<ServiceTicketRow, DbError> {
    let row = sqlx::query_as::<_, ServiceTicketRow>(
        "SELECT id, vin, customer_id, service_desc, price FROM service_tickets WHERE id = ?1",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or(DbError::NotFound)?;

    Ok(row)
}

/// Return all service tickets ordered by id.
pub async fn list_tickets(pool: &DbPool) -> Result<Vec<ServiceTicketRow>, DbError> {
    let rows = sqlx::query_as::<_, ServiceTicketRow>(
        "SELECT id, vin, customer_id, service_desc, price FROM service_tickets ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Attach a mechanic to a service ticket.
///
/// The association table's composite primary key rejects a duplicate
/// (ticket, mechanic) pair.
pub async fn assign_mechanic(
    pool: &DbPool,
    ticket_id: i64,
    mechanic_id: i64,
) -> Result<(), DbError> {
    sqlx::query("INSERT INTO mechanics_service_tickets (ticket_id, mechanic_id) VALUES (?1, ?2)")
        .bind(ticket_id)
        .bind(mechanic_id)
        .execute(pool)
        .await?;

    Ok(())
}

/// Return every mechanic assigned to the given ticket.
pub async fn mechanics_for_ticket(
    pool: &DbPool,
    ticket_id: i64,
) -> Result<Vec<MechanicRow>, DbError> {
    let rows = sqlx::query_as::<_, MechanicRow>(
        r#"
        SELECT m.id, m.first_name, m.last_name, m.email, m.address, m.schedule, m.salary
        FROM mechanics m
        JOIN mechanics_service_tickets mst ON mst.mechanic_id = m.id
        WHERE mst.ticket_id = ?1
        ORDER BY m.id
        "#,
    )
    .bind(ticket_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}

/// Return every service ticket owned by the given customer.
pub async fn tickets_for_customer(
    pool: &DbPool,
    customer_id: i64,
) -> Result<Vec<ServiceTicketRow>, DbError> {
    let rows = sqlx::query_as::<_, ServiceTicketRow>(
        "SELECT id, vin, customer_id, service_desc, price FROM service_tickets WHERE customer_id = ?1 ORDER BY id",
    )
    .bind(customer_id)
    .fetch_all(pool)
    .await?;

    Ok(rows)
}
