//! One-shot sample-data seeder.
//!
//! Destructively resets the schema, then inserts one customer, one
//! mechanic, and one service ticket with the mechanic attached, all in a
//! single transaction.  A uniqueness or connectivity failure aborts the
//! transaction and propagates; there are no retries and no
//! partial-commit recovery.

use tracing::info;

use crate::models::{NewCustomer, NewMechanic, NewServiceTicket};
use crate::{credentials, schema, DbError, DbPool};

/// What a seed run produced, for the caller to print.
#[derive(Debug, Clone)]
pub struct SeedSummary {
    pub customer_id: i64,
    pub mechanic_id: i64,
    pub ticket_id: i64,
    pub mechanic_first_name: String,
}

/// Reset the schema and populate it with the sample rows.
///
/// Leaves exactly one row in `customers`, `mechanics`, and
/// `service_tickets`, plus the single association row linking the ticket
/// to the mechanic.  Any pre-existing data is destroyed.
pub async fn run(pool: &DbPool) -> Result<SeedSummary, DbError> {
    schema::reset(pool).await?;

    let customer = NewCustomer {
        first_name: "John".into(),
        last_name: "Doe".into(),
        email: "john@doe.com".into(),
        password_hash: credentials::hash_password("password123")?,
        phone: "123-456-7890".into(),
    };

    let mechanic = NewMechanic {
        first_name: "Jane".into(),
        last_name: "Smith".into(),
        email: "Jane@smith.com".into(),
        address: "123 Main St".into(),
        schedule: "Mon-Fri 9am-5pm".into(),
        salary: Some(60_000),
    };

    let mut tx = pool.begin().await?;

    let (customer_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO customers (first_name, last_name, email, password_hash, phone)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING id
        "#,
    )
    .bind(&customer.first_name)
    .bind(&customer.last_name)
    .bind(&customer.email)
    .bind(&customer.password_hash)
    .bind(&customer.phone)
    .fetch_one(&mut *tx)
    .await?;

    let (mechanic_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO mechanics (first_name, last_name, email, address, schedule, salary)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)
        RETURNING id
        "#,
    )
    .bind(&mechanic.first_name)
    .bind(&mechanic.last_name)
    .bind(&mechanic.email)
    .bind(&mechanic.address)
    .bind(&mechanic.schedule)
    .bind(mechanic.salary)
    .fetch_one(&mut *tx)
    .await?;

    let ticket = NewServiceTicket {
        vin: "12345678901234567".into(),
        customer_id,
        service_desc: "Oil change and tire rotation".into(),
        price: 89.99,
    };

    let (ticket_id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO service_tickets (vin, customer_id, service_desc, price)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id
        "#,
    )
    .bind(&ticket.vin)
    .bind(ticket.customer_id)
    .bind(&ticket.service_desc)
    .bind(ticket.price)
    .fetch_one(&mut *tx)
    .await?;

    sqlx::query("INSERT INTO mechanics_service_tickets (ticket_id, mechanic_id) VALUES (?1, ?2)")
        .bind(ticket_id)
        .bind(mechanic_id)
        .execute(&mut *tx)
        .await?;

    tx.commit().await?;

    info!("Seeded 1 customer, 1 mechanic, 1 service ticket");

    Ok(SeedSummary {
        customer_id,
        mechanic_id,
        ticket_id,
        mechanic_first_name: mechanic.first_name,
    })
}
