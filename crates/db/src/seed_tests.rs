//! Tests for the seed routine against an in-memory SQLite database.
//!
//! Every `sqlite::memory:` connection is its own database, so the pool is
//! capped at a single connection to keep all queries on the same store.

use crate::models::TicketMechanicRow;
use crate::repository::{customers, tickets};
use crate::{credentials, pool, seed, DbPool};

async fn memory_pool() -> DbPool {
    pool::create_pool("sqlite::memory:", 1)
        .await
        .expect("in-memory pool")
}

#[tokio::test]
async fn seed_inserts_the_sample_customer() {
    let pool = memory_pool().await;
    let summary = seed::run(&pool).await.unwrap();

    let rows = customers::list_customers(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);

    let customer = &rows[0];
    assert_eq!(customer.id, summary.customer_id);
    assert_eq!(customer.first_name, "John");
    assert_eq!(customer.last_name, "Doe");
    assert_eq!(customer.email, "john@doe.com");
    assert_eq!(customer.phone, "123-456-7890");
}

#[tokio::test]
async fn seed_inserts_the_sample_ticket() {
    let pool = memory_pool().await;
    let summary = seed::run(&pool).await.unwrap();

    let rows = tickets::list_tickets(&pool).await.unwrap();
    assert_eq!(rows.len(), 1);

    let ticket = &rows[0];
    assert_eq!(ticket.id, summary.ticket_id);
    assert_eq!(ticket.vin, "12345678901234567");
    assert_eq!(ticket.price, 89.99);
    assert_eq!(ticket.customer_id, summary.customer_id);
}

#[tokio::test]
async fn seeded_ticket_has_exactly_one_mechanic_named_jane() {
    let pool = memory_pool().await;
    let summary = seed::run(&pool).await.unwrap();

    let assigned = tickets::mechanics_for_ticket(&pool, summary.ticket_id)
        .await
        .unwrap();
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned[0].first_name, "Jane");
    assert_eq!(summary.mechanic_first_name, "Jane");
}

#[tokio::test]
async fn seed_links_ticket_and_mechanic_through_the_association_table() {
    let pool = memory_pool().await;
    let summary = seed::run(&pool).await.unwrap();

    let links: Vec<TicketMechanicRow> =
        sqlx::query_as("SELECT ticket_id, mechanic_id FROM mechanics_service_tickets")
            .fetch_all(&pool)
            .await
            .unwrap();
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].ticket_id, summary.ticket_id);
    assert_eq!(links[0].mechanic_id, summary.mechanic_id);
}

#[tokio::test]
async fn reseeding_keeps_row_counts_at_one() {
    let pool = memory_pool().await;

    for _ in 0..3 {
        seed::run(&pool).await.unwrap();

        for table in [
            "customers",
            "mechanics",
            "service_tickets",
            "mechanics_service_tickets",
        ] {
            let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(&pool)
                .await
                .unwrap();
            assert_eq!(count, 1, "expected exactly one row in {table}");
        }
    }
}

#[tokio::test]
async fn seeded_password_is_stored_hashed() {
    let pool = memory_pool().await;
    seed::run(&pool).await.unwrap();

    let rows = customers::list_customers(&pool).await.unwrap();
    let stored = &rows[0].password_hash;

    assert_ne!(stored, "password123");
    assert!(credentials::verify_password("password123", stored).unwrap());
    assert!(!credentials::verify_password("wrong-password", stored).unwrap());
}
