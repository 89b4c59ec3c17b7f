//! Row structs that map 1-to-1 onto database tables.
//!
//! These are *persistence* models and carry no behaviour.  The `New*`
//! payload structs hold the non-id columns for inserts; ids are assigned
//! by SQLite.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// customers
// ---------------------------------------------------------------------------

/// A persisted customer row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CustomerRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// Argon2 hash of the customer's password.  Plaintext is never stored.
    pub password_hash: String,
    pub phone: String,
}

/// Insert payload for a new customer.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub phone: String,
}

// ---------------------------------------------------------------------------
// mechanics
// ---------------------------------------------------------------------------

/// A persisted mechanic row.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct MechanicRow {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    /// Free-text working-hours description, e.g. "Mon-Fri 9am-5pm".
    pub schedule: String,
    pub salary: Option<i64>,
}

/// Insert payload for a new mechanic.
#[derive(Debug, Clone)]
pub struct NewMechanic {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub address: String,
    pub schedule: String,
    pub salary: Option<i64>,
}

// ---------------------------------------------------------------------------
// service_tickets
// ---------------------------------------------------------------------------

/// A persisted service-ticket row.  Owned by exactly one customer.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceTicketRow {
    pub id: i64,
    /// 17-character vehicle identification number, unique per ticket.
    pub vin: String,
    pub customer_id: i64,
    pub service_desc: String,
    pub price: f64,
}

/// Insert payload for a new service ticket.
#[derive(Debug, Clone)]
pub struct NewServiceTicket {
    pub vin: String,
    pub customer_id: i64,
    pub service_desc: String,
    pub price: f64,
}

// ---------------------------------------------------------------------------
// mechanics_service_tickets
// ---------------------------------------------------------------------------

/// One link in the ticket↔mechanic many-to-many association.
///
/// The composite primary key (ticket_id, mechanic_id) rejects duplicate
/// pairs; the table carries no other attributes.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TicketMechanicRow {
    pub ticket_id: i64,
    pub mechanic_id: i64,
}
