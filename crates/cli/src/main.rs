//! `repair-shop` CLI entry-point.
//!
//! Available sub-commands:
//! - `seed`  — drop, recreate, and populate all tables with sample data.
//! - `reset` — drop and recreate all tables without seeding.

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "repair-shop",
    about = "Auto-repair shop schema and sample-data seeder",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reset the schema and populate it with sample data.
    ///
    /// Destroys any existing rows: all tables are dropped and recreated
    /// before the sample rows are inserted.
    Seed {
        #[arg(long, env = "DATABASE_URL", default_value = "sqlite://app.db")]
        database_url: String,
    },
    /// Drop and recreate all tables, leaving them empty.
    Reset {
        #[arg(long, env = "DATABASE_URL", default_value = "sqlite://app.db")]
        database_url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Seed { database_url } => {
            let pool = db::pool::create_pool(&database_url, 2).await?;
            let summary = db::seed::run(&pool).await?;

            println!("All tables created successfully.");
            println!("Seed data added successfully.");
            println!(
                "Ticket {} assigned to {}",
                summary.ticket_id, summary.mechanic_first_name
            );
        }
        Command::Reset { database_url } => {
            let pool = db::pool::create_pool(&database_url, 2).await?;
            db::schema::reset(&pool).await?;
            info!("Schema reset complete");
        }
    }

    Ok(())
}
