//! # Seed Data Tool
//!
//! Creates a development database and populates every collection with the
//! fixture dataset.
//!
//! ## Usage
//! ```bash
//! # Seed the default database file
//! cargo run -p nexus-store --bin seed
//!
//! # Specify database path
//! cargo run -p nexus-store --bin seed -- --db ./data/nexus.db
//! ```
//!
//! Seeding happens per-collection on first access, so this tool simply
//! touches every collection once. A database that already has data is
//! left untouched.

use std::env;

use nexus_store::{Store, StoreConfig};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Parse command line arguments
    let args: Vec<String> = env::args().collect();

    let mut db_path = String::from("./nexus_dev.db");

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--db" | "-d" => {
                if i + 1 < args.len() {
                    db_path = args[i + 1].clone();
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Nexus Seed Data Tool");
                println!();
                println!("Usage: seed [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -d, --db <PATH>    Database file path (default: ./nexus_dev.db)");
                println!("  -h, --help         Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    println!("🌱 Nexus Seed Data Tool");
    println!("=======================");
    println!("Database: {}", db_path);
    println!();

    let store = Store::new(StoreConfig::new(&db_path)).await?;

    println!("✓ Connected to store");
    println!("✓ Migrations applied");
    println!();

    // First access seeds each collection; later runs just report counts.
    let users = store.users().list().await?;
    println!("  users:     {} records", users.len());

    let clients = store.clients().list().await?;
    println!("  clients:   {} records", clients.len());

    let providers = store.providers().list().await?;
    println!("  providers: {} records", providers.len());

    let products = store.products().list().await?;
    println!("  products:  {} records", products.len());

    let sales = store.sales().list().await?;
    println!("  sales:     {} records", sales.len());

    let purchases = store.purchases().list().await?;
    println!("  purchases: {} records", purchases.len());

    let low = store.products().low_stock().await?;
    println!();
    println!("✓ Seed complete! ({} products at/below reorder threshold)", low.len());

    store.close().await;

    Ok(())
}
