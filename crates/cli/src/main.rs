//! Course Shop CLI - Database migrations and demo data.
//!
//! # Usage
//!
//! ```bash
//! # Apply database migrations
//! shop-cli migrate
//!
//! # Insert the demo data set
//! shop-cli seed
//!
//! # Wipe every shop table, then insert the demo data set
//! shop-cli seed --reset
//! ```
//!
//! Both commands read `SHOP_DATABASE_URL` (or `DATABASE_URL`), loading a
//! `.env` file first if one exists.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "shop-cli")]
#[command(author, version, about = "Course Shop CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Seed the database with demo users, catalogue and orders
    Seed {
        /// Truncate all shop tables before seeding
        #[arg(long)]
        reset: bool,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Migrate => commands::migrate::run().await,
        Commands::Seed { reset } => commands::seed::run(reset).await,
    }
}
