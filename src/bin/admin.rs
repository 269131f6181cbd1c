//! CLI administration tool for alias-shortener.
//!
//! Works directly against the PostgreSQL store, without going through the
//! HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- shorten https://example.com/a
//!
//! # Resolve an alias (bare token or full alias)
//! cargo run --bin admin -- resolve https://AbCdEfGh_1.com
//!
//! # Count stored records
//! cargo run --bin admin -- stats
//!
//! # Check database connection / create the schema
//! cargo run --bin admin -- db check
//! cargo run --bin admin -- db init
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`
//! - `DB_INSERT_MODE` (optional): `atomic` or `check-then-insert`

use alias_shortener::application::services::AliasService;
use alias_shortener::config::{Config, mask_connection_string};
use alias_shortener::domain::entities::UrlRecord;
use alias_shortener::domain::repositories::AliasStore;
use alias_shortener::error::AppError;
use alias_shortener::infrastructure::persistence::{InsertMode, RelationalStore};

use anyhow::{Context, Result, anyhow};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing alias-shortener.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level commands.
#[derive(Subcommand)]
enum Commands {
    /// Issue an alias for a long URL
    Shorten {
        /// URL to shorten, stored as given
        long_url: String,
    },

    /// Look up the long URL behind an alias
    Resolve {
        /// Bare token, `{token}.com` or `https://{token}.com`
        alias: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Create the `urls` table and indexes if missing
    Init,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;
    let insert_mode = match std::env::var("DB_INSERT_MODE") {
        Ok(raw) => raw
            .parse::<InsertMode>()
            .map_err(|e| anyhow!("DB_INSERT_MODE: {e}"))?,
        Err(_) => InsertMode::default(),
    };

    let pool = PgPool::connect(&database_url)
        .await
        .with_context(|| {
            format!(
                "Failed to connect to database {}",
                mask_connection_string(&database_url)
            )
        })?;
    let store = RelationalStore::new(Arc::new(pool), insert_mode);

    match cli.command {
        Commands::Shorten { long_url } => handle_shorten(store, &long_url).await?,
        Commands::Resolve { alias } => handle_resolve(store, &alias).await?,
        Commands::Stats => handle_stats(store).await?,
        Commands::Db { action } => handle_db_action(action, store).await?,
    }

    Ok(())
}

fn service(store: RelationalStore) -> AliasService {
    AliasService::new(Arc::new(store))
}

/// Issues an alias and prints it.
///
/// An already shortened URL is reported with its existing alias.
async fn handle_shorten(store: RelationalStore, long_url: &str) -> Result<()> {
    store
        .ensure_schema()
        .await
        .map_err(|e| anyhow!("Failed to prepare schema: {}", e))?;

    let existing = store
        .find_by_long_url(long_url)
        .await
        .map_err(|e| anyhow!("Database error: {}", e))?;

    match service(store).shorten(long_url).await {
        Ok(short_url) => {
            let record = UrlRecord::new(long_url, short_url);
            println!("{}", "✅ Short URL created".green().bold());
            println!("  Long URL:  {}", record.long_url.cyan());
            println!("  Short URL: {}", record.short_alias.bright_yellow().bold());
            if let Some(token) = record.token() {
                println!("  Token:     {}", token.bright_white());
            }
        }
        Err(AppError::Conflict { .. }) => {
            println!("{}", "⚠️  This URL has already been shortened".yellow());
            if let Some(record) = existing {
                println!("  Short URL: {}", record.short_alias.bright_yellow());
                if let Some(token) = record.token() {
                    println!("  Resolve:   admin resolve {}", token.cyan());
                }
            }
        }
        Err(e) => return Err(anyhow!("Failed to shorten URL: {}", e)),
    }

    println!();
    Ok(())
}

/// Resolves an alias and prints the long URL.
async fn handle_resolve(store: RelationalStore, alias: &str) -> Result<()> {
    match service(store).resolve(alias).await {
        Ok(long_url) => {
            println!("  {} → {}", alias.bright_black(), long_url.cyan().bold());
        }
        Err(AppError::NotFound { .. }) => {
            println!("{}", format!("❌ Short URL {alias} not found").red());
        }
        Err(e) => return Err(anyhow!("Failed to resolve alias: {}", e)),
    }

    println!();
    Ok(())
}

/// Displays the number of stored records.
async fn handle_stats(store: RelationalStore) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let mode = store.mode();
    let records = service(store)
        .count()
        .await
        .map_err(|e| anyhow!("Failed to count records: {}", e))?;

    println!(
        "  Short URLs:  {}",
        records.to_string().bright_green().bold()
    );
    println!("  Insert mode: {}", mode.to_string().bright_white());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, store: RelationalStore) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            if !store.health_check().await {
                anyhow::bail!("Database did not answer SELECT 1");
            }

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(store.pool())
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  PostgreSQL: {}", version.bright_white());
        }
        DbAction::Init => {
            println!("{}", "🛠  Preparing schema...".bright_blue());

            store
                .ensure_schema()
                .await
                .map_err(|e| anyhow!("Failed to prepare schema: {}", e))?;

            println!(
                "{}",
                format!("✅ Schema ready (insert mode: {})", store.mode())
                    .green()
                    .bold()
            );
        }
    }

    println!();
    Ok(())
}
