//! CLI administration tool for shorturl.
//!
//! Inspects stored mappings and checks the database without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # List every mapping
//! cargo run --bin admin -- list
//!
//! # Look up a short URL
//! cargo run --bin admin -- resolve 42
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string

use shorturl::application::services::{DEFAULT_ALLOCATION_RETRIES, UrlService};
use shorturl::domain::repositories::UrlRepository;
use shorturl::infrastructure::dns::DnsResolver;
use shorturl::infrastructure::persistence::PgUrlRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing shorturl.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all short URLs
    List,

    /// Show the original URL for a short URL
    Resolve {
        /// Short URL (integer)
        short_url: String,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let repo: Arc<dyn UrlRepository> = Arc::new(PgUrlRepository::new(Arc::new(pool.clone())));

    match cli.command {
        Commands::List => list_urls(repo).await?,
        Commands::Resolve { short_url } => resolve_url(repo, &short_url).await?,
        Commands::Stats => handle_stats(repo).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Prints every mapping ordered by short URL.
async fn list_urls(repo: Arc<dyn UrlRepository>) -> Result<()> {
    let mut records = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;
    records.sort_by_key(|r| r.short_url);

    if records.is_empty() {
        println!("{}", "No short URLs yet".yellow());
        return Ok(());
    }

    println!("{}", "🔗 Short URLs".bright_blue().bold());
    println!();

    for record in &records {
        println!(
            "  {:>8}  {}  {}",
            record.short_url.to_string().bright_green().bold(),
            record.original_url.cyan(),
            record
                .created_at
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black()
        );
    }
    println!();

    Ok(())
}

/// Resolves a short URL with the same parsing rules as the HTTP endpoint.
async fn resolve_url(repo: Arc<dyn UrlRepository>, short_url: &str) -> Result<()> {
    let service = UrlService::new(repo, Arc::new(DnsResolver::new()), DEFAULT_ALLOCATION_RETRIES);

    match service.resolve(short_url).await {
        Ok(record) => {
            println!(
                "  {} → {}",
                record.short_url.to_string().bright_green().bold(),
                record.original_url.cyan()
            );
        }
        Err(e) => {
            eprintln!("{} {}", "❌".red(), e.to_string().red());
            return Err(e).with_context(|| format!("Failed to resolve short URL '{short_url}'"));
        }
    }

    Ok(())
}

/// Displays record count and the highest issued short URL.
async fn handle_stats(repo: Arc<dyn UrlRepository>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let total = repo
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .len();

    let latest = repo
        .find_latest()
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?;

    println!(
        "  Short URLs:        {}",
        total.to_string().bright_green().bold()
    );
    println!(
        "  Highest short URL: {}",
        latest
            .map(|r| r.short_url.to_string())
            .unwrap_or_else(|| "-".to_string())
            .bright_green()
            .bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
    }

    Ok(())
}
