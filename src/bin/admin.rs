//! CLI administration tool for travel-booking-api.
//!
//! Provides database diagnostics, row statistics and user account
//! maintenance without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Row counts per table
//! cargo run --bin admin -- stats
//!
//! # List users that are not soft-deleted
//! cargo run --bin admin -- user list --active
//!
//! # Permanently delete a user without prompting
//! cargo run --bin admin -- user delete 42 -y
//! ```
//!
//! # Environment Variables
//!
//! Same database settings as the server (`DATABASE_URL` or `DB_*` components).

use travel_booking_api::config;
use travel_booking_api::domain::entities::User;
use travel_booking_api::domain::repositories::{CrudRepository, SoftDeleteRepository};
use travel_booking_api::infrastructure::persistence::lifecycle::count_rows;
use travel_booking_api::infrastructure::persistence::{
    PLAIN_TABLES, PgUserRepository, SOFT_DELETE_TABLES,
};
use travel_booking_api::server::connect_pool;
use travel_booking_api::utils::password::verify_password;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Password};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing travel-booking-api.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Show row counts per table
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// User maintenance subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// List users
    List {
        /// Only users that are not soft-deleted
        #[arg(short, long)]
        active: bool,
    },

    /// Mark a user as deleted
    SoftDelete { id: i32 },

    /// Clear a user's deletion mark
    Restore { id: i32 },

    /// Permanently delete a user
    Delete {
        id: i32,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Check a password against a user's stored hash
    Verify { id: i32 },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::User { action } => handle_user_action(action, pool).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches user maintenance commands.
async fn handle_user_action(action: UserAction, pool: PgPool) -> Result<()> {
    let repo = PgUserRepository::new(Arc::new(pool));

    match action {
        UserAction::List { active } => list_users(&repo, active).await?,
        UserAction::SoftDelete { id } => {
            let found = repo
                .soft_delete(id)
                .await
                .context("Failed to soft-delete user")?;
            report(found, id, "soft-deleted");
        }
        UserAction::Restore { id } => {
            let found = repo.restore(id).await.context("Failed to restore user")?;
            report(found, id, "restored");
        }
        UserAction::Delete { id, yes } => delete_user(&repo, id, yes).await?,
        UserAction::Verify { id } => verify_user(&repo, id).await?,
    }

    Ok(())
}

fn report(found: bool, id: i32, action: &str) {
    if found {
        println!("{}", format!("✅ User {id} {action}").green().bold());
    } else {
        println!("{}", format!("⚠️  User {id} not found").yellow());
    }
}

/// Lists users with their soft-delete status.
///
/// # Output Format
///
/// ```text
/// 👥 Users
///
///   ID    Username             Email                          Registered        Status
///   ─────────────────────────────────────────────────────────────────────────────────────
///   1     alice                alice@example.com              2025-01-15 10:30  ACTIVE
///   2     bob                  bob@example.com                2025-01-16 14:20  DELETED
/// ```
async fn list_users(repo: &PgUserRepository, only_active: bool) -> Result<()> {
    println!("{}", "👥 Users".bright_blue().bold());
    println!();

    let users = if only_active {
        repo.find_all_active().await
    } else {
        repo.find_all().await
    }
    .context("Failed to list users")?;

    if users.is_empty() {
        println!("{}", "  No users found".yellow());
        return Ok(());
    }

    println!(
        "  {:<5} {:<20} {:<30} {:<17} {:<8}",
        "ID".bright_white().bold(),
        "Username".bright_white().bold(),
        "Email".bright_white().bold(),
        "Registered".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(85).bright_black());

    for user in &users {
        let status = if user.is_deleted() {
            "DELETED".red()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<5} {:<20} {:<30} {:<17} {}",
            user.user_id.to_string().bright_black(),
            user.username.cyan(),
            user.email,
            user.registration_date
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", users.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

async fn find_user(repo: &PgUserRepository, id: i32) -> Result<User> {
    repo.find_by_id(id)
        .await
        .context("Failed to load user")?
        .with_context(|| format!("User {id} not found"))
}

/// Permanently deletes a user after confirmation (default: No).
async fn delete_user(repo: &PgUserRepository, id: i32, skip_confirm: bool) -> Result<()> {
    println!("{}", "🗑  Delete User".bright_blue().bold());
    println!();

    let user = find_user(repo, id).await?;

    println!("  User:  {}", user.username.cyan());
    println!("  Email: {}", user.email);
    println!("  ID:    {}", user.user_id.to_string().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this user permanently? Role and activity links go with it")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = repo.delete(id).await.context("Failed to delete user")?;
    report(deleted, id, "deleted permanently");

    Ok(())
}

/// Prompts for a password and checks it against the stored Argon2 hash.
async fn verify_user(repo: &PgUserRepository, id: i32) -> Result<()> {
    let user = find_user(repo, id).await?;

    let password = Password::new()
        .with_prompt(format!("Password for {}", user.username))
        .interact()?;

    let matches = verify_password(&password, &user.password_hash)
        .map_err(|e| anyhow::anyhow!("Stored hash for user {id} is unusable: {e}"))?;

    if matches {
        println!("{}", "✅ Password matches".green().bold());
    } else {
        println!("{}", "❌ Password does not match".red().bold());
    }

    Ok(())
}

/// Displays total and soft-deleted row counts for every table.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    println!(
        "  {:<24} {:>8} {:>8}",
        "Table".bright_white().bold(),
        "Total".bright_white().bold(),
        "Deleted".bright_white().bold()
    );

    let tables = SOFT_DELETE_TABLES
        .iter()
        .map(|t| (*t, true))
        .chain(PLAIN_TABLES.iter().map(|t| (*t, false)));

    for (table, soft_delete) in tables {
        let (total, deleted) = count_rows(pool, table, soft_delete)
            .await
            .with_context(|| format!("Failed to count rows in {table}"))?;

        let deleted = if soft_delete {
            deleted.to_string().yellow()
        } else {
            "-".bright_black()
        };

        println!(
            "  {:<24} {:>8} {:>8}",
            table.cyan(),
            total.to_string().bright_green().bold(),
            deleted
        );
    }
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
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
