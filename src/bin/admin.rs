//! CLI administration tool for alias-shortener.
//!
//! Works directly against the JSON snapshot under `STORAGE_ROOT`, without
//! going through the HTTP API. Stop the server first: the server keeps its
//! own in-memory copy and will overwrite changes made here on its next write.
//!
//! # Usage
//!
//! ```bash
//! # Load the snapshot and report its size
//! cargo run --bin admin -- check
//!
//! # List aliases owned by a user
//! cargo run --bin admin -- list --owner aaa@bbb.com
//!
//! # Show a single alias
//! cargo run --bin admin -- show promo
//!
//! # Delete an alias on behalf of its owner
//! cargo run --bin admin -- delete promo --owner aaa@bbb.com
//! ```
//!
//! # Environment Variables
//!
//! - `STORAGE_ROOT` (optional): directory holding `alias-repository.json` (default: `./data`)
//!
//! The tool never creates storage: if the snapshot does not exist yet it says
//! so and exits.

use alias_shortener::domain::AliasError;
use alias_shortener::domain::repositories::AliasRepository;
use alias_shortener::infrastructure::persistence::{FileAliasRepository, SNAPSHOT_FILE_NAME};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use std::path::PathBuf;

/// CLI tool for managing alias-shortener storage.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Storage directory (overrides STORAGE_ROOT)
    #[arg(long, global = true)]
    storage_root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the snapshot and report how many aliases it holds
    Check,

    /// List aliases owned by a user
    List {
        /// Owner email
        #[arg(short, long)]
        owner: String,
    },

    /// Show a single alias
    Show {
        alias: String,
    },

    /// Delete an alias owned by a user
    Delete {
        alias: String,

        /// Owner email; the alias is only removed if it matches
        #[arg(short, long)]
        owner: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let storage_root = cli
        .storage_root
        .or_else(|| std::env::var("STORAGE_ROOT").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("./data"));

    let Some(repo) = FileAliasRepository::open_existing(&storage_root).with_context(|| {
        format!(
            "Failed to open alias storage at {}",
            storage_root.display()
        )
    })?
    else {
        println!(
            "{} {}",
            "⚠️  No snapshot found at".yellow(),
            storage_root.join(SNAPSHOT_FILE_NAME).display()
        );
        println!("  Start the server once to create it.");
        return Ok(());
    };

    match cli.command {
        Commands::Check => check(&repo),
        Commands::List { owner } => list_aliases(&repo, &owner),
        Commands::Show { alias } => show_alias(&repo, &alias),
        Commands::Delete { alias, owner, yes } => delete_alias(&repo, &alias, &owner, yes)?,
    }

    Ok(())
}

fn check(repo: &FileAliasRepository) {
    println!("{}", "🔍 Checking alias storage...".bright_blue().bold());
    println!();
    println!("  Snapshot: {}", repo.path().display().to_string().cyan());
    println!(
        "  Aliases:  {}",
        repo.count().to_string().bright_white().bold()
    );
    println!();
    println!("{}", "✅ Snapshot loaded successfully".green().bold());
}

/// Lists aliases owned by `owner`, sorted by alias.
///
/// # Output Format
///
/// ```text
/// 📋 Aliases for aaa@bbb.com
///
///   Alias            URL
///   ──────────────────────────────────────────────────────────────
///   promo            https://example.com/spring-sale
/// ```
fn list_aliases(repo: &FileAliasRepository, owner: &str) {
    println!(
        "{} {}",
        "📋 Aliases for".bright_blue().bold(),
        owner.bright_blue().bold()
    );
    println!();

    let mut aliases = repo.list_by_owner(owner);
    if aliases.is_empty() {
        println!("{}", "  No aliases found".yellow());
        return;
    }
    aliases.sort_by(|a, b| a.alias.cmp(&b.alias));

    println!(
        "  {:<16} {}",
        "Alias".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for record in &aliases {
        println!("  {:<16} {}", record.alias.cyan(), record.target_url);
    }

    println!();
    println!(
        "  Total: {}",
        aliases.len().to_string().bright_white().bold()
    );
    println!();
}

fn show_alias(repo: &FileAliasRepository, alias: &str) {
    match repo.find(alias) {
        Some(record) => {
            println!("{}", "Alias details:".bright_white().bold());
            println!("  Alias: {}", record.alias.cyan());
            println!("  URL:   {}", record.target_url);
            println!("  Owner: {}", record.owner.bright_yellow());
        }
        None => println!("{} {}", "❌ Alias not found:".red(), alias),
    }
}

fn delete_alias(
    repo: &FileAliasRepository,
    alias: &str,
    owner: &str,
    skip_confirm: bool,
) -> Result<()> {
    println!("{}", "🗑️  Delete Alias".bright_blue().bold());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete '{}' owned by {}?", alias, owner))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    match repo.delete(owner, alias) {
        Ok(true) => println!("{}", "✅ Alias deleted".green().bold()),
        Ok(false) => println!("{} {}", "⚠️  Alias not found:".yellow(), alias),
        Err(AliasError::PermissionDenied(_)) => {
            println!(
                "{} {}",
                "❌ Alias is owned by another user:".red(),
                alias
            );
        }
        Err(e) => return Err(anyhow::Error::new(e).context("Failed to delete alias")),
    }

    Ok(())
}
