mod inventory;
mod shopping;

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use larder_core::{
    classify, parse_expiry, Clock, ExpiryInfo, FileStore, Kitchen, KitchenConfig, SystemClock,
};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "larder")]
#[command(about = "Larder kitchen inventory CLI", long_about = None)]
struct Cli {
    /// Directory holding the kitchen data files
    #[arg(long, global = true, env = "LARDER_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Guess the category and icon for an item name
    Classify { name: String },
    /// Show the expiry status of a date
    Expiry {
        /// YYYY-MM-DD, an RFC 3339 timestamp, or "N days"
        date: String,
        /// Evaluate as of this date instead of today
        #[arg(long)]
        today: Option<NaiveDate>,
    },
    /// Add an item to the inventory
    Add(inventory::AddArgs),
    /// List the inventory
    List,
    /// Show items expiring soon
    Expiring {
        /// Days ahead to look
        #[arg(long, default_value_t = larder_core::expiry::DEFAULT_EXPIRING_WINDOW_DAYS)]
        window: i64,
        /// Maximum items shown
        #[arg(long, default_value_t = larder_core::expiry::DEFAULT_EXPIRING_LIMIT)]
        limit: usize,
    },
    /// Import an inventory spreadsheet export
    ImportCsv {
        file: PathBuf,
        /// Show what would be imported without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Import grocery purchases from a card or bank statement
    ImportBank {
        file: PathBuf,
        /// Show what would be imported without saving
        #[arg(long)]
        dry_run: bool,
    },
    /// Manage the shopping list
    Shopping {
        #[command(subcommand)]
        command: shopping::ShoppingCommand,
    },
}

fn open_kitchen(data_dir: Option<PathBuf>) -> Kitchen {
    let config = KitchenConfig::from_env();
    let dir = data_dir.unwrap_or(config.data_dir);
    tracing::debug!(data_dir = %dir.display(), "Opening kitchen");
    Kitchen::new(FileStore::new(dir), Arc::new(SystemClock)).with_shelf_life(config.shelf_life_days)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Classify { name } => {
            let details = classify(&name);
            println!("{} {} ({})", details.icon, name.trim(), details.category.label());
        }
        Commands::Expiry { date, today } => {
            let today = today.unwrap_or_else(|| SystemClock.today());
            let info = ExpiryInfo::compute(parse_expiry(&date, today), today);
            println!("{}", serde_json::to_string_pretty(&info)?);
        }
        Commands::Add(args) => inventory::add(&open_kitchen(cli.data_dir), args)?,
        Commands::List => inventory::list(&open_kitchen(cli.data_dir))?,
        Commands::Expiring { window, limit } => {
            inventory::expiring(&open_kitchen(cli.data_dir), window, limit)?
        }
        Commands::ImportCsv { file, dry_run } => {
            inventory::import_csv(&open_kitchen(cli.data_dir), &file, dry_run)?
        }
        Commands::ImportBank { file, dry_run } => {
            inventory::import_bank(&open_kitchen(cli.data_dir), &file, dry_run)?
        }
        Commands::Shopping { command } => shopping::run(&open_kitchen(cli.data_dir), command)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_nested_shopping_command() {
        let cli = Cli::try_parse_from(["larder", "--data-dir", "/tmp/k", "shopping", "check", "3"])
            .unwrap();
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/k")));
        assert!(matches!(
            cli.command,
            Commands::Shopping {
                command: shopping::ShoppingCommand::Check { id: 3 }
            }
        ));
    }
}
