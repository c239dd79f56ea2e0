use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use expenses_cli::cli::{
    handle_add, handle_clear, handle_delete, handle_export_csv, handle_read, handle_summary,
    handle_update,
};
use expenses_cli::error::ExpenseError;
use expenses_cli::storage::JsonFileStore;

/// Storage file used when no `--file` is given
const DEFAULT_STORE_FILE: &str = "expenses.json";

#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Personal expense tracker for the command line",
    long_about = "Records, edits, deletes, lists, summarizes, and exports \
                  expense entries persisted in a local JSON file."
)]
struct Cli {
    /// Expense storage file (must exist if given explicitly)
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all recorded expenses
    Read,

    /// Add a new expense
    #[command(alias = "create")]
    Add {
        /// Description of the expense
        #[arg(long)]
        name: String,
        /// Amount as a decimal, e.g. 3.50
        #[arg(long)]
        amount: Decimal,
    },

    /// Update the name and amount of an expense
    #[command(alias = "edit")]
    Update {
        /// Id of the expense to update
        #[arg(long)]
        id: u32,
        /// New description
        #[arg(long)]
        name: String,
        /// New amount as a decimal
        #[arg(long)]
        amount: Decimal,
    },

    /// Delete an expense by id
    #[command(alias = "remove")]
    Delete {
        /// Id of the expense to delete
        #[arg(long)]
        id: u32,
    },

    /// Wipe all recorded expenses
    Clear,

    /// Print the aggregate total, optionally for one month
    Summary {
        /// Month to filter by (1-12)
        #[arg(long)]
        month: Option<u32>,
        /// Year to filter by; defaults to the current year
        #[arg(long)]
        year: Option<i32>,
    },

    /// Export all expenses to a CSV file
    ExportCsv {
        /// CSV output file
        #[arg(long, default_value = "expenses.csv")]
        out: PathBuf,
    },
}

/// Resolve the storage file before any command runs
///
/// An explicitly given path must already exist; the default path is created
/// on first use with an empty collection.
fn open_store(file: Option<PathBuf>) -> Result<JsonFileStore> {
    let path = match file {
        Some(path) => {
            if !path.exists() {
                return Err(ExpenseError::FileNotFound(path).into());
            }
            path
        }
        None => PathBuf::from(DEFAULT_STORE_FILE),
    };

    Ok(JsonFileStore::open(path)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = open_store(cli.file)?;

    match cli.command {
        Commands::Read => handle_read(&store)?,
        Commands::Add { name, amount } => handle_add(&store, &name, amount)?,
        Commands::Update { id, name, amount } => handle_update(&store, id, &name, amount)?,
        Commands::Delete { id } => handle_delete(&store, id)?,
        Commands::Clear => handle_clear(&store)?,
        Commands::Summary { month, year } => handle_summary(&store, month, year)?,
        Commands::ExportCsv { out } => handle_export_csv(&store, &out)?,
    }

    Ok(())
}
