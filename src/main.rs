use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use spendlimit::cli::{
    handle_audit_command, handle_category_command, handle_limit_command, handle_spending_command,
};
use spendlimit::config::{paths::LedgerPaths, settings::Settings};
use spendlimit::logging::init_logging;
use spendlimit::models::DEFAULT_CATEGORIES;
use spendlimit::storage::Storage;

#[derive(Parser)]
#[command(
    name = "spendlimit",
    version,
    about = "Track spendings by category against monthly limits",
    long_about = "SpendLimit records what you spend, groups it by category, and \
                  compares each category against the limit you set for the month."
)]
struct Cli {
    /// Directory holding config.json, audit.log and the data files
    #[arg(long, global = true, env = "SPENDLIMIT_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory with default categories
    Init,

    /// Show current configuration and paths
    Config,

    /// Category management commands
    #[command(subcommand)]
    Category(spendlimit::cli::CategoryCommands),

    /// Spending commands
    #[command(subcommand)]
    Spending(spendlimit::cli::SpendingCommands),

    /// Monthly limit commands
    #[command(subcommand)]
    Limit(spendlimit::cli::LimitCommands),

    /// Show recent audit log records
    Audit {
        /// Number of records to show
        #[arg(short = 'n', long, default_value = "20")]
        count: usize,

        /// Only records touching this category
        #[arg(short, long)]
        category: Option<String>,
    },
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => LedgerPaths::with_base_dir(dir),
        None => LedgerPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing SpendLimit at: {}", paths.base_dir().display());
            spendlimit::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Default categories: {}", DEFAULT_CATEGORIES.join(", "));
            println!();
            println!("Run 'spendlimit spending add <amount> <category>' to record a spending.");
        }
        Some(Commands::Config) => {
            println!("SpendLimit Configuration");
            println!("========================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!("Initialized:    {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default sort:    {}", settings.default_sort_mode);
            println!("  Currency symbol: {:?}", settings.currency_symbol);
            println!("  Date format:     {}", settings.date_format);
            println!("  Audit enabled:   {}", settings.audit_enabled);
        }
        Some(Commands::Category(cmd)) => {
            let storage = Storage::open(paths)?.with_audit(settings.audit_enabled);
            handle_category_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Spending(cmd)) => {
            let storage = Storage::open(paths)?.with_audit(settings.audit_enabled);
            handle_spending_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Limit(cmd)) => {
            let storage = Storage::open(paths)?.with_audit(settings.audit_enabled);
            handle_limit_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Audit { count, category }) => {
            let storage = Storage::open(paths)?.with_audit(settings.audit_enabled);
            handle_audit_command(&storage, count, category.as_deref())?;
        }
        None => {
            println!("SpendLimit - spendings and monthly limits");
            println!();
            println!("Run 'spendlimit --help' for usage information.");
            println!("Run 'spendlimit init' to get started.");
        }
    }

    Ok(())
}
