use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::{
    handle_add_command, handle_chart_command, handle_export_command, handle_list_command,
    handle_summary_command, AddArgs, ExportCommands,
};
use budget_tracker::config::{AggregationMode, BudgetPaths, Settings};
use budget_tracker::display::format_schedule;
use budget_tracker::models::{BudgetSchedule, ExpenseRecord};
use budget_tracker::storage::{read_json, Storage};

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Record expenses by category and month, see monthly totals against \
                  a fixed budget, and export the ledger as CSV."
)]
struct Cli {
    /// Log level used when RUST_LOG is not set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense
    Add(AddArgs),

    /// List recorded expenses in the order they were added
    #[command(alias = "ls")]
    List {
        /// Only show this month label (exact match)
        #[arg(short, long)]
        month: Option<String>,
    },

    /// Show per-month, per-category totals
    Summary {
        /// How to treat categories outside the budget schedule
        #[arg(long, value_enum)]
        mode: Option<AggregationMode>,

        /// Write the summary to a CSV file instead of printing it
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw monthly spending as a stacked bar chart
    Chart {
        /// How to treat categories outside the budget schedule
        #[arg(long, value_enum)]
        mode: Option<AggregationMode>,

        /// Length of the longest bar in characters
        #[arg(short, long)]
        width: Option<usize>,
    },

    /// Show the budget categories and their monthly ceilings
    Categories,

    /// Export the expense ledger
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config {
        /// Write the current settings to the config file
        #[arg(long)]
        init: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.log_level);
    debug!("Log level set to {}", cli.log_level);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let paths = BudgetPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let schedule = BudgetSchedule::default();

    // Only commands that touch the ledger open it; loading may move a corrupt file aside
    let open_storage = || Storage::open(paths.clone());

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&mut open_storage()?, &schedule, args)?,
        Some(Commands::List { month }) => {
            handle_list_command(&open_storage()?, &schedule, month)?
        }
        Some(Commands::Summary { mode, output }) => {
            handle_summary_command(&open_storage()?, &settings, &schedule, mode, output)?
        }
        Some(Commands::Chart { mode, width }) => {
            handle_chart_command(&open_storage()?, &settings, &schedule, mode, width)?
        }
        Some(Commands::Categories) => {
            print!("{}", format_schedule(&schedule, &settings.currency_symbol))
        }
        Some(Commands::Export(cmd)) => handle_export_command(&open_storage()?, &settings, cmd)?,
        Some(Commands::Config { init }) => {
            if init {
                settings.save(&paths)?;
                println!("Settings written to: {}", paths.settings_file().display());
                println!();
            }
            println!("budget-tracker configuration");
            println!("============================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Expenses file:  {}", paths.expenses_file().display());
            println!();
            println!("Settings:");
            println!("  Aggregation:     {}", settings.aggregation);
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Chart width:     {}", settings.chart_width);
            println!("  Quoted CSV:      {}", settings.csv_quoted);
            println!();
            match read_json::<Vec<ExpenseRecord>, _>(paths.expenses_file()) {
                Ok(records) => println!("Recorded expenses: {}", records.len()),
                Err(e) => println!("Recorded expenses: unreadable ({e})"),
            }
        }
        None => {
            println!("budget - personal budget tracker");
            println!();
            println!("Run 'budget --help' for usage information.");
            println!("Run 'budget add --category 교통비 --amount 1250 --month 6' to record an expense.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        // RUST_LOG exists; use it.
        Some(_) => EnvFilter::from_default_env(),
        // Otherwise apply the level to this crate only.
        None => EnvFilter::new(format!(
            "{}={level},budget_tracker={level}",
            env!("CARGO_CRATE_NAME")
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
