use std::io;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};

use expense_tracker::cli::{
    handle_expense_command, handle_export_command, handle_income_command, handle_report_command,
    handle_serve_command, Console, ExpenseCommands, ExportCommands, IncomeCommands,
    ReportCommands, ServeArgs,
};
use expense_tracker::config::{Settings, TrackerPaths};
use expense_tracker::logging::init_tracing;
use expense_tracker::services::Ledger;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Track expenses and income from the terminal or over HTTP",
    long_about = "Expense Tracker records expenses and income, reports monthly and \
                  overall savings, and serves the same ledger over a small JSON API."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive console (default)
    Console {
        /// Keep transactions in memory only; nothing is read or saved
        #[arg(long)]
        in_memory: bool,
    },

    /// Run the HTTP API
    Serve(ServeArgs),

    /// Expense commands
    #[command(subcommand)]
    Expense(ExpenseCommands),

    /// Income commands
    #[command(subcommand)]
    Income(IncomeCommands),

    /// Summaries and listings
    #[command(subcommand)]
    Report(ReportCommands),

    /// Export the ledger
    #[command(subcommand)]
    Export(ExportCommands),

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.command {
        Some(Commands::Serve(_)) => "info",
        _ => "warn",
    };
    init_tracing(default_level);

    // Initialize paths and settings
    let paths = TrackerPaths::new()?;
    paths.ensure_directories()?;
    let settings = Settings::load_or_create(&paths)?;

    let open_ledger = || Ledger::open(paths.transactions_file());

    match cli.command.unwrap_or(Commands::Console { in_memory: false }) {
        Commands::Console { in_memory } => {
            let ledger = if in_memory {
                Ledger::in_memory()
            } else {
                open_ledger()
            };
            let stdin = io::stdin();
            Console::new(&ledger, &settings, stdin.lock(), io::stdout()).run()?;
        }
        Commands::Serve(args) => {
            let server_settings = args.apply(settings.server.clone());
            handle_serve_command(Arc::new(open_ledger()), server_settings)?;
        }
        Commands::Expense(cmd) => handle_expense_command(&open_ledger(), &settings, cmd)?,
        Commands::Income(cmd) => handle_income_command(&open_ledger(), &settings, cmd)?,
        Commands::Report(cmd) => handle_report_command(&open_ledger(), &settings, cmd)?,
        Commands::Export(cmd) => handle_export_command(&open_ledger(), cmd)?,
        Commands::Config => print_config(&paths, &settings),
    }

    Ok(())
}

fn print_config(paths: &TrackerPaths, settings: &Settings) {
    println!("Expense Tracker Configuration");
    println!("=============================");
    println!("Base directory:    {}", paths.base_dir().display());
    println!("Settings file:     {}", paths.settings_file().display());
    println!("Transactions file: {}", paths.transactions_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Date format:     {}", settings.date_format);
    println!();
    println!("Server:");
    println!("  Listen address:  {}", settings.server.listen_addr());
    println!("  Index file:      {}", settings.server.index_file.display());
    println!("  Max body bytes:  {}", settings.server.max_body_bytes);
    println!("  Request timeout: {}s", settings.server.request_timeout_secs);
}
