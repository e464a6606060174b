use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use saldo::cli::{
    handle_account_command, handle_budget_command, handle_card_command, handle_config_command,
    handle_dashboard, handle_export_command, handle_goal_command, handle_projection,
    handle_review, handle_transaction_command,
};
use saldo::config::paths::SaldoPaths;
use saldo::storage::Storage;

#[derive(Parser)]
#[command(
    name = "saldo",
    version,
    about = "Personal finance dashboard for the terminal",
    long_about = "saldo tracks your accounts, cards, transactions, goals and \
                  budgets locally, and aggregates them into a dashboard with \
                  balance projections and AI-assisted reviews."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard: totals, category breakdown, 7-day cash flow
    Dashboard,

    /// Account management commands
    #[command(subcommand)]
    Account(saldo::cli::AccountCommands),

    /// Credit card management commands
    #[command(subcommand)]
    Card(saldo::cli::CardCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(saldo::cli::TransactionCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(saldo::cli::GoalCommands),

    /// Budget ceiling commands
    #[command(subcommand)]
    Budget(saldo::cli::BudgetCommands),

    /// Project the balance under a what-if scenario
    Projection {
        /// Extra monthly income to assume (e.g., "500.00")
        #[arg(long)]
        extra_income: Option<String>,
        /// Monthly spending cut to assume (e.g., "300.00")
        #[arg(long)]
        spending_cut: Option<String>,
    },

    /// Generate an AI financial review, or ask a question
    Review {
        #[command(subcommand)]
        command: Option<saldo::cli::ReviewCommands>,
    },

    /// Export data
    #[command(subcommand)]
    Export(saldo::cli::ExportCommands),

    /// Settings commands
    #[command(subcommand)]
    Config(saldo::cli::ConfigCommands),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = SaldoPaths::new()?;
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Commands::Dashboard => handle_dashboard(&storage)?,
        Commands::Account(cmd) => handle_account_command(&storage, cmd)?,
        Commands::Card(cmd) => handle_card_command(&storage, cmd)?,
        Commands::Transaction(cmd) => handle_transaction_command(&storage, cmd)?,
        Commands::Goal(cmd) => handle_goal_command(&storage, cmd)?,
        Commands::Budget(cmd) => handle_budget_command(&storage, cmd)?,
        Commands::Projection {
            extra_income,
            spending_cut,
        } => handle_projection(&storage, extra_income, spending_cut)?,
        Commands::Review { command } => handle_review(&storage, command)?,
        Commands::Export(cmd) => handle_export_command(&storage, cmd)?,
        Commands::Config(cmd) => handle_config_command(&paths, cmd)?,
    }

    Ok(())
}
