//! CLI command handlers
//!
//! Bridges the clap argument parsing with the service layer.

pub mod account;
pub mod budget;
pub mod card;
pub mod config;
pub mod export;
pub mod goal;
pub mod report;
pub mod transaction;

pub use account::{handle_account_command, AccountCommands};
pub use budget::{handle_budget_command, BudgetCommands};
pub use card::{handle_card_command, CardCommands};
pub use config::{handle_config_command, ConfigCommands};
pub use export::{handle_export_command, ExportCommands};
pub use goal::{handle_goal_command, GoalCommands};
pub use report::{handle_dashboard, handle_projection, handle_review, ReviewCommands};
pub use transaction::{handle_transaction_command, TransactionCommands};
