//! Transaction CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::display::transaction::format_transaction_list;
use crate::error::{SaldoError, SaldoResult};
use crate::models::{Category, Money, Recurrence, RecurrenceFrequency, TransactionKind};
use crate::services::{
    AccountService, CardService, RecordTransactionInput, TransactionService,
};
use crate::storage::Storage;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Record a new transaction
    Add {
        /// Description
        description: String,
        /// Amount (e.g., "99.90")
        amount: String,
        /// Account name or ID
        #[arg(short, long)]
        account: String,
        /// Category (food, housing, transport, entertainment, health,
        /// education, salary, investment, others)
        #[arg(short, long, default_value = "others")]
        category: String,
        /// Record as income instead of expense
        #[arg(long)]
        income: bool,
        /// Date (YYYY-MM-DD, defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Charge to this card instead of debiting the account
        #[arg(long)]
        card: Option<String>,
        /// Repeat frequency (daily, weekly, monthly, yearly)
        #[arg(long)]
        repeat: Option<String>,
    },
    /// List transactions, most recent first
    List {
        /// Show at most this many
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

fn parse_date(s: &str) -> SaldoResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| SaldoError::Validation(format!("Invalid date: '{}'. Use YYYY-MM-DD", s)))
}

fn parse_frequency(s: &str) -> SaldoResult<RecurrenceFrequency> {
    match s.to_lowercase().as_str() {
        "daily" => Ok(RecurrenceFrequency::Daily),
        "weekly" => Ok(RecurrenceFrequency::Weekly),
        "monthly" => Ok(RecurrenceFrequency::Monthly),
        "yearly" => Ok(RecurrenceFrequency::Yearly),
        _ => Err(SaldoError::Validation(format!(
            "Invalid frequency: '{}'. Valid: daily, weekly, monthly, yearly",
            s
        ))),
    }
}

/// Handle a transaction command
pub fn handle_transaction_command(storage: &Storage, cmd: TransactionCommands) -> SaldoResult<()> {
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            description,
            amount,
            account,
            category,
            income,
            date,
            card,
            repeat,
        } => {
            let amount = Money::parse(&amount).map_err(|e| {
                SaldoError::Validation(format!("Invalid amount format: '{}'. {}", amount, e))
            })?;

            let category = Category::parse(&category).ok_or_else(|| {
                SaldoError::Validation(format!("Invalid category: '{}'", category))
            })?;

            let account = AccountService::new(storage)
                .find(&account)?
                .ok_or_else(|| SaldoError::account_not_found(&account))?;

            let card_id = match card {
                Some(identifier) => Some(
                    CardService::new(storage)
                        .find(&identifier)?
                        .ok_or_else(|| SaldoError::card_not_found(&identifier))?
                        .id,
                ),
                None => None,
            };

            let date = match date {
                Some(s) => parse_date(&s)?,
                None => Local::now().date_naive(),
            };

            let recurrence = match repeat {
                Some(s) => Some(Recurrence {
                    frequency: parse_frequency(&s)?,
                    end_date: None,
                }),
                None => None,
            };

            let kind = if income {
                TransactionKind::Income
            } else {
                TransactionKind::Expense
            };

            let txn = service.record(RecordTransactionInput {
                description,
                amount,
                date,
                category,
                kind,
                account_id: account.id,
                card_id,
                recurrence,
            })?;

            println!("Transação registrada: {}", txn.description);
            println!("  Valor:     {}", txn.amount);
            println!("  Categoria: {}", txn.category);
            println!("  Data:      {}", txn.date.format("%d/%m/%Y"));
        }

        TransactionCommands::List { limit } => {
            let transactions = service.list(limit)?;
            print!("{}", format_transaction_list(&transactions));
        }
    }

    Ok(())
}
