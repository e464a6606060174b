//! Dashboard, projection and review commands

use chrono::Local;
use clap::Subcommand;

use crate::display::dashboard::{render_dashboard, render_projection, render_review};
use crate::error::{SaldoError, SaldoResult};
use crate::insight::{transaction_context, InsightClient};
use crate::models::Money;
use crate::reports::{self, Scenario};
use crate::storage::Storage;

#[derive(Subcommand)]
pub enum ReviewCommands {
    /// Ask a free-form question about your finances
    Ask {
        /// The question to ask
        question: String,
    },
}

/// Print the dashboard: headline figures, category breakdown, 7-day flow
pub fn handle_dashboard(storage: &Storage) -> SaldoResult<()> {
    let summary = reports::dashboard_summary(storage)?;
    let flow = reports::seven_day_flow(storage, Local::now().date_naive())?;
    print!("{}", render_dashboard(&summary, &flow));
    Ok(())
}

/// Print a what-if balance projection
pub fn handle_projection(
    storage: &Storage,
    extra_income: Option<String>,
    spending_cut: Option<String>,
) -> SaldoResult<()> {
    let parse = |s: Option<String>, what: &str| -> SaldoResult<Money> {
        match s {
            Some(s) => Money::parse(&s).map_err(|e| {
                SaldoError::Validation(format!("Invalid {} format: '{}'. {}", what, s, e))
            }),
            None => Ok(Money::zero()),
        }
    };

    let scenario = Scenario {
        extra_income: parse(extra_income, "extra income")?,
        spending_cut: parse(spending_cut, "spending cut")?,
    };

    let summary = reports::dashboard_summary(storage)?;
    let projection = reports::project(summary.balance, summary.income, summary.expense, scenario);
    print!("{}", render_projection(summary.balance, &projection));
    Ok(())
}

/// Generate a financial review, or answer a free-form question
pub fn handle_review(storage: &Storage, command: Option<ReviewCommands>) -> SaldoResult<()> {
    let client = InsightClient::new();
    let transactions = storage.transactions.get_all()?;

    match command {
        Some(ReviewCommands::Ask { question }) => {
            let context = transaction_context(&transactions);
            println!("{}", client.ask(&question, &context));
        }
        None => {
            let review = client.review(&transactions);
            print!("{}", render_review(&review));
        }
    }

    Ok(())
}
