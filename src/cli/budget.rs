//! Budget CLI commands

use clap::Subcommand;

use crate::display::goal::format_budget_list;
use crate::error::{SaldoError, SaldoResult};
use crate::models::{Category, Money};
use crate::services::BudgetService;
use crate::storage::Storage;

/// Budget subcommands
#[derive(Subcommand)]
pub enum BudgetCommands {
    /// Set the monthly ceiling for a category
    Set {
        /// Category
        category: String,
        /// Monthly limit (e.g., "800.00")
        limit: String,
    },
    /// List all budgets
    List,
    /// Remove the ceiling for a category
    Unset {
        /// Category
        category: String,
    },
}

fn parse_category(s: &str) -> SaldoResult<Category> {
    Category::parse(s).ok_or_else(|| SaldoError::Validation(format!("Invalid category: '{}'", s)))
}

/// Handle a budget command
pub fn handle_budget_command(storage: &Storage, cmd: BudgetCommands) -> SaldoResult<()> {
    let service = BudgetService::new(storage);

    match cmd {
        BudgetCommands::Set { category, limit } => {
            let category = parse_category(&category)?;
            let limit = Money::parse(&limit).map_err(|e| {
                SaldoError::Validation(format!("Invalid limit format: '{}'. {}", limit, e))
            })?;

            let budget = service.set(category, limit)?;
            println!("Orçamento definido: {} até {}", budget.category, budget.limit);
        }

        BudgetCommands::List => {
            let budgets = service.list()?;
            print!("{}", format_budget_list(&budgets));
        }

        BudgetCommands::Unset { category } => {
            let category = parse_category(&category)?;
            if service.unset(category)? {
                println!("Orçamento removido: {}", category);
            } else {
                println!("Nenhum orçamento definido para {}", category);
            }
        }
    }

    Ok(())
}
