//! Goal CLI commands

use chrono::NaiveDate;
use clap::Subcommand;

use crate::display::goal::format_goal_list;
use crate::error::{SaldoError, SaldoResult};
use crate::models::{Category, GoalId, Money};
use crate::services::GoalService;
use crate::storage::Storage;

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// Goal title
        title: String,
        /// Target amount
        #[arg(short, long)]
        target: String,
        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: String,
        /// Amount already saved
        #[arg(long, default_value = "0")]
        current: String,
        /// Category
        #[arg(short, long, default_value = "others")]
        category: String,
    },
    /// List all goals
    List,
    /// Add money toward a goal
    Contribute {
        /// Goal title or ID
        goal: String,
        /// Amount to add
        amount: String,
    },
}

fn parse_money(s: &str, what: &str) -> SaldoResult<Money> {
    Money::parse(s)
        .map_err(|e| SaldoError::Validation(format!("Invalid {} format: '{}'. {}", what, s, e)))
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> SaldoResult<()> {
    let service = GoalService::new(storage);

    match cmd {
        GoalCommands::Add {
            title,
            target,
            deadline,
            current,
            category,
        } => {
            let target = parse_money(&target, "target")?;
            let current = parse_money(&current, "current amount")?;
            let deadline = NaiveDate::parse_from_str(&deadline, "%Y-%m-%d").map_err(|_| {
                SaldoError::Validation(format!("Invalid deadline: '{}'. Use YYYY-MM-DD", deadline))
            })?;
            let category = Category::parse(&category).ok_or_else(|| {
                SaldoError::Validation(format!("Invalid category: '{}'", category))
            })?;

            let goal = service.create(&title, target, current, deadline, category)?;

            println!("Meta criada: {}", goal.title);
            println!("  Alvo:  {}", goal.target_amount);
            println!("  Prazo: {}", goal.deadline.format("%d/%m/%Y"));
            println!("  ID:    {}", goal.id);
        }

        GoalCommands::List => {
            let goals = service.list()?;
            print!("{}", format_goal_list(&goals));
        }

        GoalCommands::Contribute { goal, amount } => {
            let id: GoalId = match goal.parse() {
                Ok(id) => id,
                Err(_) => {
                    let title = goal.to_lowercase();
                    service
                        .list()?
                        .into_iter()
                        .find(|g| g.title.to_lowercase() == title)
                        .map(|g| g.id)
                        .ok_or_else(|| SaldoError::goal_not_found(&goal))?
                }
            };
            let amount = parse_money(&amount, "amount")?;

            let updated = service.contribute(id, amount)?;
            println!(
                "Meta atualizada: {} ({:.0}%)",
                updated.title,
                updated.progress_percent()
            );
        }
    }

    Ok(())
}
