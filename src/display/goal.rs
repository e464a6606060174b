//! Goal and budget display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Budget, Goal};

#[derive(Tabled)]
struct GoalRow {
    #[tabled(rename = "Meta")]
    title: String,
    #[tabled(rename = "Progresso")]
    progress: String,
    #[tabled(rename = "Alvo")]
    target: String,
    #[tabled(rename = "Prazo")]
    deadline: String,
}

/// Format goals as a table
pub fn format_goal_list(goals: &[Goal]) -> String {
    if goals.is_empty() {
        return "Nenhuma meta cadastrada.".to_string();
    }

    let rows: Vec<GoalRow> = goals
        .iter()
        .map(|g| GoalRow {
            title: g.title.clone(),
            progress: format!("{} ({:.0}%)", g.current_amount, g.progress_percent()),
            target: g.target_amount.to_string(),
            deadline: g.deadline.format("%d/%m/%Y").to_string(),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Categoria")]
    category: String,
    #[tabled(rename = "Gasto")]
    spent: String,
    #[tabled(rename = "Limite")]
    limit: String,
    #[tabled(rename = "Uso")]
    usage: String,
}

/// Format budgets as a table
pub fn format_budget_list(budgets: &[Budget]) -> String {
    if budgets.is_empty() {
        return "Nenhum orçamento definido.".to_string();
    }

    let rows: Vec<BudgetRow> = budgets
        .iter()
        .map(|b| BudgetRow {
            category: b.category.to_string(),
            spent: b.spent.to_string(),
            limit: b.limit.to_string(),
            usage: format!("{:.0}%", b.usage_percent()),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Money};
    use chrono::NaiveDate;
    use rust_decimal_macros::dec;

    #[test]
    fn test_goal_list() {
        let goal = Goal::new(
            "Viagem",
            Money::new(dec!(4000)),
            Money::new(dec!(1000)),
            NaiveDate::from_ymd_opt(2026, 1, 15).unwrap(),
            Category::Entertainment,
        );

        let output = format_goal_list(&[goal]);
        assert!(output.contains("Viagem"));
        assert!(output.contains("25%"));
        assert!(output.contains("15/01/2026"));
    }

    #[test]
    fn test_budget_list() {
        let mut budget = Budget::new(Category::Food, Money::new(dec!(800)));
        budget.spent = Money::new(dec!(200));

        let output = format_budget_list(&[budget]);
        assert!(output.contains("Alimentação"));
        assert!(output.contains("25%"));
    }

    #[test]
    fn test_empty_lists() {
        assert!(format_goal_list(&[]).contains("Nenhuma meta"));
        assert!(format_budget_list(&[]).contains("Nenhum orçamento"));
    }
}
