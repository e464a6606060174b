//! Transaction display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Transaction, TransactionKind};

#[derive(Tabled)]
struct TransactionRow {
    #[tabled(rename = "Data")]
    date: String,
    #[tabled(rename = "Descrição")]
    description: String,
    #[tabled(rename = "Categoria")]
    category: String,
    #[tabled(rename = "Valor")]
    amount: String,
}

/// Format transactions as a table, expenses shown negative
pub fn format_transaction_list(transactions: &[Transaction]) -> String {
    if transactions.is_empty() {
        return "Nenhuma transação registrada.".to_string();
    }

    let rows: Vec<TransactionRow> = transactions
        .iter()
        .map(|t| {
            let amount = match t.kind {
                TransactionKind::Income => format!("+{}", t.amount),
                TransactionKind::Expense => format!("-{}", t.amount),
            };
            TransactionRow {
                date: t.date.format("%d/%m/%Y").to_string(),
                description: t.description.clone(),
                category: t.category.to_string(),
                amount,
            }
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}
