//! Account display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Account, Money};

#[derive(Tabled)]
struct AccountRow {
    #[tabled(rename = "Conta")]
    name: String,
    #[tabled(rename = "Banco")]
    bank: String,
    #[tabled(rename = "Tipo")]
    kind: String,
    #[tabled(rename = "Saldo")]
    balance: String,
}

/// Format accounts as a table with a total line
pub fn format_account_list(accounts: &[Account]) -> String {
    if accounts.is_empty() {
        return "Nenhuma conta cadastrada.".to_string();
    }

    let rows: Vec<AccountRow> = accounts
        .iter()
        .map(|a| AccountRow {
            name: a.name.clone(),
            bank: a.bank.clone(),
            kind: a.kind.to_string(),
            balance: a.balance.to_string(),
        })
        .collect();

    let total: Money = accounts.iter().map(|a| a.balance).sum();

    let mut output = Table::new(rows).with(Style::sharp()).to_string();
    output.push_str(&format!("\nTotal: {}\n", total));
    output
}

/// Format a single account's details
pub fn format_account_details(account: &Account) -> String {
    let mut output = String::new();
    output.push_str(&format!("Conta: {}\n", account.name));
    output.push_str(&format!("  ID:    {}\n", account.id));
    output.push_str(&format!("  Banco: {}\n", account.bank));
    output.push_str(&format!("  Tipo:  {}\n", account.kind));
    output.push_str(&format!("  Saldo: {}\n", account.balance));
    output
}
