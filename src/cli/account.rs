//! Account CLI commands

use clap::Subcommand;

use crate::display::account::{format_account_details, format_account_list};
use crate::error::{SaldoError, SaldoResult};
use crate::models::{AccountKind, Money};
use crate::services::{AccountService, MockBankConnector};
use crate::storage::Storage;

/// Account subcommands
#[derive(Subcommand)]
pub enum AccountCommands {
    /// Add a new account
    Add {
        /// Account name
        name: String,
        /// Bank name
        #[arg(short, long)]
        bank: String,
        /// Starting balance (e.g., "1000.00" or "1.000,00")
        #[arg(long, default_value = "0")]
        balance: String,
        /// Account type (checking, savings, investment)
        #[arg(short = 't', long, default_value = "checking")]
        kind: String,
        /// Display color (hex)
        #[arg(long, default_value = "")]
        color: String,
    },
    /// List all accounts
    List,
    /// Show account details
    Show {
        /// Account name or ID
        account: String,
    },
    /// Rename an account
    Rename {
        /// Account name or ID
        account: String,
        /// New name
        name: String,
    },
    /// Delete an account and its transactions
    Delete {
        /// Account name or ID
        account: String,
    },
    /// Connect a bank through Open Finance (simulated)
    Connect {
        /// Institution name
        bank: String,
        /// Display color (hex)
        #[arg(long, default_value = "")]
        color: String,
    },
    /// Refresh an account balance from its institution (simulated)
    Sync {
        /// Account name or ID
        account: String,
    },
}

/// Handle an account command
pub fn handle_account_command(storage: &Storage, cmd: AccountCommands) -> SaldoResult<()> {
    let service = AccountService::new(storage);

    match cmd {
        AccountCommands::Add {
            name,
            bank,
            balance,
            kind,
            color,
        } => {
            let kind = AccountKind::parse(&kind).ok_or_else(|| {
                SaldoError::Validation(format!(
                    "Invalid account type: '{}'. Valid types: checking, savings, investment",
                    kind
                ))
            })?;

            let balance = Money::parse(&balance).map_err(|e| {
                SaldoError::Validation(format!("Invalid balance format: '{}'. {}", balance, e))
            })?;

            let account = service.create(&name, &bank, balance, kind, &color)?;

            println!("Conta criada: {}", account.name);
            println!("  Banco: {}", account.bank);
            println!("  Saldo: {}", account.balance);
            println!("  ID:    {}", account.id);
        }

        AccountCommands::List => {
            let accounts = service.list()?;
            print!("{}", format_account_list(&accounts));
        }

        AccountCommands::Show { account } => {
            let found = service
                .find(&account)?
                .ok_or_else(|| SaldoError::account_not_found(&account))?;
            print!("{}", format_account_details(&found));
        }

        AccountCommands::Rename { account, name } => {
            let found = service
                .find(&account)?
                .ok_or_else(|| SaldoError::account_not_found(&account))?;

            let updated = service.rename(found.id, &name)?;
            println!("Conta renomeada: {}", updated.name);
        }

        AccountCommands::Delete { account } => {
            let found = service
                .find(&account)?
                .ok_or_else(|| SaldoError::account_not_found(&account))?;

            let (deleted, removed) = service.delete(found.id)?;
            println!("Conta removida: {} ({} transações)", deleted.name, removed);
        }

        AccountCommands::Connect { bank, color } => {
            let account = service.connect_bank(&bank, &color, &MockBankConnector)?;
            println!("Banco conectado: {}", account.bank);
            println!("  Conta: {}", account.name);
            println!("  Saldo: {}", account.balance);
        }

        AccountCommands::Sync { account } => {
            let found = service
                .find(&account)?
                .ok_or_else(|| SaldoError::account_not_found(&account))?;

            let synced = service.sync(found.id, &MockBankConnector)?;
            println!("Conta sincronizada: {}", synced.name);
            println!("  Saldo: {}", synced.balance);
        }
    }

    Ok(())
}
