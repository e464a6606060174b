//! Credit card CLI commands

use clap::Subcommand;

use crate::display::card::format_card_list;
use crate::error::{SaldoError, SaldoResult};
use crate::models::Money;
use crate::services::CardService;
use crate::storage::Storage;

/// Card subcommands
#[derive(Subcommand)]
pub enum CardCommands {
    /// Add a new credit card
    Add {
        /// Card name
        name: String,
        /// Total limit (e.g., "5000.00")
        #[arg(short, long)]
        limit: String,
        /// Statement closing day (1-31)
        #[arg(long)]
        closing_day: u8,
        /// Payment due day (1-31)
        #[arg(long)]
        due_day: u8,
        /// Display color (hex)
        #[arg(long, default_value = "")]
        color: String,
    },
    /// List all cards
    List,
}

/// Handle a card command
pub fn handle_card_command(storage: &Storage, cmd: CardCommands) -> SaldoResult<()> {
    let service = CardService::new(storage);

    match cmd {
        CardCommands::Add {
            name,
            limit,
            closing_day,
            due_day,
            color,
        } => {
            let limit = Money::parse(&limit).map_err(|e| {
                SaldoError::Validation(format!("Invalid limit format: '{}'. {}", limit, e))
            })?;

            let card = service.create(&name, limit, closing_day, due_day, &color)?;

            println!("Cartão cadastrado: {}", card.name);
            println!("  Limite: {}", card.limit);
            println!("  Fecha dia {}, vence dia {}", card.closing_day, card.due_day);
            println!("  ID: {}", card.id);
        }

        CardCommands::List => {
            let cards = service.list()?;
            print!("{}", format_card_list(&cards));
        }
    }

    Ok(())
}
