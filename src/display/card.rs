//! Credit card display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Card;

#[derive(Tabled)]
struct CardRow {
    #[tabled(rename = "Cartão")]
    name: String,
    #[tabled(rename = "Limite")]
    limit: String,
    #[tabled(rename = "Disponível")]
    available: String,
    #[tabled(rename = "Fatura")]
    invoice: String,
    #[tabled(rename = "Fecha")]
    closing: String,
    #[tabled(rename = "Vence")]
    due: String,
}

/// Format cards as a table
pub fn format_card_list(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "Nenhum cartão cadastrado.".to_string();
    }

    let rows: Vec<CardRow> = cards
        .iter()
        .map(|c| CardRow {
            name: c.name.clone(),
            limit: c.limit.to_string(),
            available: c.available_limit.to_string(),
            invoice: c.current_invoice.to_string(),
            closing: format!("dia {}", c.closing_day),
            due: format!("dia {}", c.due_day),
        })
        .collect();

    Table::new(rows).with(Style::sharp()).to_string()
}
