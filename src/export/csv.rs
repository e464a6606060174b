//! CSV export and import of the transaction history
//!
//! Layout: `Data,Descricao,Valor,Categoria,Tipo`, one row per transaction.
//! The description is always quoted, with embedded quotes doubled; the
//! other columns never need quoting.

use std::io::Write;

use chrono::NaiveDate;

use crate::error::{SaldoError, SaldoResult};
use crate::models::{AccountId, Category, Money, Transaction, TransactionKind};

const HEADER: &str = "Data,Descricao,Valor,Categoria,Tipo";

/// Suggested export file name for a given day
pub fn export_file_name(date: NaiveDate) -> String {
    format!("transacoes_saldo_{}.csv", date.format("%Y-%m-%d"))
}

/// Write transactions as CSV
pub fn write_csv<W: Write>(writer: &mut W, transactions: &[Transaction]) -> SaldoResult<()> {
    writeln!(writer, "{}", HEADER)?;
    for txn in transactions {
        writeln!(
            writer,
            "{},\"{}\",{},{},{}",
            txn.date.format("%Y-%m-%d"),
            txn.description.replace('"', "\"\""),
            txn.amount.to_plain_string(),
            txn.category.label(),
            txn.kind,
        )?;
    }
    Ok(())
}

/// Read transactions back from CSV, attaching them to the given account
pub fn read_csv<R: std::io::Read>(
    reader: R,
    account_id: AccountId,
) -> SaldoResult<Vec<Transaction>> {
    let mut csv_reader = csv::ReaderBuilder::new().has_headers(true).from_reader(reader);

    let mut transactions = Vec::new();
    for (row, record) in csv_reader.records().enumerate() {
        let record = record.map_err(|e| SaldoError::Import(format!("row {}: {}", row + 2, e)))?;

        let date = record
            .get(0)
            .and_then(|s| NaiveDate::parse_from_str(s, "%Y-%m-%d").ok())
            .ok_or_else(|| SaldoError::Import(format!("row {}: invalid date", row + 2)))?;
        let description = record
            .get(1)
            .ok_or_else(|| SaldoError::Import(format!("row {}: missing description", row + 2)))?;
        let amount = record
            .get(2)
            .and_then(|s| Money::parse(s).ok())
            .ok_or_else(|| SaldoError::Import(format!("row {}: invalid amount", row + 2)))?;
        let category = record
            .get(3)
            .and_then(Category::parse)
            .ok_or_else(|| SaldoError::Import(format!("row {}: unknown category", row + 2)))?;
        let kind = match record.get(4) {
            Some("INCOME") => TransactionKind::Income,
            Some("EXPENSE") => TransactionKind::Expense,
            _ => return Err(SaldoError::Import(format!("row {}: unknown type", row + 2))),
        };

        transactions.push(Transaction::new(
            description,
            amount,
            date,
            category,
            kind,
            account_id,
        ));
    }

    Ok(transactions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn txn(description: &str, amount: Money, kind: TransactionKind) -> Transaction {
        Transaction::new(
            description,
            amount,
            NaiveDate::from_ymd_opt(2025, 3, 5).unwrap(),
            Category::Food,
            kind,
            AccountId::new(),
        )
    }

    #[test]
    fn test_header_and_row_format() {
        let mut out = Vec::new();
        write_csv(&mut out, &[txn("Mercado", Money::new(dec!(250.4)), TransactionKind::Expense)])
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), "Data,Descricao,Valor,Categoria,Tipo");
        assert_eq!(
            lines.next().unwrap(),
            "2025-03-05,\"Mercado\",250.40,Alimentação,EXPENSE"
        );
    }

    #[test]
    fn test_quotes_in_description_are_doubled() {
        let mut out = Vec::new();
        write_csv(
            &mut out,
            &[txn("Loja \"Central\"", Money::new(dec!(10)), TransactionKind::Expense)],
        )
        .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("\"Loja \"\"Central\"\"\""));
    }

    #[test]
    fn test_round_trip() {
        let account_id = AccountId::new();
        let original = vec![
            txn("Mercado, da esquina", Money::new(dec!(99.90)), TransactionKind::Expense),
            txn("Salário", Money::new(dec!(3000)), TransactionKind::Income),
        ];

        let mut out = Vec::new();
        write_csv(&mut out, &original).unwrap();

        let restored = read_csv(out.as_slice(), account_id).unwrap();
        assert_eq!(restored.len(), 2);
        assert_eq!(restored[0].description, "Mercado, da esquina");
        assert_eq!(restored[0].amount, Money::new(dec!(99.90)));
        assert_eq!(restored[1].kind, TransactionKind::Income);
        assert_eq!(restored[1].account_id, account_id);
    }

    #[test]
    fn test_read_rejects_bad_rows() {
        let bad = "Data,Descricao,Valor,Categoria,Tipo\nnot-a-date,\"x\",1.00,Alimentação,EXPENSE\n";
        let result = read_csv(bad.as_bytes(), AccountId::new());
        assert!(matches!(result, Err(SaldoError::Import(_))));
    }

    #[test]
    fn test_export_file_name() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        assert_eq!(export_file_name(date), "transacoes_saldo_2025-03-10.csv");
    }
}
