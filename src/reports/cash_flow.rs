//! Seven-day cash flow series
//!
//! Buckets the last seven days of transactions (window ends today) and
//! carries a running balance through them. The balance here is the net of
//! the transaction history (income minus expense); the seed is chosen so
//! that, with no future-dated transactions, the final point equals that
//! net over all time.

use chrono::{Duration, NaiveDate};

use crate::error::SaldoResult;
use crate::models::Money;
use crate::storage::Storage;

/// One day in the cash flow window
#[derive(Debug, Clone)]
pub struct DayFlow {
    pub date: NaiveDate,
    pub income: Money,
    pub expense: Money,
    pub running_balance: Money,
}

/// Build the seven-day series ending on `today`
pub fn seven_day_flow(storage: &Storage, today: NaiveDate) -> SaldoResult<Vec<DayFlow>> {
    let window: Vec<NaiveDate> = (0..7)
        .rev()
        .map(|offset| today - Duration::days(offset))
        .collect();
    let window_start = window[0];

    let transactions = storage.transactions.get_all()?;

    // All-time net, and the portion of it inside the window; subtracting
    // the latter rewinds the balance to the window start
    let mut total_net = Money::zero();
    let mut window_net = Money::zero();
    for txn in &transactions {
        let signed = if txn.is_income() {
            txn.amount
        } else {
            -txn.amount
        };
        total_net += signed;
        if txn.date >= window_start {
            window_net += signed;
        }
    }

    let mut running = total_net - window_net;
    let mut series = Vec::with_capacity(window.len());

    for date in window {
        let mut income = Money::zero();
        let mut expense = Money::zero();
        for txn in storage.transactions.get_by_date(date)? {
            if txn.is_income() {
                income += txn.amount;
            } else {
                expense += txn.amount;
            }
        }

        running += income;
        running -= expense;

        series.push(DayFlow {
            date,
            income,
            expense,
            running_balance: running,
        });
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SaldoPaths;
    use crate::models::{Account, AccountKind, Category, Transaction, TransactionKind};
    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SaldoPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn add_txn(storage: &Storage, amount: Money, kind: TransactionKind, date: NaiveDate) {
        let account = storage.accounts.get_all().unwrap()[0].clone();
        storage
            .transactions
            .upsert(Transaction::new(
                "t",
                amount,
                date,
                Category::Others,
                kind,
                account.id,
            ))
            .unwrap();
    }

    #[test]
    fn test_window_covers_seven_days_ending_today() {
        let (_temp_dir, storage) = create_test_storage();
        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();

        let series = seven_day_flow(&storage, today).unwrap();
        assert_eq!(series.len(), 7);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2025, 3, 4).unwrap());
        assert_eq!(series[6].date, today);
    }

    #[test]
    fn test_final_point_matches_transaction_net() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .accounts
            .upsert(Account::new("C", "B", Money::new(dec!(1500)), AccountKind::Checking, ""))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        add_txn(&storage, Money::new(dec!(200)), TransactionKind::Income, today - Duration::days(3));
        add_txn(&storage, Money::new(dec!(50)), TransactionKind::Expense, today - Duration::days(1));
        // Outside the window: excluded from buckets but part of the seed
        add_txn(&storage, Money::new(dec!(999)), TransactionKind::Expense, today - Duration::days(30));

        // 200 - 50 - 999, regardless of the stored account figure
        let series = seven_day_flow(&storage, today).unwrap();
        assert_eq!(series.last().unwrap().running_balance, Money::new(dec!(-849)));
    }

    #[test]
    fn test_stored_account_balances_do_not_seed_the_series() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .accounts
            .upsert(Account::new("C", "B", Money::new(dec!(1000)), AccountKind::Checking, ""))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let series = seven_day_flow(&storage, today).unwrap();

        // No transactions: the whole series sits at zero
        assert!(series.iter().all(|d| d.running_balance.is_zero()));
    }

    #[test]
    fn test_daily_buckets() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .accounts
            .upsert(Account::new("C", "B", Money::zero(), AccountKind::Checking, ""))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let day = today - Duration::days(2);
        add_txn(&storage, Money::new(dec!(100)), TransactionKind::Income, day);
        add_txn(&storage, Money::new(dec!(30)), TransactionKind::Expense, day);

        let series = seven_day_flow(&storage, today).unwrap();
        let bucket = series.iter().find(|d| d.date == day).unwrap();
        assert_eq!(bucket.income, Money::new(dec!(100)));
        assert_eq!(bucket.expense, Money::new(dec!(30)));
    }

    #[test]
    fn test_running_balance_is_monotone_accumulation() {
        let (_temp_dir, storage) = create_test_storage();
        storage
            .accounts
            .upsert(Account::new("C", "B", Money::new(dec!(500)), AccountKind::Checking, ""))
            .unwrap();

        let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        add_txn(&storage, Money::new(dec!(100)), TransactionKind::Income, today);

        let series = seven_day_flow(&storage, today).unwrap();
        for pair in series.windows(2) {
            let expected = pair[0].running_balance + pair[1].income - pair[1].expense;
            assert_eq!(pair[1].running_balance, expected);
        }
    }
}
