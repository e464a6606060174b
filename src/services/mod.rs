//! Business logic services
//!
//! Each service borrows the shared `Storage` and implements one domain's
//! operations on top of the repositories.

pub mod account;
pub mod budget;
pub mod card;
pub mod goal;
pub mod openfinance;
pub mod transaction;

pub use account::AccountService;
pub use budget::BudgetService;
pub use card::CardService;
pub use goal::GoalService;
pub use openfinance::{BankConnector, MockBankConnector};
pub use transaction::{RecordTransactionInput, TransactionService};
