//! Core data models

pub mod account;
pub mod budget;
pub mod card;
pub mod category;
pub mod goal;
pub mod ids;
pub mod money;
pub mod transaction;

pub use account::{Account, AccountKind};
pub use budget::Budget;
pub use card::Card;
pub use category::Category;
pub use goal::Goal;
pub use ids::{AccountId, CardId, GoalId, TransactionId};
pub use money::Money;
pub use transaction::{Recurrence, RecurrenceFrequency, Transaction, TransactionKind};
