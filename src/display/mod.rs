//! Display formatting for terminal output

pub mod account;
pub mod card;
pub mod dashboard;
pub mod goal;
pub mod transaction;

pub use account::{format_account_details, format_account_list};
pub use card::format_card_list;
pub use dashboard::{render_dashboard, render_projection, render_review};
pub use goal::{format_budget_list, format_goal_list};
pub use transaction::format_transaction_list;
