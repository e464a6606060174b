//! Read-only aggregation over storage

pub mod cash_flow;
pub mod projection;
pub mod summary;

pub use cash_flow::{seven_day_flow, DayFlow};
pub use projection::{project, Projection, Scenario};
pub use summary::{dashboard_summary, CategorySlice, DashboardSummary};
