//! saldo - personal finance dashboard for the terminal
//!
//! Tracks bank accounts, credit cards, transactions, savings goals and
//! per-category budgets, all persisted as JSON files. On top of the stored
//! state it aggregates a dashboard (totals, category breakdown, seven-day
//! cash flow), projects what-if scenarios and can request a generative
//! financial review.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: custom error types
//! - `models`: core data models (accounts, cards, transactions, goals, budgets)
//! - `storage`: JSON file storage layer
//! - `services`: business logic, including transaction posting
//! - `reports`: read-only aggregation (dashboard, cash flow, projection)
//! - `insight`: generative review client with canned fallback
//! - `export`: CSV and JSON export
//! - `display`: terminal formatting
//! - `cli`: command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod insight;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::{SaldoError, SaldoResult};
