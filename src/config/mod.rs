//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::SaldoPaths;
pub use settings::{Settings, Theme};
