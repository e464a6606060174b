//! Data export formats

pub mod csv;
pub mod json;

pub use csv::{export_file_name, read_csv, write_csv};
pub use json::{read_json, write_json, Snapshot};
