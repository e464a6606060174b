//! Export CLI commands

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::error::{SaldoError, SaldoResult};
use crate::export::{csv, json};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export transactions as CSV
    Csv {
        /// Output file (defaults to transacoes_saldo_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Export a full JSON snapshot of all data
    Json {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> SaldoResult<()> {
    match cmd {
        ExportCommands::Csv { output } => {
            let path = output.unwrap_or_else(|| {
                PathBuf::from(csv::export_file_name(Local::now().date_naive()))
            });

            let transactions = storage.transactions.get_all()?;
            let file = File::create(&path)
                .map_err(|e| SaldoError::Export(format!("{}: {}", path.display(), e)))?;
            let mut writer = BufWriter::new(file);
            csv::write_csv(&mut writer, &transactions)?;

            println!("Exportado: {} ({} transações)", path.display(), transactions.len());
        }

        ExportCommands::Json { output } => {
            let snapshot = json::Snapshot::capture(storage)?;
            let file = File::create(&output)
                .map_err(|e| SaldoError::Export(format!("{}: {}", output.display(), e)))?;
            let mut writer = BufWriter::new(file);
            json::write_json(&mut writer, &snapshot)?;

            println!("Exportado: {}", output.display());
        }
    }

    Ok(())
}
