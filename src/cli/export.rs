//! CLI commands for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::export::{export_expenses_csv, export_ledger_json, export_ledger_yaml, CsvStyle};
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export all expenses to CSV
    Csv {
        /// Output file path
        #[arg(short, long, default_value = crate::export::DEFAULT_CSV_FILE)]
        output: PathBuf,

        /// Quote fields that contain commas, quotes or newlines
        #[arg(long)]
        quoted: bool,
    },

    /// Export all expenses to JSON
    Json {
        /// Output file path
        #[arg(short, long, default_value = "expenses.json")]
        output: PathBuf,

        /// Pretty-print JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Export all expenses to YAML
    Yaml {
        /// Output file path
        #[arg(short, long, default_value = "expenses.yaml")]
        output: PathBuf,
    },
}

/// Handle export commands
pub fn handle_export_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ExportCommands,
) -> BudgetResult<()> {
    let records = storage.expenses.all();

    match cmd {
        ExportCommands::Csv { output, quoted } => {
            let style = if quoted || settings.csv_quoted {
                CsvStyle::Quoted
            } else {
                CsvStyle::Raw
            };
            let mut writer = create_output(&output)?;
            export_expenses_csv(records, &mut writer, style)?;
            finish(writer)?;
            println!("Exported {} expenses to: {}", records.len(), output.display());
        }
        ExportCommands::Json { output, pretty } => {
            let mut writer = create_output(&output)?;
            export_ledger_json(records, &mut writer, pretty)?;
            finish(writer)?;
            println!("Exported {} expenses to: {}", records.len(), output.display());
        }
        ExportCommands::Yaml { output } => {
            let mut writer = create_output(&output)?;
            export_ledger_yaml(records, &mut writer)?;
            finish(writer)?;
            println!("Exported {} expenses to: {}", records.len(), output.display());
        }
    }

    Ok(())
}

fn create_output(path: &Path) -> BudgetResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

fn finish(mut writer: BufWriter<File>) -> BudgetResult<()> {
    writer
        .flush()
        .map_err(|e| BudgetError::Export(format!("Failed to write export: {}", e)))
}
