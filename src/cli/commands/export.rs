use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, notify_export_success, write_csv, write_json};
use crate::store::EventStore;
use std::path::PathBuf;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, file } = cmd {
        let store = EventStore::open(&cfg.events_file);
        let events = store.events();

        if events.is_empty() {
            return Err(AppError::NothingToExport);
        }

        let path = PathBuf::from(
            file.clone()
                .unwrap_or_else(|| format.default_filename()),
        );

        match format {
            ExportFormat::Csv => write_csv(&path, &events)?,
            ExportFormat::Json => write_json(&path, &events)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
    }
    Ok(())
}
