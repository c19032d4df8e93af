mod csv;
mod json;

pub use csv::write_csv;
pub use json::write_json;

use crate::ui::messages::success;
use chrono::Local;
use clap::ValueEnum;
use std::path::Path;

/// Messaggio comune di fine export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Timestamped filename used when --file is not given.
    pub fn default_filename(&self) -> String {
        format!(
            "schedule_export_{}.{}",
            Local::now().format("%Y%m%d_%H%M%S"),
            self.as_str()
        )
    }
}
