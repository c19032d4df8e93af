use crate::errors::AppResult;
use crate::models::event::Event;
use std::path::Path;

/// Scrive gli eventi in JSON formattato.
pub fn write_json<P: AsRef<Path>>(path: P, events: &[Event]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(events)?;
    std::fs::write(path, json)?;
    Ok(())
}
