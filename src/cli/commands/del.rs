use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{info, warning};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let store = EventStore::open(&cfg.events_file);
        if store.delete(*id)? {
            info(format!("Deleted event #{}", id));
        } else {
            warning(format!("Event #{} not found", id));
        }
    }
    Ok(())
}
