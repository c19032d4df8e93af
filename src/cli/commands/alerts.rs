use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{alert, info, success};
use crate::utils::date::today;
use chrono::Local;

/// Pull-style alert surface: one evaluation pass now, or a reset of
/// today's triggered flags.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Alerts { check, reset } = cmd {
        let store = EventStore::open(&cfg.events_file);

        if *reset {
            let cleared = store.reset_alerts_for_today(today())?;
            success(format!("Re-armed alerts for today ({} had fired)", cleared));
        }

        if *check || !*reset {
            let fired = store.check_alerts(Local::now().naive_local())?;
            if fired.is_empty() {
                info("No alerts fired.");
            } else {
                for notice in &fired {
                    alert(format!(
                        "Event #{}: {} - {}",
                        notice.id, notice.client, notice.time_slot
                    ));
                }
            }
        }
    }
    Ok(())
}
