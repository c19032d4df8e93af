use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event::{EventDraft, parse_alert_minutes};
use crate::store::EventStore;
use crate::ui::messages::success;

/// Log a new delivery.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        time_slot,
        client,
        delivery_type,
        resource,
        assigned_to,
        signature,
        length,
        notes,
        alert,
    } = cmd
    {
        let draft = EventDraft {
            time_slot: time_slot.clone(),
            client: client.clone(),
            delivery_type: delivery_type.clone().unwrap_or_default(),
            resource: resource.clone().unwrap_or_default(),
            assigned_to: assigned_to.clone().unwrap_or_default(),
            signature: signature.clone().unwrap_or_default(),
            length: length.clone().unwrap_or_default(),
            notes: notes.clone().unwrap_or_default(),
            alert_minutes: parse_alert_minutes(alert.as_deref()),
        };

        let store = EventStore::open(&cfg.events_file);
        let event = store.create(draft)?;

        success(format!(
            "Logged event #{} for {} ({})",
            event.id, event.client, event.time_slot
        ));
    }
    Ok(())
}
