use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::event::{EventPatch, parse_alert_minutes};
use crate::store::EventStore;
use crate::ui::messages::{success, warning};

/// Apply a partial update to one event. Fields not given stay as they are.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
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
        let patch = EventPatch {
            time_slot: time_slot.clone(),
            client: client.clone(),
            delivery_type: delivery_type.clone(),
            resource: resource.clone(),
            assigned_to: assigned_to.clone(),
            signature: signature.clone(),
            length: length.clone(),
            notes: notes.clone(),
            alert_minutes: alert.as_ref().map(|a| parse_alert_minutes(Some(a))),
        };

        let store = EventStore::open(&cfg.events_file);
        if store.update(*id, &patch)? {
            success(format!("Updated event #{}", id));
        } else {
            warning(format!("Event #{} not found", id));
        }
    }
    Ok(())
}
