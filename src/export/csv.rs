use crate::errors::AppResult;
use crate::models::event::Event;
use csv::Writer;
use std::path::Path;

/// Column order mirrors the Event field order.
pub(crate) const HEADERS: [&str; 15] = [
    "id",
    "timestamp",
    "date",
    "time_slot",
    "length",
    "client",
    "delivery_type",
    "resource",
    "assigned_to",
    "signature",
    "notes",
    "status",
    "alert_minutes",
    "alert_triggered",
    "last_modified",
];

/// Scrive gli eventi in CSV nel file indicato.
pub fn write_csv<P: AsRef<Path>>(path: P, events: &[Event]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;

    for ev in events {
        wtr.write_record(&[
            ev.id.to_string(),
            ev.timestamp.clone(),
            ev.date_str(),
            ev.time_slot.clone(),
            ev.length.clone(),
            ev.client.clone(),
            ev.delivery_type.clone(),
            ev.resource.clone(),
            ev.assigned_to.clone(),
            ev.signature.clone(),
            ev.notes.clone(),
            ev.status.clone(),
            ev.alert_minutes.to_string(),
            ev.alert_triggered.to_string(),
            ev.last_modified.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
