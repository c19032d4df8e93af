use crate::models::event::Event;
use serde::Serialize;

/// Projection of a fired event handed to callers for display/notification.
/// The evaluator never formats or delivers anything itself.
#[derive(Debug, Clone, Serialize)]
pub struct AlertNotice {
    pub id: u32,
    pub client: String,
    pub time_slot: String,
    pub resource: String,
    pub delivery_type: String,
    pub notes: String,
}

impl AlertNotice {
    pub fn from_event(ev: &Event) -> Self {
        Self {
            id: ev.id,
            client: ev.client.clone(),
            time_slot: ev.time_slot.clone(),
            resource: ev.resource.clone(),
            delivery_type: ev.delivery_type.clone(),
            notes: ev.notes.clone(),
        }
    }
}
