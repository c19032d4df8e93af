use crate::models::event::Event;
use serde::Serialize;
use std::collections::BTreeMap;

/// Aggregate counts shown by the `summary` command.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    pub total_events: usize,
    pub clients: BTreeMap<String, usize>,
    pub delivery_types: BTreeMap<String, usize>,
    pub date_range: String,
}

impl Summary {
    pub fn build(events: &[Event], date_range: Option<&str>) -> Self {
        let mut clients: BTreeMap<String, usize> = BTreeMap::new();
        let mut delivery_types: BTreeMap<String, usize> = BTreeMap::new();

        for ev in events {
            *clients.entry(ev.client.clone()).or_insert(0) += 1;
            *delivery_types.entry(ev.delivery_type.clone()).or_insert(0) += 1;
        }

        Self {
            total_events: events.len(),
            clients,
            delivery_types,
            date_range: date_range.unwrap_or("all time").to_string(),
        }
    }
}
