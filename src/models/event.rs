use crate::utils::date::now_stamp;
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// Lead time (minutes) used when none is given or parsing fails.
pub const DEFAULT_ALERT_MINUTES: u32 = 5;

fn default_alert_minutes() -> u32 {
    DEFAULT_ALERT_MINUTES
}

fn default_status() -> String {
    "logged".to_string()
}

/// One logged delivery. Field order matters: it is the column order of the
/// CSV export and the key order of the persisted JSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub id: u32,
    pub timestamp: String, // creation instant, "YYYY-MM-DD HH:MM:SS"
    pub date: NaiveDate,   // creation date, "YYYY-MM-DD"
    pub time_slot: String, // expected "HH:MM-HH:MM"; only the start is used
    #[serde(default)]
    pub length: String,
    pub client: String,
    #[serde(default)]
    pub delivery_type: String,
    #[serde(default)]
    pub resource: String,
    #[serde(default)]
    pub assigned_to: String,
    #[serde(default)]
    pub signature: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_alert_minutes")]
    pub alert_minutes: u32,
    #[serde(default)]
    pub alert_triggered: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

impl Event {
    /// Build a fresh record from a draft. The id is assigned by the store;
    /// creation timestamp and date are stamped here.
    pub fn from_draft(id: u32, draft: EventDraft) -> Self {
        Self {
            id,
            timestamp: now_stamp(),
            date: Local::now().date_naive(),
            time_slot: draft.time_slot,
            length: draft.length,
            client: draft.client,
            delivery_type: draft.delivery_type,
            resource: draft.resource,
            assigned_to: draft.assigned_to,
            signature: draft.signature,
            notes: draft.notes,
            status: default_status(),
            alert_minutes: draft.alert_minutes,
            alert_triggered: false,
            last_modified: None,
        }
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Input for `EventStore::create`. All fields are free text apart from the
/// alert lead time, which falls back to 5 minutes instead of being rejected.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub time_slot: String,
    pub client: String,
    pub delivery_type: String,
    pub resource: String,
    pub assigned_to: String,
    pub signature: String,
    pub length: String,
    pub notes: String,
    pub alert_minutes: u32,
}

impl Default for EventDraft {
    fn default() -> Self {
        Self {
            time_slot: String::new(),
            client: String::new(),
            delivery_type: String::new(),
            resource: String::new(),
            assigned_to: String::new(),
            signature: String::new(),
            length: String::new(),
            notes: String::new(),
            alert_minutes: DEFAULT_ALERT_MINUTES,
        }
    }
}

/// Lenient lead-time parsing: any unparsable input means "use the default",
/// never an error back to the caller.
pub fn parse_alert_minutes(raw: Option<&str>) -> u32 {
    raw.and_then(|s| s.trim().parse::<u32>().ok())
        .unwrap_or(DEFAULT_ALERT_MINUTES)
}

/// Explicit partial update. Unset fields leave the record untouched;
/// applying any patch stamps `last_modified`.
#[derive(Debug, Clone, Default)]
pub struct EventPatch {
    pub time_slot: Option<String>,
    pub length: Option<String>,
    pub client: Option<String>,
    pub delivery_type: Option<String>,
    pub resource: Option<String>,
    pub assigned_to: Option<String>,
    pub signature: Option<String>,
    pub notes: Option<String>,
    pub alert_minutes: Option<u32>,
}

impl EventPatch {
    pub fn apply(&self, ev: &mut Event) {
        if let Some(v) = &self.time_slot {
            ev.time_slot = v.clone();
        }
        if let Some(v) = &self.length {
            ev.length = v.clone();
        }
        if let Some(v) = &self.client {
            ev.client = v.clone();
        }
        if let Some(v) = &self.delivery_type {
            ev.delivery_type = v.clone();
        }
        if let Some(v) = &self.resource {
            ev.resource = v.clone();
        }
        if let Some(v) = &self.assigned_to {
            ev.assigned_to = v.clone();
        }
        if let Some(v) = &self.signature {
            ev.signature = v.clone();
        }
        if let Some(v) = &self.notes {
            ev.notes = v.clone();
        }
        if let Some(v) = self.alert_minutes {
            ev.alert_minutes = v;
        }
        ev.last_modified = Some(now_stamp());
    }
}
