//! JSON-file-backed event store.
//!
//! The whole collection is read into memory when the store is opened and the
//! file is rewritten wholesale on every mutation. All read-modify-write
//! cycles run under one mutex owned by the store instance, so the CLI
//! handlers and the background alert monitor cannot interleave on the same
//! store. Two separate processes sharing the file can still race; last
//! writer wins.

pub mod users;

use crate::errors::AppResult;
use crate::models::alert::AlertNotice;
use crate::models::event::{Event, EventDraft, EventPatch};
use crate::models::summary::Summary;
use chrono::{NaiveDate, NaiveDateTime};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Optional list filters; both default to "no filtering".
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    /// Exact match on the creation date.
    pub date: Option<NaiveDate>,
    /// Case-insensitive substring match on the client name.
    pub client: Option<String>,
}

pub struct EventStore {
    path: PathBuf,
    inner: Mutex<Vec<Event>>,
}

impl EventStore {
    /// Open the store at `path`. A missing or unreadable file loads as an
    /// empty collection; broken persisted state is dropped, not fatal.
    pub fn open<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let events = load_events(&path);
        Self {
            path,
            inner: Mutex::new(events),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Event>> {
        // A panic while holding the lock leaves plain data behind; keep going.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn persist(&self, events: &[Event]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(events)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Append a new record. Ids are `max(existing) + 1`, starting at 1.
    pub fn create(&self, draft: EventDraft) -> AppResult<Event> {
        let mut events = self.lock();
        let id = events.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        let event = Event::from_draft(id, draft);
        events.push(event.clone());
        self.persist(&events)?;
        Ok(event)
    }

    /// Matching records, most recently created first.
    pub fn list(&self, filter: &EventFilter) -> Vec<Event> {
        let events = self.lock();
        let needle = filter.client.as_ref().map(|c| c.to_lowercase());

        let mut out: Vec<Event> = events
            .iter()
            .filter(|e| filter.date.is_none_or(|d| e.date == d))
            .filter(|e| {
                needle
                    .as_ref()
                    .is_none_or(|c| e.client.to_lowercase().contains(c.as_str()))
            })
            .cloned()
            .collect();

        out.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        out
    }

    /// Snapshot of the full collection in store order.
    pub fn events(&self) -> Vec<Event> {
        self.lock().clone()
    }

    /// Merge a patch into the record with this id and stamp `last_modified`.
    /// Returns Ok(false) when the id is absent; the collection is untouched
    /// and the caller decides the messaging.
    pub fn update(&self, id: u32, patch: &EventPatch) -> AppResult<bool> {
        let mut events = self.lock();
        let Some(ev) = events.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };
        patch.apply(ev);
        self.persist(&events)?;
        Ok(true)
    }

    /// Remove the record with this id. Ids are never handed out again.
    pub fn delete(&self, id: u32) -> AppResult<bool> {
        let mut events = self.lock();
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Ok(false);
        }
        self.persist(&events)?;
        Ok(true)
    }

    pub fn summary(&self, date: Option<NaiveDate>) -> Summary {
        let filter = EventFilter {
            date,
            client: None,
        };
        let events = self.list(&filter);
        let range = date.map(|d| d.format("%Y-%m-%d").to_string());
        Summary::build(&events, range.as_deref())
    }

    /// One alert-evaluation pass at `now`. Firing events are flagged and the
    /// file is rewritten once per pass, only when something fired.
    pub fn check_alerts(&self, now: NaiveDateTime) -> AppResult<Vec<AlertNotice>> {
        let mut events = self.lock();
        let fired = crate::alerts::evaluate::evaluate(now, &mut events);
        if !fired.is_empty() {
            self.persist(&events)?;
        }
        Ok(fired)
    }

    /// Clear `alert_triggered` on every event dated `today`, allowing the
    /// evaluator to fire them again. The only path back to false.
    pub fn reset_alerts_for_today(&self, today: NaiveDate) -> AppResult<usize> {
        let mut events = self.lock();
        let mut cleared = 0;
        for ev in events.iter_mut().filter(|e| e.date == today) {
            if ev.alert_triggered {
                cleared += 1;
            }
            ev.alert_triggered = false;
        }
        self.persist(&events)?;
        Ok(cleared)
    }
}

fn load_events(path: &Path) -> Vec<Event> {
    if !path.exists() {
        return Vec::new();
    }
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => Vec::new(),
    }
}
