//! Alert-window evaluation.
//!
//! An event fires when `now` has entered the closed-open window
//! `[slot_start - alert_minutes, slot_start)`. A slot that has already
//! started does not fire; a late reminder is not useful.
//!
//! Only events dated exactly today are considered. An event dated yesterday
//! with its flag still clear never fires — a known limitation of the
//! "alerts only for today" policy, kept on purpose.

use crate::alerts::slot::slot_start;
use crate::models::alert::AlertNotice;
use crate::models::event::Event;
use chrono::{Duration, NaiveDateTime};

/// One evaluation pass over the whole collection.
///
/// Every firing event is marked `alert_triggered` in place so it cannot fire
/// again today. Returns the projections of the events that just fired; the
/// caller decides whether (and how) to persist and notify.
pub fn evaluate(now: NaiveDateTime, events: &mut [Event]) -> Vec<AlertNotice> {
    let today = now.date();
    let mut fired = Vec::new();

    for ev in events.iter_mut() {
        if ev.date != today || ev.alert_triggered {
            continue;
        }
        let Some(start) = slot_start(&ev.time_slot, today) else {
            continue;
        };
        let alert_time = start - Duration::minutes(i64::from(ev.alert_minutes));
        if alert_time <= now && now < start {
            ev.alert_triggered = true;
            fired.push(AlertNotice::from_event(ev));
        }
    }

    fired
}
