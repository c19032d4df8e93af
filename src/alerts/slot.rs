//! Time-slot parsing.
//!
//! A slot is a free-text string shaped like "HH:MM-HH:MM"; only the start
//! time carries meaning for alerting.

use crate::utils::time::parse_time;
use chrono::{NaiveDate, NaiveDateTime};

/// Combine the start of a slot with a calendar date.
///
/// Returns None when the string has no `-` separator or the prefix is not a
/// valid HH:MM time. Callers treat None as "this event cannot be evaluated"
/// and skip it; a bad slot never aborts an evaluation pass.
pub fn slot_start(time_slot: &str, date: NaiveDate) -> Option<NaiveDateTime> {
    let (start, _) = time_slot.split_once('-')?;
    let time = parse_time(start.trim())?;
    Some(date.and_time(time))
}
