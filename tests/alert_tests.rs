mod common;
use common::setup_events_file;

use chrono::{Duration, NaiveDateTime};
use schedlog::alerts::slot::slot_start;
use schedlog::models::event::{Event, EventDraft};
use schedlog::store::EventStore;
use schedlog::utils::date::today;
use std::fs;

fn draft(slot: &str, client: &str, alert_minutes: u32) -> EventDraft {
    EventDraft {
        time_slot: slot.to_string(),
        client: client.to_string(),
        alert_minutes,
        ..EventDraft::default()
    }
}

fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
    today().and_hms_opt(h, m, s).expect("valid time")
}

#[test]
fn test_slot_start_parsing() {
    let d = today();

    let start = slot_start("14:00-15:00", d).expect("valid slot");
    assert_eq!(start, at(14, 0, 0));

    // whitespace around the start is tolerated
    assert_eq!(slot_start(" 14:00 - 15:00", d), Some(at(14, 0, 0)));

    // no separator, or a bad prefix, is "cannot be evaluated"
    assert_eq!(slot_start("14:00", d), None);
    assert_eq!(slot_start("25:99-26:00", d), None);
    assert_eq!(slot_start("whenever-15:00", d), None);
    assert_eq!(slot_start("", d), None);
}

#[test]
fn test_alert_window_boundaries() {
    let path = setup_events_file("window_boundaries");
    let store = EventStore::open(&path);
    store
        .create(draft("14:00-15:00", "Acme", 5))
        .expect("create");

    // one second before the window opens: nothing
    assert!(store.check_alerts(at(13, 54, 59)).expect("check").is_empty());

    // slot start itself is outside the closed-open window
    assert!(store.check_alerts(at(14, 0, 0)).expect("check").is_empty());

    // inside the window: fires
    let fired = store.check_alerts(at(13, 55, 0)).expect("check");
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].client, "Acme");
    assert_eq!(fired[0].time_slot, "14:00-15:00");
}

#[test]
fn test_fired_alert_does_not_refire_until_reset() {
    let path = setup_events_file("no_refire");
    let store = EventStore::open(&path);
    store
        .create(draft("14:00-15:00", "Acme", 5))
        .expect("create");

    assert_eq!(store.check_alerts(at(13, 56, 0)).expect("check").len(), 1);
    // same pass window, later pass: still nothing
    assert!(store.check_alerts(at(13, 57, 0)).expect("check").is_empty());

    // the triggered flag is persisted, so a fresh store agrees
    let reopened = EventStore::open(&path);
    assert!(reopened.check_alerts(at(13, 58, 0)).expect("check").is_empty());

    // reset re-arms today's events
    let cleared = reopened.reset_alerts_for_today(today()).expect("reset");
    assert_eq!(cleared, 1);
    assert_eq!(reopened.check_alerts(at(13, 58, 0)).expect("check").len(), 1);
}

#[test]
fn test_yesterday_event_never_fires() {
    let path = setup_events_file("yesterday");

    let mut ev = Event::from_draft(1, draft("14:00-15:00", "Acme", 5));
    ev.date = today() - Duration::days(1);
    let json = serde_json::to_string_pretty(&vec![ev]).expect("serialize");
    fs::write(&path, json).expect("seed file");

    let store = EventStore::open(&path);
    // in-window time of day, but the event is dated yesterday
    assert!(store.check_alerts(at(13, 56, 0)).expect("check").is_empty());

    let events = store.events();
    assert!(!events[0].alert_triggered);
}

#[test]
fn test_unparsable_slot_is_skipped_not_fatal() {
    let path = setup_events_file("bad_slot");
    let store = EventStore::open(&path);
    store.create(draft("whenever", "Acme", 5)).expect("create");
    store
        .create(draft("14:00-15:00", "Globex", 5))
        .expect("create");

    // the bad slot is skipped; the good one still fires
    let fired = store.check_alerts(at(13, 56, 0)).expect("check");
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].client, "Globex");
}

#[test]
fn test_alert_minutes_default_applies() {
    let path = setup_events_file("default_minutes");

    // a persisted record without alert_minutes loads with the default of 5
    fs::write(
        &path,
        format!(
            r#"[{{"id": 1, "timestamp": "{d} 08:00:00", "date": "{d}",
                 "time_slot": "14:00-15:00", "client": "Acme"}}]"#,
            d = today().format("%Y-%m-%d")
        ),
    )
    .expect("seed file");

    let store = EventStore::open(&path);
    let events = store.events();
    assert_eq!(events[0].alert_minutes, 5);
    assert_eq!(events[0].status, "logged");

    assert!(store.check_alerts(at(13, 54, 0)).expect("check").is_empty());
    assert_eq!(store.check_alerts(at(13, 55, 0)).expect("check").len(), 1);
}

#[test]
fn test_end_to_end_create_then_evaluate_once() {
    let path = setup_events_file("end_to_end");
    let store = EventStore::open(&path);

    store
        .create(draft("09:00-09:30", "Acme", 10))
        .expect("create");

    let events = store.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].id, 1);
    assert!(!events[0].alert_triggered);

    let fired = store.check_alerts(at(8, 50, 0)).expect("first pass");
    assert_eq!(fired.len(), 1);
    assert_eq!(fired[0].id, 1);

    let again = store.check_alerts(at(8, 51, 0)).expect("second pass");
    assert!(again.is_empty());
}
