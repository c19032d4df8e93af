mod common;
use common::setup_events_file;

use chrono::{Duration as ChronoDuration, Local};
use schedlog::alerts::AlertPoller;
use schedlog::models::event::EventDraft;
use schedlog::store::EventStore;
use std::sync::Arc;
use std::sync::mpsc;
use std::time::Duration;

#[test]
fn test_start_and_stop_are_idempotent() {
    let path = setup_events_file("poller_idempotent");
    let store = Arc::new(EventStore::open(&path));
    let mut poller = AlertPoller::new(store, Duration::from_millis(100));

    assert!(!poller.is_running());
    assert!(poller.start(|_| {}));
    assert!(poller.is_running());
    // second start is a no-op
    assert!(!poller.start(|_| {}));

    assert!(poller.stop());
    assert!(!poller.is_running());
    // second stop is a no-op
    assert!(!poller.stop());
}

#[test]
fn test_poller_forwards_fired_alerts_to_the_callback() {
    let path = setup_events_file("poller_fires");
    let store = Arc::new(EventStore::open(&path));

    let now = Local::now().naive_local();
    let start = now + ChronoDuration::minutes(2);
    if start.date() != now.date() {
        // slot would cross midnight; the window cannot open today
        return;
    }

    let slot = format!(
        "{}-{}",
        start.format("%H:%M"),
        (start + ChronoDuration::minutes(30)).format("%H:%M")
    );
    store
        .create(EventDraft {
            time_slot: slot,
            client: "Acme".to_string(),
            alert_minutes: 5,
            ..EventDraft::default()
        })
        .expect("create");

    let (tx, rx) = mpsc::channel();
    let mut poller = AlertPoller::new(Arc::clone(&store), Duration::from_millis(100));
    poller.start(move |notice| {
        let _ = tx.send(notice);
    });

    let notice = rx
        .recv_timeout(Duration::from_secs(5))
        .expect("alert forwarded to the callback");
    assert_eq!(notice.client, "Acme");

    poller.stop();

    // the pass persisted the triggered flag
    let events = store.events();
    assert!(events[0].alert_triggered);
}
