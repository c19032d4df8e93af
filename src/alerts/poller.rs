//! Background alert monitor.
//!
//! A plain worker thread with a stop flag: stopped → running → stopped.
//! The flag is checked at the top of each pass and during the sleep (in
//! short slices), so `stop()` returns promptly; an in-flight pass always
//! completes before the thread exits.

use crate::models::alert::AlertNotice;
use crate::store::EventStore;
use crate::ui::messages;
use chrono::Local;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

const SLEEP_SLICE: Duration = Duration::from_millis(250);

pub struct AlertPoller {
    store: Arc<EventStore>,
    interval: Duration,
    running: Arc<AtomicBool>,
    handle: Option<JoinHandle<()>>,
}

impl AlertPoller {
    pub fn new(store: Arc<EventStore>, interval: Duration) -> Self {
        Self {
            store,
            interval,
            running: Arc::new(AtomicBool::new(false)),
            handle: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Begin periodic evaluation, invoking `on_alert` once per fired notice.
    /// Returns false (and does nothing) when already running.
    pub fn start<F>(&mut self, on_alert: F) -> bool
    where
        F: Fn(AlertNotice) + Send + 'static,
    {
        if self.running.swap(true, Ordering::SeqCst) {
            return false;
        }

        let store = Arc::clone(&self.store);
        let running = Arc::clone(&self.running);
        let interval = self.interval;

        self.handle = Some(thread::spawn(move || {
            while running.load(Ordering::SeqCst) {
                let now = Local::now().naive_local();
                match store.check_alerts(now) {
                    Ok(fired) => {
                        for notice in fired {
                            on_alert(notice);
                        }
                    }
                    Err(e) => messages::error(format!("Alert pass failed: {}", e)),
                }

                let mut slept = Duration::ZERO;
                while slept < interval && running.load(Ordering::SeqCst) {
                    let step = SLEEP_SLICE.min(interval - slept);
                    thread::sleep(step);
                    slept += step;
                }
            }
        }));

        true
    }

    /// Stop scheduling new passes and join the worker.
    /// Returns false when not running.
    pub fn stop(&mut self) -> bool {
        if !self.running.swap(false, Ordering::SeqCst) {
            return false;
        }
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        true
    }
}

impl Drop for AlertPoller {
    fn drop(&mut self) {
        self.stop();
    }
}
