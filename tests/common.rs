#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn slg() -> Command {
    cargo_bin_cmd!("schedlog")
}

/// Create a unique events-file path inside the system temp dir and remove any
/// leftover from a previous run
pub fn setup_events_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_schedlog_events.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

pub fn setup_users_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_schedlog_users.json", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Temporary output file path for export tests
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Log one delivery through the CLI
pub fn add_event(events_file: &str, slot: &str, client: &str, extra: &[&str]) {
    slg()
        .args(["--events-file", events_file, "add", slot, "--client", client])
        .args(extra)
        .assert()
        .success();
}

/// Seed a couple of deliveries useful for many tests
pub fn init_with_data(events_file: &str) {
    add_event(
        events_file,
        "09:00-09:30",
        "Acme",
        &["--type", "standard", "--resource", "van-1"],
    );
    add_event(
        events_file,
        "14:00-15:00",
        "Globex",
        &["--type", "express", "--alert", "10"],
    );
}
