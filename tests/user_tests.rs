mod common;
use common::{setup_users_file, slg};

use schedlog::models::user::Role;
use schedlog::store::users::UserStore;
use std::fs;

#[test]
fn test_default_accounts_are_bootstrapped() {
    let path = setup_users_file("bootstrap");

    let store = UserStore::open(&path).expect("open");
    assert_eq!(store.len(), 2);
    assert_eq!(store.authenticate("admin", "admin123"), Some(Role::Admin));
    assert_eq!(store.authenticate("user", "user123"), Some(Role::User));
    assert_eq!(store.display_name("admin"), "Administrator");

    // the file holds hashes, never the cleartext
    let content = fs::read_to_string(&path).expect("read users file");
    assert!(!content.contains("admin123"));
}

#[test]
fn test_authenticate_rejects_bad_credentials() {
    let path = setup_users_file("auth_reject");
    let store = UserStore::open(&path).expect("open");

    assert_eq!(store.authenticate("admin", "wrong"), None);
    assert_eq!(store.authenticate("ghost", "admin123"), None);
}

#[test]
fn test_add_user_rejects_duplicate_username() {
    let path = setup_users_file("add_duplicate");
    let mut store = UserStore::open(&path).expect("open");

    assert!(
        store
            .add_user("mario", "secret", Role::User, "Mario Rossi")
            .expect("add")
    );
    assert!(
        !store
            .add_user("mario", "other", Role::Admin, "Impostor")
            .expect("add dup")
    );

    // original record untouched
    assert_eq!(store.authenticate("mario", "secret"), Some(Role::User));
}

#[test]
fn test_empty_users_file_is_rebootstrapped() {
    let path = setup_users_file("empty_rebootstrap");
    fs::write(&path, "{}").expect("write empty map");

    let store = UserStore::open(&path).expect("open");
    assert_eq!(store.len(), 2);
}

#[test]
fn test_cli_users_check_and_list() {
    let path = setup_users_file("cli_users");

    slg()
        .args([
            "--users-file",
            &path,
            "users",
            "--check",
            "admin",
            "--password",
            "admin123",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Authenticated 'admin'"));

    slg()
        .args([
            "--users-file",
            &path,
            "users",
            "--check",
            "admin",
            "--password",
            "nope",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("Invalid username or password"));

    slg()
        .args(["--users-file", &path, "users", "--list"])
        .assert()
        .success()
        .stdout(predicates::str::contains("admin"))
        .stdout(predicates::str::contains("Regular User"));
}
