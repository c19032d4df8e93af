//! JSON-file-backed account store.
//!
//! Same persistence shape as the event store: full read on open, full
//! rewrite on mutation, malformed content treated as empty. An absent or
//! empty file is bootstrapped with the two default accounts.

use crate::errors::AppResult;
use crate::models::user::{Role, UserRecord};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

pub struct UserStore {
    path: PathBuf,
    users: BTreeMap<String, UserRecord>,
}

impl UserStore {
    /// Open the store, creating the default `admin` and `user` accounts when
    /// the file is missing or holds no records.
    pub fn open<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let path = path.as_ref().to_path_buf();
        let users = load_users(&path);

        let mut store = Self { path, users };
        if store.users.is_empty() {
            store.users.insert(
                "admin".to_string(),
                UserRecord::new("admin123", Role::Admin, "Administrator"),
            );
            store.users.insert(
                "user".to_string(),
                UserRecord::new("user123", Role::User, "Regular User"),
            );
            store.save()?;
        }
        Ok(store)
    }

    fn save(&self) -> AppResult<()> {
        let json = serde_json::to_string_pretty(&self.users)?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    /// Check a credential pair; the role comes back on success.
    pub fn authenticate(&self, username: &str, password: &str) -> Option<Role> {
        let record = self.users.get(username)?;
        record.verify(password).then_some(record.role)
    }

    /// Add an account. Returns Ok(false) when the username is taken.
    pub fn add_user(
        &mut self,
        username: &str,
        password: &str,
        role: Role,
        name: &str,
    ) -> AppResult<bool> {
        if self.users.contains_key(username) {
            return Ok(false);
        }
        self.users
            .insert(username.to_string(), UserRecord::new(password, role, name));
        self.save()?;
        Ok(true)
    }

    pub fn display_name(&self, username: &str) -> String {
        self.users
            .get(username)
            .map(|u| u.name.clone())
            .unwrap_or_else(|| username.to_string())
    }

    pub fn list(&self) -> impl Iterator<Item = (&String, &UserRecord)> {
        self.users.iter()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

fn load_users(path: &Path) -> BTreeMap<String, UserRecord> {
    if !path.exists() {
        return BTreeMap::new();
    }
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => BTreeMap::new(),
    }
}
