use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

fn default_poll_interval() -> u64 {
    30
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub events_file: String,
    pub users_file: String,
    /// Seconds between alert-monitor passes.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            events_file: Self::events_file().to_string_lossy().to_string(),
            users_file: Self::users_file().to_string_lossy().to_string(),
            poll_interval_secs: default_poll_interval(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("schedlog")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".schedlog")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("schedlog.conf")
    }

    /// Default path of the persisted event collection
    pub fn events_file() -> PathBuf {
        Self::config_dir().join("schedule_log.json")
    }

    /// Default path of the persisted account collection
    pub fn users_file() -> PathBuf {
        Self::config_dir().join("users.json")
    }

    /// Load configuration from file, or return defaults if not found.
    /// A config file that no longer parses is reported and replaced by
    /// defaults rather than aborting the run.
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_else(|e| {
                    crate::ui::messages::warning(format!(
                        "Unreadable config file ({}), falling back to defaults",
                        e
                    ));
                    Config::default()
                }),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Initialize configuration and data files
    pub fn init_all() -> AppResult<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        let config = Config::default();

        let yaml = serde_yaml::to_string(&config).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file())?;
        file.write_all(yaml.as_bytes())?;
        println!("✅ Config file: {:?}", Self::config_file());

        // Empty event collection if not present
        let events_path = Self::events_file();
        if !events_path.exists() {
            fs::write(&events_path, "[]")?;
        }
        println!("✅ Events:      {:?}", events_path);

        // The user store bootstraps its default accounts on open
        let users = crate::store::users::UserStore::open(Self::users_file())?;
        println!("✅ Users:       {:?} ({} accounts)", Self::users_file(), users.len());

        Ok(())
    }
}
