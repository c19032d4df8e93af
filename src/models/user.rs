use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::User => "user",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "admin" => Some(Role::Admin),
            "user" => Some(Role::User),
            _ => None,
        }
    }
}

/// One account record as stored in the users file, keyed by username.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub password: String, // sha256 of the cleartext, hex-encoded
    pub role: Role,
    pub name: String,
}

impl UserRecord {
    pub fn new(password: &str, role: Role, name: &str) -> Self {
        Self {
            password: hash_password(password),
            role,
            name: name.to_string(),
        }
    }

    pub fn verify(&self, password: &str) -> bool {
        self.password == hash_password(password)
    }
}

pub fn hash_password(password: &str) -> String {
    hex::encode(Sha256::digest(password.as_bytes()))
}
