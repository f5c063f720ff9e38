//! Status keys and their human-readable labels.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Known status keys reported by providers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StatusKey {
    Running,
    Complete,
    Error,
}

impl StatusKey {
    /// All known keys.
    pub const ALL: [StatusKey; 3] = [StatusKey::Running, StatusKey::Complete, StatusKey::Error];

    /// The wire key (`RUNNING`, `COMPLETE`, `ERROR`).
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusKey::Running => "RUNNING",
            StatusKey::Complete => "COMPLETE",
            StatusKey::Error => "ERROR",
        }
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            StatusKey::Running => "Running",
            StatusKey::Complete => "Completed",
            StatusKey::Error => "Error",
        }
    }
}

impl fmt::Display for StatusKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for StatusKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StatusKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| format!("unknown status key: {}", s))
    }
}

/// Look up the label for a status key.
///
/// Keys are matched exactly. Anything unrecognized is returned as-is.
pub fn get_status(status_key: &str) -> &str {
    match status_key.parse::<StatusKey>() {
        Ok(key) => key.label(),
        Err(_) => status_key,
    }
}
