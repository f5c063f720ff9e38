//! Configuration file discovery and loading.
//!
//! The status block lives under the top-level `status:` key of
//! `.cloudstatus/config.yml`. Other top-level keys are ignored so the block
//! can share a file with unrelated settings.

use crate::config::schema::StatusConfig;
use crate::config::validator::parse_status_config;
use crate::error::{Result, StatusError};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding project configuration.
pub const CONFIG_DIR: &str = ".cloudstatus";

/// Config file name inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config.yml";

/// Top-level key holding the status block.
pub const STATUS_KEY: &str = "status";

/// Find the project config by walking up from `start`.
///
/// Looks for `.cloudstatus/config.yml` in `start` and each ancestor.
///
/// # Returns
///
/// The path to the config file, or None if not found.
pub fn find_config_file(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_DIR).join(CONFIG_FILE);
        if candidate.is_file() {
            return Some(candidate);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a config file and return its raw status block.
///
/// Returns `Value::Null` if the file has no `status:` key.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_value(path: &Path) -> Result<serde_yaml::Value> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StatusError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            StatusError::Io(e)
        }
    })?;

    parse_config_value(&content, path)
}

/// Parse YAML content and extract the status block.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_config_value(content: &str, source_path: &Path) -> Result<serde_yaml::Value> {
    let document: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| StatusError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    let status = match document {
        serde_yaml::Value::Null => serde_yaml::Value::Null,
        serde_yaml::Value::Mapping(mut root) => root
            .remove(STATUS_KEY)
            .unwrap_or(serde_yaml::Value::Null),
        _ => {
            return Err(StatusError::ConfigParseError {
                path: source_path.to_path_buf(),
                message: "top level of config must be a mapping".to_string(),
            })
        }
    };

    tracing::debug!("Loaded status block from {}", source_path.display());
    Ok(status)
}

/// Load, validate and parse the status block of a config file.
///
/// # Errors
///
/// Returns `ConfigNotFound`, `ConfigParseError`, or `ConfigValidationError`.
pub fn load_status_config(path: &Path) -> Result<StatusConfig> {
    let value = load_config_value(path)?;
    parse_status_config(&value)
}
