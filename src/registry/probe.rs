//! Prerequisite detection for cloud providers.
//!
//! A cloud provider can only report status when its tooling is available.
//! The [`EnvironmentProbe`] decides this per provider:
//!
//! 1. An override variable `CLOUDSTATUS_PREREQ_<ID>` (e.g.
//!    `CLOUDSTATUS_PREREQ_AWS=1`) wins when set to a recognized value.
//! 2. Otherwise the provider's CLI binary must be found on `PATH`.
//!
//! # Example
//!
//! ```no_run
//! use cloudstatus::registry::{EnvironmentProbe, ProviderRegistry};
//!
//! let registry = ProviderRegistry::from_probe(&EnvironmentProbe::new());
//! for provider in registry.cloud_providers() {
//!     println!("{}: {}", provider.provider, provider.has_prereq);
//! }
//! ```

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Something that can tell whether a provider's prerequisite is present.
pub trait PrereqProbe {
    /// Whether the prerequisite for `provider` (a lower-case id) is available.
    fn has_prereq(&self, provider: &str) -> bool;
}

/// Prefix of the per-provider override variable.
pub const OVERRIDE_PREFIX: &str = "CLOUDSTATUS_PREREQ_";

/// CLI binary whose presence satisfies a provider's prerequisite.
pub fn prereq_binary(provider: &str) -> Option<&'static str> {
    match provider {
        "aws" => Some("aws"),
        "azure" => Some("az"),
        _ => None,
    }
}

/// Check whether a file has executable permission bits set.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|m| m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

/// On Windows, executability is determined by file extension, not permission bits.
#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    true
}

/// Resolve a tool's binary path by iterating over PATH entries.
///
/// Returns the first match that exists and is executable.
pub fn resolve_tool_path(tool: &str, path_entries: &[PathBuf]) -> Option<PathBuf> {
    for dir in path_entries {
        let mut candidates = vec![dir.join(tool)];
        if cfg!(windows) {
            candidates.push(dir.join(format!("{}.exe", tool)));
            candidates.push(dir.join(format!("{}.cmd", tool)));
        }
        for candidate in candidates {
            if candidate.is_file() && is_executable(&candidate) {
                return Some(candidate);
            }
        }
    }
    None
}

/// Parse the system PATH environment variable into a list of directories.
pub fn parse_system_path() -> Vec<PathBuf> {
    std::env::var_os("PATH")
        .map(|path| std::env::split_paths(&path).collect())
        .unwrap_or_default()
}

/// Interpret an override value. Unrecognized values are ignored.
fn parse_override(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

/// Probe that inspects environment variables and PATH.
pub struct EnvironmentProbe {
    env_fn: Box<dyn Fn(&str) -> Result<String, std::env::VarError>>,
    path_entries: Vec<PathBuf>,
}

impl EnvironmentProbe {
    /// Probe the environment using actual environment variables and PATH.
    pub fn new() -> Self {
        Self::with_env(|key: &str| std::env::var(key), parse_system_path())
    }

    /// Probe with a custom env var lookup function and PATH.
    ///
    /// This allows testing without modifying actual environment variables.
    pub fn with_env<F>(env_fn: F, path_entries: Vec<PathBuf>) -> Self
    where
        F: Fn(&str) -> Result<String, std::env::VarError> + 'static,
    {
        Self {
            env_fn: Box::new(env_fn),
            path_entries,
        }
    }

    fn override_for(&self, provider: &str) -> Option<bool> {
        let var = format!("{}{}", OVERRIDE_PREFIX, provider.to_ascii_uppercase());
        let value = (self.env_fn)(&var).ok()?;
        let parsed = parse_override(&value);
        if parsed.is_none() {
            tracing::warn!("Ignoring unrecognized value '{}' for {}", value, var);
        }
        parsed
    }
}

impl Default for EnvironmentProbe {
    fn default() -> Self {
        Self::new()
    }
}

impl PrereqProbe for EnvironmentProbe {
    fn has_prereq(&self, provider: &str) -> bool {
        if let Some(forced) = self.override_for(provider) {
            tracing::debug!("Prerequisite for {} overridden to {}", provider, forced);
            return forced;
        }

        let Some(binary) = prereq_binary(provider) else {
            return false;
        };

        match resolve_tool_path(binary, &self.path_entries) {
            Some(path) => {
                tracing::debug!("Found {} for {} at {}", binary, provider, path.display());
                true
            }
            None => false,
        }
    }
}

/// Probe with fixed answers. Providers not listed have no prerequisite.
#[derive(Debug, Clone, Default)]
pub struct StaticProbe {
    answers: HashMap<String, bool>,
}

impl StaticProbe {
    /// Create an empty probe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for a provider.
    pub fn with(mut self, provider: &str, has_prereq: bool) -> Self {
        self.answers.insert(provider.to_string(), has_prereq);
        self
    }
}

impl PrereqProbe for StaticProbe {
    fn has_prereq(&self, provider: &str) -> bool {
        self.answers.get(provider).copied().unwrap_or(false)
    }
}
