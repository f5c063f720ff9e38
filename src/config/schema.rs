//! Status configuration schema.
//!
//! These types describe the `status:` block of a config file:
//!
//! ```yaml
//! status:
//!   providers:
//!     - key: aws-reporter
//!       provider_type: aws
//!       required: true
//! ```
//!
//! Fields are optional at the type level so that unvalidated input can still
//! be represented. Use [`parse_status_config`](super::parse_status_config) to
//! obtain a value whose fields are guaranteed present.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StatusError};

/// How an absent `required` field is interpreted.
///
/// `AssumeRequired` matches the long-standing behavior where a missing flag
/// falls back to a truthy value. `NotRequired` treats it as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequiredDefault {
    #[default]
    AssumeRequired,
    NotRequired,
}

impl RequiredDefault {
    /// The value an absent `required` field resolves to.
    pub fn as_bool(&self) -> bool {
        matches!(self, RequiredDefault::AssumeRequired)
    }
}

/// The status section of a config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusConfig {
    /// Configured providers, in file order.
    pub providers: Vec<ProviderConfig>,

    /// Interpretation of providers that omit `required`.
    pub missing_required: RequiredDefault,
}

/// A single configured status provider.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Unique handle for this provider instance.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Provider category (e.g. "aws", "azure"). Case-insensitive.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_type: Option<String>,

    /// Whether a missing prerequisite for this provider is an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl ProviderConfig {
    /// Create a fully specified provider entry.
    pub fn new(key: impl Into<String>, provider_type: impl Into<String>, required: bool) -> Self {
        Self {
            key: Some(key.into()),
            provider_type: Some(provider_type.into()),
            required: Some(required),
        }
    }

    /// Lower-cased provider type, if present.
    pub fn normalized_type(&self) -> Option<String> {
        self.provider_type.as_deref().map(str::to_lowercase)
    }
}

/// Get the key of a provider.
///
/// # Errors
///
/// Returns `MissingField` if the provider has no key.
pub fn get_provider_key(provider: &ProviderConfig) -> Result<&str> {
    provider
        .key
        .as_deref()
        .ok_or(StatusError::MissingField { field: "key" })
}

/// Get the provider type exactly as configured.
///
/// # Errors
///
/// Returns `MissingField` if the provider has no `provider_type`.
pub fn get_provider_type(provider: &ProviderConfig) -> Result<&str> {
    provider
        .provider_type
        .as_deref()
        .ok_or(StatusError::MissingField {
            field: "provider_type",
        })
}

/// Whether a provider is required, falling back to `default` when unset.
pub fn is_provider_required(provider: &ProviderConfig, default: RequiredDefault) -> bool {
    provider.required.unwrap_or_else(|| default.as_bool())
}

/// Providers whose lower-cased type equals `provider_type`.
///
/// The argument is compared as given, so callers pass it lower-cased.
/// Order and duplicates from the config are preserved.
pub fn get_providers_by_provider_types<'a>(
    config: &'a StatusConfig,
    provider_type: &str,
) -> Vec<&'a ProviderConfig> {
    config
        .providers
        .iter()
        .filter(|p| p.normalized_type().as_deref() == Some(provider_type))
        .collect()
}
