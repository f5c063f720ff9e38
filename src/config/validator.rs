//! Status configuration validation rules.
//!
//! Validation runs against the raw YAML value so that type errors (such as
//! `required: "yes"`) surface as violations instead of deserialization
//! failures. Every entry is checked and every violation is reported:
//! - The block is either empty or has a non-empty `providers` list
//! - Each provider has a non-empty `key`
//! - Each provider has a non-empty `provider_type`
//! - Each provider has a boolean `required`

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::config::schema::StatusConfig;
use crate::error::{Result, StatusError};

/// Validation error with context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Position in `providers` if the error is entry-specific
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider_index: Option<usize>,
    /// Provider key if one could be read from the entry
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
}

impl ValidationError {
    /// Create an error that is not tied to a provider entry.
    pub fn new(rule: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            rule: rule.into(),
            message: message.into(),
            provider_index: None,
            key: None,
        }
    }

    fn for_entry(rule: &str, message: &str, index: usize, entry: &Mapping) -> Self {
        Self {
            rule: rule.to_string(),
            message: message.to_string(),
            provider_index: Some(index),
            key: entry
                .get("key")
                .and_then(Value::as_str)
                .filter(|k| !k.is_empty())
                .map(str::to_string),
        }
    }
}

/// Whether a value counts as "no status configuration at all".
///
/// Any falsy block switches status reporting off: null, `false`, `0`, `""`,
/// `[]` or `{}`.
fn is_empty_config(config: &Value) -> bool {
    match config {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Sequence(s) => s.is_empty(),
        Value::Mapping(m) => m.is_empty(),
        Value::Tagged(_) => false,
    }
}

fn is_non_empty_str(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(s)) if !s.is_empty())
}

/// Validate a raw status block and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_status_config(config: &Value) -> Vec<ValidationError> {
    if is_empty_config(config) {
        return Vec::new();
    }

    let Some(root) = config.as_mapping() else {
        return vec![ValidationError::new(
            "invalid-root",
            "Status config must be a mapping",
        )];
    };

    let mut errors = validate_settings(root);
    errors.extend(validate_providers(root));
    errors
}

fn validate_settings(root: &Mapping) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if let Some(value) = root.get("missing_required") {
        let ok = matches!(
            value.as_str(),
            Some("assume_required") | Some("not_required")
        );
        if !ok {
            errors.push(ValidationError::new(
                "invalid-missing-required",
                "Status missing_required must be 'assume_required' or 'not_required'",
            ));
        }
    }

    errors
}

fn validate_providers(root: &Mapping) -> Vec<ValidationError> {
    let providers = match root.get("providers") {
        None | Some(Value::Null) => None,
        Some(Value::Sequence(seq)) if seq.is_empty() => None,
        Some(Value::Sequence(seq)) => Some(seq),
        Some(_) => {
            return vec![ValidationError::new(
                "invalid-providers",
                "Status providers must be a list",
            )];
        }
    };

    let Some(providers) = providers else {
        return vec![ValidationError::new(
            "missing-providers",
            "Status config has no providers",
        )];
    };

    let mut errors = Vec::new();

    for (index, provider) in providers.iter().enumerate() {
        let Some(entry) = provider.as_mapping() else {
            errors.push(ValidationError {
                provider_index: Some(index),
                ..ValidationError::new("invalid-provider", "Status provider must be a mapping")
            });
            continue;
        };

        // Each check is independent so one entry can report several problems.
        if !is_non_empty_str(entry.get("key")) {
            errors.push(ValidationError::for_entry(
                "missing-key",
                "Status provider is missing key or value",
                index,
                entry,
            ));
        }

        if !is_non_empty_str(entry.get("provider_type")) {
            errors.push(ValidationError::for_entry(
                "missing-provider-type",
                "Status provider is missing provider_type or value",
                index,
                entry,
            ));
        }

        if !matches!(entry.get("required"), Some(Value::Bool(_))) {
            errors.push(ValidationError::for_entry(
                "required-not-bool",
                "Status provider required value is not a bool",
                index,
                entry,
            ));
        }
    }

    errors
}

/// Check a status block, logging each violation.
///
/// `None` and an empty block are valid.
pub fn is_valid(config: Option<&Value>) -> bool {
    let Some(config) = config else {
        return true;
    };

    let errors = validate_status_config(config);
    for error in &errors {
        match error.provider_index {
            Some(index) => tracing::error!(rule = %error.rule, index, "{}", error.message),
            None => tracing::error!(rule = %error.rule, "{}", error.message),
        }
    }

    errors.is_empty()
}

/// Validate a raw status block and convert it into typed records.
///
/// # Errors
///
/// Returns `ConfigValidationError` carrying every violation if any rule fails.
pub fn parse_status_config(config: &Value) -> Result<StatusConfig> {
    if is_empty_config(config) {
        return Ok(StatusConfig::default());
    }

    let violations = validate_status_config(config);
    if !violations.is_empty() {
        return Err(StatusError::ConfigValidationError { violations });
    }

    serde_yaml::from_value(config.clone()).map_err(|e| StatusError::ConfigValidationError {
        violations: vec![ValidationError::new("schema", e.to_string())],
    })
}
