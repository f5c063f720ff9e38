//! Status configuration loading, parsing, and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use cloudstatus::config::{is_valid, parse_status_config};
//!
//! let raw: serde_yaml::Value = serde_yaml::from_str(
//!     "providers:\n  - key: k1\n    provider_type: aws\n    required: true\n",
//! )
//! .unwrap();
//!
//! assert!(is_valid(Some(&raw)));
//! let config = parse_status_config(&raw).unwrap();
//! assert_eq!(config.providers.len(), 1);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

// Schema re-exports
pub use schema::{
    get_provider_key, get_provider_type, get_providers_by_provider_types, is_provider_required,
    ProviderConfig, RequiredDefault, StatusConfig,
};

// Loader re-exports
pub use loader::{
    find_config_file, load_config_value, load_status_config, parse_config_value, CONFIG_DIR,
    CONFIG_FILE, STATUS_KEY,
};

// Validator re-exports
pub use validator::{is_valid, parse_status_config, validate_status_config, ValidationError};
