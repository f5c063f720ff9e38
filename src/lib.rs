//! cloudstatus - Validation and prerequisite queries for status providers.
//!
//! A status provider is an integration that reports installation or run
//! status, such as a cloud-metadata based reporter. This crate validates the
//! `status:` configuration block and works out which configured cloud
//! providers can run given the prerequisites present on this machine.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Status config schema, loading, and validation
//! - [`error`] - Error types and result aliases
//! - [`registry`] - Supported provider registry and prerequisite probing
//! - [`status`] - Status keys and labels
//! - [`ui`] - Terminal output
//!
//! # Example
//!
//! ```
//! use cloudstatus::config::parse_status_config;
//! use cloudstatus::registry::{ProviderRegistry, StaticProbe};
//!
//! let raw: serde_yaml::Value = serde_yaml::from_str(
//!     "providers:\n  - key: k1\n    provider_type: Azure\n    required: true\n",
//! )
//! .unwrap();
//! let config = parse_status_config(&raw).unwrap();
//!
//! let registry = ProviderRegistry::from_probe(&StaticProbe::new().with("aws", true));
//! let blocked = registry.required_cloud_identifiers_missing_prereqs(&config);
//! assert!(blocked.contains("azure"));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod registry;
pub mod status;
pub mod ui;

pub use error::{Result, StatusError};
pub use status::{get_status, StatusKey};
