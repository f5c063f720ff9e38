//! Supported provider registry.
//!
//! # Modules
//!
//! - [`probe`] - Prerequisite detection for cloud providers
//! - [`provider`] - The registry and its set queries
//! - [`report`] - Aggregated status report
//!
//! # Example
//!
//! ```
//! use cloudstatus::config::{ProviderConfig, StatusConfig};
//! use cloudstatus::registry::ProviderRegistry;
//!
//! let registry = ProviderRegistry::new(true, false);
//! let config = StatusConfig {
//!     providers: vec![ProviderConfig::new("reporter", "AWS", true)],
//!     ..Default::default()
//! };
//!
//! let ready = registry.supported_cloud_identifiers_with_prereqs(&config);
//! assert!(ready.contains("aws"));
//! ```

pub mod probe;
pub mod provider;
pub mod report;

pub use probe::{EnvironmentProbe, PrereqProbe, StaticProbe};
pub use provider::{CloudProvider, ProviderRegistry, SUPPORTED_CLOUD_PROVIDERS};
pub use report::StatusReport;
