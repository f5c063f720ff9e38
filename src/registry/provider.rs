//! Supported provider registry and the queries derived from it.
//!
//! The registry is built once from a [`PrereqProbe`] and then only read.
//! Every query returns a set of distinct lower-cased provider types.

use std::collections::BTreeSet;

use serde::Serialize;

use super::probe::PrereqProbe;
use crate::config::{is_provider_required, StatusConfig};

/// Cloud provider identifiers this crate knows about.
pub const SUPPORTED_CLOUD_PROVIDERS: [&str; 2] = ["aws", "azure"];

/// A supported cloud provider and whether its prerequisite is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloudProvider {
    /// Lower-case provider identifier.
    pub provider: String,
    /// Whether the runtime prerequisite was detected.
    pub has_prereq: bool,
}

/// Immutable registry of supported providers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderRegistry {
    cloud: Vec<CloudProvider>,
    non_cloud: Vec<String>,
}

impl ProviderRegistry {
    /// Build the registry from the two prerequisite signals.
    pub fn new(aws_has_prereq: bool, azure_has_prereq: bool) -> Self {
        Self {
            cloud: vec![
                CloudProvider {
                    provider: "aws".to_string(),
                    has_prereq: aws_has_prereq,
                },
                CloudProvider {
                    provider: "azure".to_string(),
                    has_prereq: azure_has_prereq,
                },
            ],
            non_cloud: Vec::new(),
        }
    }

    /// Build the registry by asking `probe` about each supported provider.
    pub fn from_probe(probe: &dyn PrereqProbe) -> Self {
        let cloud = SUPPORTED_CLOUD_PROVIDERS
            .iter()
            .map(|id| CloudProvider {
                provider: id.to_string(),
                has_prereq: probe.has_prereq(id),
            })
            .collect();

        Self {
            cloud,
            non_cloud: Vec::new(),
        }
    }

    /// Register additional non-cloud provider types (stored lower-cased).
    pub fn with_non_cloud_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for t in types {
            let t = t.as_ref().to_lowercase();
            if !self.non_cloud.contains(&t) {
                self.non_cloud.push(t);
            }
        }
        self
    }

    /// Supported cloud providers in registry order.
    pub fn cloud_providers(&self) -> &[CloudProvider] {
        &self.cloud
    }

    /// Registered non-cloud provider types.
    pub fn non_cloud_types(&self) -> &[String] {
        &self.non_cloud
    }

    /// Cloud ids whose prerequisite is present.
    pub fn cloud_ids_with_prereqs(&self) -> BTreeSet<String> {
        self.cloud_ids_where(true)
    }

    /// Cloud ids whose prerequisite is missing.
    pub fn cloud_ids_missing_prereqs(&self) -> BTreeSet<String> {
        self.cloud_ids_where(false)
    }

    fn cloud_ids_where(&self, has_prereq: bool) -> BTreeSet<String> {
        let mut ids = BTreeSet::new();
        for entry in &self.cloud {
            if entry.has_prereq == has_prereq {
                ids.insert(entry.provider.clone());
            } else if has_prereq {
                tracing::debug!("Skipping provider {} prereqs not found", entry.provider);
            } else {
                tracing::debug!("Skipping provider {} prereqs were found", entry.provider);
            }
        }
        ids
    }

    /// Configured cloud types that are supported and have their prerequisite.
    pub fn supported_cloud_identifiers_with_prereqs(
        &self,
        config: &StatusConfig,
    ) -> BTreeSet<String> {
        let supported = self.cloud_ids_with_prereqs();
        configured_types(config)
            .filter(|t| supported.contains(t))
            .collect()
    }

    /// Configured cloud types that are required but missing their prerequisite.
    ///
    /// Entries without `required` follow `config.missing_required`.
    pub fn required_cloud_identifiers_missing_prereqs(
        &self,
        config: &StatusConfig,
    ) -> BTreeSet<String> {
        let missing = self.cloud_ids_missing_prereqs();
        config
            .providers
            .iter()
            .filter(|p| is_provider_required(p, config.missing_required))
            .filter_map(|p| p.normalized_type())
            .filter(|t| missing.contains(t))
            .collect()
    }

    /// Configured types that are registered as non-cloud providers.
    pub fn non_cloud_identifiers(&self, config: &StatusConfig) -> BTreeSet<String> {
        configured_types(config)
            .filter(|t| self.non_cloud.contains(t))
            .collect()
    }
}

fn configured_types(config: &StatusConfig) -> impl Iterator<Item = String> + '_ {
    config.providers.iter().filter_map(|p| p.normalized_type())
}
