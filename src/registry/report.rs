//! Aggregated view of a status configuration against the registry.

use std::collections::BTreeSet;

use serde::Serialize;

use super::provider::{CloudProvider, ProviderRegistry};
use crate::config::StatusConfig;
use crate::status::StatusKey;

/// Everything the registry can derive about one configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    /// Overall outcome: `ERROR` when a required provider lacks its prerequisite.
    pub status: StatusKey,
    /// Registry entries used for the derivation.
    pub cloud_providers: Vec<CloudProvider>,
    /// Configured cloud types ready to report.
    pub supported_with_prereqs: BTreeSet<String>,
    /// Configured cloud types that are required and cannot report.
    pub required_missing_prereqs: BTreeSet<String>,
    /// Configured non-cloud types.
    pub non_cloud: BTreeSet<String>,
}

impl StatusReport {
    /// Label for the overall status.
    pub fn label(&self) -> &'static str {
        self.status.label()
    }

    /// Whether nothing blocks status reporting.
    pub fn is_ok(&self) -> bool {
        self.status != StatusKey::Error
    }
}

impl ProviderRegistry {
    /// Derive a [`StatusReport`] for `config`.
    pub fn report(&self, config: &StatusConfig) -> StatusReport {
        let required_missing_prereqs = self.required_cloud_identifiers_missing_prereqs(config);
        let status = if required_missing_prereqs.is_empty() {
            StatusKey::Complete
        } else {
            StatusKey::Error
        };

        StatusReport {
            status,
            cloud_providers: self.cloud_providers().to_vec(),
            supported_with_prereqs: self.supported_cloud_identifiers_with_prereqs(config),
            required_missing_prereqs,
            non_cloud: self.non_cloud_identifiers(config),
        }
    }
}
