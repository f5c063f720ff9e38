//! Providers command implementation.
//!
//! The `cloudstatus providers` command lists the supported cloud providers
//! and whether each one's prerequisite was detected.

use crate::cli::args::ProvidersArgs;
use crate::error::Result;
use crate::registry::ProviderRegistry;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The providers command implementation.
pub struct ProvidersCommand<'a> {
    registry: &'a ProviderRegistry,
    args: ProvidersArgs,
}

impl<'a> ProvidersCommand<'a> {
    /// Create a new providers command.
    pub fn new(registry: &'a ProviderRegistry, args: ProvidersArgs) -> Self {
        Self { registry, args }
    }
}

impl Command for ProvidersCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let body = serde_json::to_string_pretty(self.registry.cloud_providers())
                .map_err(anyhow::Error::from)?;
            ui.message(&body);
            return Ok(CommandResult::success());
        }

        ui.show_header("Cloud providers:");
        for entry in self.registry.cloud_providers() {
            if entry.has_prereq {
                ui.success(&format!("{} (prerequisite found)", entry.provider));
            } else {
                ui.warning(&format!("{} (prerequisite missing)", entry.provider));
            }
        }

        if !self.registry.non_cloud_types().is_empty() {
            ui.show_header("Non-cloud providers:");
            for t in self.registry.non_cloud_types() {
                ui.message(t);
            }
        }

        Ok(CommandResult::success())
    }
}
