//! Check command implementation.
//!
//! The `cloudstatus check` command validates the status block and reports
//! which configured providers can run.
//!
//! Exit codes: 0 when every required provider is ready, 1 for schema
//! violations or required providers missing prerequisites, 2 when no
//! configuration exists.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::json;

use crate::cli::args::CheckArgs;
use crate::config::{
    find_config_file, load_config_value, parse_status_config, validate_status_config,
    ValidationError,
};
use crate::error::{Result, StatusError};
use crate::registry::{ProviderRegistry, StatusReport};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand<'a> {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    registry: &'a ProviderRegistry,
    args: CheckArgs,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(
        project_root: &Path,
        config_path: Option<PathBuf>,
        registry: &'a ProviderRegistry,
        args: CheckArgs,
    ) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path,
            registry,
            args,
        }
    }

    fn resolve_config_path(&self) -> Option<PathBuf> {
        self.config_path
            .clone()
            .or_else(|| find_config_file(&self.project_root))
    }

    fn show_violations(
        &self,
        ui: &mut dyn UserInterface,
        violations: &[ValidationError],
    ) -> Result<()> {
        if self.args.json {
            return print_json(ui, &json!({ "valid": false, "violations": violations }));
        }

        for v in violations {
            let location = match (&v.key, v.provider_index) {
                (Some(key), _) => format!(" (provider '{}')", key),
                (None, Some(index)) => format!(" (provider #{})", index + 1),
                (None, None) => String::new(),
            };
            ui.error(&format!("[{}] {}{}", v.rule, v.message, location));
        }
        ui.message(&format!("{} problem(s) found", violations.len()));
        Ok(())
    }

    fn show_report(&self, ui: &mut dyn UserInterface, report: &StatusReport) -> Result<()> {
        if self.args.json {
            return print_json(ui, &json!({ "valid": true, "report": report }));
        }

        ui.show_header(&format!("Status: {}", report.label()));

        if !report.supported_with_prereqs.is_empty() {
            ui.success(&format!(
                "Ready: {}",
                join(&report.supported_with_prereqs)
            ));
        }
        if !report.non_cloud.is_empty() {
            ui.message(&format!("Non-cloud: {}", join(&report.non_cloud)));
        }
        for id in &report.required_missing_prereqs {
            ui.error(&format!(
                "Required provider '{}' is missing its prerequisite",
                id
            ));
        }
        Ok(())
    }
}

/// Pretty-print `value` as JSON on a single message.
fn print_json<T: Serialize>(ui: &mut dyn UserInterface, value: &T) -> Result<()> {
    let body = serde_json::to_string_pretty(value).map_err(anyhow::Error::from)?;
    ui.message(&body);
    Ok(())
}

fn join(ids: &BTreeSet<String>) -> String {
    ids.iter().cloned().collect::<Vec<_>>().join(", ")
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some(path) = self.resolve_config_path() else {
            ui.error("No configuration found. Create .cloudstatus/config.yml first.");
            return Ok(CommandResult::failure(2));
        };

        let value = match load_config_value(&path) {
            Ok(v) => v,
            Err(StatusError::ConfigNotFound { path }) => {
                ui.error(&format!("Configuration not found: {}", path.display()));
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        let violations = validate_status_config(&value);
        if !violations.is_empty() {
            tracing::debug!("{} violation(s) in {}", violations.len(), path.display());
            self.show_violations(ui, &violations)?;
            return Ok(CommandResult::failure(1));
        }

        let config = parse_status_config(&value)?;
        let report = self.registry.report(&config);
        self.show_report(ui, &report)?;

        if report.is_ok() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join(".cloudstatus");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("config.yml"), config).unwrap();
        temp
    }

    fn run(temp: &TempDir, registry: &ProviderRegistry, json: bool) -> (CommandResult, MockUI) {
        let cmd = CheckCommand::new(temp.path(), None, registry, CheckArgs { json });
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    const VALID: &str = r#"
status:
  providers:
    - key: aws-reporter
      provider_type: AWS
      required: true
    - key: azure-reporter
      provider_type: azure
      required: false
"#;

    #[test]
    fn no_config_exits_2() {
        let temp = TempDir::new().unwrap();
        let (result, ui) = run(&temp, &ProviderRegistry::new(true, true), false);
        assert_eq!(result.exit_code, 2);
        assert!(ui.has_output("No configuration found"));
    }

    #[test]
    fn explicit_missing_path_exits_2() {
        let temp = TempDir::new().unwrap();
        let registry = ProviderRegistry::new(true, true);
        let cmd = CheckCommand::new(
            temp.path(),
            Some(temp.path().join("missing.yml")),
            &registry,
            CheckArgs::default(),
        );
        let mut ui = MockUI::new();
        let result = cmd.execute(&mut ui).unwrap();
        assert_eq!(result.exit_code, 2);
    }

    #[test]
    fn ready_providers_succeed() {
        let temp = setup_project(VALID);
        let (result, ui) = run(&temp, &ProviderRegistry::new(true, false), false);
        assert!(result.success);
        assert!(ui.headers().contains(&"Status: Completed".to_string()));
        assert!(ui.successes().contains(&"Ready: aws".to_string()));
    }

    #[test]
    fn required_missing_prereq_fails() {
        let temp = setup_project(VALID);
        let (result, ui) = run(&temp, &ProviderRegistry::new(false, false), false);
        assert_eq!(result.exit_code, 1);
        assert!(ui.headers().contains(&"Status: Error".to_string()));
        assert!(ui.has_output("'aws' is missing its prerequisite"));
        assert!(!ui.has_output("'azure'"));
    }

    #[test]
    fn violations_are_all_listed() {
        let temp = setup_project(
            r#"
status:
  providers:
    - key: ""
      provider_type: aws
      required: "yes"
"#,
        );
        let (result, ui) = run(&temp, &ProviderRegistry::new(true, true), false);
        assert_eq!(result.exit_code, 1);
        assert_eq!(ui.errors().len(), 2);
        assert!(ui.has_output("[missing-key]"));
        assert!(ui.has_output("[required-not-bool]"));
        assert!(ui.has_output("provider #1"));
    }

    #[test]
    fn empty_status_block_is_complete() {
        let temp = setup_project("other: true\n");
        let (result, ui) = run(&temp, &ProviderRegistry::new(false, false), false);
        assert!(result.success);
        assert!(ui.has_output("Completed"));
    }

    #[test]
    fn json_report_is_parseable() {
        let temp = setup_project(VALID);
        let (result, ui) = run(&temp, &ProviderRegistry::new(true, false), true);
        assert!(result.success);
        let body: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(body["valid"], true);
        assert_eq!(body["report"]["status"], "COMPLETE");
        assert_eq!(
            body["report"]["supported_with_prereqs"],
            serde_json::json!(["aws"])
        );
    }

    #[test]
    fn json_violations_are_parseable() {
        let temp = setup_project("status:\n  providers: []\n");
        let (result, ui) = run(&temp, &ProviderRegistry::new(true, true), true);
        assert_eq!(result.exit_code, 1);
        let body: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(body["valid"], false);
        assert_eq!(body["violations"][0]["rule"], "missing-providers");
    }

    #[test]
    fn invalid_yaml_is_an_error() {
        let temp = setup_project("status: [oops");
        let registry = ProviderRegistry::new(true, true);
        let cmd = CheckCommand::new(temp.path(), None, &registry, CheckArgs::default());
        let mut ui = MockUI::new();
        assert!(matches!(
            cmd.execute(&mut ui),
            Err(StatusError::ConfigParseError { .. })
        ));
    }

    #[test]
    fn json_serialization_failure_is_propagated() {
        // JSON object keys must be strings.
        let mut unserializable = std::collections::HashMap::new();
        unserializable.insert((1, 2), "value");
        let mut ui = MockUI::new();

        let err = print_json(&mut ui, &unserializable).unwrap_err();

        assert!(matches!(err, StatusError::Other(_)));
        assert!(ui.messages().is_empty());
    }
}
