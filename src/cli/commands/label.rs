//! Status label command implementation.

use crate::cli::args::StatusLabelArgs;
use crate::error::Result;
use crate::status::get_status;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the human-readable label for a status key.
pub struct StatusLabelCommand {
    args: StatusLabelArgs,
}

impl StatusLabelCommand {
    /// Create a new status label command.
    pub fn new(args: StatusLabelArgs) -> Self {
        Self { args }
    }
}

impl Command for StatusLabelCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(get_status(&self.args.key));
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn label_for(key: &str) -> String {
        let cmd = StatusLabelCommand::new(StatusLabelArgs {
            key: key.to_string(),
        });
        let mut ui = MockUI::new();
        cmd.execute(&mut ui).unwrap();
        ui.messages()[0].clone()
    }

    #[test]
    fn prints_known_label() {
        assert_eq!(label_for("COMPLETE"), "Completed");
    }

    #[test]
    fn echoes_unknown_key() {
        assert_eq!(label_for("PAUSED"), "PAUSED");
    }
}
