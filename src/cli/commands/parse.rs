//! Parse command implementation.
//!
//! `javacheck parse <VERSION>` shows how a version string would be read by
//! the checker, without writing any warnings.

use crate::cli::args::ParseArgs;
use crate::error::Result;
use crate::runtime::version::parse_major;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The parse command implementation.
pub struct ParseCommand {
    args: ParseArgs,
}

impl ParseCommand {
    /// Create a new parse command.
    pub fn new(args: ParseArgs) -> Self {
        Self { args }
    }
}

impl Command for ParseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let parsed = parse_major(&self.args.raw);
        ui.message(&parsed.to_string());
        Ok(CommandResult::success())
    }
}
