//! Check command implementation.
//!
//! The `javacheck check` command detects the Java runtime version, runs the
//! version checker, and reports a one-line summary. Banners go to the log.

use crate::cli::args::CheckArgs;
use crate::config::JavaCheckConfig;
use crate::error::Result;
use crate::runtime::checker::VersionChecker;
use crate::runtime::probe::{ProbeSettings, RuntimeProbe};
use crate::runtime::sink::{DiagnosticSink, TracingSink};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    config: JavaCheckConfig,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(config: JavaCheckConfig, args: CheckArgs) -> Self {
        Self { config, args }
    }

    /// Probe settings with command line flags layered over the config file.
    pub fn probe_settings(&self) -> ProbeSettings {
        let mut settings = self.config.java.probe_settings();
        settings.version_override = self.args.java_version.clone();
        if let Some(binary) = &self.args.java {
            settings.binary = Some(binary.clone());
        }
        settings
    }

    /// Whether an outdated runtime should fail the command.
    pub fn is_strict(&self) -> bool {
        self.args.strict || self.config.strict
    }

    /// Run the check against an explicit sink.
    pub fn execute_with_sink(
        &self,
        ui: &mut dyn UserInterface,
        sink: &mut dyn DiagnosticSink,
    ) -> Result<CommandResult> {
        let checker = VersionChecker::new(RuntimeProbe::new(self.probe_settings()));
        let outcome = checker.check(sink)?;

        if self.args.json {
            let json = serde_json::to_string_pretty(&outcome).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else if outcome.is_supported() {
            ui.success(&outcome.summary());
        } else {
            ui.warning(&outcome.summary());
        }

        if self.is_strict() && !outcome.is_supported() {
            return Ok(CommandResult::failure(1));
        }
        Ok(CommandResult::success())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        self.execute_with_sink(ui, &mut TracingSink::new())
    }
}
