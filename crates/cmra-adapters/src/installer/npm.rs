//! Package-manager installer using `std::process::Command`.

use std::path::Path;
use std::process::{Command, Stdio};

use cmra_core::{
    application::{ApplicationError, ports::Installer},
    error::CmraResult,
};
use tracing::{debug, instrument};

/// Runs `<program> <args...>` in the project root with all three standard
/// streams inherited, so package-manager prompts reach the user's terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NpmInstaller {
    program: String,
    args: Vec<String>,
}

impl NpmInstaller {
    pub const DEFAULT_PROGRAM: &'static str = "npm";

    /// `npm install`.
    pub fn new() -> Self {
        Self::with_command(Self::DEFAULT_PROGRAM, ["install"])
    }

    /// Any other package manager invocation, e.g. `pnpm install` or `yarn`.
    pub fn with_command<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

impl Default for NpmInstaller {
    fn default() -> Self {
        Self::new()
    }
}

impl Installer for NpmInstaller {
    #[instrument(skip_all, fields(command = %self.describe(), dir = %working_dir.display()))]
    fn install(&self, working_dir: &Path) -> CmraResult<()> {
        let status = Command::new(&self.program)
            .args(&self.args)
            .current_dir(working_dir)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .status()
            .map_err(|e| ApplicationError::InstallationFailed {
                reason: format!("could not run `{}`: {}", self.describe(), e),
            })?;

        debug!(?status, "installer exited");

        if status.success() {
            Ok(())
        } else {
            let code = status
                .code()
                .map_or_else(|| "a signal".to_string(), |c| format!("code {c}"));
            Err(ApplicationError::InstallationFailed {
                reason: format!("`{}` exited with {}", self.describe(), code),
            }
            .into())
        }
    }

    fn describe(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
