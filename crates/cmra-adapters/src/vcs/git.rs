use std::path::Path;
use std::process::{Command, Stdio};

use cmra_core::{
    application::{ApplicationError, ports::VersionControl},
    error::CmraResult,
};
use tracing::{debug, instrument};

/// Creates a git repository with a single initial commit.
#[derive(Debug, Clone)]
pub struct GitInitializer {
    program: String,
    message: String,
}

impl GitInitializer {
    pub fn new() -> Self {
        Self {
            program: "git".to_string(),
            message: "Initial commit".to_string(),
        }
    }

    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    fn run(&self, working_dir: &Path, args: &[&str]) -> CmraResult<()> {
        let output = Command::new(&self.program)
            .args(args)
            .current_dir(working_dir)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| ApplicationError::VersionControlFailed {
                reason: format!("could not run {}: {}", self.program, e),
            })?;

        debug!(?args, status = ?output.status, "git step finished");

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(ApplicationError::VersionControlFailed {
            reason: format!("`{} {}` failed: {}", self.program, args.join(" "), stderr.trim()),
        }
        .into())
    }
}

impl Default for GitInitializer {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitInitializer {
    #[instrument(skip_all, fields(dir = %working_dir.display()))]
    fn init(&self, working_dir: &Path) -> CmraResult<()> {
        self.run(working_dir, &["init"])?;
        self.run(working_dir, &["add", "."])?;
        self.run(working_dir, &["commit", "-m", &self.message])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_git_binary_is_reported() {
        let dir = TempDir::new().unwrap();
        let git = GitInitializer::new().with_program("cmra-no-such-git");

        let err = git.init(dir.path()).unwrap_err();
        assert!(err.to_string().contains("could not run cmra-no-such-git"));
    }
}
