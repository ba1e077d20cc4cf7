//! Dependency installer adapters.

mod npm;

use std::path::Path;

use cmra_core::{application::ports::Installer, error::CmraResult};
use tracing::info;

pub use npm::NpmInstaller;

/// Installer used for `--skip-install`: succeeds without running anything.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipInstaller;

impl Installer for SkipInstaller {
    fn install(&self, working_dir: &Path) -> CmraResult<()> {
        info!(dir = %working_dir.display(), "skipping dependency installation");
        Ok(())
    }

    fn describe(&self) -> String {
        "skip".to_string()
    }
}
