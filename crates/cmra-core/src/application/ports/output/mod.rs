//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `cmra-adapters` crate provides implementations.

use std::path::Path;

use crate::error::CmraResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `cmra_adapters::filesystem::LocalFilesystem` (production)
/// - `cmra_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing directories
    /// are not an error.
    fn create_dir_all(&self, path: &Path) -> CmraResult<()>;

    /// Write content to a file, replacing any existing content.
    fn write_file(&self, path: &Path, content: &str) -> CmraResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port for the dependency installation step.
///
/// Implemented by:
/// - `cmra_adapters::installer::NpmInstaller` (runs the package manager)
/// - `cmra_adapters::installer::SkipInstaller` (`--skip-install`)
#[cfg_attr(test, mockall::automock)]
pub trait Installer: Send + Sync {
    /// Install dependencies for the project rooted at `working_dir`.
    ///
    /// Blocks until the command exits. Any spawn failure or non-zero exit is
    /// reported as `ApplicationError::InstallationFailed`.
    fn install(&self, working_dir: &Path) -> CmraResult<()>;

    /// Human-readable form of the command, e.g. `npm install`.
    fn describe(&self) -> String;
}

/// Port for initialising version control in the generated project.
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    fn init(&self, working_dir: &Path) -> CmraResult<()>;
}
