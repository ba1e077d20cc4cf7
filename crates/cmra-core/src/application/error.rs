//! Application layer errors.
//!
//! These errors represent failures in orchestration and I/O, not business
//! rules. Business rule errors are `DomainError` from `crate::domain`.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::error::{CmraError, ErrorCategory};

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// A directory or file could not be created. Files written before the
    /// failure are left in place.
    #[error("Failed to write {path}: {reason}")]
    MaterializationFailed { path: PathBuf, reason: String },

    /// The dependency installation command failed to spawn or exited non-zero.
    #[error("Dependency installation failed: {reason}")]
    InstallationFailed { reason: String },

    /// Version control initialisation failed.
    #[error("Version control initialisation failed: {reason}")]
    VersionControlFailed { reason: String },

    /// The manifest could not be serialised.
    #[error("Failed to serialise package manifest: {reason}")]
    ManifestSerialization { reason: String },

    /// Shared state of an adapter was poisoned.
    #[error("Adapter state lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Wrap `err` as a materialization failure at `path`, unless it already is one.
    pub fn materialization(path: &Path, err: CmraError) -> CmraError {
        match err {
            CmraError::Application(Self::MaterializationFailed { .. }) => err,
            other => Self::MaterializationFailed {
                path: path.to_path_buf(),
                reason: other.to_string(),
            }
            .into(),
        }
    }

    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MaterializationFailed { path, .. } => vec![
                format!("Failed to write: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::InstallationFailed { .. } => vec![
                "Ensure npm is installed and in your PATH".into(),
                "Check the installer output above for details".into(),
                "The project files were created; run `npm install` inside it to retry".into(),
            ],
            Self::VersionControlFailed { .. } => vec![
                "Ensure git is installed and configured (user.name, user.email)".into(),
            ],
            Self::ManifestSerialization { .. } | Self::LockPoisoned => {
                vec!["This is likely a bug, please report it".into()]
            }
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MaterializationFailed { .. } => ErrorCategory::Filesystem,
            Self::InstallationFailed { .. } | Self::VersionControlFailed { .. } => {
                ErrorCategory::ExternalCommand
            }
            Self::ManifestSerialization { .. } | Self::LockPoisoned => ErrorCategory::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;

    #[test]
    fn materialization_wraps_foreign_errors() {
        let err = ApplicationError::materialization(
            Path::new("app/src"),
            DomainError::EmptyStructure.into(),
        );
        match err {
            CmraError::Application(ApplicationError::MaterializationFailed { path, reason }) => {
                assert_eq!(path, PathBuf::from("app/src"));
                assert!(reason.contains("empty"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn materialization_keeps_original_path() {
        let original: CmraError = ApplicationError::MaterializationFailed {
            path: PathBuf::from("app/src/App.js"),
            reason: "denied".into(),
        }
        .into();
        let err = ApplicationError::materialization(Path::new("app"), original);
        assert!(err.to_string().contains("app/src/App.js"));
    }
}
