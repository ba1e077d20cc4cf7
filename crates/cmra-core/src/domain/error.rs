// ============================================================================
// domain/error.rs - DOMAIN ERRORS
// ============================================================================

use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to hand across stage boundaries)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    // ========================================================================
    // Validation Errors
    // ========================================================================
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Duplicate path in project structure: {path}")]
    DuplicatePath { path: String },

    #[error("Absolute paths not allowed: {path}")]
    AbsolutePathNotAllowed { path: String },

    #[error("Project structure is empty")]
    EmptyStructure,

    // ========================================================================
    // Not Found Errors
    // ========================================================================
    #[error("Unknown template '{identifier}'")]
    UnknownTemplate { identifier: String },
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("'{}' was rejected: {}", name, reason),
                "Use only lowercase letters, digits and hyphens".into(),
                "Examples: my-app, shop-frontend, app2".into(),
            ],
            Self::UnknownTemplate { identifier } => vec![
                format!("'{}' is not a built-in template", identifier),
                "Available templates: basic, with-router".into(),
                "Try: create-my-react-app list".into(),
            ],
            Self::DuplicatePath { path } | Self::AbsolutePathNotAllowed { path } => vec![
                format!("Offending path: {}", path),
                "This is a bug in the template plan, please report it".into(),
            ],
            Self::EmptyStructure => vec!["The selected template produced no files".into()],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } => ErrorCategory::Validation,
            Self::UnknownTemplate { .. } => ErrorCategory::NotFound,
            Self::DuplicatePath { .. } | Self::AbsolutePathNotAllowed { .. } | Self::EmptyStructure => {
                ErrorCategory::Internal
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
