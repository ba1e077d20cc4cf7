//! Error handling for the create-my-react-app CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::{error::Error, fmt::Write as _};

use owo_colors::OwoColorize;
use thiserror::Error;

use cmra_core::application::{GenerationFailure, GenerationStage};

// Re-export so callers only need `use crate::error::*`.
pub use cmra_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A generation run stopped at some stage.
    #[error(transparent)]
    Generation(#[from] GenerationFailure),

    // ── Config errors ──────────────────────────────────────────────────────
    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    // ── Prompt errors ──────────────────────────────────────────────────────
    /// The interactive prompt could not be shown or read.
    #[error("Prompt failed: {message}")]
    PromptFailed { message: String },

    /// Operation cancelled by user.
    #[error("Operation cancelled")]
    Cancelled,

    /// Feature not available (e.g., interactive mode without feature flag).
    #[error("Feature not available: {feature}")]
    FeatureNotAvailable { feature: &'static str },

    // ── System errors ──────────────────────────────────────────────────────
    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Generation(failure) => {
                let mut suggestions = failure.suggestions();
                if failure.stage.touches_filesystem() && failure.stage != GenerationStage::Done {
                    suggestions.push(
                        "Files written before the failure were left in place; remove the \
                         project directory before retrying if needed"
                            .into(),
                    );
                }
                suggestions
            }

            Self::ConfigError { message, .. } => vec![
                format!("Configuration issue: {}", message),
                "Check the file passed with --config, or the default config.toml".into(),
                "Environment overrides use the CMRA__ prefix, e.g. CMRA__INSTALL__PROGRAM=pnpm"
                    .into(),
            ],

            Self::PromptFailed { .. } => vec![
                "Interactive prompts need a terminal".into(),
                "Pass the project name and --template to run non-interactively".into(),
            ],

            Self::Cancelled => vec![
                "Operation was cancelled".into(),
                "No changes were made".into(),
            ],

            Self::FeatureNotAvailable { feature } => vec![
                format!("The '{}' feature is not available in this build", feature),
                format!(
                    "Reinstall with the feature enabled: cargo install cmra-cli --features {}",
                    feature
                ),
                "Or pass the project name and --template explicitly".into(),
            ],

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {}", message),
                "Check file permissions".into(),
            ],
        }
    }

    /// Get the error category for styling and logging.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Generation(failure) => match failure.error.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Filesystem => ErrorCategory::Filesystem,
                CoreCategory::ExternalCommand => ErrorCategory::ExternalCommand,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::PromptFailed { .. } => ErrorCategory::UserError,
            Self::Cancelled => ErrorCategory::UserError,
            Self::FeatureNotAvailable { .. } => ErrorCategory::Configuration,
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Every runtime failure exits with `1`; `2` is reserved for argument
    /// parse errors reported by clap before any command runs.
    pub fn exit_code(&self) -> u8 {
        1
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        // Error header
        let _ = write!(
            output,
            "\n{} {}\n\n",
            "✗".red().bold(),
            "Error:".red().bold()
        );

        // Main error message
        let _ = writeln!(output, "  {}", self.to_string().red());

        // Error chain (if verbose)
        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                let _ = write!(output, "\n  {} {}\n", "→".dimmed(), err.to_string().dimmed());
                source = err.source();
            }
        }

        // Suggestions
        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            let _ = write!(output, "\n{}\n", "Suggestions:".yellow().bold());
            for suggestion in suggestions {
                let _ = writeln!(output, "  {}", suggestion);
            }
        }

        // Hint to re-run with -v
        if !verbose {
            output.push('\n');
            let _ = writeln!(
                output,
                "{} {}",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            );
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`], no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        let _ = write!(out, "\nError: {}\n", self);

        if verbose {
            let mut src = self.source();
            while let Some(err) = src {
                let _ = writeln!(out, "  Caused by: {err}");
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                let _ = writeln!(out, "  {s}");
            }
        }

        if !verbose {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::UserError => tracing::warn!("User error: {}", self),
            ErrorCategory::NotFound => tracing::warn!("Not found: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Filesystem => tracing::error!("Filesystem error: {}", self),
            ErrorCategory::ExternalCommand => tracing::error!("External command failed: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Self::Generation(failure) = self {
            tracing::debug!(stage = %failure.stage, "generation stopped");
        }
        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Resource not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Writing the project failed.
    Filesystem,
    /// The package manager or git failed.
    ExternalCommand,
    /// Internal/system error.
    Internal,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::path::PathBuf;

    use cmra_core::{application::ApplicationError, domain::DomainError, error::CmraError};

    fn failure(stage: GenerationStage, error: impl Into<CmraError>) -> CliError {
        CliError::Generation(GenerationFailure {
            stage,
            error: error.into(),
        })
    }

    fn invalid_name() -> CliError {
        failure(
            GenerationStage::Validating,
            DomainError::InvalidProjectName {
                name: "MyApp".into(),
                reason: "uppercase".into(),
            },
        )
    }

    // ── suggestions ───────────────────────────────────────────────────────

    #[test]
    fn invalid_name_suggests_allowed_characters() {
        let err = invalid_name();
        assert!(err.suggestions().iter().any(|s| s.contains("lowercase")));
        assert_eq!(err.category(), ErrorCategory::UserError);
    }

    #[test]
    fn unknown_template_suggests_list() {
        let err = failure(
            GenerationStage::Validating,
            DomainError::UnknownTemplate {
                identifier: "vue".into(),
            },
        );
        assert!(err.suggestions().iter().any(|s| s.contains("list")));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }

    #[test]
    fn late_failures_mention_leftover_files() {
        let err = failure(
            GenerationStage::Installing,
            ApplicationError::InstallationFailed {
                reason: "exit 1".into(),
            },
        );
        assert!(err.suggestions().iter().any(|s| s.contains("left in place")));
        assert_eq!(err.category(), ErrorCategory::ExternalCommand);

        assert!(!invalid_name()
            .suggestions()
            .iter()
            .any(|s| s.contains("left in place")));
    }

    #[test]
    fn write_failure_mentions_leftover_files_once() {
        let err = failure(
            GenerationStage::Writing,
            ApplicationError::MaterializationFailed {
                path: PathBuf::from("my-app/src/App.js"),
                reason: "disk full".into(),
            },
        );
        let mentions = err
            .suggestions()
            .iter()
            .filter(|s| s.contains("left in place"))
            .count();
        assert_eq!(mentions, 1);
    }

    // ── exit codes ────────────────────────────────────────────────────────

    #[test]
    fn every_runtime_failure_exits_one() {
        let errors = [
            invalid_name(),
            failure(
                GenerationStage::Writing,
                ApplicationError::MaterializationFailed {
                    path: PathBuf::from("my-app/src/App.js"),
                    reason: "disk full".into(),
                },
            ),
            CliError::ConfigError {
                message: "x".into(),
                source: None,
            },
            CliError::Cancelled,
            CliError::IoError {
                message: "x".into(),
                source: io::Error::other("e"),
            },
        ];
        for err in errors {
            assert_eq!(err.exit_code(), 1, "{err}");
        }
    }

    // ── format ────────────────────────────────────────────────────────────

    #[test]
    fn format_plain_names_stage_and_cause() {
        let s = invalid_name().format_plain(false);
        assert!(s.contains("Error: Generation failed while validating"));
        assert!(s.contains("Invalid project name 'MyApp'"));
        assert!(s.contains("Suggestions:"));
        assert!(s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_omits_hint() {
        let s = CliError::Cancelled.format_plain(true);
        assert!(!s.contains("--verbose"));
    }

    #[test]
    fn format_plain_verbose_shows_cause_chain() {
        let s = invalid_name().format_plain(true);
        assert!(s.contains("Caused by: Invalid project name"));
    }
}
