//! Interactive input collection.
//!
//! Prompts are only shown for values missing from the command line.  Without
//! the `interactive` feature every prompt fails with
//! [`CliError::FeatureNotAvailable`].

use cmra_core::domain::TemplateKind;

use crate::error::{CliError, CliResult};

/// Source of values the user did not pass as arguments.
pub trait Prompter {
    /// Ask for a project name.  Implementations re-ask until the name is valid.
    fn project_name(&self) -> CliResult<String>;

    /// Pick one of `choices`; `default` is preselected.
    fn template(&self, choices: &[TemplateKind], default: usize) -> CliResult<TemplateKind>;
}

/// Terminal prompts via `dialoguer`.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

#[cfg(feature = "interactive")]
impl Prompter for TerminalPrompter {
    fn project_name(&self) -> CliResult<String> {
        use cmra_core::domain::ProjectName;
        use dialoguer::Input;

        Input::<String>::new()
            .with_prompt("Project name")
            .validate_with(|input: &String| -> Result<(), String> {
                ProjectName::parse(input.trim())
                    .map(|_| ())
                    .map_err(|e| e.to_string())
            })
            .interact_text()
            .map(|name| name.trim().to_string())
            .map_err(map_prompt_error)
    }

    fn template(&self, choices: &[TemplateKind], default: usize) -> CliResult<TemplateKind> {
        use dialoguer::Select;

        let items: Vec<String> = choices
            .iter()
            .map(|kind| format!("{:<12} {}", kind.as_str(), kind.description()))
            .collect();

        let index = Select::new()
            .with_prompt("Template")
            .items(&items)
            .default(default)
            .interact()
            .map_err(map_prompt_error)?;

        choices.get(index).copied().ok_or(CliError::Cancelled)
    }
}

#[cfg(not(feature = "interactive"))]
impl Prompter for TerminalPrompter {
    fn project_name(&self) -> CliResult<String> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    fn template(&self, _choices: &[TemplateKind], _default: usize) -> CliResult<TemplateKind> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }
}

#[cfg(feature = "interactive")]
fn map_prompt_error(err: dialoguer::Error) -> CliError {
    match err {
        dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
            CliError::Cancelled
        }
        dialoguer::Error::IO(e) => CliError::PromptFailed {
            message: e.to_string(),
        },
    }
}
