//! Domain value objects: TemplateKind and ProjectName.
//!
//! # Design
//!
//! These are pure value types with equality-by-value and no identity. Both
//! are validated at construction, so holding one is proof that the input was
//! accepted.
//!
//! # Adding a Template Variant
//!
//! 1. Add the enum variant here, with its `as_str` and `FromStr` arms
//! 2. Register its dependency delta in `catalog.rs`
//! 3. Register its file delta in `planner.rs`
//! 4. Register content for the new files in `content.rs`
//!
//! Every step is an exhaustive match, so the compiler points at each site.

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ── TemplateKind ──────────────────────────────────────────────────────────────

/// A built-in project template.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateKind {
    /// Single static component, no routing.
    Basic,
    /// Two pages wired through `react-router-dom`.
    WithRouter,
}

impl TemplateKind {
    /// Every registered variant, in display order.
    pub const ALL: [TemplateKind; 2] = [Self::Basic, Self::WithRouter];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::WithRouter => "with-router",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            Self::Basic => "Minimal React app with a single static component",
            Self::WithRouter => "React app with Home and About pages using react-router",
        }
    }

    pub const fn uses_router(self) -> bool {
        matches!(self, Self::WithRouter)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(Self::Basic),
            "with-router" => Ok(Self::WithRouter),
            _ => Err(DomainError::UnknownTemplate {
                identifier: s.to_string(),
            }),
        }
    }
}

// ── ProjectName ───────────────────────────────────────────────────────────────

/// A validated project name.
///
/// Invariant: non-empty and made only of `a-z`, `0-9` and `-`. The same value
/// names the project directory and the manifest `name` field.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn parse(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();

        if name.is_empty() {
            return Err(DomainError::InvalidProjectName {
                name,
                reason: "name cannot be empty".into(),
            });
        }

        if let Some(bad) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-'))
        {
            return Err(DomainError::InvalidProjectName {
                reason: format!(
                    "must be lowercase, alphanumeric with hyphens (found {bad:?})"
                ),
                name,
            });
        }

        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_kind_parses_known_identifiers() {
        assert_eq!("basic".parse::<TemplateKind>().unwrap(), TemplateKind::Basic);
        assert_eq!(
            "with-router".parse::<TemplateKind>().unwrap(),
            TemplateKind::WithRouter
        );
    }

    #[test]
    fn template_kind_matches_identifiers_exactly() {
        for input in ["With-Router", "BASIC", " basic ", "basic\n"] {
            let err = input.parse::<TemplateKind>().unwrap_err();
            assert_eq!(
                err,
                DomainError::UnknownTemplate {
                    identifier: input.to_string()
                }
            );
        }
    }

    #[test]
    fn template_kind_rejects_unknown_identifier() {
        let err = "vue".parse::<TemplateKind>().unwrap_err();
        assert_eq!(
            err,
            DomainError::UnknownTemplate {
                identifier: "vue".into()
            }
        );
    }

    #[test]
    fn template_kind_display_round_trips() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.to_string().parse::<TemplateKind>().unwrap(), kind);
        }
    }

    #[test]
    fn valid_project_names_pass() {
        for name in ["my-app", "app", "app2", "2fast", "a-b-c", "-"] {
            assert!(ProjectName::parse(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn invalid_project_names_are_rejected() {
        for name in ["", "MyApp", "my app", "my_app", "my.app", "../app", "café"] {
            assert!(
                matches!(
                    ProjectName::parse(name),
                    Err(DomainError::InvalidProjectName { .. })
                ),
                "accepted: {name:?}"
            );
        }
    }

    #[test]
    fn invalid_name_reason_mentions_offending_char() {
        match ProjectName::parse("my_app") {
            Err(DomainError::InvalidProjectName { name, reason }) => {
                assert_eq!(name, "my_app");
                assert!(reason.contains("'_'"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
