//! Template Service - read-only catalog queries.
//!
//! Separated from GenerationService for single responsibility: listing what
//! is available never needs adapters.

use serde::Serialize;

use crate::domain::{TemplateCatalog, TemplateKind, planner};

/// Information about a template for display purposes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub id: String,
    pub description: String,
    pub dependencies: Vec<String>,
    pub dev_dependencies: Vec<String>,
    pub files: Vec<String>,
}

/// Service for template queries.
pub struct TemplateService<'a> {
    catalog: &'a TemplateCatalog,
}

impl<'a> TemplateService<'a> {
    pub fn new(catalog: &'a TemplateCatalog) -> Self {
        Self { catalog }
    }

    /// Identifiers of every registered template.
    pub fn identifiers(&self) -> Vec<&'static str> {
        self.catalog.kinds().map(|k| k.as_str()).collect()
    }

    /// Describe every registered template.
    pub fn list(&self) -> Vec<TemplateInfo> {
        self.catalog
            .iter()
            .map(|def| {
                let kind: TemplateKind = def.kind();
                TemplateInfo {
                    id: kind.as_str().to_string(),
                    description: kind.description().to_string(),
                    dependencies: format_deps(def.dependencies()),
                    dev_dependencies: format_deps(def.dev_dependencies()),
                    files: planner::plan(kind).file_paths(),
                }
            })
            .collect()
    }
}

fn format_deps(deps: &crate::domain::DependencySet) -> Vec<String> {
    deps.iter()
        .map(|(name, version)| format!("{name}@{version}"))
        .collect()
}
