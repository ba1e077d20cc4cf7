//! Template catalog: the single source of truth for dependency sets.
//!
//! The catalog is an immutable value built once at startup and passed to
//! whoever needs it. Nothing in this crate holds a global copy.

use std::collections::BTreeMap;

use crate::domain::{error::DomainError, value_objects::TemplateKind};

/// Package name → version constraint. Ordered so manifests serialize stably.
pub type DependencySet = BTreeMap<String, String>;

const REACT_DEPENDENCIES: &[(&str, &str)] = &[
    ("react", "^18.2.0"),
    ("react-dom", "^18.2.0"),
    ("react-scripts", "^5.0.1"),
];

const ROUTER_DEPENDENCIES: &[(&str, &str)] = &[("react-router-dom", "^6.3.0")];

const TOOLING_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@testing-library/react", "^13.3.0"),
    ("eslint", "^8.20.0"),
    ("prettier", "^2.7.1"),
];

/// Dependencies a template contributes to the generated manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDefinition {
    kind: TemplateKind,
    dependencies: DependencySet,
    dev_dependencies: DependencySet,
}

impl TemplateDefinition {
    pub fn new(kind: TemplateKind) -> Self {
        Self {
            kind,
            dependencies: DependencySet::new(),
            dev_dependencies: DependencySet::new(),
        }
    }

    pub fn with_dependency(mut self, name: impl Into<String>, version: impl Into<String>) -> Self {
        self.dependencies.insert(name.into(), version.into());
        self
    }

    pub fn with_dev_dependency(
        mut self,
        name: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        self.dev_dependencies.insert(name.into(), version.into());
        self
    }

    fn with_dependencies(self, deps: &[(&str, &str)]) -> Self {
        deps.iter()
            .fold(self, |def, (name, version)| def.with_dependency(*name, *version))
    }

    fn with_dev_dependencies(self, deps: &[(&str, &str)]) -> Self {
        deps.iter()
            .fold(self, |def, (name, version)| def.with_dev_dependency(*name, *version))
    }

    pub fn kind(&self) -> TemplateKind {
        self.kind
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &DependencySet {
        &self.dev_dependencies
    }

    /// Built-in definition: shared React baseline plus the variant's delta.
    fn builtin(kind: TemplateKind) -> Self {
        let baseline = Self::new(kind)
            .with_dependencies(REACT_DEPENDENCIES)
            .with_dev_dependencies(TOOLING_DEV_DEPENDENCIES);

        match kind {
            TemplateKind::Basic => baseline,
            TemplateKind::WithRouter => baseline.with_dependencies(ROUTER_DEPENDENCIES),
        }
    }
}

/// Registry of template definitions keyed by [`TemplateKind`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateCatalog {
    templates: BTreeMap<TemplateKind, TemplateDefinition>,
}

impl TemplateCatalog {
    /// An empty catalog. Every lookup fails until templates are added.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The catalog shipped with the binary: every [`TemplateKind`].
    pub fn builtin() -> Self {
        TemplateKind::ALL
            .into_iter()
            .fold(Self::empty(), |catalog, kind| {
                catalog.with_template(TemplateDefinition::builtin(kind))
            })
    }

    /// Register (or replace) a definition.
    pub fn with_template(mut self, definition: TemplateDefinition) -> Self {
        self.templates.insert(definition.kind, definition);
        self
    }

    pub fn lookup(&self, kind: TemplateKind) -> Result<&TemplateDefinition, DomainError> {
        self.templates
            .get(&kind)
            .ok_or_else(|| DomainError::UnknownTemplate {
                identifier: kind.to_string(),
            })
    }

    /// Parse a raw identifier and look it up.
    pub fn lookup_identifier(&self, identifier: &str) -> Result<&TemplateDefinition, DomainError> {
        self.lookup(identifier.parse()?)
    }

    pub fn contains(&self, kind: TemplateKind) -> bool {
        self.templates.contains_key(&kind)
    }

    /// Registered kinds, in [`TemplateKind`] order.
    pub fn kinds(&self) -> impl Iterator<Item = TemplateKind> + '_ {
        self.templates.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateDefinition> {
        self.templates.values()
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
