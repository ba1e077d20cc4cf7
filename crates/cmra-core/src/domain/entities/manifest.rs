use serde::Serialize;

use crate::domain::{
    catalog::{DependencySet, TemplateCatalog},
    error::DomainError,
    value_objects::{ProjectName, TemplateKind},
};

/// File name the manifest is persisted under, relative to the project root.
pub const MANIFEST_FILE_NAME: &str = "package.json";

const INITIAL_VERSION: &str = "0.1.0";
const MODULE_TYPE: &str = "module";

/// The generated project's `package.json`.
///
/// Field order matches the serialized document. Built once per run and never
/// mutated afterwards, so only accessors are exposed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectManifest {
    name: ProjectName,
    version: String,
    private: bool,
    #[serde(rename = "type")]
    module_type: String,
    dependencies: DependencySet,
    dev_dependencies: DependencySet,
    scripts: Scripts,
}

/// npm scripts. Identical for every template: all four delegate to
/// `react-scripts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Scripts {
    pub start: String,
    pub build: String,
    pub test: String,
    pub eject: String,
}

impl Scripts {
    pub fn react_scripts() -> Self {
        Self {
            start: "react-scripts start".into(),
            build: "react-scripts build".into(),
            test: "react-scripts test".into(),
            eject: "react-scripts eject".into(),
        }
    }
}

impl ProjectManifest {
    /// Assemble the manifest from the catalog entry for `kind`.
    pub fn build(
        name: &ProjectName,
        kind: TemplateKind,
        catalog: &TemplateCatalog,
    ) -> Result<Self, DomainError> {
        let definition = catalog.lookup(kind)?;

        Ok(Self {
            name: name.clone(),
            version: INITIAL_VERSION.into(),
            private: true,
            module_type: MODULE_TYPE.into(),
            dependencies: definition.dependencies().clone(),
            dev_dependencies: definition.dev_dependencies().clone(),
            scripts: Scripts::react_scripts(),
        })
    }

    /// Like [`Self::build`] but from a raw template identifier.
    pub fn build_for_identifier(
        name: &ProjectName,
        identifier: &str,
        catalog: &TemplateCatalog,
    ) -> Result<Self, DomainError> {
        Self::build(name, identifier.parse()?, catalog)
    }

    /// Pretty JSON (2-space indent) with a trailing newline.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn is_private(&self) -> bool {
        self.private
    }

    pub fn module_type(&self) -> &str {
        &self.module_type
    }

    pub fn dependencies(&self) -> &DependencySet {
        &self.dependencies
    }

    pub fn dev_dependencies(&self) -> &DependencySet {
        &self.dev_dependencies
    }

    pub fn scripts(&self) -> &Scripts {
        &self.scripts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name() -> ProjectName {
        ProjectName::parse("my-app").unwrap()
    }

    #[test]
    fn basic_manifest_has_fixed_metadata() {
        let manifest =
            ProjectManifest::build(&name(), TemplateKind::Basic, &TemplateCatalog::builtin())
                .unwrap();

        assert_eq!(manifest.name().as_str(), "my-app");
        assert_eq!(manifest.version(), "0.1.0");
        assert!(manifest.is_private());
        assert_eq!(manifest.module_type(), "module");
        assert_eq!(manifest.scripts().eject, "react-scripts eject");
    }

    #[test]
    fn build_is_deterministic() {
        let catalog = TemplateCatalog::builtin();
        let a = ProjectManifest::build(&name(), TemplateKind::WithRouter, &catalog).unwrap();
        let b = ProjectManifest::build(&name(), TemplateKind::WithRouter, &catalog).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_json().unwrap(), b.to_json().unwrap());
    }

    #[test]
    fn json_uses_package_json_field_names_in_order() {
        let json = ProjectManifest::build(&name(), TemplateKind::Basic, &TemplateCatalog::builtin())
            .unwrap()
            .to_json()
            .unwrap();

        let keys = [
            "\"name\"",
            "\"version\"",
            "\"private\"",
            "\"type\"",
            "\"dependencies\"",
            "\"devDependencies\"",
            "\"scripts\"",
        ];
        let positions: Vec<usize> = keys.iter().map(|k| json.find(k).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");

        assert!(json.contains("\n  \"name\": \"my-app\""));
        assert!(json.contains("\"private\": true"));
        assert!(json.ends_with("}\n"));
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        let err = ProjectManifest::build_for_identifier(&name(), "angular", &TemplateCatalog::builtin())
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownTemplate { .. }));
    }

    #[test]
    fn missing_catalog_entry_is_unknown_template() {
        let err = ProjectManifest::build(&name(), TemplateKind::Basic, &TemplateCatalog::empty())
            .unwrap_err();
        assert!(matches!(err, DomainError::UnknownTemplate { .. }));
    }
}
