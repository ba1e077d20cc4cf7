use crate::domain::{
    catalog::TemplateCatalog,
    entities::{ProjectStructure, StructurePlan},
    error::DomainError,
    value_objects::{ProjectName, TemplateKind},
};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_project_name(name: &str) -> Result<ProjectName, DomainError> {
        ProjectName::parse(name)
    }

    /// Parse `identifier` and confirm the catalog actually registers it.
    pub fn validate_template(
        identifier: &str,
        catalog: &TemplateCatalog,
    ) -> Result<TemplateKind, DomainError> {
        let kind: TemplateKind = identifier.parse()?;
        catalog.lookup(kind)?;
        Ok(kind)
    }

    pub fn validate_plan(plan: &StructurePlan) -> Result<(), DomainError> {
        plan.validate()
    }

    pub fn validate_project_structure(structure: &ProjectStructure) -> Result<(), DomainError> {
        structure.validate()
    }
}
