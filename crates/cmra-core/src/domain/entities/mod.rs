pub mod common;
pub mod manifest;
pub mod project_structure;
pub mod structure_plan;

pub use crate::domain::DomainError;
pub use manifest::{MANIFEST_FILE_NAME, ProjectManifest, Scripts};
pub use project_structure::ProjectStructure;
pub use structure_plan::{PlannedDirectory, StructurePlan};
