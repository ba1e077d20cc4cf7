// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer.
//!
//! This module contains pure logic with no I/O. Filesystem writes and the
//! package-manager call go through ports defined in the application layer.
//!
//! - **No I/O**: no filesystem, network or process calls
//! - **Deterministic**: same inputs always give the same plan and manifest
//! - **Immutable values**: catalog, plan and manifest are never mutated after construction

pub mod catalog;
pub mod content;
pub mod entities;
pub mod error;
pub mod planner;
pub mod value_objects;

mod validation;

// Re-exports for convenience
pub use catalog::{DependencySet, TemplateCatalog, TemplateDefinition};
pub use entities::{
    MANIFEST_FILE_NAME, PlannedDirectory, ProjectManifest, ProjectStructure, Scripts,
    StructurePlan,
    common::RelativePath,
    project_structure::{DirectoryToCreate, FileToWrite, FsEntry},
};
pub use error::{DomainError, ErrorCategory};
pub use validation::DomainValidator;
pub use value_objects::{ProjectName, TemplateKind};
