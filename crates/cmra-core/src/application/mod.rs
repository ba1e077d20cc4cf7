//! Application layer.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (GenerationService, Materializer, TemplateService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    GenerationFailure, GenerationPreview, GenerationReport, GenerationRequest, GenerationService,
    GenerationStage, MaterializeSummary, Materializer, TemplateInfo, TemplateService,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, Installer, VersionControl};

pub use error::ApplicationError;
