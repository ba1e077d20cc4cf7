//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "generate a project" or "list templates".

pub mod generation_service;
pub mod materializer;
pub mod template_service;

pub use generation_service::{
    GenerationFailure, GenerationPreview, GenerationReport, GenerationRequest, GenerationService,
    GenerationStage,
};
pub use materializer::{MaterializeSummary, Materializer};
pub use template_service::{TemplateInfo, TemplateService};
