//! create-my-react-app Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the React
//! project generator, following hexagonal (ports and adapters) architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            cmra-cli (CLI)               │
//! │   (prompts, config, output, exit code)  │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (GenerationService, Materializer, ...)  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, Installer, VersionControl) │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     cmra-adapters (Infrastructure)      │
//! │ (LocalFilesystem, NpmInstaller, Git...) │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │ (TemplateCatalog, planner, content,     │
//! │  ProjectManifest, ProjectName)          │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use cmra_core::prelude::*;
//!
//! let service = GenerationService::new(TemplateCatalog::builtin(), filesystem, installer);
//! let report = service.generate(&GenerationRequest::new("my-app", "with-router"))?;
//! println!("created {}", report.project_root.display());
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerationFailure, GenerationReport, GenerationRequest, GenerationService,
        GenerationStage, TemplateService,
        ports::{Filesystem, Installer, VersionControl},
    };
    pub use crate::domain::{
        ProjectManifest, ProjectName, ProjectStructure, StructurePlan, TemplateCatalog,
        TemplateKind,
    };
    pub use crate::error::{CmraError, CmraResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
