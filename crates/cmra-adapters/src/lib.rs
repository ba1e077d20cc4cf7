//! Infrastructure adapters for create-my-react-app.
//!
//! This crate implements the ports defined in `cmra_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod installer;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use installer::{NpmInstaller, SkipInstaller};
pub use vcs::GitInitializer;
