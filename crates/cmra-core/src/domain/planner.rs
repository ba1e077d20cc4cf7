//! Structure planner: template kind → directories and files to create.
//!
//! Each variant is the shared baseline plus a delta. The router delta here
//! must stay in lockstep with the router-only content in `content.rs`; the
//! tests in `domain/mod.rs` cross-check the two.

use crate::domain::{entities::StructurePlan, error::DomainError, value_objects::TemplateKind};

const PUBLIC_FILES: [&str; 3] = ["index.html", "favicon.ico", "manifest.json"];

const SRC_FILES: [&str; 4] = ["App.js", "index.js", "index.css", "App.css"];

const ROUTER_COMPONENTS: [&str; 2] = ["components/Home.js", "components/About.js"];

/// Plan the project layout for `kind`. Pure and deterministic.
pub fn plan(kind: TemplateKind) -> StructurePlan {
    let baseline = StructurePlan::new()
        .with_directory("public", PUBLIC_FILES)
        .with_directory("src", SRC_FILES);

    match kind {
        TemplateKind::Basic => baseline,
        TemplateKind::WithRouter => baseline.extend_directory("src", ROUTER_COMPONENTS),
    }
}

/// Plan from a raw identifier; unknown identifiers fail before planning.
pub fn plan_identifier(identifier: &str) -> Result<StructurePlan, DomainError> {
    Ok(plan(identifier.parse()?))
}
