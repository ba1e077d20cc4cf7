//! Generation Service - main application orchestrator.
//!
//! Runs one project generation as a strictly sequential state machine:
//!
//! ```text
//! Validating → Planning → Writing → ManifestPersisting → Installing → Done
//!      │           │          │              │                │
//!      └───────────┴──────────┴──────────────┴────────────────┴──▶ Failed(stage, cause)
//! ```
//!
//! Validation failures never touch the filesystem. After any later failure
//! the partially written project is left on disk as-is.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{Filesystem, Installer, VersionControl},
        services::materializer::Materializer,
    },
    domain::{
        DomainValidator as validator, MANIFEST_FILE_NAME, ProjectManifest, ProjectName,
        ProjectStructure, StructurePlan, TemplateCatalog, TemplateKind, content, planner,
    },
    error::{CmraError, CmraResult},
};

/// Stages of a generation run, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum GenerationStage {
    Validating,
    Planning,
    Writing,
    ManifestPersisting,
    Installing,
    Done,
}

impl GenerationStage {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validating => "validating",
            Self::Planning => "planning",
            Self::Writing => "writing",
            Self::ManifestPersisting => "manifest-persisting",
            Self::Installing => "installing",
            Self::Done => "done",
        }
    }

    /// Whether a failure at this stage may have left files on disk.
    pub const fn touches_filesystem(&self) -> bool {
        matches!(
            self,
            Self::Writing | Self::ManifestPersisting | Self::Installing | Self::Done
        )
    }
}

impl fmt::Display for GenerationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Terminal failure of a run: the stage that failed and why.
#[derive(Debug, Clone, Error)]
#[error("Generation failed while {stage}: {error}")]
pub struct GenerationFailure {
    pub stage: GenerationStage,
    #[source]
    pub error: CmraError,
}

impl GenerationFailure {
    pub fn suggestions(&self) -> Vec<String> {
        self.error.suggestions()
    }
}

/// Raw, unvalidated inputs for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub project_name: String,
    pub template: String,
    /// Directory the project directory is created in.
    pub output_dir: PathBuf,
}

impl GenerationRequest {
    pub fn new(project_name: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            template: template.into(),
            output_dir: PathBuf::from("."),
        }
    }

    pub fn in_dir(mut self, output_dir: impl Into<PathBuf>) -> Self {
        self.output_dir = output_dir.into();
        self
    }
}

/// Outcome of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationReport {
    pub project_name: ProjectName,
    pub template: TemplateKind,
    pub project_root: PathBuf,
    pub manifest_path: PathBuf,
    pub files_written: usize,
    /// `None` when version control was not requested.
    pub vcs_initialized: Option<bool>,
}

/// Validated and planned, but nothing written yet.
#[derive(Debug, Clone)]
pub struct GenerationPreview {
    pub structure: ProjectStructure,
    pub manifest: ProjectManifest,
}

struct ValidatedRequest {
    name: ProjectName,
    kind: TemplateKind,
    root: PathBuf,
}

/// Main generation service.
pub struct GenerationService {
    catalog: TemplateCatalog,
    filesystem: Box<dyn Filesystem>,
    installer: Box<dyn Installer>,
    vcs: Option<Box<dyn VersionControl>>,
}

impl GenerationService {
    /// Create a new generation service with the given catalog and adapters.
    pub fn new(
        catalog: TemplateCatalog,
        filesystem: Box<dyn Filesystem>,
        installer: Box<dyn Installer>,
    ) -> Self {
        Self {
            catalog,
            filesystem,
            installer,
            vcs: None,
        }
    }

    /// Initialise version control after a successful install.
    pub fn with_version_control(mut self, vcs: Box<dyn VersionControl>) -> Self {
        self.vcs = Some(vcs);
        self
    }

    pub fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    /// Run `Validating` and `Planning` only. Nothing is written.
    #[instrument(skip_all, fields(project = %request.project_name, template = %request.template))]
    pub fn preview(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationPreview, GenerationFailure> {
        let validated = self
            .validate(request)
            .map_err(failed_at(GenerationStage::Validating))?;
        let (plan, manifest) = self
            .plan(&validated)
            .map_err(failed_at(GenerationStage::Planning))?;

        let kind = validated.kind;
        let structure =
            ProjectStructure::from_plan(&validated.root, &plan, |p| content::resolve(p, kind))
                .map_err(|e| failed_at(GenerationStage::Planning)(e.into()))?;

        Ok(GenerationPreview {
            structure,
            manifest,
        })
    }

    /// Generate a project end to end.
    #[instrument(skip_all, fields(project = %request.project_name, template = %request.template))]
    pub fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationReport, GenerationFailure> {
        use GenerationStage::*;

        enter(Validating);
        let validated = self.validate(request).map_err(failed_at(Validating))?;

        enter(Planning);
        let (plan, manifest) = self.plan(&validated).map_err(failed_at(Planning))?;

        enter(Writing);
        if self.filesystem.exists(&validated.root) {
            info!(path = %validated.root.display(), "target directory exists, files will be overwritten");
        }
        let kind = validated.kind;
        let summary = Materializer::new(self.filesystem.as_ref())
            .materialize(&validated.root, &plan, |p| content::resolve(p, kind))
            .map_err(failed_at(Writing))?;

        enter(ManifestPersisting);
        let manifest_path = self
            .persist_manifest(&validated.root, &manifest)
            .map_err(failed_at(ManifestPersisting))?;

        enter(Installing);
        info!(command = %self.installer.describe(), "installing dependencies");
        self.installer
            .install(&validated.root)
            .map_err(failed_at(Installing))?;

        let vcs_initialized = self.init_vcs(&validated.root);

        enter(Done);
        Ok(GenerationReport {
            project_name: validated.name,
            template: validated.kind,
            project_root: validated.root,
            manifest_path,
            files_written: summary.files_written,
            vcs_initialized,
        })
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    fn validate(&self, request: &GenerationRequest) -> CmraResult<ValidatedRequest> {
        let name = validator::validate_project_name(&request.project_name)?;
        let kind = validator::validate_template(&request.template, &self.catalog)?;
        let root = request.output_dir.join(name.as_str());

        Ok(ValidatedRequest { name, kind, root })
    }

    fn plan(&self, validated: &ValidatedRequest) -> CmraResult<(StructurePlan, ProjectManifest)> {
        let plan = planner::plan(validated.kind);
        validator::validate_plan(&plan)?;
        let manifest = ProjectManifest::build(&validated.name, validated.kind, &self.catalog)?;
        Ok((plan, manifest))
    }

    fn persist_manifest(&self, root: &Path, manifest: &ProjectManifest) -> CmraResult<PathBuf> {
        let json = manifest
            .to_json()
            .map_err(|e| ApplicationError::ManifestSerialization {
                reason: e.to_string(),
            })?;

        let path = root.join(MANIFEST_FILE_NAME);
        self.filesystem
            .write_file(&path, &json)
            .map_err(|e| ApplicationError::materialization(&path, e))?;
        Ok(path)
    }

    /// Version control is best effort: a failure is logged, never fatal.
    fn init_vcs(&self, root: &Path) -> Option<bool> {
        let vcs = self.vcs.as_ref()?;
        match vcs.init(root) {
            Ok(()) => {
                info!("version control initialised");
                Some(true)
            }
            Err(e) => {
                warn!(error = %e, "version control initialisation failed");
                Some(false)
            }
        }
    }
}

fn enter(stage: GenerationStage) {
    info!(stage = %stage, "entering stage");
}

fn failed_at(stage: GenerationStage) -> impl FnOnce(CmraError) -> GenerationFailure {
    move |error| {
        warn!(stage = %stage, error = %error, "generation failed");
        GenerationFailure { stage, error }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::{
        application::ports::{MockFilesystem, MockInstaller, MockVersionControl},
        domain::{DomainError, TemplateDefinition},
    };

    type Files = Arc<Mutex<BTreeMap<PathBuf, String>>>;

    fn capturing_fs(files: Files) -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(move |p, c| {
            files.lock().unwrap().insert(p.to_path_buf(), c.to_string());
            Ok(())
        });
        fs.expect_exists().returning(|_| false);
        fs
    }

    fn untouched_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        fs.expect_write_file().never();
        fs
    }

    fn ok_installer() -> MockInstaller {
        let mut installer = MockInstaller::new();
        installer.expect_install().times(1).returning(|_| Ok(()));
        installer
            .expect_describe()
            .returning(|| "npm install".to_string());
        installer
    }

    fn idle_installer() -> MockInstaller {
        let mut installer = MockInstaller::new();
        installer.expect_install().never();
        installer
            .expect_describe()
            .returning(|| "npm install".to_string());
        installer
    }

    fn service(fs: MockFilesystem, installer: MockInstaller) -> GenerationService {
        GenerationService::new(
            TemplateCatalog::builtin(),
            Box::new(fs),
            Box::new(installer),
        )
    }

    #[test]
    fn successful_run_reports_done() {
        let files: Files = Arc::default();
        let svc = service(capturing_fs(Arc::clone(&files)), ok_installer());

        let report = svc
            .generate(&GenerationRequest::new("my-app", "with-router").in_dir("/work"))
            .unwrap();

        assert_eq!(report.project_root, PathBuf::from("/work/my-app"));
        assert_eq!(report.files_written, 9);
        assert_eq!(report.vcs_initialized, None);

        let files = files.lock().unwrap();
        let manifest = &files[&PathBuf::from("/work/my-app/package.json")];
        assert!(manifest.contains("\"react-router-dom\": \"^6.3.0\""));
        assert_eq!(files.len(), 10);
    }

    #[test]
    fn invalid_name_fails_validation_without_io() {
        for name in ["MyApp", "my app", "my_app", ""] {
            let svc = service(untouched_fs(), idle_installer());
            let failure = svc
                .generate(&GenerationRequest::new(name, "basic"))
                .unwrap_err();

            assert_eq!(failure.stage, GenerationStage::Validating);
            assert!(matches!(
                failure.error,
                CmraError::Domain(DomainError::InvalidProjectName { .. })
            ));
            assert!(!failure.stage.touches_filesystem());
        }
    }

    #[test]
    fn unknown_template_fails_validation_without_io() {
        let svc = service(untouched_fs(), idle_installer());
        let failure = svc
            .generate(&GenerationRequest::new("my-app", "vue"))
            .unwrap_err();

        assert_eq!(failure.stage, GenerationStage::Validating);
        assert!(matches!(
            failure.error,
            CmraError::Domain(DomainError::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn template_missing_from_catalog_fails_validation() {
        let catalog =
            TemplateCatalog::empty().with_template(TemplateDefinition::new(TemplateKind::Basic));
        let svc = GenerationService::new(
            catalog,
            Box::new(untouched_fs()),
            Box::new(idle_installer()),
        );

        let failure = svc
            .generate(&GenerationRequest::new("my-app", "with-router"))
            .unwrap_err();
        assert_eq!(failure.stage, GenerationStage::Validating);
    }

    #[test]
    fn installer_failure_fails_at_installing_and_keeps_files() {
        let files: Files = Arc::default();
        let mut installer = MockInstaller::new();
        installer.expect_install().times(1).returning(|_| {
            Err(ApplicationError::InstallationFailed {
                reason: "exit status: 1".into(),
            }
            .into())
        });
        installer
            .expect_describe()
            .returning(|| "npm install".to_string());

        let svc = service(capturing_fs(Arc::clone(&files)), installer);
        let failure = svc
            .generate(&GenerationRequest::new("my-app", "basic"))
            .unwrap_err();

        assert_eq!(failure.stage, GenerationStage::Installing);
        assert!(matches!(
            failure.error,
            CmraError::Application(ApplicationError::InstallationFailed { .. })
        ));
        assert!(failure.to_string().contains("installing"));

        let files = files.lock().unwrap();
        assert!(files.contains_key(&PathBuf::from("./my-app/package.json")));
        assert!(files.contains_key(&PathBuf::from("./my-app/src/App.js")));
    }

    #[test]
    fn manifest_write_failure_fails_at_manifest_persisting() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            if p.ends_with("package.json") {
                Err(CmraError::Internal {
                    message: "disk full".into(),
                })
            } else {
                Ok(())
            }
        });

        let svc = service(fs, idle_installer());
        let failure = svc
            .generate(&GenerationRequest::new("my-app", "basic"))
            .unwrap_err();

        assert_eq!(failure.stage, GenerationStage::ManifestPersisting);
        assert!(matches!(
            failure.error,
            CmraError::Application(ApplicationError::MaterializationFailed { ref path, .. })
                if path.ends_with("package.json")
        ));
    }

    #[test]
    fn write_failure_fails_at_writing_and_skips_install() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| true);
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs.expect_write_file().returning(|p, _| {
            Err(ApplicationError::MaterializationFailed {
                path: p.to_path_buf(),
                reason: "permission denied".into(),
            }
            .into())
        });

        let svc = service(fs, idle_installer());
        let failure = svc
            .generate(&GenerationRequest::new("my-app", "basic"))
            .unwrap_err();
        assert_eq!(failure.stage, GenerationStage::Writing);
    }

    #[test]
    fn vcs_failure_is_not_fatal() {
        let files: Files = Arc::default();
        let mut vcs = MockVersionControl::new();
        vcs.expect_init().times(1).returning(|_| {
            Err(ApplicationError::VersionControlFailed {
                reason: "git not found".into(),
            }
            .into())
        });

        let svc = service(capturing_fs(files), ok_installer()).with_version_control(Box::new(vcs));
        let report = svc
            .generate(&GenerationRequest::new("my-app", "basic"))
            .unwrap();
        assert_eq!(report.vcs_initialized, Some(false));
    }

    #[test]
    fn preview_resolves_without_io() {
        let svc = service(untouched_fs(), idle_installer());
        let preview = svc
            .preview(&GenerationRequest::new("my-app", "with-router"))
            .unwrap();

        assert_eq!(preview.structure.file_count(), 9);
        assert!(preview.manifest.dependencies().contains_key("react-router-dom"));
        assert!(
            preview
                .structure
                .file("src/components/Home.js")
                .unwrap()
                .content
                .contains("/about")
        );
    }

    #[test]
    fn stages_are_ordered() {
        assert!(GenerationStage::Validating < GenerationStage::Planning);
        assert!(GenerationStage::ManifestPersisting < GenerationStage::Installing);
        assert!(GenerationStage::Installing.touches_filesystem());
    }
}
