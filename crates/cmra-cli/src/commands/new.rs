//! Implementation of the `create-my-react-app new` command.
//!
//! Responsibility: collect the project name and template (arguments first,
//! prompts second), wire adapters from config, call the core generation
//! service, and display results. No business logic lives here.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, instrument};

use cmra_adapters::{GitInitializer, LocalFilesystem, NpmInstaller, SkipInstaller};
use cmra_core::{
    application::{
        GenerationPreview, GenerationReport, GenerationRequest, GenerationService,
        ports::Installer,
    },
    domain::{MANIFEST_FILE_NAME, ProjectManifest, TemplateCatalog, TemplateKind},
};

use crate::{
    cli::{NewArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
    prompt::{Prompter, TerminalPrompter},
};

/// Inputs after merging arguments, config and prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ResolvedInputs {
    name: String,
    template: String,
    output_dir: PathBuf,
}

/// Execute the `create-my-react-app new` command.
///
/// Dispatch sequence:
/// 1. Resolve name and template (prompting for what is missing)
/// 2. Early-exit with a preview if `--dry-run`
/// 3. Generate via `GenerationService`
/// 4. Print next-steps guidance
#[instrument(skip_all)]
pub fn execute(args: NewArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = TemplateCatalog::builtin();

    // 1. Resolve inputs
    let inputs = resolve_inputs(&args, &config, &catalog, &TerminalPrompter)?;
    debug!(?inputs, "inputs resolved");

    let request = GenerationRequest::new(&inputs.name, &inputs.template).in_dir(&inputs.output_dir);
    let service = build_service(catalog, &args, &config);

    // 2. Dry run: describe but do not write.
    if args.dry_run {
        let preview = service.preview(&request)?;
        return show_preview(&preview, &output);
    }

    // 3. Generate
    output.header(&format!(
        "Creating '{}' from the {} template...",
        inputs.name, inputs.template
    ))?;

    let report = service.generate(&request)?;

    // 4. Success + next steps
    if output.format() == OutputFormat::Json {
        return Ok(output.json(&ReportView::from(&report))?);
    }

    output.success(&format!(
        "Project '{}' created at {} ({} files)",
        report.project_name,
        report.project_root.display(),
        report.files_written + 1,
    ))?;

    match report.vcs_initialized {
        Some(true) => output.info("Initialised a git repository")?,
        Some(false) => output.warning("Could not initialise a git repository, continuing")?,
        None => {}
    }

    if !output.is_quiet() {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", report.project_root.display()))?;
        if args.skip_install || config.install.skip {
            output.print(&format!("  {}", installer_from(&config).describe()))?;
        }
        output.print("  npm start")?;
    }

    Ok(())
}

// ── Input resolution ──────────────────────────────────────────────────────────

fn resolve_inputs(
    args: &NewArgs,
    config: &AppConfig,
    catalog: &TemplateCatalog,
    prompter: &dyn Prompter,
) -> CliResult<ResolvedInputs> {
    let name = match &args.name {
        Some(name) => name.clone(),
        None => prompter.project_name()?,
    };

    // An explicit template is passed through untouched; the core rejects
    // unknown identifiers before anything is written.
    let template = match &args.template {
        Some(template) => template.clone(),
        None => {
            let choices: Vec<TemplateKind> = catalog.kinds().collect();
            let default = default_choice(&choices, config.defaults.template.as_deref());
            prompter.template(&choices, default)?.as_str().to_string()
        }
    };

    let output_dir = args
        .output
        .clone()
        .or_else(|| config.defaults.output_dir.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    Ok(ResolvedInputs {
        name,
        template,
        output_dir,
    })
}

/// Index of the configured default template, or the first choice.
fn default_choice(choices: &[TemplateKind], configured: Option<&str>) -> usize {
    configured
        .and_then(|id| id.parse::<TemplateKind>().ok())
        .and_then(|kind| choices.iter().position(|c| *c == kind))
        .unwrap_or(0)
}

// ── Adapter wiring ────────────────────────────────────────────────────────────

fn build_service(catalog: TemplateCatalog, args: &NewArgs, config: &AppConfig) -> GenerationService {
    let installer: Box<dyn Installer> = if args.skip_install || config.install.skip {
        Box::new(SkipInstaller)
    } else {
        Box::new(installer_from(config))
    };

    let service = GenerationService::new(catalog, Box::new(LocalFilesystem::new()), installer);

    if args.git || config.vcs.init {
        service.with_version_control(Box::new(GitInitializer::new()))
    } else {
        service
    }
}

fn installer_from(config: &AppConfig) -> NpmInstaller {
    NpmInstaller::with_command(&config.install.program, &config.install.args)
}

// ── Display ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct ReportView<'a> {
    name: &'a str,
    template: &'static str,
    root: String,
    files_written: usize,
    vcs_initialized: Option<bool>,
}

impl<'a> From<&'a GenerationReport> for ReportView<'a> {
    fn from(report: &'a GenerationReport) -> Self {
        Self {
            name: report.project_name.as_str(),
            template: report.template.as_str(),
            root: report.project_root.display().to_string(),
            files_written: report.files_written,
            vcs_initialized: report.vcs_initialized,
        }
    }
}

#[derive(Debug, Serialize)]
struct PreviewView<'a> {
    root: String,
    directories: Vec<String>,
    files: Vec<String>,
    manifest: &'a ProjectManifest,
}

impl<'a> From<&'a GenerationPreview> for PreviewView<'a> {
    fn from(preview: &'a GenerationPreview) -> Self {
        let structure = &preview.structure;
        let mut files: Vec<String> = structure.files().map(|f| f.path.to_key()).collect();
        files.push(MANIFEST_FILE_NAME.to_string());

        Self {
            root: structure.root().display().to_string(),
            directories: structure.directories().map(|d| d.path.to_key()).collect(),
            files,
            manifest: &preview.manifest,
        }
    }
}

fn show_preview(preview: &GenerationPreview, output: &OutputManager) -> CliResult<()> {
    let view = PreviewView::from(preview);

    if output.format() == OutputFormat::Json {
        return Ok(output.json(&view)?);
    }

    output.info(&format!("Dry run: would create {}", view.root))?;
    output.header("Directories")?;
    for dir in &view.directories {
        output.detail(&format!("{dir}/"))?;
    }
    output.header("Files")?;
    for file in &view.files {
        output.detail(file)?;
    }
    output.header("Dependencies")?;
    for (name, version) in view.manifest.dependencies() {
        output.detail(&format!("{name} {version}"))?;
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
