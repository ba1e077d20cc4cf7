//! Implementation of the `create-my-react-app list` command.

use cmra_core::{
    application::{TemplateInfo, TemplateService},
    domain::TemplateCatalog,
};

use crate::{
    cli::{ListArgs, ListFormat, OutputFormat},
    error::CliResult,
    output::OutputManager,
};

pub fn execute(args: ListArgs, output: OutputManager) -> CliResult<()> {
    let catalog = TemplateCatalog::builtin();
    let templates = TemplateService::new(&catalog).list();

    let format = if output.format() == OutputFormat::Json {
        ListFormat::Json
    } else {
        args.format
    };

    match format {
        ListFormat::Table => render_table(&templates, args.files, &output)?,

        // JSON goes to stdout even in quiet mode so it stays pipeable.
        ListFormat::Json => output.json(&templates)?,

        ListFormat::List => {
            for t in &templates {
                output.print(&t.id)?;
            }
        }
    }

    Ok(())
}

fn render_table(templates: &[TemplateInfo], files: bool, output: &OutputManager) -> CliResult<()> {
    output.header("Available Templates:")?;
    for t in templates {
        output.print(&format!("  {:<12} {}", t.id, t.description))?;
        output.detail(&format!("    dependencies:     {}", t.dependencies.join(", ")))?;
        output.detail(&format!(
            "    devDependencies:  {}",
            t.dev_dependencies.join(", ")
        ))?;
        if files {
            for file in &t.files {
                output.detail(&format!("    {file}"))?;
            }
        }
    }
    Ok(())
}
