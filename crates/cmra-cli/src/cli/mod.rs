//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "create-my-react-app",
    bin_name = "create-my-react-app",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold a React application",
    long_about = "create-my-react-app writes a ready-to-run React project \
                  (public/, src/, package.json) from a built-in template and \
                  installs its dependencies.\n\n\
                  Run without arguments to be prompted for everything.",
    after_help = "EXAMPLES:\n\
        \x20 create-my-react-app\n\
        \x20 create-my-react-app new my-app --template with-router\n\
        \x20 create-my-react-app new my-app -t basic --skip-install --git\n\
        \x20 create-my-react-app list\n\
        \x20 create-my-react-app completions bash > ~/.local/share/bash-completion/completions/create-my-react-app",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute. Defaults to an interactive `new`.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create a new React project.
    #[command(
        visible_alias = "n",
        about = "Create a new React project",
        after_help = "EXAMPLES:\n\
            \x20 create-my-react-app new my-app                  # prompts for the template\n\
            \x20 create-my-react-app new my-app -t with-router\n\
            \x20 create-my-react-app new my-app -t basic --dry-run"
    )]
    New(NewArgs),

    /// List available templates.
    #[command(
        visible_alias = "ls",
        about = "List available templates",
        after_help = "EXAMPLES:\n\
            \x20 create-my-react-app list\n\
            \x20 create-my-react-app list --output-format json"
    )]
    List(ListArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 create-my-react-app completions bash > ~/.local/share/bash-completion/completions/create-my-react-app\n\
            \x20 create-my-react-app completions zsh  > ~/.zfunc/_create-my-react-app\n\
            \x20 create-my-react-app completions fish > ~/.config/fish/completions/create-my-react-app.fish"
    )]
    Completions(CompletionsArgs),
}

// ── new ───────────────────────────────────────────────────────────────────────

/// Arguments for `create-my-react-app new`.
#[derive(Debug, Default, Args)]
pub struct NewArgs {
    /// Project name: lowercase letters, digits and hyphens.  Prompted for
    /// when omitted.
    #[arg(value_name = "NAME", help = "Project name (lowercase, digits, hyphens)")]
    pub name: Option<String>,

    /// Template identifier.  Prompted for when omitted.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        help = "Template to use (basic, with-router)"
    )]
    pub template: Option<String>,

    /// Directory the project directory is created in.
    #[arg(
        short = 'o',
        long = "output",
        value_name = "DIR",
        help = "Parent directory for the project (default: current directory)"
    )]
    pub output: Option<PathBuf>,

    /// Do not run the package manager.
    #[arg(long = "skip-install", help = "Skip dependency installation")]
    pub skip_install: bool,

    /// Initialise a git repository with an initial commit.
    #[arg(long = "git", help = "Initialise a git repository after installing")]
    pub git: bool,

    /// Preview what would be created without writing any files.
    #[arg(long = "dry-run", help = "Show what would be created without creating")]
    pub dry_run: bool,
}

// ── list ──────────────────────────────────────────────────────────────────────

/// Arguments for `create-my-react-app list`.
#[derive(Debug, Args)]
pub struct ListArgs {
    /// Include the planned file list for each template.
    #[arg(long = "files", help = "Show the files each template creates")]
    pub files: bool,

    /// Output format.
    #[arg(
        long = "format",
        value_enum,
        default_value = "table",
        help = "Output format"
    )]
    pub format: ListFormat,
}

/// Output format for the `list` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListFormat {
    /// Human-readable table.
    Table,
    /// One identifier per line.
    List,
    /// JSON array.
    Json,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `create-my-react-app completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── tests ─────────────────────────────────────────────────────────────────────
