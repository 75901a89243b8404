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
    name    = "svcgen",
    bin_name = "svcgen",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{26a1} Scaffold handlers and services from generated gRPC interfaces",
    long_about = "Svcgen scans a directory of generated gRPC server sources and \
                  scaffolds a delegating handler plus the service contract it \
                  depends on for every discovered service interface.",
    after_help = "EXAMPLES:\n\
        \x20 svcgen gen --in ./gen/go/v1\n\
        \x20 svcgen gen --in ./gen/go/v1 --out api/v1 --domain Controller\n\
        \x20 svcgen gen --in ./gen/go/v1 --no-overwrite\n\
        \x20 svcgen completions bash > /usr/share/bash-completion/completions/svcgen",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate boilerplate from an interface directory.
    #[command(
        visible_alias = "g",
        about = "Generate handler and service files",
        after_help = "EXAMPLES:\n\
            \x20 svcgen gen --in ./gen/go/v1\n\
            \x20 svcgen gen --in ./gen/go/v1 --subdomain Usecase --subdomain-out usecases\n\
            \x20 svcgen gen --in ./gen/go/v1 --dry-run"
    )]
    Gen(GenArgs),

    /// Print version and build information.
    #[command(about = "Print svcgen version")]
    Version,

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 svcgen completions bash > ~/.local/share/bash-completion/completions/svcgen\n\
            \x20 svcgen completions zsh  > ~/.zfunc/_svcgen\n\
            \x20 svcgen completions fish > ~/.config/fish/completions/svcgen.fish"
    )]
    Completions(CompletionsArgs),
}

// ── gen ───────────────────────────────────────────────────────────────────────

/// Arguments for `svcgen gen`.
#[derive(Debug, Args)]
pub struct GenArgs {
    /// Directory containing generated `*_grpc.pb.go` sources.
    #[arg(
        short = 'i',
        long = "in",
        value_name = "DIR",
        help = "Input package directory"
    )]
    pub input: PathBuf,

    /// Output directory for generated handler files.
    #[arg(
        short = 'o',
        long = "out",
        value_name = "DIR",
        help = "Output directory [default: handlers/v1]"
    )]
    pub out: Option<PathBuf>,

    /// Output directory for generated service contract files.
    #[arg(
        long = "subdomain-out",
        value_name = "DIR",
        help = "Sub-domain output directory [default: services]"
    )]
    pub subdomain_out: Option<PathBuf>,

    /// Label appended to generated handler type names.
    #[arg(
        short = 'd',
        long = "domain",
        value_name = "LABEL",
        help = "Generated domain label [default: Handler]"
    )]
    pub domain: Option<String>,

    /// Label appended to generated contract type names.
    #[arg(
        short = 's',
        long = "subdomain",
        value_name = "LABEL",
        help = "Generated sub-domain label [default: Service]"
    )]
    pub subdomain: Option<String>,

    /// Keep pre-existing output files instead of overwriting them.
    #[arg(long = "no-overwrite", help = "Keep existing files (warn instead of overwrite)")]
    pub no_overwrite: bool,

    /// Preview what would be written without touching the filesystem.
    #[arg(long = "dry-run", help = "Show what would be generated without writing")]
    pub dry_run: bool,

    /// Module cache root used to derive import paths.
    #[arg(
        long = "module-cache",
        value_name = "DIR",
        env = "GOMODCACHE",
        help = "Module cache root [default: $HOME/go/pkg/mod]"
    )]
    pub module_cache: Option<PathBuf>,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `svcgen completions`.
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
