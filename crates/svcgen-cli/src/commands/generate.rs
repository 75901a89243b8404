//! Implementation of the `svcgen gen` command.
//!
//! Responsibility: translate CLI arguments into a `GenerateConfig`, call the
//! core generate service, and display results. No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use svcgen_adapters::{GoInterfaceSource, GoUnitRenderer, LocalFilesystem};
use svcgen_core::application::{GenerateConfig, GenerateService, GenerateSummary, WriteStatus};

use crate::{
    cli::{GenArgs, OutputFormat, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `svcgen gen` command.
///
/// Dispatch sequence:
/// 1. Validate the input directory
/// 2. Overlay CLI flags on config-file defaults to build a `GenerateConfig`
/// 3. Wire the adapters and run the pipeline
/// 4. Report per-file outcomes and the run summary
#[instrument(skip_all, fields(input = %args.input.display()))]
pub fn execute(
    args: GenArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    // 1. Check the input directory up front — a clearer error than the scan
    //    failure the core would report.
    if !args.input.is_dir() {
        return Err(CliError::InputDirNotFound { path: args.input });
    }

    // 2. CLI flags win over config-file defaults. The module-cache root is
    //    the single environment-derived value; it is resolved here, once,
    //    and threaded through the config — the pipeline never reads ambient
    //    process state.
    let module_cache = args
        .module_cache
        .clone()
        .unwrap_or_else(default_module_cache);
    let gen_config = build_config(&args, &config, module_cache);

    debug!(
        out = %gen_config.out_dir.display(),
        subdomain_out = %gen_config.sub_domain_out_dir.display(),
        domain = %gen_config.domain_label,
        subdomain = %gen_config.sub_domain_label,
        overwrite = gen_config.overwrite,
        dry_run = gen_config.dry_run,
        module_cache = %gen_config.module_cache_root.display(),
        "run configured"
    );

    // 3. Create adapters and run
    let source = Box::new(GoInterfaceSource::new());
    let renderer = Box::new(GoUnitRenderer::new().map_err(CliError::Core)?);
    let filesystem = Box::new(LocalFilesystem::new());
    let service = GenerateService::new(source, renderer, filesystem);

    if output.format() != OutputFormat::Json {
        output.header(&format!(
            "Scaffolding from {}...",
            gen_config.input_dir.display()
        ))?;
    }
    info!("generation started");

    let summary = service.generate(&gen_config).map_err(CliError::Core)?;

    info!(
        written = summary.written,
        skipped = summary.skipped,
        failed = summary.failed,
        "generation finished"
    );

    // 4. Report
    report(&summary, &gen_config, &global, &output)
}

/// Overlay CLI flags on config defaults.
fn build_config(args: &GenArgs, config: &AppConfig, module_cache: PathBuf) -> GenerateConfig {
    GenerateConfig::new(&args.input)
        .out_dir(
            args.out
                .clone()
                .unwrap_or_else(|| config.defaults.out.clone()),
        )
        .sub_domain_out_dir(
            args.subdomain_out
                .clone()
                .unwrap_or_else(|| config.defaults.subdomain_out.clone()),
        )
        .domain_label(
            args.domain
                .clone()
                .unwrap_or_else(|| config.defaults.domain.clone()),
        )
        .sub_domain_label(
            args.subdomain
                .clone()
                .unwrap_or_else(|| config.defaults.subdomain.clone()),
        )
        .overwrite(!args.no_overwrite)
        .dry_run(args.dry_run)
        .module_cache_root(module_cache)
}

/// Conventional module cache location: `$HOME/go/pkg/mod`.
fn default_module_cache() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join("go").join("pkg").join("mod"))
        .unwrap_or_else(|| PathBuf::from("/go/pkg/mod"))
}

// ── Reporting ─────────────────────────────────────────────────────────────────

fn report(
    summary: &GenerateSummary,
    config: &GenerateConfig,
    global: &GlobalArgs,
    output: &OutputManager,
) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        // Serialise the summary to stdout (bypasses OutputManager because
        // JSON output must be parseable even in non-TTY pipes).
        let json = serde_json::to_string_pretty(summary).unwrap_or_else(|_| "{}".into());
        println!("{json}");
        return Ok(());
    }

    for outcome in &summary.outcomes {
        match outcome.status {
            WriteStatus::Written => {
                output.success(&format!("wrote {}", outcome.path.display()))?;
            }
            WriteStatus::SkippedExisting => {
                output.warning(&format!("existing file kept: {}", outcome.path.display()))?;
            }
            WriteStatus::Failed => {
                output.error(&format!("failed: {}", outcome.path.display()))?;
            }
            WriteStatus::DryRun => {
                output.info(&format!(
                    "would write {} ({} bytes)",
                    outcome.path.display(),
                    outcome.bytes
                ))?;
            }
        }
    }

    if !global.quiet {
        output.print("")?;
        if config.dry_run {
            output.print(&format!(
                "Dry run: {} file(s) would be written",
                summary.written
            ))?;
        } else {
            output.print(&format!(
                "{} written, {} kept, {} failed",
                summary.written, summary.skipped, summary.failed
            ))?;
        }
    }

    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
