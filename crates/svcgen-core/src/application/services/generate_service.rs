//! Generate Service - main application orchestrator.
//!
//! This service coordinates the entire generation workflow:
//! 1. Resolve input/output directories (fatal on failure)
//! 2. Scan the source directory for qualifying interfaces (fatal on failure)
//! 3. Build domain/interface units per file (import-path failures recovered)
//! 4. Render and write each unit (render/format/write failures recovered)
//!
//! A partial-success run is the normal failure mode: recovered errors are
//! logged and counted, and the run still succeeds if the scaffolding did.

use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError, UnitBuilder,
        ports::{Filesystem, InterfaceSource, UnitRenderer},
    },
    domain::{ImportPathResolver, InterfaceUnit},
    error::SvcgenResult,
};

/// Everything one generation run needs, resolved up front.
///
/// Constructed once per invocation and threaded through every call — the
/// pipeline never reads ambient process state. The module-cache root is the
/// single environment-derived value, and resolving it is the caller's job.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    /// Directory containing generated `*_grpc.pb.go` sources.
    pub input_dir: PathBuf,
    /// Output directory for domain (adapter) files.
    pub out_dir: PathBuf,
    /// Output directory for sub-domain (contract) files.
    pub sub_domain_out_dir: PathBuf,
    /// Label appended to generated adapter type names.
    pub domain_label: String,
    /// Label appended to generated contract type names.
    pub sub_domain_label: String,
    /// When false, pre-existing files are kept and a warning is emitted.
    pub overwrite: bool,
    /// Render everything, write nothing.
    pub dry_run: bool,
    /// Shared module-cache root consulted by the import path resolver.
    pub module_cache_root: PathBuf,
}

impl GenerateConfig {
    /// Start from the conventional defaults of the generator.
    pub fn new(input_dir: impl Into<PathBuf>) -> Self {
        Self {
            input_dir: input_dir.into(),
            out_dir: PathBuf::from("handlers/v1"),
            sub_domain_out_dir: PathBuf::from("services"),
            domain_label: "Handler".to_string(),
            sub_domain_label: "Service".to_string(),
            overwrite: true,
            dry_run: false,
            module_cache_root: PathBuf::from("/"),
        }
    }

    pub fn out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = dir.into();
        self
    }

    pub fn sub_domain_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.sub_domain_out_dir = dir.into();
        self
    }

    pub fn domain_label(mut self, label: impl Into<String>) -> Self {
        self.domain_label = label.into();
        self
    }

    pub fn sub_domain_label(mut self, label: impl Into<String>) -> Self {
        self.sub_domain_label = label.into();
        self
    }

    pub fn overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn module_cache_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.module_cache_root = root.into();
        self
    }
}

/// What happened to one target file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WriteStatus {
    Written,
    /// Overwrite was off and a regular file already existed.
    SkippedExisting,
    /// Render, format, or write failed; the run continued.
    Failed,
    DryRun,
}

/// Per-file record for CLI reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileOutcome {
    pub path: PathBuf,
    pub status: WriteStatus,
    pub bytes: usize,
}

/// Aggregate result of one generation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerateSummary {
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
    pub outcomes: Vec<FileOutcome>,
}

impl GenerateSummary {
    fn record(&mut self, path: &Path, status: WriteStatus, bytes: usize) {
        match status {
            WriteStatus::Written | WriteStatus::DryRun => self.written += 1,
            WriteStatus::SkippedExisting => self.skipped += 1,
            WriteStatus::Failed => self.failed += 1,
        }
        self.outcomes.push(FileOutcome {
            path: path.to_path_buf(),
            status,
            bytes,
        });
    }
}

/// Main generation service.
///
/// Orchestrates extraction, unit building, rendering, and writing through
/// the injected adapters.
pub struct GenerateService {
    source: Box<dyn InterfaceSource>,
    renderer: Box<dyn UnitRenderer>,
    filesystem: Box<dyn Filesystem>,
}

impl GenerateService {
    /// Create a new generate service with the given adapters.
    pub fn new(
        source: Box<dyn InterfaceSource>,
        renderer: Box<dyn UnitRenderer>,
        filesystem: Box<dyn Filesystem>,
    ) -> Self {
        Self {
            source,
            renderer,
            filesystem,
        }
    }

    /// Run the full pipeline for one configuration.
    #[instrument(skip_all, fields(input = %config.input_dir.display()))]
    pub fn generate(&self, config: &GenerateConfig) -> SvcgenResult<GenerateSummary> {
        // 1. Resolve directories. These failures abort the run.
        let input_dir = absolute(&config.input_dir)?;
        let out_dir = absolute(&config.out_dir)?;
        let sub_domain_out_dir = absolute(&config.sub_domain_out_dir)?;

        // 2. Scan the source tree.
        let files = self.source.scan(&input_dir)?;
        info!(files = files.len(), "source scan complete");

        // 3. Output scaffolding. Also fatal — nothing can be written without it.
        if !config.dry_run {
            self.filesystem.create_dir_all(&out_dir)?;
            self.filesystem.create_dir_all(&sub_domain_out_dir)?;
        }

        let resolver = ImportPathResolver::new(&config.module_cache_root);
        let builder = UnitBuilder::new(
            &config.domain_label,
            &config.sub_domain_label,
            &out_dir,
            &sub_domain_out_dir,
        );

        // 4. Build units. Interface units merge into a map keyed by service
        //    name — a later file silently replaces an earlier one on
        //    collision (last-write-wins).
        let mut summary = GenerateSummary::default();
        let mut domain_units = Vec::new();
        let mut interface_units: BTreeMap<String, InterfaceUnit> = BTreeMap::new();

        for file in &files {
            let source_import = match resolver.resolve(&input_dir) {
                Ok(path) => path,
                Err(e) => {
                    warn!(file = %file.path.display(), error = %e, "import path unresolvable, file skipped");
                    summary.failed += 1;
                    continue;
                }
            };
            let sub_domain_import = match resolver.resolve(&sub_domain_out_dir) {
                Ok(path) => path,
                Err(e) => {
                    warn!(file = %file.path.display(), error = %e, "import path unresolvable, file skipped");
                    summary.failed += 1;
                    continue;
                }
            };

            let Some((domain_unit, interface_unit)) =
                builder.build(file, &source_import, &sub_domain_import)
            else {
                debug!(file = %file.path.display(), "no qualifying interfaces");
                continue;
            };

            for body in &interface_unit.bodies {
                interface_units.insert(body.name.clone(), interface_unit.clone());
            }
            domain_units.push(domain_unit);
        }

        // 5. Render + write, recovering per unit.
        for unit in &domain_units {
            match self.renderer.render_domain(unit) {
                Ok(rendered) => self.write_unit(&unit.file_name, &rendered, config, &mut summary),
                Err(e) => {
                    warn!(unit = %unit.file_name.display(), error = %e, "render failed, unit skipped");
                    summary.record(&unit.file_name, WriteStatus::Failed, 0);
                }
            }
        }

        // A multi-service file lands in the map once per service; write its
        // unit only once.
        let mut written_paths = BTreeSet::new();
        for unit in interface_units.values() {
            if !written_paths.insert(unit.file_name.clone()) {
                continue;
            }
            match self.renderer.render_interface(unit) {
                Ok(rendered) => self.write_unit(&unit.file_name, &rendered, config, &mut summary),
                Err(e) => {
                    warn!(unit = %unit.file_name.display(), error = %e, "render failed, unit skipped");
                    summary.record(&unit.file_name, WriteStatus::Failed, 0);
                }
            }
        }

        info!(
            written = summary.written,
            skipped = summary.skipped,
            failed = summary.failed,
            "generation complete"
        );
        Ok(summary)
    }

    /// Write policy: skip with a warning when overwrite is off and a regular
    /// file already exists; otherwise write the full content.
    fn write_unit(
        &self,
        path: &Path,
        content: &str,
        config: &GenerateConfig,
        summary: &mut GenerateSummary,
    ) {
        if config.dry_run {
            summary.record(path, WriteStatus::DryRun, content.len());
            return;
        }

        if !config.overwrite && self.filesystem.is_file(path) {
            warn!(path = %path.display(), "existing file kept");
            summary.record(path, WriteStatus::SkippedExisting, 0);
            return;
        }

        match self.filesystem.write_file(path, content) {
            Ok(()) => summary.record(path, WriteStatus::Written, content.len()),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "write failed");
                summary.record(path, WriteStatus::Failed, 0);
            }
        }
    }
}

/// Lexically absolutize a path without touching the filesystem.
fn absolute(path: &Path) -> SvcgenResult<PathBuf> {
    std::path::absolute(path).map_err(|e| {
        ApplicationError::PathResolution {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }
        .into()
    })
}
