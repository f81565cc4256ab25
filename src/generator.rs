//! Generator instance and the pre-build lifecycle event
//!
//! A [`Generator`] lives as long as one build-tool invocation. It owns one
//! "last emitted content" slot per pipeline and skips the write whenever a
//! pass computes exactly what it emitted last time. This keeps watch-mode
//! rebuilds from touching the generated modules (and retriggering the
//! bundler) when nothing changed.
//!
//! The comparison is against what this instance last computed, never against
//! the file on disk. If a generated module is deleted or edited by hand
//! between passes, the next unchanged pass will not restore it; a new
//! generator instance will.

use std::path::{Path, PathBuf};

use crate::config::{self, FragmentPaths};
use crate::error::Result;
use crate::manifest;
use crate::settings::GeneratorSettings;
use crate::write::write_atomic;

/// Result of one pipeline pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassOutcome {
    /// The content changed and was written (or would have been, in dry-run mode)
    Written { path: PathBuf, bytes: usize },
    /// The content matched the last emission; nothing was written
    Unchanged { path: PathBuf },
}

impl PassOutcome {
    pub fn is_written(&self) -> bool {
        matches!(self, PassOutcome::Written { .. })
    }

    pub fn path(&self) -> &Path {
        match self {
            PassOutcome::Written { path, .. } | PassOutcome::Unchanged { path } => path,
        }
    }
}

/// Outcomes of both pipelines for one pre-build event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassReport {
    pub config: PassOutcome,
    pub manifest: PassOutcome,
}

impl PassReport {
    pub fn writes(&self) -> usize {
        [&self.config, &self.manifest]
            .iter()
            .filter(|outcome| outcome.is_written())
            .count()
    }
}

/// Last content emitted by one pipeline
#[derive(Debug, Default)]
struct GenerationCache {
    last: Option<String>,
}

impl GenerationCache {
    fn is_current(&self, content: &str) -> bool {
        self.last.as_deref() == Some(content)
    }

    fn store(&mut self, content: String) {
        self.last = Some(content);
    }
}

/// Write `content` to `path` unless `cache` already holds it.
///
/// The cache is only updated after a successful write, so a failed or
/// dry-run pass is retried in full next time.
fn emit(
    cache: &mut GenerationCache,
    path: PathBuf,
    content: String,
    dry_run: bool,
) -> Result<PassOutcome> {
    if cache.is_current(&content) {
        log::info!("{} is up to date, skipping write", path.display());
        return Ok(PassOutcome::Unchanged { path });
    }

    let bytes = content.len();
    if dry_run {
        // Nothing reached the disk, so the slot must not claim otherwise.
        log::info!("Would write {} ({} bytes)", path.display(), bytes);
        return Ok(PassOutcome::Written { path, bytes });
    }

    write_atomic(&path, &content)?;
    log::info!("Wrote {} ({} bytes)", path.display(), bytes);
    cache.store(content);
    Ok(PassOutcome::Written { path, bytes })
}

fn render_config(source_root: &Path, environment: &str, settings: &GeneratorSettings) -> Result<String> {
    let merged = config::assemble_with(&FragmentPaths::new(source_root, settings), environment)?;
    config::render_module(&merged)
}

fn render_manifest(source_root: &Path, settings: &GeneratorSettings) -> Result<String> {
    Ok(manifest::build_with(source_root, settings)?.render())
}

/// Long-lived generator for one project and environment
#[derive(Debug)]
pub struct Generator {
    source_root: PathBuf,
    environment: String,
    settings: GeneratorSettings,
    dry_run: bool,
    config_cache: GenerationCache,
    manifest_cache: GenerationCache,
}

impl Generator {
    /// Create a generator with empty caches.
    pub fn new(
        project_root: impl Into<PathBuf>,
        environment: impl Into<String>,
        settings: GeneratorSettings,
    ) -> Self {
        let project_root: PathBuf = project_root.into();
        let source_root = settings.source_root(&project_root);
        Self {
            source_root,
            environment: environment.into(),
            settings,
            dry_run: false,
            config_cache: GenerationCache::default(),
            manifest_cache: GenerationCache::default(),
        }
    }

    /// Compute content without touching the disk or the write-skip cache.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn config_module_path(&self) -> PathBuf {
        self.settings.config_module_path(&self.source_root)
    }

    pub fn manifest_module_path(&self) -> PathBuf {
        self.settings.manifest_module_path(&self.source_root)
    }

    /// Render the configuration module without writing or caching it.
    pub fn render_config(&self) -> Result<String> {
        render_config(&self.source_root, &self.environment, &self.settings)
    }

    /// Render the manifest module without writing or caching it.
    pub fn render_manifest(&self) -> Result<String> {
        render_manifest(&self.source_root, &self.settings)
    }

    /// Run the config pipeline once.
    pub fn generate_config(&mut self) -> Result<PassOutcome> {
        let content = self.render_config()?;
        let path = self.config_module_path();
        emit(&mut self.config_cache, path, content, self.dry_run)
    }

    /// Run the manifest pipeline once.
    pub fn generate_manifest(&mut self) -> Result<PassOutcome> {
        let content = self.render_manifest()?;
        let path = self.manifest_module_path();
        emit(&mut self.manifest_cache, path, content, self.dry_run)
    }

    /// Handle the pre-build event: run both pipelines.
    ///
    /// The pipelines do not depend on each other and run concurrently. If
    /// either fails, its error is returned; the other pipeline's write, if it
    /// happened, stands.
    pub fn before_compile(&mut self) -> Result<PassReport> {
        let dry_run = self.dry_run;
        let config_path = self.config_module_path();
        let manifest_path = self.manifest_module_path();
        let source_root = &self.source_root;
        let environment = &self.environment;
        let settings = &self.settings;
        let config_cache = &mut self.config_cache;
        let manifest_cache = &mut self.manifest_cache;

        let (config, manifest) = rayon::join(
            || {
                let content = render_config(source_root, environment, settings)?;
                emit(config_cache, config_path, content, dry_run)
            },
            || {
                let content = render_manifest(source_root, settings)?;
                emit(manifest_cache, manifest_path, content, dry_run)
            },
        );

        Ok(PassReport {
            config: config?,
            manifest: manifest?,
        })
    }
}
