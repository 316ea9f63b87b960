//! Pipeline orchestration: wiring the four stages together

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::report::{ItemFailure, RunReport, StageKind};
use crate::stage;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use stubgen_domain::traits::{ArtifactFormatter, StructuralExtractor};
use stubgen_domain::{OutputUnit, SourceContent};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The stub-generation pipeline
///
/// Owns the run configuration and the two collaborators for the lifetime of
/// the run. Stages communicate over bounded channels sized by
/// `queue_capacity`; each concurrent stage runs at most its configured
/// number of items at once, and a stage signals completion downstream by
/// dropping its sender once its input is exhausted and its in-flight work
/// has drained.
pub struct Pipeline<E, F> {
    config: PipelineConfig,
    extractor: Arc<E>,
    formatter: Arc<F>,
}

impl<E, F> Pipeline<E, F>
where
    E: StructuralExtractor + Send + Sync + 'static,
    E::Error: Send,
    F: ArtifactFormatter + Send + Sync + 'static,
{
    /// Create a pipeline from a configuration and its two collaborators
    pub fn new(config: PipelineConfig, extractor: E, formatter: F) -> Self {
        Self {
            config,
            extractor: Arc::new(extractor),
            formatter: Arc::new(formatter),
        }
    }

    /// Execute one complete pass over the source directory.
    ///
    /// Resolves once every artifact the transform stage produced has been
    /// handled by the writer. Only an unreadable source directory is fatal;
    /// all other failures are item-scoped and land in the report.
    ///
    /// Artifact filenames derive from type names alone, so two equally
    /// named types (in the same or different files) target the same output
    /// file. No ordering is guaranteed between their writes: the final
    /// content is whichever write lands last.
    pub async fn run(&self) -> Result<RunReport, PipelineError> {
        self.config.validate().map_err(PipelineError::Config)?;

        let mut dir = tokio::fs::read_dir(&self.config.source_dir)
            .await
            .map_err(|e| PipelineError::InvalidInput {
                path: self.config.source_dir.clone(),
                source: e,
            })?;

        info!(
            "Starting run: {} -> {}",
            self.config.source_dir.display(),
            self.config.dest_dir.display()
        );

        let capacity = self.config.queue_capacity;
        let (path_tx, path_rx) = mpsc::channel::<PathBuf>(capacity);
        let (content_tx, content_rx) = mpsc::channel::<SourceContent>(capacity);
        let (unit_tx, unit_rx) = mpsc::channel::<OutputUnit>(capacity);
        let (failure_tx, mut failure_rx) = mpsc::unbounded_channel::<ItemFailure>();

        let files_read = Arc::new(AtomicUsize::new(0));
        let units_generated = Arc::new(AtomicUsize::new(0));
        let units_written = Arc::new(AtomicUsize::new(0));

        // Enumerate: direct children of the source directory, regular files
        // only. The directory handle is already open, so anything that goes
        // wrong from here on is item-scoped and lands in the report rather
        // than aborting the run.
        let enumerator = tokio::spawn({
            let failure_tx = failure_tx.clone();
            let source_dir = self.config.source_dir.clone();
            async move {
                let mut enumerated = 0usize;
                loop {
                    match dir.next_entry().await {
                        Ok(Some(entry)) => match entry.file_type().await {
                            Ok(kind) if kind.is_file() => {
                                enumerated += 1;
                                if path_tx.send(entry.path()).await.is_err() {
                                    break;
                                }
                            }
                            Ok(_) => {}
                            Err(e) => {
                                warn!("Cannot stat {}: {}", entry.path().display(), e);
                                let _ = failure_tx.send(ItemFailure::new(
                                    StageKind::Enumerate,
                                    entry.path().display().to_string(),
                                    e.to_string(),
                                ));
                            }
                        },
                        Ok(None) => break,
                        Err(e) => {
                            // The scan is truncated; record it so the run
                            // does not report itself clean.
                            warn!("Directory enumeration stopped early: {}", e);
                            let _ = failure_tx.send(ItemFailure::new(
                                StageKind::Enumerate,
                                source_dir.display().to_string(),
                                e.to_string(),
                            ));
                            break;
                        }
                    }
                }
                enumerated
            }
        });

        // Read: load each file's full text.
        let reader = tokio::spawn({
            let failure_tx = failure_tx.clone();
            let files_read = Arc::clone(&files_read);
            let limit = self.config.read_concurrency;
            async move {
                stage::run_bounded(path_rx, limit, move |path: PathBuf| {
                    let content_tx = content_tx.clone();
                    let failure_tx = failure_tx.clone();
                    let files_read = Arc::clone(&files_read);
                    async move {
                        match tokio::fs::read_to_string(&path).await {
                            Ok(text) => {
                                files_read.fetch_add(1, Ordering::Relaxed);
                                let _ = content_tx.send(SourceContent::new(path, text)).await;
                            }
                            Err(e) => {
                                // Expected race: a file can vanish between
                                // enumeration and read. Scoped to this file.
                                warn!("Skipping unreadable file {}: {}", path.display(), e);
                                let _ = failure_tx.send(ItemFailure::new(
                                    StageKind::Read,
                                    path.display().to_string(),
                                    e.to_string(),
                                ));
                            }
                        }
                    }
                })
                .await;
            }
        });

        // Transform: extract declarations, synthesize one artifact each.
        let transformer = tokio::spawn({
            let failure_tx = failure_tx.clone();
            let units_generated = Arc::clone(&units_generated);
            let extractor = Arc::clone(&self.extractor);
            let formatter = Arc::clone(&self.formatter);
            let limit = self.config.generate_concurrency;
            async move {
                stage::run_bounded(content_rx, limit, move |content: SourceContent| {
                    let unit_tx = unit_tx.clone();
                    let failure_tx = failure_tx.clone();
                    let units_generated = Arc::clone(&units_generated);
                    let extractor = Arc::clone(&extractor);
                    let formatter = Arc::clone(&formatter);
                    async move {
                        match extractor.extract(&content.text) {
                            Ok(declarations) => {
                                debug!(
                                    "{}: {} type declarations",
                                    content.path.display(),
                                    declarations.len()
                                );
                                for declaration in &declarations {
                                    let unit = formatter.format(declaration);
                                    units_generated.fetch_add(1, Ordering::Relaxed);
                                    if unit_tx.send(unit).await.is_err() {
                                        break;
                                    }
                                }
                            }
                            Err(e) => {
                                warn!(
                                    "Skipping malformed file {}: {}",
                                    content.path.display(),
                                    e
                                );
                                let _ = failure_tx.send(ItemFailure::new(
                                    StageKind::Generate,
                                    content.path.display().to_string(),
                                    e.to_string(),
                                ));
                            }
                        }
                    }
                })
                .await;
            }
        });

        // Write: persist each artifact, overwriting same-named files.
        let writer = tokio::spawn({
            let failure_tx = failure_tx.clone();
            let units_written = Arc::clone(&units_written);
            let dest_dir = self.config.dest_dir.clone();
            let limit = self.config.write_concurrency;
            async move {
                stage::run_bounded(unit_rx, limit, move |unit: OutputUnit| {
                    let failure_tx = failure_tx.clone();
                    let units_written = Arc::clone(&units_written);
                    let target = dest_dir.join(&unit.filename);
                    async move {
                        match tokio::fs::write(&target, unit.content.as_bytes()).await {
                            Ok(()) => {
                                units_written.fetch_add(1, Ordering::Relaxed);
                                debug!("Wrote {}", target.display());
                            }
                            Err(e) => {
                                warn!("Failed to write {}: {}", target.display(), e);
                                let _ = failure_tx.send(ItemFailure::new(
                                    StageKind::Write,
                                    unit.filename.clone(),
                                    e.to_string(),
                                ));
                            }
                        }
                    }
                })
                .await;
            }
        });

        let files_enumerated = enumerator
            .await
            .map_err(|e| PipelineError::StageFailed(e.to_string()))?;
        reader
            .await
            .map_err(|e| PipelineError::StageFailed(e.to_string()))?;
        transformer
            .await
            .map_err(|e| PipelineError::StageFailed(e.to_string()))?;
        writer
            .await
            .map_err(|e| PipelineError::StageFailed(e.to_string()))?;

        // All stages are done, so every failure has been sent by now.
        drop(failure_tx);
        let mut failures = Vec::new();
        while let Some(failure) = failure_rx.recv().await {
            failures.push(failure);
        }

        let report = RunReport {
            files_enumerated,
            files_read: files_read.load(Ordering::Relaxed),
            units_generated: units_generated.load(Ordering::Relaxed),
            units_written: units_written.load(Ordering::Relaxed),
            failures,
        };

        info!(
            "Run complete: {} stubs written, {} failures",
            report.units_written,
            report.failures.len()
        );

        Ok(report)
    }
}
