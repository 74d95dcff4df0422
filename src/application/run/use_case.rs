//! Spell Use Case
//!
//! Orchestrates one run:
//! 1. Validate and resolve the requested targets
//! 2. Scan the source tree once for directive-bearing files
//! 3. Per target: map sources to existing outputs, then transform them
//! 4. Merge per-target results in target order
//!
//! Targets run on one bounded pool, files on a second pool shared by all
//! targets. Files are scheduled in fixed-size chunks; once a `stop_on_error`
//! failure is seen no further chunk starts, while the chunk in flight is
//! allowed to finish. Every target's result lands in the partial result of
//! an aborted run.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::domain::entities::{FileFailure, SourceFile};
use crate::domain::ports::{
    DirectiveEvaluator, FileSystem, NoopEventSink, SpellEvent, SpellEventSink,
};
use crate::domain::services::{
    CorrespondenceMapper, DirectivePattern, DirectiveScanner, FileChange, FileTransformer,
    RegistryCache, ScanReport, TargetValidator, TransformOptions,
};
use crate::domain::value_objects::{ExcludePatterns, ResolvedTarget, TargetSpec};
use crate::error::{SpellError, SpellResult};

use super::options::RunOptions;
use super::result::RunResult;

/// Spell use case - orchestrates a run
///
/// Parameterized by its ports so tests can swap the file system or the
/// directive grammar.
pub struct SpellUseCase<FS, E>
where
    FS: FileSystem,
    E: DirectiveEvaluator,
{
    file_system: FS,
    evaluator: E,
}

/// State shared by every worker of one run
struct RunContext<'a> {
    options: &'a RunOptions,
    pattern: &'a DirectivePattern,
    mapper: CorrespondenceMapper<'a>,
    sink: &'a dyn SpellEventSink,
    file_pool: ThreadPool,
    abort: AtomicBool,
    first_error: Mutex<Option<SpellError>>,
}

impl RunContext<'_> {
    fn emit(&self, event: SpellEvent) {
        self.sink.on_event(event);
    }

    fn emit_detail(&self, event: SpellEvent) {
        if self.sink.wants_detailed_events() {
            self.sink.on_event(event);
        }
    }

    fn is_aborted(&self) -> bool {
        self.abort.load(Ordering::SeqCst)
    }

    /// Remember the first fatal error and stop scheduling new chunks
    fn signal_abort(&self, error: SpellError) {
        self.abort.store(true, Ordering::SeqCst);
        let mut slot = self
            .first_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if slot.is_none() {
            *slot = Some(error);
        }
    }

    fn take_error(&self) -> Option<SpellError> {
        self.first_error
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .take()
    }
}

impl<FS, E> SpellUseCase<FS, E>
where
    FS: FileSystem,
    E: DirectiveEvaluator,
{
    pub fn new(file_system: FS, evaluator: E) -> Self {
        Self {
            file_system,
            evaluator,
        }
    }

    /// Execute a run without event reporting
    pub fn execute(&self, targets: &[TargetSpec], options: &RunOptions) -> SpellResult<RunResult> {
        self.execute_with_events(targets, options, Arc::new(NoopEventSink))
    }

    /// Execute a run, reporting progress to `event_sink`.
    ///
    /// Validation errors are returned before any output is touched. With
    /// `stop_on_error`, the first per-file error yields
    /// [`SpellError::Aborted`] carrying everything processed so far.
    pub fn execute_with_events(
        &self,
        targets: &[TargetSpec],
        options: &RunOptions,
        event_sink: Arc<dyn SpellEventSink>,
    ) -> SpellResult<RunResult> {
        let validator = TargetValidator::new(
            &self.file_system,
            &options.project_root,
            &options.custom_output_paths,
        );
        validator.validate(targets)?;
        let resolved = validator.resolve(targets)?;

        let pattern = DirectivePattern::new(&options.namespace)?;
        let exclude = ExcludePatterns::load(&options.project_root, &options.exclude)?;

        event_sink.on_event(SpellEvent::Started {
            source_root: options.layout.source_root.clone(),
            targets: resolved.iter().map(ResolvedTarget::label).collect(),
        });

        let scan = match self.scan(&pattern, &exclude, options) {
            Ok(scan) => scan,
            Err(cause) if options.stop_on_error => {
                return Err(SpellError::Aborted {
                    partial: RunResult::new(),
                    cause: Box::new(cause),
                })
            }
            Err(e) => return Err(e),
        };
        tracing::info!(
            sources = scan.sources.len(),
            visited = scan.visited,
            "scanned source tree"
        );
        event_sink.on_event(SpellEvent::Scanned {
            source_count: scan.sources.len(),
        });

        let target_pool = ThreadPoolBuilder::new()
            .num_threads(options.target_concurrency.max(1))
            .build()?;
        let file_pool = ThreadPoolBuilder::new()
            .num_threads(options.concurrency.max(1))
            .build()?;

        let registries = RegistryCache::new();
        let context = RunContext {
            options,
            pattern: &pattern,
            mapper: CorrespondenceMapper::new(
                &self.file_system,
                &options.project_root,
                &options.layout,
                &registries,
            ),
            sink: event_sink.as_ref(),
            file_pool,
            abort: AtomicBool::new(false),
            first_error: Mutex::new(None),
        };

        let per_target: Vec<RunResult> = target_pool.install(|| {
            resolved
                .par_iter()
                .map(|target| self.process_target(target, &scan.sources, &context))
                .collect()
        });

        let mut result = RunResult::new();
        result.failures.extend(scan.failures);
        for target_result in per_target {
            result.merge(target_result);
        }

        event_sink.on_event(SpellEvent::Completed {
            processed_count: result.processed_files.len(),
            spell_count: result.total_spells_processed,
            error_count: result.failures.len(),
        });

        match context.take_error() {
            Some(cause) => Err(SpellError::Aborted {
                partial: result,
                cause: Box::new(cause),
            }),
            None => Ok(result),
        }
    }

    fn scan(
        &self,
        pattern: &DirectivePattern,
        exclude: &ExcludePatterns,
        options: &RunOptions,
    ) -> SpellResult<ScanReport> {
        DirectiveScanner::new(&self.file_system, &options.project_root, pattern, exclude)
            .scan(&options.source_root(), options.stop_on_error)
    }

    fn process_target(
        &self,
        target: &ResolvedTarget,
        sources: &[SourceFile],
        context: &RunContext<'_>,
    ) -> RunResult {
        let mut result = RunResult::new();
        let label = target.label();

        if !self.file_system.is_dir(&target.root) {
            tracing::info!(scope = %label, root = %target.root.display(), "target not built; skipping");
            context.emit(SpellEvent::TargetSkipped {
                target: label,
                reason: format!("{} does not exist", target.root.display()),
            });
            return result;
        }

        let outputs = self.collect_outputs(target, sources, context);
        tracing::debug!(scope = %label, files = outputs.len(), "mapped outputs");
        context.emit(SpellEvent::TargetStarted {
            target: label,
            file_count: outputs.len(),
        });
        if outputs.is_empty() {
            return result;
        }

        let transformer = FileTransformer::new(
            &self.file_system,
            &self.evaluator,
            context.pattern,
            TransformOptions {
                copy_from_source: context.options.copy_from_source_before_processing,
                dry_run: context.options.dry_run,
            },
        );

        for chunk in outputs.chunks(context.options.batch_size.max(1)) {
            if context.is_aborted() {
                break;
            }

            let reports: Vec<_> = context.file_pool.install(|| {
                chunk
                    .par_iter()
                    .map(|output| {
                        (
                            output,
                            transformer.transform(output, |o| context.mapper.find_source(o, target)),
                        )
                    })
                    .collect()
            });

            for (output, report) in reports {
                match report {
                    Ok(report) => {
                        context.emit_detail(match report.change {
                            FileChange::Rewritten => SpellEvent::FileRewritten {
                                path: report.path.clone(),
                                spell_count: report.spell_count,
                            },
                            FileChange::Unchanged => SpellEvent::FileUnchanged {
                                path: report.path.clone(),
                            },
                            FileChange::Deleted => SpellEvent::FileDeleted {
                                path: report.path.clone(),
                            },
                        });
                        result.record(&report);
                    }
                    Err(e) => {
                        tracing::error!(path = %output.display(), error = %e, "failed to transform");
                        context.emit_detail(SpellEvent::FileError {
                            path: output.clone(),
                            error: e.to_string(),
                        });
                        result.failures.push(FileFailure::new(output, &e));
                        if context.options.stop_on_error {
                            context.signal_abort(e);
                        }
                    }
                }
            }
        }

        result
    }

    /// Union of the correspondence sets of every source, first occurrence wins
    fn collect_outputs(
        &self,
        target: &ResolvedTarget,
        sources: &[SourceFile],
        context: &RunContext<'_>,
    ) -> Vec<PathBuf> {
        let mut seen: HashSet<PathBuf> = HashSet::new();
        let mut outputs = Vec::new();
        for source in sources {
            for output in context.mapper.find_outputs(source, target) {
                if seen.insert(output.clone()) {
                    outputs.push(output);
                }
            }
        }
        outputs
    }
}

/// Resolve targets without running anything (for `targets` listings)
pub fn resolve_targets(
    fs: &dyn FileSystem,
    targets: &[TargetSpec],
    options: &RunOptions,
) -> SpellResult<Vec<ResolvedTarget>> {
    let validator = TargetValidator::new(fs, &options.project_root, &options.custom_output_paths);
    validator.validate(targets)?;
    validator.resolve(targets)
}

/// Scan the source tree without transforming anything (for `scan` listings)
pub fn scan_sources(fs: &dyn FileSystem, options: &RunOptions) -> SpellResult<ScanReport> {
    let pattern = DirectivePattern::new(&options.namespace)?;
    let exclude = ExcludePatterns::load(&options.project_root, &options.exclude)?;
    DirectiveScanner::new(fs, &options.project_root, &pattern, &exclude)
        .scan(&options.source_root(), options.stop_on_error)
}

