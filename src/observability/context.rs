//! Thread-local context tracking for crash reports.
//!
//! Records which pipeline phase is running and which export file is being
//! processed, so the panic hook can say what hailstats was doing. Context
//! guards use RAII and restore the previous context on drop.

use std::cell::RefCell;
use std::path::PathBuf;

thread_local! {
    static CURRENT_CONTEXT: RefCell<PipelineContext> = const { RefCell::new(PipelineContext::new()) };
}

/// Context snapshot for the current pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineContext {
    /// Current pipeline phase
    pub phase: Option<PipelinePhase>,
    /// Export file currently being processed
    pub current_input: Option<PathBuf>,
}

impl PipelineContext {
    /// Create a new empty context.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: None,
            current_input: None,
        }
    }
}

/// Pipeline phases for context tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelinePhase {
    /// Loading configuration
    Configuration,
    /// Reading and validating the export file
    Loading,
    /// Normalizing tasks and folding statistics
    Aggregation,
    /// Rendering and writing output artifacts
    OutputGeneration,
}

impl std::fmt::Display for PipelinePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Configuration => write!(f, "configuration"),
            Self::Loading => write!(f, "loading"),
            Self::Aggregation => write!(f, "aggregation"),
            Self::OutputGeneration => write!(f, "output_generation"),
        }
    }
}

/// RAII guard for restoring pipeline context on drop.
pub struct ContextGuard {
    previous: PipelineContext,
}

impl Drop for ContextGuard {
    fn drop(&mut self) {
        CURRENT_CONTEXT.with(|ctx| {
            *ctx.borrow_mut() = self.previous.clone();
        });
    }
}

fn update_context(update: impl FnOnce(&mut PipelineContext)) -> ContextGuard {
    CURRENT_CONTEXT.with(|ctx| {
        let previous = ctx.borrow().clone();
        update(&mut *ctx.borrow_mut());
        ContextGuard { previous }
    })
}

/// Set the current pipeline phase.
///
/// Returns a guard that restores the previous phase on drop.
#[must_use]
pub fn set_phase(phase: PipelinePhase) -> ContextGuard {
    update_context(|ctx| ctx.phase = Some(phase))
}

/// Set the export file being processed.
///
/// Returns a guard that restores the previous file on drop.
#[must_use]
pub fn set_current_input(path: impl Into<PathBuf>) -> ContextGuard {
    let path = path.into();
    update_context(|ctx| ctx.current_input = Some(path))
}

/// Get the current context snapshot.
#[must_use]
pub fn get_current_context() -> PipelineContext {
    CURRENT_CONTEXT.with(|ctx| ctx.borrow().clone())
}
