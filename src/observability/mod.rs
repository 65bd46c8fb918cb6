//! Observability infrastructure: logging setup and crash reports.
//!
//! Install both at application startup:
//!
//! ```ignore
//! use hailstats::observability::{init_logging, install_panic_hook};
//!
//! fn main() {
//!     install_panic_hook();
//!     init_logging(0);
//!     // ... rest of application
//! }
//! ```

pub mod context;
pub mod logging;
pub mod panic_hook;

pub use context::{
    get_current_context, set_current_input, set_phase, ContextGuard, PipelineContext,
    PipelinePhase,
};
pub use logging::{init_logging, level_for_verbosity};
pub use panic_hook::install_panic_hook;
