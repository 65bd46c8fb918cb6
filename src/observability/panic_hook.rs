//! Custom panic hook for structured crash reports.
//!
//! When hailstats crashes we print the version, the panic location, and the
//! pipeline phase and export file that were active at the time.

use super::context::{get_current_context, PipelineContext};
use std::panic::PanicHookInfo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the custom panic hook.
///
/// Call early in `main()` before any processing begins.
pub fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        eprintln!();
        eprintln!("{}", crash_report(info, &get_current_context()));
    }));
}

fn crash_report(info: &PanicHookInfo<'_>, context: &PipelineContext) -> String {
    let location = info
        .location()
        .map(|location| {
            format!(
                "{}:{}:{}",
                location.file(),
                location.line(),
                location.column()
            )
        })
        .unwrap_or_else(|| "unknown".to_string());

    format_report(&extract_panic_message(info), &location, context)
}

fn format_report(message: &str, location: &str, context: &PipelineContext) -> String {
    let timestamp = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
    let phase = context
        .phase
        .map(|phase| phase.to_string())
        .unwrap_or_else(|| "(not set - crash occurred before processing started)".to_string());

    let mut lines = vec![
        "══════════════════════ HAILSTATS CRASH REPORT ══════════════════════".to_string(),
        format!("  Version:  {VERSION}"),
        format!("  Platform: {}", std::env::consts::OS),
        format!("  Time:     {timestamp}"),
        format!("  PANIC:    {}", truncate(message, 200)),
        format!("  Location: {location}"),
        format!("  Phase:    {phase}"),
    ];
    if let Some(input) = &context.current_input {
        lines.push(format!("  Input:    {}", input.display()));
    }
    if std::env::var("RUST_BACKTRACE").is_ok() {
        lines.push(std::backtrace::Backtrace::capture().to_string());
    } else {
        lines.push("  Run with RUST_BACKTRACE=1 for stack trace".to_string());
    }
    lines.join("\n")
}

fn extract_panic_message(info: &PanicHookInfo<'_>) -> String {
    if let Some(s) = info.payload().downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = info.payload().downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
