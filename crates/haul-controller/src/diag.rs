//! The diagnostic sink — best-effort, never affects control flow.

use haul_core::AgentId;

/// Where the controller's diagnostics go.
///
/// `log` carries developer-facing detail; `say` is the short in-world status
/// an agent surfaces ("Energy full", "Out of energy").  Implementations must
/// be non-blocking and infallible — a diagnostic that can fail would give
/// observability a say in control flow.
pub trait Diagnostics {
    fn log(&mut self, tag: &str, message: &str);
    fn say(&mut self, agent: AgentId, message: &str);
}

/// Forwards diagnostics to the `log` crate: `log` at debug level, `say` at
/// info level (short agent statuses are the interesting runtime signal).
pub struct LogDiagnostics;

impl Diagnostics for LogDiagnostics {
    fn log(&mut self, tag: &str, message: &str) {
        log::debug!(target: "haul", "[{tag}] {message}");
    }

    fn say(&mut self, agent: AgentId, message: &str) {
        log::info!(target: "haul", "{agent} says: {message}");
    }
}

/// Discards all diagnostics.
pub struct NullDiagnostics;

impl Diagnostics for NullDiagnostics {
    fn log(&mut self, _tag: &str, _message: &str) {}
    fn say(&mut self, _agent: AgentId, _message: &str) {}
}
