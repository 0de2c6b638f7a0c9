//! Tracing integration for outcome-rail.
//!
//! Emits structured `tracing` events for outcomes as they flow through a
//! pipeline, without changing them.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! outcome-rail = { version = "0.1", features = ["tracing"] }
//! ```

use tracing::{debug, warn, Span};

use crate::types::Outcome;

/// Extension trait that records outcomes as tracing events.
///
/// # Example
///
/// ```rust
/// use outcome_rail::tracing_ext::OutcomeTracingExt;
/// use outcome_rail::Outcome;
///
/// let loaded = Outcome::<u32>::fail("config file missing").trace_failure("load_config");
/// assert!(loaded.is_fail());
/// ```
pub trait OutcomeTracingExt: Sized {
    /// Emits a `warn` event when the outcome is a failure, then returns it unchanged.
    ///
    /// The event carries `operation`, `error_count` and the joined message.
    fn trace_failure(self, operation: &str) -> Self;

    /// Like [`trace_failure`](Self::trace_failure), plus a `debug` event on success.
    fn trace_outcome(self, operation: &str) -> Self;

    /// Emits a failure event attributed to `span`.
    fn trace_failure_in(self, span: &Span, operation: &str) -> Self {
        span.in_scope(|| self.trace_failure(operation))
    }
}

impl<T> OutcomeTracingExt for Outcome<T> {
    fn trace_failure(self, operation: &str) -> Self {
        if let Outcome::Failure(errors) = &self {
            warn!(
                operation,
                error_count = errors.len(),
                errors = %errors.fmt().compact(),
                "operation failed"
            );
        }
        self
    }

    fn trace_outcome(self, operation: &str) -> Self {
        if self.is_success() {
            debug!(operation, "operation succeeded");
        }
        self.trace_failure(operation)
    }
}
