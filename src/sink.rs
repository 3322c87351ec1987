//! The collaborators the resolver reports to.
//!
//! Resolution failure is not an error but a liveness event: after its last
//! retry the resolver tells the [`ReachabilitySink`] that the endpoint is
//! unusable, and every earlier failure becomes a warning through the
//! [`WarningSink`]. Both are injected so callers can wire in their own node
//! tracking and log capture.

use tracing::warn;

//------------ ReachabilitySink ----------------------------------------------

/// The component tracking whether a cluster member is currently usable.
///
/// [`Resolver::resolve`][crate::Resolver::resolve] fires
/// [`mark_down`][Self::mark_down] exactly once when it has exhausted its
/// retries for an endpoint. The resolver neither interprets nor awaits any
/// effect of the call.
pub trait ReachabilitySink {
    /// Records that the endpoint is currently unreachable.
    fn mark_down(&self);
}

//------------ WarningSink ---------------------------------------------------

/// A destination for retry warnings.
///
/// One warning is emitted per failed attempt that still has retries left.
/// The message names the original endpoint spec, the seconds elapsed since
/// the first attempt, the error, and the retry count.
pub trait WarningSink {
    /// Emits a warning.
    fn warn(&self, tag: &str, message: &str, context: &str);
}

//------------ TracingLog ----------------------------------------------------

/// The default warning sink, emitting through [`mod@tracing`].
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingLog;

impl WarningSink for TracingLog {
    fn warn(&self, tag: &str, message: &str, context: &str) {
        warn!(tag = tag, context = context, "{}", message);
    }
}
