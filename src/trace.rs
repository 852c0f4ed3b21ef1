//! Optional trace-level instrumentation.
//!
//! [`trace_event!`] forwards to `tracing::trace!` when the `tracing` feature is
//! enabled and expands to nothing otherwise, so container code can be
//! instrumented without paying for it in default builds.

/// Emits a trace-level event with the given fields and message.
///
/// Accepts the same field syntax as `tracing::trace!`.
#[cfg(feature = "tracing")]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ::tracing::trace!(target: "linear_collections", $($argument)*)
    };
}

/// Emits a trace-level event with the given fields and message.
///
/// Compiled out: the `tracing` feature is disabled.
#[cfg(not(feature = "tracing"))]
macro_rules! trace_event {
    ($($argument:tt)*) => {
        ()
    };
}
