use std::time::Duration;

/// Optional debug/timing collaborator injected into `GeometryOps`.
///
/// Methods are infallible by signature, so sink behavior can never affect
/// the result of an operation. Sinks are injected per instance rather than
/// registered globally.
pub trait InstrumentSink {
    /// Called when an operation starts, with a short request description.
    fn debug_message(&self, msg: &str);

    /// Called when an operation finishes, on success and error paths alike.
    fn timer_message(&self, label: &str, elapsed: Duration);
}
