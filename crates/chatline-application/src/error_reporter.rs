use chatline_core::ChatlineError;
use chatline_core::gateway::ErrorReporter;
use chatline_core::protocol::RequestKind;

/// Default `ErrorReporter`: records authentication rejections in the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report_unauthorized(&self, operation: RequestKind, error: &ChatlineError) {
        tracing::error!(
            "[ErrorReporter] Authentication rejected during {}: {}",
            operation,
            error
        );
    }
}
