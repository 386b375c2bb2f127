//! Process-wide logging setup for the shop binaries.

/// Tracing subscriber configuration (filters, output format).
pub mod tracing;

/// Initialize process-wide tracing with the default `info` level.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_FILTER);
}
