//! Shared state of an in-flight load.

/// Holds the state of an async loading operation.
///
/// Wrapped in an `Arc<Mutex<>>` and shared with the worker thread. Results
/// travel through a channel; this only carries the flags.
#[derive(Debug, Default)]
pub struct LoadingState {
    /// True while a load is running
    pub in_progress: bool,
    /// Incremented on every new load and on cancel. A worker whose generation
    /// no longer matches has been superseded and must not deliver its result.
    pub generation: u64,
    /// Description of the source being loaded
    pub source: Option<String>,
}

impl LoadingState {
    pub fn new() -> Self {
        Self::default()
    }
}
