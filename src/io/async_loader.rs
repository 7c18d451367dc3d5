//! Background loading of resources and bookings.
//!
//! The two collections are fetched on two worker threads running side by
//! side. Both results are joined and delivered together, so the UI never
//! shows bookings without their resources or the other way around.

use crate::io::LoadingState;
use rsched::{Booking, DataSource, ParentResource};
use std::sync::mpsc::{channel, Receiver};
use std::sync::{Arc, Mutex, MutexGuard};
use std::thread;

/// Both collections from one load.
#[derive(Debug)]
pub struct LoadedData {
    pub resources: Vec<ParentResource>,
    pub bookings: Vec<Booking>,
    pub source: String,
}

/// Result of polling the loader.
#[derive(Debug)]
pub enum LoadResult {
    Success(LoadedData),
    Error(String),
    /// Nothing finished since the last poll
    None,
}

type Delivery = (u64, Result<LoadedData, String>);

/// Manages asynchronous loading from a `DataSource`.
pub struct AsyncLoader {
    loading_state: Arc<Mutex<LoadingState>>,
    loading_receiver: Option<Receiver<Delivery>>,
}

fn lock(state: &Mutex<LoadingState>) -> MutexGuard<'_, LoadingState> {
    state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn fetch_both(source: &dyn DataSource) -> Result<LoadedData, String> {
    let (resources, bookings) = thread::scope(|scope| {
        let resources = scope.spawn(|| source.fetch_resources());
        let bookings = scope.spawn(|| source.fetch_bookings());
        (resources.join(), bookings.join())
    });

    let resources = resources
        .map_err(|_| "resource fetch panicked".to_string())?
        .map_err(|e| format!("{:#}", e))?;
    let bookings = bookings
        .map_err(|_| "booking fetch panicked".to_string())?
        .map_err(|e| format!("{:#}", e))?;

    Ok(LoadedData {
        resources,
        bookings,
        source: source.describe(),
    })
}

impl AsyncLoader {
    pub fn new() -> Self {
        Self {
            loading_state: Arc::new(Mutex::new(LoadingState::new())),
            loading_receiver: None,
        }
    }

    pub fn is_loading(&self) -> bool {
        lock(&self.loading_state).in_progress
    }

    /// Description of the source currently loading, if any.
    pub fn loading_source(&self) -> Option<String> {
        let state = lock(&self.loading_state);
        if state.in_progress {
            state.source.clone()
        } else {
            None
        }
    }

    /// Starts loading from `source`, superseding any load still running.
    ///
    /// `on_complete` runs on the worker thread once the result is ready; the GUI
    /// passes a closure that requests a repaint.
    pub fn start_load<F>(&mut self, source: Arc<dyn DataSource>, on_complete: F)
    where
        F: FnOnce() + Send + 'static,
    {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);

        let generation = {
            let mut state = lock(&self.loading_state);
            state.generation += 1;
            state.in_progress = true;
            state.source = Some(source.describe());
            state.generation
        };
        log::info!("Loading schedule from {}", source.describe());

        let loading_state = Arc::clone(&self.loading_state);
        thread::spawn(move || {
            let result = fetch_both(source.as_ref());

            {
                let mut state = lock(&loading_state);
                if state.generation != generation {
                    log::debug!("Discarding result of superseded load {}", generation);
                    return;
                }
                state.in_progress = false;
            }

            let _ = sender.send((generation, result));
            on_complete();
        });
    }

    /// Abandons the running load. A late result is discarded.
    pub fn cancel(&mut self) {
        let mut state = lock(&self.loading_state);
        if state.in_progress {
            log::info!("Cancelled loading {}", state.source.as_deref().unwrap_or("data"));
        }
        state.generation += 1;
        state.in_progress = false;
        state.source = None;
        self.loading_receiver = None;
    }

    /// Polls for a finished load. Call once per frame.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };
        let Ok((generation, result)) = receiver.try_recv() else {
            return LoadResult::None;
        };
        self.loading_receiver = None;

        if generation != lock(&self.loading_state).generation {
            return LoadResult::None;
        }
        match result {
            Ok(data) => LoadResult::Success(data),
            Err(message) => LoadResult::Error(message),
        }
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for AsyncLoader {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{anyhow, Result};
    use chrono::NaiveDate;
    use rsched::{DemoSource, JsonFileSource};
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Barrier;
    use std::time::{Duration, Instant};

    fn wait_for(loader: &mut AsyncLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(10);
        while Instant::now() < deadline {
            match loader.check_completion() {
                LoadResult::None => thread::sleep(Duration::from_millis(5)),
                other => return other,
            }
        }
        LoadResult::None
    }

    /// Both fetches must be in flight at the same time to pass the barrier.
    struct ConcurrentSource {
        barrier: Barrier,
    }

    impl DataSource for ConcurrentSource {
        fn describe(&self) -> String {
            "concurrent".to_string()
        }

        fn fetch_resources(&self) -> Result<Vec<ParentResource>> {
            self.barrier.wait();
            Ok(vec![ParentResource::new("P1", "Group")])
        }

        fn fetch_bookings(&self) -> Result<Vec<Booking>> {
            self.barrier.wait();
            Ok(Vec::new())
        }
    }

    struct FailingSource;

    impl DataSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn fetch_resources(&self) -> Result<Vec<ParentResource>> {
            Ok(Vec::new())
        }

        fn fetch_bookings(&self) -> Result<Vec<Booking>> {
            Err(anyhow!("bookings endpoint unavailable"))
        }
    }

    #[test]
    fn test_async_loader_creation() {
        let mut loader = AsyncLoader::new();
        assert!(!loader.is_loading());
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_fetches_run_concurrently_and_join() {
        let mut loader = AsyncLoader::new();
        let notified = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&notified);
        loader.start_load(
            Arc::new(ConcurrentSource { barrier: Barrier::new(2) }),
            move || flag.store(true, Ordering::SeqCst),
        );

        match wait_for(&mut loader) {
            LoadResult::Success(data) => {
                assert_eq!(data.resources.len(), 1);
                assert_eq!(data.source, "concurrent");
            }
            other => panic!("unexpected result: {:?}", other),
        }
        assert!(notified.load(Ordering::SeqCst));
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_demo_source_loads() {
        let mut loader = AsyncLoader::new();
        let anchor = NaiveDate::from_ymd_opt(2026, 1, 21).unwrap();
        loader.start_load(Arc::new(DemoSource::new(anchor)), || {});
        assert!(matches!(wait_for(&mut loader), LoadResult::Success(_)));
    }

    #[test]
    fn test_any_failure_fails_the_whole_load() {
        let mut loader = AsyncLoader::new();
        loader.start_load(Arc::new(FailingSource), || {});
        match wait_for(&mut loader) {
            LoadResult::Error(message) => assert!(message.contains("unavailable")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_missing_files_report_error() {
        let mut loader = AsyncLoader::new();
        loader.start_load(
            Arc::new(JsonFileSource::new("/nonexistent/r.json", "/nonexistent/b.json")),
            || {},
        );
        assert!(matches!(wait_for(&mut loader), LoadResult::Error(_)));
    }

    #[test]
    fn test_cancelled_load_is_discarded() {
        let mut loader = AsyncLoader::new();
        let anchor = NaiveDate::from_ymd_opt(2026, 1, 21).unwrap();
        loader.start_load(Arc::new(DemoSource::new(anchor)), || {});
        loader.cancel();
        assert!(!loader.is_loading());

        thread::sleep(Duration::from_millis(100));
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }
}
