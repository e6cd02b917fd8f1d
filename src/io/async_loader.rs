//! Asynchronous section loading.
//!
//! Sources are fetched on a background thread so the GUI keeps drawing frames while a
//! load is pending. Results travel back over a channel and are applied on the UI thread
//! when [`AsyncLoader::check_completion`] is polled.
//!
//! Dropping the loader, cancelling, or starting another load drops the receiving end
//! of the channel, so a pending completion has nowhere to go and becomes a no-op.

use crate::domain::Section;
use crate::io::SectionSource;
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread;

/// Result of polling the loader.
#[derive(Debug)]
pub enum LoadResult {
    /// Loading completed successfully
    Success {
        sections: Vec<Section>,
        /// Description of the source the sections came from
        source: String,
    },
    /// Loading failed with an error
    Error(String),
    /// No result available (still loading or idle)
    None,
}

/// Manages background fetches of the section list.
pub struct AsyncLoader {
    /// Channel receiver for the active load, if any
    loading_receiver: Option<Receiver<crate::Result<Vec<Section>>>>,

    /// Description of the source currently being loaded
    pending_source: Option<String>,

    /// Incremented for every started load, for log correlation
    generation: u64,
}

impl AsyncLoader {
    /// Creates a loader with no active operation.
    pub fn new() -> Self {
        Self {
            loading_receiver: None,
            pending_source: None,
            generation: 0,
        }
    }

    /// True while a started load has not been collected yet.
    pub fn is_loading(&self) -> bool {
        self.loading_receiver.is_some()
    }

    /// Starts fetching `source` in the background, superseding any earlier load.
    ///
    /// `ctx` is asked to repaint once the result is ready, so the next frame polls it.
    pub fn start_load(&mut self, source: Arc<dyn SectionSource>, ctx: &egui::Context) {
        let (sender, receiver) = channel();
        self.loading_receiver = Some(receiver);
        self.generation += 1;

        let description = source.describe();
        self.pending_source = Some(description.clone());

        let generation = self.generation;
        let ctx_handle = ctx.clone();

        tracing::info!(generation, source = %description, "starting section load");

        thread::spawn(move || {
            let result = source.fetch();

            if sender.send(result).is_err() {
                tracing::debug!(generation, "load superseded or cancelled, dropping result");
                return;
            }

            ctx_handle.request_repaint();
        });
    }

    /// Abandons the active load. Its result will be discarded.
    pub fn cancel(&mut self) {
        if self.loading_receiver.take().is_some() {
            tracing::debug!(generation = self.generation, "cancelled section load");
        }
        self.pending_source = None;
    }

    /// Returns the finished result, if the active load has completed.
    ///
    /// Call once per frame.
    pub fn check_completion(&mut self) -> LoadResult {
        let Some(receiver) = &self.loading_receiver else {
            return LoadResult::None;
        };

        let load_result = match receiver.try_recv() {
            Ok(Ok(sections)) => {
                let source = self.pending_source.take().unwrap_or_default();
                tracing::info!(
                    generation = self.generation,
                    sections = sections.len(),
                    "section load finished"
                );
                LoadResult::Success { sections, source }
            }
            Ok(Err(err)) => {
                tracing::warn!(generation = self.generation, "section load failed: {}", err);
                self.pending_source = None;
                LoadResult::Error(err.to_string())
            }
            Err(TryRecvError::Empty) => return LoadResult::None,
            Err(TryRecvError::Disconnected) => {
                tracing::warn!(generation = self.generation, "loader thread exited without a result");
                self.pending_source = None;
                LoadResult::Error("loader stopped without producing a result".to_string())
            }
        };

        self.loading_receiver = None;
        load_result
    }
}

impl Default for AsyncLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::DemoSectionSource;
    use crate::OutletError;
    use std::time::{Duration, Instant};

    struct FailingSource;

    impl SectionSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        fn fetch(&self) -> crate::Result<Vec<Section>> {
            Err(OutletError::Dataset("backend unavailable".to_string()))
        }
    }

    /// Demo sections under a custom name, after a delay.
    struct NamedSource {
        name: &'static str,
        delay: Duration,
    }

    impl SectionSource for NamedSource {
        fn describe(&self) -> String {
            self.name.to_string()
        }

        fn fetch(&self) -> crate::Result<Vec<Section>> {
            DemoSectionSource::new(self.delay).fetch()
        }
    }

    fn wait_for(loader: &mut AsyncLoader) -> LoadResult {
        let deadline = Instant::now() + Duration::from_secs(5);
        while Instant::now() < deadline {
            match loader.check_completion() {
                LoadResult::None => thread::sleep(Duration::from_millis(5)),
                other => return other,
            }
        }
        LoadResult::None
    }

    #[test]
    fn test_async_loader_creation() {
        let loader = AsyncLoader::new();
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_check_completion_when_idle() {
        let mut loader = AsyncLoader::new();
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_load_completes_without_blocking() {
        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_load(Arc::new(DemoSectionSource::new(Duration::from_millis(50))), &ctx);

        // Still pending right after starting.
        assert!(loader.is_loading());
        assert!(matches!(loader.check_completion(), LoadResult::None));

        match wait_for(&mut loader) {
            LoadResult::Success { sections, source } => {
                assert_eq!(sections.len(), 4);
                assert_eq!(source, "demo outlet");
            }
            other => panic!("expected success, got {:?}", other),
        }
        assert!(!loader.is_loading());
    }

    #[test]
    fn test_failure_is_reported() {
        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_load(Arc::new(FailingSource), &ctx);

        match wait_for(&mut loader) {
            LoadResult::Error(msg) => assert!(msg.contains("backend unavailable")),
            other => panic!("expected error, got {:?}", other),
        }
    }

    #[test]
    fn test_cancelled_load_is_discarded() {
        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_load(Arc::new(DemoSectionSource::new(Duration::from_millis(20))), &ctx);
        loader.cancel();

        thread::sleep(Duration::from_millis(60));
        assert!(!loader.is_loading());
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }

    #[test]
    fn test_superseded_load_is_discarded() {
        let ctx = egui::Context::default();
        let mut loader = AsyncLoader::new();
        loader.start_load(
            Arc::new(NamedSource { name: "slow", delay: Duration::from_millis(150) }),
            &ctx,
        );
        loader.start_load(Arc::new(NamedSource { name: "fast", delay: Duration::ZERO }), &ctx);

        match wait_for(&mut loader) {
            LoadResult::Success { source, .. } => assert_eq!(source, "fast"),
            other => panic!("expected success, got {:?}", other),
        }

        // Let the slow fetch finish; its result has nowhere to go.
        thread::sleep(Duration::from_millis(300));
        assert!(!loader.is_loading());
        assert!(matches!(loader.check_completion(), LoadResult::None));
    }
}
