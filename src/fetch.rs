//! Fetch controller: one page request per URL change.

use crate::prelude::*;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

/// Result of one request, tagged with the generation it was issued under.
#[derive(Debug)]
pub struct FetchOutcome {
    pub generation: u64,
    pub result: Result<ImageList, FetchError>,
}

/// Tracks the lifecycle of the latest page request.
///
/// Requests run as tokio tasks and report back over a channel which the UI
/// drains with [`FetchController::poll`]. Each request bumps the generation;
/// outcomes carrying an older generation are dropped, so a slow response can
/// never overwrite a newer one.
pub struct FetchController {
    source: Arc<dyn PageSource>,
    state: FetchState,
    images: ImageList,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    tx: UnboundedSender<FetchOutcome>,
    rx: UnboundedReceiver<FetchOutcome>,
    repaint: Option<egui::Context>,
}

impl FetchController {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            source,
            state: FetchState::Idle,
            images: ImageList::default(),
            generation: 0,
            in_flight: None,
            tx,
            rx,
            repaint: None,
        }
    }

    /// Ask egui to redraw whenever a request completes.
    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn state(&self) -> &FetchState {
        &self.state
    }

    pub fn images(&self) -> &ImageList {
        &self.images
    }

    /// Handle a URL change. Must be called from within a tokio runtime.
    ///
    /// Returns the generation of the issued request, or `None` when the URL
    /// is empty and fetching is disabled.
    pub fn request(&mut self, request: PageRequest) -> Option<u64> {
        self.cancel_in_flight();
        self.generation += 1;
        self.images = ImageList::default();

        if !request.is_enabled() {
            debug!("Empty URL, fetching disabled");
            self.state = FetchState::Idle;
            return None;
        }

        log::info!("Fetching {}", request.endpoint());
        self.state = FetchState::Loading;

        let generation = self.generation;
        let source = Arc::clone(&self.source);
        let tx = self.tx.clone();
        let repaint = self.repaint.clone();
        self.in_flight = Some(tokio::spawn(async move {
            let result = source.fetch_page(&request).await;
            // The receiver only goes away with the controller itself.
            let _ = tx.send(FetchOutcome { generation, result });
            if let Some(ctx) = repaint {
                ctx.request_repaint();
            }
        }));

        Some(generation)
    }

    /// Apply every finished request. Returns `true` if the state changed.
    pub fn poll(&mut self) -> bool {
        let mut changed = false;
        while let Ok(outcome) = self.rx.try_recv() {
            changed |= self.apply(outcome);
        }
        changed
    }

    /// Wait for the next finished request and apply it.
    #[cfg(test)]
    pub async fn next_outcome(&mut self) -> bool {
        match self.rx.recv().await {
            Some(outcome) => self.apply(outcome),
            None => false,
        }
    }

    /// Apply one outcome, ignoring it if a newer request has been issued.
    pub fn apply(&mut self, outcome: FetchOutcome) -> bool {
        if outcome.generation != self.generation {
            debug!(
                "Discarding stale result of request {} (current {})",
                outcome.generation, self.generation
            );
            return false;
        }
        self.in_flight = None;

        match outcome.result {
            Ok(images) => {
                log::info!("Fetched {} images", images.len());
                self.images = images;
                self.state = FetchState::Success;
            }
            Err(e) => {
                warn!("Fetch failed: {}", e);
                self.images = ImageList::default();
                self.state = FetchState::Error(e.message());
            }
        }
        true
    }

    fn cancel_in_flight(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            debug!("Aborting request {}", self.generation);
            handle.abort();
        }
    }
}

impl Drop for FetchController {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}
