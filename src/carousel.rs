//! The slider component: a fetch controller and a slide selector kept in step.

use crate::prelude::*;

pub struct Carousel {
    fetch: FetchController,
    selector: SlideSelector,
    request: PageRequest,
}

impl Carousel {
    pub fn new(source: Arc<dyn PageSource>) -> Self {
        Self {
            fetch: FetchController::new(source),
            selector: SlideSelector::default(),
            request: PageRequest::new("", DEFAULT_PAGE, DEFAULT_LIMIT),
        }
    }

    pub fn set_repaint_context(&mut self, ctx: egui::Context) {
        self.fetch.set_repaint_context(ctx);
    }

    /// The request most recently passed to [`Carousel::load`].
    pub fn request(&self) -> &PageRequest {
        &self.request
    }

    pub fn state(&self) -> &FetchState {
        self.fetch.state()
    }

    pub fn images(&self) -> &ImageList {
        self.fetch.images()
    }

    pub fn index(&self) -> usize {
        self.selector.index()
    }

    /// URL change: start over with a new request.
    pub fn load(&mut self, request: PageRequest) -> Option<u64> {
        self.request = request.clone();
        self.selector.reset(0);
        self.fetch.request(request)
    }

    /// Fetch the last request again.
    pub fn reload(&mut self) -> Option<u64> {
        self.load(self.request.clone())
    }

    /// Pick up finished requests. Returns `true` when a new list or an error
    /// arrived; the selection is then back on the first slide.
    pub fn poll(&mut self) -> bool {
        let changed = self.fetch.poll();
        if changed {
            self.sync_selector();
        }
        changed
    }

    #[cfg(test)]
    pub async fn next_outcome(&mut self) -> bool {
        let changed = self.fetch.next_outcome().await;
        if changed {
            self.sync_selector();
        }
        changed
    }

    fn sync_selector(&mut self) {
        self.selector.reset(self.fetch.images().len());
    }

    pub fn previous(&mut self) {
        self.selector.previous();
    }

    pub fn next(&mut self) {
        self.selector.next();
    }

    pub fn select(&mut self, index: usize) -> bool {
        self.selector.select(index)
    }

    /// Slides worth having decoded, nearest to the current one first.
    pub fn nearby(&self, count: usize) -> Vec<usize> {
        self.selector.nearby(count)
    }

    pub fn view(&self) -> SliderView {
        SliderView::build(self.fetch.state(), self.fetch.images(), self.selector.index())
    }
}
