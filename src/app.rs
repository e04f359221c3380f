//! Main application state and logic.

use crate::prelude::*;

/// The main application struct, holding all state.
pub struct SliderApp {
    pub carousel: Carousel,
    pub client: reqwest::Client,
    pub image_cache: SharedImageCache,
    pub texture_cache: TextureCache,
    pub status: StatusLine,
    pub url_box: String,
    pub page: u32,
    pub limit: u32,
    pub on_load: bool,
    pub autoplay: bool,
    pub autoplay_interval_secs: f32,
    pub autoplay_last_tick: Instant,
    repaint: Option<egui::Context>,
}

impl SliderApp {
    /// Create the app and start fetching the configured page.
    pub fn new(cc: &CreationContext, settings: Settings) -> Self {
        let client = reqwest::Client::new();
        let source = Arc::new(WebPageSource::new(client.clone()));
        let mut app = Self::with_source(source, client, &settings);
        app.repaint = Some(cc.egui_ctx.clone());
        app.carousel.set_repaint_context(cc.egui_ctx.clone());
        app.submit();
        app
    }

    /// Build the app around any page source without touching the network.
    pub fn with_source(
        source: Arc<dyn PageSource>,
        client: reqwest::Client,
        settings: &Settings,
    ) -> Self {
        Self {
            carousel: Carousel::new(source),
            client,
            image_cache: new_image_cache(settings.image_cache_size),
            texture_cache: TextureCache::new(),
            status: StatusLine::default(),
            url_box: settings.url.clone(),
            page: settings.page,
            limit: settings.limit,
            on_load: false,
            autoplay: settings.autoplay,
            autoplay_interval_secs: settings.autoplay_interval_secs,
            autoplay_last_tick: Instant::now(),
            repaint: None,
        }
    }

    /// Fetch with the values currently in the source controls.
    pub fn submit(&mut self) {
        let request = PageRequest::new(self.url_box.trim(), self.page.max(1), self.limit.max(1));
        if self.carousel.load(request).is_none() {
            self.status.report(Status::UrlMissing);
        }
    }

    /// Pick up a finished page request.
    pub fn poll_fetch(&mut self) {
        if !self.carousel.poll() {
            return;
        }
        self.on_list_changed();
    }

    fn on_list_changed(&mut self) {
        self.texture_cache.clear();
        if let Ok(mut cache) = self.image_cache.lock() {
            cache.clear_failures();
        }
        self.autoplay_last_tick = Instant::now();

        match self.carousel.state() {
            FetchState::Success => {
                let count = self.carousel.images().len();
                if count == 0 {
                    self.status.report(Status::EmptyPage);
                } else {
                    self.status.report(Status::Loaded(count));
                }
            }
            FetchState::Error(msg) => {
                self.status.report(Status::FetchFailed(msg.clone()));
            }
            FetchState::Idle | FetchState::Loading => {}
        }
    }

    /// Start downloading the slides around the current one.
    pub fn preload_images(&self) {
        for url in self.images_to_preload() {
            tokio::spawn(load_image_async(
                url,
                self.client.clone(),
                self.image_cache.clone(),
                self.repaint.clone(),
            ));
        }
    }

    /// URLs near the current slide that are not cached or in flight yet,
    /// current slide first.
    ///
    /// The window never exceeds the cache capacity, so preloading cannot
    /// evict an image it has just fetched and loop on downloading it again.
    pub fn images_to_preload(&self) -> Vec<String> {
        let Ok(cache) = self.image_cache.lock() else {
            return Vec::new();
        };
        let images = self.carousel.images();
        let window = PRELOAD_SLIDES.min(cache.capacity());

        let mut urls = Vec::new();
        for idx in self.carousel.nearby(window) {
            let Some(item) = images.get(idx) else {
                continue;
            };
            if matches!(cache.status(&item.download_url), SlideImage::NotRequested) {
                urls.push(item.download_url.clone());
            }
        }
        urls
    }

    pub fn goto_previous(&mut self) {
        self.carousel.previous();
        self.autoplay_last_tick = Instant::now();
    }

    pub fn goto_next(&mut self) {
        self.carousel.next();
        self.autoplay_last_tick = Instant::now();
    }

    pub fn goto_slide(&mut self, index: usize) {
        if self.carousel.select(index) {
            self.autoplay_last_tick = Instant::now();
        } else {
            self.status.report(Status::NoSuchSlide(index));
        }
    }

    /// Advance the slideshow if its interval has elapsed at `now`.
    pub fn tick_autoplay(&mut self, now: Instant) -> bool {
        if !self.autoplay || self.carousel.images().is_empty() {
            return false;
        }
        let interval = Duration::from_secs_f32(self.autoplay_interval_secs);
        if now.duration_since(self.autoplay_last_tick) < interval {
            return false;
        }
        self.carousel.next();
        self.autoplay_last_tick = now;
        true
    }

    /// Time left until the next autoplay step, if autoplay is running.
    pub fn autoplay_remaining(&self, now: Instant) -> Option<Duration> {
        if !self.autoplay || self.carousel.images().is_empty() {
            return None;
        }
        let interval = Duration::from_secs_f32(self.autoplay_interval_secs);
        Some(interval.saturating_sub(now.duration_since(self.autoplay_last_tick)))
    }

    pub fn handle_input(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowRight)) {
            self.goto_next();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::ArrowLeft)) {
            self.goto_previous();
        }
        if ctx.input(|i| i.key_pressed(egui::Key::F5)) {
            self.carousel.reload();
        }
    }

    fn on_changes(&mut self) {
        if self.on_load {
            self.on_load = false;
            self.submit();
        }
    }
}

impl eframe::App for SliderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_fetch();
        self.handle_input(ctx);

        let now = Instant::now();
        self.tick_autoplay(now);
        if let Some(remaining) = self.autoplay_remaining(now) {
            ctx.request_repaint_after(remaining);
        }

        self.preload_images();

        self.display_top_bar(ctx);
        self.display_bottom_bar(ctx);
        self.display_central_area(ctx);

        self.on_changes();
        self.status.clear_expired(now);
    }
}
