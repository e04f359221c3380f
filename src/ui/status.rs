//! Status line shown in the bottom bar.

use crate::prelude::*;

/// Something the user should hear about.
#[derive(Debug, Clone, PartialEq)]
pub enum Status {
    UrlMissing,
    Loaded(usize),
    EmptyPage,
    FetchFailed(String),
    /// Zero-based index of a slide that is not in the list.
    NoSuchSlide(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

impl StatusLevel {
    pub fn color(self) -> Color32 {
        match self {
            StatusLevel::Info => Color32::GRAY,
            StatusLevel::Warning => Color32::YELLOW,
            StatusLevel::Error => Color32::RED,
        }
    }

    fn log_level(self) -> log::Level {
        match self {
            StatusLevel::Info => log::Level::Info,
            StatusLevel::Warning => log::Level::Warn,
            StatusLevel::Error => log::Level::Error,
        }
    }
}

impl Status {
    pub fn level(&self) -> StatusLevel {
        match self {
            Status::UrlMissing | Status::Loaded(_) => StatusLevel::Info,
            Status::EmptyPage | Status::NoSuchSlide(_) => StatusLevel::Warning,
            Status::FetchFailed(_) => StatusLevel::Error,
        }
    }

    pub fn text(&self) -> String {
        match self {
            Status::UrlMissing => "Enter an image list URL to start".to_string(),
            Status::Loaded(1) => "Loaded 1 image".to_string(),
            Status::Loaded(count) => format!("Loaded {} images", count),
            Status::EmptyPage => "The server returned no images".to_string(),
            Status::FetchFailed(msg) => format!("Failed to load images: {}", msg),
            Status::NoSuchSlide(index) => format!("Slide {} does not exist", index + 1),
        }
    }

    /// How long the message stays in the bottom bar.
    pub fn lifetime(&self) -> Duration {
        match self.level() {
            StatusLevel::Error => ERROR_STATUS_TIMEOUT,
            StatusLevel::Info | StatusLevel::Warning => STATUS_TIMEOUT,
        }
    }
}

/// The latest [`Status`], mirrored to `log` when reported.
#[derive(Debug, Default)]
pub struct StatusLine {
    shown: Option<(Status, Instant)>,
}

impl StatusLine {
    pub fn report(&mut self, status: Status) {
        log::log!(status.level().log_level(), "{}", status.text());
        self.shown = Some((status, Instant::now()));
    }

    pub fn current(&self) -> Option<&Status> {
        self.shown.as_ref().map(|(status, _)| status)
    }

    /// Drop the message once it has outlived its lifetime at `now`.
    pub fn clear_expired(&mut self, now: Instant) {
        if let Some((status, since)) = &self.shown {
            if now.saturating_duration_since(*since) >= status.lifetime() {
                self.shown = None;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_latest_status() {
        let mut line = StatusLine::default();
        line.report(Status::Loaded(3));
        line.report(Status::NoSuchSlide(3));
        assert_eq!(line.current(), Some(&Status::NoSuchSlide(3)));
        assert_eq!(line.current().map(Status::text).as_deref(), Some("Slide 4 does not exist"));
    }

    #[test]
    fn levels_follow_the_status() {
        assert_eq!(Status::Loaded(2).level(), StatusLevel::Info);
        assert_eq!(Status::EmptyPage.level(), StatusLevel::Warning);
        assert_eq!(
            Status::FetchFailed("Network Error".into()).level(),
            StatusLevel::Error
        );
        assert_eq!(Status::Loaded(1).text(), "Loaded 1 image");
    }

    #[test]
    fn errors_outlive_info_messages() {
        let mut line = StatusLine::default();
        line.report(Status::Loaded(5));
        let later = Instant::now() + STATUS_TIMEOUT;
        line.clear_expired(later);
        assert_eq!(line.current(), None);

        line.report(Status::FetchFailed("Network Error".into()));
        line.clear_expired(Instant::now() + STATUS_TIMEOUT);
        assert!(line.current().is_some());
        line.clear_expired(Instant::now() + ERROR_STATUS_TIMEOUT);
        assert_eq!(line.current(), None);
    }

    #[test]
    fn fresh_status_is_kept() {
        let mut line = StatusLine::default();
        line.report(Status::UrlMissing);
        line.clear_expired(Instant::now());
        assert_eq!(line.current(), Some(&Status::UrlMissing));
    }
}
