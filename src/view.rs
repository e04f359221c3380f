//! Pure view model of the slider.

use crate::prelude::*;

pub const LOADING_TEXT: &str = "Loading data! Please wait";
pub const IDLE_TEXT: &str = "No image source configured";

/// One slide. Every image of the list gets one, visible or not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub id: String,
    /// Image source, also used as the alt text.
    pub url: String,
    pub current: bool,
}

/// What the UI should draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SliderView {
    Idle,
    Loading,
    Error(String),
    Slides {
        slides: Vec<Slide>,
        /// Active flag per indicator, same order as `slides`.
        indicators: Vec<bool>,
    },
}

impl SliderView {
    pub fn build(state: &FetchState, images: &ImageList, selected: usize) -> Self {
        match state {
            FetchState::Idle => SliderView::Idle,
            FetchState::Loading => SliderView::Loading,
            FetchState::Error(msg) => SliderView::Error(msg.clone()),
            FetchState::Success => {
                let slides: Vec<Slide> = images
                    .iter()
                    .enumerate()
                    .map(|(i, item)| Slide {
                        id: item.id.clone(),
                        url: item.download_url.clone(),
                        current: i == selected,
                    })
                    .collect();
                let indicators = slides.iter().map(|s| s.current).collect();
                SliderView::Slides { slides, indicators }
            }
        }
    }

    /// Arrows are shown for every successful fetch, even an empty one.
    pub fn has_arrows(&self) -> bool {
        matches!(self, SliderView::Slides { .. })
    }

    pub fn slides(&self) -> &[Slide] {
        match self {
            SliderView::Slides { slides, .. } => slides,
            _ => &[],
        }
    }

    pub fn indicators(&self) -> &[bool] {
        match self {
            SliderView::Slides { indicators, .. } => indicators,
            _ => &[],
        }
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides().iter().find(|s| s.current)
    }

    /// Placeholder text, if this view is a placeholder.
    pub fn placeholder(&self) -> Option<String> {
        match self {
            SliderView::Idle => Some(IDLE_TEXT.to_string()),
            SliderView::Loading => Some(LOADING_TEXT.to_string()),
            SliderView::Error(msg) => Some(format!("Error occurred! {}", msg)),
            SliderView::Slides { .. } => None,
        }
    }
}
