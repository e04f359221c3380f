use crate::prelude::*;
use crate::ui::modules;

const ARROW_WIDTH: f32 = 56.0;

impl SliderApp {
    /// Draw the top bar (source controls, autoplay).
    pub fn display_top_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                modules::ui_source_controls(self, ui);
                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    modules::ui_autoplay(self, ui);
                });
            });
        });
    }

    /// Draw the bottom bar (status messages, slide counter).
    pub fn display_bottom_bar(&mut self, ctx: &Context) {
        egui::TopBottomPanel::bottom("bottom_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                modules::ui_status(self, ui);
                ui.with_layout(Layout::right_to_left(egui::Align::Center), |ui| {
                    modules::ui_slide_counter(self, ui);
                });
            });
        });
    }

    /// Draw the slider body for the current view.
    pub fn display_central_area(&mut self, ctx: &Context) {
        let view = self.carousel.view();

        CentralPanel::default().show(ctx, |ui| {
            let area = ui.available_rect_before_wrap();

            if let Some(text) = view.placeholder() {
                let text = match &view {
                    SliderView::Error(_) => RichText::new(text).color(Color32::RED),
                    _ => RichText::new(text),
                }
                .text_style(TextStyle::Heading);
                draw_centered_text(ui, area, text);
                return;
            }

            let indicator_height = INDICATOR_SIZE + 2.0 * ui.spacing().item_spacing.y + 8.0;
            let body = Rect::from_min_max(
                area.min,
                egui::pos2(area.max.x, area.max.y - indicator_height),
            );
            let left = Rect::from_min_max(body.min, egui::pos2(body.min.x + ARROW_WIDTH, body.max.y));
            let right = Rect::from_min_max(egui::pos2(body.max.x - ARROW_WIDTH, body.min.y), body.max);
            let image_area = Rect::from_min_max(
                egui::pos2(left.max.x, body.min.y),
                egui::pos2(right.min.x, body.max.y),
            );
            let indicator_area = Rect::from_min_max(egui::pos2(area.min.x, body.max.y), area.max);

            // Every slide stays mounted in the view; only the current one is
            // painted, so only its cache entry is looked up.
            if let Some(slide) = view.current_slide() {
                let status = match self.image_cache.lock() {
                    Ok(mut cache) => cache.current(&slide.url),
                    Err(_) => SlideImage::NotRequested,
                };
                match status {
                    SlideImage::Loaded(loaded) => {
                        draw_slide_image(ui, &loaded, image_area, &slide.url, &mut self.texture_cache)
                    }
                    SlideImage::Failed(msg) => draw_centered_text(
                        ui,
                        image_area,
                        RichText::new(format!("Failed to load {}: {}", slide.url, msg))
                            .color(Color32::YELLOW),
                    ),
                    SlideImage::Loading | SlideImage::NotRequested => {
                        draw_spinner(ui, image_area)
                    }
                }
            }

            if modules::ui_arrow(ui, left, false) {
                self.goto_previous();
            }
            if modules::ui_arrow(ui, right, true) {
                self.goto_next();
            }

            let clicked = ui
                .allocate_new_ui(egui::UiBuilder::new().max_rect(indicator_area), |ui| {
                    modules::ui_indicators(ui, view.indicators())
                })
                .inner;
            if let Some(idx) = clicked {
                self.goto_slide(idx);
            }
        });
    }
}
