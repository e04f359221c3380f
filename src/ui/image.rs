//! Image drawing helpers for egui.

use crate::prelude::*;

/// Draw a centered spinner in the given area.
pub fn draw_spinner(ui: &mut Ui, area: Rect) {
    let spinner_size = 48.0;
    let spinner_rect = Rect::from_center_size(area.center(), Vec2::splat(spinner_size));
    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(spinner_rect), |ui| {
        ui.add(Spinner::new().size(spinner_size).color(Color32::WHITE));
    });
}

/// Largest size with the image's aspect ratio that fits in `avail`, never
/// scaled above 1:1.
pub fn fit_size(image_size: (u32, u32), avail: Vec2) -> Vec2 {
    let (w, h) = image_size;
    if w == 0 || h == 0 {
        return Vec2::ZERO;
    }
    let scale = (avail.x / w as f32).min(avail.y / h as f32).min(1.0).max(0.0);
    Vec2::new(w as f32 * scale, h as f32 * scale)
}

/// Draw a decoded slide centered in `area`. `alt` is shown on hover.
pub fn draw_slide_image(
    ui: &mut Ui,
    loaded: &LoadedImage,
    area: Rect,
    alt: &str,
    cache: &mut TextureCache,
) {
    let ctx = ui.ctx().clone();
    let handle = cache.get_or_upload(&ctx, loaded);
    let disp_size = fit_size(loaded.image.dimensions(), area.size());
    let rect = Rect::from_center_size(area.center(), disp_size);
    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(rect), |ui| {
        ui.add(Image::from_texture(&handle).fit_to_exact_size(disp_size))
            .on_hover_text(alt);
    });
}

/// Draw a centered line of text, used for placeholders.
pub fn draw_centered_text(ui: &mut Ui, area: Rect, text: RichText) {
    ui.allocate_new_ui(egui::UiBuilder::new().max_rect(area), |ui| {
        ui.with_layout(
            egui::Layout::centered_and_justified(egui::Direction::TopDown),
            |ui| {
                ui.label(text);
            },
        );
    });
}
