use crate::prelude::*;

const ARROW_LEFT: &str = "\u{23f4}";
const ARROW_RIGHT: &str = "\u{23f5}";
const DOT_ACTIVE: &str = "\u{25cf}";
const DOT_INACTIVE: &str = "\u{25cb}";

pub fn ui_source_controls(app: &mut SliderApp, ui: &mut Ui) {
    ui.label("URL");
    let response = ui.add(
        TextEdit::singleline(&mut app.url_box)
            .hint_text("https://picsum.photos/v2/list")
            .desired_width(320.0),
    );
    ui.label("Page");
    ui.add(egui::DragValue::new(&mut app.page).range(1..=u32::MAX));
    ui.label("Limit");
    ui.add(egui::DragValue::new(&mut app.limit).range(1..=100));

    app.on_load = ui
        .button("Load")
        .on_hover_text("Fetch this page of images")
        .clicked()
        || (response.lost_focus() && ui.ctx().input(|i| i.key_pressed(egui::Key::Enter)));
}

pub fn ui_autoplay(app: &mut SliderApp, ui: &mut Ui) {
    if ui
        .selectable_label(app.autoplay, "\u{25b6} Autoplay")
        .on_hover_text("Advance slides automatically")
        .clicked()
    {
        app.autoplay = !app.autoplay;
        app.autoplay_last_tick = Instant::now();
    }
    if app.autoplay {
        ui.add(
            egui::DragValue::new(&mut app.autoplay_interval_secs)
                .range(AUTOPLAY_RANGE)
                .suffix(" s"),
        );
    }
}

/// Previous/next arrow filling `rect`. Returns `true` when clicked.
pub fn ui_arrow(ui: &mut Ui, rect: Rect, forward: bool) -> bool {
    let (glyph, hint) = if forward {
        (ARROW_RIGHT, "Next image")
    } else {
        (ARROW_LEFT, "Previous image")
    };
    ui.put(
        rect,
        egui::Button::new(RichText::new(glyph).size(36.0)).frame(false),
    )
    .on_hover_text(hint)
    .clicked()
}

/// One dot per slide; returns the index of a clicked dot.
pub fn ui_indicators(ui: &mut Ui, indicators: &[bool]) -> Option<usize> {
    let mut clicked = None;
    ui.horizontal(|ui| {
        let width = indicators.len() as f32 * (INDICATOR_SIZE + ui.spacing().item_spacing.x);
        ui.add_space(((ui.available_width() - width) / 2.0).max(0.0));
        for (idx, active) in indicators.iter().enumerate() {
            let glyph = if *active { DOT_ACTIVE } else { DOT_INACTIVE };
            let response = ui
                .add(egui::Button::new(RichText::new(glyph).size(INDICATOR_SIZE)).frame(false))
                .on_hover_text(format!("Image {}", idx + 1));
            if response.clicked() {
                clicked = Some(idx);
            }
        }
    });
    clicked
}

pub fn ui_slide_counter(app: &SliderApp, ui: &mut Ui) {
    let total = app.carousel.images().len();
    if total > 0 {
        ui.label(format!("{}/{}", app.carousel.index() + 1, total));
    }
}

pub fn ui_status(app: &SliderApp, ui: &mut Ui) {
    if let Some(status) = app.status.current() {
        ui.colored_label(status.level().color(), status.text());
    }
}
