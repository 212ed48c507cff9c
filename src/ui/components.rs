//! Shared UI components.

use eframe::egui::{self, Color32, Response, RichText, Sense, StrokeKind, Ui};

/// Navigation card shown on the dashboard.
pub struct NavCard {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Paint a clickable navigation card scaled to `size`.
pub fn nav_card(ui: &mut Ui, card: &NavCard, size: egui::Vec2) -> Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    if !ui.is_rect_visible(rect) {
        return response;
    }

    let visuals = ui.style().interact(&response);
    let scale = size.x / 200.0;
    let painter = ui.painter();
    painter.rect_filled(rect, 8.0, visuals.bg_fill);
    painter.rect_stroke(rect, 8.0, visuals.bg_stroke, StrokeKind::Outside);

    // (text, vertical position as a fraction of height, font size, weak)
    let lines = [
        (card.icon, 0.27, 36.0, false),
        (card.title, 0.57, 18.0, false),
        (card.description, 0.83, 12.0, true),
    ];
    for (text, at, font, weak) in lines {
        let color = if weak {
            ui.visuals().weak_text_color()
        } else {
            visuals.text_color()
        };
        painter.text(
            egui::pos2(rect.center().x, rect.top() + size.y * at),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(font * scale),
            color,
        );
    }

    response
}

/// Status indicator colors.
pub mod colors {
    use super::Color32;

    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const WARNING: Color32 = Color32::from_rgb(255, 200, 100);
    pub const NEUTRAL: Color32 = Color32::from_rgb(150, 150, 150);
    pub const PRIMARY: Color32 = Color32::from_rgb(68, 114, 196);
}

/// Render a back button that returns true when clicked.
pub fn back_button(ui: &mut Ui, target: &str) -> bool {
    ui.button(RichText::new(format!("< Back to {target}")).size(14.0))
        .clicked()
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(24.0));
    ui.add_space(10.0);
    ui.separator();
    ui.add_space(20.0);
}

/// Plain toolbar button.
pub fn styled_button(ui: &mut Ui, text: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(text).size(14.0)).min_size(egui::vec2(80.0, 28.0)))
}

/// Toolbar button with a leading icon.
pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    styled_button(ui, &format!("{icon} {text}"))
}

/// Filled primary button with a leading icon; disabled when `enabled` is false.
pub fn primary_button_with_icon(ui: &mut Ui, enabled: bool, icon: &str, text: &str) -> Response {
    let label = if icon.is_empty() {
        text.to_string()
    } else {
        format!("{icon} {text}")
    };
    ui.add_enabled(
        enabled,
        egui::Button::new(RichText::new(label).size(14.0).color(Color32::WHITE))
            .fill(colors::PRIMARY)
            .min_size(egui::vec2(100.0, 28.0)),
    )
}
