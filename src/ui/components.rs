//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use crate::types::{ParameterKind, ParameterSetting};
use eframe::egui;

/// Physical quantities print without trailing zeros ("1", "0.79", "934")
pub fn format_quantity(value: f64) -> String {
    format!("{}", value)
}

/// "Pipetting Speed: Slow (50-100 µL/s)"
pub fn tile_caption(kind: ParameterKind, setting: &ParameterSetting) -> String {
    format!("{}: {}", kind.display_name(), setting.summary())
}

/// Clickable parameter tile. Focusable; Enter and Space activate it like a click.
pub fn parameter_tile(
    ui: &mut egui::Ui,
    kind: ParameterKind,
    setting: &ParameterSetting,
    selected: bool,
    width: f32,
) -> egui::Response {
    let (rect, response) =
        ui.allocate_exact_size(egui::vec2(width, theme::TILE_HEIGHT), egui::Sense::click());

    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
    }

    if ui.is_rect_visible(rect) {
        let base = if selected { theme::TOGGLE_SELECTED } else { theme::BG_SURFACE };
        let (fill, draw_rect) = theme::button_visual(&response, base, rect);
        let stroke = if response.has_focus() {
            egui::Stroke::new(theme::STROKE_MEDIUM, theme::ACCENT)
        } else if selected {
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::ACCENT_MUTED)
        } else {
            egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE)
        };

        let painter = ui.painter_at(rect);
        painter.rect_filled(draw_rect, theme::RADIUS_MEDIUM, fill);
        painter.rect_stroke(draw_rect, theme::RADIUS_MEDIUM, stroke, egui::StrokeKind::Inside);

        let left = draw_rect.left() + theme::SPACING_LG;
        painter.text(
            egui::pos2(left, draw_rect.top() + 16.0),
            egui::Align2::LEFT_CENTER,
            format!("{}  {}", kind.icon(), kind.display_name().to_uppercase()),
            egui::FontId::proportional(theme::FONT_SMALL),
            if selected { theme::ACCENT_LIGHT } else { theme::TEXT_DIM },
        );
        painter.text(
            egui::pos2(left, draw_rect.bottom() - 18.0),
            egui::Align2::LEFT_CENTER,
            setting.summary(),
            egui::FontId::proportional(theme::FONT_BODY),
            theme::TEXT_PRIMARY,
        );
    }

    response.on_hover_text(tile_caption(kind, setting))
}

/// Small rounded label, e.g. the data source indicator
pub fn badge(ui: &mut egui::Ui, icon: &str, text: &str, color: egui::Color32) {
    egui::Frame::new()
        .fill(egui::Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 18))
        .corner_radius(theme::RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(8, 3))
        .show(ui, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new(format!("{} {}", icon, text))
                        .size(theme::FONT_SMALL)
                        .color(color),
                )
                .selectable(false),
            );
        });
}
