//! Overlays: toast notifications and the data source settings modal

use super::App;
use crate::constants::{DEFAULT_REQUEST_TIMEOUT_SECS, TOAST_FADE_SECS, TOAST_VISIBLE_SECS};
use crate::settings::{Settings, SourceKind};
use crate::source::DataSource;
use crate::theme;
use eframe::egui;
use tracing::{info, warn};

impl App {
    /// Replace any visible toast with `message`.
    pub fn show_toast(&mut self, message: impl Into<String>, is_error: bool) {
        self.toast_message = Some(message.into());
        self.toast_is_error = is_error;
        self.toast_start = Some(std::time::Instant::now());
    }

    /// Bottom-right of the central panel; fades out, pauses while hovered.
    pub(crate) fn render_toast(&mut self, ctx: &egui::Context) {
        let (Some(msg), Some(panel_rect)) = (self.toast_message.clone(), self.central_panel_rect)
        else {
            return;
        };
        let total_duration = TOAST_VISIBLE_SECS + TOAST_FADE_SECS;
        let margin = 12.0;
        let toast_pos = egui::pos2(panel_rect.right() - margin, panel_rect.bottom() - margin);
        let edge = if self.toast_is_error {
            theme::STATUS_ERROR
        } else {
            theme::ACCENT
        };

        let response = egui::Area::new(egui::Id::new("toast"))
            .fixed_pos(toast_pos)
            .pivot(egui::Align2::RIGHT_BOTTOM)
            .show(ctx, |ui| {
                let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
                let alpha = if elapsed > TOAST_VISIBLE_SECS {
                    ((total_duration - elapsed) / TOAST_FADE_SECS).clamp(0.0, 1.0)
                } else {
                    1.0
                };

                egui::Frame::new()
                    .fill(egui::Color32::from_rgba_unmultiplied(0x1a, 0x1a, 0x1e, (230.0 * alpha) as u8))
                    .stroke(egui::Stroke::new(
                        theme::STROKE_DEFAULT,
                        egui::Color32::from_rgba_unmultiplied(edge.r(), edge.g(), edge.b(), (140.0 * alpha) as u8),
                    ))
                    .corner_radius(theme::RADIUS_MEDIUM)
                    .inner_margin(egui::Margin::symmetric(16, 10))
                    .show(ui, |ui| {
                        let icon = if self.toast_is_error {
                            egui_phosphor::regular::WARNING_CIRCLE
                        } else {
                            egui_phosphor::regular::CHECK_CIRCLE
                        };
                        ui.label(
                            egui::RichText::new(format!("{}  {}", icon, msg)).color(
                                egui::Color32::from_rgba_unmultiplied(255, 255, 255, (255.0 * alpha) as u8),
                            ),
                        );
                    });
            });

        if response.response.hovered() {
            self.toast_start = Some(std::time::Instant::now());
        }

        let elapsed = self.toast_start.map(|t| t.elapsed().as_secs_f32()).unwrap_or(0.0);
        if elapsed >= total_duration {
            self.toast_message = None;
            self.toast_start = None;
        } else {
            ctx.request_repaint();
        }
    }

    /// Open the settings modal with a draft copied from the saved settings.
    pub(crate) fn open_settings(&mut self) {
        self.view.acknowledge();
        self.draft_embedded = self.settings.source == SourceKind::Embedded;
        self.draft_url = self.settings.api_base_url.clone();
        self.draft_timeout_secs = self.settings.request_timeout_secs;
        self.settings_error = None;
        self.show_settings = true;
    }

    pub(crate) fn render_settings_window(&mut self, ctx: &egui::Context) {
        if !self.show_settings {
            return;
        }

        let mut apply = false;
        let modal_response = egui::Modal::new(egui::Id::new("settings_modal"))
            .backdrop_color(egui::Color32::from_black_alpha(120))
            .frame(theme::modal_frame())
            .show(ctx, |ui| {
                ui.set_width(340.0);

                ui.horizontal(|ui| {
                    ui.add(
                        egui::Label::new(egui::RichText::new("Settings").size(theme::FONT_HEADING).strong())
                            .selectable(false),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let close_size = 24.0;
                        let (rect, response) =
                            ui.allocate_exact_size(egui::vec2(close_size, close_size), egui::Sense::click());
                        let close_color = if response.hovered() {
                            ui.painter().rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_SURFACE);
                            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
                            theme::STATUS_ERROR
                        } else {
                            theme::TEXT_DIM
                        };
                        ui.painter().text(
                            rect.center(),
                            egui::Align2::CENTER_CENTER,
                            egui_phosphor::regular::X,
                            egui::FontId::proportional(16.0),
                            close_color,
                        );
                        if response.clicked() {
                            self.show_settings = false;
                        }
                    });
                });
                ui.add_space(theme::SPACING_SM);
                ui.separator();
                ui.add_space(theme::SPACING_SM);

                // Data Source
                ui.add(
                    egui::Label::new(
                        egui::RichText::new("Data Source").size(theme::FONT_LABEL).color(theme::ACCENT),
                    )
                    .selectable(false),
                );
                ui.add_space(theme::SPACING_SM);
                theme::segmented_toggle(ui, "Embedded", "Server", &mut self.draft_embedded);

                ui.add_space(theme::SPACING_MD);
                ui.add_enabled_ui(!self.draft_embedded, |ui| {
                    ui.label(egui::RichText::new("Server URL").size(theme::FONT_SMALL).color(theme::TEXT_MUTED));
                    egui::Frame::new()
                        .fill(theme::BG_INPUT)
                        .stroke(egui::Stroke::new(theme::STROKE_DEFAULT, theme::BORDER_SUBTLE))
                        .corner_radius(theme::RADIUS_DEFAULT)
                        .inner_margin(egui::Margin::symmetric(6, 4))
                        .show(ui, |ui| {
                            ui.add(
                                egui::TextEdit::singleline(&mut self.draft_url)
                                    .frame(false)
                                    .desired_width(f32::INFINITY)
                                    .hint_text("http://127.0.0.1:5000")
                                    .font(egui::FontId::proportional(theme::FONT_LABEL)),
                            );
                        });

                    ui.add_space(theme::SPACING_SM);
                    ui.horizontal(|ui| {
                        ui.label(
                            egui::RichText::new("Request timeout")
                                .size(theme::FONT_SMALL)
                                .color(theme::TEXT_MUTED),
                        );
                        ui.add(
                            egui::DragValue::new(&mut self.draft_timeout_secs)
                                .range(1..=120)
                                .suffix(" s"),
                        );
                    });
                });

                if let Some(err) = &self.settings_error {
                    ui.add_space(theme::SPACING_SM);
                    ui.label(
                        egui::RichText::new(format!("{}  {}", egui_phosphor::regular::WARNING, err))
                            .size(theme::FONT_SMALL)
                            .color(theme::STATUS_ERROR),
                    );
                }

                ui.add_space(theme::SPACING_LG);
                ui.horizontal(|ui| {
                    if ui.add(theme::button_accent(format!("{}  Apply", egui_phosphor::regular::CHECK))).clicked() {
                        apply = true;
                    }
                    if ui.add(theme::button("Cancel")).clicked() {
                        self.show_settings = false;
                    }
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui
                            .small_button(egui_phosphor::regular::ARROW_COUNTER_CLOCKWISE)
                            .on_hover_text("Reset timeout to default")
                            .clicked()
                        {
                            self.draft_timeout_secs = DEFAULT_REQUEST_TIMEOUT_SECS;
                        }
                    });
                });
            });

        if modal_response.should_close() {
            self.show_settings = false;
        }
        if apply {
            self.apply_settings_draft(ctx);
        }
    }

    fn apply_settings_draft(&mut self, ctx: &egui::Context) {
        let mut next: Settings = self.settings.clone();
        next.source = if self.draft_embedded {
            SourceKind::Embedded
        } else {
            SourceKind::Remote
        };
        next.api_base_url = self.draft_url.trim().to_string();
        next.request_timeout_secs = self.draft_timeout_secs;

        match DataSource::from_settings(&next, self.dataset.clone()) {
            Ok(source) => {
                info!(source = %source.describe(), "Data source changed");
                self.source = source;
                self.settings = next;
                self.settings_error = None;
                self.show_settings = false;
                self.save_settings();
                self.request_class_names(ctx);
                let choice = self.class_choice.clone();
                self.request_class(ctx, choice);
            }
            Err(e) => {
                warn!(error = %e, "Rejected data source settings");
                self.settings_error = Some(e.to_string());
            }
        }
    }
}
