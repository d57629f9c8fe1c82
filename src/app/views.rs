//! View rendering (header, class details, liquid table, status bar)

use super::{App, ALL_CLASSES_LABEL};
use crate::selection::LoadPhase;
use crate::source::DataSource;
use crate::theme;
use crate::types::ParameterKind;
use crate::ui::components::{badge, format_quantity, parameter_tile};
use crate::utils;
use eframe::egui;

const TABLE_COLUMNS: [&str; 6] = [
    "LIQUID",
    "DENSITY (g/mL)",
    "VISCOSITY (cP)",
    "MOLAR WEIGHT (g/mol)",
    "LIQUID CLASS",
    "NOTES",
];

impl App {
    pub(crate) fn render_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal_centered(|ui| {
            let logo_h = 28.0;
            let texture = self.logo_texture.get_or_insert_with(|| {
                let image = match utils::rasterize_logo(64) {
                    Some((pixels, w, h)) => {
                        egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels)
                    }
                    None => egui::ColorImage::new([1, 1], egui::Color32::TRANSPARENT),
                };
                ctx.load_texture("logo", image, egui::TextureOptions::LINEAR)
            });
            ui.image(egui::load::SizedTexture::new(texture.id(), egui::vec2(logo_h, logo_h)));

            ui.add(
                egui::Label::new(
                    egui::RichText::new("Laboratory Liquid Properties for Hamilton STAR")
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                )
                .selectable(false),
            );

            ui.add_space(theme::SPACING_XL);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Filter by Liquid Class:")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_MUTED),
                )
                .selectable(false),
            );

            let mut choice = self.class_choice.clone();
            egui::ComboBox::from_id_salt("liquid_class_select")
                .width(theme::SELECTOR_WIDTH)
                .selected_text(choice.as_deref().unwrap_or(ALL_CLASSES_LABEL))
                .show_ui(ui, |ui| {
                    ui.selectable_value(&mut choice, None, ALL_CLASSES_LABEL);
                    for name in &self.class_names {
                        ui.selectable_value(&mut choice, Some(name.clone()), name.as_str());
                    }
                });
            if choice != self.class_choice {
                self.class_choice = choice.clone();
                self.request_class(ctx, choice);
            }

            if self.view.is_loading() {
                ui.spinner();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui
                    .add(theme::button(egui_phosphor::regular::GEAR_SIX))
                    .on_hover_text("Settings")
                    .clicked()
                {
                    self.open_settings();
                }
                if ui
                    .add(theme::button(format!(
                        "{}  Export HTML",
                        egui_phosphor::regular::EXPORT
                    )))
                    .clicked()
                {
                    self.view.acknowledge();
                    self.export_html();
                }
            });
        });
    }

    /// Class card with the six parameter tiles and the selected parameter's
    /// Venus settings. Renders nothing when no class is displayed.
    pub(crate) fn render_class_details(&mut self, ui: &mut egui::Ui) {
        let Some(class) = self.view.selection.class().cloned() else {
            return;
        };
        let selected = self.view.selection.parameter();
        let reveal = self.view.selection.take_reveal();
        let mut clicked: Option<ParameterKind> = None;

        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new(format!("{} Settings", class.name))
                    .size(theme::FONT_HEADING)
                    .strong()
                    .color(theme::TEXT_PRIMARY),
            );
            ui.label(egui::RichText::new(&class.description).color(theme::TEXT_MUTED));
            ui.add_space(theme::SPACING_MD);

            let spacing = theme::SPACING_MD;
            let tile_w = ((ui.available_width() - spacing * 2.0) / 3.0).max(120.0);
            for row in ParameterKind::ALL.chunks(3) {
                ui.horizontal(|ui| {
                    ui.spacing_mut().item_spacing.x = spacing;
                    for &kind in row {
                        let response = parameter_tile(
                            ui,
                            kind,
                            class.parameter(kind),
                            selected == Some(kind),
                            tile_w,
                        );
                        if response.clicked() {
                            clicked = Some(kind);
                        }
                    }
                });
            }

            if let Some((kind, setting)) = self.view.selection.parameter_detail() {
                ui.add_space(theme::SPACING_LG);
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!(
                            "Venus Parameter Details: {}",
                            kind.display_name()
                        ))
                        .size(theme::FONT_BODY)
                        .strong()
                        .color(theme::ACCENT_LIGHT),
                    );
                    if ui
                        .small_button(egui_phosphor::regular::COPY)
                        .on_hover_text("Copy settings")
                        .clicked()
                    {
                        ui.ctx().copy_text(setting.instrument_settings.clone());
                    }
                });
                let block = theme::section_frame().show(ui, |ui| {
                    ui.set_width(ui.available_width());
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(&setting.instrument_settings)
                                .monospace()
                                .color(theme::TEXT_SECONDARY),
                        )
                        .wrap(),
                    );
                });
                if reveal {
                    block.response.scroll_to_me(Some(egui::Align::Max));
                }
            }
        });

        if let Some(kind) = clicked {
            self.view.acknowledge();
            self.view.selection.select_parameter(kind);
        }
        ui.add_space(theme::SPACING_LG);
    }

    pub(crate) fn render_liquid_table(&self, ui: &mut egui::Ui) {
        use egui_extras::{Column, TableBuilder};

        let liquids = self.view.liquids();
        if liquids.is_empty() {
            ui.add_space(theme::SPACING_XL);
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!(
                        "{}  No liquids in this class",
                        egui_phosphor::regular::DROP_SLASH
                    ))
                    .color(theme::TEXT_DIM),
                );
            });
            return;
        }

        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
            .min_scrolled_height(0.0)
            .column(Column::initial(220.0).at_least(120.0).clip(true))
            .column(Column::initial(110.0).at_least(80.0))
            .column(Column::initial(110.0).at_least(80.0))
            .column(Column::initial(150.0).at_least(90.0))
            .column(Column::initial(170.0).at_least(100.0).clip(true))
            .column(Column::remainder().clip(true))
            .header(theme::TABLE_HEADER_HEIGHT, |mut header| {
                for title in TABLE_COLUMNS {
                    header.col(|ui| {
                        ui.add(
                            egui::Label::new(
                                egui::RichText::new(title)
                                    .size(theme::FONT_SMALL)
                                    .strong()
                                    .color(theme::TEXT_DIM),
                            )
                            .selectable(false),
                        );
                    });
                }
            })
            .body(|body| {
                body.rows(theme::ROW_HEIGHT, liquids.len(), |mut row| {
                    let liquid = &liquids[row.index()];
                    row.col(|ui| {
                        ui.label(egui::RichText::new(&liquid.name).color(theme::TEXT_PRIMARY));
                    });
                    row.col(|ui| {
                        ui.label(format_quantity(liquid.density));
                    });
                    row.col(|ui| {
                        ui.label(format_quantity(liquid.viscosity));
                    });
                    row.col(|ui| {
                        ui.label(liquid.molar_weight.to_string());
                    });
                    row.col(|ui| {
                        ui.label(
                            egui::RichText::new(&liquid.liquid_class_name)
                                .color(theme::class_color(&liquid.liquid_class_name)),
                        );
                    });
                    row.col(|ui| {
                        ui.label(egui::RichText::new(&liquid.notes).color(theme::TEXT_MUTED))
                            .on_hover_text(liquid.notes.as_str());
                    });
                });
            });
    }

    pub(crate) fn render_status_bar(&self, ui: &mut egui::Ui) {
        ui.horizontal_centered(|ui| {
            let count = self.view.liquids().len();
            ui.label(
                egui::RichText::new(format!(
                    "{} liquid{}",
                    count,
                    if count == 1 { "" } else { "s" }
                ))
                .size(theme::FONT_SMALL)
                .color(theme::TEXT_MUTED),
            );

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let (icon, color) = match &self.source {
                    DataSource::Embedded(_) => (egui_phosphor::regular::DATABASE, theme::TEXT_MUTED),
                    DataSource::Remote(_) => (egui_phosphor::regular::GLOBE, theme::ACCENT),
                };
                badge(ui, icon, &self.source.describe(), color);

                let (status, status_color) = match self.view.phase() {
                    LoadPhase::Idle => ("Ready", theme::TEXT_DIM),
                    LoadPhase::Loading { .. } => ("Loading…", theme::STATUS_WARNING),
                    LoadPhase::Displayed => ("Up to date", theme::STATUS_SUCCESS),
                    LoadPhase::Errored => ("Last load failed", theme::STATUS_ERROR),
                };
                ui.label(egui::RichText::new(status).size(theme::FONT_SMALL).color(status_color));
            });
        });
    }
}
