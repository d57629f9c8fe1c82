//! App module - contains the main application state and logic

mod export;
mod loading;
mod modals;
mod views;

use crate::dataset::Dataset;
use crate::selection::{LoadResult, NamesResult, ViewState};
use crate::settings::{Settings, SourceKind};
use crate::source::DataSource;
use crate::theme;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::warn;

pub const ALL_CLASSES_LABEL: &str = "All Liquid Classes";

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) dataset: Arc<Dataset>,
    pub(crate) source: DataSource,
    pub(crate) class_names: Vec<String>,
    pub(crate) view: ViewState,
    /// Selector value; may run ahead of the displayed class while loading
    pub(crate) class_choice: Option<String>,
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Background loads
    pub(crate) runtime: tokio::runtime::Runtime,
    pub(crate) inbox: Arc<Mutex<Vec<LoadResult>>>,
    pub(crate) names_inbox: Arc<Mutex<Vec<NamesResult>>>,
    /// Bumped whenever the data source changes
    pub(crate) names_seq: u64,
    pub(crate) cancel_token: Option<CancellationToken>,
    pub(crate) initial_load_started: bool,
    // Settings window draft
    pub(crate) show_settings: bool,
    pub(crate) draft_embedded: bool,
    pub(crate) draft_url: String,
    pub(crate) draft_timeout_secs: u64,
    pub(crate) settings_error: Option<String>,
    // Toast notification
    pub(crate) toast_message: Option<String>,
    pub(crate) toast_is_error: bool,
    pub(crate) toast_start: Option<std::time::Instant>,
    pub(crate) central_panel_rect: Option<egui::Rect>,
    // Persistence
    pub(crate) settings: Settings,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        dataset: Arc<Dataset>,
        settings: Settings,
        data_dir: PathBuf,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let mut startup_error = None;
        let source = match DataSource::from_settings(&settings, dataset.clone()) {
            Ok(source) => source,
            Err(e) => {
                warn!(error = %e, "Invalid data source settings, using embedded dataset");
                startup_error = Some(format!("Server settings invalid, using embedded data: {}", e));
                DataSource::Embedded(dataset.clone())
            }
        };

        let class_names = dataset.class_names();
        // A remembered class that no longer exists falls back to showing everything.
        // Servers may know classes the embedded dataset does not.
        let class_choice = settings.last_class.clone().filter(|name| {
            matches!(source, DataSource::Remote(_)) || class_names.contains(name)
        });

        let mut app = Self {
            view: ViewState::new(dataset.liquids().to_vec()),
            dataset,
            source,
            class_names,
            class_choice,
            logo_texture: None,
            runtime,
            inbox: Arc::new(Mutex::new(Vec::new())),
            names_inbox: Arc::new(Mutex::new(Vec::new())),
            names_seq: 0,
            cancel_token: None,
            initial_load_started: false,
            show_settings: false,
            draft_embedded: settings.source == SourceKind::Embedded,
            draft_url: settings.api_base_url.clone(),
            draft_timeout_secs: settings.request_timeout_secs,
            settings_error: None,
            toast_message: None,
            toast_is_error: false,
            toast_start: None,
            central_panel_rect: None,
            settings,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        };

        if let Some(message) = startup_error {
            app.show_toast(message, true);
        }
        app
    }

    pub fn save_settings(&mut self) {
        self.settings.window_x = self.window_pos.map(|p| p.x);
        self.settings.window_y = self.window_pos.map(|p| p.y);
        self.settings.window_w = self.window_size.map(|s| s.x);
        self.settings.window_h = self.window_size.map(|s| s.y);
        self.settings.last_class = self.view.displayed_class_name().map(str::to_string);
        self.settings.save(&self.data_dir);
    }
}
