//! Background loading of class selections and selector entries

use super::App;
use crate::selection::{resolve_class_names, Applied, LoadResult, NamesResult};
use crate::source::{DataSource, FetchError};
use eframe::egui;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info};

impl App {
    /// Resolve `class` through the data source on the runtime. Any load still
    /// in flight is cancelled and its result will be discarded.
    pub fn request_class(&mut self, ctx: &egui::Context, class: Option<String>) {
        self.view.acknowledge();
        if let Some(token) = self.cancel_token.take() {
            token.cancel();
        }

        let seq = self.view.begin_load();
        let token = CancellationToken::new();
        self.cancel_token = Some(token.clone());

        let source = self.source.clone();
        let inbox = self.inbox.clone();
        let ctx = ctx.clone();

        info!(seq, class = ?class, source = %source.describe(), "Loading selection");
        self.runtime.spawn(async move {
            let result = tokio::select! {
                _ = token.cancelled() => Err(FetchError::Cancelled),
                loaded = source.load(class.as_deref()) => loaded,
            };
            if let Ok(mut pending) = inbox.lock() {
                pending.push(LoadResult {
                    seq,
                    requested: class,
                    result,
                });
            }
            ctx.request_repaint();
        });
    }

    /// Refresh the selector entries for the current data source. The embedded
    /// names apply immediately; a server is asked for its list.
    pub fn request_class_names(&mut self, ctx: &egui::Context) {
        self.names_seq += 1;
        let seq = self.names_seq;
        let DataSource::Remote(_) = &self.source else {
            self.class_names = self.dataset.class_names();
            return;
        };

        let source = self.source.clone();
        let inbox = self.names_inbox.clone();
        let ctx = ctx.clone();
        self.runtime.spawn(async move {
            let result = source.class_names().await;
            if let Ok(mut pending) = inbox.lock() {
                pending.push(NamesResult { seq, result });
            }
            ctx.request_repaint();
        });
    }

    /// Apply finished loads. Called once per frame.
    pub fn poll_load_results(&mut self) {
        let finished: Vec<LoadResult> = match self.inbox.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => return,
        };

        let names: Vec<NamesResult> = match self.names_inbox.lock() {
            Ok(mut pending) => std::mem::take(&mut *pending),
            Err(_) => Vec::new(),
        };
        for fetched in names {
            if fetched.seq != self.names_seq {
                debug!(seq = fetched.seq, "Discarded class names from a previous source");
                continue;
            }
            if let Err(e) = &fetched.result {
                error!(error = %e, "Loading class names failed, using embedded list");
            }
            let fallback = self.dataset.class_names();
            let (names, message) = resolve_class_names(fetched.result, &fallback);
            debug!(count = names.len(), "Class selector updated");
            self.class_names = names;
            if let Some(message) = message {
                self.show_toast(message, true);
            }
        }

        for load in finished {
            let seq = load.seq;
            let requested = load.requested.clone();
            if let Err(e) = &load.result {
                if !matches!(e, FetchError::Cancelled) {
                    error!(seq, class = ?requested, error = %e, "Load failed");
                }
            }

            match self.view.apply(load) {
                Applied::Displayed => {
                    self.cancel_token = None;
                    debug!(
                        seq,
                        class = ?self.view.displayed_class_name(),
                        liquids = self.view.liquids().len(),
                        "Selection displayed"
                    );
                    self.class_choice = requested;
                }
                Applied::Failed(message) => {
                    self.cancel_token = None;
                    // Keep the selector consistent with what is still on screen
                    self.class_choice = self.view.displayed_class_name().map(str::to_string);
                    self.show_toast(message, true);
                }
                Applied::Stale => debug!(seq, "Discarded superseded load"),
            }
        }
    }
}
