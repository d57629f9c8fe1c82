//! Selection state and load sequencing
//!
//! `Selection` holds the displayed class and the clicked parameter. A
//! parameter can only be shown for the class currently displayed, so
//! changing the class always clears it.
//!
//! `ViewState` wraps the selection with the displayed liquid list and the
//! load lifecycle `Idle -> Loading -> Displayed | Errored`. Every load gets a
//! sequence number and only the latest one may change what is displayed.

use crate::source::{FetchError, Loaded};
use crate::types::{LiquidClass, LiquidRecord, ParameterKind, ParameterSetting};

#[derive(Debug, Clone, Default)]
pub struct Selection {
    class: Option<LiquidClass>,
    parameter: Option<ParameterKind>,
    /// Set when a parameter is activated, until the detail block is scrolled into view
    reveal_pending: bool,
}

impl Selection {
    pub fn select_class(&mut self, class: Option<LiquidClass>) {
        self.class = class;
        self.parameter = None;
        self.reveal_pending = false;
    }

    /// Ignored while no class is displayed
    pub fn select_parameter(&mut self, kind: ParameterKind) {
        if self.class.is_some() {
            self.parameter = Some(kind);
            self.reveal_pending = true;
        }
    }

    /// True once after each parameter activation
    pub fn take_reveal(&mut self) -> bool {
        std::mem::take(&mut self.reveal_pending)
    }

    pub fn class(&self) -> Option<&LiquidClass> {
        self.class.as_ref()
    }

    pub fn parameter(&self) -> Option<ParameterKind> {
        self.parameter
    }

    /// The settings block to show, if any
    pub fn parameter_detail(&self) -> Option<(ParameterKind, &ParameterSetting)> {
        let kind = self.parameter?;
        self.class.as_ref().map(|class| (kind, class.parameter(kind)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    Idle,
    Loading { seq: u64 },
    Displayed,
    Errored,
}

/// A finished load, delivered back to the UI thread
#[derive(Debug)]
pub struct LoadResult {
    pub seq: u64,
    pub requested: Option<String>,
    pub result: Result<Loaded, FetchError>,
}

/// What applying a [`LoadResult`] did
#[derive(Debug, PartialEq)]
pub enum Applied {
    Displayed,
    /// Nothing changed; carries the message for the user
    Failed(&'static str),
    /// An older request finished after a newer one was issued
    Stale,
}

#[derive(Debug)]
pub struct ViewState {
    pub selection: Selection,
    liquids: Vec<LiquidRecord>,
    phase: LoadPhase,
    latest_seq: u64,
}

impl ViewState {
    pub fn new(liquids: Vec<LiquidRecord>) -> Self {
        Self {
            selection: Selection::default(),
            liquids,
            phase: LoadPhase::Idle,
            latest_seq: 0,
        }
    }

    pub fn liquids(&self) -> &[LiquidRecord] {
        &self.liquids
    }

    pub fn phase(&self) -> LoadPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, LoadPhase::Loading { .. })
    }

    pub fn displayed_class_name(&self) -> Option<&str> {
        self.selection.class().map(|class| class.name.as_str())
    }

    /// Issue the sequence number for a new load. Supersedes any load in flight.
    pub fn begin_load(&mut self) -> u64 {
        self.latest_seq += 1;
        self.phase = LoadPhase::Loading {
            seq: self.latest_seq,
        };
        self.latest_seq
    }

    /// Any user action clears a previous error
    pub fn acknowledge(&mut self) {
        if self.phase == LoadPhase::Errored {
            self.phase = LoadPhase::Idle;
        }
    }

    pub fn apply(&mut self, load: LoadResult) -> Applied {
        if load.seq != self.latest_seq {
            return Applied::Stale;
        }

        match load.result {
            Ok(loaded) => {
                self.selection.select_class(loaded.class);
                self.liquids = loaded.liquids;
                self.phase = LoadPhase::Displayed;
                Applied::Displayed
            }
            // Only superseded loads are cancelled, and those are stale.
            Err(FetchError::Cancelled) => Applied::Stale,
            Err(_) => {
                self.phase = LoadPhase::Errored;
                Applied::Failed(failure_message(load.requested.as_deref()))
            }
        }
    }
}

pub fn failure_message(requested: Option<&str>) -> &'static str {
    match requested {
        Some(_) => "Failed to load liquid class details",
        None => "Failed to load liquids data",
    }
}

/// A finished class-name fetch. `seq` identifies the data source it came from.
#[derive(Debug)]
pub struct NamesResult {
    pub seq: u64,
    pub result: Result<Vec<String>, FetchError>,
}

/// Selector entries for a finished fetch. A failure falls back to `fallback`
/// and carries the message for the user.
pub fn resolve_class_names(
    result: Result<Vec<String>, FetchError>,
    fallback: &[String],
) -> (Vec<String>, Option<&'static str>) {
    match result {
        Ok(names) => (names, None),
        Err(FetchError::Cancelled) => (fallback.to_vec(), None),
        Err(_) => (fallback.to_vec(), Some("Failed to load liquid classes")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use reqwest::StatusCode;

    fn loaded(dataset: &Dataset, class: Option<&str>) -> Loaded {
        Loaded {
            class: class.and_then(|name| dataset.find_class(name).cloned()),
            liquids: dataset.liquids_in_class(class),
        }
    }

    fn failure() -> FetchError {
        FetchError::Status {
            url: "http://lab/api/liquid-class/Serum".into(),
            status: StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn ok(seq: u64, dataset: &Dataset, class: &str) -> LoadResult {
        LoadResult {
            seq,
            requested: Some(class.into()),
            result: Ok(loaded(dataset, Some(class))),
        }
    }

    #[test]
    fn parameter_needs_a_class() {
        let mut selection = Selection::default();
        selection.select_parameter(ParameterKind::Blowout);
        assert_eq!(selection.parameter(), None);
        assert!(selection.parameter_detail().is_none());
    }

    #[test]
    fn parameter_detail_shows_that_class_settings() {
        let dataset = Dataset::builtin();
        let mut selection = Selection::default();
        selection.select_class(dataset.find_class("Viscous").cloned());
        selection.select_parameter(ParameterKind::AirGap);

        let (kind, setting) = selection.parameter_detail().unwrap();
        assert_eq!(kind, ParameterKind::AirGap);
        assert_eq!(setting.label, "Small");
        assert_eq!(setting.display_value, "5-10 µL");
        assert!(setting.instrument_settings.starts_with("Pre-Aspirate Air Gap: 0-5 µL"));
    }

    #[test]
    fn every_parameter_shows_its_own_block() {
        let dataset = Dataset::builtin();
        let class = dataset.find_class("Serum").cloned().unwrap();
        let mut selection = Selection::default();
        selection.select_class(Some(class.clone()));
        for kind in ParameterKind::ALL {
            selection.select_parameter(kind);
            let (_, setting) = selection.parameter_detail().unwrap();
            assert_eq!(setting, class.parameter(kind));
        }
    }

    #[test]
    fn changing_class_hides_parameter_detail() {
        let dataset = Dataset::builtin();
        let mut selection = Selection::default();
        selection.select_class(dataset.find_class("Viscous").cloned());
        selection.select_parameter(ParameterKind::TipType);
        selection.select_class(dataset.find_class("Aqueous").cloned());
        assert!(selection.parameter_detail().is_none());

        selection.select_parameter(ParameterKind::TipType);
        selection.select_class(None);
        assert!(selection.parameter_detail().is_none());
    }

    #[test]
    fn successful_load_replaces_table_and_class() {
        let dataset = Dataset::builtin();
        let mut view = ViewState::new(dataset.liquids().to_vec());
        let seq = view.begin_load();
        assert!(view.is_loading());
        assert_eq!(view.apply(ok(seq, &dataset, "Organic-Low")), Applied::Displayed);
        assert_eq!(view.phase(), LoadPhase::Displayed);
        assert_eq!(view.displayed_class_name(), Some("Organic-Low"));
        assert_eq!(view.liquids().len(), 7);
    }

    #[test]
    fn unknown_class_hides_panel() {
        let dataset = Dataset::builtin();
        let mut view = ViewState::new(dataset.liquids().to_vec());
        let seq = view.begin_load();
        view.apply(ok(seq, &dataset, "Cryogenic"));
        assert!(view.selection.class().is_none());
        assert!(view.liquids().is_empty());
    }

    #[test]
    fn failed_load_leaves_previous_display_and_reports_once() {
        let dataset = Dataset::builtin();
        let mut view = ViewState::new(dataset.liquids().to_vec());
        let seq = view.begin_load();
        view.apply(ok(seq, &dataset, "Viscous"));
        view.selection.select_parameter(ParameterKind::AirGap);

        let seq = view.begin_load();
        let applied = view.apply(LoadResult {
            seq,
            requested: Some("Serum".into()),
            result: Err(failure()),
        });

        assert_eq!(applied, Applied::Failed("Failed to load liquid class details"));
        assert_eq!(view.phase(), LoadPhase::Errored);
        assert_eq!(view.displayed_class_name(), Some("Viscous"));
        assert_eq!(view.selection.parameter(), Some(ParameterKind::AirGap));
        assert_eq!(view.liquids().len(), 2);

        view.acknowledge();
        assert_eq!(view.phase(), LoadPhase::Idle);
    }

    #[test]
    fn stale_results_are_discarded() {
        let dataset = Dataset::builtin();
        let mut view = ViewState::new(dataset.liquids().to_vec());
        let first = view.begin_load();
        let second = view.begin_load();

        // The newer request answers first; the older one must not overwrite it.
        assert_eq!(view.apply(ok(second, &dataset, "Serum")), Applied::Displayed);
        assert_eq!(view.apply(ok(first, &dataset, "Viscous")), Applied::Stale);
        assert_eq!(view.displayed_class_name(), Some("Serum"));

        let stale_failure = LoadResult {
            seq: first,
            requested: Some("Viscous".into()),
            result: Err(failure()),
        };
        assert_eq!(view.apply(stale_failure), Applied::Stale);
        assert_eq!(view.phase(), LoadPhase::Displayed);
    }

    #[test]
    fn cancelled_load_is_silent() {
        let mut view = ViewState::new(Vec::new());
        let seq = view.begin_load();
        let applied = view.apply(LoadResult {
            seq,
            requested: None,
            result: Err(FetchError::Cancelled),
        });
        assert_eq!(applied, Applied::Stale);
    }

    #[test]
    fn liquids_only_failure_message() {
        assert_eq!(failure_message(None), "Failed to load liquids data");
    }

    #[test]
    fn server_class_names_replace_the_selector() {
        let fallback = Dataset::builtin().class_names();
        let served = vec!["Aqueous".to_string(), "Cryogenic".to_string()];
        let (names, message) = resolve_class_names(Ok(served.clone()), &fallback);
        assert_eq!(names, served);
        assert_eq!(message, None);
    }

    #[test]
    fn class_name_failure_falls_back_with_one_message() {
        let fallback = Dataset::builtin().class_names();
        let (names, message) = resolve_class_names(Err(failure()), &fallback);
        assert_eq!(names, fallback);
        assert_eq!(message, Some("Failed to load liquid classes"));

        let (names, message) = resolve_class_names(Err(FetchError::Cancelled), &fallback);
        assert_eq!(names, fallback);
        assert_eq!(message, None);
    }

    #[test]
    fn activating_a_parameter_reveals_its_detail_once() {
        let dataset = Dataset::builtin();
        let mut selection = Selection::default();
        selection.select_parameter(ParameterKind::Blowout);
        assert!(!selection.take_reveal());

        selection.select_class(dataset.find_class("Viscous").cloned());
        assert!(!selection.take_reveal());
        selection.select_parameter(ParameterKind::Blowout);
        assert!(selection.take_reveal());
        assert!(!selection.take_reveal());

        selection.select_parameter(ParameterKind::TipType);
        selection.select_class(dataset.find_class("Aqueous").cloned());
        assert!(!selection.take_reveal());
    }
}
