use std::path::Path;

use crate::analysis::{self, CurveView, ProbabilityListing};
use crate::color::ProfessionColors;
use crate::data::model::TenureDataset;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until a file loads successfully).
    pub dataset: Option<TenureDataset>,

    /// Sorted unique professions (cached from the dataset).
    pub professions: Vec<String>,

    /// Stable colour per profession.
    pub profession_colors: ProfessionColors,

    /// Column selected as duration for the overall curve.
    pub duration_col: Option<String>,

    /// Column selected as event indicator for the overall curve.
    pub event_col: Option<String>,

    /// Profession selected for the per-profession curve.
    pub curve_profession: Option<String>,

    /// Profession selected for the probability listing.
    pub prob_profession: Option<String>,

    /// Curve produced by the last generate action.
    pub active_curve: Option<CurveView>,

    /// Probability listing produced by the last show action.
    pub probabilities: Option<ProbabilityListing>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            professions: Vec::new(),
            profession_colors: ProfessionColors::default(),
            duration_col: None,
            event_col: None,
            curve_profession: None,
            prob_profession: None,
            active_curve: None,
            probabilities: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset, initialise selections and colours.
    pub fn set_dataset(&mut self, dataset: TenureDataset) {
        let professions = dataset.professions();
        self.profession_colors = ProfessionColors::new(&professions);
        self.professions = professions.into_iter().collect();

        // Default selections mirror dropdown defaults: first column, first
        // profession.
        self.duration_col = dataset.headers.first().cloned();
        self.event_col = dataset.headers.first().cloned();
        self.curve_profession = self.professions.first().cloned();
        self.prob_profession = self.professions.first().cloned();

        self.active_curve = None;
        self.probabilities = None;
        self.status_message = None;
        self.dataset = Some(dataset);
    }

    /// Attempt to load a file, routing failure to the status line.
    pub fn load_path(&mut self, path: &Path) {
        match crate::data::loader::load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    dataset.len(),
                    dataset.headers
                );
                self.set_dataset(dataset);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e:#}", path.display());
                self.status_message = Some(format!("An error occurred: {e:#}"));
            }
        }
    }

    /// Run the overall-curve operation from the current column selections.
    pub fn generate_overall_curve(&mut self) {
        let Some(ds) = &self.dataset else { return };
        let (Some(duration), Some(event)) = (&self.duration_col, &self.event_col) else {
            return;
        };
        match analysis::overall_curve(ds, duration, event) {
            Ok(view) => {
                self.active_curve = Some(view);
                self.status_message = None;
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Run the profession-curve operation from the current selection.
    pub fn generate_profession_curve(&mut self) {
        let Some(ds) = &self.dataset else { return };
        let Some(profession) = &self.curve_profession else {
            return;
        };
        match analysis::profession_curve(ds, profession) {
            Ok(view) => {
                self.active_curve = Some(view);
                self.status_message = None;
            }
            Err(e) => self.report_error(e),
        }
    }

    /// Run the probability-listing operation from the current selection.
    pub fn show_profession_probabilities(&mut self) {
        let Some(ds) = &self.dataset else { return };
        let Some(profession) = &self.prob_profession else {
            return;
        };
        match analysis::profession_probabilities(ds, profession) {
            Ok(listing) => {
                self.probabilities = Some(listing);
                self.status_message = None;
            }
            Err(e) => self.report_error(e),
        }
    }

    fn report_error(&mut self, e: anyhow::Error) {
        log::error!("{e:#}");
        self.status_message = Some(format!("An error occurred: {e:#}"));
    }
}
