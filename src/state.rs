use std::path::Path;

use crate::data::loader;
use crate::data::model::StudentTable;
use crate::predict::{predict, PredictionInput, PredictionResult};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Data,
    Dashboard,
    Predict,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded table (None until a file is imported).
    pub table: Option<StudentTable>,

    /// Currently selected tab.
    pub active_tab: Tab,

    /// The seven prediction inputs, edited in place by the Predict form.
    pub predict_form: PredictionInput,

    /// Result of the last Predict click.
    pub prediction: Option<PredictionResult>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            active_tab: Tab::Data,
            predict_form: PredictionInput::default(),
            prediction: None,
            status_message: None,
        }
    }
}

impl AppState {
    /// Replace the loaded table wholesale. The only table mutation.
    pub fn set_table(&mut self, table: StudentTable) {
        self.status_message = None;
        self.table = Some(table);
    }

    /// Load a file and swap in the new table on success. A failed load
    /// leaves the previously loaded table untouched and reports on the
    /// status line.
    pub fn import_file(&mut self, path: &Path) {
        match loader::load_table(path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} records with columns {:?}",
                    table.len(),
                    table.columns
                );
                self.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load {}: {e}", path.display());
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// Score the current form values.
    pub fn run_prediction(&mut self) {
        self.prediction = Some(predict(&self.predict_form));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, StudentRecord};
    use std::collections::BTreeMap;

    fn one_row_table() -> StudentTable {
        let mut cells = BTreeMap::new();
        cells.insert("math".to_string(), CellValue::Integer(70));
        StudentTable::new(vec!["math".to_string()], vec![StudentRecord { cells }])
    }

    #[test]
    fn failed_import_keeps_previous_table() {
        let mut state = AppState::default();
        state.set_table(one_row_table());

        state.import_file(Path::new("no/such/file.csv"));

        let table = state.table.as_ref().expect("table should survive");
        assert_eq!(table.len(), 1);
        assert!(state.status_message.as_deref().unwrap().starts_with("Error:"));
    }

    #[test]
    fn successful_set_table_clears_status() {
        let mut state = AppState::default();
        state.status_message = Some("Error: old".to_string());
        state.set_table(one_row_table());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn run_prediction_scores_the_form() {
        let mut state = AppState::default();
        state.run_prediction();
        let result = state.prediction.expect("prediction stored");
        assert!((result.final_score - 71.0).abs() < 1e-9);
    }
}
