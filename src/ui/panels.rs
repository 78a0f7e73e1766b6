use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::{AppState, Tab};

// Table constants
const TABLE_HEADER_HEIGHT: f32 = 20.0;
const TABLE_ROW_HEIGHT: f32 = 18.0;
const TABLE_COLUMN_WIDTH: f32 = 110.0;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar: import, tab switch, status.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Import…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.active_tab, Tab::Data, "Data");
        ui.selectable_value(&mut state.active_tab, Tab::Dashboard, "Dashboard");
        ui.selectable_value(&mut state.active_tab, Tab::Predict, "Predict");

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} records, {} columns",
                table.len(),
                table.columns.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Data tab – the raw table
// ---------------------------------------------------------------------------

/// Render the loaded table as a striped grid, one column per header entry.
pub fn data_table(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Import a student table to begin  (File → Import…)");
            });
            return;
        }
    };

    TableBuilder::new(ui)
        .striped(true)
        .columns(
            Column::initial(TABLE_COLUMN_WIDTH).resizable(true),
            table.columns.len(),
        )
        .header(TABLE_HEADER_HEIGHT, |mut header| {
            for col in &table.columns {
                header.col(|ui| {
                    ui.strong(col);
                });
            }
        })
        .body(|body| {
            body.rows(TABLE_ROW_HEIGHT, table.len(), |mut row| {
                let record = &table.rows[row.index()];
                for col in &table.columns {
                    row.col(|ui| {
                        let text = record
                            .get(col)
                            .map(|cell| cell.to_string())
                            .unwrap_or_default();
                        ui.label(text);
                    });
                }
            });
        });
}

// ---------------------------------------------------------------------------
// Predict tab – form and result
// ---------------------------------------------------------------------------

/// Render the prediction form and the latest result.
pub fn predict_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Expected score");
    ui.add_space(4.0);

    let form = &mut state.predict_form;
    let fields: [(&str, &mut f64); 7] = [
        ("Attendance %", &mut form.attendance_pct),
        ("Study hours/week", &mut form.study_hours_week),
        ("Class tests avg", &mut form.class_tests_avg),
        ("Previous term avg", &mut form.previous_term_avg),
        ("Math current", &mut form.math),
        ("Science current", &mut form.science),
        ("English current", &mut form.english),
    ];

    egui::Grid::new("predict_form")
        .num_columns(2)
        .spacing([12.0, 6.0])
        .show(ui, |ui: &mut Ui| {
            for (label, value) in fields {
                ui.label(label);
                ui.add(egui::DragValue::new(value).speed(0.5));
                ui.end_row();
            }
        });

    ui.add_space(8.0);
    if ui.button("Predict").clicked() {
        state.run_prediction();
    }

    if let Some(result) = &state.prediction {
        ui.add_space(8.0);
        ui.separator();
        ui.label(format!("Expected Final Score: {:.1}", result.final_score));
        ui.label(format!("Pass/Fail Prediction: {}", result.pass_fail));
        ui.add_space(4.0);
        for alert in &result.alerts {
            if result.is_clear() {
                ui.label(alert);
            } else {
                ui.label(RichText::new(alert).color(Color32::RED));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open student records")
        .add_filter("Supported files", &["csv", "tsv", "tab", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("TSV", &["tsv", "tab"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        state.import_file(&path);
    }
}
