use std::ops::RangeInclusive;

use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Plot, Points};

use crate::color::SeriesColors;
use crate::data::metrics::{
    aggregate_metrics, DashboardMetrics, BEHAVIOR_COLUMNS, COL_ATTENDANCE, COL_STUDY_HOURS,
    COL_TESTS_AVG, SUBJECT_COLUMNS,
};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Dashboard (central panel): 2×2 chart grid
// ---------------------------------------------------------------------------

/// Render the four descriptive charts. Metrics are recomputed from the
/// table each frame; errors (missing column, empty table) render as a
/// message instead of charts.
pub fn dashboard(ui: &mut Ui, state: &AppState) {
    let table = match &state.table {
        Some(t) => t,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Import a student table to view charts  (File → Import…)");
            });
            return;
        }
    };

    let metrics = match aggregate_metrics(table) {
        Ok(m) => m,
        Err(e) => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading(format!("Dashboard unavailable: {e}"));
            });
            return;
        }
    };

    let series: Vec<&str> = SUBJECT_COLUMNS
        .iter()
        .chain(BEHAVIOR_COLUMNS.iter())
        .copied()
        .collect();
    let colors = SeriesColors::new(&series);

    let plot_height = ui.available_height() / 2.0 - 28.0;

    ui.columns(2, |cols: &mut [Ui]| {
        subject_means_bar(&mut cols[0], &metrics, &colors, plot_height);
        score_scatter(
            &mut cols[1],
            "Attendance vs Score",
            COL_ATTENDANCE,
            metrics
                .per_row
                .iter()
                .map(|r| [r.attendance_pct, r.final_score])
                .collect(),
            colors.color_for(COL_ATTENDANCE),
            plot_height,
        );
    });

    ui.columns(2, |cols: &mut [Ui]| {
        score_scatter(
            &mut cols[0],
            "Study Hours vs Score",
            COL_STUDY_HOURS,
            metrics
                .per_row
                .iter()
                .map(|r| [r.study_hours_week, r.final_score])
                .collect(),
            colors.color_for(COL_STUDY_HOURS),
            plot_height,
        );
        score_scatter(
            &mut cols[1],
            "Class Tests vs Score",
            COL_TESTS_AVG,
            metrics
                .per_row
                .iter()
                .map(|r| [r.class_tests_avg, r.final_score])
                .collect(),
            colors.color_for(COL_TESTS_AVG),
            plot_height,
        );
    });
}

/// Bar chart of the three subject column means.
fn subject_means_bar(ui: &mut Ui, metrics: &DashboardMetrics, colors: &SeriesColors, height: f32) {
    ui.strong("Subject-wise averages");

    let bars: Vec<Bar> = metrics
        .subject_means
        .iter()
        .enumerate()
        .map(|(i, (subject, mean))| {
            Bar::new(i as f64, *mean)
                .name(subject)
                .fill(colors.color_for(subject))
                .width(0.6)
        })
        .collect();

    let labels: Vec<String> = metrics
        .subject_means
        .iter()
        .map(|(subject, _)| subject.clone())
        .collect();

    Plot::new("subject_means")
        .height(height)
        .y_axis_label("Mean score")
        .allow_drag(false)
        .allow_scroll(false)
        .x_axis_formatter(move |mark: GridMark, _range: &RangeInclusive<f64>| {
            let idx = mark.value.round();
            if idx < 0.0 || (mark.value - idx).abs() > 0.2 {
                return String::new();
            }
            labels.get(idx as usize).cloned().unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Scatter of one behavior metric against the per-row final score.
fn score_scatter(
    ui: &mut Ui,
    title: &str,
    x_label: &str,
    points: Vec<[f64; 2]>,
    color: Color32,
    height: f32,
) {
    ui.strong(title);

    Plot::new(title)
        .height(height)
        .x_axis_label(x_label)
        .y_axis_label("final_score")
        .show(ui, |plot_ui| {
            plot_ui.points(Points::new(points).radius(2.5).color(color));
        });
}
