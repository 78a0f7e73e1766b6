use super::error::DataError;
use super::model::{StudentRecord, StudentTable};

/// The three graded subjects, in display order.
pub const SUBJECT_COLUMNS: [&str; 3] = [COL_MATH, COL_SCIENCE, COL_ENGLISH];

pub const COL_MATH: &str = "math";
pub const COL_SCIENCE: &str = "science";
pub const COL_ENGLISH: &str = "english";
pub const COL_ATTENDANCE: &str = "attendance_pct";
pub const COL_STUDY_HOURS: &str = "study_hours_week";
pub const COL_TESTS_AVG: &str = "class_tests_avg";

/// Behavior metrics paired against the final score on the dashboard.
pub const BEHAVIOR_COLUMNS: [&str; 3] = [COL_ATTENDANCE, COL_STUDY_HOURS, COL_TESTS_AVG];

// ---------------------------------------------------------------------------
// Aggregate metrics over the loaded table
// ---------------------------------------------------------------------------

/// One row's contribution to the dashboard scatter charts.
#[derive(Debug, Clone, PartialEq)]
pub struct RowMetrics {
    pub attendance_pct: f64,
    pub study_hours_week: f64,
    pub class_tests_avg: f64,
    /// mean(math, science, english) for this row.
    pub final_score: f64,
}

/// Everything the dashboard draws.
#[derive(Debug, Clone)]
pub struct DashboardMetrics {
    /// (subject, column mean across all rows), in `SUBJECT_COLUMNS` order.
    pub subject_means: Vec<(String, f64)>,
    pub per_row: Vec<RowMetrics>,
}

/// Compute dashboard aggregates over the whole table.
///
/// Fails with `MissingColumn` when the header lacks a required column,
/// `EmptyTable` on zero rows (a mean over nothing has no truthful value),
/// and `NonNumeric` when a required cell cannot be read as a number.
/// Columns outside the required set are ignored.
pub fn aggregate_metrics(table: &StudentTable) -> Result<DashboardMetrics, DataError> {
    for col in SUBJECT_COLUMNS.iter().chain(BEHAVIOR_COLUMNS.iter()) {
        if !table.has_column(col) {
            return Err(DataError::MissingColumn {
                column: col.to_string(),
            });
        }
    }
    if table.is_empty() {
        return Err(DataError::EmptyTable);
    }

    let mut subject_sums = [0.0f64; SUBJECT_COLUMNS.len()];
    let mut per_row = Vec::with_capacity(table.len());

    for (row_no, record) in table.rows.iter().enumerate() {
        let mut subject_total = 0.0;
        for (i, col) in SUBJECT_COLUMNS.iter().enumerate() {
            let v = numeric_cell(record, col, row_no)?;
            subject_sums[i] += v;
            subject_total += v;
        }
        let final_score = subject_total / SUBJECT_COLUMNS.len() as f64;

        per_row.push(RowMetrics {
            attendance_pct: numeric_cell(record, COL_ATTENDANCE, row_no)?,
            study_hours_week: numeric_cell(record, COL_STUDY_HOURS, row_no)?,
            class_tests_avg: numeric_cell(record, COL_TESTS_AVG, row_no)?,
            final_score,
        });
    }

    let n = table.len() as f64;
    let subject_means = SUBJECT_COLUMNS
        .iter()
        .zip(subject_sums)
        .map(|(col, sum)| (col.to_string(), sum / n))
        .collect();

    Ok(DashboardMetrics {
        subject_means,
        per_row,
    })
}

fn numeric_cell(record: &StudentRecord, column: &str, row: usize) -> Result<f64, DataError> {
    record.numeric(column).ok_or_else(|| DataError::NonNumeric {
        column: column.to_string(),
        row,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::CellValue;
    use std::collections::BTreeMap;

    fn record(cells: &[(&str, CellValue)]) -> StudentRecord {
        StudentRecord {
            cells: cells
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn numeric_record(values: [f64; 6]) -> StudentRecord {
        let cols = [
            COL_MATH,
            COL_SCIENCE,
            COL_ENGLISH,
            COL_ATTENDANCE,
            COL_STUDY_HOURS,
            COL_TESTS_AVG,
        ];
        record(
            &cols
                .iter()
                .zip(values)
                .map(|(c, v)| (*c, CellValue::Float(v)))
                .collect::<Vec<_>>(),
        )
    }

    fn full_header() -> Vec<String> {
        SUBJECT_COLUMNS
            .iter()
            .chain(BEHAVIOR_COLUMNS.iter())
            .map(|c| c.to_string())
            .collect()
    }

    #[test]
    fn means_and_per_row_scores_over_known_table() {
        let table = StudentTable::new(
            full_header(),
            vec![
                numeric_record([70.0, 80.0, 90.0, 95.0, 10.0, 75.0]),
                numeric_record([50.0, 60.0, 70.0, 65.0, 4.0, 55.0]),
            ],
        );

        let metrics = aggregate_metrics(&table).unwrap();

        assert_eq!(
            metrics.subject_means,
            vec![
                ("math".to_string(), 60.0),
                ("science".to_string(), 70.0),
                ("english".to_string(), 80.0),
            ]
        );
        assert_eq!(metrics.per_row.len(), 2);
        assert_eq!(metrics.per_row[0].final_score, 80.0);
        assert_eq!(metrics.per_row[1].final_score, 60.0);
        assert_eq!(metrics.per_row[1].attendance_pct, 65.0);
        assert_eq!(metrics.per_row[1].study_hours_week, 4.0);
        assert_eq!(metrics.per_row[1].class_tests_avg, 55.0);
    }

    #[test]
    fn empty_table_is_an_explicit_error() {
        let table = StudentTable::new(full_header(), Vec::new());
        let err = aggregate_metrics(&table).unwrap_err();
        assert!(matches!(err, DataError::EmptyTable));
    }

    #[test]
    fn missing_required_column_is_named() {
        let mut columns = full_header();
        columns.retain(|c| c != "english");
        let table = StudentTable::new(columns, Vec::new());

        let err = aggregate_metrics(&table).unwrap_err();
        match err {
            DataError::MissingColumn { column } => assert_eq!(column, "english"),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn non_numeric_cell_is_located() {
        let mut bad = numeric_record([50.0, 60.0, 70.0, 80.0, 6.0, 55.0]);
        bad.cells
            .insert("math".to_string(), CellValue::String("absent".into()));

        let table = StudentTable::new(
            full_header(),
            vec![numeric_record([70.0, 70.0, 70.0, 90.0, 8.0, 70.0]), bad],
        );

        let err = aggregate_metrics(&table).unwrap_err();
        match err {
            DataError::NonNumeric { column, row } => {
                assert_eq!(column, "math");
                assert_eq!(row, 1);
            }
            other => panic!("expected NonNumeric, got {other:?}"),
        }
    }

    #[test]
    fn extra_columns_are_ignored() {
        let mut rec = numeric_record([70.0, 70.0, 70.0, 90.0, 8.0, 70.0]);
        rec.cells
            .insert("name".to_string(), CellValue::String("Asha".into()));
        let mut columns = full_header();
        columns.push("name".to_string());

        let metrics = aggregate_metrics(&StudentTable::new(columns, vec![rec])).unwrap();
        assert_eq!(metrics.per_row[0].final_score, 70.0);
    }
}
