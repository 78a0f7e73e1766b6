use std::collections::BTreeMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use serde_json::Value as JsonValue;

use super::error::DataError;
use super::model::{CellValue, StudentRecord, StudentTable};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a student table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`          – comma-delimited, header row with column names
/// * `.tsv` / `.tab` – tab-delimited, header row with column names
/// * `.json`         – `[{ "math": 70, "name": "...", ... }, ...]`
///
/// No schema is enforced here: whatever columns the file carries are
/// loaded as-is. Missing expected columns only surface when a dependent
/// computation looks them up.
pub fn load_table(path: &Path) -> Result<StudentTable, DataError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_delimited(path, b','),
        "tsv" | "tab" => load_delimited(path, b'\t'),
        "json" => load_json(path),
        other => Err(DataError::UnsupportedFormat {
            ext: other.to_string(),
        }),
    }
}

// ---------------------------------------------------------------------------
// Delimited loader (CSV / TSV)
// ---------------------------------------------------------------------------

fn load_delimited(path: &Path, delimiter: u8) -> Result<StudentTable, DataError> {
    let file = File::open(path).map_err(|source| DataError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_delimited(file, delimiter)
}

/// Parse delimited text with a header row into a table. Every data row
/// must have the same field count as the header; the csv reader rejects
/// ragged rows, which we surface as a parse error with row context.
fn parse_delimited<R: Read>(input: R, delimiter: u8) -> Result<StudentTable, DataError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .from_reader(input);

    let columns: Vec<String> = reader
        .headers()
        .map_err(|e| DataError::Parse(format!("reading header row: {e}")))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows = Vec::new();
    for (row_no, result) in reader.records().enumerate() {
        let record = result.map_err(|e| DataError::Parse(format!("row {row_no}: {e}")))?;

        let mut cells = BTreeMap::new();
        for (col_idx, field) in record.iter().enumerate() {
            cells.insert(columns[col_idx].clone(), parse_cell(field));
        }
        rows.push(StudentRecord { cells });
    }

    Ok(StudentTable::new(columns, rows))
}

/// Type a single cell by successive parse attempts.
fn parse_cell(s: &str) -> CellValue {
    let s = s.trim();
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "name": "Asha", "math": 72, "science": 64.5, "attendance_pct": 91 },
///   ...
/// ]
/// ```
///
/// The column set is the union of all keys, in first-seen order.
fn load_json(path: &Path) -> Result<StudentTable, DataError> {
    let text = std::fs::read_to_string(path).map_err(|source| DataError::FileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_json(&text)
}

fn parse_json(text: &str) -> Result<StudentTable, DataError> {
    let root: JsonValue =
        serde_json::from_str(text).map_err(|e| DataError::Parse(format!("parsing JSON: {e}")))?;

    let records = root
        .as_array()
        .ok_or_else(|| DataError::Parse("expected top-level JSON array".to_string()))?;

    let mut columns: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for (row_no, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .ok_or_else(|| DataError::Parse(format!("row {row_no} is not a JSON object")))?;

        let mut cells = BTreeMap::new();
        for (key, val) in obj {
            if !columns.iter().any(|c| c == key) {
                columns.push(key.clone());
            }
            cells.insert(key.clone(), json_to_cell(val));
        }
        rows.push(StudentRecord { cells });
    }

    Ok(StudentTable::new(columns, rows))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}
