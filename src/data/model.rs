use std::collections::BTreeMap;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell. The loader types each cell independently, so
/// a column may mix variants (e.g. a mostly-numeric column with a blank).
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v:.1}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Try to interpret the cell as an `f64` for metric computation.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// StudentRecord – one row of the table
// ---------------------------------------------------------------------------

/// A single student record (one data row of the source file).
#[derive(Debug, Clone)]
pub struct StudentRecord {
    /// column_name → cell value. Every header column has an entry.
    pub cells: BTreeMap<String, CellValue>,
}

impl StudentRecord {
    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }

    /// Numeric view of a cell; `None` when the column is absent or the
    /// cell is not a number.
    pub fn numeric(&self, column: &str) -> Option<f64> {
        self.cells.get(column).and_then(CellValue::as_f64)
    }
}

// ---------------------------------------------------------------------------
// StudentTable – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table. Replaced wholesale on re-import, never mutated
/// row-by-row.
#[derive(Debug, Clone)]
pub struct StudentTable {
    /// Column names in header order (for display).
    pub columns: Vec<String>,
    /// All records (rows), in file order.
    pub rows: Vec<StudentRecord>,
}

impl StudentTable {
    pub fn new(columns: Vec<String>, rows: Vec<StudentRecord>) -> Self {
        StudentTable { columns, rows }
    }

    /// Whether the header contains the given column.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no records.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_f64_covers_numeric_variants_only() {
        assert_eq!(CellValue::Integer(42).as_f64(), Some(42.0));
        assert_eq!(CellValue::Float(7.5).as_f64(), Some(7.5));
        assert_eq!(CellValue::String("42".into()).as_f64(), None);
        assert_eq!(CellValue::Bool(true).as_f64(), None);
        assert_eq!(CellValue::Null.as_f64(), None);
    }

    #[test]
    fn display_renders_null_as_blank() {
        assert_eq!(CellValue::Null.to_string(), "");
        assert_eq!(CellValue::Float(88.25).to_string(), "88.2");
        assert_eq!(CellValue::String("Priya".into()).to_string(), "Priya");
    }
}
