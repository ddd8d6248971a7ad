use std::collections::BTreeSet;
use std::fmt;

use thiserror::Error;

/// Column holding the profession category used by the per-profession views.
pub const PROFESSION_COLUMN: &str = "profession";

/// Column holding tenure in months, used whenever no explicit duration
/// column has been chosen (the per-profession views).
pub const TENURE_COLUMN: &str = "stag";

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed cell value inferred from the CSV text.
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
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, ""),
        }
    }
}

impl CellValue {
    /// Infer the cell type from raw CSV text.
    pub fn parse(s: &str) -> CellValue {
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
        // Pandas-style CSV exports write booleans as True/False; accept any
        // casing.
        if s.eq_ignore_ascii_case("true") {
            return CellValue::Bool(true);
        }
        if s.eq_ignore_ascii_case("false") {
            return CellValue::Bool(false);
        }
        CellValue::String(s.to_string())
    }

    /// Interpret the cell as an `f64` if it is numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Interpret the cell as an event flag. Numeric cells are coerced the
    /// way lifelines-style fitters do: zero means censored, anything else
    /// means the event was observed.
    pub fn as_event(&self) -> Option<bool> {
        match self {
            CellValue::Bool(b) => Some(*b),
            CellValue::Integer(i) => Some(*i != 0),
            CellValue::Float(v) => Some(*v != 0.0),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// Errors for column extraction
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum DataError {
    #[error("column '{0}' not found in dataset")]
    MissingColumn(String),

    #[error("column '{column}', row {row}: '{value}' is not numeric")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },
}

// ---------------------------------------------------------------------------
// TenureDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed table: one header row plus dynamically typed cells.
#[derive(Debug, Clone)]
pub struct TenureDataset {
    /// Ordered column names from the CSV header.
    pub headers: Vec<String>,
    /// Row-major cells; every row has `headers.len()` cells.
    pub rows: Vec<Vec<CellValue>>,
}

impl TenureDataset {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        TenureDataset { headers, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name.
    pub fn column_index(&self, name: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::MissingColumn(name.to_string()))
    }

    /// Extract a numeric column, optionally restricted to a row subset.
    ///
    /// `rows = None` means all rows; `rows = Some(indices)` keeps the order
    /// of `indices`.
    pub fn numeric_column(
        &self,
        name: &str,
        rows: Option<&[usize]>,
    ) -> Result<Vec<f64>, DataError> {
        let col = self.column_index(name)?;
        let extract = |row: usize| -> Result<f64, DataError> {
            self.rows[row][col]
                .as_f64()
                .ok_or_else(|| DataError::NonNumeric {
                    column: name.to_string(),
                    row,
                    value: self.rows[row][col].to_string(),
                })
        };
        match rows {
            Some(indices) => indices.iter().map(|&r| extract(r)).collect(),
            None => (0..self.len()).map(extract).collect(),
        }
    }

    /// Extract an event-indicator column over all rows.
    pub fn event_column(&self, name: &str) -> Result<Vec<bool>, DataError> {
        let col = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                cells[col].as_event().ok_or_else(|| DataError::NonNumeric {
                    column: name.to_string(),
                    row,
                    value: cells[col].to_string(),
                })
            })
            .collect()
    }

    /// Sorted unique values of the profession column. Empty when the
    /// column is absent.
    pub fn professions(&self) -> BTreeSet<String> {
        let Ok(col) = self.column_index(PROFESSION_COLUMN) else {
            return BTreeSet::new();
        };
        self.rows
            .iter()
            .filter(|cells| cells[col] != CellValue::Null)
            .map(|cells| cells[col].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toy_dataset() -> TenureDataset {
        let headers = vec![
            "stag".to_string(),
            "event".to_string(),
            "profession".to_string(),
        ];
        let rows = vec![
            vec![
                CellValue::Float(3.5),
                CellValue::Integer(1),
                CellValue::String("HR".into()),
            ],
            vec![
                CellValue::Integer(12),
                CellValue::Integer(0),
                CellValue::String("IT".into()),
            ],
        ];
        TenureDataset::new(headers, rows)
    }

    #[test]
    fn numeric_column_coerces_ints_and_floats() {
        let ds = toy_dataset();
        let stag = ds.numeric_column("stag", None).unwrap();
        assert_eq!(stag, vec![3.5, 12.0]);
    }

    #[test]
    fn missing_column_is_an_error() {
        let ds = toy_dataset();
        let err = ds.numeric_column("tenure", None).unwrap_err();
        assert!(matches!(err, DataError::MissingColumn(_)));
    }

    #[test]
    fn bool_cells_parse_in_any_casing() {
        assert_eq!(CellValue::parse("true"), CellValue::Bool(true));
        assert_eq!(CellValue::parse("True"), CellValue::Bool(true));
        assert_eq!(CellValue::parse("FALSE"), CellValue::Bool(false));
        assert_eq!(CellValue::parse("False").as_event(), Some(false));
        // Not a boolean, stays a string.
        assert_eq!(
            CellValue::parse("truthy"),
            CellValue::String("truthy".into())
        );
    }

    #[test]
    fn event_column_maps_zero_to_censored() {
        let ds = toy_dataset();
        let events = ds.event_column("event").unwrap();
        assert_eq!(events, vec![true, false]);
    }

    #[test]
    fn professions_are_sorted_and_unique() {
        let ds = toy_dataset();
        let profs: Vec<String> = ds.professions().into_iter().collect();
        assert_eq!(profs, vec!["HR".to_string(), "IT".to_string()]);
    }
}
