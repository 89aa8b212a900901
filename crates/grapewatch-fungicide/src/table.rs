//! FungicideTable: named columns over rows of optional string cells.

use grapewatch_core::DatasetError;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FungicideTable {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl FungicideTable {
    /// Build a table. Rows are padded with empty cells or truncated to the
    /// column count.
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        let width = columns.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, None);
                row
            })
            .collect();
        Self { columns, rows }
    }

    /// Parse a JSON array of flat objects.
    ///
    /// Column order follows first appearance across records. Numbers and
    /// booleans are stringified; null and blank strings become empty cells.
    pub fn from_json_records(json: &str) -> Result<Self, DatasetError> {
        let value: Value = serde_json::from_str(json)?;
        let Value::Array(records) = value else {
            return Err(DatasetError::NotARecordArray);
        };
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        let mut columns: Vec<String> = Vec::new();
        for (index, record) in records.iter().enumerate() {
            let Value::Object(map) = record else {
                return Err(DatasetError::InvalidRecord { index });
            };
            for key in map.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }

        let mut rows = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let mut row = Vec::with_capacity(columns.len());
            for column in &columns {
                let cell = match record.get(column) {
                    None | Some(Value::Null) => None,
                    Some(Value::String(s)) => Some(s.clone()),
                    Some(Value::Number(n)) => Some(n.to_string()),
                    Some(Value::Bool(b)) => Some(b.to_string()),
                    Some(Value::Array(_) | Value::Object(_)) => {
                        return Err(DatasetError::InvalidRecord { index })
                    }
                };
                row.push(cell.filter(|s| !s.trim().is_empty()));
            }
            rows.push(row);
        }

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Cell by row index and column name.
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let col = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(col)?.as_deref()
    }

    /// Number of empty cells across the table.
    pub fn empty_cell_count(&self) -> usize {
        self.rows.iter().flatten().filter(|cell| cell.is_none()).count()
    }

    /// Remove rows in which every cell is empty.
    pub fn drop_empty_rows(mut self) -> Self {
        self.rows.retain(|row| row.iter().any(Option::is_some));
        self
    }

    /// A table with the same columns and only the rows matching `keep`.
    pub(crate) fn filter_rows(&self, mut keep: impl FnMut(&[Option<String>]) -> bool) -> Self {
        Self {
            columns: self.columns.clone(),
            rows: self.rows.iter().filter(|row| keep(row)).cloned().collect(),
        }
    }
}
