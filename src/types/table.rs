//! Tabular container for decoded API responses.

use serde_json::{Map, Number, Value};

/// A list of uniform flat records with columns taken from the source field
/// names. No schema is imposed beyond "each record maps a field name to a
/// scalar value".
#[derive(Debug)]
pub struct DataTable {
    /// Column names, in first-seen order.
    pub columns: Vec<String>,
    /// One flat mapping per source row.
    pub records: Vec<Map<String, Value>>,
}

impl DataTable {
    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Builds a table from already-decoded JSON objects. The column set is
    /// the union of record keys, in the order they are first seen.
    pub fn from_records(records: Vec<Map<String, Value>>) -> Self {
        let mut columns: Vec<String> = Vec::new();
        for record in &records {
            for key in record.keys() {
                if !columns.iter().any(|c| c == key) {
                    columns.push(key.clone());
                }
            }
        }
        DataTable { columns, records }
    }

    /// Parses a CSV document. The header row names the columns; each
    /// column's type is inferred from its content (integer, float, bool,
    /// else text), and empty cells become null.
    pub fn from_csv(text: &str) -> Result<Self, csv::Error> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(text.as_bytes());
        let columns: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();

        let mut rows: Vec<csv::StringRecord> = Vec::new();
        for row in reader.records() {
            rows.push(row?);
        }

        let kinds: Vec<ColumnKind> = (0..columns.len())
            .map(|col| infer_kind(rows.iter().map(|row| row.get(col).unwrap_or(""))))
            .collect();

        let records = rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(kinds.iter())
                    .enumerate()
                    .map(|(col, (name, kind))| {
                        (name.clone(), kind.parse(row.get(col).unwrap_or("")))
                    })
                    .collect()
            })
            .collect();

        Ok(DataTable { columns, records })
    }
}

/// Inferred type of a CSV column.
#[derive(Clone, Copy)]
enum ColumnKind {
    Int,
    Float,
    Bool,
    Text,
}

impl ColumnKind {
    fn parse(self, cell: &str) -> Value {
        if cell.is_empty() {
            return Value::Null;
        }
        match self {
            ColumnKind::Int => cell.parse::<i64>().map(Value::from).unwrap_or(Value::Null),
            ColumnKind::Float => cell
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            ColumnKind::Bool => Value::Bool(cell.eq_ignore_ascii_case("true")),
            ColumnKind::Text => Value::String(cell.to_string()),
        }
    }
}

/// Picks the narrowest type that fits every non-empty cell in the column.
fn infer_kind<'a>(cells: impl Iterator<Item = &'a str>) -> ColumnKind {
    let mut all_int = true;
    let mut all_float = true;
    let mut all_bool = true;
    let mut seen_value = false;

    for cell in cells {
        if cell.is_empty() {
            continue;
        }
        seen_value = true;
        if all_int && cell.parse::<i64>().is_err() {
            all_int = false;
        }
        if all_float && !cell.parse::<f64>().map(f64::is_finite).unwrap_or(false) {
            all_float = false;
        }
        if all_bool
            && !(cell.eq_ignore_ascii_case("true") || cell.eq_ignore_ascii_case("false"))
        {
            all_bool = false;
        }
    }

    if !seen_value {
        return ColumnKind::Text;
    }
    if all_int {
        ColumnKind::Int
    } else if all_float {
        ColumnKind::Float
    } else if all_bool {
        ColumnKind::Bool
    } else {
        ColumnKind::Text
    }
}
