use std::path::Path;

use thiserror::Error;

use super::model::{CountryRecord, Dataset};

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// The required header names, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 8] = [
    "Country/Region",
    "WHO Region",
    "Confirmed",
    "Deaths",
    "Recovered",
    "Active",
    "Recovered / 100 Cases",
    "Deaths / 100 Cases",
];

/// Everything that can go wrong while loading the table.  Fatal to the load
/// attempt; the caller keeps whatever dataset it already had.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("reading {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(String),

    #[error("row {row}: {message}")]
    MalformedRow { row: usize, message: String },

    #[error("file contains a header but no data rows")]
    EmptyDataset,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the country table from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – the canonical `country_wise_latest.csv` layout (header row
///   with the exact column names in [`REQUIRED_COLUMNS`])
/// * `.json` – records-oriented array of objects with the same keys
pub fn load_file(path: &Path) -> Result<Dataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

fn load_csv(path: &Path) -> Result<Dataset, LoadError> {
    let mut reader = csv::Reader::from_path(path).map_err(|e| map_csv_open_error(path, e))?;

    // Validate the header up front so a schema mismatch fails before any row
    // is parsed, with the name of the first missing column.
    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| LoadError::MalformedRow {
            row: 0,
            message: e.to_string(),
        })?
        .iter()
        .map(|h| h.to_string())
        .collect();

    for required in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == required) {
            return Err(LoadError::MissingColumn(required.to_string()));
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<CountryRecord>().enumerate() {
        let rec = result.map_err(|e| LoadError::MalformedRow {
            row: row_no + 1,
            message: e.to_string(),
        })?;
        records.push(rec);
    }

    if records.is_empty() {
        return Err(LoadError::EmptyDataset);
    }
    Ok(Dataset::from_records(records))
}

fn map_csv_open_error(path: &Path, e: csv::Error) -> LoadError {
    match e.into_kind() {
        csv::ErrorKind::Io(source) => LoadError::Io {
            path: path.display().to_string(),
            source,
        },
        other => LoadError::MalformedRow {
            row: 0,
            message: format!("{other:?}"),
        },
    }
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, as written by
/// `df.to_json(orient='records')`): a top-level array of objects whose keys
/// are the same header names the CSV uses.
fn load_json(path: &Path) -> Result<Dataset, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let rows: Vec<serde_json::Map<String, serde_json::Value>> = serde_json::from_str(&text)
        .map_err(|e| LoadError::MalformedRow {
            row: 0,
            message: format!("parsing JSON: {e}"),
        })?;

    let mut records = Vec::with_capacity(rows.len());
    for (row_no, obj) in rows.iter().enumerate() {
        for required in REQUIRED_COLUMNS {
            if !obj.contains_key(required) {
                return Err(LoadError::MissingColumn(required.to_string()));
            }
        }
        let value = serde_json::Value::Object(obj.clone());
        let rec: CountryRecord =
            serde_json::from_value(value).map_err(|e| LoadError::MalformedRow {
                row: row_no + 1,
                message: e.to_string(),
            })?;
        records.push(rec);
    }

    if records.is_empty() {
        return Err(LoadError::EmptyDataset);
    }
    Ok(Dataset::from_records(records))
}
