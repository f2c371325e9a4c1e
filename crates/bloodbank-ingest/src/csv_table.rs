use std::fs::File;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord};

use crate::error::{IngestError, Result};

/// A CSV file read fully into memory, with source line numbers kept per row.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

#[derive(Debug, Clone)]
pub struct CsvRow {
    /// 1-based line number in the source file.
    pub line: u64,
    pub cells: Vec<String>,
}

impl CsvRow {
    pub fn get(&self, index: usize) -> &str {
        self.cells.get(index).map(String::as_str).unwrap_or("")
    }
}

impl CsvTable {
    /// Find a column by name, ignoring case, surrounding whitespace and BOM.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        let wanted = normalize_header(name);
        self.headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(&wanted))
    }

    pub fn require_column(&self, name: &str, path: &Path) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| IngestError::MissingColumn {
                column: name.to_string(),
                path: path.to_path_buf(),
            })
    }
}

pub(crate) fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn open_reader(path: &Path) -> Result<csv::Reader<File>> {
    if !path.exists() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|error| csv_error(path, error))
}

pub(crate) fn csv_error(path: &Path, error: csv::Error) -> IngestError {
    if !error.is_io_error() {
        return IngestError::CsvParse {
            path: path.to_path_buf(),
            source: error,
        };
    }
    let source = match error.into_kind() {
        csv::ErrorKind::Io(source) => source,
        other => std::io::Error::other(format!("{other:?}")),
    };
    IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    }
}

fn record_line(record: &StringRecord, fallback: u64) -> u64 {
    record
        .position()
        .map(csv::Position::line)
        .unwrap_or(fallback)
}

/// Read every non-blank record of a file, without header handling.
pub fn read_csv_rows(path: &Path) -> Result<Vec<CsvRow>> {
    let mut reader = open_reader(path)?;
    let mut rows = Vec::new();
    for (idx, record) in reader.records().enumerate() {
        let record = record.map_err(|error| csv_error(path, error))?;
        let cells: Vec<String> = record.iter().map(normalize_cell).collect();
        if cells.iter().all(|value| value.is_empty()) {
            continue;
        }
        rows.push(CsvRow {
            line: record_line(&record, idx as u64 + 1),
            cells,
        });
    }
    Ok(rows)
}

/// Read a file whose first non-blank record is the header row.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    let mut rows = read_csv_rows(path)?;
    if rows.is_empty() {
        return Ok(CsvTable::default());
    }
    let header = rows.remove(0);
    let headers = header
        .cells
        .iter()
        .map(|value| normalize_header(value))
        .collect();
    Ok(CsvTable { headers, rows })
}

#[derive(Debug, Default, Clone, Copy)]
struct RowStats {
    total: usize,
    non_empty: usize,
    numeric: usize,
    alpha: usize,
}

impl RowStats {
    fn ratio(count: usize, total: usize) -> f64 {
        if total == 0 {
            0.0
        } else {
            count as f64 / total as f64
        }
    }

    fn non_empty_ratio(self) -> f64 {
        Self::ratio(self.non_empty, self.total)
    }

    fn numeric_ratio(self) -> f64 {
        Self::ratio(self.numeric, self.total)
    }

    fn alpha_ratio(self) -> f64 {
        Self::ratio(self.alpha, self.total)
    }
}

fn row_stats(row: &[String]) -> RowStats {
    let mut stats = RowStats {
        total: row.len(),
        ..RowStats::default()
    };
    for cell in row {
        let trimmed = cell.trim();
        if trimmed.is_empty() {
            continue;
        }
        stats.non_empty += 1;
        if trimmed.parse::<f64>().is_ok() {
            stats.numeric += 1;
        }
        if trimmed.chars().any(|ch| ch.is_ascii_alphabetic()) {
            stats.alpha += 1;
        }
    }
    stats
}

/// True when a row reads as column labels rather than data.
pub fn is_header_like(row: &[String]) -> bool {
    let stats = row_stats(row);
    stats.non_empty_ratio() >= 0.8 && stats.alpha_ratio() >= 0.5 && stats.numeric_ratio() <= 0.1
}
