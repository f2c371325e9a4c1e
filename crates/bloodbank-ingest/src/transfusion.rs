use std::path::Path;

use tracing::debug;

use bloodbank_model::TransfusionRecord;

use crate::csv_table::{CsvRow, is_header_like, read_csv_rows};
use crate::error::{IngestError, Result};

/// Positional column names of the transfusion statistics file.
pub const TRANSFUSION_COLUMNS: [&str; 5] =
    ["Recency", "Frequency", "Monetary", "Time", "Donated_March_2007"];

/// Read the headerless transfusion statistics file.
///
/// A leading row of column labels is tolerated and skipped. Counts may be
/// written as integers or as whole decimals (`2.0`); extra trailing columns
/// are ignored, short rows are rejected.
pub fn read_transfusion_stats(path: &Path) -> Result<Vec<TransfusionRecord>> {
    let mut rows = read_csv_rows(path)?;
    if rows.first().is_some_and(|row| is_header_like(&row.cells)) {
        let header = rows.remove(0);
        debug!(
            path = %path.display(),
            line = header.line,
            "skipping label row in transfusion statistics"
        );
    }
    rows.iter().map(|row| parse_row(row, path)).collect()
}

fn parse_row(row: &CsvRow, path: &Path) -> Result<TransfusionRecord> {
    if row.cells.len() < TRANSFUSION_COLUMNS.len() {
        return Err(IngestError::ColumnCount {
            path: path.to_path_buf(),
            line: row.line,
            found: row.cells.len(),
            expected: TRANSFUSION_COLUMNS.len(),
        });
    }
    let field = |index: usize| -> Result<u32> {
        let value = row.get(index);
        parse_count(value).ok_or_else(|| IngestError::InvalidValue {
            field: TRANSFUSION_COLUMNS[index].to_string(),
            value: value.to_string(),
            line: row.line,
            path: path.to_path_buf(),
        })
    };
    let donated = match field(4)? {
        0 => false,
        1 => true,
        _ => {
            return Err(IngestError::InvalidValue {
                field: TRANSFUSION_COLUMNS[4].to_string(),
                value: row.get(4).to_string(),
                line: row.line,
                path: path.to_path_buf(),
            });
        }
    };
    Ok(TransfusionRecord {
        recency_months: field(0)?,
        frequency: field(1)?,
        monetary_cc: field(2)?,
        time_months: field(3)?,
        donated_march_2007: donated,
    })
}

fn parse_count(value: &str) -> Option<u32> {
    if let Ok(count) = value.parse::<u32>() {
        return Some(count);
    }
    let number = value.parse::<f64>().ok()?;
    let whole = number.is_finite() && number >= 0.0 && number.fract() == 0.0;
    (whole && number <= f64::from(u32::MAX)).then_some(number as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_accept_whole_decimals() {
        assert_eq!(parse_count("12500"), Some(12500));
        assert_eq!(parse_count("2.0"), Some(2));
        assert_eq!(parse_count("1e3"), Some(1000));
    }

    #[test]
    fn counts_reject_fractions_and_negatives() {
        assert_eq!(parse_count("2.5"), None);
        assert_eq!(parse_count("-1"), None);
        assert_eq!(parse_count("NaN"), None);
        assert_eq!(parse_count("x"), None);
    }
}
