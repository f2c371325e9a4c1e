use std::collections::HashSet;
use std::path::Path;

use crate::csv_table::read_csv_table;
use crate::error::{IngestError, Result};

pub const PINCODE_COLUMN: &str = "pincode";

/// Read the distinct, non-empty pincodes of a pincode directory file.
///
/// Pincodes keep the order in which they first appear.
pub fn read_pincodes(path: &Path) -> Result<Vec<String>> {
    let table = read_csv_table(path)?;
    let column = table.require_column(PINCODE_COLUMN, path)?;
    let mut seen = HashSet::new();
    let mut pincodes = Vec::new();
    for row in &table.rows {
        let value = row.get(column);
        if value.is_empty() {
            continue;
        }
        if seen.insert(value.to_string()) {
            pincodes.push(value.to_string());
        }
    }
    if pincodes.is_empty() {
        return Err(IngestError::NoPincodes {
            path: path.to_path_buf(),
        });
    }
    Ok(pincodes)
}
