//! CSV serialization of the generated tables.
//!
//! Headers are written explicitly so an empty table still produces a file
//! with its column row. Dates are written as `YYYY-MM-DD`.

use std::path::Path;

use csv::{ReaderBuilder, WriterBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use bloodbank_model::{DonationEvent, Donor, IssuanceEvent};

use crate::error::{OutputError, Result};

pub const DONORS_HEADER: [&str; 3] = ["Donor_ID", "Blood_Type", "Pincode"];
pub const DONATIONS_HEADER: [&str; 4] = ["Date", "Donor_ID", "Blood_Type", "Units_Collected"];
pub const ISSUANCES_HEADER: [&str; 3] = ["Date", "Blood_Type", "Units_Issued"];

fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<usize> {
    let write_error = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(write_error)?;
    writer.write_record(header).map_err(write_error)?;
    for row in rows {
        writer.serialize(row).map_err(write_error)?;
    }
    writer.flush().map_err(|source| OutputError::Flush {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), records = rows.len(), "wrote csv");
    Ok(rows.len())
}

fn read_rows<T: DeserializeOwned>(path: &Path, header: &[&str]) -> Result<Vec<T>> {
    let read_error = |source| OutputError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(read_error)?;
    let found: Vec<String> = reader
        .headers()
        .map_err(read_error)?
        .iter()
        .map(str::to_string)
        .collect();
    if found != header {
        return Err(OutputError::Header {
            path: path.to_path_buf(),
            expected: header.iter().map(ToString::to_string).collect(),
            found,
        });
    }
    reader
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()
        .map_err(read_error)
}

pub fn write_donors(path: &Path, donors: &[Donor]) -> Result<usize> {
    write_rows(path, &DONORS_HEADER, donors)
}

pub fn write_donations(path: &Path, donations: &[DonationEvent]) -> Result<usize> {
    write_rows(path, &DONATIONS_HEADER, donations)
}

pub fn write_issuances(path: &Path, issuances: &[IssuanceEvent]) -> Result<usize> {
    write_rows(path, &ISSUANCES_HEADER, issuances)
}

pub fn read_donors(path: &Path) -> Result<Vec<Donor>> {
    read_rows(path, &DONORS_HEADER)
}

pub fn read_donations(path: &Path) -> Result<Vec<DonationEvent>> {
    read_rows(path, &DONATIONS_HEADER)
}

pub fn read_issuances(path: &Path) -> Result<Vec<IssuanceEvent>> {
    read_rows(path, &ISSUANCES_HEADER)
}
