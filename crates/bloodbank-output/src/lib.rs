pub mod csv_writer;
pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use bloodbank_model::{DonationEvent, Donor, IssuanceEvent};

pub use csv_writer::{
    DONATIONS_HEADER, DONORS_HEADER, ISSUANCES_HEADER, read_donations, read_donors,
    read_issuances, write_donations, write_donors, write_issuances,
};
pub use error::{OutputError, Result};

pub const DONORS_FILE: &str = "donors.csv";
pub const DONATIONS_FILE: &str = "donations_log.csv";
pub const ISSUANCES_FILE: &str = "issuance_log.csv";

/// A written file and the number of data rows in it (header excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    pub path: PathBuf,
    pub records: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub donors: OutputFile,
    pub donations: OutputFile,
    pub issuances: OutputFile,
}

impl OutputPaths {
    pub fn files(&self) -> [&OutputFile; 3] {
        [&self.donors, &self.donations, &self.issuances]
    }
}

/// Write the three output tables into `output_dir`, replacing existing files.
pub fn write_dataset(
    output_dir: &Path,
    donors: &[Donor],
    donations: &[DonationEvent],
    issuances: &[IssuanceEvent],
) -> Result<OutputPaths> {
    fs::create_dir_all(output_dir).map_err(|source| OutputError::CreateDir {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let donors_path = output_dir.join(DONORS_FILE);
    let donations_path = output_dir.join(DONATIONS_FILE);
    let issuances_path = output_dir.join(ISSUANCES_FILE);

    let paths = OutputPaths {
        donors: OutputFile {
            records: write_donors(&donors_path, donors)?,
            path: donors_path,
        },
        donations: OutputFile {
            records: write_donations(&donations_path, donations)?,
            path: donations_path,
        },
        issuances: OutputFile {
            records: write_issuances(&issuances_path, issuances)?,
            path: issuances_path,
        },
    };
    for file in paths.files() {
        info!(path = %file.path.display(), records = file.records, "saved output file");
    }
    Ok(paths)
}
