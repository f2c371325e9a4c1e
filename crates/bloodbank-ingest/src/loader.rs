use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::info;

use bloodbank_model::ReferenceData;

use crate::error::Result;
use crate::holidays::read_holidays;
use crate::pincodes::read_pincodes;
use crate::transfusion::read_transfusion_stats;

pub const TRANSFUSION_FILE: &str = "transfusion.csv";
pub const HOLIDAYS_FILE: &str = "holidays.csv";
pub const PINCODE_DIRECTORY_FILE: &str = "AllIndiaPincodeDirectory.csv";

/// Locations of the three reference files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferencePaths {
    pub transfusion: PathBuf,
    pub pincodes: PathBuf,
    pub holidays: PathBuf,
}

impl ReferencePaths {
    /// Transfusion and holiday files live in `data_dir`; the pincode
    /// directory is resolved separately.
    pub fn new(data_dir: &Path, pincode_file: impl Into<PathBuf>) -> Self {
        Self {
            transfusion: data_dir.join(TRANSFUSION_FILE),
            pincodes: pincode_file.into(),
            holidays: data_dir.join(HOLIDAYS_FILE),
        }
    }
}

/// Load all reference tables. Any missing or malformed file is an error.
pub fn load_reference_data(paths: &ReferencePaths) -> Result<ReferenceData> {
    let start = Instant::now();
    let transfusions = read_transfusion_stats(&paths.transfusion)?;
    info!(
        path = %paths.transfusion.display(),
        rows = transfusions.len(),
        "loaded transfusion statistics"
    );
    let pincodes = read_pincodes(&paths.pincodes)?;
    info!(
        path = %paths.pincodes.display(),
        unique_pincodes = pincodes.len(),
        "loaded pincode directory"
    );
    let holidays = read_holidays(&paths.holidays)?;
    info!(
        path = %paths.holidays.display(),
        holidays = holidays.len(),
        duration_ms = start.elapsed().as_millis(),
        "loaded holiday calendar"
    );
    Ok(ReferenceData {
        transfusions,
        pincodes,
        holidays,
    })
}
