//! Reference data ingestion for the blood bank generator.

pub mod csv_table;
pub mod error;
pub mod holidays;
pub mod loader;
pub mod pincodes;
pub mod transfusion;

pub use csv_table::{CsvRow, CsvTable, is_header_like, read_csv_rows, read_csv_table};
pub use error::{IngestError, Result};
pub use holidays::{HOLIDAY_DATE_COLUMN, parse_calendar_date, read_holidays};
pub use loader::{
    HOLIDAYS_FILE, PINCODE_DIRECTORY_FILE, ReferencePaths, TRANSFUSION_FILE, load_reference_data,
};
pub use pincodes::{PINCODE_COLUMN, read_pincodes};
pub use transfusion::{TRANSFUSION_COLUMNS, read_transfusion_stats};
