use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tempfile::TempDir;

use bloodbank_ingest::{
    IngestError, ReferencePaths, load_reference_data, read_holidays, read_pincodes,
    read_transfusion_stats,
};

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn transfusion_rows_are_positional() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "transfusion.csv", "2,50,12500,98,1\n0,13,3250,28,0\n");

    let records = read_transfusion_stats(&path).expect("read transfusion");

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].recency_months, 2);
    assert_eq!(records[0].monetary_cc, 12500);
    assert!(records[0].donated_march_2007);
    assert!(!records[1].donated_march_2007);
}

#[test]
fn transfusion_label_row_is_skipped() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "transfusion.csv",
        "Recency (months),Frequency (times),Monetary (c.c. blood),Time (months),\"whether he/she donated blood in March 2007\"\n\
         2,50,12500,98,1\n",
    );

    let records = read_transfusion_stats(&path).expect("read transfusion");

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].time_months, 98);
}

#[test]
fn transfusion_bad_cell_names_line_and_column() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "transfusion.csv", "2,50,12500,98,1\n4,x,750,4,0\n");

    let err = read_transfusion_stats(&path).unwrap_err();

    match err {
        IngestError::InvalidValue { field, line, .. } => {
            assert_eq!(field, "Frequency");
            assert_eq!(line, 2);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn transfusion_whole_decimals_are_counts() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "transfusion.csv", "2.0,50,12500.0,98,1.0
");

    let records = read_transfusion_stats(&path).expect("read transfusion");

    assert_eq!(records[0].recency_months, 2);
    assert_eq!(records[0].monetary_cc, 12500);
    assert!(records[0].donated_march_2007);
}

#[test]
fn transfusion_short_row_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "transfusion.csv", "2,50,12500\n");

    let err = read_transfusion_stats(&path).unwrap_err();

    assert!(matches!(err, IngestError::ColumnCount { found: 3, expected: 5, .. }));
}

#[test]
fn pincodes_are_deduplicated_in_first_seen_order() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "pincodes.csv",
        "officename,pincode,districtname\n\
         Connaught Place,110001,New Delhi\n\
         Parliament Street,110001,New Delhi\n\
         Fort,400001,Mumbai\n\
         Unknown,,Nowhere\n\
         Kalbadevi,400002,Mumbai\n",
    );

    let pincodes = read_pincodes(&path).expect("read pincodes");

    assert_eq!(pincodes, vec!["110001", "400001", "400002"]);
}

#[test]
fn pincode_column_lookup_ignores_case() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "pincodes.csv", "\u{feff}Pincode\n560001\n");

    assert_eq!(read_pincodes(&path).unwrap(), vec!["560001"]);
}

#[test]
fn missing_pincode_column_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "pincodes.csv", "officename,zip\nFort,400001\n");

    let err = read_pincodes(&path).unwrap_err();

    assert!(matches!(err, IngestError::MissingColumn { ref column, .. } if column == "pincode"));
}

#[test]
fn empty_pincode_directory_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "pincodes.csv", "pincode\n\n,\n");

    assert!(matches!(
        read_pincodes(&path).unwrap_err(),
        IngestError::NoPincodes { .. }
    ));
}

#[test]
fn holidays_parse_into_calendar() {
    let dir = TempDir::new().unwrap();
    let path = write(
        dir.path(),
        "holidays.csv",
        "Date,Holiday\n2023-01-26,Republic Day\n2023-08-15,Independence Day\n,\n2023-01-26,Duplicate\n",
    );

    let holidays = read_holidays(&path).expect("read holidays");

    assert_eq!(holidays.len(), 2);
    assert!(holidays.contains(&date(2023, 1, 26)));
    assert!(holidays.contains(&date(2023, 8, 15)));
}

#[test]
fn unparseable_holiday_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = write(dir.path(), "holidays.csv", "Date\nnext tuesday\n");

    let err = read_holidays(&path).unwrap_err();

    assert!(matches!(err, IngestError::InvalidValue { line: 2, .. }));
}

#[test]
fn missing_file_is_reported() {
    let dir = TempDir::new().unwrap();
    let paths = ReferencePaths::new(dir.path(), dir.path().join("pincodes.csv"));

    let err = load_reference_data(&paths).unwrap_err();

    match err {
        IngestError::FileNotFound { path } => assert!(path.ends_with("transfusion.csv")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn loads_all_reference_files() {
    let dir = TempDir::new().unwrap();
    write(dir.path(), "transfusion.csv", "2,50,12500,98,1\n");
    write(dir.path(), "holidays.csv", "Date\n2024-10-31\n");
    let pincodes = write(dir.path(), "AllIndiaPincodeDirectory.csv", "pincode\n700001\n");
    let paths = ReferencePaths::new(dir.path(), pincodes);

    let reference = load_reference_data(&paths).expect("load reference data");

    assert_eq!(reference.transfusions.len(), 1);
    assert_eq!(reference.pincodes, vec!["700001"]);
    assert!(reference.holidays.contains(&date(2024, 10, 31)));
}
