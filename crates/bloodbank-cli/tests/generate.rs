//! Integration tests for the generate command.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;

use bloodbank_cli::cli::{Cli, Command, GenerateArgs};
use bloodbank_cli::commands::{generator_config, run_generate, summarize_days};
use bloodbank_model::DayClass;
use bloodbank_output::{read_donations, read_donors, read_issuances};

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("transfusion.csv"),
        "2,50,12500,98,1\n0,13,3250,28,1\n1,16,4000,35,0\n",
    )
    .unwrap();
    fs::write(
        dir.join("holidays.csv"),
        "Date,Holiday\n2023-01-26,Republic Day\n",
    )
    .unwrap();
    fs::write(
        dir.join("AllIndiaPincodeDirectory.csv"),
        "officename,pincode,statename\nA,110001,Delhi\nB,110001,Delhi\nC,400001,Maharashtra\n",
    )
    .unwrap();
}

fn generate_args(dir: &Path, extra: &[&str]) -> GenerateArgs {
    let data_dir = dir.to_string_lossy().to_string();
    let pincode_file = dir
        .join("AllIndiaPincodeDirectory.csv")
        .to_string_lossy()
        .to_string();
    let mut argv = vec![
        "bloodbank".to_string(),
        "generate".to_string(),
        "--data-dir".to_string(),
        data_dir,
        "--pincode-file".to_string(),
        pincode_file,
    ];
    argv.extend(extra.iter().map(|arg| arg.to_string()));
    match Cli::try_parse_from(argv).expect("parse cli").command {
        Command::Generate(args) => args,
        Command::BloodTypes => panic!("expected generate command"),
    }
}

#[test]
fn defaults_cover_two_years_of_logs() {
    let dir = TempDir::new().unwrap();
    let args = generate_args(dir.path(), &[]);

    let config = generator_config(&args).unwrap();

    assert_eq!(config.num_donors, 5000);
    assert_eq!(config.start_date.to_string(), "2023-01-01");
    assert_eq!(config.end_date.to_string(), "2024-12-31");
    assert_eq!(config.donor_prefix, "D");
    assert_eq!(args.sample_rows, 5);
    assert!(args.output_dir.is_none());
}

#[test]
fn reversed_dates_fail_before_reading_files() {
    let dir = TempDir::new().unwrap();
    let args = generate_args(
        dir.path(),
        &["--start-date", "2023-02-01", "--end-date", "2023-01-01"],
    );

    let err = run_generate(&args).unwrap_err();

    assert!(format!("{err:#}").contains("after end date"));
}

#[test]
fn single_sunday_run_writes_all_files() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());
    let out = dir.path().join("out");
    let out_arg = out.to_string_lossy().to_string();
    let args = generate_args(
        dir.path(),
        &[
            "--output-dir",
            &out_arg,
            "--num-donors",
            "400",
            "--start-date",
            "2023-01-01",
            "--end-date",
            "2023-01-01",
            "--seed",
            "42",
        ],
    );

    let result = run_generate(&args).expect("generate");

    assert_eq!(result.seed, 42);
    assert_eq!(result.reference.transfusion_rows, 3);
    assert_eq!(result.reference.pincodes, 2);
    assert_eq!(result.reference.holidays, 1);

    let donors = read_donors(&out.join("donors.csv")).unwrap();
    let donations = read_donations(&out.join("donations_log.csv")).unwrap();
    let issuances = read_issuances(&out.join("issuance_log.csv")).unwrap();
    assert_eq!(donors.len(), 400);
    assert!((80..150).contains(&donations.len()));
    assert!((70..130).contains(&issuances.len()));
    assert_eq!(result.outputs.donations.records, donations.len());
    assert_eq!(result.outputs.issuances.records, issuances.len());
    assert_eq!(result.donation_sample.len(), 5);
    assert_eq!(result.donation_sample[..], donations[..5]);
    assert!(donors.iter().all(|donor| donor.pincode == "110001" || donor.pincode == "400001"));
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());
    let first_out = dir.path().join("first").to_string_lossy().to_string();
    let second_out = dir.path().join("second").to_string_lossy().to_string();
    let common = [
        "--num-donors",
        "300",
        "--start-date",
        "2023-01-20",
        "--end-date",
        "2023-01-31",
        "--seed",
        "7",
    ];

    let mut first_args: Vec<&str> = vec!["--output-dir", &first_out];
    first_args.extend(common);
    let mut second_args: Vec<&str> = vec!["--output-dir", &second_out];
    second_args.extend(common);
    let first = run_generate(&generate_args(dir.path(), &first_args)).unwrap();
    let second = run_generate(&generate_args(dir.path(), &second_args)).unwrap();

    let first_log = fs::read_to_string(&first.outputs.donations.path).unwrap();
    let second_log = fs::read_to_string(&second.outputs.donations.path).unwrap();
    assert_eq!(first_log, second_log);
    assert_eq!(first.day_classes, second.day_classes);

    let holiday = &first.day_classes[0];
    assert_eq!(holiday.class, DayClass::Holiday);
    assert_eq!(holiday.days, 1);
    assert!((10..30).contains(&holiday.donations));
}

#[test]
fn small_donor_pool_is_fatal() {
    let dir = TempDir::new().unwrap();
    write_fixtures(dir.path());
    let out = dir.path().join("out").to_string_lossy().to_string();
    let args = generate_args(
        dir.path(),
        &[
            "--output-dir",
            &out,
            "--num-donors",
            "10",
            "--start-date",
            "2023-01-02",
            "--end-date",
            "2023-01-02",
        ],
    );

    let err = run_generate(&args).unwrap_err();

    assert!(format!("{err:#}").contains("cannot sample"));
    assert!(!dir.path().join("out").join("donors.csv").exists());
}

#[test]
fn missing_reference_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let args = generate_args(dir.path(), &[]);

    let err = run_generate(&args).unwrap_err();

    assert!(format!("{err:#}").contains("reference file not found"));
}

#[test]
fn day_summaries_cover_every_class() {
    let summaries = summarize_days(&[]);

    let classes: Vec<DayClass> = summaries.iter().map(|summary| summary.class).collect();
    assert_eq!(
        classes,
        vec![DayClass::Holiday, DayClass::Weekend, DayClass::Weekday]
    );
    assert!(summaries.iter().all(|summary| summary.days == 0));
}
