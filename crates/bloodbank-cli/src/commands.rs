use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, info_span};

use bloodbank_ingest::{ReferencePaths, load_reference_data};
use bloodbank_model::DayClass;
use bloodbank_output::write_dataset;
use bloodbank_synth::{DaySummary, GeneratorConfig, generate_dataset, make_rng};

use crate::cli::GenerateArgs;
use crate::types::{DayClassSummary, GenerateResult, ReferenceSummary};

/// Build the generator configuration from CLI flags.
pub fn generator_config(args: &GenerateArgs) -> Result<GeneratorConfig> {
    let config = GeneratorConfig::default()
        .with_num_donors(args.num_donors)
        .with_donor_prefix(args.donor_prefix.clone())
        .with_date_range(args.start_date, args.end_date);
    config.validate().context("invalid generator configuration")?;
    Ok(config)
}

pub fn run_generate(args: &GenerateArgs) -> Result<GenerateResult> {
    let config = generator_config(args)?;
    let output_dir = args
        .output_dir
        .clone()
        .unwrap_or_else(|| args.data_dir.clone());
    let (mut rng, seed) = make_rng(args.seed);
    let run_span = info_span!("generate", seed);
    let _run_guard = run_span.enter();

    // =========================================================================
    // Stage 1: Load reference data
    // =========================================================================
    let paths = ReferencePaths::new(&args.data_dir, args.pincode_file.clone());
    let ingest_start = Instant::now();
    let reference = info_span!("ingest", data_dir = %args.data_dir.display())
        .in_scope(|| load_reference_data(&paths))
        .context("load reference data")?;
    info!(
        duration_ms = ingest_start.elapsed().as_millis(),
        "source data loaded"
    );

    // =========================================================================
    // Stage 2-3: Generate donors and daily logs
    // =========================================================================
    let generate_start = Instant::now();
    let dataset = info_span!("synthesize", num_donors = config.num_donors)
        .in_scope(|| generate_dataset(&config, &reference, &mut rng))
        .context("generate dataset")?;
    info!(
        donors = dataset.donors.len(),
        donations = dataset.donations.len(),
        issuances = dataset.issuances.len(),
        duration_ms = generate_start.elapsed().as_millis(),
        "generation complete"
    );

    // =========================================================================
    // Stage 4: Write outputs
    // =========================================================================
    let outputs = info_span!("output", output_dir = %output_dir.display())
        .in_scope(|| {
            write_dataset(
                &output_dir,
                &dataset.donors,
                &dataset.donations,
                &dataset.issuances,
            )
        })
        .with_context(|| format!("write outputs to {}", output_dir.display()))?;

    Ok(GenerateResult {
        reference: ReferenceSummary {
            transfusion_rows: reference.transfusions.len(),
            march_2007_rate: reference.march_2007_donation_rate(),
            pincodes: reference.pincodes.len(),
            holidays: reference.holidays.len(),
        },
        day_classes: summarize_days(&dataset.days),
        donation_sample: dataset
            .donations
            .iter()
            .take(args.sample_rows)
            .cloned()
            .collect(),
        config,
        seed,
        output_dir,
        outputs,
    })
}

/// Totals per day class, in holiday/weekend/weekday order.
pub fn summarize_days(days: &[DaySummary]) -> Vec<DayClassSummary> {
    [DayClass::Holiday, DayClass::Weekend, DayClass::Weekday]
        .into_iter()
        .map(|class| {
            let matching = days.iter().filter(|day| day.class == class);
            DayClassSummary {
                class,
                days: matching.clone().count(),
                donations: matching.clone().map(|day| day.donations).sum(),
                issuances: matching.map(|day| day.issuances).sum(),
            }
        })
        .collect()
}
