//! Check command: run the single-file time checks over metadata records.

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use tracing::{info, info_span, warn};

use chronos_checks::{
    check_filename_matches_time_axis, check_filename_time_format,
    check_regular_time_axis_increments, check_time_format_matches_frequency,
    check_valid_temporal_element, CheckResult, DatasetTimeInfo, Tolerance,
};

use crate::cli::CheckArgs;
use crate::config::ChronosConfig;
use crate::input::read_records;

/// Run the single-file checks for every record in every metadata file.
pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let config = ChronosConfig::load(args.config.as_deref())?;
    let cli_tolerance = args
        .tolerance
        .as_deref()
        .map(Tolerance::from_str)
        .transpose()
        .context("invalid --tolerance")?;

    let mut failures = 0usize;
    for path in &args.files {
        for record in read_records(path)? {
            println!("Time checks of: {}", record.filename);

            let extension_ok = record.filename.ends_with(".nc");
            print_line(
                "T1.000",
                "file_extension",
                "",
                &verdict(extension_ok, "File does not end with '.nc'"),
            );

            let ds = record.to_dataset();
            match run_file(&ds, &config, cli_tolerance.as_ref()) {
                Ok(true) if extension_ok => {
                    info!(file = %ds.label(), "all checks passed");
                }
                Ok(_) => failures += 1,
                Err(e) => {
                    warn!(file = %ds.label(), error = %e, "checks aborted");
                    eprintln!("Error checking {}: {e:#}", ds.label());
                    failures += 1;
                }
            }
        }
    }

    if failures > 0 {
        bail!("{failures} file(s) failed time checks");
    }
    Ok(())
}

/// Runs the five checks for one record, printing the per-check lines.
/// Returns whether all of them passed.
fn run_file(
    ds: &DatasetTimeInfo,
    config: &ChronosConfig,
    cli_tolerance: Option<&Tolerance>,
) -> Result<bool> {
    let match_config = config.match_config_for(ds.table_token(), cli_tolerance)?;

    let checks = [
        (
            "T1.001",
            "check_file_name_time_format",
            "Format of file name is not recognised.",
            check_filename_time_format(ds)?,
        ),
        (
            "T1.002",
            "check_valid_temporal_element",
            "Temporal elements are not valid.",
            check_valid_temporal_element(ds)?,
        ),
        (
            "T1.003",
            "time_format_matches_frequency",
            "Frequency element of the filename does not match frequency of data in the file.",
            check_time_format_matches_frequency(ds)?,
        ),
        (
            "T1.004",
            "file_name_matches_time_var",
            "Frequency element of the filename does not match time format in file.",
            check_filename_matches_time_axis(ds, &match_config)?,
        ),
        (
            "T1.005",
            "regular_time_axis_increments",
            "Time axis increments are not regular.",
            check_regular_time_axis_increments(ds)?,
        ),
    ];

    let mut all_passed = true;
    for (id, name, prefix, result) in checks {
        all_passed &= result.passed();
        print_line(id, name, prefix, &result);
    }
    Ok(all_passed)
}

fn verdict(passed: bool, fail_msg: &str) -> CheckResult {
    if passed {
        CheckResult::pass()
    } else {
        CheckResult::fail(fail_msg)
    }
}

fn print_line(id: &str, name: &str, prefix: &str, result: &CheckResult) {
    if result.passed() {
        println!("{id}: [{name}]: OK");
    } else if prefix.is_empty() {
        println!("{id}: [{name}]: FAILED:: {}", result.message());
    } else {
        println!("{id}: [{name}]: FAILED:: {prefix} {}", result.message());
    }
}
