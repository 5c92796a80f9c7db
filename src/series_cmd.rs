//! Series command: check timeseries continuity across metadata records.

use anyhow::{bail, Result};
use tracing::{info, info_span};

use chronos_checks::check_multifile_temporal_continuity;

use crate::cli::SeriesArgs;
use crate::input::read_records;

/// Run the continuity check over all records from all metadata files.
pub fn run(args: SeriesArgs) -> Result<()> {
    let _cmd = info_span!("series").entered();

    let mut datasets = Vec::new();
    for path in &args.files {
        for record in read_records(path)? {
            datasets.push(record.to_dataset());
        }
    }
    info!(files = datasets.len(), "checking timeseries continuity");

    let result = check_multifile_temporal_continuity(&datasets)?;
    if result.passed() {
        println!("T1.006: [check_multifile_temporal_continuity]: OK");
        Ok(())
    } else {
        println!(
            "T1.006: [check_multifile_temporal_continuity]: FAILED:: {}",
            result.message()
        );
        bail!("timeseries is not continuous");
    }
}
