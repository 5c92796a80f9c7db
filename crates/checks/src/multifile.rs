//! Continuity checking across the files of one timeseries.

use tracing::debug;

use chronos_calendar::generate;
use chronos_drs::{DrsError, FileTimeRange};

use crate::dataset::DatasetTimeInfo;
use crate::error::CheckError;
use crate::result::CheckResult;

/// Checks that a set of files tiles one continuous timeseries: no
/// gaps, no overlaps, no stray members.
///
/// The expected series is generated from the earliest filename start to
/// the latest filename end at the first file's sampling step, under the
/// first file's calendar. Each file's own filename-derived series must
/// then consume the expected series in strict order. Filename range
/// stamps must sit on the sampling grid; off-grid stamps are reported
/// as discontinuities.
///
/// # Errors
///
/// An empty file set, an unknown calendar or table, or a table without
/// a sampling frequency are configuration errors. Malformed time tokens
/// are data-quality defects and fail the check instead.
pub fn check_multifile_temporal_continuity(
    dss: &[DatasetTimeInfo],
) -> Result<CheckResult, CheckError> {
    if dss.is_empty() {
        return Err(CheckError::EmptySet);
    }
    let calendar = dss[0].calendar()?;

    let mut files = Vec::with_capacity(dss.len());
    for ds in dss {
        let label = ds.label();
        match FileTimeRange::from_tokens(ds.filename_tokens()) {
            Ok(range) => files.push((range, label)),
            Err(
                DrsError::BadTimeToken { .. }
                | DrsError::MissingTimeToken
                | DrsError::MissingTableToken,
            ) => {
                return Ok(CheckResult::fail(format!(
                    "File name does not declare a time range: {label}"
                )))
            }
            Err(e) => return Err(e.into()),
        }
    }
    files.sort_by_key(|(range, _)| (range.start(), range.end()));

    // first/last cannot fail: the set is non-empty.
    let Some(((first, _), (last, _))) = files.first().zip(files.last()) else {
        return Err(CheckError::EmptySet);
    };
    let step = first.step();
    let expected = generate(first.start(), last.end(), &step, calendar)?;
    debug!(
        files = files.len(),
        timesteps = expected.len(),
        %calendar,
        "checking timeseries continuity"
    );

    let mut idx = 0;
    for (range, label) in &files {
        let mut own = generate(range.start(), range.end(), &range.step(), calendar)?;
        if own.len() > expected.len() - idx {
            return Ok(CheckResult::fail(format!(
                "File is out of series range: {label}"
            )));
        }
        while !own.is_empty() {
            let head = expected[idx];
            match own.iter().position(|d| *d == head) {
                Some(pos) => {
                    own.remove(pos);
                    idx += 1;
                }
                None => {
                    return Ok(CheckResult::fail(format!("File not in series: {label}")));
                }
            }
        }
    }

    if idx != expected.len() {
        return Ok(CheckResult::fail(format!(
            "Temporal consistency error: expected {} timesteps, found {}",
            expected.len(),
            idx
        )));
    }
    Ok(CheckResult::pass())
}
