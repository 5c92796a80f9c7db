use chronos_checks::{check_multifile_temporal_continuity, DatasetTimeInfo};

fn dataset(table: &str, token: &str, calendar: &str) -> DatasetTimeInfo {
    DatasetTimeInfo::from_parts(
        &format!("tas_{table}_HadGEM2-ES_historical_r1i1p1_{token}.nc"),
        vec![],
        "days since 1859-12-01",
        calendar,
    )
}

fn yearly_set(tokens: &[&str]) -> Vec<DatasetTimeInfo> {
    tokens.iter().map(|t| dataset("yr", t, "360_day")).collect()
}

#[test]
fn yearly_set_passes() {
    let dss = yearly_set(&["1859-1884", "1885-1939", "1940-1983", "1984-2005"]);
    let r = check_multifile_temporal_continuity(&dss).unwrap();
    assert!(r.passed(), "{}", r.message());
}

#[test]
fn yearly_gap_is_detected() {
    // 1940 is covered by no file.
    let dss = yearly_set(&["1859-1884", "1885-1939", "1941-1983", "1984-2005"]);
    let r = check_multifile_temporal_continuity(&dss).unwrap();
    assert!(!r.passed());
    assert!(r.message().contains("1941-1983"), "{}", r.message());
}

#[test]
fn yearly_overlap_is_detected() {
    // 1884 is covered twice.
    let dss = yearly_set(&["1859-1884", "1884-1939", "1940-1983", "1984-2005"]);
    let r = check_multifile_temporal_continuity(&dss).unwrap();
    assert!(!r.passed(), "{}", r.message());
}

#[test]
fn daily_set_across_months() {
    let dss: Vec<_> = ["18591201-18591230", "18600101-18600130", "18600201-18600230"]
        .iter()
        .map(|t| dataset("day", t, "360_day"))
        .collect();
    let r = check_multifile_temporal_continuity(&dss).unwrap();
    assert!(r.passed(), "{}", r.message());
}

#[test]
fn six_hourly_set() {
    let dss: Vec<_> = ["1999010100-1999013118", "1999020100-1999022818"]
        .iter()
        .map(|t| dataset("6hrLev", t, "standard"))
        .collect();
    let r = check_multifile_temporal_continuity(&dss).unwrap();
    assert!(r.passed(), "{}", r.message());
}

#[test]
fn single_file_set_passes() {
    let dss = yearly_set(&["1859-2005"]);
    assert!(check_multifile_temporal_continuity(&dss).unwrap().passed());
}

#[test]
fn malformed_time_token_fails() {
    let dss = vec![dataset("yr", "1859-18x4", "360_day")];
    let r = check_multifile_temporal_continuity(&dss).unwrap();
    assert!(!r.passed());
    assert!(r.message().contains("time range"), "{}", r.message());
}

#[test]
fn continuity_check_is_idempotent() {
    let dss = yearly_set(&["1859-1884", "1885-1939", "1940-1983", "1984-2005"]);
    let first = check_multifile_temporal_continuity(&dss).unwrap();
    let second = check_multifile_temporal_continuity(&dss).unwrap();
    assert_eq!(first, second);
}
