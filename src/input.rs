use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use chronos_checks::DatasetTimeInfo;

/// One extracted metadata record: the filename plus the time
/// coordinate as read from the file by an external extractor.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileRecord {
    /// The data file's name (path and extension allowed).
    pub filename: String,

    /// The numeric values of the time coordinate.
    #[serde(default)]
    pub time_values: Vec<f64>,

    /// The time coordinate's units string.
    #[serde(default)]
    pub units: String,

    /// The declared calendar; absent means `standard`.
    #[serde(default)]
    pub calendar: Option<String>,
}

impl FileRecord {
    /// Converts the record into the form the checks consume.
    pub fn to_dataset(&self) -> DatasetTimeInfo {
        DatasetTimeInfo::from_parts(
            &self.filename,
            self.time_values.clone(),
            self.units.clone(),
            self.calendar.clone().unwrap_or_default(),
        )
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(FileRecord),
    Many(Vec<FileRecord>),
}

/// Reads the metadata records from a JSON file holding either a single
/// record object or an array of them.
pub fn read_records(path: &Path) -> Result<Vec<FileRecord>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read metadata file: {}", path.display()))?;
    let parsed: OneOrMany = serde_json::from_str(&json)
        .with_context(|| format!("failed to parse metadata JSON: {}", path.display()))?;
    Ok(match parsed {
        OneOrMany::One(record) => vec![record],
        OneOrMany::Many(records) => records,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_record() {
        let json = r#"{
            "filename": "tas_Amon_HadGEM2-ES_historical_r1i1p1_185912-188411.nc",
            "time_values": [15.5, 45.0],
            "units": "days since 1859-12-01",
            "calendar": "360_day"
        }"#;
        let record: FileRecord = serde_json::from_str(json).unwrap();
        let ds = record.to_dataset();
        assert_eq!(ds.calendar_name(), "360_day");
        assert_eq!(ds.time_values(), [15.5, 45.0]);
        assert_eq!(ds.time_token(), Some("185912-188411"));
    }

    #[test]
    fn calendar_defaults_to_standard() {
        let json = r#"{
            "filename": "tas_day_m_e_r1i1p1_18591201-18591230.nc",
            "time_values": [0.0],
            "units": "days since 1859-12-01"
        }"#;
        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.to_dataset().calendar_name(), "standard");
    }

    #[test]
    fn array_of_records() {
        let json = r#"[
            {"filename": "a_yr_m_e_r1i1p1_1859-1884.nc"},
            {"filename": "a_yr_m_e_r1i1p1_1885-1939.nc"}
        ]"#;
        let records: Vec<FileRecord> = match serde_json::from_str::<OneOrMany>(json).unwrap() {
            OneOrMany::Many(r) => r,
            OneOrMany::One(_) => panic!("expected array"),
        };
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let json = r#"{"filename": "a.nc", "time_bounds": []}"#;
        assert!(serde_json::from_str::<FileRecord>(json).is_err());
    }
}
