use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use anyhow::{Context, Result};
use serde::Deserialize;

use chronos_calendar::CalendarDate;
use chronos_checks::{MatchConfig, Tolerance};

/// Top-level chronos configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChronosConfig {
    /// Per-table tolerance overrides for the filename/time-axis match,
    /// e.g. `Amon = "days:16"`.
    #[serde(default)]
    pub tolerance: BTreeMap<String, String>,

    /// Filename dates before this point get the relaxed one-sided
    /// comparison against the time axis.
    #[serde(default = "default_epoch_threshold")]
    pub epoch_threshold: String,
}

fn default_epoch_threshold() -> String {
    "0001-01-17".to_string()
}

impl Default for ChronosConfig {
    fn default() -> Self {
        Self {
            tolerance: BTreeMap::new(),
            epoch_threshold: default_epoch_threshold(),
        }
    }
}

impl ChronosConfig {
    /// Loads the configuration, falling back to defaults when no path
    /// is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }

    /// Resolves the match configuration for a table. Precedence:
    /// command-line tolerance, then the per-table `[tolerance]` entry,
    /// then the built-in table default.
    pub fn match_config_for(
        &self,
        table: Option<&str>,
        cli_tolerance: Option<&Tolerance>,
    ) -> Result<MatchConfig> {
        let tolerance = match (cli_tolerance, table.and_then(|t| self.tolerance.get(t))) {
            (Some(t), _) => *t,
            (None, Some(entry)) => Tolerance::from_str(entry)
                .with_context(|| format!("invalid tolerance in config: '{entry}'"))?,
            (None, None) => Tolerance::default_for_table(table.unwrap_or("")),
        };
        let threshold = CalendarDate::parse(&self.epoch_threshold).with_context(|| {
            format!(
                "invalid epoch_threshold in config: '{}'",
                self.epoch_threshold
            )
        })?;
        Ok(MatchConfig::default()
            .with_tolerance(tolerance)
            .with_epoch_threshold(threshold))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = ChronosConfig::default();
        let mc = cfg.match_config_for(Some("Amon"), None).unwrap();
        assert_eq!(mc.tolerance().in_days(), 16.0);
        assert_eq!(mc.epoch_threshold(), CalendarDate::new(1, 1, 17));
    }

    #[test]
    fn per_table_override() {
        let cfg: ChronosConfig = toml::from_str(
            r#"
            epoch_threshold = "0001-02-01"

            [tolerance]
            Amon = "days:20"
            "#,
        )
        .unwrap();
        let mc = cfg.match_config_for(Some("Amon"), None).unwrap();
        assert_eq!(mc.tolerance().in_days(), 20.0);
        assert_eq!(mc.epoch_threshold(), CalendarDate::new(1, 2, 1));

        // Other tables keep their built-in defaults.
        let mc = cfg.match_config_for(Some("day"), None).unwrap();
        assert_eq!(mc.tolerance().in_days(), 1.0);
    }

    #[test]
    fn cli_tolerance_wins() {
        let cfg: ChronosConfig = toml::from_str("[tolerance]\nAmon = \"days:20\"\n").unwrap();
        let cli = Tolerance::from_str("days:5").unwrap();
        let mc = cfg.match_config_for(Some("Amon"), Some(&cli)).unwrap();
        assert_eq!(mc.tolerance().in_days(), 5.0);
    }

    #[test]
    fn bad_config_tolerance_is_reported() {
        let cfg: ChronosConfig = toml::from_str("[tolerance]\nAmon = \"16 days\"\n").unwrap();
        assert!(cfg.match_config_for(Some("Amon"), None).is_err());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        assert!(toml::from_str::<ChronosConfig>("unknown_key = 1\n").is_err());
    }
}
