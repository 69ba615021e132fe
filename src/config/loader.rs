//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading calendar
//! configuration from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::info;

use crate::calendar::{DefaultPatternProvider, PatternCatalog, ShiftCalendar};
use crate::error::{CalendarError, CalendarResult};
use crate::models::ShiftPattern;

use super::types::{CalendarConfig, CalendarSettings, PatternsConfig, WorkingHours};

/// Loads and provides access to calendar configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// ├── calendar.yaml   # Reference date and working hours
/// └── patterns.yaml   # Shift patterns keyed by shift type code
/// ```
///
/// Every pattern is validated on load, and the reference date must be a
/// Monday.
///
/// # Example
///
/// ```no_run
/// use shift_calendar::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Anchored to {}", loader.calendar().reference_date());
/// # Ok::<(), shift_calendar::error::CalendarError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalendarConfig,
    calendar: ShiftCalendar,
    catalog: PatternCatalog,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - either file is missing ([`CalendarError::ConfigNotFound`])
    /// - either file contains invalid YAML ([`CalendarError::ConfigParseError`])
    /// - a pattern breaks its invariants ([`CalendarError::InvalidPattern`])
    /// - the reference date is not a Monday ([`CalendarError::InvalidReferenceDate`])
    pub fn load<P: AsRef<Path>>(path: P) -> CalendarResult<Self> {
        let path = path.as_ref();

        let settings = Self::load_yaml::<CalendarSettings>(&path.join("calendar.yaml"))?;
        let patterns = Self::load_yaml::<PatternsConfig>(&path.join("patterns.yaml"))?;

        let loader = Self::from_config(CalendarConfig::new(settings, patterns.patterns))?;
        info!(
            path = %path.display(),
            reference_date = %loader.calendar.reference_date(),
            patterns = loader.config.patterns().len(),
            "Loaded calendar configuration"
        );
        Ok(loader)
    }

    /// Builds a loader from an in-memory configuration, with the built-in
    /// fallback patterns.
    ///
    /// # Errors
    ///
    /// Same validation as [`ConfigLoader::load`].
    pub fn from_config(config: CalendarConfig) -> CalendarResult<Self> {
        Self::with_defaults(config, DefaultPatternProvider::builtin())
    }

    /// Builds a loader from an in-memory configuration and a fallback
    /// provider.
    ///
    /// # Errors
    ///
    /// Same validation as [`ConfigLoader::load`].
    pub fn with_defaults(config: CalendarConfig, defaults: DefaultPatternProvider) -> CalendarResult<Self> {
        Self::validate_patterns(config.patterns())?;
        let calendar = ShiftCalendar::new(config.settings().reference_date)?;
        let catalog = PatternCatalog::new(config.patterns().clone(), defaults);

        Ok(Self {
            config,
            calendar,
            catalog,
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> CalendarResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| CalendarError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| CalendarError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Validates patterns in code order so the first error is stable.
    fn validate_patterns(patterns: &HashMap<String, ShiftPattern>) -> CalendarResult<()> {
        let mut codes: Vec<&String> = patterns.keys().collect();
        codes.sort();
        for code in codes {
            patterns[code].validate(code)?;
        }
        Ok(())
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Returns the calculator anchored to the configured reference date.
    pub fn calendar(&self) -> &ShiftCalendar {
        &self.calendar
    }

    /// Returns the pattern catalog.
    pub fn catalog(&self) -> &PatternCatalog {
        &self.catalog
    }

    /// Returns the working hours.
    pub fn hours(&self) -> &WorkingHours {
        &self.config.settings().hours
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::PatternSource;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    fn config_path() -> &'static str {
        "./config/default"
    }

    fn settings(reference_date: NaiveDate) -> CalendarSettings {
        CalendarSettings {
            reference_date,
            hours: WorkingHours::default(),
        }
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(
            loader.calendar().reference_date(),
            NaiveDate::from_ymd_opt(2025, 12, 29).unwrap()
        );
        assert_eq!(loader.hours().ordinary_daily_hours, Decimal::new(85, 1));
        assert_eq!(loader.hours().reduction_hours, Decimal::ONE);
    }

    #[test]
    fn test_loaded_patterns_resolve_as_configured() {
        let loader = ConfigLoader::load(config_path()).unwrap();
        for code in ["5x2", "6x1", "rotativo_2s", "especial_28"] {
            let resolved = loader.catalog().resolve(code).unwrap();
            assert_eq!(resolved.source, PatternSource::Configured, "{}", code);
        }
    }

    #[test]
    fn test_load_missing_directory_returns_error() {
        let result = ConfigLoader::load("/nonexistent/path");
        match result {
            Err(CalendarError::ConfigNotFound { path }) => {
                assert!(path.contains("calendar.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_from_config_rejects_invalid_pattern() {
        let mut patterns = HashMap::new();
        patterns.insert(
            "rotativo_3s".to_string(),
            ShiftPattern::Rotating {
                cycle: 3,
                weeks: vec![],
            },
        );
        let config = CalendarConfig::new(
            settings(NaiveDate::from_ymd_opt(2025, 12, 29).unwrap()),
            patterns,
        );

        match ConfigLoader::from_config(config) {
            Err(CalendarError::InvalidPattern { code, .. }) => assert_eq!(code, "rotativo_3s"),
            other => panic!("Expected InvalidPattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_config_rejects_non_monday_reference() {
        let config = CalendarConfig::new(
            settings(NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()),
            HashMap::new(),
        );
        assert!(matches!(
            ConfigLoader::from_config(config),
            Err(CalendarError::InvalidReferenceDate { .. })
        ));
    }

    #[test]
    fn test_with_empty_defaults_has_no_fallback() {
        let config = CalendarConfig::new(
            settings(NaiveDate::from_ymd_opt(2025, 12, 29).unwrap()),
            HashMap::new(),
        );
        let loader = ConfigLoader::with_defaults(config, DefaultPatternProvider::empty()).unwrap();
        assert!(loader.catalog().resolve("5x2").is_none());
    }
}
