//! Parser configuration.

use crate::model::MIN_AIR_YEAR;
use chrono::NaiveDate;

/// Configuration for the parser.
///
/// Use the builder pattern to create a configuration:
///
/// ```
/// use episodic_parser::config::ParserConfig;
/// use chrono::NaiveDate;
///
/// let config = ParserConfig::builder()
///     .reference_date(NaiveDate::from_ymd_opt(2014, 6, 1).unwrap())
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ParserConfig {
    /// Reference "today" used by the future-date check.
    ///
    /// When unset, the local calendar date is taken at each parse call.
    /// Tests fix this to keep the future boundary deterministic.
    pub reference_date: Option<NaiveDate>,

    /// Earliest admissible air year.
    /// Default: [`MIN_AIR_YEAR`]
    pub min_air_year: i32,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            reference_date: None,
            min_air_year: MIN_AIR_YEAR,
        }
    }
}

impl ParserConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration builder.
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }
}

/// Builder for `ParserConfig`.
#[derive(Debug, Clone, Default)]
pub struct ParserConfigBuilder {
    reference_date: Option<NaiveDate>,
    min_air_year: Option<i32>,
}

impl ParserConfigBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the reference date used by the future-date check.
    ///
    /// Air dates strictly later than this date are rejected. Without a
    /// fixed reference the parser reads the local calendar date, which
    /// makes results depend on when the call happens.
    pub fn reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Set the earliest admissible air year.
    ///
    /// Default: [`MIN_AIR_YEAR`]
    pub fn min_air_year(mut self, year: i32) -> Self {
        self.min_air_year = Some(year);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ParserConfig {
        ParserConfig {
            reference_date: self.reference_date,
            min_air_year: self.min_air_year.unwrap_or(MIN_AIR_YEAR),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = ParserConfig::default();
        assert!(config.reference_date.is_none());
        assert_eq!(config.min_air_year, MIN_AIR_YEAR);
    }

    #[test]
    fn builder_pattern() {
        let reference = NaiveDate::from_ymd_opt(2014, 6, 1).unwrap();
        let config = ParserConfig::builder()
            .reference_date(reference)
            .min_air_year(2000)
            .build();

        assert_eq!(config.reference_date, Some(reference));
        assert_eq!(config.min_air_year, 2000);
    }

    #[test]
    fn builder_partial() {
        let config = ParserConfig::builder().min_air_year(1990).build();
        assert!(config.reference_date.is_none());
        assert_eq!(config.min_air_year, 1990);
    }
}
