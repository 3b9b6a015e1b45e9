//! A parser for episodic media release names.
//!
//! Release names pack a series title, an episode designator, and assorted
//! quality/source tags into a single string with ad-hoc punctuation:
//!
//! ```text
//! The.Daily.Show.2010.10.11.Johnny.Knoxville.iTouch-MW
//! Breaking.Bad.S01E01.720p.BluRay.x264-DEMAND
//! [SubGroup] Anime Title - 01 [1080p].mkv
//! ```
//!
//! This crate recognizes the common naming conventions (daily air dates,
//! `S01E05`-style markers, full-season packs, absolute anime numbering) and
//! returns the series title in a normalized comparison form together with
//! the structured episode designator.
//!
//! # Quick Start
//!
//! ```
//! use episodic_parser::parse_title;
//!
//! let parsed = parse_title("The.Daily.Show.2010.10.11.Johnny.Knoxville.iTouch-MW").unwrap();
//! assert_eq!(parsed.series_title, "thedailyshow");
//! assert_eq!(parsed.air_date_string().as_deref(), Some("2010-10-11"));
//!
//! let parsed = parse_title("Breaking.Bad.S01E01.720p.BluRay.x264-DEMAND").unwrap();
//! assert_eq!(parsed.series_title, "breakingbad");
//! assert_eq!(parsed.season_number, Some(1));
//! assert_eq!(parsed.episode_numbers, vec![1]);
//! ```
//!
//! # Configuration
//!
//! Daily air dates are checked against a reference "today"; fix it through
//! [`ParserConfig`] when results must not depend on the wall clock:
//!
//! ```
//! use episodic_parser::{Parser, config::ParserConfig};
//! use chrono::NaiveDate;
//!
//! let config = ParserConfig::builder()
//!     .reference_date(NaiveDate::from_ymd_opt(2014, 6, 1).unwrap())
//!     .build();
//! let parser = Parser::new(config);
//!
//! assert!(parser.parse("Show.2013.05.01.HDTV").is_some());
//! assert!(parser.parse("Show.2014.06.02.HDTV").is_none()); // after the reference
//! ```

pub mod config;
pub mod lexer;
mod matcher;
pub mod model;
mod normalize;

pub use config::ParserConfig;
pub use model::{CandidateDate, DateError, DateValidator, ParsedTitle};
pub use normalize::normalize_title;

/// Parse a release name with default configuration.
///
/// The future-date check reads the local calendar date at call time; use
/// [`Parser`] with a fixed reference date when that is not acceptable.
///
/// Returns `None` when no naming convention matches, or when a matched
/// daily date is not an admissible air date.
pub fn parse_title(input: &str) -> Option<ParsedTitle> {
    matcher::parse_with_config(input, &ParserConfig::default())
}

/// A release-name parser with explicit configuration.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    config: ParserConfig,
}

impl Parser {
    /// Create a parser with the given configuration.
    pub fn new(config: ParserConfig) -> Self {
        Self { config }
    }

    /// Parse a release name.
    pub fn parse(&self, input: &str) -> Option<ParsedTitle> {
        matcher::parse_with_config(input, &self.config)
    }
}
