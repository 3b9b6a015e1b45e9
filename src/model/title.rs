//! The structured result of a successful parse.

use chrono::NaiveDate;

/// Structured episode metadata extracted from a release name.
///
/// Exactly one naming convention produced a given `ParsedTitle`, so the
/// convention-specific fields are mutually exclusive: a daily-dated parse
/// carries an air date and nothing else, a numbered parse carries episode
/// numbers and never an air date, a season pack carries only the season.
///
/// The value is assembled once per parse call and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParsedTitle {
    /// Normalized series title key (see [`crate::normalize_title`]).
    pub series_title: String,
    /// Broadcast date for daily-dated releases.
    pub air_date: Option<NaiveDate>,
    /// Season number for season/episode and full-season releases.
    pub season_number: Option<u16>,
    /// Episode numbers within the season; empty for daily-dated releases.
    pub episode_numbers: Vec<u16>,
    /// Absolute (cross-season) episode numbers; empty for daily-dated releases.
    pub absolute_episode_numbers: Vec<u16>,
    /// True when the release is an entire-season pack.
    pub full_season: bool,
    /// True for special/OVA episodes (season zero).
    pub special: bool,
}

impl ParsedTitle {
    /// Textual rendering contract for [`air_date`](Self::air_date).
    ///
    /// Downstream matching and storage compare against this exact format;
    /// changing it is a breaking change.
    pub const AIR_DATE_FORMAT: &'static str = "%Y-%m-%d";

    pub(crate) fn new(series_title: String) -> Self {
        Self {
            series_title,
            air_date: None,
            season_number: None,
            episode_numbers: Vec::new(),
            absolute_episode_numbers: Vec::new(),
            full_season: false,
            special: false,
        }
    }

    /// The air date rendered in the canonical `yyyy-mm-dd` form.
    pub fn air_date_string(&self) -> Option<String> {
        self.air_date
            .map(|d| d.format(Self::AIR_DATE_FORMAT).to_string())
    }

    /// Returns true when this parse came from the daily-dated convention.
    pub fn is_daily(&self) -> bool {
        self.air_date.is_some()
    }
}
