//! Air-date candidate extraction and admissibility policy.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Earliest admissible air year. Anything older is treated as a parse
/// artifact rather than a real broadcast date.
pub const MIN_AIR_YEAR: i32 = 1970;

/// Raw year/month/day integers extracted by a matcher.
///
/// A candidate is only range-plausible, never guaranteed to name a real
/// calendar date (Feb 30 fits the ranges). [`DateValidator::validate`]
/// performs the actual calendar construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateDate {
    pub year: i32,
    pub month: u32,
    pub day: u32,
}

impl CandidateDate {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        Self { year, month, day }
    }
}

/// Reasons an extracted date is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DateError {
    /// The day/month combination does not exist (Feb 30, month 13).
    #[error("{0:?} does not name a real calendar date")]
    MalformedDate(CandidateDate),

    /// Structurally valid date below the year floor.
    #[error("air date {0} predates the {1} floor")]
    TooOld(NaiveDate, i32),

    /// Structurally valid date later than the reference date. A release
    /// cannot predate its own air date, so the tolerance is zero.
    #[error("air date {0} is in the future")]
    TooFarInFuture(NaiveDate),
}

/// Applies the two-sided admissibility bound that distinguishes a genuine
/// air date from three coincidental digit groups.
#[derive(Debug, Clone, Copy)]
pub struct DateValidator {
    min_year: i32,
}

impl DateValidator {
    pub fn new(min_year: i32) -> Self {
        Self { min_year }
    }

    /// Construct and admit a calendar date, or report why it is rejected.
    ///
    /// `reference` is the caller's notion of "today"; dates strictly after
    /// it are rejected, the reference date itself passes.
    pub fn validate(
        &self,
        candidate: CandidateDate,
        reference: NaiveDate,
    ) -> Result<NaiveDate, DateError> {
        let date = NaiveDate::from_ymd_opt(candidate.year, candidate.month, candidate.day)
            .ok_or(DateError::MalformedDate(candidate))?;

        if date.year() < self.min_year {
            return Err(DateError::TooOld(date, self.min_year));
        }

        if date > reference {
            return Err(DateError::TooFarInFuture(date));
        }

        Ok(date)
    }
}

impl Default for DateValidator {
    fn default() -> Self {
        Self::new(MIN_AIR_YEAR)
    }
}
