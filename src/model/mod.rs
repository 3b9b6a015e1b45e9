//! Data model types for parsed release information.

mod date;
mod title;

pub use date::{CandidateDate, DateError, DateValidator, MIN_AIR_YEAR};
pub use title::ParsedTitle;
