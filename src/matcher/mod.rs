//! Convention matchers for release names.
//!
//! Each matcher recognizes one release-naming convention over the token
//! stream and either produces a structured partial parse or declines.
//! Matchers are stateless and independent; attempt order is the only
//! coupling between them, and the first structural success wins.

mod absolute;
mod daily;
mod episode;
mod season_pack;

use crate::config::ParserConfig;
use crate::lexer::Lexer;
use crate::model::{CandidateDate, DateValidator, ParsedTitle};
use crate::normalize::normalize_title;
use chrono::Local;
use tracing::debug;

/// A structural match before validation and normalization.
pub(crate) struct PartialParse {
    /// Byte span of the series-title fragment in the input.
    pub fragment: (usize, usize),
    pub kind: ParseKind,
}

/// Convention-specific payload of a structural match.
pub(crate) enum ParseKind {
    Daily(CandidateDate),
    Episode {
        season: Option<u16>,
        episodes: Vec<u16>,
    },
    SeasonPack {
        season: u16,
    },
    Absolute {
        episodes: Vec<u16>,
    },
}

/// One release-naming convention.
pub(crate) trait TitleMatcher {
    fn name(&self) -> &'static str;

    /// Recognize this convention in the token stream, or decline.
    fn try_match(&self, lexer: &Lexer) -> Option<PartialParse>;
}

/// Matchers in attempt order. Numbered markers are the most specific
/// grammar, so they go first; the bare-number absolute convention is the
/// loosest and goes last.
fn matchers() -> [&'static dyn TitleMatcher; 4] {
    [
        &episode::EpisodeMatcher,
        &daily::DailyMatcher,
        &season_pack::SeasonPackMatcher,
        &absolute::AbsoluteMatcher,
    ]
}

/// Run the matchers over `input` and assemble the final result.
///
/// Returns `None` when no convention matches, or when a date-bearing match
/// carries an inadmissible date. A matched date grammar with a bad date is
/// evidence the title is not a valid daily release, not evidence for
/// another convention, so there is no fallback once a matcher succeeds
/// structurally.
pub(crate) fn parse_with_config(input: &str, config: &ParserConfig) -> Option<ParsedTitle> {
    let lexer = Lexer::new(input);

    let (name, partial) = matchers()
        .iter()
        .find_map(|m| m.try_match(&lexer).map(|p| (m.name(), p)))?;
    debug!(matcher = name, input, "structural match");

    let fragment = fragment_text(input, partial.fragment);
    let mut parsed = ParsedTitle::new(normalize_title(fragment));

    match partial.kind {
        ParseKind::Daily(candidate) => {
            let reference = config
                .reference_date
                .unwrap_or_else(|| Local::now().date_naive());
            let validator = DateValidator::new(config.min_air_year);
            match validator.validate(candidate, reference) {
                Ok(date) => parsed.air_date = Some(date),
                Err(err) => {
                    debug!(%err, input, "rejected daily air date");
                    return None;
                }
            }
        }
        ParseKind::Episode { season, episodes } => {
            parsed.special = season == Some(0);
            parsed.season_number = season;
            parsed.episode_numbers = episodes;
        }
        ParseKind::SeasonPack { season } => {
            parsed.season_number = Some(season);
            parsed.full_season = true;
        }
        ParseKind::Absolute { episodes } => {
            parsed.absolute_episode_numbers = episodes;
        }
    }

    Some(parsed)
}

/// Slice the title fragment out of the input, dropping a leading
/// release-group bracket (`[SubGroup] Title - 01`) and the separator run
/// that joined the fragment to the matched marker.
fn fragment_text(input: &str, span: (usize, usize)) -> &str {
    let mut text = &input[span.0..span.1];

    let lead = text.trim_start();
    if lead.starts_with('[') {
        if let Some(close) = lead.find(']') {
            text = &lead[close + 1..];
        }
    }

    text.trim_matches(|c: char| matches!(c, ' ' | '.' | '-' | '_' | '[' | ']'))
}
