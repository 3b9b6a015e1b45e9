//! Season/episode convention matcher.
//!
//! Covers the standard numbered grammars: `S01E05`, multi-episode
//! `S01E01E02`, cross-token ranges `S01E01-E05`, the `1x05` style, split
//! forms like `s03.e05` / `S1-E1` / `S15 E06` / `s06.01`, and the
//! abbreviated `Ep06` form. Season zero marks a special.

use super::{ParseKind, PartialParse, TitleMatcher};
use crate::lexer::{Lexer, Token};
use std::ops::Range;

pub(crate) struct EpisodeMatcher;

impl TitleMatcher for EpisodeMatcher {
    fn name(&self) -> &'static str {
        "season-episode"
    }

    fn try_match(&self, lexer: &Lexer) -> Option<PartialParse> {
        let tokens = lexer.tokens();

        for (idx, (token, span)) in tokens.iter().enumerate() {
            match token {
                Token::SeasonEpisode(text) | Token::SeasonEpisodeX(text) => {
                    let Some((season, mut episodes)) = parse_marker(text) else {
                        continue;
                    };
                    extend_ranges(tokens, idx, &mut episodes);
                    return Some(PartialParse {
                        fragment: (0, span.start),
                        kind: ParseKind::Episode {
                            season: Some(season),
                            episodes,
                        },
                    });
                }
                Token::SeasonOnly(text) => {
                    let Some(season) = parse_season_only(text) else {
                        continue;
                    };
                    // Split forms put the episode in a separate token.
                    if let Some(episode) = split_episode(tokens, idx) {
                        return Some(PartialParse {
                            fragment: (0, span.start),
                            kind: ParseKind::Episode {
                                season: Some(season),
                                episodes: vec![episode],
                            },
                        });
                    }
                    // Bare season: leave it for the season-pack matcher.
                }
                Token::EpNumber(text) => {
                    let Some(episode) = parse_ep_number(text) else {
                        continue;
                    };
                    return Some(PartialParse {
                        fragment: (0, span.start),
                        kind: ParseKind::Episode {
                            season: None,
                            episodes: vec![episode],
                        },
                    });
                }
                _ => {}
            }
        }

        None
    }
}

/// Parse season number from a season-only token (e.g., "S01" -> 1).
pub(super) fn parse_season_only(text: &str) -> Option<u16> {
    let digits = text.strip_prefix(['S', 's'])?;
    digits.parse().ok()
}

/// Parse an `E##`-shaped word (e.g., "e05" -> 5, "E12" -> 12).
/// This handles the episode portion of "s03.e05" style patterns.
fn parse_e_number(text: &str) -> Option<u16> {
    let rest = text.strip_prefix(['E', 'e'])?;
    let digits: String = rest.chars().take_while(char::is_ascii_digit).collect();
    if digits.is_empty() || digits.len() != rest.len() {
        return None;
    }
    digits.parse().ok()
}

/// Parse the abbreviated "Ep##" form (e.g., "Ep06" -> 6).
fn parse_ep_number(text: &str) -> Option<u16> {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse().ok()
}

/// Look past a bare season token for a split episode component:
/// `s03.e05`, `S1-E1`, `S15 E06`, `s06.01`.
fn split_episode(tokens: &[(Token, Range<usize>)], idx: usize) -> Option<u16> {
    // Space-separated: whitespace is skipped, so "E06" is the next token.
    if let Some((Token::Word(text), _)) = tokens.get(idx + 1) {
        return parse_e_number(text);
    }

    if matches!(
        tokens.get(idx + 1),
        Some((Token::Dot | Token::Hyphen | Token::Underscore, _))
    ) {
        match tokens.get(idx + 2) {
            Some((Token::Word(text), _)) => return parse_e_number(text),
            Some((Token::Number(text), _)) => {
                // s06.01 form; anything longer than two digits is not an
                // episode slot.
                if text.len() <= 2 {
                    let episode: u16 = text.parse().ok()?;
                    if (1..=99).contains(&episode) {
                        return Some(episode);
                    }
                }
            }
            _ => {}
        }
    }

    None
}

/// Parse season and episode numbers from a combined marker token.
///
/// Supports:
/// - S01E05 -> (1, [5])
/// - S01E01E02 -> (1, [1, 2])
/// - S01EP01 -> (1, [1])
/// - S01E12v2 -> (1, [12]) (version suffix ignored)
/// - 1x05 -> (1, [5])
fn parse_marker(text: &str) -> Option<(u16, Vec<u16>)> {
    let upper = text.to_uppercase();

    // Strip a trailing version suffix (v2, v3, ...).
    let clean = match upper.find('V') {
        Some(pos) if upper[pos + 1..].chars().all(|c| c.is_ascii_digit()) => &upper[..pos],
        _ => upper.as_str(),
    };

    if let Some(rest) = clean.strip_prefix('S') {
        let mut parts = rest.split('E');
        let season: u16 = parts.next()?.parse().ok()?;
        let mut episodes = Vec::new();
        for part in parts {
            // EP## variant leaves a leading P on the episode digits.
            let part = part.trim_start_matches('P');
            if part.is_empty() {
                continue;
            }
            let episode: u16 = part.parse().ok()?;
            if !episodes.contains(&episode) {
                episodes.push(episode);
            }
        }
        if !episodes.is_empty() {
            return Some((season, episodes));
        }
        return None;
    }

    // 1x05 style.
    let (season_str, episode_str) = text.split_once(['x', 'X'])?;
    let season: u16 = season_str.parse().ok()?;
    let episode: u16 = episode_str.parse().ok()?;

    // Resolution-like widths are never seasons (1920x1080 etc.).
    let is_resolution_width = matches!(
        season,
        1920 | 3840 | 1280 | 2560 | 2880 | 1440 | 640 | 720 | 854
    );
    if is_resolution_width {
        return None;
    }

    Some((season, vec![episode]))
}

/// Expand cross-token episode ranges following the marker at `idx`:
/// `S01E01-E05`, `S01E01-03`, chained `S02E03-04-05`.
fn extend_ranges(tokens: &[(Token, Range<usize>)], mut idx: usize, episodes: &mut Vec<u16>) {
    while idx + 2 < tokens.len() {
        if !matches!(tokens[idx + 1].0, Token::Hyphen) {
            break;
        }

        let end = match &tokens[idx + 2].0 {
            Token::Word(text) => parse_e_number(text),
            // A bare range terminator must look like an episode slot, not a
            // release-group or checksum number.
            Token::Number(text) if text.len() == 2 => text.parse().ok(),
            _ => None,
        };

        let Some(end) = end else { break };
        let Some(&start) = episodes.last() else { break };
        if end <= start || end > start + 50 {
            break;
        }

        for episode in start + 1..=end {
            if !episodes.contains(&episode) {
                episodes.push(episode);
            }
        }
        idx += 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(input: &str) -> Option<(Option<u16>, Vec<u16>)> {
        let lexer = Lexer::new(input);
        let partial = EpisodeMatcher.try_match(&lexer)?;
        match partial.kind {
            ParseKind::Episode { season, episodes } => Some((season, episodes)),
            _ => None,
        }
    }

    #[test]
    fn parse_marker_standard() {
        assert_eq!(parse_marker("S01E05"), Some((1, vec![5])));
        assert_eq!(parse_marker("S1E1"), Some((1, vec![1])));
        assert_eq!(parse_marker("s02e11"), Some((2, vec![11])));
    }

    #[test]
    fn parse_marker_multi_episode() {
        assert_eq!(parse_marker("S01E01E02"), Some((1, vec![1, 2])));
    }

    #[test]
    fn parse_marker_ep_variant_and_version() {
        assert_eq!(parse_marker("S01EP01"), Some((1, vec![1])));
        assert_eq!(parse_marker("S01E12v2"), Some((1, vec![12])));
    }

    #[test]
    fn parse_marker_x_format() {
        assert_eq!(parse_marker("1x05"), Some((1, vec![5])));
        assert_eq!(parse_marker("1920x1080"), None);
    }

    #[test]
    fn standard_episode_release() {
        let (season, episodes) = matched("Breaking.Bad.S01E01.720p.BluRay.x264-DEMAND").unwrap();
        assert_eq!(season, Some(1));
        assert_eq!(episodes, vec![1]);
    }

    #[test]
    fn cross_token_range() {
        let (season, episodes) = matched("Show.S01E01-E04.720p.HDTV").unwrap();
        assert_eq!(season, Some(1));
        assert_eq!(episodes, vec![1, 2, 3, 4]);
    }

    #[test]
    fn range_does_not_swallow_release_group_digits() {
        let (_, episodes) = matched("Show.S01E05.x264-103").unwrap();
        assert_eq!(episodes, vec![5]);
    }

    #[test]
    fn split_forms() {
        assert_eq!(matched("Show.s03.e05.720p"), Some((Some(3), vec![5])));
        assert_eq!(matched("Show.S1-E1.720p"), Some((Some(1), vec![1])));
        assert_eq!(matched("Show S15 E06 HDTV"), Some((Some(15), vec![6])));
        assert_eq!(matched("Show.s06.01.720p"), Some((Some(6), vec![1])));
    }

    #[test]
    fn ep_abbreviation_has_no_season() {
        assert_eq!(matched("Show.Ep06.HDTV"), Some((None, vec![6])));
    }

    #[test]
    fn season_zero_is_recognized() {
        assert_eq!(matched("Show.S00E01.Christmas.720p"), Some((Some(0), vec![1])));
    }

    #[test]
    fn bare_season_is_left_for_the_pack_matcher() {
        assert!(matched("Breaking.Bad.S02.1080p.BluRay").is_none());
    }

    #[test]
    fn daily_dated_titles_decline() {
        assert!(matched("The.Daily.Show.2010.10.11.Johnny.Knoxville").is_none());
    }
}
