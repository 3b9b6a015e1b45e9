//! Absolute-numbered release matcher.
//!
//! Anime-style releases number episodes without a season:
//! `[SubGroup] Anime Title - 01 [1080p].mkv`. A bare number only counts
//! when a hyphen separates it from a preceding worded title; numeric title
//! prefixes like "24-7" carry no words before the hyphen and decline.

use super::{ParseKind, PartialParse, TitleMatcher};
use crate::lexer::{Lexer, Token};
use std::ops::Range;

pub(crate) struct AbsoluteMatcher;

impl TitleMatcher for AbsoluteMatcher {
    fn name(&self) -> &'static str {
        "absolute"
    }

    fn try_match(&self, lexer: &Lexer) -> Option<PartialParse> {
        let tokens = lexer.tokens();

        for (idx, (token, _)) in tokens.iter().enumerate() {
            let Token::Number(text) = token else {
                continue;
            };
            if text.len() > 3 {
                continue;
            }
            let Ok(episode) = text.parse::<u16>() else {
                continue;
            };
            if episode == 0 {
                continue;
            }

            let Some(hyphen_start) = preceding_hyphen(tokens, idx) else {
                continue;
            };

            let mut episodes = vec![episode];
            extend_range(tokens, idx, &mut episodes);

            return Some(PartialParse {
                fragment: (0, hyphen_start),
                kind: ParseKind::Absolute { episodes },
            });
        }

        None
    }
}

/// The number at `idx` is an absolute episode only when a hyphen joins it
/// to a worded title on the left. Returns the hyphen's start offset, which
/// bounds the title fragment.
fn preceding_hyphen(tokens: &[(Token, Range<usize>)], idx: usize) -> Option<usize> {
    if idx == 0 {
        return None;
    }
    let (Token::Hyphen, span) = &tokens[idx - 1] else {
        return None;
    };
    tokens[..idx - 1]
        .iter()
        .any(|(t, _)| matches!(t, Token::Word(_)))
        .then_some(span.start)
}

/// Expand a trailing range (`- 01-03`) into the episode list.
fn extend_range(tokens: &[(Token, Range<usize>)], idx: usize, episodes: &mut Vec<u16>) {
    let Some((Token::Hyphen, _)) = tokens.get(idx + 1) else {
        return;
    };
    let Some((Token::Number(text), _)) = tokens.get(idx + 2) else {
        return;
    };
    let Ok(end) = text.parse::<u16>() else { return };
    let Some(&start) = episodes.last() else { return };
    if end <= start || end > start + 50 {
        return;
    }
    episodes.extend(start + 1..=end);
}
