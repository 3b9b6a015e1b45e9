//! Full-season release matcher.
//!
//! A bare season marker with no episode component (`Breaking.Bad.S02.1080p`)
//! designates the whole season. Runs after the episode matcher, so any
//! season marker with an attached or split episode has already been claimed.

use super::{ParseKind, PartialParse, TitleMatcher};
use crate::lexer::{Lexer, Token};

pub(crate) struct SeasonPackMatcher;

impl TitleMatcher for SeasonPackMatcher {
    fn name(&self) -> &'static str {
        "season-pack"
    }

    fn try_match(&self, lexer: &Lexer) -> Option<PartialParse> {
        for (token, span) in lexer.tokens() {
            let Token::SeasonOnly(text) = token else {
                continue;
            };
            let season = super::episode::parse_season_only(text)?;
            return Some(PartialParse {
                fragment: (0, span.start),
                kind: ParseKind::SeasonPack { season },
            });
        }

        None
    }
}
