//! Daily-dated convention matcher.
//!
//! Recognizes a contiguous year-month-day triple with consistent delimiters
//! (`2010.10.11`, `2011 04 18`, `- 2011-04-12 -`), optionally preceded by a
//! title fragment and followed by arbitrary trailing tokens.

use super::{ParseKind, PartialParse, TitleMatcher};
use crate::lexer::{Lexer, Token};
use crate::model::CandidateDate;
use std::ops::Range;

pub(crate) struct DailyMatcher;

/// Delimiter between the components of a date triple. All three components
/// must use the same one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Sep {
    Space,
    Dot,
    Dash,
    Underscore,
}

impl TitleMatcher for DailyMatcher {
    fn name(&self) -> &'static str {
        "daily"
    }

    fn try_match(&self, lexer: &Lexer) -> Option<PartialParse> {
        let tokens = lexer.tokens();
        let input = lexer.input();

        // Leftmost valid triple wins: a release-group suffix never
        // legitimately contains a second date. Year tokens that do not head
        // a valid triple (a numeric-led title like "2020.NZ") are skipped
        // and stay part of the title fragment.
        for (idx, (token, span)) in tokens.iter().enumerate() {
            let Token::Year(year_text) = token else {
                continue;
            };

            let Some((sep1, month_idx)) = delimited_number(tokens, input, idx) else {
                continue;
            };
            let Some((sep2, day_idx)) = delimited_number(tokens, input, month_idx) else {
                continue;
            };
            if sep1 != sep2 {
                continue;
            }

            let month = number_at(tokens, month_idx);
            let day = number_at(tokens, day_idx);
            let year = year_text.parse().ok()?;

            if let Some(candidate) = plausible_triple(year, month, day) {
                return Some(PartialParse {
                    fragment: (0, span.start),
                    kind: ParseKind::Daily(candidate),
                });
            }
        }

        None
    }
}

/// Find a 1-2 digit number following token `idx`, separated by exactly one
/// delimiter character or by whitespace. Returns the separator and the
/// number's token index.
fn delimited_number(
    tokens: &[(Token, Range<usize>)],
    input: &str,
    idx: usize,
) -> Option<(Sep, usize)> {
    let end = tokens[idx].1.end;
    let (next, next_span) = tokens.get(idx + 1)?;

    match next {
        Token::Number(text) if text.len() <= 2 => {
            // No delimiter token in between: the gap must be whitespace.
            let gap = &input[end..next_span.start];
            (!gap.is_empty() && gap.chars().all(char::is_whitespace))
                .then_some((Sep::Space, idx + 1))
        }
        Token::Dot | Token::Hyphen | Token::Underscore => {
            let sep = match next {
                Token::Dot => Sep::Dot,
                Token::Hyphen => Sep::Dash,
                _ => Sep::Underscore,
            };
            let (after, after_span) = tokens.get(idx + 2)?;
            match after {
                Token::Number(text) if text.len() <= 2 => {
                    // Exactly one delimiter character, nothing around it.
                    let tight = next_span.start == end && after_span.start == next_span.end;
                    tight.then_some((sep, idx + 2))
                }
                _ => None,
            }
        }
        _ => None,
    }
}

fn number_at(tokens: &[(Token, Range<usize>)], idx: usize) -> u32 {
    match tokens[idx].0 {
        Token::Number(text) => text.parse().unwrap_or(0),
        _ => 0,
    }
}

/// Range-check the triple, disambiguating the day-month-reversed convention:
/// when the middle component cannot be a month but the final one can, the
/// two are swapped (`2012.16.02` is February 16th). When both fit, the
/// month-first reading wins (`2011.12.02` is December 2nd).
fn plausible_triple(year: i32, month: u32, day: u32) -> Option<CandidateDate> {
    let (month, day) = if month > 12 && day <= 12 {
        (day, month)
    } else {
        (month, day)
    };

    ((1..=12).contains(&month) && (1..=31).contains(&day))
        .then(|| CandidateDate::new(year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matched(input: &str) -> Option<(String, CandidateDate)> {
        let lexer = Lexer::new(input);
        let partial = DailyMatcher.try_match(&lexer)?;
        let ParseKind::Daily(candidate) = partial.kind else {
            return None;
        };
        let fragment = super::super::fragment_text(input, partial.fragment);
        Some((fragment.to_string(), candidate))
    }

    #[test]
    fn dot_delimited_date_after_title() {
        let (fragment, date) =
            matched("The.Daily.Show.2010.10.11.Johnny.Knoxville.iTouch-MW").unwrap();
        assert_eq!(fragment, "The.Daily.Show");
        assert_eq!(date, CandidateDate::new(2010, 10, 11));
    }

    #[test]
    fn space_delimited_date() {
        let (fragment, date) = matched("Conan 2011 04 18 Emma Roberts HDTV XviD BFF").unwrap();
        assert_eq!(fragment, "Conan");
        assert_eq!(date, CandidateDate::new(2011, 4, 18));
    }

    #[test]
    fn dashed_date_block_between_separators() {
        let (fragment, date) =
            matched("The Daily Show - 2011-04-12 - Gov. Deval Patrick").unwrap();
        assert_eq!(fragment, "The Daily Show");
        assert_eq!(date, CandidateDate::new(2011, 4, 12));
    }

    #[test]
    fn date_at_start_yields_empty_fragment() {
        let (fragment, date) = matched("2011.01.10 - Denis Leary - HD TV.mkv").unwrap();
        assert_eq!(fragment, "");
        assert_eq!(date, CandidateDate::new(2011, 1, 10));
    }

    #[test]
    fn numeric_led_title_is_not_mistaken_for_the_date() {
        // "2020" heads no valid triple; the real date starts at "2012".
        let (fragment, date) = matched("2020.NZ.2012.16.02.PDTV.XviD-C4TV").unwrap();
        assert_eq!(fragment, "2020.NZ");
        assert_eq!(date, CandidateDate::new(2012, 2, 16));
    }

    #[test]
    fn month_first_wins_when_both_components_fit() {
        let (_, date) = matched("2020.NZ.2011.12.02.PDTV.XviD-C4TV").unwrap();
        assert_eq!(date, CandidateDate::new(2011, 12, 2));
    }

    #[test]
    fn day_month_swap_when_middle_exceeds_twelve() {
        let (_, date) = matched("2020.NZ.2012.13.02.PDTV.XviD-C4TV").unwrap();
        assert_eq!(date, CandidateDate::new(2012, 2, 13));
    }

    #[test]
    fn mixed_delimiters_decline() {
        assert!(matched("Show 2011-04 18 HDTV").is_none());
    }

    #[test]
    fn both_components_beyond_twelve_decline() {
        assert!(matched("Show.2011.16.13.HDTV").is_none());
    }

    #[test]
    fn year_without_following_numbers_declines() {
        assert!(matched("The.Matrix.1999.BluRay.x264-GROUP").is_none());
        assert!(matched("Show 2011").is_none());
    }

    #[test]
    fn three_digit_trailing_number_declines() {
        assert!(matched("Show.2011.04.189.HDTV").is_none());
    }
}
