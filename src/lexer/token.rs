//! Token types for the Logos-based lexer.

use logos::Logos;

/// Token types recognized by the lexer.
///
/// Each variant represents a specific pattern in release names, ordered by priority
/// where needed. The lexer automatically handles tokenization and classification.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t]+")]
pub enum Token<'src> {
    /// Season and episode identifier (e.g., S01E05, S1E1, S01E01E02, S01E12v2)
    /// Supports seasons up to 4 digits, episodes up to 4 digits, and the
    /// "EP" variant (S01EP01). Range patterns (S01E01-E05) are completed in
    /// the matcher by combining tokens.
    #[regex(
        r"(?i)S[0-9]{1,4}E[Pp]?[0-9]{1,4}(?:E[Pp]?[0-9]{1,4})*(?:v[0-9]+)?",
        priority = 10
    )]
    SeasonEpisode(&'src str),

    /// Season x episode format (e.g., 1x05, 01x05, 19x06)
    /// Lower priority than Resolution to avoid matching "1920x1080"
    #[regex(r"[0-9]{1,4}x[0-9]{1,3}", priority = 9)]
    SeasonEpisodeX(&'src str),

    /// Season-only identifier (e.g., S01, S1) - for full season releases
    /// Note: SeasonEpisode has higher priority, so this only matches when no E follows
    #[regex(r"(?i)S\d{1,4}", priority = 8)]
    SeasonOnly(&'src str),

    /// Abbreviated "Ep" episode format (e.g., Ep06, Ep1)
    #[regex(r"(?i)Ep[0-9]{1,3}", priority = 9)]
    EpNumber(&'src str),

    /// Video resolution (e.g., 2160p, 1080p, 720p, 1920x1080)
    ///
    /// Bare widths like "1080" land here too, which keeps them out of the
    /// numeric date/episode paths.
    #[regex(
        r"(?i)((2160|1080|720|480|576|360)[pi]?|1920x1080|3840x2160|1280x720)",
        priority = 10
    )]
    Resolution(&'src str),

    /// Year (1900-2099)
    #[regex(r"(19|20)\d{2}", priority = 5)]
    Year(&'src str),

    /// Dot delimiter
    #[token(".")]
    Dot,

    /// Hyphen delimiter
    #[token("-")]
    Hyphen,

    /// Underscore delimiter
    #[token("_")]
    Underscore,

    /// Ampersand character (preserved in titles)
    #[token("&")]
    Ampersand,

    /// Opening square bracket
    #[token("[")]
    BracketOpen,

    /// Closing square bracket
    #[token("]")]
    BracketClose,

    /// Opening parenthesis
    #[token("(")]
    ParenOpen,

    /// Closing parenthesis
    #[token(")")]
    ParenClose,

    /// Generic word token (lower priority than specific patterns)
    #[regex(r"[a-zA-Z][a-zA-Z0-9'&]*", priority = 1)]
    Word(&'src str),

    /// Numeric token
    #[regex(r"\d+", priority = 2)]
    Number(&'src str),
}
