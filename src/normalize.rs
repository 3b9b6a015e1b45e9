//! Series-title normalization.
//!
//! Callers compare a parsed `series_title` against independently cleaned
//! expected titles, so this function is part of the public contract and
//! must stay in lockstep with whatever cleaning integrators apply.

/// Joining words dropped from everywhere but the leading position.
/// "The Daily Show" keeps its leading article; "Law and Order" loses "and".
const JOINING_WORDS: &[&str] = &["a", "an", "the", "and", "or", "of"];

/// Reduce a raw title fragment to its canonical comparison key.
///
/// Word-separator punctuation is stripped entirely (not replaced), the
/// result is lowercased, and non-leading joining words are removed:
/// `"The.Daily.Show"` and `"The Daily Show"` both normalize to
/// `"thedailyshow"`, `"2020.NZ"` to `"2020nz"`.
///
/// Normalization is idempotent: applying it to an already-normalized key
/// returns the key unchanged.
pub fn normalize_title(raw: &str) -> String {
    let mut key = String::with_capacity(raw.len());

    for (i, word) in raw
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .enumerate()
    {
        let lowered = word.to_lowercase();
        if i > 0 && JOINING_WORDS.contains(&lowered.as_str()) {
            continue;
        }
        key.push_str(&lowered);
    }

    key
}
