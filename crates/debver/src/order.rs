use std::cmp::Ordering;

use crate::VersionError;

/// Position of `c` in the Debian character order, lowest first:
/// `~`, `:`, digits, uppercase, lowercase, `-`, `+`, `.`.
///
/// Characters outside that alphabet have no rank.
pub fn rank(c: char) -> Option<u8> {
    let rank = match c {
        '~' => 0,
        ':' => 1,
        '0'..='9' => 2 + (c as u8 - b'0'),
        'A'..='Z' => 12 + (c as u8 - b'A'),
        'a'..='z' => 38 + (c as u8 - b'a'),
        '-' => 64,
        '+' => 65,
        '.' => 66,
        _ => return None,
    };
    Some(rank)
}

/// Reject a fragment holding any character without a rank.
pub fn validate(fragment: &str) -> Result<(), VersionError> {
    match fragment.chars().find(|c| rank(*c).is_none()) {
        Some(character) => Err(VersionError::InvalidCharacter {
            fragment: fragment.to_string(),
            character,
        }),
        None => Ok(()),
    }
}

/// Compare two strings character by character on [`rank`]. A strict prefix
/// sorts before the longer string.
pub fn compare_text(a: &str, b: &str) -> Result<Ordering, VersionError> {
    validate(a)?;
    validate(b)?;
    Ok(compare_ranked(a, b))
}

/// [`compare_text`] for strings already passed through [`validate`].
pub(crate) fn compare_ranked(a: &str, b: &str) -> Ordering {
    // Lexicographic iterator ordering puts the shorter prefix first.
    a.chars().map(rank).cmp(b.chars().map(rank))
}
