use std::cmp::Ordering;

use crate::{
    VersionError,
    order::{compare_ranked, validate},
    token::{Token, tokenize},
};

/// Compare two version fragments (upstream versions or revisions).
///
/// Both fragments are checked against the character order up front, then
/// walked token by token. The shorter token list is padded with numeric
/// zeros, never text. Two numbers compare by value; any other pair compares
/// as text.
pub fn compare_fragments(a: &str, b: &str) -> Result<Ordering, VersionError> {
    validate(a)?;
    validate(b)?;

    let a_tokens = tokenize(a);
    let b_tokens = tokenize(b);
    let zero = Token::zero();

    let max_len = a_tokens.len().max(b_tokens.len());

    for i in 0..max_len {
        let a_tok = a_tokens.get(i).unwrap_or(&zero);
        let b_tok = b_tokens.get(i).unwrap_or(&zero);

        let ordering = match (a_tok, b_tok) {
            (Token::Number(x), Token::Number(y)) => x.cmp(y),
            (x, y) => compare_ranked(x.as_str(), y.as_str()),
        };

        if ordering != Ordering::Equal {
            return Ok(ordering);
        }
    }

    Ok(Ordering::Equal)
}
