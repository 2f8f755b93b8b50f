//! Decide how a single query base is drawn, given the base it is compared to.

use crate::errors::ReconstructError;
use crate::token::DisplayToken;
use bio_edit::alphabets::{dna, Alphabet};
use lazy_static::lazy_static;

lazy_static! {
    static ref EXPECTED: Alphabet = dna::expected_alphabet();
    static ref AMBIGUOUS: Alphabet = dna::ambiguous_alphabet();
}

pub fn is_ambiguous(base: u8) -> bool {
    AMBIGUOUS.contains(base)
}

/// Compare `final_base`, the base observed in the query, to `original`, the
/// base it came from.  Mismatch is not defined against an ambiguity code, so a
/// pair involving one is never marked.
pub fn classify(original: u8, final_base: u8) -> Result<DisplayToken, ReconstructError> {
    if !EXPECTED.contains(original) || !EXPECTED.contains(final_base) {
        return Err(ReconstructError::InvalidCharacter {
            original: original as char,
            final_base: final_base as char,
        });
    }
    if is_ambiguous(original) || is_ambiguous(final_base) {
        return Ok(DisplayToken::plain(final_base));
    }
    if original != final_base {
        return Ok(DisplayToken::mutation(final_base));
    }
    Ok(DisplayToken::plain(final_base))
}
