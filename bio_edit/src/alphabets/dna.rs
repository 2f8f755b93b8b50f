//! Nucleotide alphabets used when comparing a query against germline.
//!
//! Symbols are upper case.  The gap characters `-` and `.` are accepted as
//! expected characters so that already-aligned strings can be compared, but they
//! are neither bases nor ambiguity codes.

use super::Alphabet;

/// The four unambiguous bases.
pub const BASES: &[u8] = b"ACGT";

/// IUPAC ambiguity codes.
pub const AMBIGUOUS_BASES: &[u8] = b"RYSWKMBDHVN";

/// Gap characters.
pub const GAP_CHARS: &[u8] = b"-.";

pub fn alphabet() -> Alphabet {
    Alphabet::new(BASES)
}

pub fn ambiguous_alphabet() -> Alphabet {
    Alphabet::new(AMBIGUOUS_BASES)
}

/// Every character a query or germline sequence may legitimately contain.
pub fn expected_alphabet() -> Alphabet {
    alphabet()
        .union(&ambiguous_alphabet())
        .union(&Alphabet::new(GAP_CHARS))
}
