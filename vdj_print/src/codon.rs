use crate::token::DisplayToken;
use std::collections::BTreeMap;
use vdj_types::GermlineSegment;

pub const CODON_LEN: usize = 3;

/// Is `query_index` inside any conserved codon window?
pub fn in_codon(query_index: usize, codon_positions: &BTreeMap<GermlineSegment, usize>) -> bool {
    codon_positions
        .values()
        .any(|&start| query_index.checked_sub(start).is_some_and(|d| d < CODON_LEN))
}

pub fn annotate(
    token: DisplayToken,
    query_index: usize,
    codon_positions: &BTreeMap<GermlineSegment, usize>,
) -> DisplayToken {
    if in_codon(query_index, codon_positions) {
        token.with_codon()
    } else {
        token
    }
}
