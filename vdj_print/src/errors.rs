use thiserror::Error;

#[derive(Debug, PartialEq, Eq, Error)]
pub enum ReconstructError {
    /// A base outside the nucleotide alphabet.  This means the rearrangement
    /// record is corrupt, nothing downstream tries to recover from it.
    #[error("one of {original:?} {final_base:?} not among expected characters")]
    InvalidCharacter { original: char, final_base: char },

    #[error("{key} germline has {len} bases but position {offset} was requested")]
    GermlineOutOfRange {
        key: &'static str,
        offset: usize,
        len: usize,
    },
}
