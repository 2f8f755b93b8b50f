//! bio_edit
//!
//! Symbol alphabets for nucleotide sequences.

pub mod alphabets;
