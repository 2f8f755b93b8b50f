//! Assemble the printable rows for one rearrangement.

use crate::errors::ReconstructError;
use crate::gap_layout::adjust;
use crate::reconstruct::reconstruct_record;
use crate::token::{render, RenderOpts};
use log::debug;
use vdj_types::Rearrangement;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    /// Deletion labels, in the columns between V and J.
    pub label_row: String,
    pub query_line: String,
    pub overhang: usize,
    pub gaps_to_add: usize,
    pub extra_space: usize,
}

pub fn draw(r: &Rearrangement, opts: &RenderOpts) -> Result<Drawing, ReconstructError> {
    let rec = reconstruct_record(r.query.as_bytes(), &r.record, &r.lengths, &r.germline)?;
    let layout = adjust(rec.tokens, &r.record, &r.germline);
    debug!(
        "{} overhang bases, {} gaps added, {} extra space",
        rec.overhang, layout.gaps_to_add, layout.extra_space
    );
    Ok(Drawing {
        label_row: layout.label_row(),
        query_line: render(&layout.tokens, opts),
        overhang: rec.overhang,
        gaps_to_add: layout.gaps_to_add,
        extra_space: layout.extra_space,
    })
}
