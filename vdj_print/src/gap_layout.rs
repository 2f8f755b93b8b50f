//! Make room for the deletion labels when they do not fit between V and J.
//!
//! The annotation row under a query line shows the 3' V deletion and the 5' J
//! deletion as runs of dots, drawn in the columns taken up by the
//! vd insertion, the D segment and the dj insertion.  When the deletions are
//! longer than that, the counts are written as `.<n>.` instead, and if even
//! that is too wide, gap columns are added to the query line (and to every
//! row aligned with it) just after the end of V.

use crate::token::DisplayToken;
use string_utils::run_of;
use vdj_types::{GermlineSegments, RearrangementRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapLayout {
    pub tokens: Vec<DisplayToken>,
    /// The gap tokens that were added, for use in sibling rows.
    pub filler: Vec<DisplayToken>,
    pub gaps_to_add: usize,
    pub v_3p_del_str: String,
    pub j_5p_del_str: String,
    /// Columns by which the numeric labels fall short of the interior.
    pub extra_space: usize,
    /// Column just past the end of V, where gaps go.
    pub v_end: usize,
    pub interior_length: usize,
}

/// Columns between the end of V and the start of J.
pub fn interior_length(record: &RearrangementRecord, germline: &GermlineSegments) -> usize {
    record.vd_insertion.len() + germline.d.len() + record.dj_insertion.len()
}

pub fn adjust(
    mut tokens: Vec<DisplayToken>,
    record: &RearrangementRecord,
    germline: &GermlineSegments,
) -> GapLayout {
    let interior_length = interior_length(record, germline);
    let v_end = record.fv_insertion.len() + germline.v.len();
    if record.v_3p_del + record.j_5p_del <= interior_length {
        return GapLayout {
            tokens,
            filler: Vec::new(),
            gaps_to_add: 0,
            v_3p_del_str: run_of('.', record.v_3p_del),
            j_5p_del_str: run_of('.', record.j_5p_del),
            extra_space: 0,
            v_end,
            interior_length,
        };
    }

    let v_3p_del_str = format!(".{}.", record.v_3p_del);
    let j_5p_del_str = format!(".{}.", record.j_5p_del);
    let label_width = v_3p_del_str.len() + j_5p_del_str.len();
    let extra_space = interior_length.saturating_sub(label_width);
    let gaps_to_add = label_width.saturating_sub(interior_length);

    let filler = vec![DisplayToken::gap_filler(); gaps_to_add];
    let at = v_end.min(tokens.len());
    tokens.splice(at..at, filler.iter().copied());
    GapLayout {
        tokens,
        filler,
        gaps_to_add,
        v_3p_del_str,
        j_5p_del_str,
        extra_space,
        v_end,
        interior_length,
    }
}

impl GapLayout {
    /// The deletion annotation row, aligned to the adjusted query line.
    pub fn label_row(&self) -> String {
        let labels = self.v_3p_del_str.len() + self.j_5p_del_str.len();
        let middle = (self.interior_length + self.gaps_to_add).saturating_sub(labels);
        format!(
            "{}{}{}{}",
            run_of(' ', self.v_end),
            self.v_3p_del_str,
            run_of(' ', middle),
            self.j_5p_del_str
        )
    }
}
