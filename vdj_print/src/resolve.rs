//! Map a position in the concatenated segment coordinates back to the piece of
//! the rearrangement it belongs to.
//!
//! The reconstructed sequence is laid out as
//!
//! ```text
//! fv_insertion | v | vd_insertion | d | dj_insertion | j | (overhang)
//! ```
//!
//! so a linear index is resolved by walking these buckets in order and
//! subtracting the length of each one that is passed.

use vdj_types::{GermlineSegment, InsertionRegion, RearrangementRecord, SegmentLengths};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolved {
    /// `offset` bases into the matched part of a germline segment.
    Segment {
        segment: GermlineSegment,
        offset: usize,
    },
    /// `offset` bases into an insertion.
    Insertion {
        region: InsertionRegion,
        offset: usize,
    },
    /// Past the end of the J match.
    BeyondMatch,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    Segment(GermlineSegment),
    Insertion(InsertionRegion),
}

impl Bucket {
    fn at(self, offset: usize) -> Resolved {
        match self {
            Bucket::Segment(segment) => Resolved::Segment { segment, offset },
            Bucket::Insertion(region) => Resolved::Insertion { region, offset },
        }
    }
}

/// The buckets in query order, with their lengths.
pub fn buckets(record: &RearrangementRecord, lengths: &SegmentLengths) -> [(Bucket, usize); 6] {
    use GermlineSegment::{D, J, V};
    use InsertionRegion::{DJ, FV, VD};
    [
        (Bucket::Insertion(FV), record.fv_insertion.len()),
        (Bucket::Segment(V), lengths.v),
        (Bucket::Insertion(VD), record.vd_insertion.len()),
        (Bucket::Segment(D), lengths.d),
        (Bucket::Insertion(DJ), record.dj_insertion.len()),
        (Bucket::Segment(J), lengths.j),
    ]
}

pub fn resolve(
    local_index: usize,
    record: &RearrangementRecord,
    lengths: &SegmentLengths,
) -> Resolved {
    let mut offset = local_index;
    for (bucket, len) in buckets(record, lengths) {
        if offset < len {
            return bucket.at(offset);
        }
        offset -= len;
    }
    Resolved::BeyondMatch
}
