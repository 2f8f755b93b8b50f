// Copyright (c) 2024 10x Genomics, Inc. All rights reserved.

//! Build the display tokens for a query sequence.
//!
//! Each query position goes through indel handling, then is located in the
//! segment coordinates, compared against the base it came from, and finally
//! checked against the conserved codon windows.  The pass is a fold over the
//! query with all of its mutable state in [`PassState`].

use crate::classify::classify;
use crate::codon::annotate;
use crate::errors::ReconstructError;
use crate::indel::{IndelReinstater, IndelStep};
use crate::resolve::{resolve, Resolved};
use crate::token::DisplayToken;
use log::{debug, warn};
use vdj_types::{GermlineSegments, IndelEvent, RearrangementRecord, SegmentLengths};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconstruction {
    pub tokens: Vec<DisplayToken>,
    /// Number of query bases to the right of the end of the J match.
    pub overhang: usize,
}

#[derive(Clone, Copy)]
struct Inputs<'a> {
    record: &'a RearrangementRecord,
    lengths: &'a SegmentLengths,
    germline: &'a GermlineSegments,
}

struct PassState<'a> {
    tokens: Vec<DisplayToken>,
    reinstater: IndelReinstater<'a>,
    overhang: usize,
}

fn base_at(seq: &str, key: &'static str, offset: usize) -> Result<u8, ReconstructError> {
    seq.as_bytes()
        .get(offset)
        .copied()
        .ok_or(ReconstructError::GermlineOutOfRange {
            key,
            offset,
            len: seq.len(),
        })
}

fn step<'a>(
    mut state: PassState<'a>,
    query_index: usize,
    base: u8,
    inputs: Inputs<'_>,
) -> Result<PassState<'a>, ReconstructError> {
    let local_index = match state.reinstater.step(query_index, &mut state.tokens) {
        IndelStep::Filled => return Ok(state),
        IndelStep::Proceed { local_index } => local_index,
    };

    // The base this one is compared to.  Where there is nothing to compare to,
    // the query base stands in for itself, which is never a mutation.
    let original = match resolve(local_index, inputs.record, inputs.lengths) {
        Resolved::Segment { segment, offset } => {
            base_at(inputs.germline.segment(segment), segment.into(), offset)?
        }
        Resolved::Insertion {
            region: vdj_types::InsertionRegion::FV,
            ..
        } => base,
        Resolved::Insertion { region, offset } => {
            let seq = inputs
                .germline
                .insertion(region)
                .unwrap_or_else(|| inputs.record.insertion(region));
            base_at(seq, region.into(), offset)?
        }
        Resolved::BeyondMatch => {
            state.overhang += 1;
            base
        }
    };

    let token = classify(original, base)?;
    state
        .tokens
        .push(annotate(token, query_index, &inputs.record.codon_positions));
    Ok(state)
}

/// Reconstruct the display of `query`, reinstating `indel` if there is one.
///
/// Fails on the first base outside the nucleotide alphabet; no partial output
/// is returned.
pub fn reconstruct(
    query: &[u8],
    record: &RearrangementRecord,
    lengths: &SegmentLengths,
    germline: &GermlineSegments,
    indel: Option<&IndelEvent>,
) -> Result<Reconstruction, ReconstructError> {
    let inputs = Inputs {
        record,
        lengths,
        germline,
    };
    let init = PassState {
        tokens: Vec::with_capacity(query.len()),
        reinstater: IndelReinstater::new(indel),
        overhang: 0,
    };
    let state = query
        .iter()
        .enumerate()
        .try_fold(init, |state, (i, &base)| step(state, i, base, inputs))?;
    if state.overhang > 0 {
        debug!(
            "{} query bases extend past the end of the j match",
            state.overhang
        );
    }
    Ok(Reconstruction {
        tokens: state.tokens,
        overhang: state.overhang,
    })
}

/// As [`reconstruct`], using the last of the record's indels.
pub fn reconstruct_record(
    query: &[u8],
    record: &RearrangementRecord,
    lengths: &SegmentLengths,
    germline: &GermlineSegments,
) -> Result<Reconstruction, ReconstructError> {
    if record.indels.len() > 1 {
        warn!(
            "record has {} indels, only the last one is shown",
            record.indels.len()
        );
    }
    reconstruct(query, record, lengths, germline, record.last_indel())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{render, Markers, RenderOpts};
    use pretty_assertions::assert_eq;
    use proptest::collection::vec;
    use proptest::sample::select;
    use proptest::{prop_assert, prop_assert_eq, proptest};
    use std::collections::BTreeMap;
    use vdj_types::{GermlineSegment, InsertionRegion, Rearrangement};

    fn germline(v: &str, d: &str, j: &str) -> GermlineSegments {
        GermlineSegments {
            v: v.to_string(),
            d: d.to_string(),
            j: j.to_string(),
            insertions: BTreeMap::new(),
        }
    }

    fn plain(tokens: &[DisplayToken]) -> String {
        render(
            tokens,
            &RenderOpts {
                color: false,
                ..Default::default()
            },
        )
    }

    fn simple() -> (RearrangementRecord, SegmentLengths, GermlineSegments) {
        (
            RearrangementRecord::default(),
            SegmentLengths { v: 2, d: 1, j: 1 },
            germline("AC", "G", "T"),
        )
    }

    #[test]
    fn test_all_match() {
        let (rec, lengths, gl) = simple();
        let r = reconstruct(b"ACGT", &rec, &lengths, &gl, None).unwrap();
        assert_eq!(
            r.tokens,
            b"ACGT".iter().map(|&b| DisplayToken::plain(b)).collect::<Vec<_>>()
        );
        assert_eq!(r.overhang, 0);
    }

    #[test]
    fn test_last_base_mutated() {
        let (rec, lengths, gl) = simple();
        let r = reconstruct(b"ACGA", &rec, &lengths, &gl, None).unwrap();
        assert_eq!(r.tokens[3], DisplayToken::mutation(b'A'));
        assert_eq!(r.tokens.iter().filter(|t| t.is_mutation()).count(), 1);
    }

    #[test]
    fn test_insertion_is_spliced_verbatim() {
        // The segment coordinates include a slot for the inserted base, so
        // after the splice everything resolves one further along.
        let rec = RearrangementRecord::default();
        let lengths = SegmentLengths { v: 3, d: 1, j: 1 };
        let gl = germline("ACA", "G", "T");
        let ins = IndelEvent::Insertion {
            pos: 2,
            seqstr: "X".to_string(),
        };
        let r = reconstruct(b"ACGT", &rec, &lengths, &gl, Some(&ins)).unwrap();
        assert_eq!(plain(&r.tokens), "ACXGT");
        assert!(r.tokens.iter().all(|t| t.markers.is_empty()));
        assert_eq!(r.overhang, 0);
    }

    #[test]
    fn test_insertion_at_start() {
        let (rec, _, _) = simple();
        let lengths = SegmentLengths { v: 3, d: 1, j: 1 };
        let gl = germline("TAC", "G", "T");
        let ins = IndelEvent::Insertion {
            pos: 0,
            seqstr: "T".to_string(),
        };
        let r = reconstruct(b"ACGT", &rec, &lengths, &gl, Some(&ins)).unwrap();
        assert_eq!(plain(&r.tokens), "TACGT");
        assert!(!r.tokens.iter().any(DisplayToken::is_mutation));
    }

    #[test]
    fn test_deletion_filler() {
        let (rec, lengths, gl) = simple();
        let del = IndelEvent::Deletion { pos: 1, len: 2 };
        // Positions 1 and 2 are filler and are neither compared nor validated.
        let r = reconstruct(b"A..T", &rec, &lengths, &gl, Some(&del)).unwrap();
        assert_eq!(plain(&r.tokens), "A**T");
        assert_eq!(r.tokens[1].markers, Markers::DELETION_FILLER);
        assert!(!r.tokens[3].is_mutation());
    }

    #[test]
    fn test_deletion_filler_skips_codon_marking() {
        let (mut rec, lengths, gl) = simple();
        rec.codon_positions.insert(GermlineSegment::V, 0);
        let del = IndelEvent::Deletion { pos: 1, len: 1 };
        let r = reconstruct(b"AxGT", &rec, &lengths, &gl, Some(&del)).unwrap();
        let codon: Vec<bool> = r.tokens.iter().map(DisplayToken::is_codon).collect();
        assert_eq!(codon, vec![true, false, true, false]);
    }

    #[test]
    fn test_overhang() {
        let (rec, lengths, gl) = simple();
        let r = reconstruct(b"ACGTTT", &rec, &lengths, &gl, None).unwrap();
        assert_eq!(r.overhang, 2);
        assert_eq!(r.tokens.len(), 6);
        assert!(!r.tokens.iter().any(DisplayToken::is_mutation));
    }

    #[test]
    fn test_invalid_character_aborts() {
        let (rec, lengths, gl) = simple();
        assert_eq!(
            reconstruct(b"ACZT", &rec, &lengths, &gl, None),
            Err(ReconstructError::InvalidCharacter {
                original: 'G',
                final_base: 'Z'
            })
        );
        // Also outside the match, where the base is compared to itself.
        assert!(reconstruct(b"ACGTa", &rec, &lengths, &gl, None).is_err());
    }

    #[test]
    fn test_short_germline() {
        let (rec, _, gl) = simple();
        let lengths = SegmentLengths { v: 3, d: 1, j: 1 };
        assert_eq!(
            reconstruct(b"ACGTA", &rec, &lengths, &gl, None),
            Err(ReconstructError::GermlineOutOfRange {
                key: "v",
                offset: 2,
                len: 2
            })
        );
    }

    #[test]
    fn test_insertion_compared_to_germline_override() {
        let rec = RearrangementRecord {
            vd_insertion: "A".to_string(),
            ..Default::default()
        };
        let lengths = SegmentLengths { v: 2, d: 1, j: 1 };
        let mut gl = germline("AC", "G", "T");
        let r = reconstruct(b"ACAGT", &rec, &lengths, &gl, None).unwrap();
        assert!(!r.tokens.iter().any(DisplayToken::is_mutation));
        gl.insertions.insert(InsertionRegion::VD, "C".to_string());
        let r = reconstruct(b"ACAGT", &rec, &lengths, &gl, None).unwrap();
        assert_eq!(r.tokens[2], DisplayToken::mutation(b'A'));
    }

    #[test]
    fn test_only_last_indel_is_used() {
        let (mut rec, lengths, gl) = simple();
        rec.indels = vec![
            IndelEvent::Deletion { pos: 0, len: 4 },
            IndelEvent::Deletion { pos: 3, len: 1 },
        ];
        let r = reconstruct_record(b"ACG.", &rec, &lengths, &gl).unwrap();
        assert_eq!(plain(&r.tokens), "ACG*");
    }

    #[test]
    fn test_fixture() {
        let rearrangements: Vec<Rearrangement> = io_utils::read_json_one_or_many(
            std::path::Path::new("test/rearrangements_test.json"),
        )
        .unwrap();
        assert_eq!(rearrangements.len(), 2);

        let heavy = &rearrangements[0];
        let r = reconstruct_record(
            heavy.query.as_bytes(),
            &heavy.record,
            &heavy.lengths,
            &heavy.germline,
        )
        .unwrap();
        assert_eq!(r.tokens.len(), heavy.query.len());
        assert_eq!(r.overhang, 2);
        let mutated: Vec<usize> = (0..r.tokens.len())
            .filter(|&i| r.tokens[i].is_mutation())
            .collect();
        assert_eq!(mutated, vec![6]);
        let codon: Vec<usize> = (0..r.tokens.len())
            .filter(|&i| r.tokens[i].is_codon())
            .collect();
        assert_eq!(codon, vec![13, 14, 15, 27, 28, 29]);

        let light = &rearrangements[1];
        let r = reconstruct_record(
            light.query.as_bytes(),
            &light.record,
            &light.lengths,
            &light.germline,
        )
        .unwrap();
        assert_eq!(plain(&r.tokens), light.query);
        // The N at position 2 is not a mutation.
        assert!(!r.tokens.iter().any(DisplayToken::is_mutation));
        assert_eq!(r.overhang, 0);
    }

    proptest! {
        #[test]
        fn prop_length_without_indel(
            v in vec(select(b"ACGT".as_slice()), 0..20),
            d in vec(select(b"ACGT".as_slice()), 0..8),
            j in vec(select(b"ACGT".as_slice()), 0..10),
            query in vec(select(b"ACGTN".as_slice()), 0..50),
        ) {
            let gl = germline(
                std::str::from_utf8(&v).unwrap(),
                std::str::from_utf8(&d).unwrap(),
                std::str::from_utf8(&j).unwrap(),
            );
            let lengths = SegmentLengths { v: v.len(), d: d.len(), j: j.len() };
            let rec = RearrangementRecord::default();
            let r = reconstruct(&query, &rec, &lengths, &gl, None).unwrap();
            prop_assert_eq!(r.tokens.len(), query.len());
            prop_assert_eq!(r.overhang, query.len().saturating_sub(lengths.total()));
            for (t, &b) in r.tokens.iter().zip(&query) {
                prop_assert_eq!(t.base, b);
                if b == b'N' {
                    prop_assert!(!t.is_mutation());
                }
            }
        }

        #[test]
        fn prop_length_with_insertion(
            query in vec(select(b"ACGT".as_slice()), 1..40),
            seqstr in vec(select(b"ACGT".as_slice()), 1..6),
            pos_frac in 0.0f64..1.0,
        ) {
            let pos = ((query.len() as f64) * pos_frac) as usize;
            let ins = IndelEvent::Insertion {
                pos,
                seqstr: String::from_utf8(seqstr.clone()).unwrap(),
            };
            let gl = germline(&"A".repeat(100), "", &"T".repeat(10));
            let lengths = SegmentLengths { v: 100, d: 0, j: 10 };
            let rec = RearrangementRecord::default();
            let r = reconstruct(&query, &rec, &lengths, &gl, Some(&ins)).unwrap();
            prop_assert_eq!(r.tokens.len(), query.len() + seqstr.len());
            let spliced: Vec<u8> = r.tokens[pos..pos + seqstr.len()].iter().map(|t| t.base).collect();
            prop_assert_eq!(spliced, seqstr);
        }
    }
}
