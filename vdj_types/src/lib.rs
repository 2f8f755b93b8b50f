//! vdj_types
// Copyright (c) 2021 10x Genomics, Inc. All rights reserved.
#![expect(missing_docs)]

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// From https://danielkeep.github.io/tlborm/book/blk-counting.html
macro_rules! replace_expr {
    ($_t:tt $sub:expr) => {
        $sub
    };
}

macro_rules! count_tts {
    ($($tts:tt)*) => {0usize $(+ replace_expr!($tts 1usize))*};
}

macro_rules! make_enum {
    (
        name: $name:ident,
        variants:[$( ($field:ident, $lit: literal) ,)*],
        const_var_name: $const_var_name:ident,
    ) => {
        pub const $const_var_name: [&str; count_tts!($($field)*)] = [
            $($lit,)*
        ];

        #[derive(
            Debug,
            Copy,
            Clone,
            PartialEq,
            Eq,
            PartialOrd,
            Ord,
            Serialize,
            Deserialize,
            Hash,
        )]
        pub enum $name {
            $(
                #[serde(rename = $lit)]
                $field,
            )*
        }

        impl $name {
            pub fn all() -> [Self; count_tts!($($field)*)] {
                [
                    $($name::$field,)*
                ]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", match self {
                    $(
                        $name::$field => $lit,
                    )*
                })
            }
        }

        impl From<$name> for &'static str {
            fn from(src: $name) -> &'static str {
                match src {
                    $(
                        $name::$field => $lit,
                    )*
                }
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $(
                        $lit => Ok($name::$field),
                    )*
                    unknown => Err(
                        format!("Unknown variant '{}' for {}. Supported variants are: [{}]", unknown, stringify!($name), $const_var_name.join(", "))
                    )
                }
            }
        }
    };
}

make_enum! {
    name: GermlineSegment,
    variants: [
        (V, "v"), // Variable segment
        (D, "d"), // Diversity segment, absent from light chains
        (J, "j"), // Joining segment
    ],
    const_var_name: GERMLINE_SEGMENTS,
}

make_enum! {
    name: InsertionRegion,
    variants: [
        (FV, "fv_insertion"), // query bases before the start of the V match
        (VD, "vd_insertion"),
        (DJ, "dj_insertion"),
        (JF, "jf_insertion"), // query bases after the end of the J match
    ],
    const_var_name: INSERTION_REGIONS,
}

/// An insertion or deletion relative to germline that was normalized out of the
/// query before segment comparison, and has to be put back for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IndelEvent {
    /// `seqstr` was removed from the query at index `pos`.
    Insertion { pos: usize, seqstr: String },
    /// Query positions `[pos, pos + len)` are filler standing in for germline
    /// bases that the read does not contain.
    Deletion { pos: usize, len: usize },
}

impl IndelEvent {
    /// Does this deletion cover query position `i`?
    pub fn deletion_covers(&self, i: usize) -> bool {
        match self {
            IndelEvent::Deletion { pos, len } => i >= *pos && i - *pos < *len,
            IndelEvent::Insertion { .. } => false,
        }
    }
}

/// How a query sequence was put together from germline segments.  This is
/// treated as read-only by everything that consumes it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RearrangementRecord {
    pub fv_insertion: String,
    pub vd_insertion: String,
    pub dj_insertion: String,
    #[serde(default)]
    pub jf_insertion: String,
    /// Number of bases chewed back from the 3' end of V.
    pub v_3p_del: usize,
    /// Number of bases chewed back from the 5' end of J.
    pub j_5p_del: usize,
    /// Start of the conserved codon, keyed by the segment that owns it.
    #[serde(default)]
    pub codon_positions: BTreeMap<GermlineSegment, usize>,
    #[serde(default)]
    pub indels: Vec<IndelEvent>,
}

impl RearrangementRecord {
    pub fn insertion(&self, region: InsertionRegion) -> &str {
        match region {
            InsertionRegion::FV => &self.fv_insertion,
            InsertionRegion::VD => &self.vd_insertion,
            InsertionRegion::DJ => &self.dj_insertion,
            InsertionRegion::JF => &self.jf_insertion,
        }
    }

    /// The indel that display reconstruction acts on.  Earlier events are not
    /// reinstated.
    pub fn last_indel(&self) -> Option<&IndelEvent> {
        self.indels.last()
    }
}

/// Number of germline bases of each segment consumed by the match, after
/// deletions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentLengths {
    pub v: usize,
    #[serde(default)]
    pub d: usize,
    pub j: usize,
}

impl SegmentLengths {
    pub fn get(&self, segment: GermlineSegment) -> usize {
        match segment {
            GermlineSegment::V => self.v,
            GermlineSegment::D => self.d,
            GermlineSegment::J => self.j,
        }
    }

    pub fn total(&self) -> usize {
        self.v + self.d + self.j
    }
}

/// Matched germline sequence for each segment.  `insertions` optionally holds
/// germline-derived versions of the insertion regions; when one is present it
/// takes precedence over the literal insertion in the record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GermlineSegments {
    pub v: String,
    #[serde(default)]
    pub d: String,
    pub j: String,
    #[serde(default)]
    pub insertions: BTreeMap<InsertionRegion, String>,
}

impl GermlineSegments {
    pub fn segment(&self, segment: GermlineSegment) -> &str {
        match segment {
            GermlineSegment::V => &self.v,
            GermlineSegment::D => &self.d,
            GermlineSegment::J => &self.j,
        }
    }

    pub fn insertion(&self, region: InsertionRegion) -> Option<&str> {
        self.insertions.get(&region).map(String::as_str)
    }
}

/// Everything needed to draw one rearrangement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rearrangement {
    #[serde(default)]
    pub name: Option<String>,
    pub query: String,
    pub record: RearrangementRecord,
    pub lengths: SegmentLengths,
    pub germline: GermlineSegments,
}
