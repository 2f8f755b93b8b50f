//! Put an indel that was normalized out of the query back in, one position at a
//! time.

use crate::token::DisplayToken;
use vdj_types::IndelEvent;

/// What to do with the current query position after indel handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndelStep {
    /// Resolve the position at `local_index` in segment coordinates.
    Proceed { local_index: usize },
    /// The position was drawn as deletion filler and needs nothing further.
    Filled,
}

#[derive(Debug, Clone, Copy)]
pub struct IndelReinstater<'a> {
    event: Option<&'a IndelEvent>,
    inserted_so_far: usize,
}

impl<'a> IndelReinstater<'a> {
    pub fn new(event: Option<&'a IndelEvent>) -> Self {
        IndelReinstater {
            event,
            inserted_so_far: 0,
        }
    }

    pub fn inserted_so_far(&self) -> usize {
        self.inserted_so_far
    }

    /// Handle query position `query_index`, appending any spliced or filler
    /// tokens to `tokens`.  Spliced insertion bases are drawn as they are,
    /// without comparison to anything.
    pub fn step(&mut self, query_index: usize, tokens: &mut Vec<DisplayToken>) -> IndelStep {
        match self.event {
            Some(IndelEvent::Insertion { pos, seqstr }) if *pos == query_index => {
                tokens.extend(seqstr.bytes().map(DisplayToken::plain));
                self.inserted_so_far += seqstr.len();
            }
            Some(e) if e.deletion_covers(query_index) => {
                tokens.push(DisplayToken::deletion_filler());
                return IndelStep::Filled;
            }
            _ => {}
        }
        IndelStep::Proceed {
            local_index: query_index + self.inserted_so_far,
        }
    }
}
