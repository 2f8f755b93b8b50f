// Copyright 2014-2015 Johannes Köster, Peer Aramillo Irizar.
// Licensed under the MIT license (http://opensource.org/licenses/MIT)
// This file may not be copied, modified, or distributed
// except according to those terms.

//! Alphabets as sets of byte symbols.

use std::borrow::Borrow;

use bit_set::BitSet;

pub mod dna;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    pub symbols: BitSet,
}

impl Alphabet {
    pub fn new<C, T>(symbols: T) -> Self
    where
        C: Borrow<u8>,
        T: IntoIterator<Item = C>,
    {
        let mut s = BitSet::new();
        s.extend(symbols.into_iter().map(|c| *c.borrow() as usize));

        Alphabet { symbols: s }
    }

    pub fn contains(&self, a: u8) -> bool {
        self.symbols.contains(a as usize)
    }

    pub fn union(&self, other: &Alphabet) -> Self {
        Alphabet {
            symbols: self.symbols.union(&other.symbols).collect(),
        }
    }
}
