//! Symbol sets in the form of bit vectors.

use std::iter;

use bit_vec::BitVec;

use super::Symbol;

/// A set of symbols in the form of a bit vector.
#[derive(Clone, Debug)]
pub struct SymbolBitSet {
    bit_vec: BitVec,
}

/// An iterator over a symbol set.
pub struct Iter<'a> {
    iter: iter::Enumerate<bit_vec::Iter<'a>>,
}

impl SymbolBitSet {
    /// Constructs a `SymbolBitSet` of `num_syms` entries, all set to `elem`.
    pub fn from_elem(num_syms: usize, elem: bool) -> Self {
        SymbolBitSet {
            bit_vec: BitVec::from_elem(num_syms, elem),
        }
    }

    /// Sets the entry for a symbol.
    pub fn set(&mut self, sym: Symbol, value: bool) {
        self.bit_vec.set(sym.usize(), value);
    }

    /// Checks whether a given symbol is in this set.
    pub fn has_sym(&self, sym: Symbol) -> bool {
        self.bit_vec[sym.usize()]
    }

    /// Converts into a bit vector.
    pub fn into_bit_vec(self) -> BitVec {
        self.bit_vec
    }

    /// Iterates over symbols in the set.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            iter: self.bit_vec.iter().enumerate(),
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = Symbol;

    fn next(&mut self) -> Option<Self::Item> {
        for (id, is_present) in &mut self.iter {
            if is_present {
                return Some(Symbol::from(id));
            }
        }
        None
    }
}
