#![allow(dead_code)]

use std::collections::BTreeSet;

use lr_lookahead::{PerSymbolSets, Symbol};

pub fn syms(list: &[Symbol]) -> BTreeSet<Symbol> {
    list.iter().copied().collect()
}

pub fn per_symbol_sets(entries: &[(Symbol, &[Symbol])]) -> PerSymbolSets {
    entries
        .iter()
        .map(|&(sym, set)| (sym, syms(set)))
        .collect()
}
