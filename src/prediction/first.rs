//! FIRST sets.

use std::collections::{BTreeMap, BTreeSet};

use log::trace;

use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::{Symbol, SymbolBitSet};

use super::transition::symbol_transitions;
use super::{Nullable, PerSymbolSets, PredictSets};

/// Collector of FIRST sets: for every nonterminal, the terminals that can
/// appear as the first symbol of some derivation of its definition.
pub struct FirstSets {
    map: PerSymbolSets,
    terminal_set: SymbolBitSet,
}

impl FirstSets {
    /// Computes all FIRST sets of the grammar.
    ///
    /// Every nonterminal starts with an empty set, so an entry that is
    /// still under construction contributes nothing to the sets that
    /// depend on it. Passes repeat until no set grows, which reaches the
    /// transitive closure and terminates on left-recursive and mutually
    /// recursive definitions alike.
    pub fn new(grammar: &Grammar, nullable: &Nullable) -> Self {
        let mut this = FirstSets {
            map: BTreeMap::new(),
            terminal_set: grammar.terminal_symbols(),
        };

        for (lhs, _) in grammar.definitions() {
            this.map.insert(lhs, BTreeSet::new());
        }

        let mut changed = true;
        while changed {
            changed = false;
            for (lhs, def) in grammar.definitions() {
                let collected = this.first_of(def, nullable);
                let first_set = this
                    .map
                    .get_mut(&lhs)
                    .expect("every nonterminal was seeded above");
                let prev_cardinality = first_set.len();
                first_set.extend(collected);
                changed |= first_set.len() != prev_cardinality;
            }
            trace!("FIRST pass done; changed: {}", changed);
        }

        this
    }

    /// Computes the FIRST set of an arbitrary rule fragment: the terminals
    /// that can begin a string derived from it.
    pub fn first_of(&self, rule: &Rule, nullable: &Nullable) -> BTreeSet<Symbol> {
        let mut result = BTreeSet::new();
        for transition in symbol_transitions(rule, nullable) {
            if self.terminal_set.has_sym(transition.symbol) {
                result.insert(transition.symbol);
            } else {
                let first_set = self
                    .map
                    .get(&transition.symbol)
                    .unwrap_or_else(|| panic!("no FIRST set for {:?}", transition.symbol));
                result.extend(first_set.iter().copied());
            }
        }
        result
    }
}

impl PredictSets for FirstSets {
    /// Returns a reference to FIRST sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
