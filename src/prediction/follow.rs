//! Per-item FOLLOW sets.

use std::collections::BTreeMap;

use crate::grammar::Grammar;
use crate::item::ParseItem;

use super::transition::symbol_transitions;
use super::{FirstSets, Nullable, PerSymbolSets, PredictSets};

/// FOLLOW sets of one parse item.
///
/// For every nonterminal directly transitionable from the item's remaining
/// rule, the set of terminals that may immediately follow an occurrence of
/// that nonterminal in the item's derivation context. The item-set builder
/// attaches these sets as the lookaheads of the items it predicts while
/// closing a state.
pub struct FollowSets {
    /// Mapping from nonterminals to FOLLOW sets.
    map: PerSymbolSets,
}

impl FollowSets {
    /// Computes the FOLLOW sets of `item`, rebuilding the nullability and
    /// FIRST analyses of the grammar on the way.
    ///
    /// Item-set construction calls this once per item of every state;
    /// [`FollowSets::compute`] accepts the two grammar-wide analyses from
    /// the caller so they can be built once per grammar instead.
    pub fn new(item: &ParseItem, grammar: &Grammar) -> Self {
        let nullable = Nullable::new(grammar);
        let first_sets = FirstSets::new(grammar, &nullable);
        Self::compute(item, grammar, &first_sets, &nullable)
    }

    /// Computes the FOLLOW sets of `item` using precomputed analyses.
    pub fn compute(
        item: &ParseItem,
        grammar: &Grammar,
        first_sets: &FirstSets,
        nullable: &Nullable,
    ) -> Self {
        let mut this = FollowSets {
            map: BTreeMap::new(),
        };

        for transition in symbol_transitions(&item.rule, nullable) {
            // FOLLOW sets only matter for symbols whose productions will
            // be predicted, which excludes terminals.
            if !grammar.has_definition(transition.symbol) {
                continue;
            }
            let mut following = first_sets.first_of(&transition.remaining, nullable);
            if nullable.rule(&transition.remaining) {
                // Everything after the symbol can vanish, putting the
                // item's own lookahead right behind it.
                following.insert(item.lookahead);
            }
            // One symbol can be reachable along several derivation paths;
            // each path's follow symbols are valid lookaheads, so entries
            // for the same symbol are unioned.
            this.map
                .entry(transition.symbol)
                .or_default()
                .extend(following);
        }

        this
    }
}

impl PredictSets for FollowSets {
    /// Returns a reference to FOLLOW sets.
    fn predict_sets(&self) -> &PerSymbolSets {
        &self.map
    }
}
