//! Nullability: whether a rule can derive the empty sequence.

use log::trace;

use crate::grammar::Grammar;
use crate::rule::Rule;
use crate::symbol::{Symbol, SymbolBitSet};

/// Per-symbol nullability of a grammar.
///
/// Definitions may refer to themselves directly or mutually, so nullability
/// is computed as a monotone fixed point over the definition map rather
/// than by naive recursion. Answers are stable for the lifetime of the
/// grammar.
pub struct Nullable {
    set: SymbolBitSet,
}

impl Nullable {
    /// Computes nullability for every symbol of the grammar.
    pub fn new(grammar: &Grammar) -> Self {
        let mut this = Nullable {
            set: SymbolBitSet::from_elem(grammar.num_syms(), false),
        };

        let mut changed = true;
        while changed {
            changed = false;
            for (lhs, def) in grammar.definitions() {
                if !this.set.has_sym(lhs) && this.rule(def) {
                    this.set.set(lhs, true);
                    changed = true;
                }
            }
        }
        trace!(
            "nullability fixed point reached: {} nullable symbols",
            this.set.iter().count()
        );

        this
    }

    /// Checks whether a symbol can derive the empty sequence.
    ///
    /// Terminals never can; a nonterminal can iff its definition can.
    pub fn sym(&self, sym: Symbol) -> bool {
        self.set.has_sym(sym)
    }

    /// Checks whether a rule can derive the empty sequence.
    pub fn rule(&self, rule: &Rule) -> bool {
        match rule {
            Rule::Blank => true,
            Rule::Sym(sym) => self.sym(*sym),
            Rule::Seq(parts) => parts.iter().all(|part| self.rule(part)),
            Rule::Choice(alts) => alts.iter().any(|alt| self.rule(alt)),
        }
    }
}
