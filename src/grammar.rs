//! Definitions of the context-free grammar type.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::rule::Rule;
use crate::symbol::{Symbol, SymbolBitSet, SymbolSource};

/// A context-free grammar: a mapping from nonterminal symbols to their
/// defining rules, together with the symbol source that allocated the
/// grammar's symbols.
///
/// A symbol with a definition is a nonterminal; a symbol without one is a
/// terminal. Each nonterminal carries exactly one definition; alternative
/// productions are expressed with [`Rule::choice`]. The grammar is built
/// once by a loading stage and read-only for the remainder of a generation
/// run.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grammar {
    /// The symbol source.
    sym_source: SymbolSource,
    /// Mapping from nonterminal symbols to their definitions.
    definitions: BTreeMap<Symbol, Rule>,
}

impl Grammar {
    /// Creates an empty context-free grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an array of fresh symbols.
    pub fn sym<const N: usize>(&mut self) -> [Symbol; N] {
        self.sym_source.sym()
    }

    /// Generates a new unique symbol.
    pub fn next_sym(&mut self) -> Symbol {
        self.sym_source.next_sym()
    }

    /// Returns the number of symbols in use.
    pub fn num_syms(&self) -> usize {
        self.sym_source.num_syms()
    }

    /// Returns an immutable reference to the grammar's symbol source.
    pub fn sym_source(&self) -> &SymbolSource {
        &self.sym_source
    }

    /// Installs the definition of a nonterminal.
    pub fn define(&mut self, lhs: Symbol, rule: Rule) {
        let prev = self.definitions.insert(lhs, rule);
        debug_assert!(prev.is_none(), "symbol {:?} defined twice", lhs);
    }

    /// Checks whether a symbol is a nonterminal.
    pub fn has_definition(&self, sym: Symbol) -> bool {
        self.definitions.contains_key(&sym)
    }

    /// Returns the definition of a nonterminal.
    ///
    /// # Panics
    ///
    /// Panics when `sym` has no definition. Callers check
    /// [`has_definition`] first; a failure here means the grammar should
    /// have been rejected by the loading stage.
    ///
    /// [`has_definition`]: Grammar::has_definition
    pub fn definition(&self, sym: Symbol) -> &Rule {
        self.definitions
            .get(&sym)
            .unwrap_or_else(|| panic!("definition queried for terminal {:?}", sym))
    }

    /// Iterates over `(nonterminal, definition)` pairs in symbol order.
    pub fn definitions(&self) -> Definitions<'_> {
        Definitions {
            iter: self.definitions.iter(),
        }
    }

    /// Constructs the set of terminal symbols.
    pub fn terminal_symbols(&self) -> SymbolBitSet {
        let mut set = SymbolBitSet::from_elem(self.num_syms(), true);
        for (lhs, _) in self.definitions() {
            set.set(lhs, false);
        }
        set
    }
}

/// Iterator over a grammar's definitions.
pub struct Definitions<'a> {
    iter: btree_map::Iter<'a, Symbol, Rule>,
}

impl<'a> Iterator for Definitions<'a> {
    type Item = (Symbol, &'a Rule);

    fn next(&mut self) -> Option<Self::Item> {
        self.iter.next().map(|(&lhs, rule)| (lhs, rule))
    }
}
