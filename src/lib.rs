//! Lookahead analysis over context-free grammars for LR parser-table construction.
//!
//! The crate answers one question for an item-set builder: given that we are at
//! a specific position in a specific rule, with a specific lookahead symbol,
//! which terminals can legally appear after each nonterminal reachable from
//! here? The answer is assembled from nullability detection, symbol-transition
//! enumeration and FIRST-set computation, and drives which lookahead symbols
//! get attached to predicted items during state construction.

#![deny(unsafe_code)]
#![deny(
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications
)]
#![cfg_attr(test, deny(warnings))]

pub mod grammar;
pub mod item;
pub mod prediction;
pub mod rule;
pub mod symbol;

pub use crate::grammar::Grammar;
pub use crate::item::ParseItem;
pub use crate::prediction::{
    symbol_transitions, FirstSets, FollowSets, Nullable, PerSymbolSets, PredictSets, Transition,
};
pub use crate::rule::Rule;
pub use crate::symbol::{Symbol, SymbolBitSet, SymbolSource};
