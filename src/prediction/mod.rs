//! Lookahead prediction: nullability, symbol transitions, FIRST sets and
//! per-item FOLLOW sets.

mod first;
mod follow;
mod nullable;
mod transition;

use std::collections::{BTreeMap, BTreeSet};

use crate::symbol::Symbol;

pub use self::first::FirstSets;
pub use self::follow::FollowSets;
pub use self::nullable::Nullable;
pub use self::transition::{symbol_transitions, Transition};

/// The representation of FIRST and FOLLOW sets.
pub type PerSymbolSets = BTreeMap<Symbol, BTreeSet<Symbol>>;

/// Common access to a collector's per-symbol sets.
pub trait PredictSets {
    /// Returns a reference to the computed sets.
    fn predict_sets(&self) -> &PerSymbolSets;
}
