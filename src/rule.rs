//! This module defines grammar rules. A rule is the right-hand side of a
//! grammar production: a tree built from symbol references, sequences,
//! choices and the empty rule. Rules are immutable once built and are owned
//! by the [`Grammar`] that defines them.
//!
//! [`Grammar`]: crate::grammar::Grammar

use std::collections::BTreeSet;

use crate::symbol::Symbol;

/// The right-hand side of a grammar production.
///
/// The variant set is closed, so every traversal in this crate matches on
/// it exhaustively.
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rule {
    /// Matches exactly the given symbol.
    Sym(Symbol),
    /// Matches each member in order.
    Seq(Vec<Rule>),
    /// Matches exactly one of the alternatives.
    Choice(BTreeSet<Rule>),
    /// Matches the empty string.
    Blank,
}

impl Rule {
    /// A rule matching exactly `sym`.
    pub fn sym(sym: Symbol) -> Self {
        Rule::Sym(sym)
    }

    /// A rule matching the given parts in order.
    ///
    /// A sequence of zero parts is [`Rule::Blank`]; a sequence of one part
    /// is that part.
    pub fn seq(parts: impl IntoIterator<Item = Rule>) -> Self {
        let mut parts: Vec<_> = parts.into_iter().collect();
        match parts.len() {
            0 => Rule::Blank,
            1 => parts.pop().unwrap(),
            _ => Rule::Seq(parts),
        }
    }

    /// A rule matching exactly one of the given alternatives.
    pub fn choice(alts: impl IntoIterator<Item = Rule>) -> Self {
        Rule::Choice(alts.into_iter().collect())
    }

    /// The rule matching `self` and then `rest`.
    ///
    /// Blank operands vanish and nested sequences are flattened, so
    /// remaining-rules built during transition enumeration stay in a
    /// canonical shape.
    pub fn followed_by(self, rest: Rule) -> Rule {
        match (self, rest) {
            (Rule::Blank, rest) => rest,
            (rule, Rule::Blank) => rule,
            (Rule::Seq(mut parts), Rule::Seq(rest_parts)) => {
                parts.extend(rest_parts);
                Rule::Seq(parts)
            }
            (Rule::Seq(mut parts), rest) => {
                parts.push(rest);
                Rule::Seq(parts)
            }
            (rule, Rule::Seq(mut rest_parts)) => {
                rest_parts.insert(0, rule);
                Rule::Seq(rest_parts)
            }
            (rule, rest) => Rule::Seq(vec![rule, rest]),
        }
    }
}
