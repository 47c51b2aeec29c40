//! Enumeration of symbol transitions over a rule.

use std::collections::BTreeSet;

use crate::rule::Rule;
use crate::symbol::Symbol;

use super::Nullable;

/// One way of consuming a single symbol from a rule: the symbol consumed,
/// and the rule describing what must still be matched afterward.
///
/// Transitions are ephemeral; they are produced here and consumed
/// immediately by FIRST- and FOLLOW-set computation.
#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Transition {
    /// The symbol consumed.
    pub symbol: Symbol,
    /// What remains to be matched after consuming the symbol.
    pub remaining: Rule,
}

/// Enumerates every symbol reachable as "the next symbol consumed by some
/// derivation path through `rule`", paired with its remaining rule.
///
/// The same symbol reached along different paths with different
/// remaining-rules yields distinct entries; the result is a set of pairs,
/// never collapsed by symbol.
pub fn symbol_transitions(rule: &Rule, nullable: &Nullable) -> BTreeSet<Transition> {
    let mut result = BTreeSet::new();
    collect(rule, nullable, &mut result);
    result
}

fn collect(rule: &Rule, nullable: &Nullable, result: &mut BTreeSet<Transition>) {
    match rule {
        Rule::Blank => {}
        Rule::Sym(sym) => {
            result.insert(Transition {
                symbol: *sym,
                remaining: Rule::Blank,
            });
        }
        Rule::Choice(alts) => {
            for alt in alts {
                collect(alt, nullable, result);
            }
        }
        Rule::Seq(parts) => {
            // An empty sequence matches like Blank.
            let Some((head, tail)) = parts.split_first() else {
                return;
            };
            let rest = Rule::seq(tail.iter().cloned());
            for transition in symbol_transitions(head, nullable) {
                result.insert(Transition {
                    symbol: transition.symbol,
                    remaining: transition.remaining.followed_by(rest.clone()),
                });
            }
            // The sequence can skip a nullable head entirely.
            if nullable.rule(head) {
                collect(&rest, nullable, result);
            }
        }
    }
}
