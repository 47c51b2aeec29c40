//! Parse items.

use crate::rule::Rule;
use crate::symbol::Symbol;

/// A position within a production, paired with one lookahead terminal.
///
/// `rule` is the part of the production that remains to be matched, viewed
/// from the cursor rightward. `lookahead` is the terminal that must follow
/// once the item completes, supplied by the enclosing context. Items are
/// produced and owned by the item-set construction pass; this crate only
/// reads them.
#[derive(Clone, Debug, Hash, Eq, Ord, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseItem {
    /// What remains to be matched.
    pub rule: Rule,
    /// The terminal that follows the completed item.
    pub lookahead: Symbol,
}

impl ParseItem {
    /// Creates a parse item.
    pub fn new(rule: Rule, lookahead: Symbol) -> Self {
        ParseItem { rule, lookahead }
    }
}
