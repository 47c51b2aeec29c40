use std::collections::BTreeSet;

use lr_lookahead::{symbol_transitions, Grammar, Nullable, Rule, Transition};

fn transition(symbol: lr_lookahead::Symbol, remaining: Rule) -> Transition {
    Transition { symbol, remaining }
}

#[test]
fn test_symbol_ref_and_blank() {
    let mut grammar = Grammar::new();
    let [a] = grammar.sym();
    let nullable = Nullable::new(&grammar);

    let expected: BTreeSet<_> = [transition(a, Rule::Blank)].into_iter().collect();
    assert_eq!(symbol_transitions(&Rule::sym(a), &nullable), expected);

    assert!(symbol_transitions(&Rule::Blank, &nullable).is_empty());
}

#[test]
fn test_sequence_remaining_rule() {
    let mut grammar = Grammar::new();
    let [a, b, c] = grammar.sym();
    let nullable = Nullable::new(&grammar);

    let rule = Rule::seq([Rule::sym(a), Rule::sym(b), Rule::sym(c)]);
    let expected: BTreeSet<_> = [transition(
        a,
        Rule::seq([Rule::sym(b), Rule::sym(c)]),
    )]
    .into_iter()
    .collect();

    assert_eq!(symbol_transitions(&rule, &nullable), expected);
}

#[test]
fn test_nullable_head_is_skippable() {
    let mut grammar = Grammar::new();
    let [opt, b, x] = grammar.sym();

    // opt ::= x | (blank)
    grammar.define(opt, Rule::choice([Rule::sym(x), Rule::Blank]));
    let nullable = Nullable::new(&grammar);

    let rule = Rule::seq([Rule::sym(opt), Rule::sym(b)]);
    let expected: BTreeSet<_> = [
        transition(opt, Rule::sym(b)),
        transition(b, Rule::Blank),
    ]
    .into_iter()
    .collect();

    assert_eq!(symbol_transitions(&rule, &nullable), expected);
}

#[test]
fn test_choice_union() {
    let mut grammar = Grammar::new();
    let [a, b, c] = grammar.sym();
    let nullable = Nullable::new(&grammar);

    let rule = Rule::choice([
        Rule::sym(a),
        Rule::seq([Rule::sym(b), Rule::sym(c)]),
    ]);
    let expected: BTreeSet<_> = [
        transition(a, Rule::Blank),
        transition(b, Rule::sym(c)),
    ]
    .into_iter()
    .collect();

    assert_eq!(symbol_transitions(&rule, &nullable), expected);
}

#[test]
fn test_distinct_remaining_rules_are_preserved() {
    let mut grammar = Grammar::new();
    let [a, x, y] = grammar.sym();
    let nullable = Nullable::new(&grammar);

    // The same next symbol along two derivation paths, with two different
    // remaining rules.
    let rule = Rule::choice([
        Rule::seq([Rule::sym(a), Rule::sym(x)]),
        Rule::seq([Rule::sym(a), Rule::sym(y)]),
    ]);
    let expected: BTreeSet<_> = [
        transition(a, Rule::sym(x)),
        transition(a, Rule::sym(y)),
    ]
    .into_iter()
    .collect();

    assert_eq!(symbol_transitions(&rule, &nullable), expected);
}

#[test]
fn test_all_nullable_sequence() {
    let mut grammar = Grammar::new();
    let [opt_a, opt_b, x, y] = grammar.sym();

    grammar.define(opt_a, Rule::choice([Rule::sym(x), Rule::Blank]));
    grammar.define(opt_b, Rule::choice([Rule::sym(y), Rule::Blank]));
    let nullable = Nullable::new(&grammar);

    let rule = Rule::seq([Rule::sym(opt_a), Rule::sym(opt_b)]);
    let expected: BTreeSet<_> = [
        transition(opt_a, Rule::sym(opt_b)),
        transition(opt_b, Rule::Blank),
    ]
    .into_iter()
    .collect();

    assert_eq!(symbol_transitions(&rule, &nullable), expected);
}
