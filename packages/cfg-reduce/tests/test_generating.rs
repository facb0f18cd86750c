use std::collections::{HashSet, VecDeque};

use cfg_reduce::grammar::Grammar;
use cfg_reduce::language::Symbol;

/// Bounded breadth-first derivation search: can `start` derive any
/// string made purely of terminals? Sentential forms are capped in
/// length, so the search space is finite.
fn derives_terminal_string(grammar: &Grammar, start: &Symbol) -> bool {
    const MAX_FORM_LEN: usize = 12;

    let mut queue = VecDeque::from([vec![start.clone()]]);
    let mut seen: HashSet<Vec<Symbol>> = HashSet::new();

    while let Some(form) = queue.pop_front() {
        let position = form
            .iter()
            .position(|symbol| grammar.nonterminals().contains(symbol));

        let Some(position) = position else {
            return true;
        };

        if let Some(alternatives) = grammar.rules().get(&form[position]) {
            for word in alternatives {
                let mut next = form[..position].to_vec();
                next.extend(word.0.iter().cloned());
                next.extend(form[position + 1..].iter().cloned());

                if next.len() <= MAX_FORM_LEN && seen.insert(next.clone()) {
                    queue.push_back(next);
                }
            }
        }
    }

    false
}

#[test]
fn test_language_is_non_empty() {
    let grammar =
        Grammar::from_parts(&["A", "B"], &["0", "1"], &[("A", &["0"]), ("B", &["1"])], "A")
            .unwrap();

    assert!(grammar.is_language_non_empty());
}

#[test]
fn test_language_of_ruleless_axiom_is_empty() {
    let grammar = Grammar::from_parts(&["A"], &["0"], &[], "A").unwrap();

    assert!(!grammar.is_language_non_empty());
}

#[test]
fn test_subgrammar_drops_non_generating_productions() {
    // A has no rules, so S must lose "SA" but keep "a".
    let grammar =
        Grammar::from_parts(&["S", "A"], &["a"], &[("S", &["a", "SA"])], "S").unwrap();

    let reduced = grammar.generating_subgrammar();

    assert_eq!(
        reduced,
        Grammar::from_parts(&["S"], &["a"], &[("S", &["a"])], "S").unwrap()
    );
}

#[test]
fn test_subgrammar_keeps_terminals_untouched() {
    // Terminal pruning belongs to the reachability pass.
    let grammar = Grammar::from_parts(&["S", "A"], &["a", "b"], &[("S", &["a"])], "S").unwrap();

    let reduced = grammar.generating_subgrammar();

    assert_eq!(reduced.terminals(), grammar.terminals());
}

#[test]
fn test_non_generating_axiom_yields_empty_language() {
    // F needs E or the ruleless T; E needs F. Nothing bottoms out.
    let grammar = Grammar::from_parts(
        &["E", "T", "F"],
        &["a", "(", ")", "+", "*"],
        &[("E", &["F"]), ("F", &["(E)", "Ta"])],
        "E",
    )
    .unwrap();

    assert!(!grammar.is_language_non_empty());
    assert_eq!(
        grammar.generating_subgrammar(),
        Grammar::from_parts(&["E"], &[], &[], "E").unwrap()
    );
}

#[test]
fn test_generating_set_matches_derivation_search() {
    let nonterminals: &[&str] = &["S", "A", "B", "C", "D"];
    let terminals: &[&str] = &["1", "0", "2", "3"];
    let rules: &[(&str, &[&str])] = &[
        ("A", &["B", "A"]),
        ("C", &["D", "D2"]),
        ("D", &["123", "1", "2", "3"]),
    ];

    for &nonterminal in nonterminals {
        let grammar = Grammar::from_parts(nonterminals, terminals, rules, nonterminal).unwrap();

        assert_eq!(
            grammar.is_language_non_empty(),
            derives_terminal_string(&grammar, &Symbol::new(nonterminal)),
            "disagreement on {nonterminal}"
        );
    }
}
