use cfg_reduce::grammar::Grammar;

fn expression_grammar() {
    let grammar = Grammar::from_parts(
        &["E", "T", "F"],
        &["a", "(", ")", "+", "*"],
        &[("E", &["F"]), ("F", &["(E)", "Ta"])],
        "E",
    )
    .unwrap();

    println!("Expression grammar:\n{grammar}");
    println!("Language non-empty: {}\n", grammar.is_language_non_empty());
    println!("Reduced:\n{}", grammar.remove_useless_symbols());
}

fn binary_strings() {
    let grammar = Grammar::from_parts(
        &["S"],
        &["1", "0"],
        &[("S", &["0", "1", "0S", "1S"])],
        "S",
    )
    .unwrap();

    println!("Binary strings:\n{grammar}");
    println!("Reduced (unchanged):\n{}", grammar.remove_useless_symbols());
}

fn dangling_symbols() {
    let grammar = Grammar::from_parts(
        &["S", "A", "B", "C", "D"],
        &["1", "0", "2", "3"],
        &[
            ("A", &["B", "A"]),
            ("C", &["D", "D2"]),
            ("D", &["123", "1", "2", "3"]),
        ],
        "S",
    )
    .unwrap();

    println!("Dangling symbols:\n{grammar}");
    println!("Reduced:\n{}", grammar.remove_useless_symbols());
}

fn unreachable_chain() {
    let grammar = Grammar::from_parts(
        &["A", "B", "S"],
        &["a", "b"],
        &[("S", &["aA"]), ("A", &["AB"]), ("B", &["b"])],
        "S",
    )
    .unwrap();

    println!("Unreachable chain:\n{grammar}");
    println!("Reduced:\n{}", grammar.remove_useless_symbols());
}

fn main() {
    expression_grammar();
    binary_strings();
    dangling_symbols();
    unreachable_chain();
}
