use indexmap::{IndexMap, IndexSet};

use crate::grammar::Grammar;
use crate::language::{Symbol, Word};

impl Grammar {
    /// Whether every symbol of `word` is a terminal or an
    /// already-known generating nonterminal.
    fn derives_within(&self, word: &Word, generating: &IndexSet<Symbol>) -> bool {
        word.0
            .iter()
            .all(|symbol| self.is_terminal(symbol) || generating.contains(symbol))
    }

    /// Bottom-up fixed point over the rules: a nonterminal is
    /// generating once one of its productions consists solely of
    /// terminals and generating nonterminals. Bounded by |N| passes.
    fn generating_symbols(&self) -> IndexSet<Symbol> {
        let mut generating = IndexSet::new();

        loop {
            let mut changed = false;

            for (head, alternatives) in &self.rules {
                if generating.contains(head) {
                    continue;
                }

                if alternatives
                    .iter()
                    .any(|word| self.derives_within(word, &generating))
                {
                    generating.insert(head.clone());
                    changed = true;
                }
            }

            if !changed {
                break;
            }
        }

        generating
    }

    /// Whether the grammar's language contains at least one terminal
    /// string, i.e. whether the axiom is a generating symbol.
    pub fn is_language_non_empty(&self) -> bool {
        self.generating_symbols().contains(&self.start)
    }

    /// The sub-grammar restricted to generating nonterminals. A kept
    /// nonterminal keeps only the productions made entirely of
    /// terminals and generating nonterminals; terminals pass through
    /// untouched (reachability owns terminal pruning). If the axiom
    /// itself is not generating, the language is empty and the
    /// empty-language grammar is returned.
    pub fn generating_subgrammar(&self) -> Grammar {
        let generating = self.generating_symbols();

        if !generating.contains(&self.start) {
            return self.empty_language();
        }

        let rules: IndexMap<Symbol, IndexSet<Word>> = self
            .rules
            .iter()
            .filter(|(head, _)| generating.contains(*head))
            .map(|(head, alternatives)| {
                (
                    head.clone(),
                    alternatives
                        .iter()
                        .filter(|word| self.derives_within(word, &generating))
                        .cloned()
                        .collect(),
                )
            })
            .collect();

        Grammar {
            nonterminals: generating,
            terminals: self.terminals.clone(),
            rules,
            start: self.start.clone(),
        }
    }
}
