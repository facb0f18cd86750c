use indexmap::{IndexMap, IndexSet};

use crate::grammar::Grammar;
use crate::language::{Symbol, Word};

impl Grammar {
    /// Drops every symbol that no derivation starting from the axiom
    /// can mention.
    ///
    /// Frontier-driven fixed point: each pass expands only the
    /// nonterminals discovered in the previous one. Terminals are
    /// collected along the way, so terminals that no reachable rule
    /// mentions disappear even though they were declared. Whole
    /// production lists are kept or dropped with their head;
    /// reachability never filters individual alternatives.
    pub fn remove_unreachable_symbols(&self) -> Grammar {
        let mut reachable = IndexSet::from([self.start.clone()]);
        let mut frontier = reachable.clone();
        let mut reachable_terminals = IndexSet::new();

        while !frontier.is_empty() {
            let mut discovered = IndexSet::new();

            for (head, alternatives) in &self.rules {
                if !frontier.contains(head) {
                    continue;
                }

                for word in alternatives {
                    for symbol in &word.0 {
                        if self.is_terminal(symbol) {
                            reachable_terminals.insert(symbol.clone());
                        }
                        if self.is_nonterminal(symbol) && !reachable.contains(symbol) {
                            discovered.insert(symbol.clone());
                        }
                    }
                }
            }

            reachable.extend(discovered.iter().cloned());
            frontier = discovered;
        }

        if reachable == self.nonterminals {
            return self.clone();
        }

        let rules: IndexMap<Symbol, IndexSet<Word>> = self
            .rules
            .iter()
            .filter(|(head, _)| reachable.contains(*head))
            .map(|(head, alternatives)| (head.clone(), alternatives.clone()))
            .collect();

        Grammar {
            nonterminals: reachable,
            terminals: reachable_terminals,
            rules,
            start: self.start.clone(),
        }
    }

    /// Removes every useless symbol: first the nonterminals that
    /// cannot derive a terminal string, then everything the axiom can
    /// no longer reach. The order matters — reachability alone would
    /// let non-generating symbols survive, and symbols reachable only
    /// through dead productions must fall in the second pass.
    pub fn remove_useless_symbols(&self) -> Grammar {
        self.generating_subgrammar().remove_unreachable_symbols()
    }
}
