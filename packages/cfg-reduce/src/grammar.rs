use std::fmt::Display;

use indexmap::{IndexMap, IndexSet};
use itertools::Itertools;
use thiserror::Error;

use crate::language::{Symbol, Word};

mod generating;
mod reachable;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GrammarError {
    #[error("axiom {0} is not a declared nonterminal")]
    AxiomNotDeclared(Symbol),
    #[error("rule head {0} is not a declared nonterminal")]
    UndeclaredRuleHead(Symbol),
}

/// A context-free grammar G = (N, T, P, S).
///
/// Immutable once constructed: every transformation returns a new
/// grammar and leaves the receiver untouched. Right-hand-side symbols
/// are classified as terminal or nonterminal purely by membership in
/// the grammar's own sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grammar {
    nonterminals: IndexSet<Symbol>,
    terminals: IndexSet<Symbol>,
    rules: IndexMap<Symbol, IndexSet<Word>>,
    start: Symbol,
}

impl Grammar {
    /// Validates and builds a grammar. The axiom must be a declared
    /// nonterminal, and so must every rule head. Nonterminals without
    /// rules are allowed; right-hand sides are taken as given.
    pub fn new(
        nonterminals: IndexSet<Symbol>,
        terminals: IndexSet<Symbol>,
        rules: IndexMap<Symbol, IndexSet<Word>>,
        start: Symbol,
    ) -> Result<Self, GrammarError> {
        if !nonterminals.contains(&start) {
            return Err(GrammarError::AxiomNotDeclared(start));
        }
        if let Some(head) = rules.keys().find(|head| !nonterminals.contains(*head)) {
            return Err(GrammarError::UndeclaredRuleHead(head.clone()));
        }

        Ok(Self {
            nonterminals,
            terminals,
            rules,
            start,
        })
    }

    /// Convenience constructor over plain strings. Each right-hand
    /// side splits into one-character symbols.
    pub fn from_parts(
        nonterminals: &[&str],
        terminals: &[&str],
        rules: &[(&str, &[&str])],
        start: &str,
    ) -> Result<Self, GrammarError> {
        Self::new(
            nonterminals.iter().copied().map(Symbol::new).collect(),
            terminals.iter().copied().map(Symbol::new).collect(),
            rules
                .iter()
                .map(|(head, alternatives)| {
                    (
                        Symbol::new(*head),
                        alternatives.iter().map(|rhs| Word::from(*rhs)).collect(),
                    )
                })
                .collect(),
            Symbol::new(start),
        )
    }

    pub fn nonterminals(&self) -> &IndexSet<Symbol> {
        &self.nonterminals
    }

    pub fn terminals(&self) -> &IndexSet<Symbol> {
        &self.terminals
    }

    pub fn rules(&self) -> &IndexMap<Symbol, IndexSet<Word>> {
        &self.rules
    }

    pub fn start(&self) -> &Symbol {
        &self.start
    }

    pub(crate) fn is_terminal(&self, symbol: &Symbol) -> bool {
        self.terminals.contains(symbol)
    }

    pub(crate) fn is_nonterminal(&self, symbol: &Symbol) -> bool {
        self.nonterminals.contains(symbol)
    }

    /// The grammar of the empty language over the same axiom: no
    /// terminals, no rules, only the start symbol. Returned by the
    /// reductions whenever the axiom itself turns out to be useless,
    /// so that the result still satisfies the construction invariants.
    pub(crate) fn empty_language(&self) -> Self {
        Self {
            nonterminals: IndexSet::from([self.start.clone()]),
            terminals: IndexSet::new(),
            rules: IndexMap::new(),
            start: self.start.clone(),
        }
    }

    /// Renders the grammar as `G = (N, T, P, S)` followed by the
    /// production block. Presentation only.
    pub fn definition(&self) -> String {
        let mut nonterminals = self.nonterminals.clone();
        nonterminals.sort_by(|a, b| {
            if a == &self.start {
                return std::cmp::Ordering::Less;
            }
            if b == &self.start {
                return std::cmp::Ordering::Greater;
            }
            a.cmp(b)
        });

        let mut terminals = self.terminals.clone();
        terminals.sort();

        let mut definition = format!(
            "G = ({{{}}}, {{{}}}, P, {})\n\n",
            nonterminals.iter().join(", "),
            terminals.iter().join(", "),
            self.start
        );

        definition += "P = {\n";

        for (head, alternatives) in &self.rules {
            definition += &format!("  {} → {}\n", head, alternatives.iter().join(" | "));
        }

        definition += "}\n";

        definition
    }
}

impl Display for Grammar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.definition())
    }
}
