use std::fmt::Display;

use derive_more::Display;

/// An atomic grammar symbol. Whether it acts as a terminal or a
/// nonterminal is decided by the grammar that owns it, never by its
/// spelling.
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        let s = s.into();
        assert!(!s.is_empty());
        Symbol(s)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A sequence of symbols, used as a production right-hand side.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word(pub Vec<Symbol>);

impl Word {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Word(symbols)
    }
}

impl Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for symbol in &self.0 {
            write!(f, "{symbol}")?;
        }
        Ok(())
    }
}

impl FromIterator<Symbol> for Word {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        Word(iter.into_iter().collect())
    }
}

// Every symbol is a single character, so a right-hand side written as
// a plain string splits per character.
impl From<&str> for Word {
    fn from(s: &str) -> Self {
        s.chars().map(Symbol::new).collect()
    }
}
