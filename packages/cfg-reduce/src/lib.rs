pub mod grammar;
pub mod language;
