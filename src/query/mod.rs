//! Natural-language query interpretation
//!
//! A fixed keyword/pattern grammar, not general language understanding.
//! See [`rules`] for the rule table and [`QueryInterpreter`] for how the
//! rules are run and their output checked.

pub mod interpreter;
pub mod rules;

pub use interpreter::QueryInterpreter;
pub use rules::{default_rules, QueryRule};
