//! Filter engine — typed predicates over stored strings
//!
//! [`FilterSet`] is the shared currency: the query-string validator and the
//! natural-language interpreter both produce one, and [`apply`] consumes it.

pub mod engine;
pub mod params;
pub mod types;

pub use engine::{apply, FilterOutcome};
pub use params::FilterParams;
pub use types::{FilterSet, Predicate};
