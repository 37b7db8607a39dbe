//! Strings module — storage and REST endpoints for analyzed strings

pub mod handler;
pub mod store;
pub mod types;

pub use handler::{strings_router, StringsState};
pub use store::StringStore;
pub use types::StringRecord;
