//! Lookup domain module - query input types and record filters

pub mod engine;
pub mod query;

pub use engine::{by_course, by_student};
pub use query::{EMPTY_ID_MESSAGE, LookupKind, QueryInput};
