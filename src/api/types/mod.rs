//! Request and error types for the HTML surface

pub mod error;
pub mod params;

pub use error::PageError;
pub use params::{IndexParams, LookupForm};
