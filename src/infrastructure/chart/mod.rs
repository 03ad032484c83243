//! Chart rendering implementations

pub mod histogram;

pub use histogram::HistogramRenderer;
