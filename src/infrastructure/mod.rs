//! Infrastructure layer - I/O adapters behind the domain seams

pub mod chart;
pub mod datastore;
pub mod logging;
