//! Marksheet
//!
//! A small web application over a CSV marks table:
//! - per-student marks summary (sum of marks across courses)
//! - per-course statistics (average, maximum) with a histogram artifact
//!
//! The table is re-read on every request; there is no cross-request state
//! beyond the regenerable chart artifacts on disk.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::chart::HistogramRenderer;
use infrastructure::datastore::CsvRecordStore;

/// Create the application state from configuration: a CSV-backed record
/// store and a plotters-backed histogram renderer writing into the public
/// static directory.
pub fn create_app_state(config: &AppConfig) -> AppState {
    let record_store = Arc::new(CsvRecordStore::new(&config.data.csv_path));
    let chart_renderer = Arc::new(HistogramRenderer::new(&config.data.static_dir));

    AppState::new(record_store, chart_renderer)
}
