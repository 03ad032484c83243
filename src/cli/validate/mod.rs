//! Validate command - loads the marks table once and reports on it

use tracing::{error, info, warn};

use crate::config::AppConfig;
use crate::domain::RecordStore;
use crate::infrastructure::datastore::CsvRecordStore;
use crate::infrastructure::logging;

/// Load the configured CSV once. Prints the record count, or the load error
/// that the web server would turn into a failed request.
pub async fn run() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().unwrap_or_default();
    logging::init_logging(&logging::LoggingConfig {
        level: config.logging.level.clone(),
        format: config.logging.format.clone(),
    });

    let store = CsvRecordStore::new(&config.data.csv_path);
    match store.load().await {
        Ok(records) if records.is_empty() => {
            warn!(path = %config.data.csv_path, "marks table is empty or missing");
        }
        Ok(records) => {
            info!(
                path = %config.data.csv_path,
                count = records.len(),
                "marks table loaded"
            );
        }
        Err(err) => {
            error!(path = %config.data.csv_path, "marks table failed to load: {err}");
            anyhow::bail!("validation failed: {err}");
        }
    }

    Ok(())
}
