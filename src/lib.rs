pub mod cache;
pub mod errors;
pub mod export;
pub mod logger;
pub mod source;
pub mod table;
pub mod types;

pub use crate::cache::{CacheConfig, QueryCache, QueryStatus};
pub use crate::errors::ExportError;
pub use crate::export::{
    CSV_MIME, DirSaver, ExportOptions, ExportReport, FileSaver, UTF8_BOM, export_to_file,
    export_to_writer, export_with, serialize,
};
pub use crate::source::{
    ACTIVE_VEHICLES_KEY, MemoryBackend, VehicleBackend, VehicleRecord, VehicleSource,
    records_from_json, roster_table,
};
pub use crate::table::{Cell, Delimiter, Row, Table};

use std::path::Path;

/// Fetch the active roster through `source` and save it as a CSV file.
///
/// # Errors
/// Propagates backend failures and file-save failures.
pub fn export_roster<B: VehicleBackend>(
    source: &VehicleSource<B>,
    path: impl AsRef<Path>,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let records = source.fetch_active()?;
    let table = roster_table(&records);
    export::export_to_file(path, &table, opts)
}

/// Initializes the logging system.
///
/// This function should be called before any other export operations.
///
/// # Errors
/// Propagates logger initialization failures.
pub fn init() -> Result<(), Box<dyn std::error::Error>> {
    logger::init()?;
    Ok(())
}
