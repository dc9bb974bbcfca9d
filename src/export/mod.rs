mod options;
mod pipeline;
mod saver;
mod serialize;

pub use options::{ExportOptions, ExportReport};
pub use pipeline::{CSV_MIME, UTF8_BOM, export_to_file, export_to_writer, export_with};
pub use saver::{DirSaver, FileSaver};
pub use serialize::serialize;
