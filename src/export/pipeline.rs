use super::options::{ExportOptions, ExportReport};
use super::saver::{DirSaver, FileSaver};
use super::serialize::serialize;
use crate::errors::ExportError;
use crate::table::Table;
use std::io::Write;
use std::path::Path;

/// UTF-8 byte-order mark; spreadsheet applications read it to detect the
/// encoding of the exported file.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// MIME tag handed to the `FileSaver` capability alongside the bytes.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// Serialize `table` and save it at `path` via an atomic temp-file replace.
///
/// # Errors
/// Returns an error when the destination cannot be created or written.
pub fn export_to_file(
    path: impl AsRef<Path>,
    table: &Table,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let path = path.as_ref();
    let dir = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| Path::new("."));
    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| ExportError::Io(format!("invalid export file name: {}", path.display())))?;
    export_with(&DirSaver::new(dir), name, table, opts)
}

/// Serialize `table` and hand the finished bytes to `saver` under
/// `file_name`. Repeated calls are independent; nothing persists between
/// them.
///
/// # Errors
/// Propagates the saver's failure.
pub fn export_with(
    saver: &dyn FileSaver,
    file_name: &str,
    table: &Table,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let (bytes, report) = encode(table, opts);
    log::info!("export: file={file_name}, rows={}, bytes={}", report.rows, report.bytes);
    saver.save(file_name, &bytes, CSV_MIME)?;
    Ok(report)
}

/// Write the marker and serialized text to any writer.
///
/// # Errors
/// Returns an error if the write or flush fails.
pub fn export_to_writer<W: Write>(
    writer: &mut W,
    table: &Table,
    opts: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let (bytes, report) = encode(table, opts);
    writer.write_all(&bytes).map_err(|e| ExportError::Io(e.to_string()))?;
    writer.flush().map_err(|e| ExportError::Io(e.to_string()))?;
    Ok(report)
}

fn encode(table: &Table, opts: &ExportOptions) -> (Vec<u8>, ExportReport) {
    let text = serialize(table, opts.delimiter);
    let mut bytes = Vec::with_capacity(UTF8_BOM.len() + text.len());
    if opts.bom {
        bytes.extend_from_slice(&UTF8_BOM);
    }
    bytes.extend_from_slice(text.as_bytes());
    let report = ExportReport { rows: table.len() as u64, bytes: bytes.len() as u64 };
    (bytes, report)
}
