use crate::table::Delimiter;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportOptions {
    pub delimiter: Delimiter,
    /// Prefix the output with the UTF-8 byte-order mark so spreadsheet
    /// applications detect the encoding.
    pub bom: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self { delimiter: Delimiter::Semicolon, bom: true }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExportReport {
    pub rows: u64,
    pub bytes: u64,
}
