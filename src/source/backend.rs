use super::record::VehicleRecord;
use crate::errors::ExportError;

/// Backend read contract, equivalent to
/// `SELECT * FROM viaturas WHERE ativa = true ORDER BY prefixo ASC`:
/// every record returned has `ativa = true` and the sequence is ordered
/// ascending by `prefixo`.
pub trait VehicleBackend: Send + Sync {
    /// Read the active roster.
    ///
    /// # Errors
    /// Surfaces the backend failure outward; never returns partial data.
    fn fetch_active(&self) -> Result<Vec<VehicleRecord>, ExportError>;
}

/// In-process backend over a fixed set of rows. Applies the contract's
/// filter and ordering itself, making it the reference implementor and the
/// natural test double.
#[derive(Debug, Default, Clone)]
pub struct MemoryBackend {
    rows: Vec<VehicleRecord>,
}

impl MemoryBackend {
    #[must_use]
    pub fn new(rows: Vec<VehicleRecord>) -> Self {
        Self { rows }
    }
}

impl VehicleBackend for MemoryBackend {
    fn fetch_active(&self) -> Result<Vec<VehicleRecord>, ExportError> {
        let mut active: Vec<VehicleRecord> =
            self.rows.iter().filter(|r| r.ativa).cloned().collect();
        active.sort_by(|a, b| a.prefixo.cmp(&b.prefixo));
        Ok(active)
    }
}

/// Decode a backend JSON payload (an array of `viaturas` rows).
///
/// # Errors
/// Returns an error when the payload is not a valid array of records.
pub fn records_from_json(payload: &str) -> Result<Vec<VehicleRecord>, ExportError> {
    Ok(serde_json::from_str(payload)?)
}
