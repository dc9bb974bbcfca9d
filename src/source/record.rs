use crate::table::{Cell, Row, Table};
use crate::types::VehicleId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A fleet vehicle as the backend returns it (one `viaturas` row).
///
/// Records are read-only snapshots; creation and mutation live entirely
/// behind the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleRecord {
    pub id: VehicleId,
    /// Short callsign the roster is ordered by.
    pub prefixo: String,
    pub tipo: String,
    pub ativa: bool,
    pub created_at: DateTime<Utc>,
}

impl VehicleRecord {
    /// Shape one record into an exportable row.
    #[must_use]
    pub fn to_row(&self) -> Row {
        vec![
            Cell::from(self.prefixo.as_str()),
            Cell::from(self.tipo.as_str()),
            Cell::from(self.ativa),
            Cell::from(self.created_at.to_rfc3339()),
        ]
    }
}

/// Header plus one row per record: the table an application layer hands to
/// the CSV exporter.
#[must_use]
pub fn roster_table(records: &[VehicleRecord]) -> Table {
    let mut table = Table::new();
    table.push_row(vec![
        Cell::from("Prefixo"),
        Cell::from("Tipo"),
        Cell::from("Ativa"),
        Cell::from("Criada em"),
    ]);
    for record in records {
        table.push_row(record.to_row());
    }
    table
}
