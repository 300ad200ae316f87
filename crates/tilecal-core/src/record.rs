use serde::{Deserialize, Serialize};

/// Version of the per-event row layout. Bump together with the analysis side.
pub const ROW_FORMAT_VERSION: u32 = 1;

/// Column names in output order.
pub const ROW_COLUMNS: [&str; 7] = [
    "ELeak",
    "EDep",
    "SdepSum",
    "EdepCells",
    "SdepCells",
    "PDG",
    "EBeam",
];

/// One output row per event.
///
/// Field order is the column order; serde writes fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRow {
    /// Kinetic energy leaving the world volume (MeV).
    #[serde(rename = "ELeak")]
    pub leakage: f64,
    /// Raw energy deposited anywhere in the calorimeter (MeV).
    #[serde(rename = "EDep")]
    pub energy_deposit: f64,
    /// Sum of the digitized cell signals.
    #[serde(rename = "SdepSum")]
    pub signal_sum: f64,
    /// Raw tile energy deposit per cell (MeV).
    #[serde(rename = "EdepCells")]
    pub cell_energy: Vec<f64>,
    /// Digitized signal per cell.
    #[serde(rename = "SdepCells")]
    pub cell_signal: Vec<f64>,
    /// PDG code of the primary particle.
    #[serde(rename = "PDG")]
    pub pdg: i32,
    /// Energy of the primary particle (MeV).
    #[serde(rename = "EBeam")]
    pub beam_energy: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_serialize_in_order() {
        let row = EventRow {
            leakage: 1.0,
            energy_deposit: 2.0,
            signal_sum: 3.0,
            cell_energy: vec![0.5],
            cell_signal: vec![3.0],
            pdg: 11,
            beam_energy: 20_000.0,
        };
        let json = serde_json::to_string(&row).expect("serializes");
        let mut last = 0;
        for column in ROW_COLUMNS {
            let key = format!("\"{column}\"");
            let pos = json.find(&key).expect("column present");
            assert!(pos >= last, "column {column} out of order in {json}");
            last = pos;
        }
    }
}
