//! Maps a scintillator step's volume hierarchy onto a flat cell index.

use tilecal_core::constants::{EXTENDED_PERIODS, LONG_HALF_PERIODS};
use tilecal_core::{CellId, CellLut, Module, TileCalError, Touchable};

/// Volume names of the module envelopes in the test-beam geometry.
pub const LONG_BARREL_VOLUME: &str = "Tile::BarrelModule";
pub const EXTENDED_BARREL_VOLUME: &str = "Tile::EBarrelModule";
pub const ITC_VOLUME: &str = "Tile::ITCModule";
pub const PLUG1_VOLUME: &str = "Tile::Plug1Module";
pub const PLUG2_VOLUME: &str = "Tile::Plug2Module";

/// Hierarchy depths, counted from the scintillator outward.
const SCINTILLATOR_LEVEL: usize = 0;
const PERIOD_LEVEL: usize = 2;
const PLUG_LEVEL: usize = 4;
const MODULE_LEVEL: usize = 5;

/// Scintillator copy ranges of the extended-barrel depth bands.
///
/// Bands are separated by one spacer copy, so the row index is the copy
/// minus the band's ordinal.
const EXTENDED_BANDS: [(i32, i32); 3] = [
    (0, 2),  // A
    (4, 7),  // B
    (9, 12), // D
];

/// Outcome of resolving one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub index: usize,
    pub id: CellId,
}

/// Stateless step-to-cell resolver around a read-only lookup table.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellIndexResolver {
    lut: CellLut,
}

impl CellIndexResolver {
    pub fn new(lut: CellLut) -> Self {
        Self { lut }
    }

    pub fn lut(&self) -> &CellLut {
        &self.lut
    }

    /// Resolve a step's ancestor chain into a cell.
    pub fn resolve(&self, touchable: &Touchable) -> Result<Resolved, TileCalError> {
        let id = self.cell_id(touchable)?;
        let index = self
            .lut
            .find_cell_index(id.module, id.row_index, id.period_index)?;
        Ok(Resolved { index, id })
    }

    /// Tile coordinates of a step, without the table lookup.
    pub fn cell_id(&self, touchable: &Touchable) -> Result<CellId, TileCalError> {
        let module_level = touchable.level(MODULE_LEVEL)?;
        let row_copy = touchable.level(SCINTILLATOR_LEVEL)?.copy;

        match module_level.name.as_str() {
            LONG_BARREL_VOLUME => {
                let copy = touchable.level(PERIOD_LEVEL)?.copy;
                let (module, period) = long_barrel_period(copy)?;
                Ok(CellId {
                    module,
                    row_index: row_index(row_copy)?,
                    period_index: period,
                })
            }
            EXTENDED_BARREL_VOLUME => {
                let copy = touchable.level(PERIOD_LEVEL)?.copy;
                if !(0..EXTENDED_PERIODS).contains(&copy) {
                    return Err(TileCalError::PeriodOutOfRange {
                        module: Module::Extended,
                        copy,
                    });
                }
                Ok(CellId {
                    module: Module::Extended,
                    row_index: extended_row_index(row_copy)?,
                    period_index: copy as usize,
                })
            }
            ITC_VOLUME => {
                let plug = touchable.level(PLUG_LEVEL)?;
                let module = match plug.name.as_str() {
                    PLUG1_VOLUME => Module::ExtendedD4,
                    PLUG2_VOLUME => Module::ExtendedC10,
                    other => {
                        return Err(TileCalError::UnknownVolume(format!(
                            "{other} inside {ITC_VOLUME}"
                        )))
                    }
                };
                Ok(CellId {
                    module,
                    row_index: row_index(row_copy)?,
                    period_index: 0,
                })
            }
            other => Err(TileCalError::UnknownVolume(other.to_string())),
        }
    }
}

/// Split the long-barrel period axis into its two mirrored halves.
fn long_barrel_period(copy: i32) -> Result<(Module, usize), TileCalError> {
    if !(0..2 * LONG_HALF_PERIODS).contains(&copy) {
        return Err(TileCalError::PeriodOutOfRange {
            module: Module::LongLower,
            copy,
        });
    }
    if copy >= LONG_HALF_PERIODS {
        Ok((Module::LongUpper, (copy - LONG_HALF_PERIODS) as usize))
    } else {
        Ok((Module::LongLower, (LONG_HALF_PERIODS - 1 - copy) as usize))
    }
}

fn row_index(copy: i32) -> Result<usize, TileCalError> {
    usize::try_from(copy)
        .map_err(|_| TileCalError::UnknownVolume(format!("negative scintillator copy {copy}")))
}

fn extended_row_index(copy: i32) -> Result<usize, TileCalError> {
    EXTENDED_BANDS
        .iter()
        .position(|&(first, last)| (first..=last).contains(&copy))
        .map(|ordinal| (copy - ordinal as i32) as usize)
        .ok_or(TileCalError::ScintillatorOutsideBand { copy })
}
