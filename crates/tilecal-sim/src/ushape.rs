//! Position-dependent light collection ("U-shape") of the tile readout.

use std::f64::consts::PI;

use glam::DVec2;
use tilecal_core::{Cell, Row, Side, TileCalError};

use crate::profiles::{
    EXT_A, EXT_BC, EXT_D, LONG_A, LONG_BC, LONG_D, PROFILE_BINS, ROW_RADII_MM,
};

/// Azimuthal half-opening of one module (64 modules around the barrel).
pub const PHI_HALF_OPENING: f64 = PI / 64.0;

/// Which tabulated curve applies to a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileFamily {
    LongA,
    LongBc,
    LongD,
    ExtendedA,
    ExtendedBc,
    ExtendedD,
}

impl ProfileFamily {
    /// Classify a cell by module and depth band.
    pub fn of(cell: &Cell) -> Self {
        match (cell.module.is_long(), cell.row) {
            (true, Row::A) => ProfileFamily::LongA,
            (true, Row::D) => ProfileFamily::LongD,
            (true, _) => ProfileFamily::LongBc,
            (false, Row::A) => ProfileFamily::ExtendedA,
            (false, Row::D) => ProfileFamily::ExtendedD,
            (false, _) => ProfileFamily::ExtendedBc,
        }
    }

    fn curve(self) -> &'static [f64; PROFILE_BINS] {
        match self {
            ProfileFamily::LongA => &LONG_A,
            ProfileFamily::LongBc => &LONG_BC,
            ProfileFamily::LongD => &LONG_D,
            ProfileFamily::ExtendedA => &EXT_A,
            ProfileFamily::ExtendedBc => &EXT_BC,
            ProfileFamily::ExtendedD => &EXT_D,
        }
    }
}

/// Light-collection efficiency of a step for one readout side, in (0, 1].
///
/// `row_index` is the 0-based depth row of the tile and `local` the step
/// position in the tile frame (mm). The near side sees the mirrored position.
pub fn efficiency(
    row_index: usize,
    local: DVec2,
    side: Side,
    cell: &Cell,
) -> Result<f64, TileCalError> {
    let radius = ROW_RADII_MM
        .get(row_index)
        .copied()
        .ok_or(TileCalError::ProfileRowOutOfRange(row_index))?;
    let x = match side {
        Side::Near => -local.x,
        Side::Far => local.x,
    };
    let phi = (x / (local.y + radius)).atan();

    let scaled = (phi / PHI_HALF_OPENING + 1.0) * 0.5 * (PROFILE_BINS - 1) as f64;
    let index = if scaled.is_finite() {
        scaled.round() as i64
    } else {
        -1
    };
    if !(0..PROFILE_BINS as i64).contains(&index) {
        return Err(TileCalError::ProfileIndexOutOfRange { index, phi });
    }

    let curve = ProfileFamily::of(cell).curve();
    Ok(curve[index as usize])
}

/// Efficiencies for both sides, near first.
pub fn side_efficiencies(
    row_index: usize,
    local: DVec2,
    cell: &Cell,
) -> Result<(f64, f64), TileCalError> {
    let near = efficiency(row_index, local, Side::Near, cell)?;
    let far = efficiency(row_index, local, Side::Far, cell)?;
    Ok((near, far))
}
