use thiserror::Error;

use crate::types::Module;

/// Fatal errors raised while turning steps into cell signals.
///
/// Every variant means the digitization tables and the geometry (or the step
/// filter in front of the accumulator) disagree. None of them is retried.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TileCalError {
    #[error("cell index {index} does not exist (table holds {count} cells)")]
    CellIndexOutOfRange { index: usize, count: usize },

    #[error("no cell in {module} for row index {row} and period index {period}")]
    CellLookupFailed {
        module: Module,
        row: usize,
        period: usize,
    },

    #[error("unknown volume hierarchy: {0}")]
    UnknownVolume(String),

    #[error("scintillator copy {copy} lies outside every extended-barrel depth band")]
    ScintillatorOutsideBand { copy: i32 },

    #[error("period copy {copy} is outside the {module} range")]
    PeriodOutOfRange { module: Module, copy: i32 },

    #[error("depth row {0} has no light-profile radius")]
    ProfileRowOutOfRange(usize),

    #[error("light-profile index {index} out of range for phi {phi}")]
    ProfileIndexOutOfRange { index: i64, phi: f64 },

    #[error("time {time} ns is outside the digitization window of {window} ns")]
    TimeOutsideWindow { time: f64, window: f64 },

    #[error("time series has {actual} frames, expected {expected}")]
    FrameCountMismatch { expected: usize, actual: usize },
}
