//! Single source of truth for shared constants.
//!
//! Units: energy in MeV, length in mm, time in ns, density in g/cm^3.

/// Total number of readout cells in the test-beam setup.
pub const NUM_CELLS: usize = 104;

/// Scintillator depth rows per module (1-based rows 1..=11 in ATLAS convention).
pub const NUM_TILE_ROWS: usize = 11;

/// Fraction of the calorimeter energy deposited in the scintillating tiles.
pub const SAMPLING_FRACTION: f64 = 0.035;

/// Photoelectrons per MeV, corrected for the sampling fraction (70 pe/GeV in the tiles).
pub const PHOTOELECTRONS_PER_MEV: f64 = 70.0 / 1000.0 / SAMPLING_FRACTION;

/// Sigma of the white electronic noise per readout side, in photoelectrons (30 MeV equivalent).
pub const NOISE_SIGMA_PE: f64 = 30.0 * PHOTOELECTRONS_PER_MEV;

/// Width of one digitization time bin.
pub const BIN_WIDTH_NS: f64 = 0.5;

/// Early part of the digitization window.
pub const EARLY_WINDOW_NS: f64 = 150.0;

/// Late part of the digitization window.
pub const LATE_WINDOW_NS: f64 = 200.0;

/// Total digitization window. Steps at or beyond this time never reach a hit.
pub const TIME_WINDOW_NS: f64 = EARLY_WINDOW_NS + LATE_WINDOW_NS;

/// Birk's law first-order coefficient in g/(MeV cm^2).
pub const BIRK_K1: f64 = 0.02002;

/// Birk's law second-order coefficient in g^2/(MeV^2 cm^4).
pub const BIRK_K2: f64 = 0.0;

/// Scale applied to the Birk coefficients for |charge| > 1 (alpha-particle data).
pub const BIRK_HIGH_CHARGE_RATIO: f64 = 7.2 / 12.6;

/// Millimetres per centimetre, used to form dE/dx in MeV cm^2/g.
pub const MM_PER_CM: f64 = 10.0;

/// Periods in one long-barrel half. Period copies at or above this belong to the upper half.
pub const LONG_HALF_PERIODS: i32 = 307;

/// Periods in the extended barrel.
pub const EXTENDED_PERIODS: i32 = 140;

/// Default run seed for the per-worker noise streams.
pub const DEFAULT_SEED: u64 = 0x7117_CA1;

/// Number of frames needed so that `ceil(t / bin_width)` has a slot for every `t < window`.
pub fn frame_count(window_ns: f64, bin_width_ns: f64) -> usize {
    (window_ns / bin_width_ns).ceil() as usize + 1
}
