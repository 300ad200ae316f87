use serde::{Deserialize, Serialize};

use crate::constants::{
    frame_count, BIN_WIDTH_NS, BIRK_K1, BIRK_K2, DEFAULT_SEED, NOISE_SIGMA_PE,
    PHOTOELECTRONS_PER_MEV, TIME_WINDOW_NS,
};
use crate::pulse_shape::PMT_RESPONSE;

/// Digitization parameters, loaded from RON.
///
/// Every field falls back to the reference test-beam value when omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DigitizationConfig {
    /// Photoelectrons per MeV of quenched tile deposit.
    #[serde(default = "default_pe_per_mev")]
    pub photoelectrons_per_mev: f64,
    /// Gaussian noise sigma per readout side, in photoelectrons. 0.0 disables noise.
    #[serde(default = "default_noise_sigma")]
    pub noise_sigma_pe: f64,
    /// Width of one time bin in ns.
    #[serde(default = "default_bin_width")]
    pub bin_width_ns: f64,
    /// Total digitization window in ns.
    #[serde(default = "default_time_window")]
    pub time_window_ns: f64,
    /// Birk's law coefficient k1 in g/(MeV cm^2).
    #[serde(default = "default_birk_k1")]
    pub birk_k1: f64,
    /// Birk's law coefficient k2 in g^2/(MeV^2 cm^4).
    #[serde(default = "default_birk_k2")]
    pub birk_k2: f64,
    /// Sample photoelectron counts from a Poisson distribution instead of using the mean.
    #[serde(default = "default_photostatistics")]
    pub photostatistics: bool,
    /// Run seed; each worker derives its own stream from it.
    #[serde(default = "default_seed")]
    pub seed: u64,
    /// Pulse kernel override. `None` uses the PMT single-photoelectron response.
    #[serde(default)]
    pub pulse_kernel: Option<Vec<f64>>,
}

fn default_pe_per_mev() -> f64 {
    PHOTOELECTRONS_PER_MEV
}

fn default_noise_sigma() -> f64 {
    NOISE_SIGMA_PE
}

fn default_bin_width() -> f64 {
    BIN_WIDTH_NS
}

fn default_time_window() -> f64 {
    TIME_WINDOW_NS
}

fn default_birk_k1() -> f64 {
    BIRK_K1
}

fn default_birk_k2() -> f64 {
    BIRK_K2
}

fn default_photostatistics() -> bool {
    true
}

fn default_seed() -> u64 {
    DEFAULT_SEED
}

impl Default for DigitizationConfig {
    fn default() -> Self {
        Self {
            photoelectrons_per_mev: PHOTOELECTRONS_PER_MEV,
            noise_sigma_pe: NOISE_SIGMA_PE,
            bin_width_ns: BIN_WIDTH_NS,
            time_window_ns: TIME_WINDOW_NS,
            birk_k1: BIRK_K1,
            birk_k2: BIRK_K2,
            photostatistics: true,
            seed: DEFAULT_SEED,
            pulse_kernel: None,
        }
    }
}

impl DigitizationConfig {
    /// Frames in each side's time series.
    pub fn frames(&self) -> usize {
        frame_count(self.time_window_ns, self.bin_width_ns)
    }

    /// The pulse kernel in effect.
    pub fn kernel(&self) -> &[f64] {
        self.pulse_kernel.as_deref().unwrap_or(&PMT_RESPONSE)
    }
}
