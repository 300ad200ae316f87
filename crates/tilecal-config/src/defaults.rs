//! Reference configuration shipped with the test-beam setup.

use tilecal_core::DigitizationConfig;

/// RON text of the reference configuration. Omitted fields take their defaults.
pub const REFERENCE_CONFIG_RON: &str = r#"(
    photoelectrons_per_mev: 2.0,
    noise_sigma_pe: 60.0,
    bin_width_ns: 0.5,
    time_window_ns: 350.0,
    birk_k1: 0.02002,
    birk_k2: 0.0,
    photostatistics: true,
)"#;

/// Noise-free, deterministic configuration for calibration runs.
pub fn calibration_config() -> DigitizationConfig {
    DigitizationConfig {
        noise_sigma_pe: 0.0,
        photostatistics: false,
        ..DigitizationConfig::default()
    }
}
