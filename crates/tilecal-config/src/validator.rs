use thiserror::Error;
use tilecal_core::DigitizationConfig;

#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("bin_width_ns must be positive, got {0}")]
    NonPositiveBinWidth(f64),
    #[error("time_window_ns {window} must cover at least one bin of {bin_width} ns")]
    WindowTooShort { window: f64, bin_width: f64 },
    #[error("noise_sigma_pe must not be negative, got {0}")]
    NegativeNoise(f64),
    #[error("photoelectrons_per_mev must be positive, got {0}")]
    NonPositiveYield(f64),
    #[error("Birk coefficient {name} must not be negative, got {value}")]
    NegativeBirk { name: &'static str, value: f64 },
    #[error("pulse kernel is empty")]
    EmptyKernel,
    #[error("pulse kernel sample {index} is not finite")]
    NonFiniteKernel { index: usize },
    #[error("pulse kernel must peak at 1.0, peaks at {peak}")]
    UnnormalizedKernel { peak: f64 },
}

/// Allowed deviation of the kernel peak from 1.0.
const KERNEL_PEAK_TOLERANCE: f64 = 1e-9;

/// Validate a digitization config, collecting every violation.
pub fn validate_config(config: &DigitizationConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !(config.bin_width_ns > 0.0) {
        errors.push(ValidationError::NonPositiveBinWidth(config.bin_width_ns));
    } else if !(config.time_window_ns >= config.bin_width_ns) {
        errors.push(ValidationError::WindowTooShort {
            window: config.time_window_ns,
            bin_width: config.bin_width_ns,
        });
    }

    if !(config.noise_sigma_pe >= 0.0) {
        errors.push(ValidationError::NegativeNoise(config.noise_sigma_pe));
    }

    if !(config.photoelectrons_per_mev > 0.0) {
        errors.push(ValidationError::NonPositiveYield(
            config.photoelectrons_per_mev,
        ));
    }

    for (name, value) in [("birk_k1", config.birk_k1), ("birk_k2", config.birk_k2)] {
        if !(value >= 0.0) {
            errors.push(ValidationError::NegativeBirk { name, value });
        }
    }

    let kernel = config.kernel();
    if kernel.is_empty() {
        errors.push(ValidationError::EmptyKernel);
    }
    if let Some(index) = kernel.iter().position(|v| !v.is_finite()) {
        errors.push(ValidationError::NonFiniteKernel { index });
    } else if let Some(peak) = kernel.iter().copied().reduce(f64::max) {
        if (peak - 1.0).abs() > KERNEL_PEAK_TOLERANCE {
            errors.push(ValidationError::UnnormalizedKernel { peak });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
