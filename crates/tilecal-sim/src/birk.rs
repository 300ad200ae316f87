//! Birk's saturation law for organic scintillator.
//!
//! `edep = destep / (1 + k1 * dedx + k2 * dedx^2)` with dE/dx in MeV cm^2/g.
//! Coefficients from NIM 80 (1970) 239-244 as used by the ATLAS Tile
//! simulation. Impurities and ageing are not modelled.

use tilecal_core::constants::{BIRK_HIGH_CHARGE_RATIO, BIRK_K1, BIRK_K2, MM_PER_CM};
use tilecal_core::DigitizationConfig;

/// Quenching coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirkModel {
    /// First-order coefficient in g/(MeV cm^2).
    pub k1: f64,
    /// Second-order coefficient in g^2/(MeV^2 cm^4).
    pub k2: f64,
}

impl Default for BirkModel {
    fn default() -> Self {
        Self {
            k1: BIRK_K1,
            k2: BIRK_K2,
        }
    }
}

impl BirkModel {
    pub fn from_config(config: &DigitizationConfig) -> Self {
        Self {
            k1: config.birk_k1,
            k2: config.birk_k2,
        }
    }

    /// Quenched deposit for a step.
    ///
    /// `raw_energy` in MeV, `step_length` in mm, `density` in g/cm^3, `charge`
    /// in units of e. Neutral, zero-length and zero-density steps are not
    /// saturated.
    pub fn quench(
        &self,
        raw_energy: f64,
        weight: f64,
        step_length: f64,
        density: f64,
        charge: f64,
    ) -> f64 {
        let destep = raw_energy * weight;
        if charge == 0.0 || step_length == 0.0 || density == 0.0 {
            return destep;
        }

        let (mut k1, mut k2) = (self.k1, self.k2);
        if charge.abs() > 1.0 {
            k1 *= BIRK_HIGH_CHARGE_RATIO;
            k2 *= BIRK_HIGH_CHARGE_RATIO;
        }

        let dedx = destep / (step_length / MM_PER_CM) / density;
        destep / (1.0 + k1 * dedx + k2 * dedx * dedx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCINTILLATOR_DENSITY: f64 = 1.032;

    #[test]
    fn test_neutral_step_unchanged() {
        let birk = BirkModel::default();
        assert_eq!(birk.quench(2.5, 1.0, 1.0, SCINTILLATOR_DENSITY, 0.0), 2.5);
    }

    #[test]
    fn test_zero_length_unchanged() {
        let birk = BirkModel::default();
        assert_eq!(birk.quench(2.5, 1.0, 0.0, SCINTILLATOR_DENSITY, 1.0), 2.5);
    }

    #[test]
    fn test_zero_density_unchanged() {
        let birk = BirkModel::default();
        assert_eq!(birk.quench(2.5, 1.0, 1.0, 0.0, 1.0), 2.5);
    }

    #[test]
    fn test_weight_applied() {
        let birk = BirkModel::default();
        assert_eq!(birk.quench(2.0, 0.5, 1.0, SCINTILLATOR_DENSITY, 0.0), 1.0);
    }

    #[test]
    fn test_never_amplifies() {
        let birk = BirkModel::default();
        for &destep in &[1e-6, 0.01, 1.0, 50.0] {
            for &length in &[1e-3, 0.1, 1.0, 3.0] {
                for &charge in &[-2.0, -1.0, 1.0, 2.0] {
                    let q = birk.quench(destep, 1.0, length, SCINTILLATOR_DENSITY, charge);
                    assert!(q <= destep, "{q} > {destep}");
                    assert!(q > 0.0);
                }
            }
        }
    }

    #[test]
    fn test_small_dedx_limit() {
        // Long step, tiny deposit: dE/dx -> 0 and the response tends to destep.
        let birk = BirkModel::default();
        let destep = 1e-6;
        let q = birk.quench(destep, 1.0, 1e6, SCINTILLATOR_DENSITY, 1.0);
        assert!((q - destep).abs() / destep < 1e-9);
    }

    #[test]
    fn test_high_charge_saturates_less() {
        let birk = BirkModel::default();
        let single = birk.quench(5.0, 1.0, 0.1, SCINTILLATOR_DENSITY, 1.0);
        let double = birk.quench(5.0, 1.0, 0.1, SCINTILLATOR_DENSITY, 2.0);
        assert!(double > single);
    }

    #[test]
    fn test_known_value() {
        // 1 MeV over 1 cm of density 1: dedx = 1, response = 1 / 1.02002.
        let birk = BirkModel::default();
        let q = birk.quench(1.0, 1.0, 10.0, 1.0, 1.0);
        assert!((q - 1.0 / 1.02002).abs() < 1e-12);
    }

    #[test]
    fn test_from_config() {
        let config = DigitizationConfig {
            birk_k1: 0.5,
            birk_k2: 0.1,
            ..Default::default()
        };
        let birk = BirkModel::from_config(&config);
        assert_eq!(birk, BirkModel { k1: 0.5, k2: 0.1 });
    }
}
