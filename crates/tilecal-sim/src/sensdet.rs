//! Sensitive-detector step processing for scintillator tiles.
//!
//! Filters a step, resolves its cell, applies Birk's law and the light
//! profile, and books the resulting photoelectrons into the hit collection.

use rand::Rng;
use rand_distr::{Distribution, Poisson};
use tilecal_core::{DigitizationConfig, Step, TileCalError, Touchable};

use crate::birk::BirkModel;
use crate::hit::{HitCollection, TimeBinning};
use crate::resolver::CellIndexResolver;
use crate::ushape;

/// What happened to one scintillator step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StepOutcome {
    /// Light was booked into `cell`.
    Recorded {
        cell: usize,
        quenched: f64,
        near_pe: f64,
        far_pe: f64,
    },
    /// No energy deposit; nothing to book.
    NoDeposit,
    /// Global time outside the digitization window.
    OutsideWindow,
}

/// Turns scintillator steps into cell hits.
#[derive(Debug, Clone)]
pub struct SensitiveDetector {
    resolver: CellIndexResolver,
    birk: BirkModel,
    binning: TimeBinning,
    photoelectrons_per_mev: f64,
    photostatistics: bool,
}

impl SensitiveDetector {
    pub fn new(resolver: CellIndexResolver, config: &DigitizationConfig) -> Self {
        Self {
            resolver,
            birk: BirkModel::from_config(config),
            binning: TimeBinning::from_config(config),
            photoelectrons_per_mev: config.photoelectrons_per_mev,
            photostatistics: config.photostatistics,
        }
    }

    pub fn resolver(&self) -> &CellIndexResolver {
        &self.resolver
    }

    pub fn binning(&self) -> &TimeBinning {
        &self.binning
    }

    pub fn process_step<R: Rng + ?Sized>(
        &self,
        step: &Step,
        touchable: &Touchable,
        hits: &mut HitCollection,
        rng: &mut R,
    ) -> Result<StepOutcome, TileCalError> {
        if step.energy_deposit == 0.0 {
            return Ok(StepOutcome::NoDeposit);
        }
        if !self.binning.contains(step.global_time) {
            log::debug!(
                "discarding step at {} ns outside the {} ns window",
                step.global_time,
                self.binning.window()
            );
            return Ok(StepOutcome::OutsideWindow);
        }

        let resolved = self.resolver.resolve(touchable)?;
        let cell = self.resolver.lut().cell(resolved.index)?;

        let quenched = self.birk.quench(
            step.energy_deposit,
            step.weight,
            step.step_length,
            step.density,
            step.charge,
        );
        let (near_eff, far_eff) =
            ushape::side_efficiencies(resolved.id.row_index, step.local_position, cell)?;

        let mean_pe = quenched * self.photoelectrons_per_mev;
        let near_pe = self.photoelectrons(mean_pe * near_eff, rng);
        let far_pe = self.photoelectrons(mean_pe * far_eff, rng);

        hits.add_edep(resolved.index, step.energy_deposit)?;
        hits.add_sdep(resolved.index, step.global_time, near_pe, far_pe)?;

        Ok(StepOutcome::Recorded {
            cell: resolved.index,
            quenched,
            near_pe,
            far_pe,
        })
    }

    fn photoelectrons<R: Rng + ?Sized>(&self, mean: f64, rng: &mut R) -> f64 {
        if !self.photostatistics || mean <= 0.0 {
            return mean;
        }
        Poisson::new(mean).map_or(0.0, |poisson| poisson.sample(rng))
    }
}
