//! Event lifecycle: begin, step loop, end-of-event digitization and aggregation.

use rand_chacha::ChaCha8Rng;
use tilecal_core::{CellLut, DigitizationConfig, EventRow, Primary, Step, TileCalError};

use crate::hit::{FinalizedHits, HitCollection};
use crate::pulse::{CellPulse, PulseDigitizer};
use crate::resolver::CellIndexResolver;
use crate::rng::worker_rng;
use crate::sensdet::{SensitiveDetector, StepOutcome};

/// Step bookkeeping of the current event.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StepTally {
    pub recorded: usize,
    pub no_deposit: usize,
    pub outside_window: usize,
}

/// Everything an event produces.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOutput {
    pub row: EventRow,
    pub tally: StepTally,
    /// Shaped waveforms of cells with a non-zero signal, when pulses are kept.
    pub pulses: Vec<(usize, CellPulse)>,
}

/// Per-worker event processor. Owns the hit storage and the noise stream.
pub struct EventProcessor {
    detector: SensitiveDetector,
    digitizer: PulseDigitizer,
    hits: HitCollection,
    rng: ChaCha8Rng,
    keep_pulses: bool,
    leakage: f64,
    energy_deposit: f64,
    tally: StepTally,
}

impl EventProcessor {
    pub fn new(config: &DigitizationConfig, lut: CellLut, worker_index: usize) -> Self {
        let detector = SensitiveDetector::new(CellIndexResolver::new(lut), config);
        let hits = HitCollection::new(lut.num_cells(), *detector.binning());
        Self {
            detector,
            digitizer: PulseDigitizer::from_config(config),
            hits,
            rng: worker_rng(config.seed, worker_index),
            keep_pulses: false,
            leakage: 0.0,
            energy_deposit: 0.0,
            tally: StepTally::default(),
        }
    }

    /// Keep shaped waveforms in the event output.
    pub fn with_pulses(mut self, keep: bool) -> Self {
        self.keep_pulses = keep;
        self
    }

    pub fn begin_event(&mut self) {
        self.hits.reset();
        self.leakage = 0.0;
        self.energy_deposit = 0.0;
        self.tally = StepTally::default();
    }

    pub fn process_step(&mut self, step: &Step) -> Result<(), TileCalError> {
        if step.leaves_world {
            self.leakage += step.kinetic_energy;
        }
        self.energy_deposit += step.energy_deposit;

        let Some(touchable) = step.scintillator.as_ref() else {
            return Ok(());
        };
        match self
            .detector
            .process_step(step, touchable, &mut self.hits, &mut self.rng)?
        {
            StepOutcome::Recorded { .. } => self.tally.recorded += 1,
            StepOutcome::NoDeposit => self.tally.no_deposit += 1,
            StepOutcome::OutsideWindow => self.tally.outside_window += 1,
        }
        Ok(())
    }

    /// Digitize every cell and build the event row.
    pub fn end_event(&mut self, primary: &Primary) -> Result<EventOutput, TileCalError> {
        let binning = *self.hits.binning();
        let hits = std::mem::replace(&mut self.hits, HitCollection::new(0, binning)).finalize();
        let digitized = self.digitize_cells(&hits);
        self.hits = hits.reset();
        let (cell_energy, cell_signal, pulses) = digitized?;

        if self.tally.outside_window > 0 {
            log::debug!(
                "{} steps outside the digitization window discarded",
                self.tally.outside_window
            );
        }

        Ok(EventOutput {
            row: EventRow {
                leakage: self.leakage,
                energy_deposit: self.energy_deposit,
                signal_sum: cell_signal.iter().sum(),
                cell_energy,
                cell_signal,
                pdg: primary.pdg,
                beam_energy: primary.energy,
            },
            tally: self.tally,
            pulses,
        })
    }

    #[allow(clippy::type_complexity)]
    fn digitize_cells(
        &mut self,
        hits: &FinalizedHits,
    ) -> Result<(Vec<f64>, Vec<f64>, Vec<(usize, CellPulse)>), TileCalError> {
        let mut cell_energy = Vec::with_capacity(hits.hits().len());
        let mut cell_signal = Vec::with_capacity(hits.hits().len());
        let mut pulses = Vec::new();
        for (index, hit) in hits.hits().iter().enumerate() {
            let pulse = self.digitizer.digitize(hit, &mut self.rng)?;
            cell_energy.push(hit.energy_deposit());
            cell_signal.push(pulse.signal);
            if self.keep_pulses && pulse.signal != 0.0 {
                pulses.push((index, pulse));
            }
        }
        Ok((cell_energy, cell_signal, pulses))
    }

    /// Run a whole event through the lifecycle.
    pub fn process_event<'a>(
        &mut self,
        primary: &Primary,
        steps: impl IntoIterator<Item = &'a Step>,
    ) -> Result<EventOutput, TileCalError> {
        self.begin_event();
        for step in steps {
            self.process_step(step)?;
        }
        self.end_event(primary)
    }
}
