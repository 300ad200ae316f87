//! Pulse shaping and noise injection for the cell readout.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use tilecal_core::{DigitizationConfig, Side, TileCalError};

use crate::hit::Hit;

/// Shaped waveforms and final signal of one cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellPulse {
    /// Shaped waveforms, `None` for a side that saw no light.
    pub near: Option<Vec<f64>>,
    pub far: Option<Vec<f64>>,
    /// Digitized cell signal after noise and threshold.
    pub signal: f64,
}

impl CellPulse {
    pub fn waveform(&self, side: Side) -> Option<&[f64]> {
        match side {
            Side::Near => self.near.as_deref(),
            Side::Far => self.far.as_deref(),
        }
    }
}

/// Shapes binned light with the PMT response and reduces it to one number per cell.
#[derive(Debug, Clone)]
pub struct PulseDigitizer {
    kernel: Vec<f64>,
    noise_sigma: f64,
    frames: usize,
}

impl PulseDigitizer {
    pub fn new(kernel: Vec<f64>, noise_sigma: f64, frames: usize) -> Self {
        Self {
            kernel,
            noise_sigma,
            frames,
        }
    }

    pub fn from_config(config: &DigitizationConfig) -> Self {
        Self::new(config.kernel().to_vec(), config.noise_sigma_pe, config.frames())
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn noise_sigma(&self) -> f64 {
        self.noise_sigma
    }

    fn check_frames(&self, series: &[f64]) -> Result<(), TileCalError> {
        if series.len() != self.frames {
            return Err(TileCalError::FrameCountMismatch {
                expected: self.frames,
                actual: series.len(),
            });
        }
        Ok(())
    }

    /// Causal convolution of a binned signal with the pulse kernel.
    ///
    /// The output keeps the input length; pulse tails past the last frame are cut.
    pub fn convolve(&self, signal: &[f64]) -> Result<Vec<f64>, TileCalError> {
        self.check_frames(signal)?;
        let mut waveform = vec![0.0; signal.len()];
        for (start, &amplitude) in signal.iter().enumerate() {
            if amplitude == 0.0 {
                continue;
            }
            for (out, &k) in waveform[start..].iter_mut().zip(&self.kernel) {
                *out += amplitude * k;
            }
        }
        Ok(waveform)
    }

    /// Combine the two shaped sides into the cell signal.
    ///
    /// Each side contributes its peak plus Gaussian noise; the sum is kept only
    /// above twice the noise sigma.
    pub fn reduce_to_scalar<R: Rng + ?Sized>(
        &self,
        near: &[f64],
        far: &[f64],
        rng: &mut R,
    ) -> Result<f64, TileCalError> {
        self.check_frames(near)?;
        self.check_frames(far)?;
        let total = peak(near) + self.noise(rng) + peak(far) + self.noise(rng);
        Ok(self.threshold(total))
    }

    /// Shape and reduce one cell's hit.
    pub fn digitize<R: Rng + ?Sized>(
        &self,
        hit: &Hit,
        rng: &mut R,
    ) -> Result<CellPulse, TileCalError> {
        let near = self.shape_side(hit.signal(Side::Near))?;
        let far = self.shape_side(hit.signal(Side::Far))?;
        let total = near.as_deref().map_or(0.0, peak)
            + self.noise(rng)
            + far.as_deref().map_or(0.0, peak)
            + self.noise(rng);
        Ok(CellPulse {
            near,
            far,
            signal: self.threshold(total),
        })
    }

    fn shape_side(&self, signal: &[f64]) -> Result<Option<Vec<f64>>, TileCalError> {
        self.check_frames(signal)?;
        if signal.iter().all(|&v| v == 0.0) {
            return Ok(None);
        }
        self.convolve(signal).map(Some)
    }

    fn noise<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.noise_sigma == 0.0 {
            return 0.0;
        }
        let z: f64 = StandardNormal.sample(rng);
        z * self.noise_sigma
    }

    fn threshold(&self, total: f64) -> f64 {
        if total > 2.0 * self.noise_sigma {
            total
        } else {
            0.0
        }
    }
}

/// Largest sample of a waveform, 0.0 for an empty one.
fn peak(waveform: &[f64]) -> f64 {
    waveform
        .iter()
        .copied()
        .reduce(f64::max)
        .unwrap_or(0.0)
}
