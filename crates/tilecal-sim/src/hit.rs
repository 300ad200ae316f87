//! Per-event, per-cell hit storage.
//!
//! A `HitCollection` accepts deposits while the event runs. `finalize` consumes
//! it and hands out a read-only `FinalizedHits`; `reset` turns that back into an
//! empty collection for the next event without reallocating.

use tilecal_core::{DigitizationConfig, Side, TileCalError};

/// Maps global time onto time-series frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeBinning {
    bin_width: f64,
    window: f64,
    frames: usize,
}

impl TimeBinning {
    pub fn new(bin_width: f64, window: f64) -> Self {
        Self {
            bin_width,
            window,
            frames: tilecal_core::constants::frame_count(window, bin_width),
        }
    }

    pub fn from_config(config: &DigitizationConfig) -> Self {
        Self::new(config.bin_width_ns, config.time_window_ns)
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn window(&self) -> f64 {
        self.window
    }

    pub fn bin_width(&self) -> f64 {
        self.bin_width
    }

    /// Whether a time can be binned.
    pub fn contains(&self, time: f64) -> bool {
        (0.0..self.window).contains(&time)
    }

    /// Frame index for a global time in `[0, window)`.
    pub fn bin_from_time(&self, time: f64) -> Result<usize, TileCalError> {
        if !self.contains(time) {
            return Err(TileCalError::TimeOutsideWindow {
                time,
                window: self.window,
            });
        }
        let bin = (time / self.bin_width).ceil() as usize;
        if bin >= self.frames {
            return Err(TileCalError::TimeOutsideWindow {
                time,
                window: self.window,
            });
        }
        Ok(bin)
    }
}

/// Accumulation state of one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HitState {
    #[default]
    Empty,
    Accumulating,
}

/// Deposits of one cell in one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    state: HitState,
    energy_deposit: f64,
    near: Vec<f64>,
    far: Vec<f64>,
}

impl Hit {
    fn new(frames: usize) -> Self {
        Self {
            state: HitState::Empty,
            energy_deposit: 0.0,
            near: vec![0.0; frames],
            far: vec![0.0; frames],
        }
    }

    fn clear(&mut self) {
        self.state = HitState::Empty;
        self.energy_deposit = 0.0;
        self.near.fill(0.0);
        self.far.fill(0.0);
    }

    pub fn state(&self) -> HitState {
        self.state
    }

    pub fn is_empty(&self) -> bool {
        self.state == HitState::Empty
    }

    /// Raw tile energy deposit (MeV).
    pub fn energy_deposit(&self) -> f64 {
        self.energy_deposit
    }

    /// Binned light for one readout side.
    pub fn signal(&self, side: Side) -> &[f64] {
        match side {
            Side::Near => &self.near,
            Side::Far => &self.far,
        }
    }
}

/// Hits of all cells while an event is being accumulated.
#[derive(Debug, Clone)]
pub struct HitCollection {
    binning: TimeBinning,
    hits: Vec<Hit>,
}

impl HitCollection {
    pub fn new(num_cells: usize, binning: TimeBinning) -> Self {
        Self {
            binning,
            hits: (0..num_cells).map(|_| Hit::new(binning.frames())).collect(),
        }
    }

    pub fn binning(&self) -> &TimeBinning {
        &self.binning
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    fn hit_mut(&mut self, cell: usize) -> Result<&mut Hit, TileCalError> {
        let count = self.hits.len();
        let hit = self
            .hits
            .get_mut(cell)
            .ok_or(TileCalError::CellIndexOutOfRange { index: cell, count })?;
        hit.state = HitState::Accumulating;
        Ok(hit)
    }

    /// Add raw energy deposit to a cell.
    pub fn add_edep(&mut self, cell: usize, energy: f64) -> Result<(), TileCalError> {
        self.hit_mut(cell)?.energy_deposit += energy;
        Ok(())
    }

    /// Add light to both sides of a cell at `time`.
    pub fn add_sdep(
        &mut self,
        cell: usize,
        time: f64,
        near: f64,
        far: f64,
    ) -> Result<(), TileCalError> {
        let bin = self.binning.bin_from_time(time)?;
        let hit = self.hit_mut(cell)?;
        hit.near[bin] += near;
        hit.far[bin] += far;
        Ok(())
    }

    /// Zero every cell for a new event. Empty cells are already zero.
    pub fn reset(&mut self) {
        self.hits
            .iter_mut()
            .filter(|hit| !hit.is_empty())
            .for_each(Hit::clear);
    }

    /// Close the event; no further deposits are accepted.
    pub fn finalize(self) -> FinalizedHits {
        FinalizedHits { inner: self }
    }
}

/// Read-only hits of a finished event.
#[derive(Debug, Clone)]
pub struct FinalizedHits {
    inner: HitCollection,
}

impl FinalizedHits {
    pub fn hits(&self) -> &[Hit] {
        &self.inner.hits
    }

    pub fn hit(&self, cell: usize) -> Result<&Hit, TileCalError> {
        self.inner
            .hits
            .get(cell)
            .ok_or(TileCalError::CellIndexOutOfRange {
                index: cell,
                count: self.inner.hits.len(),
            })
    }

    pub fn binning(&self) -> &TimeBinning {
        &self.inner.binning
    }

    /// Sum of raw deposits over all cells.
    pub fn total_energy_deposit(&self) -> f64 {
        self.inner.hits.iter().map(Hit::energy_deposit).sum()
    }

    /// Recycle the storage for the next event.
    pub fn reset(self) -> HitCollection {
        let mut collection = self.inner;
        collection.reset();
        collection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binning() -> TimeBinning {
        TimeBinning::from_config(&DigitizationConfig::default())
    }

    #[test]
    fn test_frames() {
        assert_eq!(binning().frames(), 701);
        assert_eq!(TimeBinning::new(1.0, 10.0).frames(), 11);
    }

    #[test]
    fn test_bin_of_zero() {
        assert_eq!(binning().bin_from_time(0.0), Ok(0));
    }

    #[test]
    fn test_ceil_binning() {
        let b = binning();
        assert_eq!(b.bin_from_time(0.1), Ok(1));
        assert_eq!(b.bin_from_time(0.5), Ok(1));
        assert_eq!(b.bin_from_time(0.51), Ok(2));
        assert_eq!(b.bin_from_time(349.9), Ok(700));
    }

    #[test]
    fn test_non_integer_window_keeps_bins_apart() {
        let b = TimeBinning::new(1.0, 10.3);
        assert_eq!(b.frames(), 12);
        assert_eq!(b.bin_from_time(9.5), Ok(10));
        assert_eq!(b.bin_from_time(10.2), Ok(11));
        assert!(b.bin_from_time(10.3).is_err());

        let mut hits = HitCollection::new(1, b);
        hits.add_sdep(0, 9.5, 1.0, 0.0).expect("ok");
        hits.add_sdep(0, 10.2, 2.0, 0.0).expect("ok");
        let hits = hits.finalize();
        let near = hits.hit(0).expect("cell exists").signal(Side::Near);
        assert_eq!(near[10], 1.0);
        assert_eq!(near[11], 2.0);
    }

    #[test]
    fn test_monotonic() {
        let b = binning();
        let mut last = 0;
        let mut t = 0.0;
        while t < b.window() {
            let bin = b.bin_from_time(t).expect("inside window");
            assert!(bin >= last, "bin decreased at t = {t}");
            assert!(bin < b.frames());
            last = bin;
            t += 0.037;
        }
    }

    #[test]
    fn test_window_boundary_is_error() {
        let b = binning();
        assert_eq!(
            b.bin_from_time(350.0),
            Err(TileCalError::TimeOutsideWindow {
                time: 350.0,
                window: 350.0
            })
        );
        assert!(b.bin_from_time(1e6).is_err());
        assert!(b.bin_from_time(-0.1).is_err());
        assert!(b.bin_from_time(f64::NAN).is_err());
    }

    #[test]
    fn test_cells_start_empty() {
        let hits = HitCollection::new(4, binning()).finalize();
        assert!(hits.hits().iter().all(Hit::is_empty));
        assert_eq!(hits.total_energy_deposit(), 0.0);
    }

    #[test]
    fn test_accumulate() {
        let mut hits = HitCollection::new(4, binning());
        hits.add_edep(2, 1.5).expect("ok");
        hits.add_edep(2, 0.5).expect("ok");
        hits.add_sdep(2, 1.0, 3.0, 4.0).expect("ok");
        hits.add_sdep(2, 1.0, 1.0, 1.0).expect("ok");
        let hits = hits.finalize();

        let hit = hits.hit(2).expect("cell exists");
        assert_eq!(hit.state(), HitState::Accumulating);
        assert_eq!(hit.energy_deposit(), 2.0);
        assert_eq!(hit.signal(Side::Near)[2], 4.0);
        assert_eq!(hit.signal(Side::Far)[2], 5.0);
        assert!(hits.hit(0).expect("cell exists").is_empty());
    }

    #[test]
    fn test_out_of_range_cell() {
        let mut hits = HitCollection::new(4, binning());
        assert_eq!(
            hits.add_edep(4, 1.0),
            Err(TileCalError::CellIndexOutOfRange { index: 4, count: 4 })
        );
    }

    #[test]
    fn test_rejected_time_leaves_cell_empty() {
        let mut hits = HitCollection::new(4, binning());
        assert!(hits.add_sdep(1, 400.0, 1.0, 1.0).is_err());
        assert!(hits.finalize().hit(1).expect("cell exists").is_empty());
    }

    #[test]
    fn test_reset_reuses_storage() {
        let mut hits = HitCollection::new(3, binning());
        hits.add_edep(0, 1.0).expect("ok");
        hits.add_sdep(1, 10.0, 2.0, 2.0).expect("ok");
        let hits = hits.finalize().reset();
        assert_eq!(hits.len(), 3);
        let hits = hits.finalize();
        for hit in hits.hits() {
            assert!(hit.is_empty());
            assert_eq!(hit.energy_deposit(), 0.0);
            assert!(hit.signal(Side::Near).iter().all(|&v| v == 0.0));
            assert!(hit.signal(Side::Far).iter().all(|&v| v == 0.0));
            assert_eq!(hit.signal(Side::Far).len(), 701);
        }
    }
}
