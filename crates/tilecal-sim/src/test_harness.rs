/// End-to-end scenarios: steps in, digitized cell signals out.
///
/// Noise and photostatistics are switched off so every number is exact.

#[cfg(test)]
mod tests {
    use glam::DVec2;
    use tilecal_core::pulse_shape::PMT_RESPONSE;
    use tilecal_core::{CellLut, DigitizationConfig, Primary, Side, Step};

    use crate::birk::BirkModel;
    use crate::event::EventProcessor;
    use crate::hit::HitCollection;
    use crate::pulse::PulseDigitizer;
    use crate::resolver::tests::touchable;
    use crate::resolver::{CellIndexResolver, LONG_BARREL_VOLUME};
    use crate::rng::worker_rng;
    use crate::sensdet::SensitiveDetector;
    use crate::ushape;

    fn noiseless(kernel: Option<Vec<f64>>) -> DigitizationConfig {
        DigitizationConfig {
            noise_sigma_pe: 0.0,
            photostatistics: false,
            pulse_kernel: kernel,
            ..Default::default()
        }
    }

    fn scintillator_step(time: f64, x: f64) -> Step {
        Step {
            energy_deposit: 1.0,
            weight: 1.0,
            step_length: 3.0,
            global_time: time,
            local_position: DVec2::new(x, 5.0),
            density: 1.032,
            charge: 1.0,
            kinetic_energy: 0.0,
            leaves_world: false,
            // Upper long module, row 2, period 20: cell A-9 (index 46).
            scintillator: Some(touchable(LONG_BARREL_VOLUME, "x", 327, 2)),
        }
    }

    const CELL: usize = 46;

    #[test]
    fn test_single_step_lights_one_cell() {
        let config = noiseless(None);
        let lut = CellLut::new();
        let mut processor = EventProcessor::new(&config, lut, 0);
        let primary = Primary {
            pdg: 11,
            energy: 1_000.0,
        };
        let step = scintillator_step(0.0, 20.0);
        let out = processor
            .process_event(&primary, std::slice::from_ref(&step))
            .expect("event digitizes");

        for (index, &signal) in out.row.cell_signal.iter().enumerate() {
            if index == CELL {
                assert!(signal > 0.0);
            } else {
                assert_eq!(signal, 0.0, "cell {index} lit");
            }
        }
        assert_eq!(out.row.cell_energy[CELL], 1.0);
        assert_eq!(out.row.signal_sum, out.row.cell_signal[CELL]);

        // PMT response peaks at 1.0, so the signal is the light of both sides.
        let cell = lut.cell(CELL).expect("cell exists");
        let quenched = BirkModel::default().quench(1.0, 1.0, 3.0, 1.032, 1.0);
        let (near, far) =
            ushape::side_efficiencies(2, step.local_position, cell).expect("inside module");
        let expected = quenched * config.photoelectrons_per_mev * near
            + quenched * config.photoelectrons_per_mev * far;
        let peak = PMT_RESPONSE.iter().copied().fold(f64::MIN, f64::max);
        assert_eq!(peak, 1.0);
        assert!((out.row.cell_signal[CELL] - expected).abs() < 1e-12);
        assert!(near != far, "off-centre step sees asymmetric light");
    }

    #[test]
    fn test_two_steps_accumulate_in_their_bins() {
        let config = noiseless(Some(vec![1.0]));
        let sd = SensitiveDetector::new(CellIndexResolver::new(CellLut::new()), &config);
        let mut hits = HitCollection::new(104, *sd.binning());
        let mut rng = worker_rng(0, 0);

        let early = scintillator_step(12.3, 0.0);
        let late = scintillator_step(87.6, 0.0);
        sd.process_step(&early, early.scintillator.as_ref().expect("tile"), &mut hits, &mut rng)
            .expect("early step");
        sd.process_step(&late, late.scintillator.as_ref().expect("tile"), &mut hits, &mut rng)
            .expect("late step");

        let binning = *sd.binning();
        let early_bin = binning.bin_from_time(12.3).expect("in window");
        let late_bin = binning.bin_from_time(87.6).expect("in window");
        assert_eq!(early_bin, 25);
        assert_eq!(late_bin, 176);

        let hits = hits.finalize();
        let hit = hits.hit(CELL).expect("cell exists");
        assert_eq!(hit.energy_deposit(), 2.0);
        let near = hit.signal(Side::Near);
        assert!(near[early_bin] > 0.0);
        assert_eq!(near[early_bin], near[late_bin]);
        let booked: f64 = near.iter().sum();
        assert!((booked - 2.0 * near[early_bin]).abs() < 1e-12);

        // With a unit kernel the shaped waveform is the histogram itself.
        let digitizer = PulseDigitizer::from_config(&config);
        let waveform = digitizer.convolve(near).expect("frames match");
        assert_eq!(waveform, near.to_vec());
    }

    #[test]
    fn test_two_steps_in_one_bin_add_up() {
        let config = noiseless(Some(vec![1.0]));
        let sd = SensitiveDetector::new(CellIndexResolver::new(CellLut::new()), &config);
        let mut hits = HitCollection::new(104, *sd.binning());
        let mut rng = worker_rng(0, 0);

        let a = scintillator_step(10.1, 0.0);
        let b = scintillator_step(10.4, 0.0);
        for step in [&a, &b] {
            sd.process_step(step, step.scintillator.as_ref().expect("tile"), &mut hits, &mut rng)
                .expect("step");
        }
        let bin = sd.binning().bin_from_time(10.1).expect("in window");
        assert_eq!(Ok(bin), sd.binning().bin_from_time(10.4));

        let hits = hits.finalize();
        let far = hits.hit(CELL).expect("cell exists").signal(Side::Far);
        let single = far[bin] / 2.0;
        assert!(single > 0.0);
        assert_eq!(far.iter().filter(|&&v| v != 0.0).count(), 1);
    }

    #[test]
    fn test_event_signal_follows_kernel_override() {
        let steps = [scintillator_step(0.0, 0.0)];
        let primary = Primary {
            pdg: 211,
            energy: 5_000.0,
        };
        let mut unit = EventProcessor::new(&noiseless(Some(vec![1.0])), CellLut::new(), 0);
        let mut half = EventProcessor::new(&noiseless(Some(vec![0.5])), CellLut::new(), 0);
        let a = unit.process_event(&primary, &steps).expect("ok");
        let b = half.process_event(&primary, &steps).expect("ok");
        assert!((a.row.signal_sum - 2.0 * b.row.signal_sum).abs() < 1e-12);
    }
}
