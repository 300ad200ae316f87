use std::path::PathBuf;

use thiserror::Error;
use tilecal_config::defaults::calibration_config;
use tilecal_config::{load_config, ConfigError};
use tilecal_core::{CellLut, DigitizationConfig, EventInput, TileCalError};
use tilecal_persist::PersistError;
use tilecal_sim::{run_events, RunOptions, WorkerError};

use crate::beams::{pencil_beam, BeamConfig};
use crate::report::{self, RunSummary};

/// Everything that can stop a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Persist(#[from] PersistError),
    #[error(transparent)]
    Worker(#[from] WorkerError),
    #[error(transparent)]
    Geometry(#[from] TileCalError),
    #[error("failed to write summary: {0}")]
    Summary(#[from] std::io::Error),
}

/// Command-line settings of one run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    pub config_path: Option<PathBuf>,
    pub input: Option<PathBuf>,
    pub output_dir: PathBuf,
    pub run: u32,
    pub threads: usize,
    pub seed: Option<u64>,
    /// Noise-free digitization when no config file is given.
    pub calibration: bool,
    pub beam: BeamConfig,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            config_path: None,
            input: None,
            output_dir: PathBuf::from("."),
            run: 0,
            threads: std::thread::available_parallelism().map_or(1, |n| n.get()),
            seed: None,
            calibration: false,
            beam: BeamConfig::default(),
        }
    }
}

/// Replays a step stream (or a synthetic beam) through the digitization chain.
pub struct Runner {
    settings: RunnerConfig,
    config: DigitizationConfig,
    lut: CellLut,
}

impl Runner {
    pub fn new(settings: RunnerConfig) -> Result<Self, RunError> {
        let mut config = match &settings.config_path {
            Some(path) => load_config(path)?,
            None if settings.calibration => calibration_config(),
            None => DigitizationConfig::default(),
        };
        if let Some(seed) = settings.seed {
            config.seed = seed;
        }
        Ok(Self {
            settings,
            config,
            lut: CellLut::new(),
        })
    }

    pub fn config(&self) -> &DigitizationConfig {
        &self.config
    }

    fn load_events(&self) -> Result<Vec<EventInput>, RunError> {
        match &self.settings.input {
            Some(path) => Ok(tilecal_persist::read_events_file(path)?),
            None => {
                let beam = &self.settings.beam;
                log::info!(
                    "No input given, generating {} pencil-beam events (PDG {}, {} MeV)",
                    beam.events,
                    beam.pdg,
                    beam.energy
                );
                Ok(pencil_beam(beam))
            }
        }
    }

    /// Process every event, write the run file and return the summary.
    pub fn run(&self) -> Result<RunSummary, RunError> {
        let events = self.load_events()?;
        let options = RunOptions {
            workers: self.settings.threads.max(1),
            keep_pulses: cfg!(feature = "pulse-output"),
        };
        let outputs = run_events(&self.config, self.lut, &events, options)?;

        let dir = &self.settings.output_dir;
        let rows = outputs.iter().map(|o| &o.row);
        let path = tilecal_persist::save_run(dir, self.settings.run, rows)?;

        #[cfg(feature = "pulse-output")]
        self.dump_pulses(&events, &outputs)?;

        let mut summary = report::summarize(self.settings.run, options.workers, &outputs);
        summary.output = Some(path);
        report::save_summary(&dir.join(report::summary_file_name(self.settings.run)), &summary)?;
        Ok(summary)
    }

    #[cfg(feature = "pulse-output")]
    fn dump_pulses(
        &self,
        events: &[EventInput],
        outputs: &[tilecal_sim::EventOutput],
    ) -> Result<(), RunError> {
        use tilecal_core::Side;
        use tilecal_persist::pulse_dump;

        let base = &self.settings.output_dir;
        let mut files = 0;
        for (event, output) in events.iter().zip(outputs) {
            let dir = pulse_dump::event_dir(base, self.settings.run, event.event_id);
            for (index, pulse) in &output.pulses {
                let cell = self.lut.cell(*index)?;
                for side in Side::BOTH {
                    if let Some(waveform) = pulse.waveform(side) {
                        pulse_dump::write_pulse(&dir, *index, cell, side, waveform)?;
                        files += 1;
                    }
                }
            }
        }
        log::info!("Wrote {files} pulse files");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilecal_persist::load_run_file;

    fn temp_dir(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("tilecal-runner-{tag}-{}", std::process::id()))
    }

    #[test]
    fn test_synthetic_run_writes_rows() {
        let dir = temp_dir("synthetic");
        let settings = RunnerConfig {
            output_dir: dir.clone(),
            run: 11,
            threads: 3,
            seed: Some(5),
            beam: BeamConfig {
                events: 12,
                ..Default::default()
            },
            ..Default::default()
        };
        let runner = Runner::new(settings).expect("runner");
        assert_eq!(runner.config().seed, 5);

        let summary = runner.run().expect("run completes");
        assert_eq!(summary.events, 12);
        assert_eq!(summary.workers, 3);
        assert!(summary.mean_signal > 0.0);
        assert!(summary.mean_leakage > 0.0);

        let path = summary.output.clone().expect("output path");
        let data = load_run_file(&path, Some(11)).expect("loads");
        assert_eq!(data.rows.len(), 12);
        assert!(data.rows.iter().all(|r| r.cell_signal.len() == 104));
        assert!(dir.join("TileCalTBsummary_Run11.json").exists());
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_thread_count_does_not_change_noiseless_rows() {
        let config_dir = temp_dir("config");
        std::fs::create_dir_all(&config_dir).expect("temp dir");
        let config_path = config_dir.join("quiet.ron");
        std::fs::write(&config_path, "(noise_sigma_pe: 0.0, photostatistics: false)")
            .expect("write config");

        let run_with = |threads: usize, tag: &str| {
            let settings = RunnerConfig {
                config_path: Some(config_path.clone()),
                output_dir: temp_dir(tag),
                threads,
                beam: BeamConfig {
                    events: 6,
                    ..Default::default()
                },
                ..Default::default()
            };
            let summary = Runner::new(settings).expect("runner").run().expect("run");
            let path = summary.output.expect("output path");
            load_run_file(&path, None).expect("loads").rows
        };

        assert_eq!(run_with(1, "one"), run_with(4, "four"));
        for tag in ["config", "one", "four"] {
            let _ = std::fs::remove_dir_all(temp_dir(tag));
        }
    }

    #[test]
    fn test_calibration_run_is_noise_free() {
        let settings = RunnerConfig {
            output_dir: temp_dir("calibration"),
            calibration: true,
            threads: 2,
            beam: BeamConfig {
                events: 4,
                ..Default::default()
            },
            ..Default::default()
        };
        let runner = Runner::new(settings).expect("runner");
        assert_eq!(runner.config().noise_sigma_pe, 0.0);
        assert!(!runner.config().photostatistics);

        let summary = runner.run().expect("run");
        let rows = load_run_file(&summary.output.expect("output path"), Some(0))
            .expect("loads")
            .rows;
        for row in rows {
            // Without noise only cells that saw light carry a signal.
            for (energy, signal) in row.cell_energy.iter().zip(&row.cell_signal) {
                if *energy == 0.0 {
                    assert_eq!(*signal, 0.0);
                }
            }
        }
        let _ = std::fs::remove_dir_all(temp_dir("calibration"));
    }

    #[test]
    fn test_missing_input_fails() {
        let settings = RunnerConfig {
            input: Some(PathBuf::from("/nonexistent/steps.jsonl")),
            output_dir: temp_dir("missing"),
            ..Default::default()
        };
        let err = Runner::new(settings).expect("runner").run().unwrap_err();
        assert!(matches!(err, RunError::Persist(PersistError::Io { .. })));
    }

    #[test]
    fn test_bad_config_fails() {
        let settings = RunnerConfig {
            config_path: Some(PathBuf::from("/nonexistent/tilecal.ron")),
            ..Default::default()
        };
        assert!(matches!(
            Runner::new(settings),
            Err(RunError::Config(ConfigError::ReadError { .. }))
        ));
    }
}
