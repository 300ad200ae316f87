//! Multi-worker event processing.
//!
//! Events are dealt round-robin to scoped worker threads. Each worker owns
//! its hit storage and noise stream; only the cell table is shared.

use std::thread;

use thiserror::Error;
use tilecal_core::{CellLut, DigitizationConfig, EventInput, TileCalError};

use crate::event::{EventOutput, EventProcessor};

/// A fatal error, tagged with where it happened.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("worker {worker} failed on event {event_id}: {source}")]
pub struct WorkerError {
    pub worker: usize,
    pub event_id: u64,
    #[source]
    pub source: TileCalError,
}

/// Options for a processing run.
#[derive(Debug, Clone, Copy)]
pub struct RunOptions {
    pub workers: usize,
    pub keep_pulses: bool,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            workers: 1,
            keep_pulses: false,
        }
    }
}

/// Process the events assigned to one worker, in order.
///
/// Returns `(position, output)` pairs where `position` indexes `events`.
pub fn run_worker(
    config: &DigitizationConfig,
    lut: CellLut,
    worker: usize,
    workers: usize,
    events: &[EventInput],
    keep_pulses: bool,
) -> Result<Vec<(usize, EventOutput)>, WorkerError> {
    let mut processor = EventProcessor::new(config, lut, worker).with_pulses(keep_pulses);
    let mut outputs = Vec::with_capacity(events.len() / workers.max(1) + 1);

    let assigned = events.iter().enumerate().skip(worker).step_by(workers.max(1));
    for (position, event) in assigned {
        let output = processor
            .process_event(&event.primary, &event.steps)
            .map_err(|source| WorkerError {
                worker,
                event_id: event.event_id,
                source,
            })?;
        outputs.push((position, output));
    }

    log::info!("worker {worker} processed {} events", outputs.len());
    Ok(outputs)
}

/// Process all events on `options.workers` threads. Outputs follow input order.
pub fn run_events(
    config: &DigitizationConfig,
    lut: CellLut,
    events: &[EventInput],
    options: RunOptions,
) -> Result<Vec<EventOutput>, WorkerError> {
    let workers = options.workers.max(1);
    log::info!("processing {} events on {workers} workers", events.len());

    let results: Vec<Result<Vec<(usize, EventOutput)>, WorkerError>> = thread::scope(|scope| {
        let handles: Vec<_> = (0..workers)
            .map(|worker| {
                scope.spawn(move || {
                    run_worker(config, lut, worker, workers, events, options.keep_pulses)
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|handle| match handle.join() {
                Ok(result) => result,
                Err(panic) => std::panic::resume_unwind(panic),
            })
            .collect()
    });

    let mut slots: Vec<Option<EventOutput>> = vec![None; events.len()];
    for result in results {
        for (position, output) in result? {
            slots[position] = Some(output);
        }
    }
    Ok(slots.into_iter().flatten().collect())
}
