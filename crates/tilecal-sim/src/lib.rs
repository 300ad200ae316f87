pub mod birk;
pub mod event;
pub mod hit;
pub mod pulse;
pub mod resolver;
pub mod rng;
pub mod sensdet;
pub mod ushape;
pub mod worker;

mod profiles;

#[cfg(test)]
mod test_harness;

pub use event::{EventOutput, EventProcessor, StepTally};
pub use pulse::{CellPulse, PulseDigitizer};
pub use resolver::CellIndexResolver;
pub use worker::{run_events, RunOptions, WorkerError};
