pub mod compat;
pub mod error;
pub mod format;
pub mod input;
pub mod load;
#[cfg(feature = "pulse-output")]
pub mod pulse_dump;
pub mod save;

pub use error::PersistError;
pub use format::RunHeader;
pub use input::{read_events, read_events_file};
pub use load::{load_run, load_run_file, RunData};
pub use save::{save_run, RowWriter};
