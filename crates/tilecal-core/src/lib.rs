pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod pulse_shape;
pub mod record;
pub mod step;
pub mod types;

pub use config::DigitizationConfig;
pub use error::TileCalError;
pub use geometry::{Cell, CellLut};
pub use record::EventRow;
pub use step::{EventInput, Primary, Step, Touchable, VolumeLevel};
pub use types::{CellId, Module, Row, Side};
