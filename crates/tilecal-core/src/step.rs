//! Step and event records handed over by the transport engine.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::TileCalError;

/// One level of the volume hierarchy a step sits in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeLevel {
    pub name: String,
    pub copy: i32,
}

impl VolumeLevel {
    pub fn new(name: impl Into<String>, copy: i32) -> Self {
        Self {
            name: name.into(),
            copy,
        }
    }
}

/// Ancestor chain of a scintillator step, innermost volume first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Touchable(pub Vec<VolumeLevel>);

impl Touchable {
    /// Volume at `depth` levels above the step's own volume.
    pub fn level(&self, depth: usize) -> Result<&VolumeLevel, TileCalError> {
        self.0.get(depth).ok_or_else(|| {
            TileCalError::UnknownVolume(format!(
                "hierarchy has {} levels, level {depth} requested",
                self.0.len()
            ))
        })
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }
}

/// A single transport step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Total energy deposit (MeV).
    pub energy_deposit: f64,
    /// Track weight applied to the deposit.
    #[serde(default = "unit_weight")]
    pub weight: f64,
    /// Path length of the step (mm).
    pub step_length: f64,
    /// Global time at the pre-step point (ns).
    pub global_time: f64,
    /// Local position in the scintillator frame (mm).
    #[serde(default)]
    pub local_position: DVec2,
    /// Density of the pre-step material (g/cm^3).
    pub density: f64,
    /// Charge of the particle in units of e.
    pub charge: f64,
    /// Kinetic energy of the track after the step (MeV).
    #[serde(default)]
    pub kinetic_energy: f64,
    /// The track leaves the world volume with this step.
    #[serde(default)]
    pub leaves_world: bool,
    /// Volume hierarchy when the step is inside a scintillator tile.
    #[serde(default)]
    pub scintillator: Option<Touchable>,
}

fn unit_weight() -> f64 {
    1.0
}

/// The primary particle of an event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Primary {
    /// PDG particle code.
    pub pdg: i32,
    /// Kinetic energy (MeV).
    pub energy: f64,
}

/// All steps of one event, in transport order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventInput {
    pub event_id: u64,
    pub primary: Primary,
    pub steps: Vec<Step>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_touchable_level() {
        let touchable = Touchable(vec![
            VolumeLevel::new("Tile::Scintillator", 2),
            VolumeLevel::new("Tile::Absorber", 0),
        ]);
        assert_eq!(touchable.level(0).expect("level 0").copy, 2);
        assert!(matches!(
            touchable.level(5),
            Err(TileCalError::UnknownVolume(_))
        ));
    }

    #[test]
    fn test_step_defaults_from_json() {
        let json = r#"{"energy_deposit":1.5,"step_length":2.0,"global_time":3.0,
                       "density":1.032,"charge":-1.0}"#;
        let step: Step = serde_json::from_str(json).expect("parses");
        assert_eq!(step.weight, 1.0);
        assert_eq!(step.local_position, DVec2::ZERO);
        assert!(!step.leaves_world);
        assert!(step.scintillator.is_none());
    }

    #[test]
    fn test_touchable_is_a_plain_list() {
        let json = r#"[{"name":"Tile::Scintillator","copy":4}]"#;
        let touchable: Touchable = serde_json::from_str(json).expect("parses");
        assert_eq!(touchable.depth(), 1);
    }
}
