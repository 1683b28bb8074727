//! Motion module for drive-sizer.
//!
//! Synthesizes a three-phase (accelerate, constant, decelerate) linear
//! motion table from [`MotionSettings`].

mod generator;
mod profile;
mod settings;

use serde::{Deserialize, Serialize};

pub use generator::LinearMotion;
pub use profile::{AccelStats, MotionProfile, MotionSample, MotionStats, PhaseStats};
pub use settings::{CruiseMode, MotionSettings, RampMode};

/// Segment of a three-phase move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Ramp from rest to peak velocity.
    Accelerate,
    /// Hold at peak velocity.
    Constant,
    /// Ramp from peak velocity back to rest.
    Decelerate,
}

impl Phase {
    /// All phases in execution order.
    pub const ALL: [Phase; 3] = [Phase::Accelerate, Phase::Constant, Phase::Decelerate];

    /// Settings key prefix (`acc`, `con`, `dec`).
    pub fn key(self) -> &'static str {
        match self {
            Phase::Accelerate => "acc",
            Phase::Constant => "con",
            Phase::Decelerate => "dec",
        }
    }

    /// Human-readable list of the mode tags this phase accepts.
    pub fn valid_modes(self) -> &'static str {
        match self {
            Phase::Constant => "'time' or 'distance'",
            _ => "'time', 'distance' or 'acceleration'",
        }
    }

    /// Check if this phase ramps velocity.
    #[inline]
    pub fn is_ramp(self) -> bool {
        !matches!(self, Phase::Constant)
    }
}
