//! Sizing configuration - root configuration structure.

use serde::{Deserialize, Serialize};

use crate::drivetrain::Drivetrain;
use crate::error::Result;
use crate::force::ForceSettings;
use crate::motion::MotionSettings;
use crate::motor::Motor;

use super::mechanical::{CouplerConfig, GearConfig, OutputStageConfig};
use super::motor::MotorConfig;

/// Root configuration structure from TOML.
///
/// ```toml
/// [motion]
/// max_velocity = 0.0381
/// acc_mode = "distance"
/// acc_value = 0.00127
///
/// [force]
/// moving_mass = 10.0
///
/// [gear]
/// ratio = 5.0
///
/// [drivetrain]
/// type = "screw"
/// lead = 0.00127
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SizingConfig {
    /// Motion profile settings.
    #[serde(default)]
    pub motion: MotionSettings,

    /// Load and friction settings.
    pub force: ForceSettings,

    /// Motor; the reference stepper when absent.
    #[serde(default)]
    pub motor: Option<MotorConfig>,

    /// Shaft coupler.
    #[serde(default)]
    pub coupler: CouplerConfig,

    /// Gear stage.
    #[serde(default)]
    pub gear: GearConfig,

    /// Output stage.
    pub drivetrain: OutputStageConfig,
}

impl SizingConfig {
    /// Build the configured motor.
    pub fn motor(&self) -> Result<Motor> {
        match self.motor {
            Some(ref config) => config.build(),
            None => Ok(Motor::default()),
        }
    }

    /// Build the configured drivetrain.
    pub fn drivetrain(&self) -> Result<Drivetrain> {
        Drivetrain::new(
            self.coupler.build()?,
            self.gear.build()?,
            self.drivetrain.build()?,
        )
    }
}
