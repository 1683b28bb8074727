//! Load, friction and margin parameters for the force stage.

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, Result};

/// Parameters of the moving load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ForceSettings {
    /// Multiplicative margin on required force and torque.
    #[serde(default = "default_one")]
    pub safety_factor: f64,

    /// Moving mass in kg.
    pub moving_mass: f64,

    /// Constant preload force in N.
    #[serde(default)]
    pub preload_force: f64,

    /// Mechanical efficiency in (0, 1].
    #[serde(default = "default_one")]
    pub efficiency: f64,

    /// Incline of the axis in degrees (0 = horizontal).
    #[serde(default)]
    pub incline_angle: f64,

    /// Coulomb friction coefficient.
    #[serde(default)]
    pub friction_coef: f64,

    /// Gravitational acceleration in m/s^2.
    #[serde(default = "default_gravity")]
    pub gravity: f64,
}

fn default_one() -> f64 {
    1.0
}

fn default_gravity() -> f64 {
    STANDARD_GRAVITY
}

/// Standard gravity in m/s^2.
pub const STANDARD_GRAVITY: f64 = 9.80665;

impl ForceSettings {
    /// Settings for a frictionless horizontal load with no margin.
    pub fn new(moving_mass: f64) -> Self {
        Self {
            safety_factor: 1.0,
            moving_mass,
            preload_force: 0.0,
            efficiency: 1.0,
            incline_angle: 0.0,
            friction_coef: 0.0,
            gravity: STANDARD_GRAVITY,
        }
    }

    /// Check every parameter's domain.
    pub fn validate(&self) -> Result<()> {
        if !(self.safety_factor >= 0.0) {
            return Err(Error::Config(ConfigError::NegativeSafetyFactor(self.safety_factor)));
        }
        if !(self.moving_mass >= 0.0) {
            return Err(Error::Config(ConfigError::NegativeMass(self.moving_mass)));
        }
        if !(self.efficiency > 0.0 && self.efficiency <= 1.0) {
            return Err(Error::Config(ConfigError::InvalidEfficiency(self.efficiency)));
        }
        if !(self.friction_coef >= 0.0) {
            return Err(Error::Config(ConfigError::NegativeFriction(self.friction_coef)));
        }
        if !(self.gravity > 0.0) {
            return Err(Error::Config(ConfigError::InvalidGravity(self.gravity)));
        }
        Ok(())
    }

    /// Safety factor divided by efficiency.
    #[inline]
    pub fn margin(&self) -> f64 {
        self.safety_factor / self.efficiency
    }
}
