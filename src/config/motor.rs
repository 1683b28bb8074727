//! Motor configuration from TOML.

use heapless::{String, Vec};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::motor::{Motor, MotorCurve, MAX_BREAKPOINTS};

/// Motor description and torque curve from TOML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotorConfig {
    /// Model name (max 32 chars).
    #[serde(default)]
    pub name: String<32>,

    /// Manufacturer (max 32 chars).
    #[serde(default)]
    pub manufacturer: String<32>,

    /// Free-form description (max 64 chars).
    #[serde(default)]
    pub description: String<64>,

    /// Rotor moment of inertia in kg*m^2.
    pub j: f64,

    /// Output shaft diameter in m.
    pub d_out: f64,

    /// Curve speed breakpoints in Hz, strictly ascending.
    pub curve_hz: Vec<f64, MAX_BREAKPOINTS>,

    /// Curve torque breakpoints in N*m.
    pub curve_tau: Vec<f64, MAX_BREAKPOINTS>,
}

impl MotorConfig {
    /// Validate and build the motor.
    pub fn build(&self) -> Result<Motor> {
        let curve = MotorCurve::new(&self.curve_hz, &self.curve_tau)?;
        Ok(Motor::new(self.j, self.d_out, curve)?.with_info(
            &self.name,
            &self.manufacturer,
            &self.description,
        ))
    }
}
