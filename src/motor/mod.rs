//! Motor capability model.
//!
//! A [`Motor`] is a rotor inertia, an output shaft diameter and a static
//! torque-speed [`MotorCurve`]. Electrical dynamics are not modeled.

mod curve;

use heapless::String;
use serde::Serialize;

use crate::error::{bounded, ConfigError, Error, Result};
use crate::units::{gcm2, inch, rpm};

pub use curve::{MotorCurve, MAX_BREAKPOINTS};

/// A motor: descriptive metadata, rotor inertia, shaft and torque curve.
///
/// Built through [`Motor::new`] or from a `MotorConfig`; not deserialized
/// directly.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Motor {
    name: String<32>,
    manufacturer: String<32>,
    description: String<64>,
    j: f64,
    d_out: f64,
    curve: MotorCurve,
}

impl Motor {
    /// Create a motor with rotor inertia `j` (kg*m^2) and output shaft
    /// diameter `d_out` (m).
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a negative inertia or a non-positive
    /// diameter.
    pub fn new(j: f64, d_out: f64, curve: MotorCurve) -> Result<Self> {
        if !(j >= 0.0) {
            return Err(Error::Config(ConfigError::NegativeInertia(j)));
        }
        if !(d_out > 0.0) {
            return Err(Error::Config(ConfigError::InvalidDiameter(d_out)));
        }
        Ok(Self {
            name: String::new(),
            manufacturer: String::new(),
            description: String::new(),
            j,
            d_out,
            curve,
        })
    }

    /// Attach descriptive metadata. Long strings are truncated.
    pub fn with_info(mut self, name: &str, manufacturer: &str, description: &str) -> Self {
        self.name = bounded(name);
        self.manufacturer = bounded(manufacturer);
        self.description = bounded(description);
        self
    }

    /// Moons PL23HSAP4150 NEMA23 stepper at 60 VDC, 1.5 A.
    pub fn pl23hsap4150() -> Self {
        let hz = [0.0, 300.0, 600.0, 900.0, 1200.0, 1500.0, 1800.0].map(rpm);
        let tau = [2.5, 2.2, 1.3, 0.9, 0.7, 0.6, 0.5];
        Self {
            name: bounded("PL23HSAP4150 60VDC 1.5A"),
            manufacturer: bounded("Moons"),
            description: bounded("Stepper NEMA23"),
            j: gcm2(460.0),
            d_out: inch(0.25),
            // Seven ascending, non-negative breakpoints: `new` cannot fail.
            curve: MotorCurve::new(&hz, &tau).expect("reference curve is ascending and positive"),
        }
    }

    /// Model name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Manufacturer.
    pub fn manufacturer(&self) -> &str {
        &self.manufacturer
    }

    /// Free-form description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Rotor moment of inertia in kg*m^2.
    pub fn j(&self) -> f64 {
        self.j
    }

    /// Output shaft diameter in m.
    pub fn d_out(&self) -> f64 {
        self.d_out
    }

    /// Torque-speed curve.
    pub fn curve(&self) -> &MotorCurve {
        &self.curve
    }

    /// Available torque in N*m at `hz`.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::SpeedOutOfRange` outside the curve.
    pub fn tau(&self, hz: f64) -> Result<f64> {
        self.curve.interpolate(hz)
    }
}

impl Default for Motor {
    fn default() -> Self {
        Self::pl23hsap4150()
    }
}
