//! Piecewise-linear torque-speed capability curve.

use heapless::Vec;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Error, RangeError, Result};

/// Maximum number of breakpoints in a motor curve.
pub const MAX_BREAKPOINTS: usize = 32;

/// Torque available (N*m) as a function of shaft speed (Hz).
///
/// Deserialization goes through [`MotorCurve::new`], so a decoded curve
/// satisfies the same checks as a constructed one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Breakpoints", into = "Breakpoints")]
pub struct MotorCurve {
    hz: Vec<f64, MAX_BREAKPOINTS>,
    tau: Vec<f64, MAX_BREAKPOINTS>,
    hz_min: f64,
    hz_max: f64,
}

/// Serialized form of a curve.
#[derive(Serialize, Deserialize)]
struct Breakpoints {
    hz: Vec<f64, MAX_BREAKPOINTS>,
    tau: Vec<f64, MAX_BREAKPOINTS>,
}

impl TryFrom<Breakpoints> for MotorCurve {
    type Error = Error;

    fn try_from(points: Breakpoints) -> Result<Self> {
        MotorCurve::new(&points.hz, &points.tau)
    }
}

impl From<MotorCurve> for Breakpoints {
    fn from(curve: MotorCurve) -> Self {
        Self {
            hz: curve.hz,
            tau: curve.tau,
        }
    }
}

impl MotorCurve {
    /// Build a curve from speed and torque breakpoints.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless both sequences have the same
    /// length (2 to [`MAX_BREAKPOINTS`]), all values are non-negative and the
    /// speeds are strictly ascending.
    pub fn new(hz: &[f64], tau: &[f64]) -> Result<Self> {
        if hz.len() != tau.len() {
            return Err(Error::Config(ConfigError::CurveLengthMismatch {
                speeds: hz.len(),
                torques: tau.len(),
            }));
        }
        if hz.len() < 2 {
            return Err(Error::Config(ConfigError::CurveTooShort(hz.len())));
        }
        if hz.len() > MAX_BREAKPOINTS {
            return Err(Error::Config(ConfigError::TooManyBreakpoints(hz.len())));
        }
        if let Some(index) = hz.iter().chain(tau).position(|v| !(*v >= 0.0)) {
            return Err(Error::Config(ConfigError::NegativeCurveValue {
                index: index % hz.len(),
            }));
        }
        if let Some(index) = hz.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::Config(ConfigError::CurveNotAscending { index: index + 1 }));
        }

        // Lengths checked above, so the copies cannot overflow.
        let hz_min = hz[0];
        let hz_max = hz[hz.len() - 1];
        Ok(Self {
            hz: Vec::from_slice(hz).map_err(|_| ConfigError::TooManyBreakpoints(hz.len()))?,
            tau: Vec::from_slice(tau).map_err(|_| ConfigError::TooManyBreakpoints(tau.len()))?,
            hz_min,
            hz_max,
        })
    }

    /// Speed breakpoints in Hz.
    pub fn hz(&self) -> &[f64] {
        &self.hz
    }

    /// Torque breakpoints in N*m.
    pub fn tau(&self) -> &[f64] {
        &self.tau
    }

    /// Lowest speed on the curve in Hz.
    pub fn hz_min(&self) -> f64 {
        self.hz_min
    }

    /// Highest speed on the curve in Hz.
    pub fn hz_max(&self) -> f64 {
        self.hz_max
    }

    /// Check if a speed lies on the curve.
    pub fn contains(&self, hz: f64) -> bool {
        hz >= self.hz_min && hz <= self.hz_max
    }

    /// Interpolated torque at `hz`.
    ///
    /// Uses the first segment whose upper breakpoint is at or above `hz`, so
    /// a query exactly on a breakpoint returns that breakpoint's torque.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::SpeedOutOfRange` outside `[hz_min, hz_max]`.
    pub fn interpolate(&self, hz: f64) -> Result<f64> {
        if !self.contains(hz) {
            return Err(Error::Range(RangeError::SpeedOutOfRange {
                hz,
                min: self.hz_min,
                max: self.hz_max,
            }));
        }
        if hz == self.hz[0] {
            return Ok(self.tau[0]);
        }

        let i = self
            .hz
            .windows(2)
            .position(|w| hz <= w[1])
            .unwrap_or(self.hz.len() - 2);
        let (hz1, hz2) = (self.hz[i], self.hz[i + 1]);
        let (tau1, tau2) = (self.tau[i], self.tau[i + 1]);
        if hz == hz2 {
            return Ok(tau2);
        }
        Ok(tau1 + (hz - hz1) * (tau2 - tau1) / (hz2 - hz1))
    }
}
