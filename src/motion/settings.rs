//! Motion settings: sample rate, peak velocity and per-phase parameterization.

use libm::round;
use serde::{Deserialize, Serialize};

use crate::error::{bounded, ConfigError, Error, Result};

use super::Phase;

/// How an accelerate or decelerate phase is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RampMode {
    /// `value` is the phase duration in seconds.
    #[default]
    Time,
    /// `value` is the distance covered in meters.
    Distance,
    /// `value` is the peak acceleration in m/s^2.
    Acceleration,
}

/// How the constant-velocity phase is specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CruiseMode {
    /// `value` is the phase duration in seconds.
    #[default]
    Time,
    /// `value` is the distance covered in meters.
    Distance,
}

impl RampMode {
    /// Parse a mode tag for a ramp phase.
    pub fn parse(tag: &str, phase: Phase) -> core::result::Result<Self, ConfigError> {
        match tag {
            "time" => Ok(RampMode::Time),
            "distance" => Ok(RampMode::Distance),
            "acceleration" => Ok(RampMode::Acceleration),
            _ => Err(ConfigError::InvalidMode {
                phase,
                mode: bounded(tag),
            }),
        }
    }

    /// Phase duration in seconds for a ramp to `v_peak`.
    ///
    /// Distance assumes the ramp covers half the rectangle `v_peak * t`.
    pub fn duration(self, value: f64, v_peak: f64) -> f64 {
        match self {
            RampMode::Time => value,
            RampMode::Distance => 2.0 * value / v_peak,
            RampMode::Acceleration => v_peak / value,
        }
    }
}

impl CruiseMode {
    /// Parse a mode tag for the constant-velocity phase.
    pub fn parse(tag: &str) -> core::result::Result<Self, ConfigError> {
        match tag {
            "time" => Ok(CruiseMode::Time),
            "distance" => Ok(CruiseMode::Distance),
            _ => Err(ConfigError::InvalidMode {
                phase: Phase::Constant,
                mode: bounded(tag),
            }),
        }
    }

    /// Phase duration in seconds at constant `v_peak`.
    pub fn duration(self, value: f64, v_peak: f64) -> f64 {
        match self {
            CruiseMode::Time => value,
            CruiseMode::Distance => value / v_peak,
        }
    }
}

/// Settings for a three-phase linear move.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionSettings {
    /// Sampling frequency in Hz.
    #[serde(default = "default_fs")]
    pub fs: f64,

    /// Signed peak velocity in m/s.
    #[serde(default = "default_one")]
    pub max_velocity: f64,

    /// Accelerate phase mode.
    #[serde(default)]
    pub acc_mode: RampMode,

    /// Accelerate phase value, unit per `acc_mode`.
    #[serde(default = "default_one")]
    pub acc_value: f64,

    /// Bell-shaped (true) or linear (false) acceleration ramp.
    #[serde(default = "default_smooth")]
    pub acc_smooth: bool,

    /// Constant phase mode.
    #[serde(default)]
    pub con_mode: CruiseMode,

    /// Constant phase value, unit per `con_mode`.
    #[serde(default = "default_one")]
    pub con_value: f64,

    /// Decelerate phase mode.
    #[serde(default)]
    pub dec_mode: RampMode,

    /// Decelerate phase value, unit per `dec_mode`.
    #[serde(default = "default_one")]
    pub dec_value: f64,

    /// Bell-shaped (true) or linear (false) deceleration ramp.
    #[serde(default = "default_smooth")]
    pub dec_smooth: bool,
}

fn default_fs() -> f64 {
    1000.0
}

fn default_one() -> f64 {
    1.0
}

fn default_smooth() -> bool {
    true
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            fs: default_fs(),
            max_velocity: default_one(),
            acc_mode: RampMode::Time,
            acc_value: default_one(),
            acc_smooth: default_smooth(),
            con_mode: CruiseMode::Time,
            con_value: default_one(),
            dec_mode: RampMode::Time,
            dec_value: default_one(),
            dec_smooth: default_smooth(),
        }
    }
}

impl MotionSettings {
    /// Set a phase's mode from a string tag and its value.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidMode` if the tag is not valid for the phase.
    pub fn with_mode(mut self, phase: Phase, tag: &str, value: f64) -> Result<Self> {
        match phase {
            Phase::Accelerate => {
                self.acc_mode = RampMode::parse(tag, phase)?;
                self.acc_value = value;
            }
            Phase::Constant => {
                self.con_mode = CruiseMode::parse(tag)?;
                self.con_value = value;
            }
            Phase::Decelerate => {
                self.dec_mode = RampMode::parse(tag, phase)?;
                self.dec_value = value;
            }
        }
        Ok(self)
    }

    /// Check the sample rate, peak velocity and every derived phase duration.
    pub fn validate(&self) -> Result<()> {
        if !(self.fs.is_finite() && self.fs > 0.0) {
            return Err(Error::Config(ConfigError::InvalidSampleRate(self.fs)));
        }
        if !self.max_velocity.is_finite() {
            return Err(Error::Config(ConfigError::InvalidVelocity(self.max_velocity)));
        }
        for phase in Phase::ALL {
            self.phase_duration(phase)?;
        }
        Ok(())
    }

    /// Requested duration of a phase in seconds.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPhaseDuration` if the derived duration is
    /// negative or not finite (e.g. a distance mode with zero peak velocity).
    pub fn phase_duration(&self, phase: Phase) -> Result<f64> {
        let v = self.max_velocity;
        let seconds = match phase {
            Phase::Accelerate => self.acc_mode.duration(self.acc_value, v),
            Phase::Constant => self.con_mode.duration(self.con_value, v),
            Phase::Decelerate => self.dec_mode.duration(self.dec_value, v),
        };
        if seconds.is_finite() && seconds >= 0.0 {
            Ok(seconds)
        } else {
            Err(Error::Config(ConfigError::InvalidPhaseDuration { phase, seconds }))
        }
    }

    /// Number of samples in a phase: `round(duration * fs)`.
    pub fn phase_samples(&self, phase: Phase) -> Result<usize> {
        Ok(round(self.phase_duration(phase)? * self.fs) as usize)
    }

    /// Smoothing flag of a ramp phase; the constant phase is never smoothed.
    pub fn smooth(&self, phase: Phase) -> bool {
        match phase {
            Phase::Accelerate => self.acc_smooth,
            Phase::Constant => false,
            Phase::Decelerate => self.dec_smooth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ramp_durations() {
        assert_eq!(RampMode::Time.duration(0.5, 2.0), 0.5);
        assert_eq!(RampMode::Distance.duration(1.0, 2.0), 1.0);
        assert_eq!(RampMode::Acceleration.duration(4.0, 2.0), 0.5);
    }

    #[test]
    fn test_cruise_distance_is_rectangular() {
        assert_eq!(CruiseMode::Distance.duration(3.0, 2.0), 1.5);
    }

    #[test]
    fn test_constant_rejects_acceleration_tag() {
        let result = MotionSettings::default().with_mode(Phase::Constant, "acceleration", 1.0);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidMode {
                phase: Phase::Constant,
                ..
            }))
        ));
    }

    #[test]
    fn test_unknown_tag_rejected() {
        let result = MotionSettings::default().with_mode(Phase::Accelerate, "X", 1.0);
        assert!(matches!(
            result,
            Err(Error::Config(ConfigError::InvalidMode { .. }))
        ));
    }

    #[test]
    fn test_with_mode_sets_value() {
        let settings = MotionSettings::default()
            .with_mode(Phase::Decelerate, "acceleration", 4.0)
            .unwrap();
        assert_eq!(settings.dec_mode, RampMode::Acceleration);
        assert_eq!(settings.dec_value, 4.0);
    }

    #[test]
    fn test_zero_sample_rate_invalid() {
        let settings = MotionSettings {
            fs: 0.0,
            ..MotionSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::Config(ConfigError::InvalidSampleRate(_)))
        ));
    }

    #[test]
    fn test_distance_with_zero_velocity_invalid() {
        let settings = MotionSettings {
            max_velocity: 0.0,
            con_mode: CruiseMode::Distance,
            ..MotionSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(Error::Config(ConfigError::InvalidPhaseDuration {
                phase: Phase::Constant,
                ..
            }))
        ));
    }

    #[test]
    fn test_phase_samples_rounds() {
        let settings = MotionSettings {
            fs: 1000.0,
            acc_value: 0.0126,
            ..MotionSettings::default()
        };
        assert_eq!(settings.phase_samples(Phase::Accelerate).unwrap(), 13);
    }
}
