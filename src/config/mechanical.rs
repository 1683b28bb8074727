//! Mechanical drivetrain configuration from TOML.

use serde::{Deserialize, Serialize};

use crate::drivetrain::{Coupler, Direct, DrivetrainElement, Gear, Screw, Wheel};
use crate::error::Result;

/// Shaft coupler between motor and gear.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CouplerConfig {
    /// Moment of inertia in kg*m^2.
    #[serde(default)]
    pub j: f64,

    /// Input bore diameter in m (informational).
    #[serde(default)]
    pub d_in: Option<f64>,

    /// Output bore diameter in m (informational).
    #[serde(default)]
    pub d_out: Option<f64>,
}

impl CouplerConfig {
    /// Validate and build the coupler.
    pub fn build(&self) -> Result<Coupler> {
        Coupler::new(self.j)?.with_bores(self.d_in, self.d_out)
    }
}

/// Gear stage; absent means a 1:1 stage with no inertia.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GearConfig {
    /// Input speed over output speed (e.g., 5.0 means 5:1 reduction).
    #[serde(default = "default_gear_ratio")]
    pub ratio: f64,

    /// Input-side moment of inertia in kg*m^2.
    #[serde(default)]
    pub j_in: f64,

    /// Output-side moment of inertia in kg*m^2.
    #[serde(default)]
    pub j_out: f64,
}

fn default_gear_ratio() -> f64 {
    1.0
}

impl Default for GearConfig {
    fn default() -> Self {
        Self {
            ratio: default_gear_ratio(),
            j_in: 0.0,
            j_out: 0.0,
        }
    }
}

impl GearConfig {
    /// Validate and build the gear stage.
    pub fn build(&self) -> Result<Gear> {
        Gear::new(self.ratio, self.j_in, self.j_out)
    }
}

/// Output stage converting load travel into rotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum OutputStageConfig {
    /// Rotary pass-through; the profile is in revolutions.
    Direct {
        /// Moment of inertia in kg*m^2.
        #[serde(default)]
        j: f64,
    },
    /// Wheel or pulley.
    Wheel {
        /// Diameter in m.
        diameter: f64,
        /// Moment of inertia in kg*m^2.
        #[serde(default)]
        j: f64,
    },
    /// Lead screw, given by exactly one of pitch or lead.
    Screw {
        /// Revolutions per meter.
        #[serde(default)]
        pitch: Option<f64>,
        /// Meters per revolution.
        #[serde(default)]
        lead: Option<f64>,
        /// Moment of inertia in kg*m^2.
        #[serde(default)]
        j: f64,
    },
}

impl OutputStageConfig {
    /// Validate and build the output stage.
    pub fn build(&self) -> Result<DrivetrainElement> {
        Ok(match *self {
            OutputStageConfig::Direct { j } => Direct::new(j)?.into(),
            OutputStageConfig::Wheel { diameter, j } => Wheel::new(diameter, j)?.into(),
            OutputStageConfig::Screw { pitch, lead, j } => Screw::new(pitch, lead, j)?.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivetrain::ElementKind;

    #[test]
    fn test_screw_stage_from_lead() {
        let stage = OutputStageConfig::Screw {
            pitch: None,
            lead: Some(0.005),
            j: 0.0,
        };
        let element = stage.build().unwrap();
        assert_eq!(element.kind(), ElementKind::Screw);
        assert_eq!(element.lead(), Some(0.005));
    }

    #[test]
    fn test_screw_stage_needs_geometry() {
        let stage = OutputStageConfig::Screw {
            pitch: None,
            lead: None,
            j: 0.0,
        };
        assert!(stage.build().is_err());
    }

    #[test]
    fn test_default_gear_is_unity() {
        let gear = GearConfig::default().build().unwrap();
        assert_eq!(gear.ratio(), 1.0);
    }
}
