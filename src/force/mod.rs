//! Force stage: required actuation force along the axis of motion.
//!
//! Consumes a [`LinearMotion`] and maps its acceleration column through the
//! affine law `f = a * scale + offset`.

mod settings;

use alloc::vec::Vec;

use libm::{cos, sin};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::motion::{LinearMotion, MotionProfile};
use crate::table::{Column, Table};

pub use settings::{ForceSettings, STANDARD_GRAVITY};

/// Constant force contributions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ForceStats {
    /// Gravity component along the incline in N.
    pub f_incline: f64,
    /// Friction force in N.
    pub f_friction: f64,
    /// Preload + incline + friction in N, before margin.
    pub f_constant: f64,
}

/// Motion table extended with required force.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForceProfile {
    motion: MotionProfile,
    f: Vec<f64>,
}

impl ForceProfile {
    /// The motion columns this table extends.
    pub fn motion(&self) -> &MotionProfile {
        &self.motion
    }

    /// Required force column in N.
    pub fn f(&self) -> &[f64] {
        &self.f
    }
}

impl Table for ForceProfile {
    fn len(&self) -> usize {
        self.f.len()
    }

    fn columns(&self) -> Vec<Column<'_>> {
        let mut columns = self.motion.columns();
        columns.push(("f", &self.f[..]));
        columns
    }
}

/// Affine force law derived once from the settings.
#[derive(Debug, Clone, Copy)]
struct ForceLaw {
    scale: f64,
    offset: f64,
}

impl ForceLaw {
    fn derive(settings: &ForceSettings) -> (Self, ForceStats) {
        let incline = settings.incline_angle.to_radians();
        let weight = settings.moving_mass * settings.gravity;

        let f_incline = weight * sin(incline);
        let f_friction = settings.friction_coef * weight * cos(incline);
        let f_constant = settings.preload_force + f_incline + f_friction;

        let margin = settings.margin();
        let law = Self {
            scale: margin * settings.moving_mass,
            offset: margin * f_constant,
        };
        let stats = ForceStats {
            f_incline,
            f_friction,
            f_constant,
        };
        (law, stats)
    }

    #[inline]
    fn apply(&self, a: f64) -> f64 {
        a * self.scale + self.offset
    }
}

/// A force requirement: settings, constant-force stats and the table.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearForce {
    settings: ForceSettings,
    stats: ForceStats,
    profile: ForceProfile,
}

impl LinearForce {
    /// Take ownership of a motion's table and compute the required force.
    ///
    /// The motion is consumed; its table moves into the force table.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the settings are out of domain.
    pub fn new(settings: ForceSettings, motion: LinearMotion) -> Result<Self> {
        settings.validate()?;

        let (law, stats) = ForceLaw::derive(&settings);
        trace!("force law: scale={} offset={}", law.scale, law.offset);

        let (_, _, motion) = motion.into_parts();
        let f = motion.a().iter().map(|&a| law.apply(a)).collect();
        let profile = ForceProfile { motion, f };

        debug!("force profile generated: {} samples", profile.len());

        Ok(Self {
            settings,
            stats,
            profile,
        })
    }

    /// Reassemble a force stage from previously produced parts.
    pub fn from_parts(settings: ForceSettings, stats: ForceStats, profile: ForceProfile) -> Self {
        Self {
            settings,
            stats,
            profile,
        }
    }

    /// Split into settings, stats and table, handing the table on.
    pub fn into_parts(self) -> (ForceSettings, ForceStats, ForceProfile) {
        (self.settings, self.stats, self.profile)
    }

    /// Force settings.
    pub fn settings(&self) -> &ForceSettings {
        &self.settings
    }

    /// Constant-force stats.
    pub fn stats(&self) -> &ForceStats {
        &self.stats
    }

    /// The force table.
    pub fn profile(&self) -> &ForceProfile {
        &self.profile
    }

    /// Largest force magnitude in N.
    pub fn peak_force(&self) -> f64 {
        self.profile
            .f
            .iter()
            .fold(0.0, |peak: f64, &f| peak.max(libm::fabs(f)))
    }
}
