//! Torque stage: required motor torque through the drivetrain.
//!
//! Consumes a [`LinearForce`], converts the load's linear kinematics into
//! motor shaft revolutions, and splits the required torque into the part
//! spent accelerating rotating inertia and the part transmitting force to
//! the load. The motor's available torque is sampled alongside for
//! comparison; insufficiency is reported, never raised.

use alloc::vec::Vec;

use libm::fabs;
use serde::{Deserialize, Serialize};

use crate::drivetrain::{Drivetrain, ElementKind};
use crate::error::Result;
use crate::force::{ForceProfile, LinearForce};
use crate::motor::Motor;
use crate::table::{Column, Table};
use crate::units::TWO_PI;

/// Force-stage parameters carried into the torque stage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorqueSettings {
    /// Multiplicative margin applied to the rotating-inertia torque.
    pub safety_factor: f64,
    /// Moving mass in kg, reflected through the output stage.
    pub moving_mass: f64,
}

/// Inertia budget and scale constants of a torque computation.
///
/// All inertias in kg*m^2; "reflected" values are seen from the motor shaft.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TorqueStats {
    /// Output stage kind.
    pub drivetrain_type: ElementKind,
    /// Gear ratio (input speed over output speed).
    pub gear_ratio: f64,
    /// Rotor inertia.
    pub j_motor: f64,
    /// Coupler inertia.
    pub j_coupler: f64,
    /// Gear input-side inertia.
    pub j_gear_in: f64,
    /// Gear output-side inertia.
    pub j_gear_out: f64,
    /// Output stage inertia.
    pub j_drivetrain: f64,
    /// Moving mass reflected to the output stage shaft.
    pub j_linear: f64,
    /// Inertia on the gear input side.
    pub j_in: f64,
    /// Inertia on the gear output side, including the moving mass.
    pub j_out: f64,
    /// Total load inertia reflected to the motor shaft.
    pub j_load: f64,
    /// Load-to-rotor inertia ratio (informational). Infinite for a
    /// zero-inertia rotor.
    pub j_ratio: f64,
    /// Rotating inertia reflected to the motor shaft, rotor included.
    pub j_rotating: f64,
    /// N*m per Hz/s of motor acceleration.
    pub tau_rotating_scale: f64,
    /// N*m of motor torque per N of load force.
    pub tau_linear_scale: f64,
    /// Motor revolutions per meter of load travel.
    pub xva_scale: f64,
}

impl TorqueStats {
    fn derive(settings: &TorqueSettings, motor: &Motor, drivetrain: &Drivetrain) -> Self {
        let gear = drivetrain.gear();
        let ratio = gear.ratio();
        let ratio_sq = ratio * ratio;
        let j_coupler = drivetrain.coupler().j();
        let j_drivetrain = drivetrain.output().j();

        let radius = 1.0 / (TWO_PI * drivetrain.pitch());
        let j_linear = settings.moving_mass * radius * radius;
        let j_in = j_coupler + gear.j_in();
        let j_out = gear.j_out() + j_drivetrain + j_linear;
        let j_load = j_in + j_out / ratio_sq;
        let j_rotating = motor.j() + j_in + (gear.j_out() + j_drivetrain) / ratio_sq;

        Self {
            drivetrain_type: drivetrain.output().kind(),
            gear_ratio: ratio,
            j_motor: motor.j(),
            j_coupler,
            j_gear_in: gear.j_in(),
            j_gear_out: gear.j_out(),
            j_drivetrain,
            j_linear,
            j_in,
            j_out,
            j_load,
            j_ratio: if motor.j() > 0.0 {
                j_load / motor.j()
            } else {
                f64::INFINITY
            },
            j_rotating,
            tau_rotating_scale: TWO_PI * j_rotating * settings.safety_factor,
            tau_linear_scale: drivetrain.lead() / (TWO_PI * ratio),
            xva_scale: drivetrain.revs_per_meter(),
        }
    }
}

/// Force table extended with motor-shaft kinematics and torques.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TorqueProfile {
    force: ForceProfile,
    revs: Vec<f64>,
    hz: Vec<f64>,
    hzps: Vec<f64>,
    tau_rotating: Vec<f64>,
    tau_linear: Vec<f64>,
    tau: Vec<f64>,
    tau_motor: Vec<f64>,
}

impl TorqueProfile {
    /// The force columns this table extends.
    pub fn force(&self) -> &ForceProfile {
        &self.force
    }

    /// Motor shaft position in revolutions.
    pub fn revs(&self) -> &[f64] {
        &self.revs
    }

    /// Motor shaft speed in Hz.
    pub fn hz(&self) -> &[f64] {
        &self.hz
    }

    /// Motor shaft acceleration in Hz/s.
    pub fn hzps(&self) -> &[f64] {
        &self.hzps
    }

    /// Torque to accelerate rotating inertia in N*m.
    pub fn tau_rotating(&self) -> &[f64] {
        &self.tau_rotating
    }

    /// Torque to transmit the load force in N*m.
    pub fn tau_linear(&self) -> &[f64] {
        &self.tau_linear
    }

    /// Total required torque in N*m.
    pub fn tau(&self) -> &[f64] {
        &self.tau
    }

    /// Available motor torque at each sample's speed in N*m.
    pub fn tau_motor(&self) -> &[f64] {
        &self.tau_motor
    }

    /// Headroom `tau_motor - |tau|` per sample in N*m.
    pub fn margins(&self) -> impl Iterator<Item = f64> + '_ {
        self.tau_motor
            .iter()
            .zip(&self.tau)
            .map(|(&available, &required)| available - fabs(required))
    }

    /// Sample index and value of the smallest headroom.
    pub fn worst_margin(&self) -> Option<(usize, f64)> {
        self.margins()
            .enumerate()
            .fold(None, |worst, (i, m)| match worst {
                Some((_, w)) if w <= m => worst,
                _ => Some((i, m)),
            })
    }

    /// Check if the motor covers the required torque at every sample.
    pub fn is_sufficient(&self) -> bool {
        self.margins().all(|m| m >= 0.0)
    }
}

impl Table for TorqueProfile {
    fn len(&self) -> usize {
        self.tau.len()
    }

    fn columns(&self) -> Vec<Column<'_>> {
        let mut columns = self.force.columns();
        columns.extend([
            ("revs", &self.revs[..]),
            ("hz", &self.hz[..]),
            ("hzps", &self.hzps[..]),
            ("tau_rotating", &self.tau_rotating[..]),
            ("tau_linear", &self.tau_linear[..]),
            ("tau", &self.tau[..]),
            ("tau_motor", &self.tau_motor[..]),
        ]);
        columns
    }
}

/// A torque requirement: carried settings, inertia stats and the table.
#[derive(Debug, Clone, PartialEq)]
pub struct AngularTorque {
    settings: TorqueSettings,
    stats: TorqueStats,
    profile: TorqueProfile,
}

impl AngularTorque {
    /// Take ownership of a force table and compute the required torque.
    ///
    /// The motor curve is sampled at each sample's speed magnitude `|hz|`,
    /// not at the signed speed. A reverse move is checked against the same
    /// curve as a forward one instead of failing below `hz_min`.
    ///
    /// # Errors
    ///
    /// Returns `RangeError::SpeedOutOfRange` if the move's shaft speed leaves
    /// the motor curve.
    pub fn new(force: LinearForce, motor: &Motor, drivetrain: &Drivetrain) -> Result<Self> {
        let (force_settings, _, force) = force.into_parts();
        let settings = TorqueSettings {
            safety_factor: force_settings.safety_factor,
            moving_mass: force_settings.moving_mass,
        };

        let stats = TorqueStats::derive(&settings, motor, drivetrain);
        trace!(
            "torque scales: rotating={} linear={} xva={} j_ratio={}",
            stats.tau_rotating_scale,
            stats.tau_linear_scale,
            stats.xva_scale,
            stats.j_ratio
        );

        let motion = force.motion();
        let scale = |column: &[f64], k: f64| -> Vec<f64> { column.iter().map(|&c| c * k).collect() };

        let revs = scale(motion.x(), stats.xva_scale);
        let hz = scale(motion.v(), stats.xva_scale);
        let hzps = scale(motion.a(), stats.xva_scale);
        let tau_rotating = scale(&hzps, stats.tau_rotating_scale);
        let tau_linear = scale(force.f(), stats.tau_linear_scale);
        let tau = tau_rotating
            .iter()
            .zip(&tau_linear)
            .map(|(r, l)| r + l)
            .collect();
        let tau_motor = hz
            .iter()
            .map(|&w| motor.tau(fabs(w)))
            .collect::<Result<Vec<f64>>>()?;

        let profile = TorqueProfile {
            force,
            revs,
            hz,
            hzps,
            tau_rotating,
            tau_linear,
            tau,
            tau_motor,
        };

        match profile.worst_margin() {
            Some((i, m)) if m < 0.0 => warn!(
                "required torque exceeds motor capability at sample {} by {} N*m",
                i,
                -m
            ),
            _ => debug!("torque profile generated: {} samples", profile.len()),
        }

        Ok(Self {
            settings,
            stats,
            profile,
        })
    }

    /// Reassemble a torque stage from previously produced parts.
    pub fn from_parts(settings: TorqueSettings, stats: TorqueStats, profile: TorqueProfile) -> Self {
        Self {
            settings,
            stats,
            profile,
        }
    }

    /// Split into settings, stats and table.
    pub fn into_parts(self) -> (TorqueSettings, TorqueStats, TorqueProfile) {
        (self.settings, self.stats, self.profile)
    }

    /// Parameters carried from the force stage.
    pub fn settings(&self) -> &TorqueSettings {
        &self.settings
    }

    /// Inertia budget and scale constants.
    pub fn stats(&self) -> &TorqueStats {
        &self.stats
    }

    /// The torque table.
    pub fn profile(&self) -> &TorqueProfile {
        &self.profile
    }
}
