//! End-to-end sizing run.

use crate::config::{validate_config, SizingConfig};
use crate::error::Result;
use crate::force::LinearForce;
use crate::motion::LinearMotion;
use crate::table::Table;
use crate::torque::AngularTorque;

/// Run motion, force and torque stages for a configured axis.
///
/// The motion and force settings are cloned out of `config`; the motor and
/// drivetrain are built from it once.
///
/// # Errors
///
/// Returns the first configuration error found, or
/// `RangeError::SpeedOutOfRange` if the move outruns the motor curve.
pub fn size_drive(config: &SizingConfig) -> Result<AngularTorque> {
    validate_config(config)?;
    let motor = config.motor()?;
    let drivetrain = config.drivetrain()?;

    let motion = LinearMotion::new(config.motion.clone())?;
    let force = LinearForce::new(config.force.clone(), motion)?;
    let torque = AngularTorque::new(force, &motor, &drivetrain)?;

    let profile = torque.profile();
    match profile.worst_margin() {
        Some((index, margin)) => info!(
            "sized {} drive: {} samples, j_ratio {}, worst margin {} N*m at sample {}",
            drivetrain.output().kind().as_str(),
            profile.len(),
            torque.stats().j_ratio,
            margin,
            index
        ),
        None => info!(
            "sized {} drive: empty move",
            drivetrain.output().kind().as_str()
        ),
    }

    Ok(torque)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CouplerConfig, GearConfig, OutputStageConfig};
    use crate::error::{Error, RangeError};
    use crate::force::ForceSettings;
    use crate::motion::MotionSettings;

    fn config(max_velocity: f64) -> SizingConfig {
        SizingConfig {
            motion: MotionSettings {
                fs: 100.0,
                max_velocity,
                ..MotionSettings::default()
            },
            force: ForceSettings::new(2.0),
            motor: None,
            coupler: CouplerConfig::default(),
            gear: GearConfig::default(),
            drivetrain: OutputStageConfig::Screw {
                pitch: None,
                lead: Some(0.005),
                j: 0.0,
            },
        }
    }

    #[test]
    fn test_size_screw_axis() {
        let torque = size_drive(&config(0.02)).unwrap();
        assert_eq!(torque.profile().len(), 300);
        assert!(torque.profile().is_sufficient());
    }

    #[test]
    fn test_size_too_fast() {
        // 1 m/s through a 5 mm lead is 200 rev/s, far past the curve.
        assert!(matches!(
            size_drive(&config(1.0)),
            Err(Error::Range(RangeError::SpeedOutOfRange { .. }))
        ));
    }
}
