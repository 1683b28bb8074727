//! Configuration validation.

use crate::error::Result;

use super::SizingConfig;

/// Validate a sizing configuration.
///
/// Checks:
/// - Sample rate, peak velocity and derived phase durations
/// - Force settings (mass, efficiency, gravity, friction)
/// - Motor curve shape and inertia
/// - Coupler, gear and output stage geometry
pub fn validate_config(config: &SizingConfig) -> Result<()> {
    config.motion.validate()?;
    config.force.validate()?;
    config.motor()?;
    config.drivetrain()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CouplerConfig, GearConfig, OutputStageConfig};
    use crate::error::{ConfigError, Error};
    use crate::force::ForceSettings;
    use crate::motion::MotionSettings;

    fn config() -> SizingConfig {
        SizingConfig {
            motion: MotionSettings::default(),
            force: ForceSettings::new(1.0),
            motor: None,
            coupler: CouplerConfig::default(),
            gear: GearConfig::default(),
            drivetrain: OutputStageConfig::Direct { j: 0.0 },
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&config()).is_ok());
    }

    #[test]
    fn test_invalid_gear_ratio() {
        let mut config = config();
        config.gear.ratio = -1.0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidGearRatio(_)))
        ));
    }

    #[test]
    fn test_invalid_sample_rate() {
        let mut config = config();
        config.motion.fs = 0.0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidSampleRate(_)))
        ));
    }

    #[test]
    fn test_invalid_efficiency() {
        let mut config = config();
        config.force.efficiency = 0.0;
        assert!(matches!(
            validate_config(&config),
            Err(Error::Config(ConfigError::InvalidEfficiency(_)))
        ));
    }
}
