//! Configuration loading from files (std only).

use std::fs;
use std::path::Path;

use crate::error::{bounded, ConfigError, Error, Result};

use super::SizingConfig;

/// Load configuration from a TOML file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```rust,ignore
/// use drive_sizer::load_config;
///
/// let config = load_config("axis.toml")?;
/// ```
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<SizingConfig> {
    let content = fs::read_to_string(path.as_ref())
        .map_err(|e| Error::Config(ConfigError::IoError(bounded(&e.to_string()))))?;

    parse_config(&content)
}

/// Parse configuration from a TOML string.
///
/// # Errors
///
/// Returns an error if the TOML is invalid or fails validation.
pub fn parse_config(content: &str) -> Result<SizingConfig> {
    let config: SizingConfig = toml::from_str(content)
        .map_err(|e| Error::Config(ConfigError::ParseError(bounded(e.message()))))?;

    // Validate the configuration
    super::validation::validate_config(&config)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputStageConfig;
    use crate::motion::RampMode;

    #[test]
    fn test_parse_minimal_config() {
        let toml = r#"
[force]
moving_mass = 2.0

[drivetrain]
type = "direct"
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.motion.fs, 1000.0);
        assert_eq!(config.force.moving_mass, 2.0);
        assert_eq!(config.force.efficiency, 1.0);
        assert!(config.motor.is_none());
        assert_eq!(config.gear.ratio, 1.0);
        assert_eq!(config.drivetrain, OutputStageConfig::Direct { j: 0.0 });
    }

    #[test]
    fn test_parse_screw_axis() {
        let toml = r#"
[motion]
fs = 500.0
max_velocity = 0.0381
acc_mode = "distance"
acc_value = 0.00127
dec_mode = "acceleration"
dec_value = 0.5

[force]
safety_factor = 2.0
moving_mass = 10.0
efficiency = 0.9

[gear]
ratio = 5.0

[drivetrain]
type = "screw"
lead = 0.00127
"#;

        let config = parse_config(toml).unwrap();
        assert_eq!(config.motion.acc_mode, RampMode::Distance);
        assert_eq!(config.motion.dec_mode, RampMode::Acceleration);
        let drivetrain = config.drivetrain().unwrap();
        assert_eq!(drivetrain.lead(), 0.00127);
        assert_eq!(drivetrain.gear().ratio(), 5.0);
    }

    #[test]
    fn test_parse_custom_motor() {
        let toml = r#"
[force]
moving_mass = 1.0

[motor]
name = "Bench"
j = 1.0e-5
d_out = 0.005
curve_hz = [0.0, 10.0, 20.0]
curve_tau = [1.0, 0.8, 0.4]

[drivetrain]
type = "wheel"
diameter = 0.05
"#;

        let config = parse_config(toml).unwrap();
        let motor = config.motor().unwrap();
        assert_eq!(motor.name(), "Bench");
        assert_eq!(motor.curve().hz_max(), 20.0);
    }

    #[test]
    fn test_parse_rejects_unknown_field() {
        let toml = r#"
[motion]
sample_rate = 1000.0

[force]
moving_mass = 1.0

[drivetrain]
type = "direct"
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_parse_rejects_unknown_drivetrain_field() {
        let toml = r#"
[force]
moving_mass = 1.0

[drivetrain]
type = "screw"
lead = 0.005
inertia = 0.5
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_parse_rejects_screw_with_both() {
        let toml = r#"
[force]
moving_mass = 1.0

[drivetrain]
type = "screw"
pitch = 200.0
lead = 0.005
"#;

        assert!(matches!(
            parse_config(toml),
            Err(Error::Config(ConfigError::ScrewGeometry(_)))
        ));
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            load_config("/nonexistent/axis.toml"),
            Err(Error::Config(ConfigError::IoError(_)))
        ));
    }
}
