//! Configuration module for drive-sizer.
//!
//! Provides the TOML-facing description of a sizing run: motion settings,
//! load, motor and drivetrain. Loading from files needs the `std` feature;
//! pre-parsed data can be validated anywhere.

mod mechanical;
mod motor;
mod system;
#[cfg(feature = "std")]
mod loader;
mod validation;

pub use mechanical::{CouplerConfig, GearConfig, OutputStageConfig};
pub use motor::MotorConfig;
pub use system::SizingConfig;
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};
