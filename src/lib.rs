//! # drive-sizer
//!
//! Motion-profile driven sizing of electric motors and drivetrains.
//!
//! A move is described by three phases (accelerate, cruise, decelerate). The
//! pipeline synthesizes the sampled kinematics, derives the force the load
//! needs, reflects it through a coupler, gear and output stage to the motor
//! shaft, and compares the required torque against the motor's torque-speed
//! curve.
//!
//! ## Features
//!
//! - **Configuration-driven**: Describe the move, load, motor and drivetrain in TOML
//! - **Staged pipeline**: `LinearMotion` -> `LinearForce` -> `AngularTorque`, each
//!   consuming the previous stage and carrying settings, stats and a table
//! - **no_std compatible**: The numeric core only needs an allocator
//! - **Snapshots**: Any stage encodes to bytes and back with `postcard`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use drive_sizer::{load_config, size_drive};
//!
//! let config = load_config("axis.toml")?;
//! let torque = size_drive(&config)?;
//!
//! if let Some((index, margin)) = torque.profile().worst_margin() {
//!     println!("worst margin {margin} N*m at sample {index}");
//! }
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and `std::error::Error`
//! - `defmt`: Routes logging to defmt instead of the `log` facade

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]
// Allow large error types - necessary for no_std with heapless strings
#![allow(clippy::result_large_err)]

extern crate alloc;

// Must come first so the logging macros are visible to every module.
#[macro_use]
mod fmt;

// Core modules
pub mod config;
pub mod drivetrain;
pub mod error;
pub mod force;
pub mod motion;
pub mod motor;
pub mod signal;
pub mod sizing;
pub mod snapshot;
pub mod table;
pub mod torque;
pub mod units;

// Re-exports for ergonomic API
pub use config::{validate_config, SizingConfig};
pub use drivetrain::{Coupler, Direct, Drivetrain, DrivetrainElement, Gear, Screw, Wheel};
pub use error::{Error, Result};
pub use force::{ForceSettings, LinearForce};
pub use motion::{CruiseMode, LinearMotion, MotionSettings, Phase, RampMode};
pub use motor::{Motor, MotorCurve};
pub use sizing::size_drive;
pub use snapshot::Stage;
pub use table::Table;
pub use torque::AngularTorque;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::{load_config, parse_config};
