//! Error types for drive-sizer.
//!
//! Every error is a permanent configuration or usage fault: the pipeline does
//! no I/O in its core, so nothing is ever retried.

use core::fmt;

use crate::motion::Phase;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all drive-sizer operations.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration parsing or validation error
    Config(ConfigError),
    /// Query outside the domain of a model
    Range(RangeError),
    /// Stage snapshot encode/decode error
    Snapshot(SnapshotError),
}

/// Construction-time errors, raised before any numeric work begins.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// Sampling frequency must be finite and > 0
    InvalidSampleRate(f64),
    /// Peak velocity must be finite
    InvalidVelocity(f64),
    /// Unrecognized mode tag for a phase
    InvalidMode {
        /// Phase the tag was supplied for
        phase: Phase,
        /// The rejected tag
        mode: heapless::String<32>,
    },
    /// Derived phase duration is negative or not finite
    InvalidPhaseDuration {
        /// Offending phase
        phase: Phase,
        /// Derived duration in seconds
        seconds: f64,
    },
    /// Moment of inertia must be >= 0
    NegativeInertia(f64),
    /// Diameter must be > 0
    InvalidDiameter(f64),
    /// Gear ratio must be > 0
    InvalidGearRatio(f64),
    /// Screw needs exactly one positive pitch or lead
    ScrewGeometry(ScrewGeometryFault),
    /// Element cannot convert linear travel into rotation
    NotAFinalStage(&'static str),
    /// Motor curve needs at least two breakpoints
    CurveTooShort(usize),
    /// Motor curve exceeds the breakpoint capacity
    TooManyBreakpoints(usize),
    /// Speed and torque sequences differ in length
    CurveLengthMismatch {
        /// Number of speed breakpoints
        speeds: usize,
        /// Number of torque breakpoints
        torques: usize,
    },
    /// Speed breakpoints must be strictly ascending
    CurveNotAscending {
        /// Index of the first breakpoint not above its predecessor
        index: usize,
    },
    /// Speed and torque breakpoints must be >= 0
    NegativeCurveValue {
        /// Index of the offending breakpoint
        index: usize,
    },
    /// Mechanical efficiency must be in (0, 1]
    InvalidEfficiency(f64),
    /// Gravitational acceleration must be > 0
    InvalidGravity(f64),
    /// Moving mass must be >= 0
    NegativeMass(f64),
    /// Safety factor must be >= 0
    NegativeSafetyFactor(f64),
    /// Friction coefficient must be >= 0
    NegativeFriction(f64),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// What is wrong with a screw's pitch/lead pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrewGeometryFault {
    /// Both pitch and lead were given
    Both,
    /// Neither pitch nor lead was given
    Neither,
    /// The given value is not a positive finite number
    NonPositive,
}

/// Query-time range errors.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeError {
    /// Speed outside the motor curve's breakpoint span
    SpeedOutOfRange {
        /// Requested speed in Hz
        hz: f64,
        /// Lowest curve speed in Hz
        min: f64,
        /// Highest curve speed in Hz
        max: f64,
    },
}

/// Snapshot persistence errors.
#[derive(Debug, Clone, PartialEq)]
pub enum SnapshotError {
    /// Stage could not be encoded
    Encode(heapless::String<64>),
    /// Bytes do not decode to the requested stage
    Decode(heapless::String<64>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Range(e) => write!(f, "Range error: {}", e),
            Error::Snapshot(e) => write!(f, "Snapshot error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            ConfigError::InvalidSampleRate(v) => {
                write!(f, "Invalid sampling frequency: {} Hz. Must be > 0", v)
            }
            ConfigError::InvalidVelocity(v) => {
                write!(f, "Invalid max velocity: {}. Must be finite", v)
            }
            ConfigError::InvalidMode { phase, mode } => write!(
                f,
                "Invalid {} mode '{}'. Valid modes: {}",
                phase.key(),
                mode,
                phase.valid_modes()
            ),
            ConfigError::InvalidPhaseDuration { phase, seconds } => write!(
                f,
                "Invalid {} duration: {} s. Must be finite and >= 0",
                phase.key(),
                seconds
            ),
            ConfigError::NegativeInertia(v) => {
                write!(f, "Invalid moment of inertia: {} kg*m^2. Cannot be negative", v)
            }
            ConfigError::InvalidDiameter(v) => write!(f, "Invalid diameter: {} m. Must be > 0", v),
            ConfigError::InvalidGearRatio(v) => write!(f, "Invalid gear ratio: {}. Must be > 0", v),
            ConfigError::ScrewGeometry(fault) => match fault {
                ScrewGeometryFault::Both => {
                    write!(f, "Screw takes either pitch or lead, not both")
                }
                ScrewGeometryFault::Neither => write!(f, "Screw needs either a pitch or a lead"),
                ScrewGeometryFault::NonPositive => {
                    write!(f, "Screw pitch/lead must be a positive number")
                }
            },
            ConfigError::NotAFinalStage(kind) => {
                write!(f, "A {} cannot be used as the drivetrain output stage", kind)
            }
            ConfigError::CurveTooShort(n) => {
                write!(f, "Motor curve has {} breakpoints. At least 2 are required", n)
            }
            ConfigError::TooManyBreakpoints(n) => write!(
                f,
                "Motor curve has {} breakpoints. At most {} are supported",
                n,
                crate::motor::MAX_BREAKPOINTS
            ),
            ConfigError::CurveLengthMismatch { speeds, torques } => write!(
                f,
                "Motor curve has {} speeds but {} torques. Lengths must match",
                speeds, torques
            ),
            ConfigError::CurveNotAscending { index } => {
                write!(f, "Motor curve speed at index {} is not ascending", index)
            }
            ConfigError::NegativeCurveValue { index } => {
                write!(f, "Motor curve value at index {} is negative", index)
            }
            ConfigError::InvalidEfficiency(v) => {
                write!(f, "Invalid efficiency: {}. Must be in (0, 1]", v)
            }
            ConfigError::InvalidGravity(v) => write!(f, "Invalid gravity: {} m/s^2. Must be > 0", v),
            ConfigError::NegativeMass(v) => write!(f, "Invalid moving mass: {} kg. Cannot be negative", v),
            ConfigError::NegativeSafetyFactor(v) => {
                write!(f, "Invalid safety factor: {}. Cannot be negative", v)
            }
            ConfigError::NegativeFriction(v) => {
                write!(f, "Invalid friction coefficient: {}. Cannot be negative", v)
            }
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::SpeedOutOfRange { hz, min, max } => {
                write!(f, "Speed {} Hz outside motor curve range [{}, {}]", hz, min, max)
            }
        }
    }
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Encode(msg) => write!(f, "Encode failed: {}", msg),
            SnapshotError::Decode(msg) => write!(f, "Decode failed: {}", msg),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Error::Range(e)
    }
}

impl From<SnapshotError> for Error {
    fn from(e: SnapshotError) -> Self {
        Error::Snapshot(e)
    }
}

/// Copy a message into a bounded string, truncating on a char boundary.
pub(crate) fn bounded<const N: usize>(msg: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    for c in msg.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

#[cfg(feature = "std")]
impl std::error::Error for SnapshotError {}
