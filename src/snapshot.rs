//! Binary snapshots of pipeline stages.
//!
//! A stage is stored as its settings, stats and table, encoded with
//! `postcard`. Decoding rebuilds the stage without recomputing anything.

use alloc::string::ToString;
use alloc::vec::Vec;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{bounded, Error, Result, SnapshotError};
use crate::force::{ForceProfile, ForceSettings, ForceStats, LinearForce};
use crate::motion::{LinearMotion, MotionProfile, MotionSettings, MotionStats};
use crate::torque::{AngularTorque, TorqueProfile, TorqueSettings, TorqueStats};

/// A pipeline stage made of settings, stats and a table.
pub trait Stage: Sized {
    /// Parameters the stage was built from.
    type Settings: Serialize + DeserializeOwned;
    /// Derived scalar results.
    type Stats: Serialize + DeserializeOwned;
    /// Sampled output.
    type Table: Serialize + DeserializeOwned;

    /// Borrow the three parts.
    fn parts(&self) -> (&Self::Settings, &Self::Stats, &Self::Table);

    /// Rebuild the stage from its parts.
    fn assemble(settings: Self::Settings, stats: Self::Stats, table: Self::Table) -> Self;
}

impl Stage for LinearMotion {
    type Settings = MotionSettings;
    type Stats = MotionStats;
    type Table = MotionProfile;

    fn parts(&self) -> (&MotionSettings, &MotionStats, &MotionProfile) {
        (self.settings(), self.stats(), self.profile())
    }

    fn assemble(settings: MotionSettings, stats: MotionStats, table: MotionProfile) -> Self {
        LinearMotion::from_parts(settings, stats, table)
    }
}

impl Stage for LinearForce {
    type Settings = ForceSettings;
    type Stats = ForceStats;
    type Table = ForceProfile;

    fn parts(&self) -> (&ForceSettings, &ForceStats, &ForceProfile) {
        (self.settings(), self.stats(), self.profile())
    }

    fn assemble(settings: ForceSettings, stats: ForceStats, table: ForceProfile) -> Self {
        LinearForce::from_parts(settings, stats, table)
    }
}

impl Stage for AngularTorque {
    type Settings = TorqueSettings;
    type Stats = TorqueStats;
    type Table = TorqueProfile;

    fn parts(&self) -> (&TorqueSettings, &TorqueStats, &TorqueProfile) {
        (self.settings(), self.stats(), self.profile())
    }

    fn assemble(settings: TorqueSettings, stats: TorqueStats, table: TorqueProfile) -> Self {
        AngularTorque::from_parts(settings, stats, table)
    }
}

/// Encode a stage to bytes.
///
/// # Errors
///
/// Returns `SnapshotError::Encode` if serialization fails.
pub fn to_bytes<S: Stage>(stage: &S) -> Result<Vec<u8>> {
    postcard::to_allocvec(&stage.parts())
        .map_err(|e| Error::Snapshot(SnapshotError::Encode(bounded(&e.to_string()))))
}

/// Decode a stage from bytes produced by [`to_bytes`].
///
/// # Errors
///
/// Returns `SnapshotError::Decode` if the bytes are truncated or malformed.
pub fn from_bytes<S: Stage>(bytes: &[u8]) -> Result<S> {
    let (settings, stats, table) =
        postcard::from_bytes::<(S::Settings, S::Stats, S::Table)>(bytes)
            .map_err(|e| Error::Snapshot(SnapshotError::Decode(bounded(&e.to_string()))))?;
    Ok(S::assemble(settings, stats, table))
}

/// Write a stage snapshot to a file.
///
/// # Errors
///
/// Returns an encode error or `ConfigError::IoError` if the file cannot be
/// written.
#[cfg(feature = "std")]
pub fn save<S: Stage, P: AsRef<std::path::Path>>(stage: &S, path: P) -> Result<()> {
    let bytes = to_bytes(stage)?;
    std::fs::write(path.as_ref(), bytes).map_err(io_error)
}

/// Read a stage snapshot from a file.
///
/// # Errors
///
/// Returns `ConfigError::IoError` if the file cannot be read, or a decode
/// error if its contents are not a snapshot of `S`.
#[cfg(feature = "std")]
pub fn load<S: Stage, P: AsRef<std::path::Path>>(path: P) -> Result<S> {
    let bytes = std::fs::read(path.as_ref()).map_err(io_error)?;
    from_bytes(&bytes)
}

#[cfg(feature = "std")]
fn io_error(e: std::io::Error) -> Error {
    Error::Config(crate::error::ConfigError::IoError(bounded(&e.to_string())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivetrain::{Drivetrain, Screw};
    use crate::motor::Motor;

    fn motion() -> LinearMotion {
        LinearMotion::new(MotionSettings {
            fs: 200.0,
            max_velocity: 0.01,
            ..MotionSettings::default()
        })
        .unwrap()
    }

    #[test]
    fn test_motion_snapshot() {
        let motion = motion();
        let bytes = to_bytes(&motion).unwrap();
        let restored: LinearMotion = from_bytes(&bytes).unwrap();
        assert_eq!(restored, motion);
    }

    #[test]
    fn test_torque_snapshot() {
        let force = LinearForce::new(ForceSettings::new(5.0), motion()).unwrap();
        let drivetrain = Drivetrain::direct(Screw::from_lead(0.005, 0.0).unwrap()).unwrap();
        let torque = AngularTorque::new(force, &Motor::default(), &drivetrain).unwrap();

        let bytes = to_bytes(&torque).unwrap();
        let restored: AngularTorque = from_bytes(&bytes).unwrap();
        assert_eq!(restored, torque);
    }

    #[test]
    fn test_truncated_snapshot() {
        let bytes = to_bytes(&motion()).unwrap();
        let result: Result<LinearMotion> = from_bytes(&bytes[..bytes.len() / 2]);
        assert!(matches!(
            result,
            Err(Error::Snapshot(SnapshotError::Decode(_)))
        ));
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_file_round_trip() {
        let path = std::env::temp_dir().join("drive_sizer_motion_snapshot.bin");
        let motion = motion();
        save(&motion, &path).unwrap();
        let restored: LinearMotion = load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(restored, motion);
    }
}
