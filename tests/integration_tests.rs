//! Integration tests for drive-sizer.
//!
//! These tests verify the complete workflow from TOML parsing through the
//! motion, force and torque stages.

use drive_sizer::config::{parse_config, OutputStageConfig, SizingConfig};
use drive_sizer::drivetrain::{Coupler, Direct, Drivetrain, ElementKind, Gear, Screw, Wheel};
use drive_sizer::error::{ConfigError, Error, RangeError, ScrewGeometryFault, SnapshotError};
use drive_sizer::snapshot;
use drive_sizer::units::{inch, ipm, TWO_PI};
use drive_sizer::{
    size_drive, AngularTorque, ForceSettings, LinearForce, LinearMotion, Motor, MotorCurve,
    MotionSettings, Phase, RampMode, Table,
};

// =============================================================================
// Test configuration data
// =============================================================================

const MINIMAL_CONFIG: &str = r#"
[force]
moving_mass = 1.0

[drivetrain]
type = "direct"
"#;

const SCREW_AXIS_CONFIG: &str = r#"
[motion]
fs = 1000.0
max_velocity = 0.0254
acc_mode = "distance"
acc_value = 0.00127
con_mode = "distance"
con_value = 0.0127
dec_mode = "distance"
dec_value = 0.00127

[force]
safety_factor = 2.0
moving_mass = 10.0
preload_force = 0.1
efficiency = 0.9
friction_coef = 0.1
gravity = 9.8

[coupler]
j = 1.0e-6

[gear]
ratio = 1.0

[drivetrain]
type = "screw"
lead = 0.00127
"#;

fn reference_settings() -> MotionSettings {
    MotionSettings {
        dec_smooth: false,
        ..MotionSettings::default()
    }
}

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} within {}, got {}",
        expected,
        tol,
        actual
    );
}

// =============================================================================
// Motion generation
// =============================================================================

#[test]
fn unit_move_has_expected_shape() {
    let motion = LinearMotion::new(reference_settings()).expect("Should generate motion");
    let profile = motion.profile();

    assert_eq!(profile.len(), 3000);
    assert_close(motion.duration(), 3.0, 1e-12);
    assert_close(profile.t()[2999], 2.999, 1e-12);
    assert_eq!(profile.v()[0], 0.0);
    assert_close(motion.stats().accelerate.displacement, 0.5, 1e-2);
    assert_close(motion.stats().constant.displacement, 0.999, 1e-9);
    assert_close(profile.last().expect("Should have samples").v, 0.0, 1e-2);
}

#[test]
fn phases_join_without_velocity_jumps() {
    let motion = LinearMotion::new(reference_settings()).expect("Should generate motion");
    let v = motion.profile().v();

    assert_close(v[999], v[1000], 1e-3);
    assert_eq!(v[1999], v[2000]);
    assert_eq!(motion.profile().a()[2000], 0.0);
}

#[test]
fn mixed_modes_size_each_phase() {
    let settings = MotionSettings {
        fs: 100.0,
        max_velocity: 0.5,
        ..MotionSettings::default()
    }
    .with_mode(Phase::Accelerate, "acceleration", 1.0)
    .and_then(|s| s.with_mode(Phase::Constant, "distance", 0.25))
    .and_then(|s| s.with_mode(Phase::Decelerate, "distance", 0.125))
    .expect("Modes should be accepted");

    assert_eq!(settings.acc_mode, RampMode::Acceleration);
    let stats = *LinearMotion::new(settings).expect("Should generate motion").stats();

    assert_eq!(stats.accelerate.samples, 50);
    assert_eq!(stats.constant.samples, 50);
    assert_eq!(stats.decelerate.samples, 50);
}

#[test]
fn unknown_mode_tag_is_rejected() {
    let result = MotionSettings::default().with_mode(Phase::Constant, "acceleration", 1.0);
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::InvalidMode {
            phase: Phase::Constant,
            ..
        }))
    ));
}

// =============================================================================
// Force stage
// =============================================================================

#[test]
fn force_without_constant_terms_is_pure_inertia() {
    let motion = LinearMotion::new(reference_settings()).expect("Should generate motion");
    let settings = ForceSettings {
        safety_factor: 2.0,
        efficiency: 0.5,
        ..ForceSettings::new(3.0)
    };
    let force = LinearForce::new(settings, motion).expect("Should compute force");

    let profile = force.profile();
    for (f, a) in profile.f().iter().zip(profile.motion().a()) {
        assert_eq!(*f, a * ((2.0 / 0.5) * 3.0));
    }
    assert_eq!(force.stats().f_constant, 0.0);
}

#[test]
fn force_table_extends_motion_columns() {
    let motion = LinearMotion::new(reference_settings()).expect("Should generate motion");
    let force = LinearForce::new(ForceSettings::new(1.0), motion).expect("Should compute force");

    assert_eq!(force.profile().column_names(), ["t", "x", "v", "a", "f"]);
}

// =============================================================================
// Drivetrain and motor
// =============================================================================

#[test]
fn screw_needs_exactly_one_geometry_value() {
    assert!(matches!(
        Screw::new(Some(200.0), Some(0.005), 0.0),
        Err(Error::Config(ConfigError::ScrewGeometry(ScrewGeometryFault::Both)))
    ));
    assert!(matches!(
        Screw::new(None, None, 0.0),
        Err(Error::Config(ConfigError::ScrewGeometry(ScrewGeometryFault::Neither)))
    ));

    let screw = Screw::from_pitch(200.0, 0.0).expect("Should build screw");
    assert_eq!(screw.lead(), 1.0 / 200.0);
}

#[test]
fn coupler_and_gear_are_not_output_stages() {
    let result = Drivetrain::new(
        Coupler::default(),
        Gear::default(),
        Coupler::new(1e-6).expect("Should build coupler"),
    );
    assert!(matches!(
        result,
        Err(Error::Config(ConfigError::NotAFinalStage(_)))
    ));
}

#[test]
fn wheel_converts_travel_to_revolutions() {
    let drivetrain = Drivetrain::new(
        Coupler::default(),
        Gear::new(3.0, 0.0, 0.0).expect("Should build gear"),
        Wheel::new(0.1, 0.0).expect("Should build wheel"),
    )
    .expect("Should build drivetrain");

    assert_close(drivetrain.lead(), core::f64::consts::PI * 0.1, 1e-15);
    assert_close(drivetrain.revs_per_meter(), 3.0 / (core::f64::consts::PI * 0.1), 1e-12);
}

#[test]
fn motor_curve_rejects_unordered_speeds() {
    assert!(matches!(
        MotorCurve::new(&[0.0, 5.0, 4.0], &[1.0, 1.0, 1.0]),
        Err(Error::Config(ConfigError::CurveNotAscending { index: 2 }))
    ));
}

// =============================================================================
// Torque stage
// =============================================================================

#[test]
fn unit_gear_direct_drive_sees_only_rotor_inertia() {
    let motor = Motor::default();
    let drivetrain = Drivetrain::direct(Direct::new(0.0).expect("Should build stage"))
        .expect("Should build drivetrain");
    let motion = LinearMotion::new(reference_settings()).expect("Should generate motion");
    let settings = ForceSettings {
        safety_factor: 1.5,
        ..ForceSettings::new(0.0)
    };
    let force = LinearForce::new(settings, motion).expect("Should compute force");
    let torque = AngularTorque::new(force, &motor, &drivetrain).expect("Should compute torque");

    let stats = torque.stats();
    assert_eq!(stats.drivetrain_type, ElementKind::Direct);
    assert_eq!(stats.j_rotating, motor.j());
    assert_close(
        stats.tau_rotating_scale,
        TWO_PI * motor.j() * 1.5,
        1e-15,
    );
    assert!(torque.profile().tau_linear().iter().all(|&t| t == 0.0));
}

#[test]
fn torque_table_has_full_column_set() {
    let config = parse_config(SCREW_AXIS_CONFIG).expect("Should parse config");
    let torque = size_drive(&config).expect("Should size drive");

    assert_eq!(
        torque.profile().column_names(),
        [
            "t",
            "x",
            "v",
            "a",
            "f",
            "revs",
            "hz",
            "hzps",
            "tau_rotating",
            "tau_linear",
            "tau",
            "tau_motor"
        ]
    );
}

#[test]
fn fast_move_leaves_motor_curve() {
    let settings = MotionSettings {
        max_velocity: 1.0,
        ..MotionSettings::default()
    };
    let motion = LinearMotion::new(settings).expect("Should generate motion");
    let force = LinearForce::new(ForceSettings::new(1.0), motion).expect("Should compute force");
    let drivetrain = Drivetrain::direct(Screw::from_lead(0.005, 0.0).expect("Should build screw"))
        .expect("Should build drivetrain");

    let result = AngularTorque::new(force, &Motor::default(), &drivetrain);
    assert!(matches!(
        result,
        Err(Error::Range(RangeError::SpeedOutOfRange { .. }))
    ));
}

// =============================================================================
// Configuration workflow
// =============================================================================

#[test]
fn minimal_config_uses_defaults() {
    let config: SizingConfig = parse_config(MINIMAL_CONFIG).expect("Should parse config");

    assert_eq!(config.motion, MotionSettings::default());
    assert_eq!(config.drivetrain, OutputStageConfig::Direct { j: 0.0 });
    assert_eq!(
        config.motor().expect("Should build motor").name(),
        Motor::default().name()
    );
}

#[test]
fn screw_axis_config_matches_hand_built_pipeline() {
    let config = parse_config(SCREW_AXIS_CONFIG).expect("Should parse config");
    let from_config = size_drive(&config).expect("Should size drive");

    let motion = LinearMotion::new(MotionSettings {
        max_velocity: ipm(60.0),
        acc_mode: RampMode::Distance,
        acc_value: inch(0.05),
        con_mode: drive_sizer::CruiseMode::Distance,
        con_value: inch(0.5),
        dec_mode: RampMode::Distance,
        dec_value: inch(0.05),
        ..MotionSettings::default()
    })
    .expect("Should generate motion");
    let force = LinearForce::new(config.force.clone(), motion).expect("Should compute force");
    let drivetrain = config.drivetrain().expect("Should build drivetrain");
    let by_hand =
        AngularTorque::new(force, &Motor::default(), &drivetrain).expect("Should compute torque");

    assert_eq!(from_config.profile().len(), by_hand.profile().len());
    assert_close(from_config.stats().j_load, by_hand.stats().j_load, 1e-15);
}

#[test]
fn invalid_config_fails_before_sizing() {
    let toml = r#"
[motion]
fs = -10.0

[force]
moving_mass = 1.0

[drivetrain]
type = "direct"
"#;

    assert!(matches!(
        parse_config(toml),
        Err(Error::Config(ConfigError::InvalidSampleRate(_)))
    ));
}

// =============================================================================
// Snapshots
// =============================================================================

#[test]
fn force_snapshot_round_trip() {
    let motion = LinearMotion::new(reference_settings()).expect("Should generate motion");
    let force = LinearForce::new(ForceSettings::new(2.0), motion).expect("Should compute force");

    let bytes = snapshot::to_bytes(&force).expect("Should encode");
    let restored: LinearForce = snapshot::from_bytes(&bytes).expect("Should decode");
    assert_eq!(restored, force);
}

#[test]
fn empty_snapshot_is_rejected() {
    let result: drive_sizer::Result<LinearMotion> = snapshot::from_bytes(&[]);
    assert!(matches!(
        result,
        Err(Error::Snapshot(SnapshotError::Decode(_)))
    ));
}
