//! Example: Sizing a lead-screw axis.
//!
//! This example demonstrates how to:
//! - Describe a move with distance-based phases
//! - Chain the motion, force and torque stages
//! - Check the motor's torque margin over the move
//!
//! Run with: `cargo run --example screw_axis`

use drive_sizer::{
    drivetrain::{Coupler, Drivetrain, Gear, Screw},
    error::Result,
    units::{inch, ipm, to_gcm2},
    AngularTorque, CruiseMode, ForceSettings, LinearForce, LinearMotion, Motor, MotionSettings,
    RampMode, Table,
};

fn main() -> Result<()> {
    println!("=== Lead Screw Axis Sizing ===\n");

    let motion_settings = MotionSettings {
        fs: 100_000.0,
        max_velocity: ipm(80.0),
        acc_mode: RampMode::Distance,
        acc_value: inch(0.1),
        acc_smooth: true,
        con_mode: CruiseMode::Distance,
        con_value: inch(0.05),
        dec_mode: RampMode::Distance,
        dec_value: inch(0.1),
        dec_smooth: true,
    };

    let force_settings = ForceSettings {
        safety_factor: 2.0,
        moving_mass: 10.0,
        preload_force: 0.1,
        efficiency: 0.9,
        incline_angle: 0.0,
        friction_coef: 0.1,
        gravity: 9.8,
    };

    let motion = LinearMotion::new(motion_settings)?;
    let stats = *motion.stats();
    println!("Motion:");
    println!("  Samples:     {}", stats.samples());
    println!("  Duration:    {:.4} s", stats.duration());
    println!("  Travel:      {:.5} m", stats.displacement());
    if let Some(acc) = stats.accelerate.acceleration {
        println!("  Peak accel:  {:.3} m/s^2", acc.max);
    }

    let force = LinearForce::new(force_settings, motion)?;
    println!("\nForce:");
    println!("  Friction:    {:.3} N", force.stats().f_friction);
    println!("  Constant:    {:.3} N", force.stats().f_constant);
    println!("  Peak:        {:.3} N", force.peak_force());

    let motor = Motor::default();
    println!(
        "\nMotor: {} {} ({})",
        motor.manufacturer(),
        motor.name(),
        motor.description()
    );
    println!("  Rotor inertia: {:.1} g*cm^2", to_gcm2(motor.j()));
    println!("  Max speed:     {:.1} rev/s", motor.curve().hz_max());

    let drivetrain = Drivetrain::new(
        Coupler::default(),
        Gear::new(1.0, 0.0, 0.0)?,
        Screw::from_lead(inch(0.05), 0.0)?,
    )?;

    let torque = AngularTorque::new(force, &motor, &drivetrain)?;
    let stats = torque.stats();
    println!("\nTorque:");
    println!("  Load inertia:     {:.3e} kg*m^2", stats.j_load);
    println!("  Inertia ratio:    {:.3}", stats.j_ratio);
    println!("  Rotating inertia: {:.3e} kg*m^2", stats.j_rotating);

    let profile = torque.profile();
    println!("  Columns: {}", profile.column_names().join(", "));
    match profile.worst_margin() {
        Some((index, margin)) => println!(
            "  Worst margin: {:.3} N*m at t = {:.4} s",
            margin,
            profile.force().motion().t()[index]
        ),
        None => println!("  Empty move"),
    }

    if profile.is_sufficient() {
        println!("\n✓ Motor covers the move");
    } else {
        println!("\n✗ Motor is undersized for this move");
    }

    Ok(())
}
