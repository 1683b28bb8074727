//! Unit conversions between user-facing units and internal base units.
//!
//! Internal units are meters, seconds, Hz (revolutions per second) and
//! kg*m^2. Every conversion has an exact inverse named `to_*`.

use core::f64::consts::PI;

/// 2π, radians per revolution.
pub const TWO_PI: f64 = 2.0 * PI;
/// 1 / 2π, revolutions per radian.
pub const ONE_OVER_TWO_PI: f64 = 1.0 / TWO_PI;

/// Seconds per minute.
pub const SEC_PER_MIN: f64 = 60.0;
/// Minutes per second.
pub const MIN_PER_SEC: f64 = 1.0 / SEC_PER_MIN;
/// Minutes per hour.
pub const MIN_PER_HOUR: f64 = 60.0;
/// Seconds per hour.
pub const SEC_PER_HOUR: f64 = SEC_PER_MIN * MIN_PER_HOUR;

/// Meters per inch.
pub const M_PER_INCH: f64 = 0.0254;
/// Inches per meter.
pub const INCH_PER_M: f64 = 1.0 / M_PER_INCH;
/// Millimeters per meter.
pub const MM_PER_M: f64 = 1000.0;
/// Meters per millimeter.
pub const M_PER_MM: f64 = 1.0 / MM_PER_M;
/// Centimeters per meter.
pub const CM_PER_M: f64 = 100.0;
/// Meters per centimeter.
pub const M_PER_CM: f64 = 1.0 / CM_PER_M;

/// m/s per inch/min.
pub const MPS_PER_IPM: f64 = MIN_PER_SEC * M_PER_INCH;
/// inch/min per m/s.
pub const IPM_PER_MPS: f64 = SEC_PER_MIN * INCH_PER_M;

/// cm^2 per m^2.
pub const CM2_PER_M2: f64 = CM_PER_M * CM_PER_M;
/// m^2 per cm^2.
pub const M2_PER_CM2: f64 = 1.0 / CM2_PER_M2;

/// Grams per kilogram.
pub const G_PER_KG: f64 = 1000.0;
/// Kilograms per gram.
pub const KG_PER_G: f64 = 1.0 / G_PER_KG;

/// kg*m^2 per g*cm^2.
pub const KGM2_PER_GCM2: f64 = KG_PER_G * M2_PER_CM2;
/// g*cm^2 per kg*m^2.
pub const GCM2_PER_KGM2: f64 = G_PER_KG * CM2_PER_M2;

/// Inches to meters.
#[inline]
pub fn inch(x_inch: f64) -> f64 {
    x_inch * M_PER_INCH
}

/// Meters to inches.
#[inline]
pub fn to_inch(x_m: f64) -> f64 {
    x_m * INCH_PER_M
}

/// Millimeters to meters.
#[inline]
pub fn mm(x_mm: f64) -> f64 {
    x_mm * M_PER_MM
}

/// Meters to millimeters.
#[inline]
pub fn to_mm(x_m: f64) -> f64 {
    x_m * MM_PER_M
}

/// Inches per minute to m/s.
#[inline]
pub fn ipm(v_ipm: f64) -> f64 {
    v_ipm * MPS_PER_IPM
}

/// m/s to inches per minute.
#[inline]
pub fn to_ipm(v_mps: f64) -> f64 {
    v_mps * IPM_PER_MPS
}

/// rad/s to Hz.
#[inline]
pub fn radps(omega_radps: f64) -> f64 {
    omega_radps * ONE_OVER_TWO_PI
}

/// Hz to rad/s.
#[inline]
pub fn to_radps(omega_hz: f64) -> f64 {
    omega_hz * TWO_PI
}

/// RPM to Hz.
#[inline]
pub fn rpm(omega_rpm: f64) -> f64 {
    omega_rpm * MIN_PER_SEC
}

/// Hz to RPM.
#[inline]
pub fn to_rpm(omega_hz: f64) -> f64 {
    omega_hz * SEC_PER_MIN
}

/// rad/s^2 to Hz/s.
#[inline]
pub fn radps2(alpha_radps2: f64) -> f64 {
    alpha_radps2 * ONE_OVER_TWO_PI
}

/// Hz/s to rad/s^2.
#[inline]
pub fn to_radps2(alpha_hzps: f64) -> f64 {
    alpha_hzps * TWO_PI
}

/// RPM/s to Hz/s.
#[inline]
pub fn rpmps(alpha_rpmps: f64) -> f64 {
    alpha_rpmps * MIN_PER_SEC
}

/// Hz/s to RPM/s.
#[inline]
pub fn to_rpmps(alpha_hzps: f64) -> f64 {
    alpha_hzps * SEC_PER_MIN
}

/// g*cm^2 to kg*m^2.
#[inline]
pub fn gcm2(j_gcm2: f64) -> f64 {
    j_gcm2 * KGM2_PER_GCM2
}

/// kg*m^2 to g*cm^2.
#[inline]
pub fn to_gcm2(j_kgm2: f64) -> f64 {
    j_kgm2 * GCM2_PER_KGM2
}
