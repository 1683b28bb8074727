//! Motion table and per-phase statistics.

use alloc::vec;
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};

use crate::table::{Column, Table};

/// One row of a motion table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionSample {
    /// Time in s.
    pub t: f64,
    /// Position in m.
    pub x: f64,
    /// Velocity in m/s.
    pub v: f64,
    /// Acceleration in m/s^2.
    pub a: f64,
}

/// Time-indexed motion table sampled at a fixed rate.
///
/// `t[i] == i / fs` for the whole table.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MotionProfile {
    t: Vec<f64>,
    x: Vec<f64>,
    v: Vec<f64>,
    a: Vec<f64>,
}

impl MotionProfile {
    /// Build a table from position, velocity and acceleration columns,
    /// regenerating the time column as `index / fs`.
    pub(crate) fn from_columns(fs: f64, x: Vec<f64>, v: Vec<f64>, a: Vec<f64>) -> Self {
        debug_assert!(x.len() == v.len() && v.len() == a.len());
        let t = (0..x.len()).map(|i| i as f64 / fs).collect();
        Self { t, x, v, a }
    }

    /// Time column in s.
    pub fn t(&self) -> &[f64] {
        &self.t
    }

    /// Position column in m.
    pub fn x(&self) -> &[f64] {
        &self.x
    }

    /// Velocity column in m/s.
    pub fn v(&self) -> &[f64] {
        &self.v
    }

    /// Acceleration column in m/s^2.
    pub fn a(&self) -> &[f64] {
        &self.a
    }

    /// Row at `index`.
    pub fn sample(&self, index: usize) -> Option<MotionSample> {
        Some(MotionSample {
            t: *self.t.get(index)?,
            x: *self.x.get(index)?,
            v: *self.v.get(index)?,
            a: *self.a.get(index)?,
        })
    }

    /// Last row.
    pub fn last(&self) -> Option<MotionSample> {
        self.len().checked_sub(1).and_then(|i| self.sample(i))
    }
}

impl Table for MotionProfile {
    fn len(&self) -> usize {
        self.x.len()
    }

    fn columns(&self) -> Vec<Column<'_>> {
        vec![("t", &self.t[..]), ("x", &self.x[..]), ("v", &self.v[..]), ("a", &self.a[..])]
    }
}

/// Acceleration summary of a ramp phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelStats {
    /// Minimum acceleration in m/s^2.
    pub min: f64,
    /// Maximum acceleration in m/s^2.
    pub max: f64,
    /// Mean acceleration in m/s^2.
    pub mean: f64,
}

impl AccelStats {
    /// Summarize an acceleration series; `None` when empty.
    pub fn from_series(a: &[f64]) -> Option<Self> {
        if a.is_empty() {
            return None;
        }
        let (min, max, sum) = a.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), &v| (min.min(v), max.max(v), sum + v),
        );
        Some(Self {
            min,
            max,
            mean: sum / a.len() as f64,
        })
    }
}

/// Aggregate record of one phase.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseStats {
    /// Number of samples.
    pub samples: usize,
    /// Duration in s (`samples / fs`).
    pub duration: f64,
    /// Net displacement in m (max - min of position).
    pub displacement: f64,
    /// Acceleration summary, ramp phases only.
    pub acceleration: Option<AccelStats>,
}

impl PhaseStats {
    /// Compute stats over a phase's position and acceleration columns.
    pub(crate) fn compute(fs: f64, x: &[f64], a: &[f64], is_ramp: bool) -> Self {
        let displacement = if x.is_empty() {
            0.0
        } else {
            let (min, max) = x
                .iter()
                .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
            max - min
        };
        Self {
            samples: x.len(),
            duration: x.len() as f64 / fs,
            displacement,
            acceleration: if is_ramp { AccelStats::from_series(a) } else { None },
        }
    }
}

/// Per-phase stats of a motion table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MotionStats {
    /// Accelerate phase.
    pub accelerate: PhaseStats,
    /// Constant-velocity phase.
    pub constant: PhaseStats,
    /// Decelerate phase.
    pub decelerate: PhaseStats,
}

impl MotionStats {
    /// Total number of samples over all phases.
    pub fn samples(&self) -> usize {
        self.accelerate.samples + self.constant.samples + self.decelerate.samples
    }

    /// Total duration in s.
    pub fn duration(&self) -> f64 {
        self.accelerate.duration + self.constant.duration + self.decelerate.duration
    }

    /// Sum of phase displacements in m.
    pub fn displacement(&self) -> f64 {
        self.accelerate.displacement + self.constant.displacement + self.decelerate.displacement
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_column_regenerated() {
        let p = MotionProfile::from_columns(4.0, vec![0.0; 3], vec![0.0; 3], vec![0.0; 3]);
        assert_eq!(p.t(), &[0.0, 0.25, 0.5]);
    }

    #[test]
    fn test_column_set() {
        let p = MotionProfile::default();
        assert_eq!(p.column_names(), ["t", "x", "v", "a"]);
        assert!(p.is_empty());
        assert!(p.last().is_none());
    }

    #[test]
    fn test_accel_stats() {
        let s = AccelStats::from_series(&[1.0, -2.0, 4.0]).unwrap();
        assert_eq!(s.min, -2.0);
        assert_eq!(s.max, 4.0);
        assert_eq!(s.mean, 1.0);
        assert!(AccelStats::from_series(&[]).is_none());
    }

    #[test]
    fn test_phase_stats_displacement() {
        let s = PhaseStats::compute(10.0, &[1.0, 3.0, 2.0], &[0.0; 3], false);
        assert_eq!(s.samples, 3);
        assert_eq!(s.displacement, 2.0);
        assert!((s.duration - 0.3).abs() < 1e-12);
        assert!(s.acceleration.is_none());
    }
}
