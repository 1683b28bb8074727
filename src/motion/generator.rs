//! Three-phase motion synthesis.
//!
//! Each phase is a pure function of the previous phase's final state and
//! its own settings; phases are chained by folding over [`Phase::ALL`].

use alloc::vec;
use alloc::vec::Vec;

use crate::error::Result;
use crate::signal::{differentiate, integrate, Window};
use crate::table::Table;

use super::profile::{MotionProfile, MotionStats, PhaseStats};
use super::settings::MotionSettings;
use super::Phase;

/// Position and velocity handed from one phase to the next.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Boundary {
    x: f64,
    v: f64,
}

impl Boundary {
    const REST: Self = Self { x: 0.0, v: 0.0 };
}

/// Columns of a single phase before concatenation.
struct PhaseTable {
    x: Vec<f64>,
    v: Vec<f64>,
    a: Vec<f64>,
}

impl PhaseTable {
    fn synthesize(phase: Phase, settings: &MotionSettings, start: Boundary, n: usize) -> Self {
        let fs = settings.fs;
        let v_peak = settings.max_velocity;

        match phase {
            Phase::Constant => {
                let v = vec![v_peak; n];
                let x = integrate(&v, fs, start.x);
                Self { x, v, a: vec![0.0; n] }
            }
            Phase::Accelerate | Phase::Decelerate => {
                let window = Window::for_smoothing(settings.smooth(phase)).generate(2 * n);
                let shape = match phase {
                    Phase::Accelerate => &window[..n],
                    _ => &window[n..],
                };
                let v: Vec<f64> = shape.iter().map(|w| w * v_peak).collect();
                let x = integrate(&v, fs, start.x);
                let a = differentiate(&v, fs, start.v);
                Self { x, v, a }
            }
        }
    }

    /// Final state, or `start` unchanged for an empty phase.
    fn end(&self, start: Boundary) -> Boundary {
        match (self.x.last(), self.v.last()) {
            (Some(&x), Some(&v)) => Boundary { x, v },
            _ => start,
        }
    }
}

/// A generated linear motion: settings, per-phase stats and the table.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearMotion {
    settings: MotionSettings,
    stats: MotionStats,
    profile: MotionProfile,
}

impl LinearMotion {
    /// Validate settings and generate the motion table.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for a non-positive sample rate, a
    /// non-finite peak velocity or an invalid phase duration. Nothing is
    /// generated when validation fails.
    pub fn new(settings: MotionSettings) -> Result<Self> {
        settings.validate()?;

        let mut counts = [0usize; 3];
        for (count, phase) in counts.iter_mut().zip(Phase::ALL) {
            *count = settings.phase_samples(phase)?;
        }
        trace!(
            "motion phase samples: acc={} con={} dec={}",
            counts[0],
            counts[1],
            counts[2]
        );

        let (tables, _) = Phase::ALL.iter().zip(counts).fold(
            (Vec::with_capacity(3), Boundary::REST),
            |(mut tables, start), (&phase, n)| {
                let table = PhaseTable::synthesize(phase, &settings, start, n);
                let end = table.end(start);
                tables.push((phase, table));
                (tables, end)
            },
        );

        let fs = settings.fs;
        let stat = |i: usize| {
            let (phase, table): &(Phase, PhaseTable) = &tables[i];
            PhaseStats::compute(fs, &table.x, &table.a, phase.is_ramp())
        };
        let stats = MotionStats {
            accelerate: stat(0),
            constant: stat(1),
            decelerate: stat(2),
        };

        let total: usize = counts.iter().sum();
        let mut x = Vec::with_capacity(total);
        let mut v = Vec::with_capacity(total);
        let mut a = Vec::with_capacity(total);
        for (_, table) in tables {
            x.extend(table.x);
            v.extend(table.v);
            a.extend(table.a);
        }
        let profile = MotionProfile::from_columns(fs, x, v, a);

        debug!(
            "motion profile generated: {} samples, {} s",
            profile.len(),
            stats.duration()
        );

        Ok(Self {
            settings,
            stats,
            profile,
        })
    }

    /// Reassemble a motion from previously produced parts.
    pub fn from_parts(settings: MotionSettings, stats: MotionStats, profile: MotionProfile) -> Self {
        Self {
            settings,
            stats,
            profile,
        }
    }

    /// Split into settings, stats and table, handing the table on.
    pub fn into_parts(self) -> (MotionSettings, MotionStats, MotionProfile) {
        (self.settings, self.stats, self.profile)
    }

    /// Settings this motion was generated from.
    pub fn settings(&self) -> &MotionSettings {
        &self.settings
    }

    /// Per-phase statistics.
    pub fn stats(&self) -> &MotionStats {
        &self.stats
    }

    /// The motion table.
    pub fn profile(&self) -> &MotionProfile {
        &self.profile
    }

    /// Total duration in s (`samples / fs`).
    pub fn duration(&self) -> f64 {
        self.profile.len() as f64 / self.settings.fs
    }
}
