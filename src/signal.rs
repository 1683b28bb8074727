//! Fixed-rate discrete signal primitives.
//!
//! Every kinematic relation in the pipeline (position from velocity,
//! acceleration from velocity, ...) is expressed through [`integrate`] and
//! [`differentiate`]. Both are single forward passes with an explicit seed.

use alloc::vec::Vec;

use libm::cos;

use crate::units::TWO_PI;

/// Backward difference scaled by the sample rate.
///
/// `out[i] = (samples[i] - samples[i - 1]) * fs`, where the sample before the
/// first one is `initial`.
pub fn differentiate(samples: &[f64], fs: f64, initial: f64) -> Vec<f64> {
    samples
        .iter()
        .scan(initial, |last, &sample| {
            let d = (sample - *last) * fs;
            *last = sample;
            Some(d)
        })
        .collect()
}

/// Running rectangular integral seeded by `initial`.
///
/// `out[i] = out[i - 1] + samples[i] / fs`, where `out[-1]` is `initial`.
pub fn integrate(samples: &[f64], fs: f64, initial: f64) -> Vec<f64> {
    samples
        .iter()
        .scan(initial, |acc, &sample| {
            *acc += sample / fs;
            Some(*acc)
        })
        .collect()
}

/// Ramp shaping window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Raised-cosine bell.
    Hann,
    /// Linear rise and fall.
    Triangular,
}

impl Window {
    /// Pick the window for a ramp's smoothing flag.
    #[inline]
    pub fn for_smoothing(smooth: bool) -> Self {
        if smooth {
            Window::Hann
        } else {
            Window::Triangular
        }
    }

    /// Generate `len` samples of the periodic form of this window.
    ///
    /// The periodic form is the symmetric window of length `len + 1` with its
    /// last sample dropped, so a window of length `2N` peaks exactly at
    /// index `N`.
    pub fn generate(self, len: usize) -> Vec<f64> {
        match self {
            Window::Hann => hann(len),
            Window::Triangular => triangular(len),
        }
    }
}

fn hann(len: usize) -> Vec<f64> {
    let m = len as f64;
    (0..len)
        .map(|n| 0.5 - 0.5 * cos(TWO_PI * n as f64 / m))
        .collect()
}

fn triangular(len: usize) -> Vec<f64> {
    // Symmetric triangle over `span` points, truncated to `len`.
    let span = len + 1;
    let half_width = if span % 2 == 0 { span as f64 } else { (span + 1) as f64 };
    let center = (span - 1) as f64;
    (0..len)
        .map(|n| {
            let d = 2.0 * n as f64 - center;
            1.0 - libm::fabs(d) / half_width
        })
        .collect()
}
