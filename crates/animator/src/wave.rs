//! Decorative wave curves.
//!
//! Two state-retention policies exist for the "same" wave concept:
//!
//! - **Recomputed**: every sample's position is a pure function of its index,
//!   the time accumulator, and the pointer. Nothing persists across frames.
//! - **Elastic**: sample points persist, get shoved away from the pointer,
//!   and relax back toward their undisturbed targets a fixed fraction per
//!   tick.
//!
//! [`crate::config::WaveMode`] selects the policy; the curves themselves are
//! only stored for the elastic mode.

use flowcanvas_core::Pointer;
use glam::DVec2;

/// Vertical scale of the elastic rest shape.
const REST_AMPLITUDE: f64 = 30.0;
/// Spatial frequency of the elastic rest shape over sample indices.
const REST_FREQ: f64 = 0.2;
/// Pointer influence radius for the elastic shove.
const SHOVE_RADIUS: f64 = 100.0;
/// Peak shove displacement per tick at zero distance.
const SHOVE_SCALE: f64 = 50.0 * 0.1;
/// Fraction of the remaining offset recovered per tick.
const RETURN_RATE: f64 = 0.05;

/// Travelling-wave constants for the recomputed policy.
const PRIMARY_AMPLITUDE: f64 = 25.0;
const PRIMARY_FREQ: f64 = 0.008;
const PRIMARY_TIME_RATE: f64 = 0.5;
const SECONDARY_AMPLITUDE: f64 = 18.0;
const SECONDARY_FREQ: f64 = 0.012;
const SECONDARY_TIME_RATE: f64 = 0.4;
/// Pointer influence radius and peak vertical push for recomputed samples.
const PUSH_RADIUS: f64 = 150.0;
const PUSH_SCALE: f64 = 50.0;

/// A persistent wave curve (elastic policy only).
#[derive(Debug, Clone, PartialEq)]
pub struct WaveCurve {
    index: usize,
    points: Vec<DVec2>,
}

impl WaveCurve {
    /// Creates curve `index` at its rest shape, phase-offset by the index so
    /// sibling curves start interleaved.
    pub fn new(index: usize, samples: usize, width: f64, height: f64) -> Self {
        let points = (0..samples)
            .map(|j| {
                DVec2::new(
                    width / samples as f64 * j as f64,
                    height / 2.0 + ((j as f64 * REST_FREQ) + index as f64).sin() * REST_AMPLITUDE,
                )
            })
            .collect();
        Self { index, points }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    /// Shoves samples within [`SHOVE_RADIUS`] of the pointer directly away
    /// from it, hardest at the center. A sample exactly on the pointer stays
    /// put (no defined direction).
    pub fn shove(&mut self, pointer: Pointer) {
        for p in &mut self.points {
            let away = *p - pointer.pos();
            let dist = away.length();
            if dist > 0.0 && dist < SHOVE_RADIUS {
                let strength = (SHOVE_RADIUS - dist) / SHOVE_RADIUS;
                *p += away / dist * strength * SHOVE_SCALE;
            }
        }
    }

    /// Pulls every sample a fixed fraction back toward its rest position.
    ///
    /// The rest shape shares one phase across curves, so undisturbed siblings
    /// converge onto the same line over time.
    pub fn relax(&mut self, width: f64, height: f64) {
        let samples = self.points.len() as f64;
        for (j, p) in self.points.iter_mut().enumerate() {
            let target = DVec2::new(
                width / samples * j as f64,
                height / 2.0 + (j as f64 * REST_FREQ).sin() * REST_AMPLITUDE,
            );
            *p += (target - *p) * RETURN_RATE;
        }
    }
}

/// Stateless travelling-wave samples for curve `index` (recomputed policy).
///
/// Two superimposed trig terms with different spatial and temporal
/// frequencies produce the travelling motion; samples near the pointer are
/// additionally pushed along the vertical component of the pointer-to-sample
/// vector. A sample exactly on the pointer receives no push.
pub fn recomputed_samples(
    index: usize,
    samples: usize,
    width: f64,
    height: f64,
    time: f64,
    pointer: Pointer,
) -> Vec<DVec2> {
    let band = height / 8.0 * index as f64;
    let step = width / (samples.max(2) - 1) as f64;
    (0..samples.max(2))
        .map(|j| {
            let x = step * j as f64;
            let y = band
                + (x * PRIMARY_FREQ + time * PRIMARY_TIME_RATE + index as f64).sin()
                    * PRIMARY_AMPLITUDE
                + (x * SECONDARY_FREQ + time * SECONDARY_TIME_RATE).cos() * SECONDARY_AMPLITUDE;

            let dx = x - pointer.x;
            let dy = y - pointer.y;
            let dist = (dx * dx + dy * dy).sqrt();
            let influence = ((PUSH_RADIUS - dist) / PUSH_RADIUS).max(0.0);
            let push = if dist > 0.0 {
                dy / dist.max(1.0) * influence * PUSH_SCALE
            } else {
                0.0
            };
            DVec2::new(x, y + push)
        })
        .collect()
}
