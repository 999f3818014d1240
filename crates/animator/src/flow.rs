//! Closed-form pseudo-noise flow field.
//!
//! Maps a surface position and the time accumulator to a steering angle. The
//! product of two phase-shifted trig terms varies smoothly in space and time,
//! which is enough coherence for a drifting field without a real gradient
//! noise implementation.

use glam::DVec2;
use std::f64::consts::TAU;

/// Spatial frequency of the field in both axes.
const SPATIAL_FREQ: f64 = 0.01;
/// Time runs slower along y, which keeps the field from pulsing in lockstep.
const TIME_SKEW: f64 = 0.7;

/// Steering angle in radians at `pos` for the given time accumulator.
///
/// The underlying noise value lies in [-1, 1], so the angle covers
/// [-2π, 2π]; directions repeat over that range, which is harmless.
pub fn field_angle(pos: DVec2, time: f64) -> f64 {
    let n = (pos.x * SPATIAL_FREQ + time).sin() * (pos.y * SPATIAL_FREQ + time * TIME_SKEW).cos();
    n * TAU
}
