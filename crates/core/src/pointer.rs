//! Latest pointer sample in surface space.
//!
//! The host owns pointer tracking; the animator only ever reads the most
//! recent sample, threaded explicitly into `advance` so the simulation holds
//! no ambient event state.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// A pointer coordinate in surface space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    /// A sample far outside any interaction radius. Hosts without a pointer
    /// (headless rendering, tests) pass this to run the field undisturbed.
    pub const OFFSCREEN: Pointer = Pointer {
        x: -10_000.0,
        y: -10_000.0,
    };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Position as a vector.
    pub fn pos(self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Euclidean distance to a point.
    pub fn distance_to(self, p: DVec2) -> f64 {
        self.pos().distance(p)
    }
}

impl Default for Pointer {
    fn default() -> Self {
        Self::OFFSCREEN
    }
}
