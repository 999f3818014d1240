//! The core `Animator` trait implemented by every frame-driven animation.
//!
//! Object safe so hosts can hold a `Box<dyn Animator>` and swap presets at
//! runtime.

use crate::error::AnimatorError;
use crate::pointer::Pointer;
use crate::scene::Scene;
use serde_json::Value;

/// A frame-driven animation producing draw commands.
///
/// The host calls [`advance`](Animator::advance) once per display refresh with
/// the latest pointer sample and rasterizes the returned [`Scene`]. All input
/// state (pointer, dimensions) is threaded in explicitly; an animator never
/// listens to ambient events itself.
pub trait Animator {
    /// Advances the animation by one frame and returns the frame's scene.
    fn advance(&mut self, pointer: Pointer) -> Result<Scene, AnimatorError>;

    /// Updates the surface dimensions. Existing animation state is kept;
    /// positions redistribute naturally over subsequent frames.
    ///
    /// Returns `AnimatorError::InvalidSurface` for a non-positive area.
    fn resize(&mut self, width: f64, height: f64) -> Result<(), AnimatorError>;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing the available parameters, their types, ranges, and
    /// defaults.
    fn param_schema(&self) -> Value;
}
