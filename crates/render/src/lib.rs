#![deny(unsafe_code)]
//! Preset registry and CPU-side scene rasterization.
//!
//! Sits between `flowcanvas-core` (the `Animator` trait and scene model) and
//! the animator implementation. The CLI depends on this crate for name-based
//! preset construction and offline snapshots.

pub mod raster;

#[cfg(feature = "png")]
pub mod snapshot;

use flowcanvas_animator::{AnimatorConfig, FieldAnimator};
use flowcanvas_core::{AnimatorError, Srgb};
use serde_json::Value;

/// All recognized preset names.
const PRESET_NAMES: &[&str] = &["flowing", "aura"];

/// Constructs a configured animator by preset name, with JSON overrides
/// applied on top of the preset.
///
/// Returns `AnimatorError::UnknownPreset` if the name is not recognized.
pub fn from_name(
    name: &str,
    width: f64,
    height: f64,
    seed: u64,
    params: &Value,
) -> Result<FieldAnimator, AnimatorError> {
    let base = match name {
        "flowing" => AnimatorConfig::flowing(),
        "aura" => AnimatorConfig::aura(),
        _ => return Err(AnimatorError::UnknownPreset(name.to_string())),
    };
    FieldAnimator::from_json(width, height, seed, base, params)
}

/// All recognized preset names.
pub fn list_presets() -> &'static [&'static str] {
    PRESET_NAMES
}

/// Background color a preset was designed against.
pub fn background(name: &str) -> Result<Srgb, AnimatorError> {
    match name {
        "flowing" => Srgb::from_hex("#3A2E39"),
        "aura" => Srgb::from_hex("#191938"),
        _ => Err(AnimatorError::UnknownPreset(name.to_string())),
    }
}
