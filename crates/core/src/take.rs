//! Reproducible description of a rendered frame.
//!
//! A [`Take`] captures everything needed to recreate a snapshot: preset name,
//! surface dimensions, parameter overrides, PRNG seed, frame count, and the
//! stationary pointer position used during the run. Two identical takes fed
//! to the same binary produce bit-identical output.

use crate::error::AnimatorError;
use crate::pointer::Pointer;
use serde::{Deserialize, Serialize};

/// Reproducible snapshot description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Take {
    pub preset: String,
    pub width: f64,
    pub height: f64,
    pub params: serde_json::Value,
    pub seed: u64,
    pub frames: usize,
    pub pointer: Pointer,
}

impl Take {
    /// Creates a take with empty params, zero frames, and an offscreen pointer.
    pub fn new(preset: &str, width: f64, height: f64, seed: u64) -> Self {
        Self {
            preset: preset.to_string(),
            width,
            height,
            params: serde_json::Value::Object(serde_json::Map::new()),
            seed,
            frames: 0,
            pointer: Pointer::OFFSCREEN,
        }
    }

    /// Checks that the surface described by this take has positive finite area.
    pub fn validate(&self) -> Result<(), AnimatorError> {
        if !(self.width > 0.0 && self.height > 0.0)
            || !self.width.is_finite()
            || !self.height.is_finite()
        {
            return Err(AnimatorError::InvalidSurface {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_defaults() {
        let t = Take::new("flowing", 800.0, 600.0, 42);
        assert_eq!(t.preset, "flowing");
        assert_eq!(t.frames, 0);
        assert_eq!(t.pointer, Pointer::OFFSCREEN);
        assert_eq!(t.params, serde_json::json!({}));
    }

    #[test]
    fn json_round_trip() {
        let mut t = Take::new("aura", 1024.0, 500.0, 8675309);
        t.params = serde_json::json!({"emit_probability": 0.3, "wave_count": 8});
        t.frames = 1000;
        t.pointer = Pointer::new(400.0, 300.0);
        let json = serde_json::to_string_pretty(&t).unwrap();
        let restored: Take = serde_json::from_str(&json).unwrap();
        assert_eq!(t, restored);
    }

    #[test]
    fn validate_accepts_positive_area() {
        assert!(Take::new("flowing", 1.0, 1.0, 0).validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_negative_and_non_finite() {
        assert!(Take::new("flowing", 0.0, 600.0, 0).validate().is_err());
        assert!(Take::new("flowing", 800.0, -600.0, 0).validate().is_err());
        assert!(Take::new("flowing", f64::NAN, 600.0, 0).validate().is_err());
        assert!(Take::new("flowing", f64::INFINITY, 600.0, 0)
            .validate()
            .is_err());
    }
}
