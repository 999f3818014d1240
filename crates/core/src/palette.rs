//! Fixed color palettes sampled by random pick or index parity.
//!
//! Particles take a uniformly random stop at creation; wave curves alternate
//! stops by curve index. Both built-in palettes carry the two-stop pairs the
//! animation presets were designed around.

use crate::color::Srgb;
use crate::error::AnimatorError;
use crate::prng::Xorshift64;
use serde::{Deserialize, Serialize};

/// Palette names accepted by [`Palette::from_name`].
const PALETTE_NAMES: &[&str] = &["blossom", "coral"];

/// An ordered list of color stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Srgb>,
}

impl Palette {
    /// Creates a palette from color stops. Requires at least one stop.
    pub fn new(colors: Vec<Srgb>) -> Result<Self, AnimatorError> {
        if colors.is_empty() {
            return Err(AnimatorError::InvalidPalette(
                "palette requires at least 1 color".to_string(),
            ));
        }
        Ok(Self { colors })
    }

    /// Creates a palette by parsing hex color strings.
    pub fn from_hex(hexes: &[&str]) -> Result<Self, AnimatorError> {
        let colors: Result<Vec<Srgb>, AnimatorError> =
            hexes.iter().map(|h| Srgb::from_hex(h)).collect();
        Self::new(colors?)
    }

    /// Soft pink / mint pair used by the flowing preset.
    pub fn blossom() -> Self {
        Self::from_hex(&["#E8A0BF", "#AEE2D9"]).expect("built-in palette is valid")
    }

    /// Coral / teal pair used by the aura preset.
    pub fn coral() -> Self {
        Self::from_hex(&["#FF6F61", "#6ECDBE"]).expect("built-in palette is valid")
    }

    /// Looks up a built-in palette by name.
    pub fn from_name(name: &str) -> Result<Self, AnimatorError> {
        match name {
            "blossom" => Ok(Self::blossom()),
            "coral" => Ok(Self::coral()),
            _ => Err(AnimatorError::InvalidPalette(format!(
                "unknown palette '{name}', expected one of: {}",
                PALETTE_NAMES.join(", ")
            ))),
        }
    }

    /// All built-in palette names.
    pub fn list_names() -> &'static [&'static str] {
        PALETTE_NAMES
    }

    /// Number of color stops.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false for a constructed palette.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Uniformly random stop.
    pub fn pick(&self, rng: &mut Xorshift64) -> Srgb {
        self.colors[rng.next_usize(self.colors.len())]
    }

    /// Stop selected by `index % len`, giving the alternating wave coloring.
    pub fn by_parity(&self, index: usize) -> Srgb {
        self.colors[index % self.colors.len()]
    }
}
