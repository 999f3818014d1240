//! Error types for the flowcanvas core.

use thiserror::Error;

/// Errors produced by animator and rendering operations.
#[derive(Debug, Error)]
pub enum AnimatorError {
    /// The drawing surface had zero or negative area at construction or resize.
    #[error("invalid surface: {width}x{height} has no positive area")]
    InvalidSurface { width: f64, height: f64 },

    /// The raster target could not be materialized or was lost mid-run.
    /// Recoverable from the host's perspective: stop ticking, rebuild the surface.
    #[error("drawing surface unavailable: {0}")]
    SurfaceUnavailable(String),

    /// A requested preset name was not recognized by the registry.
    #[error("unknown preset: {0}")]
    UnknownPreset(String),

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A palette could not be constructed from the given colors.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// An I/O failure while writing a snapshot.
    #[error("io error: {0}")]
    Io(String),
}
