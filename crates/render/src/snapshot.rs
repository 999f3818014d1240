//! PNG snapshots of a rasterized scene.
//!
//! Feature-gated behind `png` (default on) so embedders that rasterize into
//! their own surface can depend on this crate without pulling in `image`.

use crate::raster::render_scene;
use flowcanvas_core::{AnimatorError, Scene, Srgb};
use std::path::Path;

/// Rasterizes `scene` over `background` and writes it as a PNG.
///
/// Returns `SurfaceUnavailable` if the pixel buffer cannot be assembled into
/// an image, or `Io` on write failure.
pub fn write_png(
    scene: &Scene,
    width: u32,
    height: u32,
    background: Srgb,
    path: &Path,
) -> Result<(), AnimatorError> {
    let rgba = render_scene(scene, width, height, background)?;
    let img = image::RgbaImage::from_raw(width, height, rgba).ok_or_else(|| {
        AnimatorError::SurfaceUnavailable("RGBA buffer does not match image dimensions".into())
    })?;
    img.save(path).map_err(|e| AnimatorError::Io(e.to_string()))
}
