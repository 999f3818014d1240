//! Software rasterizer for a [`Scene`].
//!
//! Source-over alpha blending into an RGBA8 buffer. Discs get an antialiased
//! edge; glows are approximated with a quadratic-falloff halo; strokes plot
//! each covered pixel exactly once per command so overlapping samples within
//! one stroke do not darken.

use flowcanvas_core::{AnimatorError, DrawCmd, Scene, Srgb};
use glam::DVec2;
use std::collections::HashSet;

/// An RGBA8 surface with f64 blending math.
pub struct Raster {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Raster {
    /// Creates a surface filled with `background` at full opacity.
    ///
    /// Returns `InvalidSurface` for a zero dimension and `SurfaceUnavailable`
    /// if the pixel buffer cannot be sized.
    pub fn new(width: u32, height: u32, background: Srgb) -> Result<Self, AnimatorError> {
        if width == 0 || height == 0 {
            return Err(AnimatorError::InvalidSurface {
                width: width as f64,
                height: height as f64,
            });
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(|| {
                AnimatorError::SurfaceUnavailable(format!(
                    "pixel buffer for {width}x{height} exceeds addressable memory"
                ))
            })?;
        let bg = background.to_rgba8(1.0);
        let mut data = vec![0u8; len];
        for px in data.chunks_exact_mut(4) {
            px.copy_from_slice(&bg);
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Consumes the raster, returning the RGBA8 buffer.
    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }

    /// Source-over blend of one pixel. Out-of-bounds coordinates are ignored.
    fn blend(&mut self, x: i64, y: i64, color: Srgb, alpha: f64) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let a = alpha.clamp(0.0, 1.0);
        if a == 0.0 {
            return;
        }
        let idx = (y as usize * self.width as usize + x as usize) * 4;
        for (c, src) in [color.r, color.g, color.b].into_iter().enumerate() {
            let dst = self.data[idx + c] as f64 / 255.0;
            self.data[idx + c] = ((src * a + dst * (1.0 - a)) * 255.0).round() as u8;
        }
        // Snapshot output stays opaque; the background is fully opaque.
        self.data[idx + 3] = 255;
    }

    /// Filled disc with a half-pixel antialiased rim and an optional halo.
    pub fn fill_disc(
        &mut self,
        center: DVec2,
        radius: f64,
        color: Srgb,
        alpha: f64,
        glow: Option<(f64, Srgb)>,
    ) {
        if let Some((blur, glow_color)) = glow {
            self.halo(center, radius, blur, glow_color, alpha);
        }
        if radius <= 0.0 {
            return;
        }
        let (x0, y0, x1, y1) = bounds(center, radius + 1.0);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = pixel_center(x, y).distance(center);
                let coverage = (radius - d + 0.5).clamp(0.0, 1.0);
                if coverage > 0.0 {
                    self.blend(x, y, color, alpha * coverage);
                }
            }
        }
    }

    /// Soft halo from `radius` out to `radius + blur`, quadratic falloff.
    fn halo(&mut self, center: DVec2, radius: f64, blur: f64, color: Srgb, alpha: f64) {
        if blur <= 0.0 {
            return;
        }
        let outer = radius + blur;
        let (x0, y0, x1, y1) = bounds(center, outer + 1.0);
        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = pixel_center(x, y).distance(center);
                if d >= outer {
                    continue;
                }
                let t = ((outer - d) / blur).clamp(0.0, 1.0);
                self.blend(x, y, color, alpha * 0.5 * t * t);
            }
        }
    }

    /// Strokes the open path through `points` at the given width, blending
    /// every covered pixel exactly once.
    pub fn stroke_path(&mut self, points: &[DVec2], color: Srgb, alpha: f64, width: f64) {
        let mut covered: HashSet<(i64, i64)> = HashSet::new();
        for pair in points.windows(2) {
            collect_segment_pixels(pair[0], pair[1], width, &mut covered);
        }
        for (x, y) in covered {
            self.blend(x, y, color, alpha);
        }
    }

    /// Single connection segment, one pixel wide.
    pub fn stroke_segment(&mut self, from: DVec2, to: DVec2, color: Srgb, alpha: f64) {
        let mut covered: HashSet<(i64, i64)> = HashSet::new();
        collect_segment_pixels(from, to, 1.0, &mut covered);
        for (x, y) in covered {
            self.blend(x, y, color, alpha);
        }
    }
}

/// Integer bounding box around `center` with the given reach.
fn bounds(center: DVec2, reach: f64) -> (i64, i64, i64, i64) {
    (
        (center.x - reach).floor() as i64,
        (center.y - reach).floor() as i64,
        (center.x + reach).ceil() as i64,
        (center.y + reach).ceil() as i64,
    )
}

fn pixel_center(x: i64, y: i64) -> DVec2 {
    DVec2::new(x as f64 + 0.5, y as f64 + 0.5)
}

/// Collects the pixels covered by a stroked segment into `covered`.
///
/// Samples along the segment at half-pixel spacing and stamps a square of
/// pixels within the stroke's half width around each sample.
fn collect_segment_pixels(a: DVec2, b: DVec2, width: f64, covered: &mut HashSet<(i64, i64)>) {
    let half = (width / 2.0).max(0.5);
    let reach = half.ceil() as i64;
    let len = a.distance(b);
    let steps = (len * 2.0).ceil() as usize + 1;
    for s in 0..steps {
        let t = if steps == 1 {
            0.0
        } else {
            s as f64 / (steps - 1) as f64
        };
        let p = a.lerp(b, t);
        let cx = p.x.floor() as i64;
        let cy = p.y.floor() as i64;
        for dy in -reach..=reach {
            for dx in -reach..=reach {
                let q = pixel_center(cx + dx, cy + dy);
                // Distance from pixel center to the sample, not the true
                // segment; at half-pixel sampling the error is invisible.
                if q.distance(p) <= half {
                    covered.insert((cx + dx, cy + dy));
                }
            }
        }
    }
}

/// Rasterizes a scene over `background` into an RGBA8 buffer of
/// `width * height * 4` bytes.
pub fn render_scene(
    scene: &Scene,
    width: u32,
    height: u32,
    background: Srgb,
) -> Result<Vec<u8>, AnimatorError> {
    let mut raster = Raster::new(width, height, background)?;
    for cmd in scene {
        match cmd {
            DrawCmd::Disc {
                center,
                radius,
                color,
                alpha,
                glow,
            } => raster.fill_disc(
                *center,
                *radius,
                *color,
                *alpha,
                glow.as_ref().map(|g| (g.blur, g.color)),
            ),
            DrawCmd::Segment {
                from,
                to,
                color,
                alpha,
            } => raster.stroke_segment(*from, *to, *color, *alpha),
            DrawCmd::Polyline {
                points,
                color,
                alpha,
                width: stroke,
                glow,
            } => {
                if let Some(g) = glow {
                    raster.stroke_path(points, g.color, alpha * 0.25, stroke + g.blur);
                }
                raster.stroke_path(points, *color, *alpha, *stroke);
            }
        }
    }
    Ok(raster.into_rgba())
}
