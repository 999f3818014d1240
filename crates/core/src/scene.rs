//! Draw-command scene model.
//!
//! `advance` yields a `Scene`: an ordered list of resolution-independent draw
//! commands the host rasterizes onto its surface. Order is z-order;
//! later commands paint over earlier ones.

use crate::color::Srgb;
use glam::DVec2;

/// Soft glow attached to a disc or polyline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Glow {
    /// Blur radius in surface units.
    pub blur: f64,
    pub color: Srgb,
}

/// A single draw command.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Filled circle.
    Disc {
        center: DVec2,
        radius: f64,
        color: Srgb,
        alpha: f64,
        glow: Option<Glow>,
    },
    /// Straight connection line, one pixel wide.
    Segment {
        from: DVec2,
        to: DVec2,
        color: Srgb,
        alpha: f64,
    },
    /// Open polyline through the points in order.
    Polyline {
        points: Vec<DVec2>,
        color: Srgb,
        alpha: f64,
        width: f64,
        glow: Option<Glow>,
    },
}

/// An ordered frame worth of draw commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scene {
    cmds: Vec<DrawCmd>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Preallocates for an expected command count.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            cmds: Vec::with_capacity(cap),
        }
    }

    pub fn push(&mut self, cmd: DrawCmd) {
        self.cmds.push(cmd);
    }

    pub fn len(&self) -> usize {
        self.cmds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cmds.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawCmd> {
        self.cmds.iter()
    }

    /// Number of disc commands in the frame.
    pub fn disc_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Disc { .. }))
            .count()
    }

    /// Number of segment commands in the frame.
    pub fn segment_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Segment { .. }))
            .count()
    }

    /// Number of polyline commands in the frame.
    pub fn polyline_count(&self) -> usize {
        self.cmds
            .iter()
            .filter(|c| matches!(c, DrawCmd::Polyline { .. }))
            .count()
    }
}

impl<'a> IntoIterator for &'a Scene {
    type Item = &'a DrawCmd;
    type IntoIter = std::slice::Iter<'a, DrawCmd>;

    fn into_iter(self) -> Self::IntoIter {
        self.cmds.iter()
    }
}
