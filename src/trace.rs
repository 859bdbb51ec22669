//! Engine-agnostic output records produced by interpretation.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// An RGB color referencing no particular palette or color space.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);
    pub const GREEN: Color = Color::new(0, 255, 0);
    pub const BLUE: Color = Color::new(0, 0, 255);
    pub const ORANGE: Color = Color::new(255, 165, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// A single directed cylinder emitted by a draw symbol.
///
/// Immutable once emitted. `direction` is the turtle's heading at emission
/// time and doubles as the cylinder's length vector: the segment runs from
/// `position` to `position + direction`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CylinderSegment {
    /// World-space start of the cylinder (the turtle's position).
    pub position: DVec3,

    /// World-space axis of the cylinder (the turtle's heading).
    pub direction: DVec3,

    /// Render color, uniform over the whole trace.
    pub color: Color,

    /// Cylinder diameter, uniform over the whole trace.
    pub diameter: f64,
}

/// The complete geometric result of one interpretation run.
///
/// This is the only state that outlives the interpreter call; hand it to a
/// renderer, plotter, or mesh builder.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentTrace {
    /// Emitted cylinders, in emission order.
    pub segments: Vec<CylinderSegment>,
}

impl SegmentTrace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_segment(&mut self, segment: CylinderSegment) {
        self.segments.push(segment);
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CylinderSegment> {
        self.segments.iter()
    }
}
