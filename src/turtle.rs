//! Turtle pose state and the symbol-to-operation table.

use glam::{DMat3, DVec3};
use serde::{Deserialize, Serialize};

/// The full state of the drawing turtle at one point of interpretation.
///
/// The orientation is a plain 3×3 rotation matrix rather than a quaternion so
/// that the elementary axis rotations compose with the fixed axis held exactly
/// identity, with no drift across thousands of compositions in deep recursion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TurtlePose {
    /// Current world-space position of the "cursor".
    pub position: DVec3,

    /// Current orientation. Invariant: orthonormal, composed only from
    /// elementary axis rotations.
    pub orientation: DMat3,
}

impl Default for TurtlePose {
    fn default() -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DMat3::IDENTITY,
        }
    }
}

impl TurtlePose {
    /// Initial pose at the origin, heading +X rotated by `start_angle` degrees
    /// about the vertical (Z) axis.
    pub fn from_start_angle(start_angle: f64) -> Self {
        Self {
            position: DVec3::ZERO,
            orientation: DMat3::from_rotation_z(start_angle.to_radians()),
        }
    }

    /// Returns the turtle's heading: the orientation applied to local +X.
    pub fn heading(&self) -> DVec3 {
        self.orientation * DVec3::X
    }

    /// Rotates the turtle around its local X axis by `angle` radians (Pitch).
    pub fn pitch(&mut self, angle: f64) {
        self.orientation *= DMat3::from_rotation_x(angle);
    }

    /// Rotates the turtle around its local Y axis by `angle` radians (Roll).
    pub fn roll(&mut self, angle: f64) {
        self.orientation *= DMat3::from_rotation_y(angle);
    }

    /// Rotates the turtle around its local Z axis by `angle` radians (Yaw).
    pub fn yaw(&mut self, angle: f64) {
        self.orientation *= DMat3::from_rotation_z(angle);
    }

    /// Moves the turtle one step along its current heading.
    pub fn advance(&mut self) {
        self.position += self.heading();
    }
}

/// Operations the turtle performs, one per input symbol.
///
/// The symbol table is fixed and case-sensitive. The `f64` payload on the
/// rotation variants is the sign applied to the configured step angle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TurtleOp {
    /// Grammar bookkeeping symbol (`X`); no effect on the pose.
    Placeholder,
    /// Rotate around local X (`*` / `/`).
    Pitch(f64),
    /// Rotate around local Y (`&` / `^`).
    Roll(f64),
    /// Rotate around local Z (`+` / `-`).
    Yaw(f64),
    /// Save the pose onto the branch stack (`[`).
    Push,
    /// Restore the most recently pushed pose (`]`).
    Pop,
    /// Emit a cylinder along the heading, then advance (any `A`-`Z` not
    /// reserved above).
    Draw,
    /// Symbol outside the table; handling is a config policy.
    Unknown,
}

impl TurtleOp {
    /// Classifies one input symbol.
    pub fn from_symbol(symbol: char) -> Self {
        match symbol {
            'X' => Self::Placeholder,
            '*' => Self::Pitch(1.0),
            '/' => Self::Pitch(-1.0),
            '&' => Self::Roll(1.0),
            '^' => Self::Roll(-1.0),
            '+' => Self::Yaw(1.0),
            '-' => Self::Yaw(-1.0),
            '[' => Self::Push,
            ']' => Self::Pop,
            'A'..='Z' => Self::Draw,
            _ => Self::Unknown,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn pitch_leaves_heading_fixed() {
        // The heading is local +X and pitch rotates about local X, so the
        // heading must be bitwise unchanged, not merely close.
        let mut pose = TurtlePose::default();
        let before = pose.heading();
        pose.pitch(0.3);
        assert_eq!(pose.heading(), before);
    }

    #[test]
    fn draw_symbols_are_the_unreserved_capitals() {
        assert_eq!(TurtleOp::from_symbol('F'), TurtleOp::Draw);
        assert_eq!(TurtleOp::from_symbol('A'), TurtleOp::Draw);
        assert_eq!(TurtleOp::from_symbol('X'), TurtleOp::Placeholder);
        assert_eq!(TurtleOp::from_symbol('f'), TurtleOp::Unknown);
        assert_eq!(TurtleOp::from_symbol('7'), TurtleOp::Unknown);
    }
}
