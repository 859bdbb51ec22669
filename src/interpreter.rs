//! Interpreter that converts an L-System symbol string into a [`SegmentTrace`].
//!
//! The entry point is [`TraceInterpreter`]. Configure it with a
//! [`TraceConfig`] (or derive one from a grammar via
//! [`TraceInterpreter::for_system`]), then call
//! [`TraceInterpreter::trace`] with the expanded symbol string.

use crate::error::TraceError;
use crate::grammar::LindenmayerSystem;
use crate::trace::{Color, CylinderSegment, SegmentTrace};
use crate::turtle::{TurtleOp, TurtlePose};
use log::debug;

/// What to do with a `]` that has no matching `[`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnderflowPolicy {
    /// Abort the interpretation with [`TraceError::StackUnderflow`].
    #[default]
    Fail,
    /// Skip the stray `]` and keep walking.
    Skip,
}

/// What to do with symbols outside the table (lowercase letters, digits,
/// punctuation other than the reserved characters).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UnknownSymbolPolicy {
    /// Treat the symbol as a no-op. This is the conventional reading of
    /// L-System strings, where grammars carry bookkeeping characters the
    /// turtle never sees.
    #[default]
    Ignore,
    /// Abort with [`TraceError::UnknownSymbol`]. Useful to validate that a
    /// grammar only produces symbols the turtle understands.
    Fail,
}

/// Configuration for turtle interpretation.
#[derive(Clone, Debug)]
pub struct TraceConfig {
    /// Rotation per rotation symbol, in degrees.
    pub step_angle: f64,
    /// Initial rotation about the vertical (Z) axis, in degrees.
    pub start_angle: f64,
    /// Diameter of every emitted cylinder.
    pub diameter: f64,
    /// Color of every emitted cylinder.
    pub color: Color,
    /// Maximum depth of the branch stack.
    pub max_stack_depth: usize,
    /// Handling of a `]` on an empty stack.
    pub underflow: UnderflowPolicy,
    /// Handling of symbols outside the table.
    pub unknown_symbol: UnknownSymbolPolicy,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            step_angle: 90.0,
            start_angle: 0.0,
            diameter: 1.0,
            color: Color::ORANGE,
            max_stack_depth: 1024,
            underflow: UnderflowPolicy::default(),
            unknown_symbol: UnknownSymbolPolicy::default(),
        }
    }
}

/// Interprets expanded L-System strings as 3D turtle walks.
pub struct TraceInterpreter {
    config: TraceConfig,
}

impl TraceInterpreter {
    /// Creates a new interpreter with the given configuration.
    pub fn new(config: TraceConfig) -> Self {
        Self { config }
    }

    /// Creates an interpreter whose angles come from the grammar itself,
    /// with default segment styling.
    pub fn for_system(system: &LindenmayerSystem) -> Self {
        Self::new(TraceConfig {
            step_angle: system.adjustment_angle,
            start_angle: system.start_angle,
            ..TraceConfig::default()
        })
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &TraceConfig {
        &self.config
    }

    /// Walks `symbols` in order and returns the emitted cylinders.
    ///
    /// The turtle starts at the origin, heading +X rotated by the configured
    /// start angle about Z. The symbol table is fixed and case-sensitive:
    ///
    /// | Symbol | Effect |
    /// |---|---|
    /// | `X` | no-op (grammar placeholder) |
    /// | `*` / `/` | pitch ±step about local X |
    /// | `&` / `^` | roll ±step about local Y |
    /// | `+` / `-` | yaw ±step about local Z |
    /// | `[` / `]` | push / pop the full pose |
    /// | other `A`-`Z` | emit a cylinder along the heading, then advance |
    /// | anything else | per [`UnknownSymbolPolicy`] |
    ///
    /// Rotations right-multiply onto the accumulated orientation, so they
    /// compose in the turtle's local frame; the multiplication order is
    /// load-bearing for all branch geometry.
    ///
    /// An empty input yields an empty trace. A step angle of 0 is legal and
    /// draws a straight line. Unclosed `[` at end of input are not an error;
    /// the saved poses are simply discarded.
    pub fn trace(&self, symbols: &str) -> Result<SegmentTrace, TraceError> {
        let mut trace = SegmentTrace::new();
        let mut pose = TurtlePose::from_start_angle(self.config.start_angle);
        let mut stack: Vec<TurtlePose> = Vec::new();
        let step = self.config.step_angle.to_radians();

        for (index, symbol) in symbols.chars().enumerate() {
            match TurtleOp::from_symbol(symbol) {
                TurtleOp::Placeholder => {}
                TurtleOp::Pitch(sign) => pose.pitch(step * sign),
                TurtleOp::Roll(sign) => pose.roll(step * sign),
                TurtleOp::Yaw(sign) => pose.yaw(step * sign),

                TurtleOp::Push => {
                    if stack.len() >= self.config.max_stack_depth {
                        return Err(TraceError::StackOverflow {
                            index,
                            max_depth: self.config.max_stack_depth,
                        });
                    }
                    stack.push(pose);
                }
                TurtleOp::Pop => match stack.pop() {
                    Some(saved) => pose = saved,
                    None => match self.config.underflow {
                        UnderflowPolicy::Fail => {
                            return Err(TraceError::StackUnderflow { index });
                        }
                        UnderflowPolicy::Skip => {}
                    },
                },

                TurtleOp::Draw => {
                    trace.add_segment(CylinderSegment {
                        position: pose.position,
                        direction: pose.heading(),
                        color: self.config.color,
                        diameter: self.config.diameter,
                    });
                    pose.advance();
                }

                TurtleOp::Unknown => match self.config.unknown_symbol {
                    UnknownSymbolPolicy::Ignore => {}
                    UnknownSymbolPolicy::Fail => {
                        return Err(TraceError::UnknownSymbol { symbol, index });
                    }
                },
            }
        }

        debug!(
            "traced {} symbols into {} segments",
            symbols.chars().count(),
            trace.len()
        );
        Ok(trace)
    }
}
