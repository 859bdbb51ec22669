//! Lindenmayer system description and string rewriting.
//!
//! A [`LindenmayerSystem`] is built in code: an axiom, a set of per-symbol
//! productions, and the two angles the turtle needs (start angle about the
//! vertical axis, per-step adjustment angle). [`LindenmayerSystem::expand`]
//! rewrites the axiom to the requested recursion depth; feed the result to
//! [`TraceInterpreter::trace`](crate::TraceInterpreter::trace).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// An L-System grammar: axiom plus context-free productions.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct LindenmayerSystem {
    /// Human-readable name of the system.
    pub name: String,

    /// The initial string, generation zero.
    pub axiom: String,

    /// Per-symbol rewrite rules. Symbols without a rule rewrite to themselves.
    pub productions: HashMap<char, String>,

    /// Initial turtle rotation about the vertical (Z) axis, in degrees.
    pub start_angle: f64,

    /// Rotation applied per rotation symbol, in degrees.
    pub adjustment_angle: f64,
}

impl LindenmayerSystem {
    /// Returns the production for `symbol`, if the grammar has one.
    pub fn production(&self, symbol: char) -> Option<&str> {
        self.productions.get(&symbol).map(String::as_str)
    }

    /// Expands the axiom by `depth` rewriting passes.
    ///
    /// Each pass replaces every character simultaneously; depth 0 returns the
    /// axiom unchanged. A production may be empty, erasing its symbol.
    pub fn expand(&self, depth: u32) -> String {
        let mut state = self.axiom.clone();
        for _ in 0..depth {
            let mut next = String::with_capacity(state.len() * 2);
            for symbol in state.chars() {
                match self.production(symbol) {
                    Some(replacement) => next.push_str(replacement),
                    None => next.push(symbol),
                }
            }
            state = next;
        }
        state
    }
}
