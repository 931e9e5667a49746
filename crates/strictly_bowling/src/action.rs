//! First-class roll actions.
//!
//! A roll is a domain event: the frame it lands in and the pins it took.
//! Sequences of rolls can be stored and replayed into a fresh game.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One roll: `pins` knocked down in the frame at `frame`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Roll {
    /// Position of the frame the roll lands in.
    pub frame: u32,
    /// Pins knocked down.
    pub pins: u32,
}

impl Roll {
    /// Creates a new roll.
    #[instrument]
    pub fn new(frame: u32, pins: u32) -> Self {
        Self { frame, pins }
    }

    /// Returns the frame position.
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Returns the pins knocked down.
    pub fn pins(&self) -> u32 {
        self.pins
    }
}

impl std::fmt::Display for Roll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "frame {} <- {} pins", self.frame, self.pins)
    }
}
