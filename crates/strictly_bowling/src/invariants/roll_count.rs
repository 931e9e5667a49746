//! Roll count invariant: a frame never holds more than two rolls.

use super::Invariant;
use crate::frame::{Frame, MAX_ROLLS};

/// Invariant: At most two rolls per frame.
pub struct RollCountInvariant;

impl Invariant<Frame> for RollCountInvariant {
    fn holds(frame: &Frame) -> bool {
        frame.rolls().len() <= MAX_ROLLS
    }

    fn description() -> &'static str {
        "Frame holds at most 2 rolls"
    }
}
