//! Pin range invariant: no single roll takes more than ten pins.

use super::Invariant;
use crate::frame::{Frame, MAX_PINS};

/// Invariant: Every roll is between 0 and 10 pins.
pub struct PinRangeInvariant;

impl Invariant<Frame> for PinRangeInvariant {
    fn holds(frame: &Frame) -> bool {
        frame.rolls().iter().all(|&pins| pins <= MAX_PINS)
    }

    fn description() -> &'static str {
        "Each roll takes at most 10 pins"
    }
}
