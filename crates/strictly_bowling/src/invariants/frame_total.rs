//! Frame total invariant: a frame's rolls never add up to more than ten.

use super::Invariant;
use crate::frame::{Frame, MAX_PINS};

/// Invariant: The sum of a frame's rolls is at most 10.
pub struct FrameTotalInvariant;

impl Invariant<Frame> for FrameTotalInvariant {
    fn holds(frame: &Frame) -> bool {
        // Saturating so corrupted frames report instead of overflowing.
        let total = frame
            .rolls()
            .iter()
            .fold(0u32, |acc, &pins| acc.saturating_add(pins));
        total <= MAX_PINS
    }

    fn description() -> &'static str {
        "Frame rolls add up to at most 10 pins"
    }
}
