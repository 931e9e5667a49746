//! Contract-based validation for rolls.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} roll {Q}

use crate::error::{RollError, RollErrorKind};
use crate::frame::{Frame, MAX_PINS, MAX_ROLLS};
use crate::invariants::{FrameInvariants, InvariantSet, InvariantViolation};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RollError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Roll Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the frame has room for another roll.
pub struct FrameHasRoom;

impl FrameHasRoom {
    /// Fails with `TooManyRolls` once two rolls are recorded.
    #[track_caller]
    #[instrument(skip(frame), fields(frame = frame.position()))]
    pub fn check(pins: u32, frame: &Frame) -> Result<(), RollError> {
        if frame.rolls().len() >= MAX_ROLLS {
            Err(RollError::new(RollErrorKind::TooManyRolls {
                frame: frame.position(),
            }))
        } else {
            Ok(())
        }
    }
}

/// Precondition: a single roll takes at most ten pins.
pub struct PinsWithinLane;

impl PinsWithinLane {
    /// Fails with `RollExceedsMax` for more than ten pins.
    #[track_caller]
    #[instrument(skip(frame), fields(frame = frame.position()))]
    pub fn check(pins: u32, frame: &Frame) -> Result<(), RollError> {
        if pins > MAX_PINS {
            Err(RollError::new(RollErrorKind::RollExceedsMax {
                frame: frame.position(),
                pins,
            }))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the frame's pins stay within ten.
pub struct FrameTotalWithinLane;

impl FrameTotalWithinLane {
    /// Fails with `FrameTotalExceeded` when the roll would overfill the frame.
    #[track_caller]
    #[instrument(skip(frame), fields(frame = frame.position()))]
    pub fn check(pins: u32, frame: &Frame) -> Result<(), RollError> {
        let current = frame.raw_total();
        if current.saturating_add(pins) > MAX_PINS {
            Err(RollError::new(RollErrorKind::FrameTotalExceeded {
                frame: frame.position(),
                current,
                pins,
            }))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: all roll rules, in reporting order.
pub struct LegalRoll;

impl LegalRoll {
    /// Validates all preconditions for a roll.
    #[track_caller]
    #[instrument(skip(frame), fields(frame = frame.position()))]
    pub fn check(pins: u32, frame: &Frame) -> Result<(), RollError> {
        FrameHasRoom::check(pins, frame)?;
        PinsWithinLane::check(pins, frame)?;
        FrameTotalWithinLane::check(pins, frame)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Roll Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for adding a roll to a frame.
///
/// Preconditions:
/// - Frame has fewer than two rolls
/// - Roll is at most ten pins
/// - Frame total stays at most ten pins
///
/// Postconditions:
/// - Earlier rolls are untouched and exactly one roll was appended
/// - All frame invariants hold
pub struct RollContract;

impl Contract<Frame, u32> for RollContract {
    #[track_caller]
    fn pre(frame: &Frame, pins: &u32) -> Result<(), RollError> {
        LegalRoll::check(*pins, frame)
    }

    fn post(before: &Frame, after: &Frame) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        let appended = after.rolls().len() == before.rolls().len() + 1
            && after.rolls().starts_with(before.rolls());
        if !appended {
            violations.push(InvariantViolation::new(
                "Roll history was rewritten instead of appended",
            ));
        }

        if let Err(found) = FrameInvariants::check_all(after) {
            violations.extend(found);
        }

        if violations.is_empty() {
            Ok(())
        } else {
            for violation in &violations {
                warn!(frame = after.position(), description = %violation.description, "Postcondition failed");
            }
            Err(violations)
        }
    }
}
