//! A single frame: up to two rolls and the facts derived from them.

use crate::contracts::{Contract, RollContract};
use crate::error::RollError;
use crate::invariants::{FrameInvariants, InvariantSet, InvariantViolation};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Pins standing at the start of a frame.
pub const MAX_PINS: u32 = 10;

/// Rolls a frame can hold.
pub const MAX_ROLLS: usize = 2;

/// Classification of a frame by its rolls.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum FrameKind {
    /// No rolls yet.
    Empty,
    /// Pins left standing (or only one non-strike roll so far).
    Open,
    /// All ten pins over two rolls.
    Spare,
    /// All ten pins with the first roll.
    Strike,
}

/// One frame of a game.
///
/// Rolls are appended through [`Frame::add_roll`], which enforces the frame
/// rules; they are never removed or reordered. Deserialized frames are
/// checked against the frame invariants and rejected if any fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "FrameRecord")]
pub struct Frame {
    pub(crate) position: u32,
    pub(crate) rolls: Vec<u32>,
}

/// Unchecked wire form of a [`Frame`].
#[derive(Deserialize)]
struct FrameRecord {
    position: u32,
    rolls: Vec<u32>,
}

impl TryFrom<FrameRecord> for Frame {
    type Error = InvariantViolation;

    fn try_from(record: FrameRecord) -> Result<Self, Self::Error> {
        let frame = Frame {
            position: record.position,
            rolls: record.rolls,
        };
        FrameInvariants::check_all(&frame).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(frame = frame.position, %descriptions, "Rejected frame");
            InvariantViolation::new(format!("Frame {}: {}", frame.position, descriptions))
        })?;
        Ok(frame)
    }
}

impl Frame {
    /// Creates an empty frame at the given position.
    #[instrument]
    pub fn new(position: u32) -> Self {
        Self {
            position,
            rolls: Vec::with_capacity(MAX_ROLLS),
        }
    }

    /// Returns the frame's position in the game.
    pub fn position(&self) -> u32 {
        self.position
    }

    /// Returns the recorded rolls in order.
    pub fn rolls(&self) -> &[u32] {
        &self.rolls
    }

    /// Records a roll of `pins`.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - `TooManyRolls` if the frame already holds two rolls
    /// - `RollExceedsMax` if `pins` is greater than 10
    /// - `FrameTotalExceeded` if the frame would hold more than 10 pins
    ///
    /// A rejected roll leaves the frame unchanged.
    #[track_caller]
    #[instrument(skip(self), fields(frame = self.position, rolls = self.rolls.len()))]
    pub fn add_roll(&mut self, pins: u32) -> Result<(), RollError> {
        if let Err(err) = RollContract::pre(self, &pins) {
            warn!(error = %err.kind, "Roll rejected");
            return Err(err);
        }

        #[cfg(debug_assertions)]
        let before = self.clone();

        self.rolls.push(pins);

        #[cfg(debug_assertions)]
        assert!(
            RollContract::post(&before, self).is_ok(),
            "Frame invariants violated after roll"
        );

        debug!(raw_total = self.raw_total(), kind = %self.kind(), "Roll recorded");
        Ok(())
    }

    /// Sum of the frame's own rolls, excluding any bonus.
    pub fn raw_total(&self) -> u32 {
        self.rolls.iter().sum()
    }

    /// Returns the roll at `index`, or 0 when it has not been bowled.
    pub fn roll(&self, index: usize) -> u32 {
        self.rolls.get(index).copied().unwrap_or(0)
    }

    /// Returns true if at least one roll is recorded.
    pub fn has_rolls(&self) -> bool {
        !self.rolls.is_empty()
    }

    /// Returns true if the first roll took all ten pins.
    pub fn is_strike(&self) -> bool {
        self.has_rolls() && self.roll(0) == MAX_PINS
    }

    /// Returns true if the frame's rolls add up to ten.
    ///
    /// A strike also satisfies this; callers check [`Frame::is_strike`] first.
    pub fn is_spare(&self) -> bool {
        self.has_rolls() && self.raw_total() == MAX_PINS
    }

    /// Classifies the frame, checking strike before spare.
    pub fn kind(&self) -> FrameKind {
        if !self.has_rolls() {
            FrameKind::Empty
        } else if self.is_strike() {
            FrameKind::Strike
        } else if self.is_spare() {
            FrameKind::Spare
        } else {
            FrameKind::Open
        }
    }

    /// Returns true once the frame can take no further rolls in normal play.
    pub fn is_complete(&self) -> bool {
        self.is_strike() || self.rolls.len() >= MAX_ROLLS
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RollErrorKind;
    use strum::IntoEnumIterator;

    fn frame_with(rolls: &[u32]) -> Frame {
        let mut frame = Frame::new(1);
        for &pins in rolls {
            frame.add_roll(pins).expect("legal roll");
        }
        frame
    }

    #[test]
    fn test_empty_frame_has_no_score() {
        let frame = Frame::new(1);
        assert_eq!(frame.raw_total(), 0);
        assert!(!frame.has_rolls());
        assert!(!frame.is_strike());
        assert!(!frame.is_spare());
        assert_eq!(frame.kind(), FrameKind::Empty);
    }

    #[test]
    fn test_absent_rolls_read_as_zero() {
        let frame = frame_with(&[4]);
        assert_eq!(frame.roll(0), 4);
        assert_eq!(frame.roll(1), 0);
        assert_eq!(frame.roll(7), 0);
    }

    #[test]
    fn test_third_roll_rejected() {
        let mut frame = frame_with(&[1, 1]);
        let err = frame.add_roll(1).unwrap_err();
        assert_eq!(err.kind, RollErrorKind::TooManyRolls { frame: 1 });
        assert_eq!(frame.rolls(), &[1, 1]);
    }

    #[test]
    fn test_roll_over_ten_rejected() {
        let mut frame = Frame::new(4);
        let err = frame.add_roll(11).unwrap_err();
        assert_eq!(err.kind, RollErrorKind::RollExceedsMax { frame: 4, pins: 11 });
        assert!(!frame.has_rolls());
    }

    #[test]
    fn test_frame_total_over_ten_rejected() {
        let mut frame = frame_with(&[10]);
        let err = frame.add_roll(1).unwrap_err();
        assert_eq!(
            err.kind,
            RollErrorKind::FrameTotalExceeded {
                frame: 1,
                current: 10,
                pins: 1
            }
        );
        assert_eq!(frame.rolls(), &[10]);
    }

    #[test]
    fn test_too_many_rolls_checked_before_pin_limit() {
        let mut frame = frame_with(&[2, 3]);
        let err = frame.add_roll(11).unwrap_err();
        assert!(matches!(err.kind, RollErrorKind::TooManyRolls { .. }));
    }

    #[test]
    fn test_rejected_roll_reports_caller_location() {
        let mut frame = Frame::new(1);
        let err = frame.add_roll(12).unwrap_err();
        assert!(err.file.ends_with("frame.rs"));
    }

    #[test]
    fn test_kinds() {
        assert_eq!(frame_with(&[10]).kind(), FrameKind::Strike);
        assert_eq!(frame_with(&[0, 10]).kind(), FrameKind::Spare);
        assert_eq!(frame_with(&[6, 4]).kind(), FrameKind::Spare);
        assert_eq!(frame_with(&[6, 3]).kind(), FrameKind::Open);
        assert_eq!(frame_with(&[6]).kind(), FrameKind::Open);
    }

    #[test]
    fn test_strike_also_reads_as_spare() {
        let frame = frame_with(&[10]);
        assert!(frame.is_strike());
        assert!(frame.is_spare());
        assert_eq!(frame.kind(), FrameKind::Strike);
    }

    #[test]
    fn test_completion() {
        assert!(!Frame::new(1).is_complete());
        assert!(!frame_with(&[3]).is_complete());
        assert!(frame_with(&[3, 0]).is_complete());
        assert!(frame_with(&[10]).is_complete());
    }

    #[test]
    fn test_every_kind_is_reachable() {
        let samples: [&[u32]; 4] = [&[], &[1, 2], &[5, 5], &[10]];
        let seen: Vec<FrameKind> = samples.iter().map(|rolls| frame_with(rolls).kind()).collect();
        for kind in FrameKind::iter() {
            assert!(seen.contains(&kind), "{kind} not produced");
        }
    }
}
