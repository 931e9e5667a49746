//! Error types for roll validation, game operations and configuration.

use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The rule a rejected roll broke.
///
/// Variants are listed in the order the rules are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum RollErrorKind {
    /// The frame already holds two rolls.
    #[display("Frame {frame} can only contain 2 rolls")]
    TooManyRolls {
        /// Position of the full frame.
        frame: u32,
    },

    /// A single roll knocked down more pins than a lane holds.
    #[display("Roll of {pins} in frame {frame} must be no greater than 10")]
    RollExceedsMax {
        /// Position of the frame rolled into.
        frame: u32,
        /// Pins claimed by the roll.
        pins: u32,
    },

    /// The frame's pins would add up to more than a lane holds.
    #[display("Frame {frame} cannot contain more than 10 (has {current}, rolled {pins})")]
    FrameTotalExceeded {
        /// Position of the frame rolled into.
        frame: u32,
        /// Pins already recorded in the frame.
        current: u32,
        /// Pins claimed by the roll.
        pins: u32,
    },
}

/// A rejected roll, with the location of the call that attempted it.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Roll error: {} at {}:{}", kind, file, line)]
pub struct RollError {
    /// Which rule the roll broke.
    pub kind: RollErrorKind,
    /// Line number where the roll was attempted.
    pub line: u32,
    /// Source file where the roll was attempted.
    pub file: &'static str,
}

impl RollError {
    /// Creates a new roll error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: RollErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns the broken rule.
    pub fn kind(&self) -> &RollErrorKind {
        &self.kind
    }

    /// Human-readable description of the broken rule.
    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}

/// Error returned by the checked game entry points.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error, From)]
pub enum GameError {
    /// The roll itself was illegal for its frame.
    #[display("{_0}")]
    #[from]
    Roll(RollError),

    /// The position lies outside the configured frame limit.
    #[display("Frame {position} is outside the configured limit of {limit} frames")]
    FrameOutOfRange {
        /// Requested frame position.
        position: u32,
        /// Configured number of frames.
        limit: u32,
    },
}

impl GameError {
    /// Returns the roll rule that was broken, if this is a roll error.
    pub fn roll_kind(&self) -> Option<&RollErrorKind> {
        match self {
            GameError::Roll(err) => Some(err.kind()),
            GameError::FrameOutOfRange { .. } => None,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
