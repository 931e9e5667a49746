//! Pure ten-pin bowling scoring logic.
//!
//! A [`Game`] holds [`Frame`]s keyed by position. Rolls are added to a frame
//! one at a time and checked against the frame rules; the game total adds
//! each frame's own pins to the strike and spare bonuses it earns from the
//! rolls that follow.
//!
//! # Example
//!
//! ```
//! use strictly_bowling::Game;
//!
//! let mut game = Game::new();
//! game.frame_at(1).add_roll(10)?;
//! game.frame_at(2).add_roll(5)?;
//! game.frame_at(2).add_roll(3)?;
//!
//! assert_eq!(game.total_score(), 26);
//! # Ok::<(), strictly_bowling::RollError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod config;
mod error;
mod frame;
mod game;

pub mod contracts;
pub mod invariants;

// Crate-level exports - Domain types
pub use action::Roll;
pub use frame::{Frame, FrameKind, MAX_PINS, MAX_ROLLS};
pub use game::{FrameScore, Game};

// Crate-level exports - Configuration
pub use config::GameConfig;

// Crate-level exports - Errors
pub use error::{ConfigError, GameError, RollError, RollErrorKind};

// Crate-level exports - Validation
pub use invariants::{Invariant, InvariantSet, InvariantViolation};
