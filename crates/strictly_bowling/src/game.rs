//! Game scoring: frames by position, strike and spare bonuses, totals.
//!
//! Bonuses are resolved by looking ahead into the frames that follow. A
//! strike earns the pins of the next two rolls, which span two frames when
//! the next frame is itself a strike; a spare earns the pins of the next
//! roll. Frames that have not been played read as empty, so a bonus still
//! waiting on future rolls counts as 0 until those rolls arrive.

use crate::action::Roll;
use crate::config::GameConfig;
use crate::error::GameError;
use crate::frame::{Frame, MAX_PINS};
use crate::invariants::InvariantViolation;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument, trace, warn};

/// Rolls of lookahead a strike earns.
const STRIKE_BONUS_ROLLS: u32 = 2;

/// Rolls of lookahead a spare earns.
const SPARE_BONUS_ROLLS: u32 = 1;

/// Score of a single frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FrameScore {
    /// Frame position.
    pub position: u32,
    /// Pins from the frame's own rolls.
    pub raw: u32,
    /// Strike or spare bonus earned from later rolls.
    pub bonus: u32,
    /// `raw + bonus`.
    pub total: u32,
}

/// A game: frames keyed by position.
///
/// Frames are created the first time their position is addressed and may be
/// addressed in any order. The total is computed over whatever frames exist;
/// the ten-frame length is not enforced unless a frame limit is configured.
///
/// Deserialized games are rejected when a frame breaks the frame rules or is
/// stored under a key other than its own position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    frames: BTreeMap<u32, Frame>,
    #[serde(default)]
    config: GameConfig,
}

/// Unchecked wire form of a [`Game`]. Frames are checked as they deserialize.
#[derive(Deserialize)]
struct GameRecord {
    frames: BTreeMap<u32, Frame>,
    #[serde(default)]
    config: GameConfig,
}

impl TryFrom<GameRecord> for Game {
    type Error = InvariantViolation;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        if let Some((&key, frame)) = record
            .frames
            .iter()
            .find(|(key, frame)| **key != frame.position())
        {
            warn!(key, position = frame.position(), "Rejected misfiled frame");
            return Err(InvariantViolation::new(format!(
                "Frame stored at {} reports position {}",
                key,
                frame.position()
            )));
        }

        Ok(Self {
            frames: record.frames,
            config: record.config,
        })
    }
}

impl Game {
    /// Creates an empty game with no frame limit.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty game with the given configuration.
    #[instrument]
    pub fn with_config(config: GameConfig) -> Self {
        Self {
            frames: BTreeMap::new(),
            config,
        }
    }

    /// Returns the game configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Returns the frame at `position`, creating an empty one on first access.
    ///
    /// Any position is accepted; the configured frame limit applies only to
    /// [`Game::roll`].
    #[instrument(skip(self))]
    pub fn frame_at(&mut self, position: u32) -> &mut Frame {
        self.frames.entry(position).or_insert_with(|| {
            debug!(position, "Creating frame");
            Frame::new(position)
        })
    }

    /// Returns the frame at `position` if it has been addressed.
    pub fn frame(&self, position: u32) -> Option<&Frame> {
        self.frames.get(&position)
    }

    /// Returns the frame following `frame`, if it has been addressed.
    pub fn next_frame(&self, frame: &Frame) -> Option<&Frame> {
        frame
            .position()
            .checked_add(1)
            .and_then(|next| self.frames.get(&next))
    }

    /// Iterates over the frames in position order.
    pub fn frames(&self) -> impl Iterator<Item = &Frame> {
        self.frames.values()
    }

    /// Number of frames addressed so far.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no frame has been addressed.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Records a roll of `pins` in the frame at `position`.
    ///
    /// # Errors
    ///
    /// Returns `GameError::FrameOutOfRange` if a frame limit is configured and
    /// `position` lies outside `1..=limit`, otherwise any roll error from
    /// [`Frame::add_roll`].
    #[track_caller]
    #[instrument(skip(self), fields(frame_limit = ?self.config.frame_limit()))]
    pub fn roll(&mut self, position: u32, pins: u32) -> Result<(), GameError> {
        if !self.config.allows(position) {
            let limit = self.config.frame_limit().unwrap_or(u32::MAX);
            warn!(position, limit, "Frame outside configured limit");
            return Err(GameError::FrameOutOfRange { position, limit });
        }

        self.frame_at(position).add_roll(pins)?;
        Ok(())
    }

    /// Builds an unlimited game by applying `rolls` in order.
    ///
    /// # Errors
    ///
    /// Returns the first roll that fails.
    #[instrument(skip(rolls), fields(rolls = rolls.len()))]
    pub fn replay(rolls: &[Roll]) -> Result<Self, GameError> {
        Self::replay_with_config(GameConfig::default(), rolls)
    }

    /// Builds a game with `config` by applying `rolls` in order.
    ///
    /// # Errors
    ///
    /// Returns the first roll that fails.
    #[instrument(skip(rolls), fields(rolls = rolls.len()))]
    pub fn replay_with_config(config: GameConfig, rolls: &[Roll]) -> Result<Self, GameError> {
        let mut game = Self::with_config(config);
        for roll in rolls {
            game.roll(roll.frame, roll.pins)?;
        }
        debug!(frames = game.len(), "Replay complete");
        Ok(game)
    }

    /// Bonus earned by `frame` from later rolls.
    ///
    /// Strike is checked before spare, since a strike also reads as a spare.
    pub fn bonus(&self, frame: &Frame) -> u32 {
        let rolls_needed = if frame.is_strike() {
            STRIKE_BONUS_ROLLS
        } else if frame.is_spare() {
            SPARE_BONUS_ROLLS
        } else {
            return 0;
        };

        match frame.position().checked_add(1) {
            Some(next) => self.lookahead(next, rolls_needed),
            None => 0,
        }
    }

    /// Sums the pins of the next `rolls_needed` rolls, starting with the
    /// frame at `position`.
    ///
    /// A strike counts as one roll of 10 and the count continues into the
    /// frame after it. Any other frame supplies its first roll and, if needed,
    /// its second; lookahead stops there. Missing frames read as empty.
    pub fn lookahead(&self, position: u32, rolls_needed: u32) -> u32 {
        if rolls_needed == 0 {
            return 0;
        }

        let Some(frame) = self.frames.get(&position) else {
            trace!(position, rolls_needed, "Lookahead past last frame");
            return 0;
        };

        if frame.is_strike() {
            let remaining = rolls_needed - 1;
            let rest = match position.checked_add(1) {
                Some(next) if remaining > 0 => self.lookahead(next, remaining),
                _ => 0,
            };
            MAX_PINS + rest
        } else if rolls_needed > 1 {
            frame.roll(0) + frame.roll(1)
        } else {
            frame.roll(0)
        }
    }

    /// Score of the frame at `position`, if it has been addressed.
    pub fn frame_score(&self, position: u32) -> Option<FrameScore> {
        self.frames.get(&position).map(|frame| self.score_of(frame))
    }

    /// Per-frame scores in position order.
    #[instrument(skip(self))]
    pub fn scorecard(&self) -> Vec<FrameScore> {
        self.frames.values().map(|frame| self.score_of(frame)).collect()
    }

    /// Sum of every frame's raw total plus bonus.
    #[instrument(skip(self), fields(frames = self.frames.len()))]
    pub fn total_score(&self) -> u32 {
        let total: u32 = self
            .frames
            .values()
            .map(|frame| frame.raw_total() + self.bonus(frame))
            .sum();
        trace!(total, "Total computed");
        total
    }

    fn score_of(&self, frame: &Frame) -> FrameScore {
        let raw = frame.raw_total();
        let bonus = self.bonus(frame);
        FrameScore {
            position: frame.position(),
            raw,
            bonus,
            total: raw + bonus,
        }
    }
}
