//! The World of Darkness success-counting roll.
//!
//! Roll a pool of d10s. Every die at or above the difficulty is a success.
//! The roll is a botch when at least half the pool (rounded down) shows 1,
//! so a single die is always a botch on a 1 and the threshold for one die is
//! zero.

use serde::Serialize;

use crate::dice::{DiceSource, Die};
use crate::error::{MechError, MechResult};

/// Largest pool a single roll accepts.
pub const MAX_DICE: u32 = 100;

/// Difficulty used when none is given.
pub const DEFAULT_DIFFICULTY: u32 = 6;

/// Label used when none is given.
pub const DEFAULT_LABEL: &str = "Roll";

/// A validated request to roll a pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollRequest {
    dice_count: u32,
    difficulty: u32,
    label: String,
}

impl RollRequest {
    /// Build a request, rejecting empty pools and pools above [`MAX_DICE`].
    ///
    /// Any difficulty is accepted; above 10 no die can succeed.
    pub fn new(dice_count: u32, difficulty: u32) -> MechResult<Self> {
        Self::bounded(dice_count, difficulty, MAX_DICE)
    }

    /// Like [`RollRequest::new`] with a caller-chosen pool limit.
    pub fn bounded(dice_count: u32, difficulty: u32, max_dice: u32) -> MechResult<Self> {
        if dice_count == 0 {
            return Err(MechError::InvalidDiceCount(dice_count));
        }
        if dice_count > max_dice {
            return Err(MechError::TooManyDice {
                count: dice_count,
                max: max_dice,
            });
        }
        Ok(Self {
            dice_count,
            difficulty,
            label: DEFAULT_LABEL.to_string(),
        })
    }

    /// Set the display label.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    /// Number of dice in the pool.
    pub fn dice_count(&self) -> u32 {
        self.dice_count
    }

    /// Threshold a die must meet or exceed to succeed.
    pub fn difficulty(&self) -> u32 {
        self.difficulty
    }

    /// Display label for the roll.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// The evaluated result of a roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RollResult {
    /// Label the roll was made under.
    pub label: String,
    /// Difficulty the dice were compared against.
    pub difficulty: u32,
    /// Individual faces in roll order.
    pub results: Vec<u32>,
    /// Dice at or above the difficulty.
    pub successes: u32,
    /// Half or more of the dice showed 1.
    pub botch: bool,
}

impl RollResult {
    /// Evaluate faces that were already rolled for `request`.
    pub fn from_values(request: &RollRequest, results: Vec<u32>) -> Self {
        let successes = results.iter().filter(|&&v| v >= request.difficulty).count() as u32;
        let ones = results.iter().filter(|&&v| v == 1).count();
        let botch = ones >= results.len() / 2;
        Self {
            label: request.label.clone(),
            difficulty: request.difficulty,
            results,
            successes,
            botch,
        }
    }

    /// Classify the result for display.
    pub fn outcome(&self) -> Outcome {
        if self.botch {
            Outcome::Botch
        } else if self.successes > 0 {
            Outcome::Success {
                successes: self.successes,
            }
        } else {
            Outcome::Failure
        }
    }
}

/// How a roll reads at the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    /// Half or more of the dice showed 1. Takes precedence over successes.
    Botch,
    /// At least one success.
    Success {
        /// Number of successes scored.
        successes: u32,
    },
    /// No successes and no botch.
    Failure,
}

/// Roll `request.dice_count()` d10s from `source` and evaluate them.
pub fn roll<S: DiceSource + ?Sized>(request: &RollRequest, source: &mut S) -> RollResult {
    let results = (0..request.dice_count)
        .map(|_| source.roll_die(Die::D10))
        .collect();
    let result = RollResult::from_values(request, results);
    tracing::debug!(
        label = %result.label,
        dice = request.dice_count,
        difficulty = result.difficulty,
        successes = result.successes,
        botch = result.botch,
        "rolled pool"
    );
    result
}
