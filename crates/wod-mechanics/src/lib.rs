//! World of Darkness dice mechanics.
//!
//! Provides the d10 success-counting roll with its botch rule, an injectable
//! [`DiceSource`] for randomness, and the static catalog of per-splat roll
//! presets (Mage Arete, Wraith Pathos and Angst, and so on).

pub mod dice;
pub mod error;
pub mod roll;
pub mod splat;

pub use dice::{DiceSource, Die, ScriptedDice};
pub use error::{MechError, MechResult};
pub use roll::{DEFAULT_DIFFICULTY, MAX_DICE, Outcome, RollRequest, RollResult, roll};
pub use splat::{DifficultySource, PoolSource, RollPreset, STANDARD_ROLL, Splat, presets_for};
