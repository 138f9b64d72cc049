//! Dice types and randomness sources.
//!
//! The World of Darkness mechanic rolls only d10s, but the die is kept as a
//! type so sources know which faces they may show.

pub mod source;

pub use source::{DiceSource, ScriptedDice};

/// A polyhedral die, identified by its number of sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Die(u32);

impl Die {
    /// The ten-sided die every World of Darkness pool is made of.
    pub const D10: Self = Self(10);

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        self.0
    }
}
