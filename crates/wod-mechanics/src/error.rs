//! Error types for the mechanics engine.

/// Errors that can occur while building or resolving a roll.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MechError {
    /// A roll needs at least one die.
    #[error("dice count must be at least 1, got {0}")]
    InvalidDiceCount(u32),

    /// The pool is larger than a single roll allows.
    #[error("dice count {count} exceeds the maximum of {max}")]
    TooManyDice {
        /// Requested number of dice.
        count: u32,
        /// Largest pool accepted.
        max: u32,
    },

    /// No splat with the given name exists in the catalog.
    #[error("unknown splat: {0}")]
    UnknownSplat(String),

    /// The splat has no roll with the given label or position.
    #[error("{splat} has no roll '{roll}'")]
    UnknownRoll {
        /// Splat that was asked.
        splat: String,
        /// Roll label or 1-based index that did not match.
        roll: String,
    },
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
