//! Where die faces come from.
//!
//! Any [`rand::Rng`] rolls fair dice. [`ScriptedDice`] replays fixed faces so
//! rolls can be reproduced exactly in tests and demos.

use rand::Rng;

use super::Die;

/// A source of die faces.
pub trait DiceSource {
    /// Roll one die, returning a face in `1..=die.sides()`.
    fn roll_die(&mut self, die: Die) -> u32;
}

impl<R: Rng> DiceSource for R {
    fn roll_die(&mut self, die: Die) -> u32 {
        self.random_range(1..=die.sides())
    }
}

/// A dice source that replays a fixed sequence of faces.
///
/// The sequence wraps around once exhausted. Faces outside the rolled die are
/// clamped into `1..=sides`; an empty script always shows the highest face.
#[derive(Debug, Clone, Default)]
pub struct ScriptedDice {
    faces: Vec<u32>,
    cursor: usize,
}

impl ScriptedDice {
    /// Create a source that yields `faces` in order.
    pub fn new(faces: impl Into<Vec<u32>>) -> Self {
        Self {
            faces: faces.into(),
            cursor: 0,
        }
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self, die: Die) -> u32 {
        if self.faces.is_empty() {
            return die.sides();
        }
        let face = self.faces[self.cursor % self.faces.len()];
        self.cursor += 1;
        face.clamp(1, die.sides())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn rng_rolls_within_faces() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let face = rng.roll_die(Die::D10);
            assert!((1..=10).contains(&face));
        }
    }

    #[test]
    fn rng_is_deterministic_with_seed() {
        let mut a = StdRng::seed_from_u64(99);
        let mut b = StdRng::seed_from_u64(99);
        let left: Vec<u32> = (0..10).map(|_| a.roll_die(Die::D10)).collect();
        let right: Vec<u32> = (0..10).map(|_| b.roll_die(Die::D10)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn scripted_replays_in_order() {
        let mut dice = ScriptedDice::new([6, 1, 9]);
        assert_eq!(dice.roll_die(Die::D10), 6);
        assert_eq!(dice.roll_die(Die::D10), 1);
        assert_eq!(dice.roll_die(Die::D10), 9);
    }

    #[test]
    fn scripted_wraps_around() {
        let mut dice = ScriptedDice::new(vec![3, 4]);
        let faces: Vec<u32> = (0..5).map(|_| dice.roll_die(Die::D10)).collect();
        assert_eq!(faces, vec![3, 4, 3, 4, 3]);
    }

    #[test]
    fn scripted_clamps_to_die() {
        let mut dice = ScriptedDice::new([0, 15]);
        assert_eq!(dice.roll_die(Die::D10), 1);
        assert_eq!(dice.roll_die(Die::D10), 10);
    }

    #[test]
    fn empty_script_shows_highest_face() {
        let mut dice = ScriptedDice::default();
        assert_eq!(dice.roll_die(Die::D10), 10);
    }
}
