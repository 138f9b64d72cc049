//! The splat catalog: which rolls each character type makes.
//!
//! A splat's presets are static data. Each preset says where the pool size
//! comes from (always asked of the player) and whether the difficulty is
//! fixed or asked for. Splats without a specialised roll use
//! [`STANDARD_ROLL`].

use serde::Serialize;

use crate::error::{MechError, MechResult};
use crate::roll::DEFAULT_DIFFICULTY;

/// Where a preset's dice count comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PoolSource {
    /// Ask the player, showing this prompt.
    Prompt {
        /// Prompt text, e.g. "Enter Arete rating".
        prompt: &'static str,
    },
}

/// Where a preset's difficulty comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DifficultySource {
    /// Always this difficulty.
    Fixed {
        /// The difficulty used.
        value: u32,
    },
    /// Ask the player, showing this prompt.
    Prompt {
        /// Prompt text, e.g. "Enter difficulty (3-9)".
        prompt: &'static str,
    },
}

impl DifficultySource {
    /// The fixed difficulty, if there is one.
    pub fn fixed(self) -> Option<u32> {
        match self {
            Self::Fixed { value } => Some(value),
            Self::Prompt { .. } => None,
        }
    }
}

/// A named roll a splat can make.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RollPreset {
    /// Display label, e.g. "Arete".
    pub label: &'static str,
    /// Where the dice count comes from.
    pub dice: PoolSource,
    /// Where the difficulty comes from.
    pub difficulty: DifficultySource,
}

impl RollPreset {
    const fn fixed(label: &'static str, prompt: &'static str) -> Self {
        Self {
            label,
            dice: PoolSource::Prompt { prompt },
            difficulty: DifficultySource::Fixed {
                value: DEFAULT_DIFFICULTY,
            },
        }
    }

    const fn prompted(label: &'static str, prompt: &'static str, difficulty: &'static str) -> Self {
        Self {
            label,
            dice: PoolSource::Prompt { prompt },
            difficulty: DifficultySource::Prompt { prompt: difficulty },
        }
    }
}

/// The plain Attribute + Skill roll, with pool and difficulty both asked for.
pub const STANDARD_ROLL: RollPreset = RollPreset::prompted(
    "Attribute + Skill",
    "Enter total number of dice",
    "Enter difficulty",
);

const STANDARD: &[RollPreset] = &[STANDARD_ROLL];

const MAGE: &[RollPreset] = &[RollPreset::prompted(
    "Arete",
    "Enter Arete rating",
    "Enter difficulty (3-9)",
)];

const CHANGELING: &[RollPreset] = &[RollPreset::fixed("Banality", "Enter Banality rating")];

const WRAITH: &[RollPreset] = &[
    RollPreset::fixed("Pathos", "Enter Pathos rating"),
    RollPreset::fixed("Angst", "Enter Angst rating"),
];

const DEMON: &[RollPreset] = &[
    RollPreset::fixed("Faith", "Enter Faith rating"),
    RollPreset::fixed("Torment", "Enter Torment rating"),
];

const MUMMY: &[RollPreset] = &[
    RollPreset::fixed("Balance", "Enter Balance rating"),
    RollPreset::fixed("Sekhem", "Enter Sekhem rating"),
];

const HUNTER: &[RollPreset] = &[
    RollPreset::fixed("Desperation", "Enter Desperation dice"),
    RollPreset::fixed("Willpower", "Enter Willpower rating"),
];

const KINDRED_OF_THE_EAST: &[RollPreset] = &[
    RollPreset::fixed("Chi", "Enter Chi pool"),
    RollPreset::fixed("Dharma", "Enter Dharma rating"),
];

const GHOUL: &[RollPreset] = &[RollPreset::fixed("Frenzy", "Enter Willpower rating")];

/// A World of Darkness character type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Splat {
    /// Vampire: the Masquerade.
    Vampire,
    /// Werewolf: the Apocalypse.
    Werewolf,
    /// Mage: the Ascension.
    Mage,
    /// Changeling: the Dreaming.
    Changeling,
    /// Wraith: the Oblivion.
    Wraith,
    /// Demon: the Fallen.
    Demon,
    /// Mummy: the Resurrection.
    Mummy,
    /// Hunter: the Reckoning.
    Hunter,
    /// Kindred of the East.
    KindredOfTheEast,
    /// A ghoul.
    Ghoul,
    /// A mortal.
    Mortal,
}

impl Splat {
    /// Every splat, in menu order.
    pub const ALL: [Self; 11] = [
        Self::Vampire,
        Self::Werewolf,
        Self::Mage,
        Self::Changeling,
        Self::Wraith,
        Self::Demon,
        Self::Mummy,
        Self::Hunter,
        Self::KindredOfTheEast,
        Self::Ghoul,
        Self::Mortal,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Vampire => "Vampire",
            Self::Werewolf => "Werewolf",
            Self::Mage => "Mage",
            Self::Changeling => "Changeling",
            Self::Wraith => "Wraith",
            Self::Demon => "Demon",
            Self::Mummy => "Mummy",
            Self::Hunter => "Hunter",
            Self::KindredOfTheEast => "Kindred of the East",
            Self::Ghoul => "Ghoul",
            Self::Mortal => "Mortal",
        }
    }

    /// Look up a splat by name, ignoring case and surrounding whitespace.
    ///
    /// Hyphens and underscores count as spaces, so `kindred-of-the-east`
    /// works on a command line.
    pub fn from_name(name: &str) -> Option<Self> {
        let wanted = name.trim().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(&wanted))
    }

    /// The splat at a 1-based menu position.
    pub fn from_menu_index(index: usize) -> Option<Self> {
        index.checked_sub(1).and_then(|i| Self::ALL.get(i).copied())
    }

    /// The rolls this splat can make, in order.
    pub fn presets(self) -> &'static [RollPreset] {
        match self {
            Self::Vampire | Self::Werewolf | Self::Mortal => STANDARD,
            Self::Mage => MAGE,
            Self::Changeling => CHANGELING,
            Self::Wraith => WRAITH,
            Self::Demon => DEMON,
            Self::Mummy => MUMMY,
            Self::Hunter => HUNTER,
            Self::KindredOfTheEast => KINDRED_OF_THE_EAST,
            Self::Ghoul => GHOUL,
        }
    }

    /// True when the player must pick between several rolls.
    pub fn has_choice(self) -> bool {
        self.presets().len() > 1
    }

    /// Find one of this splat's rolls by label (case-insensitive) or by
    /// 1-based position.
    pub fn preset(self, key: &str) -> MechResult<&'static RollPreset> {
        let key = key.trim();
        let presets = self.presets();
        let by_index = key
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| presets.get(i));
        by_index
            .or_else(|| presets.iter().find(|p| p.label.eq_ignore_ascii_case(key)))
            .ok_or_else(|| MechError::UnknownRoll {
                splat: self.name().to_string(),
                roll: key.to_string(),
            })
    }
}

impl std::fmt::Display for Splat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Splat {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| MechError::UnknownSplat(s.trim().to_string()))
    }
}

/// The rolls for a splat by name, or the standard roll for unknown names.
pub fn presets_for(splat_name: &str) -> &'static [RollPreset] {
    Splat::from_name(splat_name).map_or(STANDARD, Splat::presets)
}
