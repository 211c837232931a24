//! Natures and their stat modifiers

use serde::{Deserialize, Serialize};

use crate::stats::Stat;
use crate::DataError;

/// The 25 natures
///
/// Each non-neutral nature raises exactly one stat by 10% and lowers
/// exactly one other by 10%. Serialized as lowercase API names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Nature {
    // Neutral
    #[default]
    Hardy,
    Docile,
    Serious,
    Bashful,
    Quirky,
    // +Attack
    Lonely,
    Brave,
    Adamant,
    Naughty,
    // +Defense
    Bold,
    Relaxed,
    Impish,
    Lax,
    // +Special Attack
    Modest,
    Mild,
    Quiet,
    Rash,
    // +Special Defense
    Calm,
    Gentle,
    Sassy,
    Careful,
    // +Speed
    Timid,
    Hasty,
    Jolly,
    Naive,
}

impl Nature {
    /// All 25 natures
    pub const ALL: [Nature; 25] = [
        Nature::Hardy,
        Nature::Docile,
        Nature::Serious,
        Nature::Bashful,
        Nature::Quirky,
        Nature::Lonely,
        Nature::Brave,
        Nature::Adamant,
        Nature::Naughty,
        Nature::Bold,
        Nature::Relaxed,
        Nature::Impish,
        Nature::Lax,
        Nature::Modest,
        Nature::Mild,
        Nature::Quiet,
        Nature::Rash,
        Nature::Calm,
        Nature::Gentle,
        Nature::Sassy,
        Nature::Careful,
        Nature::Timid,
        Nature::Hasty,
        Nature::Jolly,
        Nature::Naive,
    ];

    /// The lowercase API name
    pub fn as_str(&self) -> &'static str {
        match self {
            Nature::Hardy => "hardy",
            Nature::Docile => "docile",
            Nature::Serious => "serious",
            Nature::Bashful => "bashful",
            Nature::Quirky => "quirky",
            Nature::Lonely => "lonely",
            Nature::Brave => "brave",
            Nature::Adamant => "adamant",
            Nature::Naughty => "naughty",
            Nature::Bold => "bold",
            Nature::Relaxed => "relaxed",
            Nature::Impish => "impish",
            Nature::Lax => "lax",
            Nature::Modest => "modest",
            Nature::Mild => "mild",
            Nature::Quiet => "quiet",
            Nature::Rash => "rash",
            Nature::Calm => "calm",
            Nature::Gentle => "gentle",
            Nature::Sassy => "sassy",
            Nature::Careful => "careful",
            Nature::Timid => "timid",
            Nature::Hasty => "hasty",
            Nature::Jolly => "jolly",
            Nature::Naive => "naive",
        }
    }

    /// Parse from an API name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        Self::ALL.iter().copied().find(|n| n.as_str() == lower)
    }

    /// Parse from an API name, failing with [`DataError::UnknownNature`]
    pub fn parse(s: &str) -> Result<Self, DataError> {
        Self::from_name(s).ok_or_else(|| DataError::UnknownNature(s.to_string()))
    }

    /// The stat this nature raises (None for neutral natures)
    pub fn increased(&self) -> Option<Stat> {
        match self {
            Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => {
                None
            }
            Nature::Lonely | Nature::Brave | Nature::Adamant | Nature::Naughty => {
                Some(Stat::Attack)
            }
            Nature::Bold | Nature::Relaxed | Nature::Impish | Nature::Lax => Some(Stat::Defense),
            Nature::Modest | Nature::Mild | Nature::Quiet | Nature::Rash => {
                Some(Stat::SpecialAttack)
            }
            Nature::Calm | Nature::Gentle | Nature::Sassy | Nature::Careful => {
                Some(Stat::SpecialDefense)
            }
            Nature::Timid | Nature::Hasty | Nature::Jolly | Nature::Naive => Some(Stat::Speed),
        }
    }

    /// The stat this nature lowers (None for neutral natures)
    pub fn decreased(&self) -> Option<Stat> {
        match self {
            Nature::Hardy | Nature::Docile | Nature::Serious | Nature::Bashful | Nature::Quirky => {
                None
            }
            Nature::Bold | Nature::Modest | Nature::Calm | Nature::Timid => Some(Stat::Attack),
            Nature::Lonely | Nature::Mild | Nature::Gentle | Nature::Hasty => Some(Stat::Defense),
            Nature::Adamant | Nature::Impish | Nature::Careful | Nature::Jolly => {
                Some(Stat::SpecialAttack)
            }
            Nature::Naughty | Nature::Lax | Nature::Rash | Nature::Naive => {
                Some(Stat::SpecialDefense)
            }
            Nature::Brave | Nature::Relaxed | Nature::Quiet | Nature::Sassy => Some(Stat::Speed),
        }
    }

    /// The multiplier this nature applies to a stat (1.1, 0.9, or 1.0)
    ///
    /// HP is never affected by natures.
    pub fn modifier(&self, stat: Stat) -> f64 {
        if self.increased() == Some(stat) {
            1.1
        } else if self.decreased() == Some(stat) {
            0.9
        } else {
            1.0
        }
    }

    /// Check if this nature has no effect on any stat
    pub fn is_neutral(&self) -> bool {
        self.increased().is_none()
    }
}
