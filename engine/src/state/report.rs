//! Immutable calculation results

use porygon_data::MoveId;

/// The independently resolved damage multipliers for one calculation
///
/// Every field defaults to 1.0 when inapplicable; immunities (a type the
/// move cannot damage, an absorbing ability) legitimately zero their field
/// and with it the whole product.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageModifiers {
    /// Same-type attack bonus
    pub stab: f64,

    /// Type effectiveness product (precomputed against the defender)
    pub type_effectiveness: f64,

    /// Weather modifier
    pub weather: f64,

    /// Terrain modifier
    pub terrain: f64,

    /// Screen reduction
    pub screen: f64,

    /// Held item modifier
    pub item: f64,

    /// Ability modifier (attacker and defender combined)
    pub ability: f64,

    /// Everything else (double-battle spread penalty)
    pub other: f64,
}

impl DamageModifiers {
    /// All fields at 1.0
    pub fn neutral() -> Self {
        Self {
            stab: 1.0,
            type_effectiveness: 1.0,
            weather: 1.0,
            terrain: 1.0,
            screen: 1.0,
            item: 1.0,
            ability: 1.0,
            other: 1.0,
        }
    }

    /// The aggregate multiplier: the exact product of every field
    pub fn total(&self) -> f64 {
        self.stab
            * self.type_effectiveness
            * self.weather
            * self.terrain
            * self.screen
            * self.item
            * self.ability
            * self.other
    }
}

impl Default for DamageModifiers {
    fn default() -> Self {
        Self::neutral()
    }
}

/// Result of a single-turn damage calculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageReport {
    /// Lowest of the 16 rolls
    pub min_damage: u32,

    /// Highest of the 16 rolls
    pub max_damage: u32,

    /// All 16 rolls in ascending roll order
    pub rolls: [u32; 16],

    /// Mean of the 16 rolls
    pub average_damage: f64,

    /// Probability a single hit KOs the defender
    pub ko_chance: f64,

    /// Probability two consecutive hits KO the defender
    pub two_turn_ko_chance: f64,

    /// Guaranteed hits to KO at maximum damage
    pub hits_to_ko: u32,

    /// The defender's maximum HP the probabilities are measured against
    pub defender_max_hp: u32,

    /// The resolved modifier breakdown
    pub modifiers: DamageModifiers,
}

/// One turn's result inside a multi-turn calculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnDamage {
    /// Turn number, starting at 1
    pub turn: u32,

    /// The move used this turn
    pub move_id: MoveId,

    /// Display name of the move
    pub move_name: String,

    /// The turn's damage calculation
    pub report: DamageReport,
}

/// Result of a multi-turn damage calculation
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiTurnReport {
    /// Per-turn results in sequence order
    pub turns: Vec<TurnDamage>,

    /// KO probability after each prefix of the sequence (entry k covers
    /// turns 1..=k+1)
    pub cumulative_ko: Vec<f64>,

    /// The defender's maximum HP
    pub defender_max_hp: u32,
}

impl MultiTurnReport {
    /// Summed damage bounds across the whole sequence
    pub fn total_damage_range(&self) -> (u32, u32) {
        let min = self.turns.iter().map(|t| t.report.min_damage).sum();
        let max = self.turns.iter().map(|t| t.report.max_damage).sum();
        (min, max)
    }
}
