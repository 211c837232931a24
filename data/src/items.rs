//! Resolved held item records

use serde::{Deserialize, Serialize};

use crate::types::Type;
use crate::ItemId;

/// Condition tag controlling when an item's damage multiplier applies
///
/// Tags follow the data source's snake_case vocabulary; tags this crate
/// does not know resolve to [`ItemCondition::Other`] and are treated as
/// neutral by the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCondition {
    /// Flat multiplier on every damaging move (Life Orb style)
    AllDamagingMoves,
    /// Multiplier gated on the move matching the mask's type (Ogerpon masks)
    SameTypeAsMask,
    /// Multiplier on super-effective hits (Expert Belt style; not modeled yet)
    SuperEffective,
    /// Anything else; resolves neutrally
    #[serde(untagged)]
    Other(String),
}

/// An item's damage multiplier effect
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemDamageEffect {
    /// When the multiplier applies
    pub condition: ItemCondition,

    /// Move types the effect is limited to (None = any type)
    #[serde(default)]
    pub types: Option<Vec<Type>>,

    /// Base multiplier (e.g. 1.2, 1.3, 1.5)
    pub base_multiplier: f64,

    /// Multiplier while terastallized, where different (Ogerpon masks)
    #[serde(default)]
    pub tera_multiplier: Option<f64>,

    /// Species names the effect is limited to (None = any holder)
    #[serde(default)]
    pub restricted_to: Option<Vec<String>>,
}

impl ItemDamageEffect {
    /// Check whether this is an Ogerpon mask effect
    pub fn is_mask(&self) -> bool {
        self.restricted_to
            .as_deref()
            .is_some_and(|names| names.iter().any(|n| n.starts_with("ogerpon")))
    }

    /// Check whether the effect can apply to the named holder
    pub fn applies_to(&self, pokemon_name: &str) -> bool {
        match &self.restricted_to {
            Some(names) => names.iter().any(|n| n == pokemon_name),
            None => true,
        }
    }

    /// Check whether the effect covers the given move type
    pub fn covers_type(&self, move_type: Type) -> bool {
        match &self.types {
            Some(types) => types.contains(&move_type),
            None => true,
        }
    }
}

/// A resolved held item record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemData {
    pub id: ItemId,

    /// Display name (kebab-case, e.g. "life-orb")
    pub name: String,

    /// The item's damage multiplier effect, if it has one
    #[serde(default)]
    pub damage_effect: Option<ItemDamageEffect>,
}
