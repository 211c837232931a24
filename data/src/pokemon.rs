//! Resolved Pokemon species records

use serde::{Deserialize, Serialize};

use crate::stats::BaseStats;
use crate::types::Type;
use crate::PokemonId;

/// A resolved Pokemon species record
///
/// Everything the calculator needs to know about a species; fetched once
/// per selection by the embedding application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonData {
    pub id: PokemonId,

    /// Display name (including forme, e.g. "ogerpon-wellspring-mask")
    pub name: String,

    /// Sprite image URL, if the data source provides one
    #[serde(default)]
    pub sprite_url: Option<String>,

    /// Native types (1 or 2)
    pub types: Vec<Type>,

    /// Base stat spread
    pub base_stats: BaseStats,
}

impl PokemonData {
    /// Create a record with the minimum required fields
    pub fn new(id: PokemonId, name: impl Into<String>, types: Vec<Type>, base_stats: BaseStats) -> Self {
        Self {
            id,
            name: name.into(),
            sprite_url: None,
            types,
            base_stats,
        }
    }
}
