//! Per-type damage relations

use serde::{Deserialize, Serialize};

use crate::types::Type;

/// Damage relations for one attacking type
///
/// Fetched per move type; the orchestrator multiplies the per-defender-type
/// factors together to get the effectiveness product for a matchup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeRelations {
    /// Defending types this type hits for 2x
    #[serde(default)]
    pub double_damage_to: Vec<Type>,

    /// Defending types this type hits for 0.5x
    #[serde(default)]
    pub half_damage_to: Vec<Type>,

    /// Defending types this type cannot damage
    #[serde(default)]
    pub no_damage_to: Vec<Type>,
}

impl TypeRelations {
    /// Effectiveness factor against a single defending type
    pub fn effectiveness(&self, defender: Type) -> f64 {
        if self.no_damage_to.contains(&defender) {
            0.0
        } else if self.double_damage_to.contains(&defender) {
            2.0
        } else if self.half_damage_to.contains(&defender) {
            0.5
        } else {
            1.0
        }
    }

    /// Effectiveness product against a full defending type set
    ///
    /// An immunity anywhere in the set zeroes the whole product.
    pub fn effectiveness_against(&self, defenders: &[Type]) -> f64 {
        let mut product = 1.0;
        for defender in defenders {
            let factor = self.effectiveness(*defender);
            if factor == 0.0 {
                return 0.0;
            }
            product *= factor;
        }
        product
    }
}
