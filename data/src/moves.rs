//! Resolved move records

use serde::{Deserialize, Serialize};

use crate::types::Type;
use crate::{DataError, MoveId};

/// Move damage class
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DamageClass {
    Physical,
    Special,
    Status,
}

impl DamageClass {
    /// Parse from an API name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "physical" => Some(DamageClass::Physical),
            "special" => Some(DamageClass::Special),
            "status" => Some(DamageClass::Status),
            _ => None,
        }
    }

    /// Parse from an API name, failing with [`DataError::UnknownDamageClass`]
    pub fn parse(s: &str) -> Result<Self, DataError> {
        Self::from_name(s).ok_or_else(|| DataError::UnknownDamageClass(s.to_string()))
    }

    /// Check whether moves of this class deal direct damage
    pub fn is_damaging(&self) -> bool {
        !matches!(self, DamageClass::Status)
    }
}

/// A resolved move record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveData {
    pub id: MoveId,

    /// Display name
    pub name: String,

    /// Base power (None for status moves and variable-power moves)
    pub power: Option<u16>,

    /// Accuracy percentage (None for moves that never miss)
    #[serde(default)]
    pub accuracy: Option<u8>,

    /// The move's type
    pub move_type: Type,

    /// Physical / Special / Status
    pub damage_class: DamageClass,

    /// Whether the move hits multiple opponents in a double battle
    #[serde(default)]
    pub spread: bool,
}

impl MoveData {
    /// Check whether this move can be fed to the damage formula
    pub fn is_damaging(&self) -> bool {
        self.damage_class.is_damaging() && self.power.is_some()
    }
}
