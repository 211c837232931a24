//! Resolved ability records

use serde::{Deserialize, Serialize};

use crate::AbilityId;

/// A resolved ability record
///
/// Ability behavior is dispatched by numeric id inside the calculation
/// core; the record itself only carries identity for selection and display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityData {
    pub id: AbilityId,

    /// Display name (kebab-case, e.g. "huge-power")
    pub name: String,
}

impl AbilityData {
    /// Create a record
    pub fn new(id: AbilityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let ability = AbilityData::new(37, "huge-power");
        let json = serde_json::to_string(&ability).unwrap();
        let back: AbilityData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ability);
    }
}
