//! The full battle snapshot

use porygon_data::MoveId;

use super::environment::{BattleMode, EnvironmentState};
use super::participant::ParticipantState;

/// Everything a calculation request reads
///
/// Owned and mutated by the orchestrator; the formula, modifier, and
/// probability modules treat it as read-only input.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleState {
    /// Single or double battle
    pub mode: BattleMode,

    /// The attacking side
    pub attacker: ParticipantState,

    /// The defending side
    pub defender: ParticipantState,

    /// Weather, terrain, and screens
    pub environment: EnvironmentState,

    /// Move for single-turn calculation (None = not selected)
    pub selected_move: Option<MoveId>,

    /// Move sequence for multi-turn calculation (empty = single-turn only)
    pub turn_moves: Vec<MoveId>,

    /// Whether multi-hit KO probabilities account for move accuracy
    pub apply_accuracy: bool,
}

impl BattleState {
    /// Create an empty battle state
    pub fn new() -> Self {
        Self::default()
    }

    /// Exchange attacker and defender wholesale
    ///
    /// The selected move stays attacker-relative: after the swap it is
    /// "the (new) attacker's move".
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.attacker, &mut self.defender);
    }

    /// Reset to the initial empty state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
