//! Battle snapshot types
//!
//! The mutable inputs a calculation request is made of: two participants,
//! the environment, and the move selection. The orchestrator owns and
//! mutates these; the formula and modifier modules only read them.

mod battle;
mod environment;
mod participant;
mod report;

pub use battle::BattleState;
pub use environment::{BattleMode, EnvironmentState, Screen, Terrain, Weather};
pub use participant::{EffortValues, IndividualValues, ParticipantState, StatStages};
pub use report::{DamageModifiers, DamageReport, MultiTurnReport, TurnDamage};
