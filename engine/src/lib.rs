//! Pure damage calculation core for the porygon damage calculator.
//!
//! This crate holds the math: stat derivation, the damage roll formula,
//! modifier resolution, and KO probability analysis. It performs no I/O and
//! owns no mutable state. Every function maps a snapshot of inputs to a
//! value, and identical inputs always produce identical outputs.
//!
//! ```text
//! porygon-data (records + vocabulary)
//!        │
//!        ▼
//! porygon-engine (formulas + modifiers + probabilities) ← THIS CRATE
//!        │
//!        └─> porygon-session (async orchestration)
//! ```
//!
//! # Modules
//!
//! - [`formula`] - stat, HP, STAB, and damage roll formulas with the game's
//!   exact truncation points
//! - [`modifier`] - resolves the eight independent damage multipliers from
//!   a battle snapshot
//! - [`probability`] - single-hit, multi-hit, and cumulative KO
//!   probabilities over the 16 damage rolls
//! - [`state`] - the battle snapshot types the resolvers read and the
//!   report types calculations produce
//!
//! # Example
//!
//! ```
//! use porygon_engine::{formula, probability};
//!
//! // A level 50 attacker, 90 power move, 100 attack into 100 defense
//! let rolls = formula::calculate_damage(50, 90, 100, 100, 1.0);
//! assert_eq!(rolls[0], 34);
//! assert_eq!(rolls[15], 41);
//!
//! let ko = probability::ko_probability(&rolls, 40);
//! assert_eq!(ko, 3.0 / 16.0);
//! ```

pub mod formula;
pub mod modifier;
pub mod probability;
pub mod state;

// Re-export the snapshot and report types at the crate root for convenience
pub use state::{
    BattleMode, BattleState, DamageModifiers, DamageReport, EffortValues, EnvironmentState,
    IndividualValues, MultiTurnReport, ParticipantState, Screen, StatStages, Terrain, TurnDamage,
    Weather,
};

// Re-export the data vocabulary the snapshot types are written in
pub use porygon_data::{
    AbilityId, BaseStats, DamageClass, ItemId, MoveId, Nature, PokemonId, Stat, Type,
};
