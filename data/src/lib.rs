//! Data contracts for the porygon damage calculator.
//!
//! This crate defines the records an external data source (a PokeAPI-backed
//! repository, a bundled dataset, a test fixture) must resolve before the
//! calculation core can run, plus the shared vocabulary those records are
//! written in:
//!
//! ```text
//! external data source (PokeAPI, fixtures, ...)
//!        │
//!        ▼
//! porygon-data (records + vocabulary) ← THIS CRATE
//!        │
//!        ├─> porygon-engine (pure calculation core)
//!        └─> porygon-session (async orchestration)
//! ```
//!
//! # Main Types
//!
//! - [`Type`] - The 18 Pokemon types
//! - [`Stat`] - The six stat kinds
//! - [`Nature`] - The 25 natures and their stat modifiers
//! - [`DamageClass`] - Physical / Special / Status
//! - [`PokemonData`], [`MoveData`], [`ItemData`], [`AbilityData`] - resolved
//!   records, one per external lookup
//! - [`TypeRelations`] - per-type damage relations for effectiveness math
//!
//! Nothing in this crate fetches data; it only describes what fetched data
//! looks like once resolved.

use thiserror::Error;

mod abilities;
mod items;
mod moves;
mod nature;
mod pokemon;
mod relations;
mod stats;
mod types;

pub use abilities::AbilityData;
pub use items::{ItemCondition, ItemData, ItemDamageEffect};
pub use moves::{DamageClass, MoveData};
pub use nature::Nature;
pub use pokemon::PokemonData;
pub use relations::TypeRelations;
pub use stats::{BaseStats, Stat};
pub use types::Type;

/// Identifier for a Pokemon species entry
pub type PokemonId = u32;

/// Identifier for a move entry
pub type MoveId = u32;

/// Identifier for a held item entry
pub type ItemId = u32;

/// Identifier for an ability entry
pub type AbilityId = u16;

#[derive(Error, Debug)]
pub enum DataError {
    #[error("Unknown type name: {0}")]
    UnknownType(String),

    #[error("Unknown nature name: {0}")]
    UnknownNature(String),

    #[error("Unknown damage class: {0}")]
    UnknownDamageClass(String),
}
