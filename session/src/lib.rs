//! Battle session orchestration for the porygon damage calculator.
//!
//! A [`BattleSession`] owns the mutable battle snapshot (two participants,
//! environment, move selection), applies selection operations on behalf of
//! the caller, and drives calculation requests: it awaits the external data
//! lookups a request needs through the [`DataProvider`] trait, then feeds
//! the resolved records through the pure calculation chain in
//! `porygon-engine` and returns an immutable report.
//!
//! ```text
//! embedding application (UI, bot, CLI)
//!        │  selections + calculate()
//!        ▼
//! porygon-session (orchestration) ← THIS CRATE
//!        │                │
//!        │ DataProvider   └─> porygon-engine (pure math)
//!        ▼
//! external data source (PokeAPI, fixtures, ...)
//! ```
//!
//! Validation failures (nothing selected, a status move, an empty turn
//! queue) are reported as [`SessionError`] values, never panics. A failed
//! or cancelled data lookup aborts the whole request; the session never
//! calculates with partial data.
//!
//! Sessions are single-writer: operations are read-modify-write across the
//! snapshot, so concurrent callers must either serialize access or give
//! each request its own session.

mod provider;
mod session;

pub use provider::DataProvider;
pub use session::{BattleSession, Side};

use thiserror::Error;

// Re-export the snapshot and report types callers exchange with a session
pub use porygon_engine::{BattleState, DamageReport, MultiTurnReport, TurnDamage};

/// Why a calculation request could not run
#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No attacker selected")]
    NoAttacker,

    #[error("No defender selected")]
    NoDefender,

    #[error("No move selected")]
    NoMoveSelected,

    #[error("{0} is not a damaging move")]
    NotDamaging(String),

    #[error("No turns queued for multi-turn calculation")]
    NoTurnsQueued,

    #[error("Data lookup failed: {0}")]
    Provider(#[from] anyhow::Error),
}
