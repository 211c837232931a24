//! Modifier resolution
//!
//! Turns a battle snapshot plus a selected move into the eight independent
//! damage multipliers of [`DamageModifiers`](crate::state::DamageModifiers).
//! Every sub-resolver is a pure function; the resolver runs fresh for each
//! calculation request and caches nothing.

pub mod abilities;

mod resolve;

pub use resolve::resolve_modifiers;
