//! The external data lookup boundary

use anyhow::Result;
use porygon_data::{ItemData, ItemId, MoveData, MoveId, Type, TypeRelations};

/// Resolves the external data a calculation request depends on.
///
/// Implemented by the embedding application over whatever source it has: a
/// PokeAPI-backed repository, a bundled dataset, test fixtures. Lookups may
/// suspend; the session awaits them before any math runs. Species and
/// ability records are not fetched here: the caller resolves those when
/// making selections and hands the records to the session directly.
///
/// Errors (including cancellation surfaced as an error) abort the whole
/// calculation request.
#[allow(async_fn_in_trait)]
pub trait DataProvider {
    /// Resolve a move's power, type, class, and accuracy
    async fn move_data(&self, id: MoveId) -> Result<MoveData>;

    /// Resolve a held item and its damage effect
    async fn item(&self, id: ItemId) -> Result<ItemData>;

    /// Resolve the damage relations of a move's type
    async fn type_relations(&self, attacking: Type) -> Result<TypeRelations>;
}
