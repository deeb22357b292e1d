use crate::error::StoreResult;

/// Persistent ordered collection of entities.
///
/// Provides abstraction over where a store's entities live, enabling
/// different implementations (JSON file, in-memory mock). The in-memory
/// list is authoritative; `save_changes` writes a full snapshot of it.
pub trait Repository<T>: Send {
    /// The live in-memory collection, in stored order.
    fn get_all(&self) -> &[T];

    /// Mutable access to the live collection for in-place edits and inserts.
    fn get_all_mut(&mut self) -> &mut Vec<T>;

    /// Append an entity in memory only.
    fn add(&mut self, item: T);

    /// Overwrite the backing storage with the full in-memory list.
    fn save_changes(&self) -> StoreResult<()>;

    /// Replace the in-memory list with the backing storage contents.
    fn load(&mut self) -> StoreResult<()>;
}
