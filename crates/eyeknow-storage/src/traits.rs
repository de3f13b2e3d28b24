//! The [`ObjectStore`] trait defining the storage contract for class sync.
//!
//! The handle is constructed by the caller and passed down explicitly, so
//! every test can run against an isolated in-memory or temporary store. All
//! backends implement identical custom-partition semantics and are fully
//! swappable. The trait is synchronous; the whole pipeline is single-threaded
//! by design.

use eyeknow_core::ObjectRecord;

use crate::error::StorageError;

/// The storage contract for the `objects` table's custom partition.
///
/// Implementations must never read, write, or delete built-in rows
/// (`class_id < 1000`); that partition belongs to an external process.
pub trait ObjectStore {
    /// Replaces the custom partition with one row per label.
    ///
    /// As a single durable unit: delete every row with `class_id >= 1000`,
    /// then insert `(1000 + i, names[i], "Custom object: " + names[i])` for
    /// each `i`. If the underlying store fails mid-batch, no partial custom
    /// rows remain visible. An empty `names` leaves the partition empty;
    /// that is replace semantics, not an error.
    ///
    /// Returns the custom partition as read back after the commit, ordered
    /// by `class_id`, as confirmation of what is now stored.
    fn sync_custom_classes(&mut self, names: &[String])
        -> Result<Vec<ObjectRecord>, StorageError>;

    /// Reads the custom partition, ordered by `class_id`.
    fn list_custom_classes(&self) -> Result<Vec<ObjectRecord>, StorageError>;
}

/// A mutable borrow of a store is itself a store, so callers can lend a
/// backend to the pipeline and keep inspecting it afterwards.
impl<S: ObjectStore + ?Sized> ObjectStore for &mut S {
    fn sync_custom_classes(
        &mut self,
        names: &[String],
    ) -> Result<Vec<ObjectRecord>, StorageError> {
        (**self).sync_custom_classes(names)
    }

    fn list_custom_classes(&self) -> Result<Vec<ObjectRecord>, StorageError> {
        (**self).list_custom_classes()
    }
}
