use {
    super::{Kind, Member},
    arc_swap::ArcSwap,
    parking_lot::Mutex,
    std::{fmt, sync::Arc},
};

/// Partition identifier, zero-based and below the table's partition count.
pub type PartitionId = u64;

/// Immutable snapshot of a partition's owners, highest ranked first.
pub type Owners<M> = Arc<Vec<M>>;

/// One logical shard of the keyspace under a single replication role.
///
/// The owner list is never mutated in place. Every change publishes a fresh
/// list with a single atomic pointer swap, so readers always see a complete
/// snapshot: either the one before a write or the one after it.
///
/// Reads are lock-free. Writers are serialized by a per-partition mutex that
/// readers never touch.
pub struct Partition<M: Member> {
    id: PartitionId,
    kind: Kind,
    owners: ArcSwap<Vec<M>>,
    write_lock: Mutex<()>,
}

impl<M: Member> Partition<M> {
    /// Creates a partition with an empty owner list.
    pub(crate) fn new(id: PartitionId, kind: Kind) -> Self {
        Self {
            id,
            kind,
            owners: ArcSwap::from_pointee(Vec::new()),
            write_lock: Mutex::new(()),
        }
    }

    pub fn id(&self) -> PartitionId {
        self.id
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the current owner snapshot.
    ///
    /// The snapshot stays valid (and unchanged) for as long as the caller
    /// holds it, regardless of later replacements.
    pub fn owners(&self) -> Owners<M> {
        self.owners.load_full()
    }

    /// Returns the highest ranked owner, `None` if no owner is assigned yet.
    pub fn owner(&self) -> Option<M> {
        self.owners.load().first().cloned()
    }

    /// Number of owners in the current snapshot.
    pub fn owner_count(&self) -> usize {
        self.owners.load().len()
    }

    /// Checks whether the member appears in the current owner list.
    pub fn is_owner(&self, member: &M) -> bool {
        self.owners.load().contains(member)
    }

    /// Installs a new owner list, returning the one it replaced.
    pub fn set_owners(&self, owners: Vec<M>) -> Owners<M> {
        let _guard = self.write_lock.lock();
        self.publish(owners)
    }

    /// Replaces the owner list with one derived from the current list.
    ///
    /// The closure receives the current snapshot and returns the next one.
    /// Concurrent writers to the same partition are serialized, so no update
    /// is lost between the read and the publish. Returns the replaced list.
    pub fn update_owners<F>(&self, f: F) -> Owners<M>
    where
        F: FnOnce(&[M]) -> Vec<M>,
    {
        let _guard = self.write_lock.lock();
        let next = f(&self.owners.load());
        self.publish(next)
    }

    // Must be called with `write_lock` held.
    fn publish(&self, owners: Vec<M>) -> Owners<M> {
        let new_count = owners.len();
        let previous = self.owners.swap(Arc::new(owners));
        tracing::trace!(
            partition = self.id,
            kind = %self.kind,
            old_owners = previous.len(),
            new_owners = new_count,
            "partition owners replaced"
        );
        previous
    }
}

impl<M: Member> fmt::Debug for Partition<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Partition")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("owner_count", &self.owner_count())
            .finish_non_exhaustive()
    }
}
