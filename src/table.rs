use {
    super::{
        DefaultHasher,
        Hasher,
        Kind,
        Member,
        PartitionError,
        PartitionResult,
        partition::{Owners, Partition, PartitionId},
    },
    std::{fmt, ops::Index},
};

/// Keys up to this combined length are hashed from a stack buffer.
const INLINE_KEY_LEN: usize = 128;

/// Partition table for a single replication role.
///
/// The keyspace is divided into a fixed number of partitions. A key is routed
/// by hashing the concatenation of its namespace and the key itself (the
/// "hkey") and taking the hkey modulo the partition count. Each partition
/// carries the ordered list of members that currently own it.
///
/// The table layout is fixed at construction: all partitions exist from the
/// start and none are ever added or removed. Only the owner lists change, and
/// each one is replaced atomically (see [`Partition`]).
pub struct PartitionTable<M: Member, H: Hasher = DefaultHasher> {
    kind: Kind,
    hasher: H,
    partitions: Box<[Partition<M>]>,
}

impl<M: Member, H: Hasher> Index<PartitionId> for PartitionTable<M, H> {
    type Output = Partition<M>;

    fn index(&self, id: PartitionId) -> &Self::Output {
        self.partition_by_id(id)
    }
}

impl<M: Member, H: Hasher> PartitionTable<M, H> {
    /// Creates a table with `count` unassigned partitions.
    pub fn new(count: u64, kind: Kind, hasher: H) -> PartitionResult<Self> {
        if count == 0 {
            return Err(PartitionError::ZeroPartitions);
        }

        let partitions = (0..count).map(|id| Partition::new(id, kind)).collect();
        tracing::debug!(count, %kind, "partition table created");

        Ok(Self {
            kind,
            hasher,
            partitions,
        })
    }

    /// Number of partitions in the table.
    pub fn count(&self) -> u64 {
        self.partitions.len() as u64
    }

    /// Replication role of all partitions in the table.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the partition with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` is not below [`count()`](Self::count). Partition ids are
    /// produced by the table itself, so an out-of-range id is a caller bug.
    pub fn partition_by_id(&self, id: PartitionId) -> &Partition<M> {
        match self.get(id) {
            Some(part) => part,
            None => panic!(
                "partition id {id} out of range for {} table of {} partitions",
                self.kind,
                self.count()
            ),
        }
    }

    /// Returns the partition with the given id, `None` if out of range.
    pub fn get(&self, id: PartitionId) -> Option<&Partition<M>> {
        usize::try_from(id)
            .ok()
            .and_then(|idx| self.partitions.get(idx))
    }

    /// Returns the id of the partition an hkey falls into.
    pub fn partition_id_by_hkey(&self, hkey: u64) -> PartitionId {
        hkey % self.count()
    }

    /// Returns the partition an hkey falls into.
    pub fn partition_by_hkey(&self, hkey: u64) -> &Partition<M> {
        self.partition_by_id(self.partition_id_by_hkey(hkey))
    }

    /// Computes the hkey of a key within a namespace.
    ///
    /// The hash covers `namespace` immediately followed by `key`, without a
    /// separator. Changing this layout moves every key to a different
    /// partition.
    pub fn hkey(&self, namespace: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> u64 {
        let (namespace, key) = (namespace.as_ref(), key.as_ref());
        let len = namespace.len() + key.len();

        if len <= INLINE_KEY_LEN {
            let mut buf = [0u8; INLINE_KEY_LEN];
            buf[..namespace.len()].copy_from_slice(namespace);
            buf[namespace.len()..len].copy_from_slice(key);
            self.hasher.sum64(&buf[..len])
        } else {
            let mut buf = Vec::with_capacity(len);
            buf.extend_from_slice(namespace);
            buf.extend_from_slice(key);
            self.hasher.sum64(&buf)
        }
    }

    /// Returns the owner snapshot of the partition an hkey falls into.
    pub fn owners_by_hkey(&self, hkey: u64) -> Owners<M> {
        self.partition_by_hkey(hkey).owners()
    }

    /// Returns the owner snapshot of the partition with the given id.
    ///
    /// Panics on an out-of-range id, like [`partition_by_id`](Self::partition_by_id).
    pub fn owners_by_id(&self, id: PartitionId) -> Owners<M> {
        self.partition_by_id(id).owners()
    }

    /// Returns the highest ranked owner of a key, along with the key's hkey.
    ///
    /// The owner is `None` while the key's partition has no owners assigned
    /// (e.g. during cluster bootstrap).
    pub fn owner(&self, namespace: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> (Option<M>, u64) {
        let hkey = self.hkey(namespace, key);
        (self.partition_by_hkey(hkey).owner(), hkey)
    }

    /// Installs a new owner list for the partition, returning the replaced one.
    ///
    /// Panics on an out-of-range id, like [`partition_by_id`](Self::partition_by_id).
    pub fn set_owners(&self, id: PartitionId, owners: Vec<M>) -> Owners<M> {
        self.partition_by_id(id).set_owners(owners)
    }

    /// Iterator over all partitions, in id order.
    pub fn iter(&self) -> impl Iterator<Item = &Partition<M>> {
        self.partitions.iter()
    }

    /// Ids of the partitions whose current owner list contains the member.
    pub fn partitions_owned_by(&self, member: &M) -> Vec<PartitionId> {
        self.iter()
            .filter(|part| part.is_owner(member))
            .map(Partition::id)
            .collect()
    }
}

impl<M: Member, H: Hasher> fmt::Debug for PartitionTable<M, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PartitionTable")
            .field("kind", &self.kind)
            .field("count", &self.count())
            .finish_non_exhaustive()
    }
}
