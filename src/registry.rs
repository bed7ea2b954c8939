use {
    super::{
        DefaultHasher,
        Hasher,
        Kind,
        Member,
        PartitionResult,
        PartitionTable,
        partition::PartitionId,
    },
    std::{fmt, sync::Arc},
};

/// Primary and backup partition tables of a store.
///
/// Both tables share the partition count and the hasher, so a key always
/// lands on the same partition id in either role, while each role keeps its
/// own independently assigned owner lists.
pub struct OwnershipRegistry<M: Member, H: Hasher = DefaultHasher> {
    primary: PartitionTable<M, Arc<H>>,
    backup: PartitionTable<M, Arc<H>>,
}

impl<M: Member, H: Hasher> OwnershipRegistry<M, H> {
    /// Creates both tables with `count` unassigned partitions each.
    pub fn new(count: u64, hasher: H) -> PartitionResult<Self> {
        let hasher = Arc::new(hasher);
        Ok(Self {
            primary: PartitionTable::new(count, Kind::Primary, Arc::clone(&hasher))?,
            backup: PartitionTable::new(count, Kind::Backup, hasher)?,
        })
    }

    pub fn primary(&self) -> &PartitionTable<M, Arc<H>> {
        &self.primary
    }

    pub fn backup(&self) -> &PartitionTable<M, Arc<H>> {
        &self.backup
    }

    /// Returns the table for the given replication role.
    pub fn table(&self, kind: Kind) -> &PartitionTable<M, Arc<H>> {
        match kind {
            Kind::Primary => &self.primary,
            Kind::Backup => &self.backup,
        }
    }

    /// Number of partitions, identical for both roles.
    pub fn count(&self) -> u64 {
        self.primary.count()
    }

    /// Computes the hkey of a key within a namespace.
    pub fn hkey(&self, namespace: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> u64 {
        self.primary.hkey(namespace, key)
    }

    /// Returns the id of the partition holding a key, in both roles.
    pub fn partition_id(&self, namespace: impl AsRef<[u8]>, key: impl AsRef<[u8]>) -> PartitionId {
        self.primary.partition_id_by_hkey(self.hkey(namespace, key))
    }
}

impl<M: Member, H: Hasher> fmt::Debug for OwnershipRegistry<M, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OwnershipRegistry")
            .field("primary", &self.primary)
            .field("backup", &self.backup)
            .finish()
    }
}
