use {
    super::{DefaultHasher, Hasher, Kind, Member, PartitionResult, PartitionTable},
    std::marker::PhantomData,
};

/// Default number of partitions.
///
/// A prime, so that hkeys with common factors still spread evenly.
pub const DEFAULT_PARTITION_COUNT: u64 = 271;

/// Partition table builder.
pub struct PartitionTableBuilder<M: Member, H: Hasher = DefaultHasher> {
    count: u64,
    kind: Kind,
    hasher: H,
    _member: PhantomData<fn() -> M>,
}

impl<M: Member> Default for PartitionTableBuilder<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Member> PartitionTableBuilder<M> {
    /// Create new builder with default partition count, primary role and
    /// default hasher.
    pub fn new() -> Self {
        Self {
            count: DEFAULT_PARTITION_COUNT,
            kind: Kind::Primary,
            hasher: DefaultHasher,
            _member: PhantomData,
        }
    }
}

impl<M: Member, H: Hasher> PartitionTableBuilder<M, H> {
    /// Set the number of partitions.
    pub fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    /// Set the replication role of the table.
    pub fn with_kind(mut self, kind: Kind) -> Self {
        self.kind = kind;
        self
    }

    /// Transform the builder into one with a different hasher.
    pub fn with_hasher<CustomH: Hasher>(self, hasher: CustomH) -> PartitionTableBuilder<M, CustomH> {
        PartitionTableBuilder {
            count: self.count,
            kind: self.kind,
            hasher,
            _member: PhantomData,
        }
    }

    /// Build the partition table.
    pub fn build(self) -> PartitionResult<PartitionTable<M, H>> {
        PartitionTable::new(self.count, self.kind, self.hasher)
    }
}
