//! Partition ownership table for distributed key/value stores.
//!
//! The keyspace is split into a fixed number of partitions. Keys are routed
//! to a partition by hashing `namespace ++ key` and taking the result modulo
//! the partition count. Every partition tracks the ordered list of cluster
//! members that own it, per replication role ([`Kind::Primary`] or
//! [`Kind::Backup`]).
//!
//! Owner lists sit on the read path of every store operation, so reading them
//! is lock-free: each list is an immutable snapshot, and ownership changes
//! publish a new snapshot with one atomic swap. Deciding *who* owns a
//! partition is left to the rebalancer; this crate only stores the decision.
//!
//! ```
//! use partitions::{DefaultHasher, Kind, PartitionTable};
//!
//! let table = PartitionTable::new(271, Kind::Primary, DefaultHasher).unwrap();
//!
//! let hkey = table.hkey("users", "42");
//! let id = table.partition_id_by_hkey(hkey);
//! table.set_owners(id, vec!["10.0.0.1:3320".to_string()]);
//!
//! let (owner, _) = table.owner("users", "42");
//! assert_eq!(owner.as_deref(), Some("10.0.0.1:3320"));
//! ```

mod builder;
mod error;
mod hash;
mod kind;
mod member;
mod partition;
mod registry;
mod table;

pub use {
    builder::{DEFAULT_PARTITION_COUNT, PartitionTableBuilder},
    error::{PartitionError, PartitionResult},
    hash::{DefaultHasher, Hasher},
    kind::Kind,
    member::Member,
    partition::{Owners, Partition, PartitionId},
    registry::OwnershipRegistry,
    table::PartitionTable,
};
