use {
    super::{PartitionError, PartitionResult},
    std::fmt,
};

/// Replication role of a partition table.
///
/// A store runs two tables over the same keyspace: one tracks primary owners,
/// the other tracks backup owners. The discriminants match the wire tags used
/// by the rest of the cluster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Kind {
    Primary = 1,
    Backup = 2,
}

impl Kind {
    /// Human-readable name of the role.
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Primary => "Primary",
            Kind::Backup => "Backup",
        }
    }

    /// Name of a raw role tag, `"Unknown"` for anything that is not a role.
    pub fn name_of(raw: u8) -> &'static str {
        Kind::try_from(raw).map_or("Unknown", |kind| kind.as_str())
    }
}

impl TryFrom<u8> for Kind {
    type Error = PartitionError;

    fn try_from(raw: u8) -> PartitionResult<Self> {
        match raw {
            1 => Ok(Kind::Primary),
            2 => Ok(Kind::Backup),
            other => Err(PartitionError::UnknownKind(other)),
        }
    }
}

impl From<Kind> for u8 {
    fn from(kind: Kind) -> Self {
        kind as u8
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
