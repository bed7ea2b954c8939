#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PartitionError {
    /// Partition table must have at least one partition.
    #[error("Partition count must be greater than zero")]
    ZeroPartitions,

    /// Raw role tag is neither primary nor backup.
    #[error("Unknown partition kind: {0}")]
    UnknownKind(u8),
}

pub type PartitionResult<T> = Result<T, PartitionError>;
