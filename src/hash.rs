use {auto_impl::auto_impl, rapidhash::rapidhash};

/// 64-bit hash function used to place keys into partitions.
///
/// Implementations must be deterministic and stable across calls and process
/// restarts: the same bytes always produce the same value, otherwise keys
/// would silently move between partitions.
#[auto_impl(&, Box, Arc)]
pub trait Hasher: Send + Sync {
    /// Returns the 64-bit hash of the given bytes.
    fn sum64(&self, bytes: &[u8]) -> u64;
}

/// Default hasher for partition tables.
///
/// This uses the rapidhash algorithm with its default seed and secrets.
/// The output is portable across platforms and releases.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultHasher;

impl Hasher for DefaultHasher {
    fn sum64(&self, bytes: &[u8]) -> u64 {
        rapidhash(bytes)
    }
}
