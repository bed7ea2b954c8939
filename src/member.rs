/// Cluster member that can own partitions.
///
/// Members are produced by the membership layer and are opaque to the
/// partition table: they are stored inside owner lists and handed back to
/// callers, and only ever compared for equality.
pub trait Member: Clone + PartialEq + Send + Sync + 'static {}

impl<T> Member for T where T: Clone + PartialEq + Send + Sync + 'static {}
