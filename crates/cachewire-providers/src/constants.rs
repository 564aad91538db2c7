//! Provider constants

/// Maximum number of entries held by a [`MokaItemPool`](crate::cache::MokaItemPool)
pub const POOL_DEFAULT_CAPACITY: u64 = 10_000;

/// JSON stored for an item saved without a value
pub const EMPTY_ITEM_VALUE: &str = "null";
