#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

/// Maps an item id to the index of the item carrying it.
#[cfg(feature = "std")]
pub(crate) type IdMap<K> = HashMap<K, usize>;
#[cfg(not(feature = "std"))]
pub(crate) type IdMap<K> = BTreeMap<K, usize>;

/// Bound for item ids.
///
/// With `std` ids are hashed; without it they are ordered.
#[cfg(feature = "std")]
pub trait ItemId: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> ItemId for K {}

#[cfg(not(feature = "std"))]
pub trait ItemId: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> ItemId for K {}
