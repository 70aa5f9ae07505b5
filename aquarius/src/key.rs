#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

#[cfg(feature = "std")]
pub(crate) type KeyMap<K, V> = HashMap<K, V>;
#[cfg(not(feature = "std"))]
pub(crate) type KeyMap<K, V> = BTreeMap<K, V>;

/// Bound for item kinds and other lookup keys.
///
/// With `std` this is `Hash + Eq` (hash maps); without it, `Ord` (B-tree maps).
#[cfg(feature = "std")]
pub trait LookupKey: core::hash::Hash + Eq {}
#[cfg(feature = "std")]
impl<K: core::hash::Hash + Eq> LookupKey for K {}

#[cfg(not(feature = "std"))]
pub trait LookupKey: Ord {}
#[cfg(not(feature = "std"))]
impl<K: Ord> LookupKey for K {}
