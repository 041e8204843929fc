// Building maps from sequences by deriving a key per element
use crate::util::into_ok;

use std::collections::{btree_map, hash_map, BTreeMap, HashMap};
use std::convert::Infallible;
use std::hash::{BuildHasher, Hash};

/// Maps that can be filled by [Keyed]
pub trait KeyedMap<K, V>: Default {
    /// Store `value` under `key`, returning the value it displaced
    fn insert_last(&mut self, key: K, value: V) -> Option<V>;

    /// Store `value` under `key`, resolving collisions with `resolve`.
    ///
    /// For a new key `value` is stored as is. Otherwise the stored value
    /// is replaced by `resolve(&key, stored, value)`. If `resolve` fails
    /// the entry for `key` may be missing.
    fn try_insert_resolving<E, R>(
        &mut self,
        key: K,
        value: V,
        resolve: R,
    ) -> Result<(), E>
    where
        R: FnOnce(&K, V, V) -> Result<V, E>;
}

impl<K, V, S> KeyedMap<K, V> for HashMap<K, V, S>
where
    K: Hash + Eq,
    S: BuildHasher + Default,
{
    fn insert_last(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn try_insert_resolving<E, R>(
        &mut self,
        key: K,
        value: V,
        resolve: R,
    ) -> Result<(), E>
    where
        R: FnOnce(&K, V, V) -> Result<V, E>,
    {
        match self.entry(key) {
            hash_map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
            hash_map::Entry::Occupied(slot) => {
                trace!("key collision, resolving");
                let (key, stored) = slot.remove_entry();
                let resolved = resolve(&key, stored, value)?;
                self.insert(key, resolved);
            }
        }
        Ok(())
    }
}

impl<K: Ord, V> KeyedMap<K, V> for BTreeMap<K, V> {
    fn insert_last(&mut self, key: K, value: V) -> Option<V> {
        self.insert(key, value)
    }

    fn try_insert_resolving<E, R>(
        &mut self,
        key: K,
        value: V,
        resolve: R,
    ) -> Result<(), E>
    where
        R: FnOnce(&K, V, V) -> Result<V, E>,
    {
        match self.entry(key) {
            btree_map::Entry::Vacant(slot) => {
                slot.insert(value);
            }
            btree_map::Entry::Occupied(slot) => {
                trace!("key collision, resolving");
                let (key, stored) = slot.remove_entry();
                let resolved = resolve(&key, stored, value)?;
                self.insert(key, resolved);
            }
        }
        Ok(())
    }
}

/// Build maps from sequences, one entry per distinct key
///
/// Every element is visited exactly once, in iteration order.
///
/// # Example
///
/// ```rust
/// use seqext::Keyed;
///
/// let words = ["apple", "avocado", "banana"];
/// let by_initial = words.keyed_by(|w| w.chars().next());
/// assert_eq!(by_initial[&Some('a')], "avocado");
/// assert_eq!(by_initial[&Some('b')], "banana");
/// ```
pub trait Keyed: IntoIterator + Sized {
    /// Map each element to its key, keeping the last element per key
    fn keyed_by<K, F>(self, key: F) -> HashMap<K, Self::Item>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
    {
        self.keyed_into(key)
    }

    /// Map each element to its key, keeping the last element per key
    ///
    /// The first error returned by `key` is passed on.
    fn try_keyed_by<K, E, F>(self, key: F) -> Result<HashMap<K, Self::Item>, E>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> Result<K, E>,
    {
        self.try_keyed_into(key)
    }

    /// Map each element to its key, merging elements with equal keys
    ///
    /// When a key is seen again, `resolve` receives the key, the value
    /// stored so far and the new element, in this order. Its result
    /// becomes the stored value. Repeated collisions are thus folded
    /// from the left in iteration order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use seqext::Keyed;
    ///
    /// let pairs = vec![(1, "a".to_owned()), (2, "b".to_owned()), (1, "c".to_owned())];
    /// let map = pairs.keyed_by_resolving(
    ///     |p| p.0,
    ///     |_, (k, old), (_, new)| (k, old + &new)
    /// );
    /// assert_eq!(map[&1], (1, "ac".to_owned()));
    /// assert_eq!(map[&2], (2, "b".to_owned()));
    /// ```
    fn keyed_by_resolving<K, F, R>(
        self,
        key: F,
        resolve: R,
    ) -> HashMap<K, Self::Item>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> K,
        R: FnMut(&K, Self::Item, Self::Item) -> Self::Item,
    {
        self.keyed_into_resolving(key, resolve)
    }

    /// Fallible version of [Keyed::keyed_by_resolving]
    ///
    /// The first error returned by `key` or `resolve` is passed on and
    /// the partially built map is dropped.
    fn try_keyed_by_resolving<K, E, F, R>(
        self,
        key: F,
        resolve: R,
    ) -> Result<HashMap<K, Self::Item>, E>
    where
        K: Hash + Eq,
        F: FnMut(&Self::Item) -> Result<K, E>,
        R: FnMut(&K, Self::Item, Self::Item) -> Result<Self::Item, E>,
    {
        self.try_keyed_into_resolving(key, resolve)
    }

    /// Like [Keyed::keyed_by], but fill any [KeyedMap]
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use seqext::Keyed;
    ///
    /// let map: BTreeMap<_, _> = (1..=5).keyed_into(|x| x % 2);
    /// assert_eq!(map.into_iter().collect::<Vec<_>>(), [(0, 4), (1, 5)]);
    /// ```
    fn keyed_into<M, K, F>(self, mut key: F) -> M
    where
        M: KeyedMap<K, Self::Item>,
        F: FnMut(&Self::Item) -> K,
    {
        into_ok(self.try_keyed_into(|e| Ok::<_, Infallible>(key(e))))
    }

    fn try_keyed_into<M, K, E, F>(self, mut key: F) -> Result<M, E>
    where
        M: KeyedMap<K, Self::Item>,
        F: FnMut(&Self::Item) -> Result<K, E>,
    {
        let mut map = M::default();
        for elem in self {
            let k = key(&elem)?;
            map.insert_last(k, elem);
        }
        Ok(map)
    }

    fn keyed_into_resolving<M, K, F, R>(self, mut key: F, mut resolve: R) -> M
    where
        M: KeyedMap<K, Self::Item>,
        F: FnMut(&Self::Item) -> K,
        R: FnMut(&K, Self::Item, Self::Item) -> Self::Item,
    {
        into_ok(self.try_keyed_into_resolving(
            |e| Ok::<_, Infallible>(key(e)),
            |k, stored, new| Ok(resolve(k, stored, new)),
        ))
    }

    fn try_keyed_into_resolving<M, K, E, F, R>(
        self,
        mut key: F,
        mut resolve: R,
    ) -> Result<M, E>
    where
        M: KeyedMap<K, Self::Item>,
        F: FnMut(&Self::Item) -> Result<K, E>,
        R: FnMut(&K, Self::Item, Self::Item) -> Result<Self::Item, E>,
    {
        let mut map = M::default();
        for elem in self {
            let k = key(&elem)?;
            map.try_insert_resolving(k, elem, &mut resolve)?;
        }
        Ok(map)
    }
}

impl<I: IntoIterator> Keyed for I {}
