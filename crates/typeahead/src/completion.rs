//! # Prefix maps
//!
//! ## Overview
//!
//! This module contains [CompletionMap], the prefix-searchable map that backs both the static
//! dictionary and the learned word frequencies.
use std::borrow::Borrow;

use radix_trie::{Trie, TrieCommon, TrieKey};

use crate::util::prefix_entries;

#[derive(Clone, Debug, Eq, PartialEq)]
struct StrLike<K: AsRef<str> + Clone + Eq>(K);

impl<K> Borrow<str> for StrLike<K>
where
    K: AsRef<str> + Clone + Eq,
{
    fn borrow(&self) -> &str {
        self.0.as_ref()
    }
}

impl<K> TrieKey for StrLike<K>
where
    K: AsRef<str> + Clone + Eq,
{
    fn encode_bytes(&self) -> Vec<u8> {
        str::encode_bytes(self.borrow())
    }
}

/// Maps keys onto values with support for listing keys by prefix.
///
/// Keys are visited in lexicographic byte order.
#[derive(Clone, Debug)]
pub struct CompletionMap<K, V>
where
    K: AsRef<str> + Clone + Eq,
{
    trie: Trie<StrLike<K>, V>,
}

impl<K, V> CompletionMap<K, V>
where
    K: AsRef<str> + Clone + Eq,
{
    /// Whether this map contains zero keys.
    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// The number of keys in this map.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    /// Map the given key onto the given value.
    pub fn insert(&mut self, k: K, v: V) -> Option<V> {
        self.trie.insert(StrLike(k), v)
    }

    /// Whether the given key is mapped.
    pub fn contains_key<Q>(&self, k: &Q) -> bool
    where
        Q: AsRef<str> + ?Sized,
    {
        self.trie.get(k.as_ref()).is_some()
    }

    /// Get an immutable reference to a value if the key exists.
    pub fn get<Q>(&self, k: &Q) -> Option<&V>
    where
        Q: AsRef<str> + ?Sized,
    {
        self.trie.get(k.as_ref())
    }

    /// Get a mutable reference to a value for the given key.
    ///
    /// If the key is unmapped, then this will insert a [Default] value first.
    pub fn get_or_default(&mut self, k: K) -> &mut V
    where
        V: Default,
    {
        if self.trie.get(k.as_ref()).is_none() {
            self.trie.insert(StrLike(k.clone()), V::default());
        }

        self.trie
            .get_mut(k.as_ref())
            .expect("default value should have been inserted")
    }

    /// Iterate over the entries whose keys start with `prefix`.
    pub fn complete_entries<'a, 'b>(
        &'a self,
        prefix: &'b str,
    ) -> impl Iterator<Item = (&'a K, &'a V)> + 'b
    where
        'a: 'b,
    {
        prefix_entries(&self.trie, prefix).map(|(k, v)| (&k.0, v))
    }

    /// Returns an iterator over the entries
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.trie.iter().map(|(k, v)| (&k.0, v))
    }
}

impl<K, V> Default for CompletionMap<K, V>
where
    K: AsRef<str> + Clone + Eq,
{
    fn default() -> Self {
        CompletionMap { trie: Trie::new() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mkmap() -> CompletionMap<String, usize> {
        let mut map = CompletionMap::default();

        map.insert("press".into(), 1);
        map.insert("pressed".into(), 1);
        map.insert("presses".into(), 1);
        map.insert("pressing".into(), 1);
        map.insert("pressure".into(), 1);
        map.insert("pressured".into(), 1);
        map.insert("pressurize".into(), 1);
        map.insert("dressed".into(), 1);

        return map;
    }

    fn keys(map: &CompletionMap<String, usize>, prefix: &str) -> Vec<String> {
        map.complete_entries(prefix).map(|(k, _)| k.clone()).collect()
    }

    #[test]
    fn test_map_complete() {
        let map = mkmap();

        let res = keys(&map, "presse");
        assert_eq!(res, strs!["pressed", "presses"]);

        let res = keys(&map, "pressur");
        assert_eq!(res, strs!["pressure", "pressured", "pressurize"]);

        let res = keys(&map, "press");
        assert_eq!(res, strs![
            "press",
            "pressed",
            "presses",
            "pressing",
            "pressure",
            "pressured",
            "pressurize"
        ]);

        let res = keys(&map, "xyz");
        assert_eq!(res, Vec::<String>::new());
    }

    #[test]
    fn test_map_get_or_default() {
        let mut map = mkmap();

        *map.get_or_default("pressed".into()) += 1;
        *map.get_or_default("impressed".into()) += 1;

        assert_eq!(map.get("pressed"), Some(&2));
        assert_eq!(map.get("impressed"), Some(&1));
        assert_eq!(map.len(), 9);
        assert!(map.contains_key("impressed"));
        assert!(!map.contains_key("dress"));
    }

    #[test]
    fn test_map_complete_entries() {
        let mut map = CompletionMap::<String, &str>::default();
        map.insert("sunny".into(), "Sunny");
        map.insert("sunset".into(), "SUNSET");

        let res: Vec<_> = map.complete_entries("sun").map(|(_, v)| *v).collect();
        assert_eq!(res, vec!["Sunny", "SUNSET"]);
    }
}
