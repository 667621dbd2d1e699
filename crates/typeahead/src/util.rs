use std::borrow::Borrow;

use radix_trie::{Trie, TrieCommon, TrieKey};

#[allow(unused_macros)]
macro_rules! strs {
    ( $( $ss: expr ),* ) => {
        vec![ $( String::from($ss), )* ]
    };
}

/// Iterate over every entry in `trie` whose key starts with `prefix`, in key order.
#[inline]
pub(crate) fn prefix_entries<'a, 'b, K, V>(
    trie: &'a Trie<K, V>,
    prefix: &'b str,
) -> impl Iterator<Item = (&'a K, &'a V)> + 'b
where
    'a: 'b,
    K: Borrow<str> + Clone + TrieKey,
{
    let entries = if prefix.is_empty() {
        Some(trie.iter())
    } else {
        trie.get_raw_descendant(prefix).map(|sub| sub.iter())
    };

    entries
        .into_iter()
        .flatten()
        .filter(move |(k, _)| Borrow::<str>::borrow(*k).starts_with(prefix))
}

/// Calculate the next index when moving forward through a list of `modulus` items.
///
/// `None` sits just before the first item. An empty list leaves `index` untouched.
pub(crate) fn idx_wrap_next(index: Option<usize>, modulus: usize) -> Option<usize> {
    if modulus == 0 {
        return index;
    }

    match index {
        None => Some(0),
        Some(idx) => Some(idx.wrapping_add(1) % modulus),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idx_wrap_next() {
        assert_eq!(idx_wrap_next(None, 3), Some(0));
        assert_eq!(idx_wrap_next(Some(0), 3), Some(1));
        assert_eq!(idx_wrap_next(Some(2), 3), Some(0));

        // Stale indices from a longer list still land inside the new one.
        assert_eq!(idx_wrap_next(Some(7), 3), Some(2));
        assert_eq!(idx_wrap_next(Some(usize::MAX), 3), Some(0));

        // Nothing to move through.
        assert_eq!(idx_wrap_next(None, 0), None);
        assert_eq!(idx_wrap_next(Some(0), 0), Some(0));
    }

    #[test]
    fn test_prefix_entries() {
        let mut trie = Trie::<String, usize>::new();
        trie.insert("sunny".into(), 1);
        trie.insert("sunset".into(), 2);
        trie.insert("summer".into(), 3);
        trie.insert("what".into(), 4);

        let keys: Vec<&String> = prefix_entries(&trie, "sun").map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["sunny", "sunset"]);

        let keys: Vec<&String> = prefix_entries(&trie, "su").map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["summer", "sunny", "sunset"]);

        assert_eq!(prefix_entries(&trie, "").count(), 4);
        assert_eq!(prefix_entries(&trie, "x").count(), 0);
        assert_eq!(prefix_entries(&trie, "sunnyside").count(), 0);
    }
}
