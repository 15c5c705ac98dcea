//! Compact set of node handles.
//!
//! Used by [`Tree`][crate::ast::Tree] to tag handles that were orphaned by
//! simplification, so that pending traversals can skip them.

use crate::reference::NodeId;

/// A bit set over [`NodeId`]s, backed by a vector of `u64` words.
///
/// The set grows automatically when a handle beyond the current capacity is inserted.
#[derive(Debug, Clone, Default)]
pub struct BitSet {
    words: Vec<u64>,
    count: usize,
}

impl BitSet {
    const BITS_PER_WORD: usize = 64;

    /// Creates an empty set able to hold `capacity` handles without growing.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity.div_ceil(Self::BITS_PER_WORD)],
            count: 0,
        }
    }

    /// Returns the number of handles in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    #[inline]
    fn locate(id: NodeId) -> (usize, u64) {
        let index = id.index();
        (index / Self::BITS_PER_WORD, 1u64 << (index % Self::BITS_PER_WORD))
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        let (word, mask) = Self::locate(id);
        self.words.get(word).is_some_and(|w| w & mask != 0)
    }

    /// Adds `id` to the set. Returns `true` if it was not present before.
    pub fn insert(&mut self, id: NodeId) -> bool {
        let (word, mask) = Self::locate(id);
        if word >= self.words.len() {
            self.words.resize(word + 1, 0);
        }
        let was_clear = self.words[word] & mask == 0;
        if was_clear {
            self.words[word] |= mask;
            self.count += 1;
        }
        was_clear
    }

    /// Iterates over the handles in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.words.iter().enumerate().flat_map(|(w, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(NodeId::from(w * Self::BITS_PER_WORD + bit))
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        let bs = BitSet::default();
        assert!(bs.is_empty());
        assert!(!bs.contains(NodeId::new(0)));
        assert!(!bs.contains(NodeId::new(1000)));
    }

    #[test]
    fn test_insert_contains() {
        let mut bs = BitSet::new(16);
        assert!(bs.insert(NodeId::new(3)));
        assert!(!bs.insert(NodeId::new(3)));
        assert!(bs.contains(NodeId::new(3)));
        assert!(!bs.contains(NodeId::new(4)));
        assert_eq!(bs.len(), 1);
    }

    #[test]
    fn test_auto_grow() {
        let mut bs = BitSet::new(0);
        bs.insert(NodeId::new(130));
        assert!(bs.contains(NodeId::new(130)));
        assert_eq!(bs.len(), 1);
    }

    #[test]
    fn test_iter() {
        let mut bs = BitSet::new(100);
        for i in [65, 3, 64, 10] {
            bs.insert(NodeId::new(i));
        }
        let ids: Vec<u32> = bs.iter().map(NodeId::get).collect();
        assert_eq!(ids, vec![3, 10, 64, 65]);
    }
}
