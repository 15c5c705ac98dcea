use std::fmt::{Display, Formatter};

/// Handle to a node stored in a [`Tree`][crate::ast::Tree] arena.
///
/// Handles are only meaningful for the tree that issued them.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeId(u32);

impl NodeId {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the internal representation of the handle.
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Return the arena index of the handle.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<usize> for NodeId {
    fn from(index: usize) -> Self {
        assert!(index <= u32::MAX as usize, "node arena overflow");
        Self(index as u32)
    }
}

impl Display for NodeId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        let id = NodeId::from(42usize);
        assert_eq!(id.index(), 42);
        assert_eq!(id.get(), 42);
        assert_eq!(id, NodeId::new(42));
    }

    #[test]
    fn test_display() {
        assert_eq!(NodeId::new(7).to_string(), "@7");
    }
}
