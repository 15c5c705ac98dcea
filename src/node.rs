use crate::reference::NodeId;

/// A single syntax tree node.
///
/// Terminals have no children, unary operator nodes have only `left`,
/// binary operator nodes have both `left` and `right`.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Node {
    pub value: char,
    pub left: Option<NodeId>,
    pub right: Option<NodeId>,
}

impl Node {
    pub const fn leaf(value: char) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub const fn unary(op: char, operand: NodeId) -> Self {
        Self {
            value: op,
            left: Some(operand),
            right: None,
        }
    }

    pub const fn binary(op: char, left: NodeId, right: NodeId) -> Self {
        Self {
            value: op,
            left: Some(left),
            right: Some(right),
        }
    }

    pub const fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    pub const fn is_unary(&self) -> bool {
        self.left.is_some() && self.right.is_none()
    }

    pub const fn is_binary(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Number of children.
    pub fn arity(&self) -> usize {
        self.children().count()
    }

    /// Children in field order: `left`, then `right`.
    pub fn children(&self) -> impl Iterator<Item = NodeId> {
        self.left.into_iter().chain(self.right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shapes() {
        let a = NodeId::new(0);
        let b = NodeId::new(1);

        let leaf = Node::leaf('a');
        assert!(leaf.is_leaf());
        assert_eq!(leaf.arity(), 0);

        let not = Node::unary('!', a);
        assert!(not.is_unary());
        assert!(!not.is_leaf());
        assert_eq!(not.arity(), 1);

        let or = Node::binary('|', a, b);
        assert!(or.is_binary());
        assert_eq!(or.arity(), 2);
        assert_eq!(or.children().collect::<Vec<_>>(), vec![a, b]);
    }
}
