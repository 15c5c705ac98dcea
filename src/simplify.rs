//! Single-pass local simplification.
//!
//! Nodes are collected in level order from the root and then visited in reverse
//! of that order, so every node is visited after all nodes on deeper levels. Each
//! operator node is rewritten by looking only at the current `value` of its
//! immediate children:
//!
//! | node | condition                 | result         |
//! |------|---------------------------|----------------|
//! | `!`  | child `T` / child `F`     | leaf `F` / `T` |
//! | `&`  | either child `F`          | leaf `F`       |
//! | `&`  | `left` is `T`             | `right` subtree|
//! | `&`  | `right` is `T`            | `left` subtree |
//! | `\|` | either child `T`          | leaf `T`       |
//! | `\|` | `left` is `F`             | `right` subtree|
//! | `\|` | `right` is `F`            | `left` subtree |
//!
//! There is no rule for "both children are the identity literal": `F | F` reduces to
//! `F` only because the node adopts its right child, which happens to be `F`.
//!
//! Every child sits exactly one level below its parent, so reverse level order
//! visits all descendants of a node before the node itself. A rewrite only copies
//! a child that has already been simplified, so a second pass finds nothing left
//! to rewrite.
//!
//! A node that *becomes* a child subtree keeps its handle and copies the child's
//! fields. The child's handle, and every subtree dropped by a rewrite, is tagged as
//! an orphan and skipped if it is still pending in the traversal.

use log::debug;

use crate::ast::Tree;
use crate::grammar::{AND, FALSE, NOT, OR, TRUE};
use crate::node::Node;
use crate::reference::NodeId;

impl Tree {
    /// Rewrites the tree in place using the local rules above. No-op on the empty tree.
    ///
    /// Operators other than `!`, `&` and `|` are left untouched.
    ///
    /// # Preconditions
    ///
    /// Every node respects the arity of its value (as trees built by the parser do).
    /// Nodes that do not are skipped.
    ///
    /// ```
    /// use prefixer::ast::Tree;
    ///
    /// let mut tree = Tree::parse("!(T & F) & a").unwrap();
    /// tree.simplify();
    /// assert_eq!(tree.to_prefix_string(), "a");
    /// ```
    pub fn simplify(&mut self) {
        let order = self.level_order();
        if order.is_empty() {
            return;
        }
        debug!("simplify: {} reachable nodes", order.len());

        let mut rewrites = 0;
        for id in order.into_iter().rev() {
            if self.is_orphan(id) {
                debug!("simplify: skipping orphan {}", id);
                continue;
            }
            let rewritten = match self.value(id) {
                NOT => self.simplify_not(id),
                AND => self.simplify_binary(id, FALSE, TRUE),
                OR => self.simplify_binary(id, TRUE, FALSE),
                _ => false,
            };
            if rewritten {
                rewrites += 1;
            }
        }
        debug!("simplify: {} rewrites", rewrites);
    }

    fn simplify_not(&mut self, id: NodeId) -> bool {
        let Some(child) = self.node(id).left else {
            return false;
        };
        match self.value(child) {
            TRUE => {
                debug!("!T => F at {}", id);
                self.make_leaf(id, FALSE);
                true
            }
            FALSE => {
                debug!("!F => T at {}", id);
                self.make_leaf(id, TRUE);
                true
            }
            _ => false,
        }
    }

    /// Shared rule set for `&` (absorbing `F`, identity `T`) and `|` (absorbing `T`, identity `F`).
    fn simplify_binary(&mut self, id: NodeId, absorbing: char, identity: char) -> bool {
        let node = *self.node(id);
        let (Some(left), Some(right)) = (node.left, node.right) else {
            return false;
        };
        let (l, r) = (self.value(left), self.value(right));

        if l == absorbing || r == absorbing {
            debug!("{}(.., {}) => {} at {}", node.value, absorbing, absorbing, id);
            self.make_leaf(id, absorbing);
        } else if l == identity {
            debug!("{}({}, X) => X at {}", node.value, identity, id);
            self.adopt(id, right, left);
        } else if r == identity {
            debug!("{}(X, {}) => X at {}", node.value, identity, id);
            self.adopt(id, left, right);
        } else {
            return false;
        }
        true
    }

    /// Turns `id` into a leaf, dropping its children.
    fn make_leaf(&mut self, id: NodeId, value: char) {
        let node = *self.node(id);
        for child in node.children() {
            self.orphan_subtree(child);
        }
        *self.node_mut(id) = Node::leaf(value);
    }

    /// Overwrites `id` with the fields of `child`, dropping `sibling`.
    fn adopt(&mut self, id: NodeId, child: NodeId, sibling: NodeId) {
        self.orphan_subtree(sibling);
        self.orphan(child);
        let adopted = *self.node(child);
        *self.node_mut(id) = adopted;
    }
}
