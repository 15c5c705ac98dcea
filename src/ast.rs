//! The syntax tree.
//!
//! A [`Tree`] owns every node in a flat arena and addresses them by [`NodeId`].
//! Nodes are only ever created by the [parser][crate::parser]. The
//! [simplifier][crate::simplify] rewrites nodes in place; handles that become
//! unreachable are tagged as orphans and stay in the arena until the tree is dropped.

use std::collections::VecDeque;

use crate::bitset::BitSet;
use crate::error::ParseError;
use crate::grammar::{Grammar, AND, FALSE, NOT, OR, TRUE};
use crate::node::Node;
use crate::parser::Parser;
use crate::reference::NodeId;

#[derive(Debug, Clone, Default)]
pub struct Tree {
    nodes: Vec<Node>,
    root: Option<NodeId>,
    orphans: BitSet,
}

impl Tree {
    pub(crate) fn from_parts(nodes: Vec<Node>, root: Option<NodeId>) -> Self {
        let orphans = BitSet::new(nodes.len());
        Self { nodes, root, orphans }
    }

    /// Parses `expression` with the [boolean grammar][Grammar::BOOLEAN].
    ///
    /// ```
    /// use prefixer::ast::Tree;
    ///
    /// let tree = Tree::parse("a | b").unwrap();
    /// assert_eq!(tree.to_prefix_string(), "(| a b)");
    /// ```
    pub fn parse(expression: &str) -> Result<Self, ParseError> {
        Parser::new(&Grammar::BOOLEAN).parse(expression)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Returns `true` for the empty expression (no root).
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of nodes in the arena, including orphans.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    pub fn value(&self, id: NodeId) -> char {
        self.node(id).value
    }

    /// Returns `true` if `id` was detached from the tree by simplification.
    pub fn is_orphan(&self, id: NodeId) -> bool {
        self.orphans.contains(id)
    }

    pub(crate) fn orphan(&mut self, id: NodeId) {
        self.orphans.insert(id);
    }

    /// Tags `id` and all of its descendants as orphans.
    pub(crate) fn orphan_subtree(&mut self, id: NodeId) {
        let mut stack = vec![id];
        while let Some(id) = stack.pop() {
            if self.orphans.insert(id) {
                stack.extend(self.node(id).children());
            }
        }
    }

    /// All nodes reachable from the root, breadth-first, `left` before `right`.
    pub fn level_order(&self) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut frontier: VecDeque<NodeId> = self.root.into_iter().collect();
        while let Some(id) = frontier.pop_front() {
            order.push(id);
            frontier.extend(self.node(id).children());
        }
        order
    }

    /// Number of nodes reachable from the root.
    pub fn reachable(&self) -> usize {
        self.level_order().len()
    }

    /// Number of nodes on the longest root-to-leaf path, `0` for the empty tree.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frontier: Vec<(NodeId, usize)> = self.root.map(|id| (id, 1)).into_iter().collect();
        while let Some((id, level)) = frontier.pop() {
            depth = depth.max(level);
            frontier.extend(self.node(id).children().map(|c| (c, level + 1)));
        }
        depth
    }

    /// Builds an owned structural view of the tree, `None` for the empty tree.
    ///
    /// Children keep node-field order: `Or(left, right)` holds the node's `left`
    /// field first, which is the *right-hand* operand in the source text.
    ///
    /// Operators outside the boolean grammar are not representable and yield `None`,
    /// as do trees deeper than [`MAX_EXPR_DEPTH`], since dropping a boxed
    /// expression recurses once per level.
    pub fn to_expr(&self) -> Option<Expr> {
        let root = self.root?;
        if self.depth() > MAX_EXPR_DEPTH {
            return None;
        }

        let mut results: Vec<Option<Expr>> = std::iter::repeat_with(|| None).take(self.nodes.len()).collect();
        for id in self.level_order().into_iter().rev() {
            let node = self.node(id);
            let mut child = |c: Option<NodeId>| c.and_then(|c| results[c.index()].take()).map(Box::new);
            let expr = match node.value {
                TRUE => Expr::Const(true),
                FALSE => Expr::Const(false),
                NOT => Expr::Not(child(node.left)?),
                AND => Expr::And(child(node.left)?, child(node.right)?),
                OR => Expr::Or(child(node.left)?, child(node.right)?),
                c if c.is_ascii_lowercase() => Expr::Var(c),
                _ => return None,
            };
            results[id.index()] = Some(expr);
        }
        results[root.index()].take()
    }
}

/// Deepest tree that [`Tree::to_expr`] converts.
pub const MAX_EXPR_DEPTH: usize = 1024;

/// Owned boolean expression mirroring the node layout of a [`Tree`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Expr {
    Var(char),
    Const(bool),
    Not(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn var(name: char) -> Self {
        Expr::Var(name)
    }

    pub fn constant(value: bool) -> Self {
        Expr::Const(value)
    }

    pub fn not(inner: Self) -> Self {
        Expr::Not(Box::new(inner))
    }

    pub fn and(left: Self, right: Self) -> Self {
        Expr::And(Box::new(left), Box::new(right))
    }

    pub fn or(left: Self, right: Self) -> Self {
        Expr::Or(Box::new(left), Box::new(right))
    }
}
