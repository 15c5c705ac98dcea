//! Fully-parenthesized prefix notation.
//!
//! - leaf: the symbol itself, e.g. `a`
//! - unary: `(! x)`
//! - binary: `(& y x)`, where `y` is the node's `right` field and `x` its `left` field
//!
//! Because the [parser][crate::parser] stores the right-hand operand in `left`,
//! binary operands come out in source order: `a & b` renders as `(& a b)`.

use std::fmt;
use std::io;

use crate::ast::Tree;
use crate::reference::NodeId;

/// Pending output of the renderer.
enum Step {
    Node(NodeId),
    Char(char),
}

impl Tree {
    /// Writes the prefix form of the tree to `sink`. Writes nothing for the empty tree.
    ///
    /// Only errors reported by `sink` itself are returned. Works on trees of any depth.
    pub fn render<W: fmt::Write>(&self, sink: &mut W) -> fmt::Result {
        let mut stack: Vec<Step> = self.root().map(Step::Node).into_iter().collect();
        while let Some(step) = stack.pop() {
            let id = match step {
                Step::Char(c) => {
                    sink.write_char(c)?;
                    continue;
                }
                Step::Node(id) => id,
            };
            let node = self.node(id);
            match (node.left, node.right) {
                (None, _) => sink.write_char(node.value)?,
                (Some(operand), None) => {
                    write!(sink, "({} ", node.value)?;
                    stack.push(Step::Char(')'));
                    stack.push(Step::Node(operand));
                }
                (Some(left), Some(right)) => {
                    write!(sink, "({} ", node.value)?;
                    // Popped in reverse: right, ' ', left, ')'.
                    stack.push(Step::Char(')'));
                    stack.push(Step::Node(left));
                    stack.push(Step::Char(' '));
                    stack.push(Step::Node(right));
                }
            }
        }
        Ok(())
    }

    /// Writes the prefix form to a byte stream.
    pub fn write_prefix<W: io::Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)
    }

    pub fn to_prefix_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render(f)
    }
}
