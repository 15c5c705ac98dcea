//! Syntax tree to DOT (Graphviz) conversion.
//!
//! Only nodes reachable from the root are emitted; orphans left behind by
//! simplification never appear. Edges are labeled with the node field they come
//! from (`L` for `left`, `R` for `right`), which makes the parser's operand pairing
//! visible.
//!
//! # Examples
//!
//! ```
//! use prefixer::ast::Tree;
//!
//! let tree = Tree::parse("a & !b").unwrap();
//! let dot = tree.to_dot().unwrap();
//! assert!(dot.starts_with("digraph {"));
//! // Render with: dot -Tpng tree.dot -o tree.png
//! ```

use std::fmt::Write as _;

use crate::ast::Tree;

/// Configuration options for DOT output generation.
#[derive(Debug, Clone)]
pub struct DotConfig {
    /// Shape for operator nodes (default: "circle")
    pub operator_shape: &'static str,
    /// Shape for variables and constants (default: "square")
    pub leaf_shape: &'static str,
    /// Style for edges to the `left` child (default: "solid")
    pub left_edge_style: &'static str,
    /// Style for edges to the `right` child (default: "dashed")
    pub right_edge_style: &'static str,
}

impl Default for DotConfig {
    fn default() -> Self {
        Self {
            operator_shape: "circle",
            leaf_shape: "square",
            left_edge_style: "solid",
            right_edge_style: "dashed",
        }
    }
}

impl Tree {
    /// Converts the tree to DOT format with the default [`DotConfig`].
    pub fn to_dot(&self) -> Result<String, std::fmt::Error> {
        self.to_dot_with_config(&DotConfig::default())
    }

    pub fn to_dot_with_config(&self, config: &DotConfig) -> Result<String, std::fmt::Error> {
        let mut dot = String::new();
        writeln!(dot, "digraph {{")?;

        let order = self.level_order();
        for &id in &order {
            let node = self.node(id);
            let shape = if node.is_leaf() {
                config.leaf_shape
            } else {
                config.operator_shape
            };
            writeln!(dot, "{} [label=\"{}\", shape={}];", id.get(), escape(node.value), shape)?;
        }
        for &id in &order {
            let node = self.node(id);
            if let Some(left) = node.left {
                writeln!(
                    dot,
                    "{} -> {} [label=\"L\", style={}];",
                    id.get(),
                    left.get(),
                    config.left_edge_style
                )?;
            }
            if let Some(right) = node.right {
                writeln!(
                    dot,
                    "{} -> {} [label=\"R\", style={}];",
                    id.get(),
                    right.get(),
                    config.right_edge_style
                )?;
            }
        }

        writeln!(dot, "}}")?;
        Ok(dot)
    }
}

fn escape(c: char) -> String {
    match c {
        '"' | '\\' => format!("\\{}", c),
        c => c.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_dot() {
        let tree = Tree::parse("a|b").unwrap();
        let dot = tree.to_dot().unwrap();
        assert!(dot.starts_with("digraph {\n"));
        assert!(dot.ends_with("}\n"));
        assert!(dot.contains("2 [label=\"|\", shape=circle];"));
        assert!(dot.contains("2 -> 1 [label=\"L\", style=solid];"));
        assert!(dot.contains("2 -> 0 [label=\"R\", style=dashed];"));
    }

    #[test]
    fn test_orphans_omitted() {
        let mut tree = Tree::parse("a & T").unwrap();
        tree.simplify();
        let dot = tree.to_dot().unwrap();
        assert_eq!(dot.matches("label=").count(), 1);
        assert!(dot.contains("[label=\"a\", shape=square];"));
    }

    #[test]
    fn test_config() {
        let tree = Tree::parse("!a").unwrap();
        let config = DotConfig {
            operator_shape: "ellipse",
            ..DotConfig::default()
        };
        let dot = tree.to_dot_with_config(&config).unwrap();
        assert!(dot.contains("shape=ellipse"));
    }

    #[test]
    fn test_empty() {
        assert_eq!(Tree::default().to_dot().unwrap(), "digraph {\n}\n");
    }
}
