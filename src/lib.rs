//! # prefixer: boolean expressions in prefix notation
//!
//! **`prefixer`** parses infix boolean expressions into a binary syntax tree using a
//! shunting-yard parser, applies one pass of local simplification, and prints the
//! result in fully-parenthesized prefix notation.
//!
//! ## Grammar
//!
//! - Variables: single lowercase letters `a`..`z`
//! - Constants: `T` and `F`
//! - Operators, by increasing precedence: `|` (or), `&` (and), `!` (not, unary)
//! - Parentheses `(` `)` for grouping; whitespace is ignored
//!
//! ## Basic Usage
//!
//! ```rust
//! use prefixer::ast::Tree;
//!
//! // 1. Parse
//! let mut tree = Tree::parse("(a | F) & !(T & F)").unwrap();
//! assert_eq!(tree.to_prefix_string(), "(& (| a F) (! (& T F)))");
//!
//! // 2. Simplify in place
//! tree.simplify();
//!
//! // 3. Render
//! assert_eq!(tree.to_prefix_string(), "a");
//! ```
//!
//! ## Core Components
//!
//! - **[`grammar`]**: operator tables and precedence.
//! - **[`parser`]**: the shunting-yard parser.
//! - **[`ast`]**: the [`Tree`][crate::ast::Tree] arena and its structural view.
//! - **[`simplify`]**: the local rewrite pass.
//! - **[`render`]**: prefix-notation output.
//! - **[`dot`]**: Graphviz export.

pub mod ast;
pub mod bitset;
pub mod dot;
pub mod error;
pub mod grammar;
pub mod node;
pub mod parser;
pub mod reference;
pub mod render;
pub mod simplify;
