//! Shunting-yard parser.
//!
//! The input is scanned left to right while maintaining two stacks: operands (node
//! handles) and operators (operator symbols and `(` markers). Whenever an operator
//! with higher precedence sits on top of the operator stack, it is *reduced*: popped
//! together with its operands into a new node, which is pushed back as an operand.
//!
//! For binary operators, the operand popped first (the right-hand operand in the
//! source text) becomes the node's `left` field, and the operand popped second
//! becomes `right`. The [renderer][crate::render] relies on this pairing.
//!
//! ```
//! use prefixer::grammar::Grammar;
//! use prefixer::parser::Parser;
//!
//! let tree = Parser::new(&Grammar::BOOLEAN).parse("a | b").unwrap();
//! let root = tree.node(tree.root().unwrap());
//! assert_eq!(tree.value(root.left.unwrap()), 'b');
//! assert_eq!(tree.value(root.right.unwrap()), 'a');
//! ```

use log::debug;

use crate::ast::Tree;
use crate::error::ParseError;
use crate::grammar::{is_terminal, Grammar, CLOSE, OPEN};
use crate::node::Node;
use crate::reference::NodeId;

pub struct Parser<'g> {
    grammar: &'g Grammar,
    nodes: Vec<Node>,
    operands: Vec<NodeId>,
    /// Operator symbols and `(` markers, with their character offsets.
    operators: Vec<(char, usize)>,
}

impl<'g> Parser<'g> {
    pub fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            nodes: Vec::new(),
            operands: Vec::new(),
            operators: Vec::new(),
        }
    }

    /// Builds the syntax tree for `expression`.
    ///
    /// Trivial inputs such as `""`, `"()"` or `"(())"` produce an empty tree.
    /// No partial tree is returned on failure.
    pub fn parse(mut self, expression: &str) -> Result<Tree, ParseError> {
        debug!("parse(expression = {:?})", expression);

        let grammar = self.grammar;
        for (position, c) in expression.chars().enumerate() {
            match c {
                c if c.is_whitespace() => {}
                OPEN => self.operators.push((OPEN, position)),
                CLOSE => {
                    while let Some((op, at)) = self.pop_operator_if(|top| top != OPEN) {
                        self.reduce(op, at)?;
                    }
                    match self.operators.pop() {
                        Some((OPEN, _)) => {}
                        _ => return Err(ParseError::UnmatchedParenthesis { position }),
                    }
                }
                c if grammar.is_operator(c) => {
                    while let Some((op, at)) = self.pop_operator_if(|top| top != OPEN && grammar.precedence(top, c)) {
                        self.reduce(op, at)?;
                    }
                    self.operators.push((c, position));
                }
                c if is_terminal(c) => {
                    let id = self.alloc(Node::leaf(c));
                    self.operands.push(id);
                }
                token => return Err(ParseError::InvalidToken { token, position }),
            }
        }

        while let Some((op, at)) = self.operators.pop() {
            if op == OPEN {
                return Err(ParseError::UnmatchedParenthesis { position: at });
            }
            self.reduce(op, at)?;
        }

        let root = match self.operands.len() {
            0 => None,
            1 => self.operands.pop(),
            operands => return Err(ParseError::MalformedExpression { operands }),
        };
        debug!("parse: {} nodes, root = {:?}", self.nodes.len(), root);

        Ok(Tree::from_parts(self.nodes, root))
    }

    fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::from(self.nodes.len());
        self.nodes.push(node);
        id
    }

    fn pop_operator_if(&mut self, pred: impl FnOnce(char) -> bool) -> Option<(char, usize)> {
        match self.operators.last() {
            Some(&(top, _)) if pred(top) => self.operators.pop(),
            _ => None,
        }
    }

    /// Pops the operands of `op`, forms a node and pushes it back as an operand.
    fn reduce(&mut self, op: char, position: usize) -> Result<(), ParseError> {
        let missing = ParseError::InsufficientOperands { operator: op, position };

        let left = self.operands.pop().ok_or_else(|| missing.clone())?;
        let node = if self.grammar.is_unary(op) {
            Node::unary(op, left)
        } else {
            let right = self.operands.pop().ok_or(missing)?;
            Node::binary(op, left, right)
        };

        let id = self.alloc(node);
        debug!("reduce: '{}' => {}", op, id);
        self.operands.push(id);
        Ok(())
    }
}
