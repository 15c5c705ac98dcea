//! Operator tables for the expression grammar.
//!
//! A grammar lists its operators in ascending precedence order, with no ties.
//! Parentheses are structural and never appear in the table. Terminals are fixed:
//! lowercase ASCII letters are variables, `T` and `F` are the constants.
//!
//! ```
//! use prefixer::grammar::{Grammar, AND, NOT, OR};
//!
//! let g = Grammar::BOOLEAN;
//! assert!(g.precedence(NOT, AND));
//! assert!(g.precedence(AND, OR));
//! assert!(g.is_unary(NOT));
//! ```

use crate::error::GrammarError;

pub const OR: char = '|';
pub const AND: char = '&';
pub const NOT: char = '!';

pub const TRUE: char = 'T';
pub const FALSE: char = 'F';

pub const OPEN: char = '(';
pub const CLOSE: char = ')';

/// Operator alphabet together with its precedence order and unary subset.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Grammar {
    /// Operators in ascending precedence.
    operators: &'static [char],
    unary_operators: &'static [char],
}

impl Grammar {
    /// The boolean grammar: `|` < `&` < `!`, with `!` unary.
    pub const BOOLEAN: Grammar = Grammar {
        operators: &[OR, AND, NOT],
        unary_operators: &[NOT],
    };

    /// Builds a custom grammar.
    ///
    /// `operators` must be given in ascending precedence order. Every unary operator
    /// must also appear in `operators`.
    pub fn new(operators: &'static [char], unary_operators: &'static [char]) -> Result<Self, GrammarError> {
        for (i, &op) in operators.iter().enumerate() {
            if op.is_whitespace() || op == OPEN || op == CLOSE || is_terminal(op) {
                return Err(GrammarError::ReservedSymbol(op));
            }
            if operators[..i].contains(&op) {
                return Err(GrammarError::DuplicateOperator(op));
            }
        }
        if let Some(&op) = unary_operators.iter().find(|op| !operators.contains(op)) {
            return Err(GrammarError::UnknownUnary(op));
        }
        Ok(Self {
            operators,
            unary_operators,
        })
    }

    /// Operators in ascending precedence.
    pub fn operators(&self) -> &[char] {
        self.operators
    }

    pub fn is_operator(&self, c: char) -> bool {
        self.operators.contains(&c)
    }

    pub fn is_unary(&self, c: char) -> bool {
        self.unary_operators.contains(&c)
    }

    /// Returns `true` iff `p` binds strictly tighter than `q`.
    ///
    /// Returns `false` if either is not an operator of this grammar.
    pub fn precedence(&self, p: char, q: char) -> bool {
        match (self.rank(p), self.rank(q)) {
            (Some(p), Some(q)) => p > q,
            _ => false,
        }
    }

    fn rank(&self, c: char) -> Option<usize> {
        self.operators.iter().position(|&op| op == c)
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::BOOLEAN
    }
}

/// Variables (lowercase ASCII letters) and the constants `T` / `F`.
pub fn is_terminal(c: char) -> bool {
    c.is_ascii_lowercase() || c == TRUE || c == FALSE
}

pub fn is_operator(c: char) -> bool {
    Grammar::BOOLEAN.is_operator(c)
}

pub fn is_unary(c: char) -> bool {
    Grammar::BOOLEAN.is_unary(c)
}

/// See [`Grammar::precedence`].
pub fn precedence(p: char, q: char) -> bool {
    Grammar::BOOLEAN.precedence(p, q)
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    #[test]
    fn test_precedence() {
        assert!(precedence(NOT, AND));
        assert!(precedence(NOT, OR));
        assert!(precedence(AND, OR));

        assert!(!precedence(AND, NOT));
        assert!(!precedence(OR, NOT));
        assert!(!precedence(OR, AND));

        assert!(!precedence(OR, OR));
        assert!(!precedence(NOT, NOT));

        assert!(!precedence(OPEN, NOT));
        assert!(!precedence(NOT, OPEN));
    }

    #[test]
    fn test_precedence_totality() {
        let ops = Grammar::BOOLEAN.operators();
        for &p in ops {
            for &q in ops {
                if p != q {
                    assert_ne!(precedence(p, q), precedence(q, p), "{} vs {}", p, q);
                }
            }
        }
    }

    #[test]
    fn test_is_unary() {
        assert!(is_unary(NOT));
        assert!(!is_unary(CLOSE));
        assert!(!is_unary(OPEN));
        assert!(!is_unary(OR));
        assert!(!is_unary(AND));
    }

    #[test]
    fn test_is_operator() {
        assert!(is_operator(NOT));
        assert!(is_operator(AND));
        assert!(is_operator(OR));
        for c in [CLOSE, OPEN, 'a', 'b', TRUE, FALSE, ' '] {
            assert!(!is_operator(c), "{:?}", c);
        }
    }

    #[test]
    fn test_is_terminal() {
        assert!(is_terminal('a'));
        assert!(is_terminal('z'));
        assert!(is_terminal(TRUE));
        assert!(is_terminal(FALSE));
        assert!(!is_terminal('A'));
        assert!(!is_terminal('$'));
        assert!(!is_terminal(NOT));
    }

    #[test]
    fn test_custom_grammar() {
        let g = Grammar::new(&['^', '|', '&', '~'], &['~']).unwrap();
        assert!(g.precedence('|', '^'));
        assert!(g.precedence('~', '&'));
        assert!(g.is_unary('~'));
        assert!(!g.is_operator('!'));
    }

    #[test]
    fn test_custom_grammar_rejected() {
        assert_eq!(Grammar::new(&['|', '&', '|'], &[]), Err(GrammarError::DuplicateOperator('|')));
        assert_eq!(Grammar::new(&['|', '&'], &['!']), Err(GrammarError::UnknownUnary('!')));
        assert_eq!(Grammar::new(&['|', '('], &[]), Err(GrammarError::ReservedSymbol('(')));
        assert_eq!(Grammar::new(&['x'], &[]), Err(GrammarError::ReservedSymbol('x')));
        assert_eq!(Grammar::new(&['T'], &[]), Err(GrammarError::ReservedSymbol('T')));
    }
}
