use std::fmt::{self, Display, Formatter};

/// Precedence distance between two bracket nesting levels. One more than the
/// highest operator precedence, so anything inside a deeper bracket outranks
/// everything outside of it.
pub const NESTING_STEP: usize = 5;

/// Resolved tokens, in the order of the postfix sequence
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A literal, or the value of a bound variable
    Number(f32),
    /// An operator waiting for its operands
    Operator(Operator),
}

/// The two kinds of operators
#[derive(Debug, Clone, PartialEq)]
pub enum OperatorKind {
    /// One of `+ - * / % ^`
    Binary(char),
    /// A built-in function applied to a single value
    Function(String),
}

/// An operator with the precedence it was pushed with
#[derive(Debug, Clone, PartialEq)]
pub struct Operator {
    /// What the operator does
    pub kind: OperatorKind,
    /// Binding strength, including the bracket nesting it was read at
    pub precedence: usize,
}

impl OperatorKind {
    /// Get the operator precedence outside of any bracket. Operators with
    /// higher precedence should be evaluated first.
    pub fn precedence(&self) -> usize {
        match *self {
            Self::Function(_) => 4,
            Self::Binary('^') => 3,
            Self::Binary('*') | Self::Binary('/') | Self::Binary('%') => 2,
            Self::Binary(_) => 1,
        }
    }

    /// Get the operator precedence inside `nesting_level` open brackets
    pub fn precedence_at(&self, nesting_level: usize) -> usize {
        nesting_level * NESTING_STEP + self.precedence()
    }
}

impl Operator {
    /// Price `kind` for the current nesting level. The precedence is fixed
    /// from now on.
    pub fn new(kind: OperatorKind, nesting_level: usize) -> Self {
        let precedence = kind.precedence_at(nesting_level);
        Self { kind, precedence }
    }

    /// A binary operator
    pub fn binary(symbol: char, nesting_level: usize) -> Self {
        Self::new(OperatorKind::Binary(symbol), nesting_level)
    }

    /// A call to the function `name`
    pub fn function(name: impl Into<String>, nesting_level: usize) -> Self {
        Self::new(OperatorKind::Function(name.into()), nesting_level)
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Number(value) => write!(fmt, "Number({})", value),
            Self::Operator(ref operator) => write!(fmt, "{}", operator.kind),
        }
    }
}

impl Display for OperatorKind {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Binary(symbol) => write!(fmt, "BinaryOperator({})", symbol),
            Self::Function(ref name) => write!(fmt, "Function({})", name),
        }
    }
}
