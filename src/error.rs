use std::fmt::{self, Display, Formatter};
use thiserror::Error;

/// The different ways evaluating an expression can fail
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The expression is empty once trimmed
    NoInput,
    /// A character that can not start any token, or a malformed decimal
    /// literal
    UnexpectedCharacter,
    /// A digit right after a completed value
    UnexpectedDigit,
    /// A binary operator where a value was expected
    UnexpectedSymbol,
    /// Unbalanced `(` or `)`
    MismatchedBracket,
    /// A function name missing from [`FUNCTIONS`](crate::FUNCTIONS)
    UnknownFunction,
    /// The postfix sequence does not reduce to a single value
    InvalidExpression,
}

/// Position of a failure inside the (trimmed) input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    /// The input being scanned when the error was found
    pub input: String,
    /// Character offset of the offending character in `input`
    pub offset: usize,
}

impl Display for Location {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        write!(fmt, "{}\n{:width$}^", self.input, "", width = self.offset)
    }
}

/// Error type for the matheval crate
///
/// The rendered message is a single line, or three lines when the error
/// points into the input:
///
/// ```
/// # use std::collections::HashMap;
/// let err = matheval::evaluate("2 3", &HashMap::new()).unwrap_err();
/// assert_eq!(err.to_string(), "Parser Error: Unexpected digit\n2 3\n  ^");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
#[error("Parser Error: {message}{}", snippet(.location))]
pub struct ParserError {
    kind: ErrorKind,
    message: String,
    location: Option<Location>,
}

fn snippet(location: &Option<Location>) -> String {
    location
        .as_ref()
        .map(|location| format!("\n{}", location))
        .unwrap_or_default()
}

impl ParserError {
    pub(crate) fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            location: None,
        }
    }

    pub(crate) fn at(
        kind: ErrorKind,
        message: impl Into<String>,
        input: &str,
        offset: usize,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            location: Some(Location {
                input: input.into(),
                offset,
            }),
        }
    }

    /// What went wrong
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The human readable message, without the input snippet
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Where in the input it went wrong, if the error points into it
    pub fn location(&self) -> Option<&Location> {
        self.location.as_ref()
    }
}
