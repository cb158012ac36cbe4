#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::module_name_repetitions,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss
)]

//! Matheval, a crate for evaluating the small formulas that drive time
//! dependent quantities, like `sin(2*pi*t) + t^2`.
//!
//! The easiest way to use this crate is with the
//! [`evaluate`](fn.evaluate.html) function. The second argument is a
//! [`HashMap`](std::collections::HashMap) binding variable names to values:
//!
//! ```
//! use std::collections::HashMap;
//!
//! assert_eq!(matheval::evaluate("3 + 5 * 2", &HashMap::new()), Ok(13.0));
//!
//! let mut variables: HashMap<String, f32> = HashMap::new();
//! variables.insert("t".into(), 3.5);
//! assert_eq!(matheval::evaluate("2t", &variables), Ok(7.0));
//! ```
//!
//! Every call is independent: nothing is cached, and the only shared state
//! is the read-only table of built-in [`FUNCTIONS`](struct.FUNCTIONS.html),
//! so evaluating from several threads at once is fine.
//!
//! # Language definition
//!
//! The language implemented by matheval can contain the following elements:
//!
//! - number literals: `12`, `0.456`. A dot must be followed by a digit, and
//!   there is no exponent notation. A sign in front of a value is read as
//!   `0 - value` with the precedence of a subtraction, so `2*-3` is
//!   `2*0 - 3`: write `2*(-3)` for a negative factor;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division, `%` for the remainder of the
//!   truncated division and `^` for exponentiation. All of them are left
//!   associative, so `2^3^2` is `64`;
//! - variables, made of ASCII letters only. A name bound in the variables
//!   map is replaced by its value;
//! - function calls: any other name is a function applied to the value that
//!   follows it: `sqrt(2)`, `abs(t - 1)`. The following functions are
//!   accessible: `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `sqrt`, `exp`,
//!   `log` (natural logarithm), `abs`, `ceil`, `floor` and `sign`.
//!
//! A value directly followed by a name or a parenthesis is multiplied by it:
//! `2pi` is `2 * pi` and `3(t + 1)` is `3 * (t + 1)`.
//!
//! Any other symbol is forbidden in the input.
//!
//! Everything is computed in `f32`. Division by zero and out of domain
//! functions are not errors, they give infinities and `NaN`.
//!
//! # Technical details
//!
//! matheval scans the input once, converting it to reverse polish notation
//! with a Shunting-Yard algorithm. Instead of stacking parenthesis, each open
//! parenthesis raises the precedence of the operators read inside it. The
//! resulting [`Postfix`](struct.Postfix.html) sequence is then reduced with a
//! single value stack.

#[macro_use]
extern crate lazy_static;

mod error;
mod expr;
mod lexer;
mod strength;
mod token;
mod util;

pub use error::{ErrorKind, Location, ParserError};
pub use expr::{eval, evaluate, to_postfix, Postfix};
pub use strength::{default_variables, Strength};
pub use token::{Operator, OperatorKind, Token, NESTING_STEP};
pub use util::FUNCTIONS;
