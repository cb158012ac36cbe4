use crate::error::ParserError;
use crate::expr::evaluate;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};

/// The bindings every formula starts with: the elapsed time `t` (zero until
/// a tick overrides it), `pi` and `e`.
///
/// ```
/// let variables = matheval::default_variables();
/// assert_eq!(matheval::evaluate("t + 1", &variables), Ok(1.0));
/// ```
pub fn default_variables() -> HashMap<String, f32> {
    let mut variables = HashMap::with_capacity(3);
    variables.insert("t".to_string(), 0.0);
    variables.insert("pi".to_string(), std::f32::consts::PI);
    variables.insert("e".to_string(), std::f32::consts::E);
    variables
}

/// A scalar that may change over time, such as the strength of a charge.
#[derive(Debug, Clone, PartialEq)]
pub enum Strength {
    /// Always the same value
    Constant(f32),
    /// A formula of the elapsed time `t`
    Variable(String),
}

impl Strength {
    /// Get the value after `elapsed` seconds.
    ///
    /// # Examples
    /// ```
    /// # use matheval::Strength;
    /// assert_eq!(Strength::Constant(-2.0).at(10.0), Ok(-2.0));
    /// assert_eq!(Strength::Variable("2t + 1".into()).at(1.5), Ok(4.0));
    /// assert!(Strength::Variable("2t +".into()).at(0.0).is_err());
    /// ```
    pub fn at(&self, elapsed: f64) -> Result<f32, ParserError> {
        match *self {
            Self::Constant(value) => Ok(value),
            Self::Variable(ref formula) => {
                let mut variables = default_variables();
                variables.insert("t".to_string(), elapsed as f32);
                evaluate(formula, &variables)
            }
        }
    }
}

impl Display for Strength {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Constant(value) => write!(fmt, "Constant({})", value),
            Self::Variable(ref formula) => write!(fmt, "Variable({})", formula),
        }
    }
}
