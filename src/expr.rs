use crate::error::{ErrorKind, ParserError};
use crate::lexer::Lexer;
use crate::token::{OperatorKind, Token};
use crate::util::FUNCTIONS;
use std::collections::HashMap;
use std::fmt::{self, Display, Formatter};
use std::iter::FromIterator;

/// Evaluate a single expression from `input`.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// the expression is malformed. Division by zero and out of domain functions
/// are not errors: they give infinities and `NaN`.
///
/// # Example
///
/// ```
/// # use std::collections::HashMap;
/// # use matheval::evaluate;
///
/// assert_eq!(evaluate("45 - 2^3", &HashMap::new()), Ok(37.0));
///
/// let mut variables: HashMap<String, f32> = HashMap::new();
/// variables.insert("t".into(), -5.0);
/// assert_eq!(evaluate("3t", &variables), Ok(-15.0));
/// ```
pub fn evaluate(input: &str, variables: &HashMap<String, f32>) -> Result<f32, ParserError> {
    let result = to_postfix(input, variables).and_then(|postfix| postfix.eval());
    match result {
        Ok(value) => log::trace!("`{}` = {}", input, value),
        Err(ref err) => log::debug!("failed to evaluate `{}`: {}", input, err),
    }
    result
}

/// Same as [`evaluate`], for anything that can lend the variables map.
///
/// ```
/// # use std::collections::HashMap;
/// assert_eq!(matheval::eval("2(3 + 4)", &HashMap::new()), Ok(14.0));
/// ```
pub fn eval<'a, C>(input: &str, variables: C) -> Result<f32, ParserError>
where
    C: Into<&'a HashMap<String, f32>>,
{
    evaluate(input, variables.into())
}

/// Convert `input` to postfix order, replacing bound variables by their
/// value.
///
/// # Examples
/// ```
/// # use std::collections::HashMap;
/// # use matheval::to_postfix;
/// let postfix = to_postfix("1 + 2 * 3", &HashMap::new()).unwrap();
/// assert_eq!(
///     postfix.to_string(),
///     "Number(1) Number(2) Number(3) BinaryOperator(*) BinaryOperator(+)"
/// );
/// assert_eq!(postfix.eval(), Ok(7.0));
/// ```
pub fn to_postfix(input: &str, variables: &HashMap<String, f32>) -> Result<Postfix, ParserError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParserError::new(ErrorKind::NoInput, "No input"));
    }
    Lexer::new(input, variables).parse()
}

/// An expression in reverse polish notation, ready to be reduced.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Postfix {
    tokens: Vec<Token>,
}

impl Postfix {
    /// The tokens, operands before their operator
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Reduce the sequence with a single value stack.
    ///
    /// ```
    /// # use matheval::{Operator, Postfix, Token};
    /// let postfix: Postfix = vec![
    ///     Token::Number(10.0),
    ///     Token::Number(3.0),
    ///     Token::Operator(Operator::binary('%', 0)),
    /// ]
    /// .into_iter()
    /// .collect();
    /// assert_eq!(postfix.eval(), Ok(1.0));
    /// ```
    pub fn eval(&self) -> Result<f32, ParserError> {
        let mut stack: Vec<f32> = Vec::with_capacity(self.tokens.len());

        for token in &self.tokens {
            match *token {
                Token::Number(value) => stack.push(value),
                Token::Operator(ref operator) => match operator.kind {
                    OperatorKind::Binary(symbol) => {
                        let right = pop(&mut stack)?;
                        let left = pop(&mut stack)?;
                        stack.push(apply(symbol, left, right)?);
                    }
                    OperatorKind::Function(ref name) => {
                        let function = FUNCTIONS.get(name.as_str()).ok_or_else(|| {
                            ParserError::new(
                                ErrorKind::UnknownFunction,
                                format!("Unknown function '{}'", name),
                            )
                        })?;
                        let arg = pop(&mut stack)?;
                        stack.push(function(arg));
                    }
                },
            }
        }

        match stack[..] {
            [value] => Ok(value),
            _ => Err(invalid()),
        }
    }
}

fn invalid() -> ParserError {
    ParserError::new(ErrorKind::InvalidExpression, "Invalid expression")
}

fn pop(stack: &mut Vec<f32>) -> Result<f32, ParserError> {
    stack.pop().ok_or_else(invalid)
}

fn apply(symbol: char, left: f32, right: f32) -> Result<f32, ParserError> {
    let value = match symbol {
        '+' => left + right,
        '-' => left - right,
        '*' => left * right,
        '/' => left / right,
        '%' => libm::fmodf(left, right),
        '^' => libm::powf(left, right),
        other => {
            return Err(ParserError::new(
                ErrorKind::UnexpectedSymbol,
                format!("Unexpected symbol '{}'", other),
            ))
        }
    };
    Ok(value)
}

impl FromIterator<Token> for Postfix {
    fn from_iter<I: IntoIterator<Item = Token>>(iter: I) -> Self {
        Self {
            tokens: iter.into_iter().collect(),
        }
    }
}

impl Display for Postfix {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        for (i, token) in self.tokens.iter().enumerate() {
            if i > 0 {
                write!(fmt, " ")?;
            }
            write!(fmt, "{}", token)?;
        }
        Ok(())
    }
}
