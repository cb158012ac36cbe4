use crate::error::{ErrorKind, ParserError};
use crate::expr::Postfix;
use crate::token::{Operator, Token};
use crate::util::FUNCTIONS;
use std::collections::HashMap;

/// An helper struct scanning the input and converting it to postfix order in
/// a single pass
pub struct Lexer<'a> {
    input: &'a str,
    chars: Vec<char>,
    position: usize,
    variables: &'a HashMap<String, f32>,
    output: Vec<Token>,
    operators: Vec<Operator>,
    /// Offsets of the currently open brackets, innermost last
    brackets: Vec<usize>,
    /// Whether the last unit completed a value
    was_number: bool,
}

impl<'a> Lexer<'a> {
    /// Create a lexer for an already trimmed `input`
    pub fn new(input: &'a str, variables: &'a HashMap<String, f32>) -> Lexer<'a> {
        Lexer {
            input,
            chars: input.chars().collect(),
            position: 0,
            variables,
            output: Vec::new(),
            operators: Vec::new(),
            brackets: Vec::new(),
            was_number: false,
        }
    }

    pub fn parse(mut self) -> Result<Postfix, ParserError> {
        while let Some(c) = self.peek() {
            match c {
                c if c.is_whitespace() => self.position += 1,
                c if c.is_ascii_digit() => self.number()?,
                c if is_letter(c) => self.identifier()?,
                '+' | '-' => {
                    if !self.was_number {
                        // unary sign, read as `0 - x`
                        self.output.push(Token::Number(0.0));
                        self.was_number = true;
                    }
                    self.binary(c)?;
                    self.position += 1;
                }
                '*' | '/' | '%' | '^' => {
                    self.binary(c)?;
                    self.position += 1;
                }
                '(' => {
                    self.implicit_multiplication();
                    self.brackets.push(self.position);
                    self.was_number = false;
                    self.position += 1;
                }
                ')' => {
                    if self.brackets.pop().is_none() {
                        return Err(self.error_here(
                            ErrorKind::MismatchedBracket,
                            "Mismatched bracket found",
                        ));
                    }
                    self.was_number = true;
                    self.position += 1;
                }
                other => {
                    return Err(self.error_here(
                        ErrorKind::UnexpectedCharacter,
                        format!("Unexpected symbol '{}'", other),
                    ));
                }
            }
        }

        if let Some(&open) = self.brackets.last() {
            return Err(ParserError::at(
                ErrorKind::MismatchedBracket,
                "Mismatched bracket found",
                self.input,
                open,
            ));
        }

        while let Some(operator) = self.operators.pop() {
            self.output.push(Token::Operator(operator));
        }

        let postfix: Postfix = self.output.into_iter().collect();
        log::trace!("postfix for `{}`: {}", self.input, postfix);
        Ok(postfix)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.position).copied()
    }

    fn nesting_level(&self) -> usize {
        self.brackets.len()
    }

    fn error_here(&self, kind: ErrorKind, message: impl Into<String>) -> ParserError {
        ParserError::at(kind, message, self.input, self.position)
    }

    /// Read a number literal: digits, optionally followed by a dot and more
    /// digits
    fn number(&mut self) -> Result<(), ParserError> {
        if self.was_number {
            return Err(self.error_here(ErrorKind::UnexpectedDigit, "Unexpected digit"));
        }

        let mut value = 0.0_f32;
        let mut factor = 1.0_f32;
        let mut is_decimal = false;

        while let Some(c) = self.peek() {
            if let Some(digit) = c.to_digit(10) {
                let digit = digit as f32;
                if is_decimal {
                    factor *= 0.1;
                    value += digit * factor;
                } else {
                    value = value * 10.0 + digit;
                }
            } else if c == '.' {
                if is_decimal {
                    return Err(self.error_here(
                        ErrorKind::UnexpectedCharacter,
                        "Unexpected character '.'",
                    ));
                }
                let next = self.chars.get(self.position + 1);
                if !next.map_or(false, char::is_ascii_digit) {
                    return Err(ParserError::at(
                        ErrorKind::UnexpectedCharacter,
                        "Expected digit after decimal dot",
                        self.input,
                        self.position + 1,
                    ));
                }
                is_decimal = true;
            } else {
                break;
            }
            self.position += 1;
        }

        self.output.push(Token::Number(value));
        self.was_number = true;
        Ok(())
    }

    /// Read a run of letters. Bound variables become numbers, anything else
    /// must be a function name.
    fn identifier(&mut self) -> Result<(), ParserError> {
        self.implicit_multiplication();

        let start = self.position;
        while self.peek().map_or(false, is_letter) {
            self.position += 1;
        }
        let name: String = self.chars[start..self.position].iter().collect();

        if let Some(&value) = self.variables.get(&name) {
            self.output.push(Token::Number(value));
            self.was_number = true;
        } else if FUNCTIONS.contains_key(name.as_str()) {
            self.push(Operator::function(name, self.nesting_level()));
            self.was_number = false;
        } else {
            return Err(ParserError::at(
                ErrorKind::UnknownFunction,
                format!("Unknown function '{}'", name),
                self.input,
                start,
            ));
        }
        Ok(())
    }

    fn binary(&mut self, symbol: char) -> Result<(), ParserError> {
        if !self.was_number {
            return Err(self.error_here(
                ErrorKind::UnexpectedSymbol,
                format!("Unexpected symbol '{}'. Number expected", symbol),
            ));
        }
        self.push(Operator::binary(symbol, self.nesting_level()));
        self.was_number = false;
        Ok(())
    }

    /// A value directly followed by a name or a bracket is a product
    fn implicit_multiplication(&mut self) {
        if self.was_number {
            self.push(Operator::binary('*', self.nesting_level()));
            self.was_number = false;
        }
    }

    /// Move every pending operator binding at least as tight as `operator` to
    /// the output, then push it. Ties pop, so equal precedence evaluates left
    /// to right.
    fn push(&mut self, operator: Operator) {
        while self
            .operators
            .last()
            .map_or(false, |top| top.precedence >= operator.precedence)
        {
            if let Some(top) = self.operators.pop() {
                self.output.push(Token::Operator(top));
            }
        }
        self.operators.push(operator);
    }
}

/// Check if `c` can appear in an identifier
fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic()
}
