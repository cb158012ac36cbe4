use matheval::{default_variables, evaluate, ErrorKind, ParserError};
use std::collections::HashMap;
use std::sync::Arc;
use std::thread;

fn kind(input: &str) -> ErrorKind {
    evaluate(input, &HashMap::new()).unwrap_err().kind()
}

#[test]
fn arithmetic_precedence_and_associativity() {
    let empty = HashMap::new();
    assert_eq!(evaluate("2+3*4", &empty), Ok(14.0));
    assert_eq!(evaluate("(2+3)*4", &empty), Ok(20.0));
    assert_eq!(evaluate("2^3^2", &empty), Ok(64.0));
    assert_eq!(evaluate("10%3", &empty), Ok(1.0));
    assert_eq!(evaluate("10 - 4 - 3", &empty), Ok(3.0));
    assert_eq!(evaluate("64 / 4 / 2", &empty), Ok(8.0));
}

#[test]
fn implicit_multiplication() {
    let mut variables = HashMap::new();
    variables.insert("pi".to_string(), std::f32::consts::PI);
    assert_eq!(evaluate("2(3+4)", &HashMap::new()), Ok(14.0));
    let two_pi = evaluate("2pi", &variables).unwrap();
    assert!((two_pi - 6.283_185_5).abs() < 1e-6);
}

#[test]
fn unary_sign() {
    let empty = HashMap::new();
    assert_eq!(evaluate("-3+5", &empty), Ok(2.0));
    assert_eq!(evaluate("-(2+3)", &empty), Ok(-5.0));
    assert_eq!(evaluate("3*(-2)", &empty), Ok(-6.0));
    // the sign is an ordinary `+`/`-` after an implicit zero
    assert_eq!(evaluate("3*-2", &empty), Ok(-2.0));
}

#[test]
fn variables_shadow_functions() {
    let mut variables = HashMap::new();
    variables.insert("t".to_string(), 5.0);
    assert_eq!(evaluate("t+1", &variables), Ok(6.0));

    variables.insert("abs".to_string(), 2.0);
    assert_eq!(evaluate("abs(0-3)", &variables), Ok(-6.0));
}

#[test]
fn builtin_functions() {
    let empty = HashMap::new();
    assert_eq!(evaluate("sqrt(16)", &empty), Ok(4.0));
    assert_eq!(evaluate("sin(0)", &empty), Ok(0.0));
    assert_eq!(evaluate("abs(-5)", &empty), Ok(5.0));
    assert_eq!(evaluate("cos(0) + exp(0)", &empty), Ok(2.0));
}

#[test]
fn error_kinds() {
    assert_eq!(kind(""), ErrorKind::NoInput);
    assert_eq!(kind("2 3"), ErrorKind::UnexpectedDigit);
    assert_eq!(kind("(2+3"), ErrorKind::MismatchedBracket);
    assert_eq!(kind("2+"), ErrorKind::InvalidExpression);
    assert_eq!(kind("foo(1)"), ErrorKind::UnknownFunction);
    assert_eq!(kind("2 # 3"), ErrorKind::UnexpectedCharacter);
    assert_eq!(kind("*3"), ErrorKind::UnexpectedSymbol);
}

#[test]
fn diagnostic_points_at_the_failure() {
    let err: ParserError = evaluate("1 + 2 $ 3", &HashMap::new()).unwrap_err();
    let location = err.location().unwrap();
    assert_eq!(location.offset, 6);
    assert_eq!(location.input, "1 + 2 $ 3");
    assert_eq!(
        err.to_string(),
        "Parser Error: Unexpected symbol '$'\n1 + 2 $ 3\n      ^"
    );
}

#[test]
fn repeated_calls_are_identical() {
    let mut variables = default_variables();
    variables.insert("t".to_string(), 0.37);
    let expression = "sin(2*pi*t) + t^2 / (1 + abs(t))";
    let first = evaluate(expression, &variables).unwrap();
    for _ in 0..100 {
        let again = evaluate(expression, &variables).unwrap();
        assert_eq!(again.to_bits(), first.to_bits());
    }
}

#[test]
fn nested_expression_matches_its_value() {
    let empty = HashMap::new();
    let inner = "(3 + 5) / 2";
    let value = evaluate(inner, &empty).unwrap();
    let nested = evaluate(&format!("2 * ({}) - 1", inner), &empty).unwrap();
    let literal = evaluate(&format!("2 * {} - 1", value), &empty).unwrap();
    assert_eq!(nested, literal);
    assert_eq!(nested, 7.0);
}

#[test]
fn concurrent_evaluations_are_independent() {
    let expression = Arc::new("t * 2 + sqrt(t * t)".to_string());

    let mut handles = vec![];
    for i in 0..8 {
        let expression = Arc::clone(&expression);
        let handle = thread::spawn(move || {
            let mut variables = default_variables();
            variables.insert("t".to_string(), i as f32);
            for _ in 0..200 {
                assert_eq!(evaluate(&expression, &variables), Ok(3.0 * i as f32));
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
