//! Property-based fuzzing tests for the catscript scanner and session
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The scanner and session never panic on arbitrary input
//! 2. Arithmetic matches 32-bit wrapping semantics
//! 3. Output formats always have their documented shape

use catscript::{tokenize, OutputFormat, Session, TokenKind};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate random strings that might break the scanner
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\x00-\x7F]{0,200}").unwrap()
}

/// Generate token-like fragments of the language
fn statement_like_string() -> impl Strategy<Value = String> {
    prop::collection::vec(statement_token(), 0..30).prop_map(|tokens| tokens.join(" "))
}

fn statement_token() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("(".to_string()),
        Just(")".to_string()),
        Just("=".to_string()),
        Just("+".to_string()),
        Just("-".to_string()),
        Just("*".to_string()),
        Just("/".to_string()),
        Just("config".to_string()),
        Just("print".to_string()),
        Just("dec".to_string()),
        Just("hex".to_string()),
        Just("bin".to_string()),
        (-1000i32..1000i32).prop_map(|n| n.to_string()),
        "[a-z][a-z0-9]{0,5}".prop_map(|s| s),
    ]
}

fn run(statements: &[String]) -> String {
    let mut session = Session::new();
    let mut out = Vec::new();
    session.run(statements, &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #[test]
    fn scanner_never_panics(source in arbitrary_source_string()) {
        let tokens = tokenize(&source);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::Eof));
    }

    #[test]
    fn scanner_drops_only_separators(source in arbitrary_source_string()) {
        let kept: usize = tokenize(&source).iter().map(|t| t.lexeme.len()).sum();
        let significant = source
            .chars()
            .filter(|c| c.is_ascii_alphanumeric() || "=+-*/()".contains(*c))
            .count();
        prop_assert_eq!(kept, significant);
    }

    #[test]
    fn session_never_panics(source in statement_like_string()) {
        let mut session = Session::new();
        let mut out = Vec::new();
        let _ = session.execute(&source, &mut out);
    }

    #[test]
    fn addition_and_multiplication_wrap(a in any::<i32>(), b in any::<i32>(), c in any::<i32>()) {
        let output = run(&[
            format!("a = {}", a),
            format!("b = {}", b),
            format!("c = {}", c),
            "print (a + b * c)".to_string(),
        ]);
        prop_assert_eq!(output, format!("{}\n", a.wrapping_add(b.wrapping_mul(c))));
    }

    #[test]
    fn subtraction_is_left_associative(a in -10_000i32..10_000, b in -10_000i32..10_000, c in -10_000i32..10_000) {
        let output = run(&[
            format!("a = {}", a),
            format!("b = {}", b),
            format!("c = {}", c),
            "print (a - b - c)".to_string(),
        ]);
        prop_assert_eq!(output, format!("{}\n", a - b - c));
    }

    #[test]
    fn division_truncates_toward_zero(a in any::<i32>(), b in any::<i32>().prop_filter("non-zero", |b| *b != 0)) {
        let output = run(&[
            format!("a = {}", a),
            format!("b = {}", b),
            "print (a / b)".to_string(),
        ]);
        prop_assert_eq!(output, format!("{}\n", a.wrapping_div(b)));
    }

    #[test]
    fn binary_is_always_32_digits(value in any::<i32>()) {
        let rendered = OutputFormat::Binary.render(value);
        prop_assert_eq!(rendered.len(), 32);
        prop_assert!(rendered.chars().all(|c| c == '0' || c == '1'));
        prop_assert_eq!(u32::from_str_radix(&rendered, 2).unwrap(), value as u32);
    }

    #[test]
    fn hex_round_trips_bit_pattern(value in any::<i32>()) {
        let rendered = OutputFormat::Hexadecimal.render(value);
        prop_assert!(rendered.starts_with("0x"));
        prop_assert_eq!(u32::from_str_radix(&rendered[2..], 16).unwrap(), value as u32);
    }
}
