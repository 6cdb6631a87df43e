//! Operand classifiers for IPPcode20.
//!
//! Each classifier is a pure function over a single whitespace-delimited
//! token: it either recognizes the token and returns a typed [`Operand`],
//! or returns `None`. Classifiers never consult instruction context, so
//! the grammar table can stay a declarative list of classifier references.

use crate::ast::{ConstKind, Frame, Operand};

/// Classify a `frame@identifier` variable reference.
pub fn classify_variable(token: &str) -> Option<Operand> {
    let (tag, name) = token.split_once('@')?;
    let frame = Frame::from_tag(tag)?;
    if !is_identifier(name) {
        return None;
    }
    Some(Operand::Variable {
        frame,
        name: name.to_string(),
    })
}

/// Classify a "symbol": a variable reference or a constant literal.
///
/// The variable pattern is tried first, matching the language grammar
/// where `GF@x` is never an `int`/`string`/... constant. The constant
/// payload is everything after the first `@`, kept raw.
pub fn classify_symbol(token: &str) -> Option<Operand> {
    if let Some(variable) = classify_variable(token) {
        return Some(variable);
    }

    let (prefix, value) = token.split_once('@')?;
    let kind = match prefix {
        "int" if is_int_literal(value) => ConstKind::Int,
        "bool" if value == "true" || value == "false" => ConstKind::Bool,
        "nil" if value == "nil" => ConstKind::Nil,
        "string" if is_string_literal(value) => ConstKind::Str,
        _ => return None,
    };
    Some(Operand::Constant {
        kind,
        value: value.to_string(),
    })
}

/// Classify a bare label name. Labels share the identifier grammar with
/// variable names, without the frame tag.
pub fn classify_label(token: &str) -> Option<Operand> {
    if !is_identifier(token) {
        return None;
    }
    Some(Operand::Label(token.to_string()))
}

/// Classify a data-type keyword (`int`, `string`, `bool`).
pub fn classify_type(token: &str) -> Option<Operand> {
    match token {
        "int" | "string" | "bool" => Some(Operand::TypeKeyword(token.to_string())),
        _ => None,
    }
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if is_ident_start(first) => {}
        _ => return false,
    }
    chars.all(is_ident_continue)
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || matches!(ch, '_' | '-' | '$' | '&' | '%' | '*' | '!' | '?')
}

fn is_ident_continue(ch: char) -> bool {
    is_ident_start(ch) || ch.is_ascii_digit()
}

fn is_int_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// A string literal body may contain any character except raw whitespace
/// (impossible here, tokens are whitespace-split) and backslash, which
/// must introduce an escape of exactly three decimal digits.
fn is_string_literal(text: &str) -> bool {
    let mut bytes = text.bytes();
    while let Some(b) = bytes.next() {
        if b == b'\\' {
            for _ in 0..3 {
                match bytes.next() {
                    Some(digit) if digit.is_ascii_digit() => {}
                    _ => return false,
                }
            }
        }
    }
    true
}
