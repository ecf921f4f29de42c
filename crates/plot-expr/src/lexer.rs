// File: crates/plot-expr/src/lexer.rs
// Summary: Splits expression source into spanned lexemes (idents, numbers, operator chars).

use std::ops::Range;

use crate::ExprError;

/// A contiguous piece of source text with its span in the original input.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    text: String,
    span: Range<usize>,
}

impl Lexeme {
    pub fn new(text: &str, span: Range<usize>) -> Self {
        Self { text: text.to_string(), span }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start(&self) -> usize {
        self.span.start
    }

    pub fn span(&self) -> &Range<usize> {
        &self.span
    }
}

impl std::fmt::Display for Lexeme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}, {})", self.text, self.span.start, self.span.end)
    }
}

type CharIter<'a> = std::iter::Peekable<std::str::CharIndices<'a>>;

/// Consume the tail of an identifier: alphanumerics and underscores.
/// `start_end` is the byte index just past the identifier's first char.
fn scan_ident(start_end: usize, chars: &mut CharIter) -> usize {
    let mut end = start_end;
    while let Some(&(idx, ch)) = chars.peek() {
        if ch.is_alphanumeric() || ch == '_' {
            chars.next();
            end = idx + ch.len_utf8();
        } else {
            break;
        }
    }
    end
}

/// Consume the tail of a numeric literal: digits, one decimal point,
/// scientific notation with an optional sign after the exponent marker.
fn scan_number(start_end: usize, chars: &mut CharIter) -> usize {
    let mut end = start_end;
    let mut seen_e = false;
    let mut after_e = false;
    while let Some(&(idx, ch)) = chars.peek() {
        let accept = match ch {
            d if d.is_ascii_digit() || d == '.' => true,
            'e' | 'E' if !seen_e => true,
            // sign belongs to the number only directly after the exponent marker
            '+' | '-' if after_e => true,
            _ => false,
        };
        if !accept {
            break;
        }
        if matches!(ch, 'e' | 'E') {
            seen_e = true;
            after_e = true;
        } else {
            after_e = false;
        }
        chars.next();
        end = idx + ch.len_utf8();
    }
    end
}

const OPERATOR_CHARS: &str = "+-*/^(),";

/// Split `input` into lexemes. Whitespace separates; any character that is
/// neither ident, number, nor one of `+ - * / ^ ( ) ,` is an error.
pub fn lex(input: &str) -> Result<Vec<Lexeme>, ExprError> {
    let mut out = Vec::new();
    let mut chars: CharIter = input.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if ch.is_whitespace() {
            continue;
        }
        let end = if ch.is_alphabetic() || ch == '_' {
            scan_ident(idx + ch.len_utf8(), &mut chars)
        } else if ch.is_ascii_digit() || ch == '.' {
            scan_number(idx + ch.len_utf8(), &mut chars)
        } else if OPERATOR_CHARS.contains(ch) {
            idx + ch.len_utf8()
        } else {
            return Err(ExprError::UnexpectedChar { ch, pos: idx });
        };
        out.push(Lexeme::new(&input[idx..end], idx..end));
    }

    Ok(out)
}
