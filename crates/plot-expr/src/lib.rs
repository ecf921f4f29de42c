// File: crates/plot-expr/src/lib.rs
// Summary: Library entry point: compile expression text into an evaluable program.

//! # plot-expr
//!
//! A small arithmetic-expression compiler for plotting: parse a string in
//! one free variable `x` into an RPN program, then evaluate it repeatedly
//! without re-parsing.
//!
//! The grammar is deliberately closed: `+ - * / ^`, unary sign,
//! parentheses, numeric literals (including scientific notation), the
//! constants `pi`, `e`, `tau`, and a fixed allowlist of named functions
//! (`sin`, `cos`, `sqrt`, ... see [`token::Function`]). User input is never
//! executed as host code.
//!
//! Compilation is where all errors live; evaluation is total and IEEE-754:
//! `1/0` evaluates to `inf` and `sqrt(-1)` to `NaN`, both of which are
//! ordinary data for a plot.
//!
//! ## Example
//! ```rust
//! let expr = plot_expr::compile("sin(x) + x/2").unwrap();
//! let y = expr.eval(1.0);
//! assert!((y - (1.0f64.sin() + 0.5)).abs() < 1e-12);
//! ```

pub mod lexer;
pub mod parser;
pub mod token;

pub use parser::{compile, Expr};

/// Everything that can go wrong turning expression text into an [`Expr`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,
    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("malformed number '{text}'")]
    MalformedNumber { text: String },
    #[error("unknown identifier '{name}'")]
    UnknownIdentifier { name: String },
    #[error("{name} expects {expected} argument(s), got {got}")]
    WrongArity {
        name: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("misplaced comma")]
    MisplacedComma,
    #[error("unbalanced parenthesis")]
    UnbalancedParen,
    #[error("operator is missing an operand")]
    MissingOperand,
    #[error("expression leaves extra operands")]
    TrailingOperand,
}
