// File: crates/plot-expr/src/parser.rs
// Summary: Shunting-yard compiler from tokens to an RPN op list, and the
// stack machine that evaluates it. Operand counts are validated at compile
// time so evaluation never underflows.

use crate::token::{tokenize, BinaryOp, Function, Token, UnaryOp};
use crate::{lexer, ExprError};

/// One RPN operation of a compiled expression.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Op {
    Push(f64),
    Load,
    Unary(UnaryOp),
    Binary(BinaryOp),
    Call(Function),
}

/// A compiled expression in one free variable `x`.
///
/// Compilation is the only fallible step; [`Expr::eval`] is total and
/// follows IEEE-754 for domain violations (`1/0` is `inf`, not an error).
#[derive(Clone, Debug, PartialEq)]
pub struct Expr {
    ops: Vec<Op>,
}

impl Expr {
    /// Evaluate at `x`. Runs the validated op list over a value stack.
    pub fn eval(&self, x: f64) -> f64 {
        let mut stack: Vec<f64> = Vec::with_capacity(8);
        for op in &self.ops {
            match *op {
                Op::Push(v) => stack.push(v),
                Op::Load => stack.push(x),
                Op::Unary(u) => {
                    let Some(v) = stack.pop() else { return f64::NAN };
                    stack.push(u.apply(v));
                }
                Op::Binary(b) => {
                    let (Some(rhs), Some(lhs)) = (stack.pop(), stack.pop()) else {
                        return f64::NAN;
                    };
                    stack.push(b.apply(lhs, rhs));
                }
                Op::Call(f) => {
                    let at = stack.len().saturating_sub(f.arity());
                    let v = f.apply(&stack[at..]);
                    stack.truncate(at);
                    stack.push(v);
                }
            }
        }
        stack.pop().unwrap_or(f64::NAN)
    }
}

/// Operator-stack entries during shunting-yard.
#[derive(Clone, Copy, Debug)]
enum SyEntry {
    Unary(UnaryOp),
    Binary(BinaryOp),
    Function(Function),
    Paren { commas: usize },
}

/// Tracks output-stack depth while ops are emitted, so underflow is a
/// compile error instead of an evaluation surprise.
struct Emitter {
    ops: Vec<Op>,
    depth: usize,
}

impl Emitter {
    fn new() -> Self {
        Self { ops: Vec::new(), depth: 0 }
    }

    fn emit(&mut self, op: Op) -> Result<(), ExprError> {
        let needs = match op {
            Op::Push(_) | Op::Load => 0,
            Op::Unary(_) => 1,
            Op::Binary(_) => 2,
            Op::Call(f) => f.arity(),
        };
        if self.depth < needs {
            return Err(ExprError::MissingOperand);
        }
        self.depth = self.depth - needs + 1;
        self.ops.push(op);
        Ok(())
    }

    fn emit_stacked(&mut self, entry: SyEntry) -> Result<(), ExprError> {
        match entry {
            SyEntry::Unary(u) => self.emit(Op::Unary(u)),
            SyEntry::Binary(b) => self.emit(Op::Binary(b)),
            SyEntry::Function(f) => self.emit(Op::Call(f)),
            SyEntry::Paren { .. } => Err(ExprError::UnbalancedParen),
        }
    }
}

/// Compile `source` into an [`Expr`].
pub fn compile(source: &str) -> Result<Expr, ExprError> {
    let lexemes = lexer::lex(source)?;
    let tokens = tokenize(&lexemes)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }

    let mut out = Emitter::new();
    let mut stack: Vec<SyEntry> = Vec::new();
    let mut prev: Option<Token> = None;

    for &token in &tokens {
        match token {
            Token::Number(v) => out.emit(Op::Push(v))?,
            Token::Variable => out.emit(Op::Load)?,
            Token::Function(f) => stack.push(SyEntry::Function(f)),
            Token::Unary(u) => stack.push(SyEntry::Unary(u)),
            Token::Binary(b) => {
                while let Some(&top) = stack.last() {
                    let pop = match top {
                        SyEntry::Function(_) => true,
                        SyEntry::Unary(u) => u.precedence() > b.precedence()
                            || (u.precedence() == b.precedence() && b.is_left_assoc()),
                        SyEntry::Binary(t) => t.precedence() > b.precedence()
                            || (t.precedence() == b.precedence() && b.is_left_assoc()),
                        SyEntry::Paren { .. } => false,
                    };
                    if !pop {
                        break;
                    }
                    let entry = stack.pop().ok_or(ExprError::MissingOperand)?;
                    out.emit_stacked(entry)?;
                }
                stack.push(SyEntry::Binary(b));
            }
            Token::LeftParen => stack.push(SyEntry::Paren { commas: 0 }),
            Token::Comma => loop {
                match stack.pop() {
                    None => return Err(ExprError::MisplacedComma),
                    Some(SyEntry::Paren { commas }) => {
                        stack.push(SyEntry::Paren { commas: commas + 1 });
                        break;
                    }
                    Some(entry) => out.emit_stacked(entry)?,
                }
            },
            Token::RightParen => {
                if matches!(prev, Some(Token::LeftParen)) {
                    return Err(ExprError::MissingOperand);
                }
                let commas = loop {
                    match stack.pop() {
                        None => return Err(ExprError::UnbalancedParen),
                        Some(SyEntry::Paren { commas }) => break commas,
                        Some(entry) => out.emit_stacked(entry)?,
                    }
                };
                let argc = commas + 1;
                if let Some(SyEntry::Function(f)) = stack.last().copied() {
                    stack.pop();
                    if f.arity() != argc {
                        return Err(ExprError::WrongArity {
                            name: f.name(),
                            expected: f.arity(),
                            got: argc,
                        });
                    }
                    out.emit(Op::Call(f))?;
                } else if commas > 0 {
                    // commas are only legal between call arguments
                    return Err(ExprError::MisplacedComma);
                }
            }
        }
        prev = Some(token);
    }

    while let Some(entry) = stack.pop() {
        out.emit_stacked(entry)?;
    }

    match out.depth {
        1 => Ok(Expr { ops: out.ops }),
        0 => Err(ExprError::MissingOperand),
        _ => Err(ExprError::TrailingOperand),
    }
}
