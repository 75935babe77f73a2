//! Boolean expression mini-language used by quoted literals.
//!
//! Expressions are lexed into tokens, parsed by recursive descent and
//! evaluated over booleans only; nothing is handed to a general interpreter.
//!
//! ```
//! use blox::expr::evaluate;
//!
//! assert_eq!(evaluate("1 AND 0"), Ok(false));
//! assert_eq!(evaluate("!(1 XOR 1)"), Ok(true));
//! assert!(evaluate("2").is_err());
//! ```

pub mod lexer;
pub mod parser;

use crate::core::ExpressionError;
use parser::{BinOp, Expr};
use tracing::debug;

/// Lexes, parses and evaluates `text`, requiring a boolean result.
pub fn evaluate(text: &str) -> Result<bool, ExpressionError> {
    let tokens = lexer::lex(text)?;
    let expr = parser::parse(&tokens)?;
    debug!(?expr, "parsed boolean expression");

    match eval(&expr)? {
        Value::Bool(b) => Ok(b),
        Value::Int(_) => Err(ExpressionError::NonBooleanResult),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Value {
    Bool(bool),
    Int(i64),
}

fn eval(expr: &Expr) -> Result<Value, ExpressionError> {
    match expr {
        Expr::Bool(b) => Ok(Value::Bool(*b)),
        Expr::Number(n) => Ok(Value::Int(*n)),
        Expr::Not(operand) => {
            let b = expect_bool("NOT", eval(operand)?)?;
            Ok(Value::Bool(!b))
        }
        Expr::Binary(op, lhs, rhs) => {
            let lhs = expect_bool(op.symbol(), eval(lhs)?)?;
            let rhs = expect_bool(op.symbol(), eval(rhs)?)?;
            let b = match op {
                BinOp::And => lhs && rhs,
                BinOp::Or => lhs || rhs,
                BinOp::Xor => lhs != rhs,
            };
            Ok(Value::Bool(b))
        }
    }
}

fn expect_bool(op: &'static str, value: Value) -> Result<bool, ExpressionError> {
    match value {
        Value::Bool(b) => Ok(b),
        Value::Int(value) => Err(ExpressionError::NonBooleanOperand { op, value }),
    }
}
