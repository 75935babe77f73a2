use super::lexer::{Token, TokenKind};
use crate::core::ExpressionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Bool(bool),
    Number(i64),
    Not(Box<Expr>),
    Binary(BinOp, Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    And,
    Or,
    Xor,
}

impl BinOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Xor => "XOR",
        }
    }
}

/// Builds an expression tree from tokens.
///
/// Precedence from loosest to tightest: `OR`, `AND`, `XOR`, `NOT`.
pub fn parse(tokens: &[Token]) -> Result<Expr, ExpressionError> {
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let mut parser = Parser { tokens, idx: 0 };
    let expr = parser.parse_or()?;

    // Anything left over (a stray `)` or two adjacent operands) is an error.
    if let Some(token) = parser.peek() {
        return Err(unexpected(token));
    }
    Ok(expr)
}

struct Parser<'a> {
    tokens: &'a [Token],
    idx: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.idx).copied()
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.peek()?;
        self.idx += 1;
        Some(token)
    }

    /// Consumes the next token if it has the given kind.
    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.peek().is_some_and(|t| t.kind == kind) {
            self.idx += 1;
            true
        } else {
            false
        }
    }

    fn parse_binary(
        &mut self,
        kind: TokenKind,
        op: BinOp,
        operand: fn(&mut Self) -> Result<Expr, ExpressionError>,
    ) -> Result<Expr, ExpressionError> {
        let mut lhs = operand(self)?;
        while self.eat(kind) {
            let rhs = operand(self)?;
            lhs = Expr::Binary(op, Box::new(lhs), Box::new(rhs));
        }
        Ok(lhs)
    }

    fn parse_or(&mut self) -> Result<Expr, ExpressionError> {
        self.parse_binary(TokenKind::Or, BinOp::Or, Self::parse_and)
    }

    fn parse_and(&mut self) -> Result<Expr, ExpressionError> {
        self.parse_binary(TokenKind::And, BinOp::And, Self::parse_xor)
    }

    fn parse_xor(&mut self) -> Result<Expr, ExpressionError> {
        self.parse_binary(TokenKind::Xor, BinOp::Xor, Self::parse_unary)
    }

    fn parse_unary(&mut self) -> Result<Expr, ExpressionError> {
        if self.eat(TokenKind::Not) {
            let operand = self.parse_unary()?;
            return Ok(Expr::Not(Box::new(operand)));
        }
        self.parse_primary()
    }

    fn parse_primary(&mut self) -> Result<Expr, ExpressionError> {
        let token = self.next().ok_or(ExpressionError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Bool(b) => Ok(Expr::Bool(b)),
            TokenKind::Number(n) => Ok(Expr::Number(n)),
            TokenKind::ParenBegin => {
                let inner = self.parse_or()?;
                if self.eat(TokenKind::ParenEnd) {
                    Ok(inner)
                } else {
                    Err(ExpressionError::UnclosedParen { pos: token.pos })
                }
            }
            _ => Err(unexpected(token)),
        }
    }
}

fn unexpected(token: Token) -> ExpressionError {
    ExpressionError::UnexpectedToken {
        token: token.kind.to_string(),
        pos: token.pos,
    }
}
