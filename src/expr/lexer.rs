use crate::core::ExpressionError;
use std::fmt;
use std::iter::Peekable;
use std::str::Chars;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// Zero-based character offset into the expression text.
    pub pos: usize,
}

impl Token {
    pub fn new(kind: TokenKind, pos: usize) -> Self {
        Self { kind, pos }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Bool(bool),
    /// Any integer literal other than a bare `0` or `1`.
    Number(i64),
    And,
    Or,
    Xor,
    Not,
    ParenBegin,
    ParenEnd,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(true) => f.write_str("1"),
            Self::Bool(false) => f.write_str("0"),
            Self::Number(n) => write!(f, "{}", n),
            Self::And => f.write_str("AND"),
            Self::Or => f.write_str("OR"),
            Self::Xor => f.write_str("XOR"),
            Self::Not => f.write_str("NOT"),
            Self::ParenBegin => f.write_str("("),
            Self::ParenEnd => f.write_str(")"),
        }
    }
}

/// Splits an expression into tokens. Whitespace only separates tokens.
pub fn lex(text: &str) -> Result<Vec<Token>, ExpressionError> {
    let mut lexer = Lexer {
        chars: text.chars().peekable(),
        pos: 0,
    };

    let mut tokens = Vec::new();
    while let Some(token) = lexer.next_token()? {
        trace!(?token, "lexed");
        tokens.push(token);
    }
    Ok(tokens)
}

struct Lexer<'a> {
    chars: Peekable<Chars<'a>>,
    pos: usize,
}

impl Lexer<'_> {
    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        self.pos += 1;
        Some(c)
    }

    /// Consumes characters while `pred` holds and returns them.
    fn take_while(&mut self, first: char, pred: impl Fn(char) -> bool) -> String {
        let mut word = String::from(first);
        while let Some(&c) = self.chars.peek() {
            if !pred(c) {
                break;
            }
            word.push(c);
            self.bump();
        }
        word
    }

    fn next_token(&mut self) -> Result<Option<Token>, ExpressionError> {
        while self.chars.peek().is_some_and(|c| c.is_whitespace()) {
            self.bump();
        }

        let start = self.pos;
        let Some(c) = self.bump() else {
            return Ok(None);
        };

        let kind = match c {
            '(' => TokenKind::ParenBegin,
            ')' => TokenKind::ParenEnd,
            '!' => TokenKind::Not,
            '^' => TokenKind::Xor,
            c if c.is_ascii_digit() => {
                let digits = self.take_while(c, |c| c.is_ascii_digit());
                number_token(&digits)?
            }
            c if c.is_alphabetic() => {
                let word = self.take_while(c, char::is_alphanumeric);
                keyword_token(&word).ok_or(ExpressionError::UnexpectedToken {
                    token: word,
                    pos: start,
                })?
            }
            ch => return Err(ExpressionError::UnexpectedChar { ch, pos: start }),
        };

        Ok(Some(Token::new(kind, start)))
    }
}

fn number_token(digits: &str) -> Result<TokenKind, ExpressionError> {
    match digits {
        "0" => Ok(TokenKind::Bool(false)),
        "1" => Ok(TokenKind::Bool(true)),
        _ => digits
            .parse()
            .map(TokenKind::Number)
            .map_err(|_| ExpressionError::NumberOutOfRange {
                text: digits.to_string(),
            }),
    }
}

fn keyword_token(word: &str) -> Option<TokenKind> {
    match word.to_ascii_lowercase().as_str() {
        "and" => Some(TokenKind::And),
        "or" => Some(TokenKind::Or),
        "xor" => Some(TokenKind::Xor),
        "not" => Some(TokenKind::Not),
        "true" => Some(TokenKind::Bool(true)),
        "false" => Some(TokenKind::Bool(false)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<TokenKind> {
        lex(text).unwrap().into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn lexes_operators_and_literals() {
        assert_eq!(
            kinds("1 AND 0"),
            vec![TokenKind::Bool(true), TokenKind::And, TokenKind::Bool(false)]
        );
        assert_eq!(
            kinds("!(1^0)"),
            vec![
                TokenKind::Not,
                TokenKind::ParenBegin,
                TokenKind::Bool(true),
                TokenKind::Xor,
                TokenKind::Bool(false),
                TokenKind::ParenEnd,
            ]
        );
    }

    #[test]
    fn keywords_are_case_insensitive() {
        assert_eq!(
            kinds("true xor False"),
            vec![TokenKind::Bool(true), TokenKind::Xor, TokenKind::Bool(false)]
        );
        assert_eq!(kinds("Not"), vec![TokenKind::Not]);
    }

    #[test]
    fn multi_digit_numbers_stay_whole() {
        assert_eq!(kinds("10"), vec![TokenKind::Number(10)]);
        assert_eq!(kinds("01"), vec![TokenKind::Number(1)]);
    }

    #[test]
    fn positions_are_character_offsets() {
        let tokens = lex("  1 OR 0").unwrap();
        let positions: Vec<usize> = tokens.iter().map(|t| t.pos).collect();
        assert_eq!(positions, vec![2, 4, 7]);
    }

    #[test]
    fn rejects_unknown_words_and_symbols() {
        assert_eq!(
            lex("1 NAND 0"),
            Err(ExpressionError::UnexpectedToken {
                token: "NAND".to_string(),
                pos: 2
            })
        );
        assert_eq!(
            lex("1 & 0"),
            Err(ExpressionError::UnexpectedChar { ch: '&', pos: 2 })
        );
    }

    #[test]
    fn rejects_oversized_numbers() {
        assert!(matches!(
            lex("99999999999999999999"),
            Err(ExpressionError::NumberOutOfRange { .. })
        ));
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(lex("   ").unwrap().is_empty());
    }
}
