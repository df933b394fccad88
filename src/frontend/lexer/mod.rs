
use std::str::Chars;

use crate::frontend::token::{Keyword, Token};
use crate::session::Session;

#[derive(thiserror::Error, Debug)]
pub enum LexerError {
    #[error("unexpected character {ch:?} at line {line}")]
    UnexpectedChar { ch: char, line: u32 },

    #[error("integer literal too large at line {line}")]
    IntegerOverflow { line: u32 },
}

pub type LexerResult<T> = Result<T, LexerError>;

pub struct Lexer<'sess> {
    session: &'sess Session,

    all: &'sess str,
    chars: Chars<'sess>,

    token_start: usize,
    line: u32,
}

impl<'sess> Lexer<'sess> {
    pub fn new(source: &'sess str, session: &'sess Session) -> Self {
        Self {
            session,

            all: source,
            chars: source.chars(),

            token_start: 0,
            line: 1,
        }
    }

    /// Lexes the whole input in one pass. The returned sequence always ends
    /// with [`Token::Eof`]. The first unrecognized character aborts lexing.
    pub fn lex(mut self) -> LexerResult<Vec<Token>> {
        let mut tokens = vec![];

        while let Some(token) = self.lex_token()? {
            tokens.push(token);
        }

        tokens.push(Token::Eof);
        Ok(tokens)
    }

    fn lex_token(&mut self) -> LexerResult<Option<Token>> {
        loop {
            self.token_start = self.position();

            let Some(ch) = self.chars.next() else {
                return Ok(None);
            };

            let token = match ch {
                // comment
                '/' if self.chars.eat('/') => {
                    loop {
                        match self.chars.next() {
                            Some('\n') => {
                                self.line += 1;
                                break;
                            }
                            None => break,
                            Some(_) => {}
                        }
                    }
                    continue;
                }

                ch if ch.is_ascii_whitespace() => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    continue;
                }

                '{' => Token::LBrace,
                '}' => Token::RBrace,
                '(' => Token::LParen,
                ')' => Token::RParen,
                ';' => Token::Semicolon,

                '+' => Token::Add,
                '-' => Token::Sub,
                '*' => Token::Mul,
                '/' => Token::Div,
                '%' => Token::Mod,
                '~' => Token::BitwiseInvert,
                '^' => Token::BitwiseXor,

                '=' if self.chars.eat('=') => Token::EqEq,
                '=' => Token::Assign,

                '!' if self.chars.eat('=') => Token::NotEq,
                '!' => Token::Bang,

                '<' if self.chars.eat('<') => Token::ShiftLeft,
                '<' if self.chars.eat('=') => Token::LtEq,
                '<' => Token::Lt,

                '>' if self.chars.eat('>') => Token::ShiftRight,
                '>' if self.chars.eat('=') => Token::GtEq,
                '>' => Token::Gt,

                '&' if self.chars.eat('&') => Token::LogicalAnd,
                '&' => Token::BitwiseAnd,

                '|' if self.chars.eat('|') => Token::LogicalOr,
                '|' => Token::BitwiseOr,

                ch @ '0'..='9' => self.lex_integer(ch as u64 - 48)?,

                ch if is_ident_start(ch) => self.lex_alpha(),

                ch => {
                    return Err(LexerError::UnexpectedChar {
                        ch,
                        line: self.line,
                    })
                }
            };

            return Ok(Some(token));
        }
    }

    fn lex_integer(&mut self, start: u64) -> LexerResult<Token> {
        let mut n = start;

        while let Some(ch @ '0'..='9') = self.chars.peek() {
            self.chars.next();

            let digit = ch as u64 - 48;

            n = n
                .checked_mul(10)
                .and_then(|n| n.checked_add(digit))
                .ok_or(LexerError::IntegerOverflow { line: self.line })?;
        }

        Ok(Token::Integer(n))
    }

    fn lex_alpha(&mut self) -> Token {
        while matches!(self.chars.peek(), Some(ch) if is_ident(ch)) {
            self.chars.next();
        }

        let s = &self.all[self.token_start..self.position()];

        match s {
            "int" => Token::Keyword(Keyword::Int),
            "return" => Token::Keyword(Keyword::Return),
            _ => Token::Identifier(self.session.intern(s)),
        }
    }

    fn position(&self) -> usize {
        self.all.len() - self.chars.as_str().len()
    }
}

trait Peek: Iterator {
    fn peek(&self) -> Option<Self::Item>;

    fn eat<P>(&mut self, pat: P) -> bool
    where
        Self::Item: PartialEq<P>,
    {
        match self.peek() {
            Some(item) if item == pat => {
                self.next();
                true
            }
            _ => false,
        }
    }
}

impl Peek for Chars<'_> {
    fn peek(&self) -> Option<Self::Item> {
        self.clone().next()
    }
}

fn is_ident_start(ch: char) -> bool {
    ch.is_ascii_alphabetic() || ch == '_'
}

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}
