#[cfg(test)]
mod tests;

mod expr;

use crate::frontend::ast::*;
use crate::frontend::token::{Keyword, Token};
use crate::session::InternedStr;

#[derive(thiserror::Error, Debug)]
#[error("expected {expected}, but found {found}")]
pub struct ParseError {
    pub expected: String,
    pub found: &'static str,
}

impl ParseError {
    fn expected(expected: impl Into<String>, found: Token) -> Self {
        Self {
            expected: expected.into(),
            found: found.token_name(),
        }
    }
}

pub type ParseResult<T> = Result<T, ParseError>;

pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// Parses a whole source unit: exactly one function declaration.
    pub fn parse_module(mut self) -> ParseResult<Module> {
        let func = self.parse_func_decl()?;
        self.expect(Token::Eof)?;

        Ok(Module {
            item: Item::FuncDecl(func),
        })
    }

    /// Parses a standalone expression spanning the whole input.
    pub fn parse_expression(mut self) -> ParseResult<Expr> {
        let expr = self.parse_expr()?;
        self.expect(Token::Eof)?;
        Ok(expr)
    }

    /// Parses a standalone statement spanning the whole input.
    pub fn parse_statement(mut self) -> ParseResult<Stmt> {
        let stmt = self.parse_stmt()?;
        self.expect(Token::Eof)?;
        Ok(stmt)
    }

    fn parse_func_decl(&mut self) -> ParseResult<FuncDecl> {
        self.expect(Token::Keyword(Keyword::Int))?;

        let name = self.parse_ident()?;

        self.expect(Token::LParen)?;
        self.expect(Token::RParen)?;

        self.expect(Token::LBrace)?;

        let mut statements = vec![];
        while self.peek() != Token::RBrace && self.peek() != Token::Eof {
            statements.push(self.parse_stmt()?);
        }

        self.expect(Token::RBrace)?;

        Ok(FuncDecl { name, statements })
    }

    fn parse_stmt(&mut self) -> ParseResult<Stmt> {
        match self.peek() {
            Token::Keyword(Keyword::Return) => {
                self.next();
                let expr = self.parse_expr()?;
                self.expect(Token::Semicolon)?;
                Ok(Stmt::Return(expr))
            }

            Token::Keyword(Keyword::Int) => {
                self.next();
                let name = self.parse_ident()?;

                let init = if self.eat(Token::Assign) {
                    Some(self.parse_expr()?)
                } else {
                    None
                };

                self.expect(Token::Semicolon)?;
                Ok(Stmt::Declare { name, init })
            }

            _ => {
                let expr = self.parse_expr()?;
                self.expect(Token::Semicolon)?;
                Ok(Stmt::Expr(expr))
            }
        }
    }

    fn parse_ident(&mut self) -> ParseResult<InternedStr> {
        match self.next() {
            Token::Identifier(name) => Ok(name),
            other => Err(ParseError::expected("an identifier", other)),
        }
    }

    fn peek(&self) -> Token {
        self.tokens.get(self.pos).copied().unwrap_or(Token::Eof)
    }

    // Never advances past `Eof`, so truncated input cannot run the cursor
    // off the end of the token buffer.
    fn next(&mut self) -> Token {
        let token = self.peek();
        if token != Token::Eof {
            self.pos += 1;
        }
        token
    }

    fn eat(&mut self, kind: Token) -> bool {
        match self.peek() {
            t if t == kind => {
                self.next();
                true
            }
            _ => false,
        }
    }

    fn expect(&mut self, kind: Token) -> ParseResult<Token> {
        match self.peek() {
            t if t == kind => {
                self.next();
                Ok(t)
            }
            other => Err(ParseError::expected(kind.token_name(), other)),
        }
    }
}
