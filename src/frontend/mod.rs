pub mod ast;
pub mod lexer;
pub mod parser;
pub mod printer;
pub mod token;

#[cfg(test)]
mod tests;

pub use printer::AstPrinter;

use ast::{Expr, Module, Stmt};
use lexer::{Lexer, LexerError};
use parser::{ParseError, Parser};
use token::Token;

use crate::session::Session;

pub fn lex(source: &str, session: &Session) -> Result<Vec<Token>, LexerError> {
    Lexer::new(source, session).lex()
}

pub fn parse(tokens: Vec<Token>) -> Result<Module, ParseError> {
    Parser::new(tokens).parse_module()
}

/// Parses a standalone expression, requiring that it spans the whole input.
pub fn parse_expression(tokens: Vec<Token>) -> Result<Expr, ParseError> {
    Parser::new(tokens).parse_expression()
}

/// Parses a standalone statement, requiring that it spans the whole input.
pub fn parse_statement(tokens: Vec<Token>) -> Result<Stmt, ParseError> {
    Parser::new(tokens).parse_statement()
}
