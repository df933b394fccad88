#[macro_use]
extern crate macro_rules_attribute;

pub mod backend;
pub mod frontend;
pub mod session;

use backend::codegen::{CodeGenerator, CodegenError};
use frontend::lexer::LexerError;
use frontend::parser::ParseError;
use session::Session;

derive_alias! {
    #[derive(Node!)] = #[derive(Debug, Clone, PartialEq, Eq)];
    #[derive(NodeCopy!)] = #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)];
}

#[derive(thiserror::Error, Debug)]
pub enum CompilerError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Lexer(#[from] LexerError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Codegen(#[from] CodegenError),
}

pub type CompilerResult<T> = Result<T, CompilerError>;

/// Runs the whole pipeline on one source unit: lex, parse, generate.
///
/// Stops at the first error; there is no recovery at any stage.
pub fn compile(source: &str, session: &Session) -> CompilerResult<String> {
    let tokens = frontend::lex(source, session)?;
    let module = frontend::parse(tokens)?;
    let asm = CodeGenerator::new(session).run(&module)?;
    Ok(asm)
}
