use std::process::ExitCode;

use clap::Parser as _;
use cli::{Cli, Command};
use minicc::frontend::{self, AstPrinter};
use minicc::session::Session;
use minicc::CompilerResult;

mod cli;

fn main() -> ExitCode {
    if let Err(err) = run() {
        eprintln!("{err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn run() -> CompilerResult<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { input, output } => {
            let source = std::fs::read_to_string(input)?;

            let session = Session::default();
            let asm = minicc::compile(&source, &session)?;

            match output {
                Some(path) => std::fs::write(path, asm)?,
                None => print!("{asm}"),
            }
        }

        Command::DumpAst { input } => {
            let source = std::fs::read_to_string(input)?;

            let session = Session::default();
            let tokens = frontend::lex(&source, &session)?;
            let module = frontend::parse(tokens)?;

            print!("{}", AstPrinter::new(&session).print_module(&module));
        }
    }

    Ok(())
}
