//! The command-line driver: argument parsing, file-mode and REPL-mode execution, and colored
//! step diagnostics for each pipeline stage.
//!
//! None of this is part of the three core stages: the library crate (`lexer`, `parser`,
//! `evaluator`) never touches a terminal. This module is the thin binary-facing layer that
//! makes the core runnable.

mod diagnostics;

use std::io::Write as _;
use std::path::PathBuf;

use clap::Parser;

use crate::evaluator::Evaluator;
use crate::lexer;
use crate::parser;

use diagnostics::step;

/// `aml [--repl] [-p] [FILE]`
#[derive(Parser)]
#[command(name = "aml", about = "A tree-walking interpreter for a small scripting language")]
pub struct Args {
	/// Path to a script to run. When omitted, a REPL is started instead.
	pub file: Option<PathBuf>,

	/// Force REPL mode even if a file is given.
	#[arg(long)]
	pub repl: bool,

	/// Dump the parsed AST (via `{:#?}`) instead of evaluating it.
	#[arg(short = 'p', long = "print-ast")]
	pub print_ast: bool,
}

/// Parses arguments and dispatches to file or REPL mode.
///
/// # Errors
/// Returns an error if the script file cannot be read, or if any pipeline stage fails.
pub fn main() -> anyhow::Result<()> {
	let args = Args::parse();
	match &args.file {
		Some(path) if !args.repl => run_file(path, args.print_ast),
		_ => run_repl(args.print_ast),
	}
}

fn run_file(path: &PathBuf, print_ast: bool) -> anyhow::Result<()> {
	let filename = path.display().to_string();
	diagnostics::start("Running", &filename);

	let source = step("Reading source file", std::fs::read_to_string(path))?;
	let tokens = step("Tokenizing", lexer::scan(&filename, &source))?;
	let program = step("Parsing", parser::parse(tokens))?;

	if print_ast {
		println!("{program:#?}");
		return Ok(());
	}

	step("Evaluating", Evaluator::new().interpret(&program))?;
	diagnostics::finish();
	Ok(())
}

fn run_repl(print_ast: bool) -> anyhow::Result<()> {
	println!("aml REPL, Ctrl-D to exit");
	let mut evaluator = Evaluator::new();
	let mut line = String::new();
	loop {
		print!("> ");
		std::io::stdout().flush()?;
		line.clear();
		let bytes_read = std::io::stdin().read_line(&mut line)?;
		if bytes_read == 0 {
			break;
		}
		let trimmed = line.trim();
		if trimmed.is_empty() {
			continue;
		}
		if let Err(error) = evaluate_line(&mut evaluator, trimmed, print_ast) {
			eprintln!("{error}");
		}
	}
	Ok(())
}

fn evaluate_line(evaluator: &mut Evaluator, source: &str, print_ast: bool) -> anyhow::Result<()> {
	let tokens = lexer::scan("<repl>", source)?;
	let program = parser::parse(tokens)?;
	if print_ast {
		println!("{program:#?}");
		return Ok(());
	}
	let value = evaluator.interpret(&program)?;
	if !matches!(value, crate::evaluator::Value::Null) {
		println!("{value}");
	}
	Ok(())
}
