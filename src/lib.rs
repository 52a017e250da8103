//! # aml
//!
//! A tree-walking interpreter for a small dynamically-typed imperative scripting language.
//!
//! The crate's core is three tightly-coupled, host-agnostic stages (a lexical scanner, a
//! recursive-descent parser, and an AST-walking evaluator), wired together by [`run`]. Anything
//! outside those three stages (the CLI driver, the REPL loop, native callables' I/O) is a thin
//! collaborator layered on top in [`cli`] and [`evaluator::natives`].

/// The scanner, which turns source text into a flat token sequence.
pub mod lexer;

/// The recursive-descent parser, which turns a token sequence into an AST of statements.
pub mod parser;

/// The AST-walking evaluator: environments, closures, and non-local control flow.
pub mod evaluator;

/// The CLI driver: argument parsing, file/REPL modes, and colored step diagnostics.
pub mod cli;

/// A single error type spanning all three pipeline stages, for callers that just want to
/// report-and-exit rather than match on the stage a failure came from.
#[derive(Debug)]
pub enum Error {
	Lex(lexer::LexError),
	Parse(parser::ParseError),
	Runtime(evaluator::RuntimeError),
}

impl std::fmt::Display for Error {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Lex(error) => write!(f, "{error}"),
			Self::Parse(error) => write!(f, "{error}"),
			Self::Runtime(error) => write!(f, "{error}"),
		}
	}
}

impl std::error::Error for Error {}

impl From<lexer::LexError> for Error {
	fn from(error: lexer::LexError) -> Self {
		Self::Lex(error)
	}
}

impl From<parser::ParseError> for Error {
	fn from(error: parser::ParseError) -> Self {
		Self::Parse(error)
	}
}

impl From<evaluator::RuntimeError> for Error {
	fn from(error: evaluator::RuntimeError) -> Self {
		Self::Runtime(error)
	}
}

/// Drives the full pipeline over `source` (labelled `filename` for diagnostics): scan, parse,
/// then evaluate, returning the evaluator's tracked "last value".
///
/// # Errors
/// Returns the first error encountered at any stage; later stages are never reached once an
/// earlier one fails.
pub fn run(filename: &str, source: &str) -> Result<evaluator::Value, Error> {
	let tokens = lexer::scan(filename, source)?;
	let program = parser::parse(tokens)?;
	let value = evaluator::Evaluator::new().interpret(&program)?;
	Ok(value)
}
