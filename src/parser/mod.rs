//! The recursive-descent parser, which turns a flat token sequence into a list of statements.
//!
//! Every syntactic category (an expression tier, a statement kind) implements [`Parse`] against
//! a shared [`TokenStream`] cursor, the same seam the scanner's token sequence is threaded
//! through end to end.

pub mod expressions;
pub mod statements;

#[cfg(test)]
mod tests;

use std::fmt;

use crate::lexer::{Token, TokenType};

pub use expressions::Expr;
pub use statements::Stmt;

/// Parses a source token sequence into a list of top-level statements.
pub trait Parse {
	type Output;

	/// # Errors
	/// Returns a [`ParseError`] describing the first unexpected token encountered.
	fn parse(tokens: &mut TokenStream) -> Result<Self::Output, ParseError>;
}

/// A cursor over a token sequence, offering the small set of lookahead operations the grammar
/// needs: peeking one or two tokens ahead, conditionally consuming, and demanding a specific
/// kind.
pub struct TokenStream {
	tokens: Vec<Token>,
	position: usize,
}

impl TokenStream {
	#[must_use]
	pub const fn new(tokens: Vec<Token>) -> Self {
		Self { tokens, position: 0 }
	}

	fn current(&self) -> &Token {
		self.tokens.get(self.position).unwrap_or_else(|| self.tokens.last().expect("token stream always ends in Eof"))
	}

	#[must_use]
	pub fn peek_type(&self) -> TokenType {
		self.current().token_type
	}

	#[must_use]
	pub fn is_at_end(&self) -> bool {
		self.peek_type() == TokenType::Eof
	}

	#[must_use]
	pub fn line(&self) -> usize {
		self.current().line
	}

	/// Unconditionally consumes and returns the current token.
	pub fn advance(&mut self) -> Token {
		let token = self.current().clone();
		if !self.is_at_end() {
			self.position += 1;
		}
		token
	}

	#[must_use]
	pub fn check(&self, token_type: TokenType) -> bool {
		self.peek_type() == token_type
	}

	/// Consumes the current token if it is one of `token_types`, returning whether it matched.
	pub fn matches(&mut self, token_types: &[TokenType]) -> bool {
		if token_types.contains(&self.peek_type()) {
			self.advance();
			true
		} else {
			false
		}
	}

	/// Consumes the current token if it is exactly `token_type`, otherwise fails with `what`
	/// naming the expectation in the diagnostic.
	///
	/// # Errors
	/// Returns a [`ParseError`] if the current token is not `token_type`.
	pub fn expect(&mut self, token_type: TokenType, what: &str) -> Result<Token, ParseError> {
		if self.check(token_type) {
			Ok(self.advance())
		} else {
			Err(self.error(what))
		}
	}

	#[must_use]
	pub fn error(&self, expected: &str) -> ParseError {
		let found = self.current();
		ParseError {
			expected: expected.to_owned(),
			found: if found.token_type == TokenType::Eof {
				"end of input".to_owned()
			} else {
				found.lexeme.clone()
			},
			line: found.line,
		}
	}
}

/// A parse failure, formatted to match the expectation/actual/line triad the language's
/// original tooling reports.
#[derive(Debug, Clone)]
pub struct ParseError {
	pub expected: String,
	pub found: String,
	pub line: usize,
}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Parser Error: expected {} found {} at line {}", self.expected, self.found, self.line)
	}
}

impl std::error::Error for ParseError {}

/// Parses an entire program: zero or more declarations followed by end of input.
///
/// # Errors
/// Returns the first [`ParseError`] encountered; parsing does not attempt error recovery.
pub fn parse(tokens: Vec<Token>) -> Result<Vec<Stmt>, ParseError> {
	let mut stream = TokenStream::new(tokens);
	let mut statements = Vec::new();
	while !stream.is_at_end() {
		statements.push(Stmt::parse(&mut stream)?);
	}
	Ok(statements)
}
