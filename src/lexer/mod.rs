//! The lexer (or "scanner"), which turns a source string into a flat sequence of [`Token`]s.
//!
//! The scanner is a single forward pass over the source characters; it never looks at the
//! grammar, only at the shape of individual lexemes. Keywords are recognized by checking an
//! identifier's text against a fixed table after the fact, not by special-casing them during
//! character dispatch.

#[cfg(test)]
mod tests;

use std::fmt;

/// The closed set of token kinds this language's grammar is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
	LeftParen,
	RightParen,
	LeftBrace,
	RightBrace,
	Comma,
	Dot,
	Minus,
	Plus,
	Semicolon,
	Slash,
	Star,
	Question,
	Colon,

	Bang,
	BangEqual,
	Equal,
	EqualEqual,
	Greater,
	GreaterEqual,
	Less,
	LessEqual,

	Identifier,
	String,
	Number,

	And,
	Or,
	If,
	Else,
	While,
	For,
	Break,
	Continue,
	True,
	False,
	Null,
	Var,
	Func,
	Return,
	Class,
	This,
	Super,
	Print,

	Eof,
}

impl fmt::Display for TokenType {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", convert_case::Casing::to_case(&format!("{self:?}"), convert_case::Case::Title))
	}
}

fn keyword(text: &str) -> Option<TokenType> {
	Some(match text {
		"and" => TokenType::And,
		"or" => TokenType::Or,
		"if" => TokenType::If,
		"else" => TokenType::Else,
		"while" => TokenType::While,
		"for" => TokenType::For,
		"break" => TokenType::Break,
		"continue" => TokenType::Continue,
		"true" => TokenType::True,
		"false" => TokenType::False,
		"null" => TokenType::Null,
		"var" => TokenType::Var,
		"func" => TokenType::Func,
		"return" => TokenType::Return,
		"class" => TokenType::Class,
		"this" => TokenType::This,
		"super" => TokenType::Super,
		"print" => TokenType::Print,
		_ => return None,
	})
}

/// The payload a token carries beyond its kind and raw lexeme, for the two literal kinds that
/// need one.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
	Number(f64),
	String(String),
	None,
}

/// A single lexeme recognized by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
	pub token_type: TokenType,
	pub lexeme: String,
	pub literal: Literal,
	pub line: usize,
}

/// An error produced while scanning, carrying enough context to print a standalone diagnostic.
#[derive(Debug, Clone)]
pub struct LexError {
	pub filename: String,
	pub line: usize,
	pub column: usize,
	pub message: String,
}

impl fmt::Display for LexError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Lex Error: {} at {}:{}:{}", self.message, self.filename, self.line, self.column)
	}
}

impl std::error::Error for LexError {}

/// Walks `source` one character at a time, producing tokens in source order.
struct Scanner<'a> {
	filename: &'a str,
	source: Vec<char>,
	tokens: Vec<Token>,
	start: usize,
	current: usize,
	line: usize,
	/// Index into `source` of the first character of the current line, so [`Self::column`] can
	/// report a position relative to the line rather than the whole file.
	line_start: usize,
}

impl<'a> Scanner<'a> {
	fn new(filename: &'a str, source: &str) -> Self {
		Self {
			filename,
			source: source.chars().collect(),
			tokens: Vec::new(),
			start: 0,
			current: 0,
			line: 1,
			line_start: 0,
		}
	}

	const fn is_at_end(&self) -> bool {
		self.current >= self.source.len()
	}

	fn advance(&mut self) -> char {
		let character = self.source[self.current];
		self.current += 1;
		character
	}

	fn peek(&self) -> char {
		*self.source.get(self.current).unwrap_or(&'\0')
	}

	fn matches(&mut self, expected: char) -> bool {
		if self.is_at_end() || self.source[self.current] != expected {
			return false;
		}
		self.current += 1;
		true
	}

	fn column(&self) -> usize {
		self.start - self.line_start + 1
	}

	fn newline(&mut self) {
		self.line += 1;
		self.line_start = self.current;
	}

	fn error(&self, message: impl Into<String>) -> LexError {
		LexError {
			filename: self.filename.to_owned(),
			line: self.line,
			column: self.column(),
			message: message.into(),
		}
	}

	fn add_token(&mut self, token_type: TokenType) {
		self.add_token_literal(token_type, Literal::None);
	}

	fn add_token_literal(&mut self, token_type: TokenType, literal: Literal) {
		let lexeme: String = self.source[self.start..self.current].iter().collect();
		self.tokens.push(Token {
			token_type,
			lexeme,
			literal,
			line: self.line,
		});
	}

	fn string(&mut self) -> Result<(), LexError> {
		while self.peek() != '"' && !self.is_at_end() {
			if self.peek() == '\n' {
				self.advance();
				self.newline();
				continue;
			}
			self.advance();
		}
		if self.is_at_end() {
			return Err(self.error("unterminated string"));
		}
		// Consume the closing quote.
		self.advance();

		let value: String = self.source[self.start + 1..self.current - 1].iter().collect();
		self.add_token_literal(TokenType::String, Literal::String(value));
		Ok(())
	}

	fn number(&mut self) -> Result<(), LexError> {
		while self.peek().is_ascii_digit() {
			self.advance();
		}
		if self.peek() == '.' {
			self.advance();
			if !self.peek().is_ascii_digit() {
				return Err(self.error("expected digit after '.'"));
			}
			while self.peek().is_ascii_digit() {
				self.advance();
			}
		}
		let text: String = self.source[self.start..self.current].iter().collect();
		let value = text.parse::<f64>().map_err(|_| self.error("malformed number literal"))?;
		self.add_token_literal(TokenType::Number, Literal::Number(value));
		Ok(())
	}

	fn identifier(&mut self) {
		while self.peek().is_ascii_alphanumeric() || self.peek() == '_' {
			self.advance();
		}
		let text: String = self.source[self.start..self.current].iter().collect();
		match keyword(&text) {
			Some(token_type) => self.add_token(token_type),
			None => self.add_token_literal(TokenType::Identifier, Literal::String(text)),
		}
	}

	fn scan_token(&mut self) -> Result<(), LexError> {
		let character = self.advance();
		match character {
			'(' => self.add_token(TokenType::LeftParen),
			')' => self.add_token(TokenType::RightParen),
			'{' => self.add_token(TokenType::LeftBrace),
			'}' => self.add_token(TokenType::RightBrace),
			',' => self.add_token(TokenType::Comma),
			'.' => self.add_token(TokenType::Dot),
			'-' => self.add_token(TokenType::Minus),
			'+' => self.add_token(TokenType::Plus),
			';' => self.add_token(TokenType::Semicolon),
			'*' => self.add_token(TokenType::Star),
			'?' => self.add_token(TokenType::Question),
			':' => self.add_token(TokenType::Colon),
			'!' => {
				let kind = if self.matches('=') { TokenType::BangEqual } else { TokenType::Bang };
				self.add_token(kind);
			},
			'=' => {
				let kind = if self.matches('=') { TokenType::EqualEqual } else { TokenType::Equal };
				self.add_token(kind);
			},
			'<' => {
				let kind = if self.matches('=') { TokenType::LessEqual } else { TokenType::Less };
				self.add_token(kind);
			},
			'>' => {
				let kind = if self.matches('=') { TokenType::GreaterEqual } else { TokenType::Greater };
				self.add_token(kind);
			},
			'/' => {
				if self.matches('/') {
					while self.peek() != '\n' && !self.is_at_end() {
						self.advance();
					}
				} else {
					self.add_token(TokenType::Slash);
				}
			},
			' ' | '\r' | '\t' => {},
			'\n' => self.newline(),
			'"' => self.string()?,
			digit if digit.is_ascii_digit() => self.number()?,
			letter if letter.is_ascii_alphabetic() || letter == '_' => self.identifier(),
			other => return Err(self.error(format!("unexpected character '{other}'"))),
		}
		Ok(())
	}
}

/// Scans `source` (labelled `filename` for diagnostics) into a sequence of tokens, terminated by
/// a single [`TokenType::Eof`].
///
/// # Errors
/// Returns the first [`LexError`] encountered; scanning does not attempt to recover and continue.
pub fn scan(filename: &str, source: &str) -> Result<Vec<Token>, LexError> {
	let mut scanner = Scanner::new(filename, source);
	while !scanner.is_at_end() {
		scanner.start = scanner.current;
		scanner.scan_token()?;
	}
	scanner.tokens.push(Token {
		token_type: TokenType::Eof,
		lexeme: String::new(),
		literal: Literal::None,
		line: scanner.line,
	});
	Ok(scanner.tokens)
}
