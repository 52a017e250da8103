//! `block → "{" declaration* "}"`

use crate::lexer::TokenType;
use crate::parser::{Parse, ParseError, TokenStream};

use super::Stmt;

pub(super) fn parse(tokens: &mut TokenStream) -> Result<Vec<Stmt>, ParseError> {
	tokens.expect(TokenType::LeftBrace, "'{'")?;
	let mut statements = Vec::new();
	while !tokens.check(TokenType::RightBrace) && !tokens.is_at_end() {
		statements.push(Stmt::parse(tokens)?);
	}
	tokens.expect(TokenType::RightBrace, "'}' after block")?;
	Ok(statements)
}
