//! `returnStmt → "return" expression? ";"`, `"break" ";"`, `"continue" ";"`

use crate::lexer::TokenType;
use crate::parser::{ParseError, TokenStream};

use super::Stmt;

pub(super) fn parse_return(tokens: &mut TokenStream) -> Result<Stmt, ParseError> {
	let line = tokens.line();
	tokens.expect(TokenType::Return, "'return'")?;
	let value = if tokens.check(TokenType::Semicolon) { None } else { Some(crate::parser::expressions::parse(tokens)?) };
	tokens.expect(TokenType::Semicolon, "';' after return value")?;
	Ok(Stmt::Return(line, value))
}

pub(super) fn parse_break(tokens: &mut TokenStream) -> Result<Stmt, ParseError> {
	let line = tokens.line();
	tokens.expect(TokenType::Break, "'break'")?;
	tokens.expect(TokenType::Semicolon, "';' after 'break'")?;
	Ok(Stmt::Break(line))
}

pub(super) fn parse_continue(tokens: &mut TokenStream) -> Result<Stmt, ParseError> {
	let line = tokens.line();
	tokens.expect(TokenType::Continue, "'continue'")?;
	tokens.expect(TokenType::Semicolon, "';' after 'continue'")?;
	Ok(Stmt::Continue(line))
}
