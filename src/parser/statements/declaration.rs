//! `varDecl → "var" IDENT ("=" expression)? ";"`
//! `funcDecl → "func" IDENT "(" params? ")" block`
//! `params → IDENT ("," IDENT)*`

use std::rc::Rc;

use crate::lexer::TokenType;
use crate::parser::{ParseError, TokenStream};

use super::{block, Stmt};

pub(super) fn parse_var(tokens: &mut TokenStream) -> Result<Stmt, ParseError> {
	tokens.expect(TokenType::Var, "'var'")?;
	let name = tokens.expect(TokenType::Identifier, "a variable name")?;
	let initializer = if tokens.matches(&[TokenType::Equal]) { Some(crate::parser::expressions::parse(tokens)?) } else { None };
	tokens.expect(TokenType::Semicolon, "';' after variable declaration")?;
	Ok(Stmt::VarDecl(name, initializer))
}

pub(super) fn parse_func(tokens: &mut TokenStream) -> Result<Stmt, ParseError> {
	tokens.expect(TokenType::Func, "'func'")?;
	let name = tokens.expect(TokenType::Identifier, "a function name")?;
	tokens.expect(TokenType::LeftParen, "'(' after function name")?;
	let mut params = Vec::new();
	if !tokens.check(TokenType::RightParen) {
		loop {
			params.push(tokens.expect(TokenType::Identifier, "a parameter name")?);
			if !tokens.matches(&[TokenType::Comma]) {
				break;
			}
		}
	}
	tokens.expect(TokenType::RightParen, "')' after parameters")?;
	let body = block::parse(tokens)?;
	Ok(Stmt::FuncDecl(name, params, Rc::new(body)))
}
