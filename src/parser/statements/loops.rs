//! `whileStmt → "while" "(" expression ")" statement`
//! `forStmt → "for" "(" (declaration | ";") (expression? ";") expression? ")" statement`

use crate::lexer::TokenType;
use crate::parser::{Parse, ParseError, TokenStream};

use super::{parse_statement, Stmt};

pub(super) fn parse_while(tokens: &mut TokenStream) -> Result<Stmt, ParseError> {
	tokens.expect(TokenType::While, "'while'")?;
	tokens.expect(TokenType::LeftParen, "'(' after 'while'")?;
	let condition = crate::parser::expressions::parse(tokens)?;
	tokens.expect(TokenType::RightParen, "')' after condition")?;
	let body = parse_statement(tokens)?;
	Ok(Stmt::While(condition, Box::new(body)))
}

/// Unlike `while`, `for`'s three clauses are parsed directly as an AST node rather than
/// desugared into a `while` here: the evaluator is responsible for running `init` once in a
/// scope that encloses the rest of the loop.
pub(super) fn parse_for(tokens: &mut TokenStream) -> Result<Stmt, ParseError> {
	tokens.expect(TokenType::For, "'for'")?;
	tokens.expect(TokenType::LeftParen, "'(' after 'for'")?;

	let init = if tokens.matches(&[TokenType::Semicolon]) { None } else { Some(Box::new(Stmt::parse(tokens)?)) };

	let condition = if tokens.check(TokenType::Semicolon) { None } else { Some(crate::parser::expressions::parse(tokens)?) };
	tokens.expect(TokenType::Semicolon, "';' after loop condition")?;

	let step = if tokens.check(TokenType::RightParen) { None } else { Some(crate::parser::expressions::parse(tokens)?) };
	tokens.expect(TokenType::RightParen, "')' after for clauses")?;

	let body = parse_statement(tokens)?;
	Ok(Stmt::For(init, condition, step, Box::new(body)))
}
