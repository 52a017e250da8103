//! `primary → "true" | "false" | "null" | NUMBER | STRING | IDENT | "(" expression ")"`

use crate::evaluator::Value;
use crate::lexer::{Literal, TokenType};
use crate::parser::expressions::Expr;
use crate::parser::{ParseError, TokenStream};

pub(crate) fn parse(tokens: &mut TokenStream) -> Result<Expr, ParseError> {
	if tokens.matches(&[TokenType::False]) {
		return Ok(Expr::Literal(Value::Boolean(false)));
	}
	if tokens.matches(&[TokenType::True]) {
		return Ok(Expr::Literal(Value::Boolean(true)));
	}
	if tokens.matches(&[TokenType::Null]) {
		return Ok(Expr::Literal(Value::Null));
	}
	if tokens.check(TokenType::Number) {
		let token = tokens.advance();
		let Literal::Number(value) = token.literal else {
			unreachable!("a Number token always carries a Literal::Number payload");
		};
		return Ok(Expr::Literal(Value::Number(value)));
	}
	if tokens.check(TokenType::String) {
		let token = tokens.advance();
		let Literal::String(value) = token.literal else {
			unreachable!("a String token always carries a Literal::String payload");
		};
		return Ok(Expr::Literal(Value::String(value)));
	}
	if tokens.check(TokenType::Identifier) {
		return Ok(Expr::Variable(tokens.advance()));
	}
	if tokens.matches(&[TokenType::LeftParen]) {
		let inner = crate::parser::expressions::parse(tokens)?;
		tokens.expect(TokenType::RightParen, "')' after expression")?;
		return Ok(Expr::Grouping(Box::new(inner)));
	}
	Err(tokens.error("an expression"))
}
