//! `call → primary ("(" arguments? ")")*`

use crate::lexer::TokenType;
use crate::parser::expressions::{primary, Expr};
use crate::parser::{ParseError, TokenStream};

pub(crate) fn parse(tokens: &mut TokenStream) -> Result<Expr, ParseError> {
	let mut expr = primary::parse(tokens)?;
	while tokens.check(TokenType::LeftParen) {
		expr = finish_call(tokens, expr)?;
	}
	Ok(expr)
}

fn finish_call(tokens: &mut TokenStream, callee: Expr) -> Result<Expr, ParseError> {
	let line = tokens.line();
	tokens.expect(TokenType::LeftParen, "'('")?;
	let mut arguments = Vec::new();
	if !tokens.check(TokenType::RightParen) {
		loop {
			arguments.push(crate::parser::expressions::parse(tokens)?);
			if !tokens.matches(&[TokenType::Comma]) {
				break;
			}
		}
	}
	tokens.expect(TokenType::RightParen, "')'")?;
	Ok(Expr::Call(Box::new(callee), arguments, line))
}
