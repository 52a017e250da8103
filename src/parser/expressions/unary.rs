//! `unary → ("!" | "-") unary | call`

use crate::lexer::TokenType;
use crate::parser::expressions::{call, Expr};
use crate::parser::{ParseError, TokenStream};

pub(crate) fn parse(tokens: &mut TokenStream) -> Result<Expr, ParseError> {
	if matches!(tokens.peek_type(), TokenType::Bang | TokenType::Minus) {
		let operator = tokens.advance();
		let operand = parse(tokens)?;
		return Ok(Expr::Unary(operator, Box::new(operand)));
	}
	call::parse(tokens)
}
