//! `assignment → IDENT "=" assignment | ternary`
//!
//! Assignment is parsed by first parsing the lower-precedence `ternary` production and then
//! checking whether an `=` follows; this lets the left-hand side be validated as a bare
//! identifier after the fact, rather than special-casing identifiers during the descent.

use crate::lexer::TokenType;
use crate::parser::expressions::{operators, Expr};
use crate::parser::{ParseError, TokenStream};

pub(crate) fn parse(tokens: &mut TokenStream) -> Result<Expr, ParseError> {
	let target = operators::parse(tokens)?;

	if tokens.matches(&[TokenType::Equal]) {
		let equals_line = tokens.line();
		let value = parse(tokens)?;
		return match target {
			Expr::Variable(name) => Ok(Expr::Assign(name, Box::new(value))),
			_ => Err(ParseError {
				expected: "assignment target to be an identifier".to_owned(),
				found: "a non-identifier expression".to_owned(),
				line: equals_line,
			}),
		};
	}

	Ok(target)
}
