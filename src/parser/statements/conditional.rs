//! `ifStmt → "if" "(" expression ")" statement ("else" (ifStmt | statement))?`
//!
//! An `if`/`else if`/.../`else` chain parses as a single flat [`Stmt::Conditional`]: each
//! `else if` recursively parses as its own (one- or two-branch) conditional, whose branches are
//! spliced into the parent's branch list rather than nested as a `Conditional` inside an
//! `Conditional`'s else-tail.

use crate::lexer::TokenType;
use crate::parser::{ParseError, TokenStream};

use super::{parse_statement, Stmt};

pub(super) fn parse(tokens: &mut TokenStream) -> Result<Stmt, ParseError> {
	tokens.expect(TokenType::If, "'if'")?;
	tokens.expect(TokenType::LeftParen, "'(' after 'if'")?;
	let condition = crate::parser::expressions::parse(tokens)?;
	tokens.expect(TokenType::RightParen, "')' after condition")?;
	let then_branch = parse_statement(tokens)?;

	let mut branches = vec![(Some(condition), Box::new(then_branch))];

	if tokens.matches(&[TokenType::Else]) {
		if tokens.check(TokenType::If) {
			let Stmt::Conditional(rest) = parse(tokens)? else {
				unreachable!("parsing an 'if' always yields Stmt::Conditional");
			};
			branches.extend(rest);
		} else {
			branches.push((None, Box::new(parse_statement(tokens)?)));
		}
	}

	Ok(Stmt::Conditional(branches))
}
