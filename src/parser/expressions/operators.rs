//! The binary-operator precedence cascade: `ternary`, `equality`, `comparison`, `term`, `factor`.
//!
//! Each tier shares one recursive routine, parameterized by a small static table naming the
//! token kinds it binds and the tier with the next-higher precedence. Adding a new binary
//! operator at an existing precedence is a one-line change to a table, not a new function.

use crate::lexer::TokenType;
use crate::parser::expressions::{unary, Expr};
use crate::parser::{ParseError, TokenStream};

/// A single precedence level in the binary-operator cascade.
pub(crate) struct BinaryTier {
	/// The operator tokens recognized at this precedence.
	token_types: &'static [TokenType],
	/// The tier with the next-higher precedence, or `None` if this is the tightest-binding
	/// binary tier (in which case its operand is a unary expression).
	precedent: Option<&'static BinaryTier>,
}

static FACTOR: BinaryTier = BinaryTier {
	token_types: &[TokenType::Star, TokenType::Slash],
	precedent: None,
};

static TERM: BinaryTier = BinaryTier {
	token_types: &[TokenType::Plus, TokenType::Minus],
	precedent: Some(&FACTOR),
};

static COMPARISON: BinaryTier = BinaryTier {
	token_types: &[TokenType::Greater, TokenType::GreaterEqual, TokenType::Less, TokenType::LessEqual],
	precedent: Some(&TERM),
};

static EQUALITY: BinaryTier = BinaryTier {
	token_types: &[TokenType::EqualEqual, TokenType::BangEqual, TokenType::And, TokenType::Or],
	precedent: Some(&COMPARISON),
};

impl BinaryTier {
	fn parse_operand(&self, tokens: &mut TokenStream) -> Result<Expr, ParseError> {
		self.precedent.map_or_else(|| unary::parse(tokens), |precedent| parse_tier(precedent, tokens))
	}
}

fn parse_tier(tier: &BinaryTier, tokens: &mut TokenStream) -> Result<Expr, ParseError> {
	let mut expr = tier.parse_operand(tokens)?;
	while tier.token_types.contains(&tokens.peek_type()) {
		let operator = tokens.advance();
		let right = tier.parse_operand(tokens)?;
		expr = Expr::Binary(Box::new(expr), operator, Box::new(right));
	}
	Ok(expr)
}

fn equality(tokens: &mut TokenStream) -> Result<Expr, ParseError> {
	parse_tier(&EQUALITY, tokens)
}

/// `ternary → equality ("?" equality ":" ternary)?`
///
/// The middle arm of the ternary deliberately parses only an `equality`, not a nested `ternary`,
/// so `a ? b ? c : d : e` cannot be written without parenthesizing the middle arm.
pub(crate) fn parse(tokens: &mut TokenStream) -> Result<Expr, ParseError> {
	let condition = equality(tokens)?;
	if tokens.matches(&[TokenType::Question]) {
		let if_true = equality(tokens)?;
		tokens.expect(TokenType::Colon, "':'")?;
		let if_false = parse(tokens)?;
		return Ok(Expr::Ternary(Box::new(condition), Box::new(if_true), Box::new(if_false)));
	}
	Ok(condition)
}
