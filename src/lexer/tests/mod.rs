mod basic_tokens;
mod errors;

use super::{scan, TokenType};

fn kinds(source: &str) -> Vec<TokenType> {
	scan("test", source).expect("scan should succeed").into_iter().map(|token| token.token_type).collect()
}
