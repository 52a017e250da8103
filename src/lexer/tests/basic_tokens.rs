use super::kinds;
use crate::lexer::TokenType;

#[test]
fn empty_input_is_just_eof() {
	assert_eq!(kinds(""), vec![TokenType::Eof]);
}

#[test]
fn single_character_tokens() {
	assert_eq!(
		kinds("(){},.-+;*?:"),
		vec![
			TokenType::LeftParen,
			TokenType::RightParen,
			TokenType::LeftBrace,
			TokenType::RightBrace,
			TokenType::Comma,
			TokenType::Dot,
			TokenType::Minus,
			TokenType::Plus,
			TokenType::Semicolon,
			TokenType::Star,
			TokenType::Question,
			TokenType::Colon,
			TokenType::Eof,
		]
	);
}

#[test]
fn one_or_two_character_tokens() {
	assert_eq!(
		kinds("! != = == < <= > >="),
		vec![
			TokenType::Bang,
			TokenType::BangEqual,
			TokenType::Equal,
			TokenType::EqualEqual,
			TokenType::Less,
			TokenType::LessEqual,
			TokenType::Greater,
			TokenType::GreaterEqual,
			TokenType::Eof,
		]
	);
}

#[test]
fn line_comments_are_discarded() {
	assert_eq!(kinds("1 // this is a comment\n2"), vec![TokenType::Number, TokenType::Number, TokenType::Eof]);
}

#[test]
fn keywords_are_recognized_by_lexeme() {
	assert_eq!(
		kinds("and or if else while for break continue true false null var func return class this super print"),
		vec![
			TokenType::And,
			TokenType::Or,
			TokenType::If,
			TokenType::Else,
			TokenType::While,
			TokenType::For,
			TokenType::Break,
			TokenType::Continue,
			TokenType::True,
			TokenType::False,
			TokenType::Null,
			TokenType::Var,
			TokenType::Func,
			TokenType::Return,
			TokenType::Class,
			TokenType::This,
			TokenType::Super,
			TokenType::Print,
			TokenType::Eof,
		]
	);
}

#[test]
fn identifiers_that_are_not_keywords() {
	assert_eq!(kinds("foo bar_baz _qux"), vec![TokenType::Identifier, TokenType::Identifier, TokenType::Identifier, TokenType::Eof]);
}

#[test]
fn newlines_increment_line_but_do_not_produce_tokens() {
	let tokens = crate::lexer::scan("test", "1\n\n2").expect("scan should succeed");
	assert_eq!(tokens[0].line, 1);
	assert_eq!(tokens[1].line, 3);
}
