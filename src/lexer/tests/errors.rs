use crate::lexer::scan;

#[test]
fn unterminated_string_is_an_error() {
	let error = scan("test", "\"abc").unwrap_err();
	assert!(error.message.contains("unterminated string"));
}

#[test]
fn trailing_dot_with_no_fraction_is_an_error() {
	let error = scan("test", "1.").unwrap_err();
	assert!(error.message.contains("digit after"));
}

#[test]
fn unknown_character_is_an_error() {
	let error = scan("test", "@").unwrap_err();
	assert!(error.message.contains('@'));
}

#[test]
fn error_reports_the_line_it_occurred_on() {
	let error = scan("test", "1\n2\n@").unwrap_err();
	assert_eq!(error.line, 3);
}

#[test]
fn column_is_relative_to_the_current_line_not_the_whole_file() {
	let error = scan("test", "12345\n@").unwrap_err();
	assert_eq!(error.line, 2);
	assert_eq!(error.column, 1);
}

#[test]
fn column_counts_characters_since_the_last_newline() {
	let error = scan("test", "var xx = @;").unwrap_err();
	assert_eq!(error.line, 1);
	assert_eq!(error.column, 10);
}
