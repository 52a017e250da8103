use super::parse_source;
use crate::evaluator::Value;
use crate::lexer::TokenType;
use crate::parser::{Expr, Stmt};

fn single_expr(source: &str) -> Expr {
	let program = parse_source(source);
	match program.as_slice() {
		[Stmt::Expression(expr)] => expr.clone(),
		other => panic!("expected a single expression statement, got {other:?}"),
	}
}

#[test]
fn multiplication_binds_tighter_than_addition() {
	let expr = single_expr("1 + 2 * 3;");
	let Expr::Binary(left, operator, right) = expr else { panic!("expected a top-level Binary") };
	assert!(matches!(*left, Expr::Literal(Value::Number(n)) if n == 1.0));
	assert_eq!(operator.token_type, TokenType::Plus);
	assert!(matches!(*right, Expr::Binary(_, _, _)));
}

#[test]
fn assignment_is_right_associative() {
	let expr = single_expr("a = b = 1;");
	let Expr::Assign(name, value) = expr else { panic!("expected a top-level Assign") };
	assert_eq!(name.lexeme, "a");
	assert!(matches!(*value, Expr::Assign(_, _)));
}

#[test]
fn assigning_to_a_non_identifier_is_a_parse_error() {
	let tokens = crate::lexer::scan("test", "1 = 2;").unwrap();
	let error = crate::parser::parse(tokens).unwrap_err();
	assert!(error.to_string().contains("identifier"));
}

#[test]
fn ternary_middle_arm_forbids_a_nested_ternary() {
	let tokens = crate::lexer::scan("test", "a ? b ? c : d : e;").unwrap();
	assert!(crate::parser::parse(tokens).is_err());
}

#[test]
fn ternary_is_right_associative() {
	let expr = single_expr("a ? b : c ? d : e;");
	let Expr::Ternary(_, _, else_arm) = expr else { panic!("expected a top-level Ternary") };
	assert!(matches!(*else_arm, Expr::Ternary(_, _, _)));
}

#[test]
fn chained_calls_parse_left_to_right() {
	let expr = single_expr("f()();");
	let Expr::Call(callee, args, _) = expr else { panic!("expected a top-level Call") };
	assert!(args.is_empty());
	assert!(matches!(*callee, Expr::Call(_, _, _)));
}

#[test]
fn grouping_is_transparent_to_the_ast_shape() {
	let expr = single_expr("(1 + 2) * 3;");
	let Expr::Binary(left, operator, _) = expr else { panic!("expected a top-level Binary") };
	assert_eq!(operator.token_type, TokenType::Star);
	assert!(matches!(*left, Expr::Grouping(_)));
}
