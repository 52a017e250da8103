
use super::{Evaluator, RuntimeError, Value};
use crate::lexer::scan;
use crate::parser::parse;

/// Scans, parses, and evaluates `source`, returning the evaluator's tracked "last value" or the
/// first error encountered at any stage.
fn run(source: &str) -> Result<Value, String> {
	let tokens = scan("test", source).map_err(|error| error.to_string())?;
	let program = parse(tokens).map_err(|error| error.to_string())?;
	Evaluator::new().interpret(&program).map_err(|error| error.to_string())
}

fn run_err(source: &str) -> RuntimeError {
	let tokens = scan("test", source).expect("scan should succeed");
	let program = parse(tokens).expect("parse should succeed");
	Evaluator::new().interpret(&program).expect_err("interpret should fail")
}

fn number(source: &str) -> f64 {
	match run(source).expect("interpret should succeed") {
		Value::Number(value) => value,
		other => panic!("expected a number, found {other:?}"),
	}
}

fn string(source: &str) -> String {
	match run(source).expect("interpret should succeed") {
		Value::String(value) => value,
		other => panic!("expected a string, found {other:?}"),
	}
}

fn boolean(source: &str) -> bool {
	match run(source).expect("interpret should succeed") {
		Value::Boolean(value) => value,
		other => panic!("expected a boolean, found {other:?}"),
	}
}
