mod precedence;

use super::{parse, Stmt};
use crate::lexer::scan;

fn parse_source(source: &str) -> Vec<Stmt> {
	let tokens = scan("test", source).expect("scan should succeed");
	parse(tokens).expect("parse should succeed")
}
