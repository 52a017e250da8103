use std::fmt;

/// A failure encountered while walking the AST: a type mismatch, an undeclared variable, an
/// arity mismatch, an invalid callee, or a control-flow signal that escaped its legal context.
/// Always rendered with the `RUNTIME ERROR:` prefix the rest of the pipeline's diagnostics use.
#[derive(Debug, Clone)]
pub struct RuntimeError {
	pub message: String,
	pub line: usize,
}

impl RuntimeError {
	pub fn new(message: impl Into<String>, line: usize) -> Self {
		Self { message: message.into(), line }
	}
}

impl fmt::Display for RuntimeError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "RUNTIME ERROR: {} at line {}", self.message, self.line)
	}
}

impl std::error::Error for RuntimeError {}
