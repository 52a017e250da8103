//! The AST-walking evaluator: lexically scoped environments, first-class functions and
//! closures, and non-local control flow that unwinds through arbitrary nesting without being
//! modeled as an ordinary error.

mod environment;
mod error;
mod natives;
mod signal;
mod value;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use crate::lexer::{Token, TokenType};
use crate::parser::{Expr, Stmt};

pub use environment::EnvId;
pub use error::RuntimeError;
pub use signal::Signal;
pub use value::{Function, NativeFunction, Value};

use environment::Environments;

/// Walks a parsed program over a fresh global environment preloaded with native callables.
pub struct Evaluator {
	environments: Environments,
	current: EnvId,
}

impl Default for Evaluator {
	fn default() -> Self {
		Self::new()
	}
}

impl Evaluator {
	/// Constructs an evaluator with a fresh global environment, pre-populated with the native
	/// callable table (`read`, `time`).
	#[must_use]
	pub fn new() -> Self {
		let mut environments = Environments::new();
		let global = environments.global();
		for native in natives::table() {
			let name = native.name.to_owned();
			environments
				.declare(global, &name, Value::Native(Rc::new(native)))
				.expect("native function names never collide with each other");
		}
		Self { environments, current: global }
	}

	/// Executes `program`'s statements in order, returning the last non-null value produced by
	/// any top-level statement (or `null` if none was).
	///
	/// # Errors
	/// Returns the first [`RuntimeError`] encountered. A top-level `return`, `break`, or
	/// `continue` is itself reported as a `RuntimeError`: they are illegal outside a function
	/// body / loop respectively.
	pub fn interpret(&mut self, program: &[Stmt]) -> Result<Value, RuntimeError> {
		let mut last = Value::Null;
		for statement in program {
			if let Stmt::Expression(expr) = statement {
				let value = self.evaluate(expr)?;
				if !matches!(value, Value::Null) {
					last = value;
				}
				continue;
			}
			match self.execute(statement)? {
				Signal::Normal => {},
				Signal::Return(_) => return Err(RuntimeError::new("'return' outside of a function", statement_line(statement))),
				Signal::Break => return Err(RuntimeError::new("'break' outside of a loop", statement_line(statement))),
				Signal::Continue => return Err(RuntimeError::new("'continue' outside of a loop", statement_line(statement))),
			}
		}
		Ok(last)
	}

	fn execute(&mut self, statement: &Stmt) -> Result<Signal, RuntimeError> {
		match statement {
			Stmt::Expression(expr) => {
				self.evaluate(expr)?;
				Ok(Signal::Normal)
			},
			Stmt::Print(exprs) => self.execute_print(exprs),
			Stmt::VarDecl(name, initializer) => self.execute_var_decl(name, initializer.as_ref()),
			Stmt::FuncDecl(name, params, body) => self.execute_func_decl(name, params, body),
			Stmt::Return(_, expr) => {
				let value = expr.as_ref().map_or(Ok(Value::Null), |expr| self.evaluate(expr))?;
				Ok(Signal::Return(value))
			},
			Stmt::Break(_) => Ok(Signal::Break),
			Stmt::Continue(_) => Ok(Signal::Continue),
			Stmt::Block(statements) => self.execute_block(statements, self.current),
			Stmt::Conditional(branches) => self.execute_conditional(branches),
			Stmt::While(condition, body) => self.execute_while(condition, body),
			Stmt::For(init, condition, step, body) => self.execute_for(init.as_deref(), condition.as_ref(), step.as_ref(), body),
		}
	}

	fn execute_print(&mut self, exprs: &[Expr]) -> Result<Signal, RuntimeError> {
		let mut rendered = Vec::with_capacity(exprs.len());
		for expr in exprs {
			rendered.push(self.evaluate(expr)?.to_string());
		}
		println!("{}", rendered.join(" "));
		Ok(Signal::Normal)
	}

	fn execute_var_decl(&mut self, name: &Token, initializer: Option<&Expr>) -> Result<Signal, RuntimeError> {
		let value = initializer.map_or(Ok(Value::Null), |expr| self.evaluate(expr))?;
		self.environments.declare(self.current, &name.lexeme, value).map_err(|message| RuntimeError::new(message, name.line))?;
		Ok(Signal::Normal)
	}

	fn execute_func_decl(&mut self, name: &Token, params: &[Token], body: &Rc<Vec<Stmt>>) -> Result<Signal, RuntimeError> {
		let function = Function {
			name: name.lexeme.clone(),
			params: params.to_vec(),
			body: Rc::clone(body),
			closure: self.current,
		};
		self.environments
			.declare(self.current, &name.lexeme, Value::Function(Rc::new(function)))
			.map_err(|message| RuntimeError::new(message, name.line))?;
		Ok(Signal::Normal)
	}

	/// Runs `statements` in a fresh environment whose parent is `parent_env`, restoring the
	/// evaluator's current environment to `parent_env` on every exit path (normal completion,
	/// an unwind signal, or an error).
	fn execute_block(&mut self, statements: &[Stmt], parent_env: EnvId) -> Result<Signal, RuntimeError> {
		let block_env = self.environments.push(parent_env);
		let outer = self.current;
		self.current = block_env;
		let result = self.run_statements(statements);
		self.current = outer;
		result
	}

	fn run_statements(&mut self, statements: &[Stmt]) -> Result<Signal, RuntimeError> {
		for statement in statements {
			match self.execute(statement)? {
				Signal::Normal => {},
				signal => return Ok(signal),
			}
		}
		Ok(Signal::Normal)
	}

	fn execute_conditional(&mut self, branches: &[(Option<Expr>, Box<Stmt>)]) -> Result<Signal, RuntimeError> {
		for (condition, body) in branches {
			let taken = match condition {
				Some(condition) => self.evaluate(condition)?.is_truthy(),
				None => true,
			};
			if taken {
				return self.execute(body);
			}
		}
		Ok(Signal::Normal)
	}

	fn execute_while(&mut self, condition: &Expr, body: &Stmt) -> Result<Signal, RuntimeError> {
		while self.evaluate(condition)?.is_truthy() {
			match self.execute(body)? {
				Signal::Normal | Signal::Continue => {},
				Signal::Break => break,
				signal @ Signal::Return(_) => return Ok(signal),
			}
		}
		Ok(Signal::Normal)
	}

	fn execute_for(&mut self, init: Option<&Stmt>, condition: Option<&Expr>, step: Option<&Expr>, body: &Stmt) -> Result<Signal, RuntimeError> {
		let loop_env = self.environments.push(self.current);
		let outer = self.current;
		self.current = loop_env;
		let result = self.run_for_loop(init, condition, step, body);
		self.current = outer;
		result
	}

	/// The body of [`Self::execute_for`], pulled out so the loop-scope push/pop in the caller
	/// stays a single `?`-free statement pair that runs on every exit path.
	fn run_for_loop(&mut self, init: Option<&Stmt>, condition: Option<&Expr>, step: Option<&Expr>, body: &Stmt) -> Result<Signal, RuntimeError> {
		if let Some(init) = init {
			match self.execute(init)? {
				Signal::Normal => {},
				signal => return Ok(signal),
			}
		}
		loop {
			let continues = match condition {
				Some(condition) => self.evaluate(condition)?.is_truthy(),
				None => true,
			};
			if !continues {
				break;
			}
			match self.execute(body)? {
				Signal::Normal | Signal::Continue => {},
				Signal::Break => break,
				signal @ Signal::Return(_) => return Ok(signal),
			}
			if let Some(step) = step {
				self.evaluate(step)?;
			}
		}
		Ok(Signal::Normal)
	}

	fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
		match expr {
			Expr::Literal(value) => Ok(value.clone()),
			Expr::Variable(name) => self.environments.get(self.current, &name.lexeme).map_err(|message| RuntimeError::new(message, name.line)),
			Expr::Grouping(inner) => self.evaluate(inner),
			Expr::Assign(name, value) => self.evaluate_assign(name, value),
			Expr::Unary(operator, operand) => self.evaluate_unary(operator, operand),
			Expr::Binary(left, operator, right) => self.evaluate_binary(left, operator, right),
			Expr::Ternary(condition, if_true, if_false) => {
				if self.evaluate(condition)?.is_truthy() {
					self.evaluate(if_true)
				} else {
					self.evaluate(if_false)
				}
			},
			Expr::Call(callee, args, line) => self.evaluate_call(callee, args, *line),
		}
	}

	fn evaluate_assign(&mut self, name: &Token, value: &Expr) -> Result<Value, RuntimeError> {
		let value = self.evaluate(value)?;
		self.environments
			.assign(self.current, &name.lexeme, value.clone())
			.map_err(|message| RuntimeError::new(message, name.line))?;
		Ok(value)
	}

	fn evaluate_unary(&mut self, operator: &Token, operand: &Expr) -> Result<Value, RuntimeError> {
		let value = self.evaluate(operand)?;
		match operator.token_type {
			TokenType::Bang => Ok(Value::Boolean(!value.is_truthy())),
			TokenType::Minus => match value {
				Value::Number(number) => Ok(Value::Number(-number)),
				other => Err(RuntimeError::new(format!("unary '-' requires a number, found {}", other.type_name()), operator.line)),
			},
			other => unreachable!("the parser never produces Unary with operator {other:?}"),
		}
	}

	#[allow(clippy::too_many_lines)]
	fn evaluate_binary(&mut self, left: &Expr, operator: &Token, right: &Expr) -> Result<Value, RuntimeError> {
		let left = self.evaluate(left)?;
		let right = self.evaluate(right)?;
		let line = operator.line;
		match operator.token_type {
			TokenType::Plus => match (left, right) {
				(Value::Number(left), Value::Number(right)) => Ok(Value::Number(left + right)),
				(Value::String(left), Value::String(right)) => Ok(Value::String(left + &right)),
				(left, right) => Err(RuntimeError::new(format!("'+' requires two numbers or two strings, found {} and {}", left.type_name(), right.type_name()), line)),
			},
			TokenType::Minus => numeric_binary(&left, &right, line, |a, b| a - b),
			TokenType::Star => numeric_binary(&left, &right, line, |a, b| a * b),
			TokenType::Slash => numeric_binary(&left, &right, line, |a, b| a / b),
			TokenType::Greater => comparison(&left, &right, line, |a, b| a > b),
			TokenType::GreaterEqual => comparison(&left, &right, line, |a, b| a >= b),
			TokenType::Less => comparison(&left, &right, line, |a, b| a < b),
			TokenType::LessEqual => comparison(&left, &right, line, |a, b| a <= b),
			TokenType::EqualEqual => Ok(Value::Boolean(left.equals(&right))),
			TokenType::BangEqual => Ok(Value::Boolean(!left.equals(&right))),
			TokenType::And => Ok(Value::Boolean(left.is_truthy() && right.is_truthy())),
			TokenType::Or => Ok(Value::Boolean(left.is_truthy() || right.is_truthy())),
			other => unreachable!("the parser never produces Binary with operator {other:?}"),
		}
	}

	fn evaluate_call(&mut self, callee: &Expr, args: &[Expr], line: usize) -> Result<Value, RuntimeError> {
		let callee = self.evaluate(callee)?;
		let expected = callee.arity().ok_or_else(|| RuntimeError::new(format!("cannot call a value of type {}", callee.type_name()), line))?;
		if expected != args.len() {
			return Err(RuntimeError::new(format!("expected {expected} argument(s) but found {}", args.len()), line));
		}

		let mut arguments = Vec::with_capacity(args.len());
		for arg in args {
			arguments.push(self.evaluate(arg)?);
		}

		match callee {
			Value::Function(function) => self.call_function(&function, arguments, line),
			Value::Native(native) => (native.call)(&arguments).map_err(|message| RuntimeError::new(message, line)),
			_ => unreachable!("arity check above already rejects non-callables"),
		}
	}

	/// Function invocation protocol: a fresh frame parented to the function's captured closure,
	/// parameters bound there, the body run to completion or a `Return` signal, and the
	/// evaluator's current environment restored to the caller's on every exit path.
	fn call_function(&mut self, function: &Function, arguments: Vec<Value>, call_line: usize) -> Result<Value, RuntimeError> {
		let call_env = self.environments.push(function.closure);
		for (param, argument) in function.params.iter().zip(arguments) {
			self.environments
				.declare(call_env, &param.lexeme, argument)
				.expect("a function's own parameter names cannot repeat past the parser's arity check");
		}

		let outer = self.current;
		self.current = call_env;
		let result = self.run_statements(&function.body);
		self.current = outer;

		match result? {
			Signal::Normal => Ok(Value::Null),
			Signal::Return(value) => Ok(value),
			Signal::Break => Err(RuntimeError::new("'break' outside of a loop", call_line)),
			Signal::Continue => Err(RuntimeError::new("'continue' outside of a loop", call_line)),
		}
	}
}

fn numeric_binary(left: &Value, right: &Value, line: usize, op: impl Fn(f64, f64) -> f64) -> Result<Value, RuntimeError> {
	match (left, right) {
		(Value::Number(left), Value::Number(right)) => Ok(Value::Number(op(*left, *right))),
		(left, right) => Err(RuntimeError::new(format!("expected two numbers, found {} and {}", left.type_name(), right.type_name()), line)),
	}
}

fn comparison(left: &Value, right: &Value, line: usize, op: impl Fn(f64, f64) -> bool) -> Result<Value, RuntimeError> {
	match (left, right) {
		(Value::Number(left), Value::Number(right)) => Ok(Value::Boolean(op(*left, *right))),
		(left, right) => Err(RuntimeError::new(format!("expected two numbers, found {} and {}", left.type_name(), right.type_name()), line)),
	}
}

/// A best-effort line number for a top-level control-flow signal that escaped its legal
/// context, used only to annotate the resulting [`RuntimeError`].
fn statement_line(statement: &Stmt) -> usize {
	match statement {
		Stmt::Return(line, _) | Stmt::Break(line) | Stmt::Continue(line) => *line,
		_ => 0,
	}
}
