//! Lexical environments, stored in a single arena owned by the [`super::Evaluator`] and
//! addressed by stable index rather than by pointer.
//!
//! A closure captures an [`EnvId`] instead of an `Rc<RefCell<_>>` chain: frames are appended to
//! the arena and never removed, so both the live call stack and any escaped function value can
//! refer to the same frame by the same index for as long as the evaluator lives. This sidesteps
//! the reference-counting-cycle question a GC'd or `Rc`-chained design would otherwise have to
//! answer for closures that capture a scope containing themselves.

use std::collections::HashMap;

use super::value::Value;

/// A stable index into the [`Environment`] arena.
pub type EnvId = usize;

/// A single lexical scope: a local binding map plus a link to its parent frame.
#[derive(Debug, Default)]
pub struct Environment {
	bindings: HashMap<String, Value>,
	parent: Option<EnvId>,
}

/// The arena of all environment frames created during one evaluation run.
#[derive(Debug, Default)]
pub struct Environments {
	frames: Vec<Environment>,
}

impl Environments {
	#[must_use]
	pub fn new() -> Self {
		Self { frames: vec![Environment::default()] }
	}

	/// The global frame, always present at index `0`.
	#[must_use]
	pub const fn global(&self) -> EnvId {
		0
	}

	/// Allocates a new frame whose parent is `parent`, returning its id.
	pub fn push(&mut self, parent: EnvId) -> EnvId {
		self.frames.push(Environment {
			bindings: HashMap::new(),
			parent: Some(parent),
		});
		self.frames.len() - 1
	}

	/// Declares `name` in `env` only. Fails if `name` is already bound in that exact frame.
	///
	/// # Errors
	/// Returns an error message if `name` is already declared in `env`.
	pub fn declare(&mut self, env: EnvId, name: &str, value: Value) -> Result<(), String> {
		let frame = &mut self.frames[env];
		if frame.bindings.contains_key(name) {
			return Err(format!("variable '{name}' is already declared in this scope"));
		}
		frame.bindings.insert(name.to_owned(), value);
		Ok(())
	}

	/// Looks `name` up starting at `env`, walking the parent chain.
	///
	/// # Errors
	/// Returns an error message if `name` is not bound in `env` or any of its ancestors.
	pub fn get(&self, env: EnvId, name: &str) -> Result<Value, String> {
		let mut current = Some(env);
		while let Some(id) = current {
			let frame = &self.frames[id];
			if let Some(value) = frame.bindings.get(name) {
				return Ok(value.clone());
			}
			current = frame.parent;
		}
		Err(format!("undeclared variable '{name}'"))
	}

	/// Updates the first binding for `name` found by walking `env`'s parent chain. Never
	/// creates a new binding.
	///
	/// # Errors
	/// Returns an error message if `name` is not bound in `env` or any of its ancestors.
	pub fn assign(&mut self, env: EnvId, name: &str, value: Value) -> Result<(), String> {
		let mut current = Some(env);
		while let Some(id) = current {
			let frame = &mut self.frames[id];
			if frame.bindings.contains_key(name) {
				frame.bindings.insert(name.to_owned(), value);
				return Ok(());
			}
			current = frame.parent;
		}
		Err(format!("undeclared variable '{name}'"))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn declare_then_get_returns_the_declared_value() {
		let mut envs = Environments::new();
		let global = envs.global();
		envs.declare(global, "x", Value::Number(1.0)).unwrap();
		assert!(envs.get(global, "x").unwrap().equals(&Value::Number(1.0)));
	}

	#[test]
	fn redeclaring_in_the_same_frame_fails() {
		let mut envs = Environments::new();
		let global = envs.global();
		envs.declare(global, "x", Value::Number(1.0)).unwrap();
		assert!(envs.declare(global, "x", Value::Number(2.0)).is_err());
	}

	#[test]
	fn get_finds_innermost_shadowing_binding() {
		let mut envs = Environments::new();
		let global = envs.global();
		envs.declare(global, "x", Value::Number(1.0)).unwrap();
		let child = envs.push(global);
		envs.declare(child, "x", Value::Number(2.0)).unwrap();
		assert!(envs.get(child, "x").unwrap().equals(&Value::Number(2.0)));
		assert!(envs.get(global, "x").unwrap().equals(&Value::Number(1.0)));
	}

	#[test]
	fn get_in_outer_frame_does_not_see_child_bindings() {
		let mut envs = Environments::new();
		let global = envs.global();
		let child = envs.push(global);
		envs.declare(child, "y", Value::Number(1.0)).unwrap();
		assert!(envs.get(global, "y").is_err());
	}

	#[test]
	fn assign_updates_innermost_binding_without_creating_one() {
		let mut envs = Environments::new();
		let global = envs.global();
		assert!(envs.assign(global, "z", Value::Number(1.0)).is_err());
		envs.declare(global, "z", Value::Number(1.0)).unwrap();
		let child = envs.push(global);
		envs.assign(child, "z", Value::Number(5.0)).unwrap();
		assert!(envs.get(global, "z").unwrap().equals(&Value::Number(5.0)));
	}
}
