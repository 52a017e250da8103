//! The shipped native callables (`read`, `time`), registered into the global environment at
//! [`super::Evaluator`] construction. Neither needs captured state, so each is a plain `fn`
//! pointer rather than a boxed closure, see [`super::value::NativeFunction`].

use std::io::BufRead as _;
use std::time::{SystemTime, UNIX_EPOCH};

use super::value::{NativeFunction, Value};

fn read(_args: &[Value]) -> Result<Value, String> {
	let mut line = String::new();
	std::io::stdin().lock().read_line(&mut line).map_err(|error| format!("failed to read a line from stdin: {error}"))?;
	while line.ends_with('\n') || line.ends_with('\r') {
		line.pop();
	}
	Ok(Value::String(line))
}

fn time(_args: &[Value]) -> Result<Value, String> {
	let millis = SystemTime::now()
		.duration_since(UNIX_EPOCH)
		.map_err(|error| format!("system clock is before the epoch: {error}"))?
		.as_millis();
	#[allow(clippy::cast_precision_loss)]
	Ok(Value::Number(millis as f64))
}

/// The `(name, callable)` table injected into the global environment at construction time.
pub(super) fn table() -> Vec<NativeFunction> {
	vec![
		NativeFunction { name: "read", arity: 0, call: read },
		NativeFunction { name: "time", arity: 0, call: time },
	]
}
