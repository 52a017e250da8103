//! Colored step announcements: a "Running" banner, a "<Step>... Done!" line per pipeline
//! stage, and a red error report on the first failure.

use std::io::Write as _;

use colored::Colorize as _;

pub(super) fn start(action: &str, target: &str) {
	println!("{} {}...", action.bold().green(), target.bold());
}

pub(super) fn finish() {
	println!("{}", "Done!".bold().green());
}

/// Announces `label`, runs `result`, and reports "Done!" or the error, propagating failure as
/// an [`anyhow::Error`] so every stage's distinct error type can flow through one call site.
pub(super) fn step<T, E: std::fmt::Display>(label: &str, result: Result<T, E>) -> anyhow::Result<T> {
	print!("  {}... ", label.bold().green());
	std::io::stdout().flush()?;
	match result {
		Ok(value) => {
			println!("{}", "Done!".bold().green());
			Ok(value)
		},
		Err(error) => {
			println!("{}", "Error!".bold().red());
			anyhow::bail!("{error}")
		},
	}
}
