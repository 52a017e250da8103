//! Runs the six source-to-stdout scenarios through the actual CLI binary, exercising the full
//! pipeline (scan, parse, evaluate, `print` writing to real stdout) the way a user would.

use std::io::Write as _;
use std::process::Command;

use tempfile::NamedTempFile;

/// Writes `source` to a throwaway `.aml` script and runs it through the built `aml` binary,
/// returning its captured stdout.
fn run_script(source: &str) -> String {
	let mut file = NamedTempFile::new().expect("should create a temp file");
	write!(file, "{source}").expect("should write the script");

	let output = Command::new(env!("CARGO_BIN_EXE_aml"))
		.arg(file.path())
		.output()
		.expect("should run the aml binary");

	assert!(output.status.success(), "script should run successfully, stderr: {}", String::from_utf8_lossy(&output.stderr));
	String::from_utf8(output.stdout).expect("stdout should be valid utf-8")
}

#[test]
fn arithmetic_precedence() {
	assert_eq!(run_script("print 1 + 2 * 3;"), "7\n");
}

#[test]
fn print_accepts_multiple_comma_separated_expressions() {
	assert_eq!(run_script("var a = 1; var b = 2; print a, b, a + b;"), "1 2 3\n");
}

#[test]
fn recursive_factorial() {
	let source = "func fact(n) { if (n <= 1) return 1; return n * fact(n-1); } print fact(5);";
	assert_eq!(run_script(source), "120\n");
}

#[test]
fn a_closure_keeps_counting_across_calls() {
	let source = "
		func make() { var x = 0; func inc() { x = x + 1; return x; } return inc; }
		var c = make();
		print c(), c(), c();
	";
	assert_eq!(run_script(source), "1 2 3\n");
}

#[test]
fn for_loop_with_continue() {
	let source = "for (var i = 0; i < 3; i = i + 1) { if (i == 1) continue; print i; }";
	assert_eq!(run_script(source), "0\n2\n");
}

#[test]
fn string_concatenation() {
	assert_eq!(run_script("var s = \"ab\" + \"cd\"; print s;"), "abcd\n");
}
