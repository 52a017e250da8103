//! Exercises the CLI binary's file-mode exit codes and `-p` flag, as distinct from the
//! end-to-end scenario stdout assertions in `end_to_end.rs`.

use std::io::Write as _;
use std::process::Command;

use tempfile::NamedTempFile;

fn script_path(source: &str) -> NamedTempFile {
	let mut file = NamedTempFile::new().expect("should create a temp file");
	write!(file, "{source}").expect("should write the script");
	file
}

#[test]
fn successful_run_exits_zero() {
	let file = script_path("print 1;");
	let status = Command::new(env!("CARGO_BIN_EXE_aml")).arg(file.path()).status().expect("should run the aml binary");
	assert!(status.success());
}

#[test]
fn a_runtime_error_exits_non_zero_and_reports_on_stderr() {
	let file = script_path("print 1 + \"a\";");
	let output = Command::new(env!("CARGO_BIN_EXE_aml")).arg(file.path()).output().expect("should run the aml binary");
	assert!(!output.status.success());
	assert!(String::from_utf8_lossy(&output.stderr).contains("RUNTIME ERROR"));
}

#[test]
fn a_parse_error_exits_non_zero() {
	let file = script_path("var x = ;");
	let status = Command::new(env!("CARGO_BIN_EXE_aml")).arg(file.path()).status().expect("should run the aml binary");
	assert!(!status.success());
}

#[test]
fn a_missing_file_exits_non_zero() {
	let status = Command::new(env!("CARGO_BIN_EXE_aml")).arg("/nonexistent/path/to/a/script.aml").status().expect("should run the aml binary");
	assert!(!status.success());
}

#[test]
fn print_ast_flag_dumps_debug_output_instead_of_evaluating() {
	let file = script_path("var x = 1;");
	let output = Command::new(env!("CARGO_BIN_EXE_aml")).arg("-p").arg(file.path()).output().expect("should run the aml binary");
	assert!(output.status.success());
	let stdout = String::from_utf8_lossy(&output.stdout);
	assert!(stdout.contains("VarDecl"));
}
