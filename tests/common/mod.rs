//! Common helpers for CLI tests.

use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

/// Run the `deduce` binary with `args`.
pub fn deduce(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_deduce"))
        .args(args)
        .output()
        .expect("Failed to execute deduce")
}

/// Write `script` to a temporary file and run it, with extra `args`.
#[allow(dead_code)]
pub fn run_script(script: &str, args: &[&str]) -> Output {
    let mut file = NamedTempFile::with_suffix(".ded").expect("Failed to create temp file");
    file.write_all(script.as_bytes())
        .expect("Failed to write script");

    let path = file.path().to_str().expect("temp path is UTF-8").to_string();
    let mut all = vec!["run", path.as_str()];
    all.extend_from_slice(args);
    deduce(&all)
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[allow(dead_code)]
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}
