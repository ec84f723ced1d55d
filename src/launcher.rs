//! Interactive launcher for the batch converter.
//!
//! Collects an input path and an output path from the operator, hands both
//! to the converter binary in the current working directory, and reports
//! the converter's exit status as its own.

use std::io::{BufRead, Write};
use std::process::{Command, ExitStatus};

use anyhow::{Context, Result};
use console::style;

/// Converter binary the launcher hands off to, resolved relative to the
/// current working directory.
pub const DOWNSTREAM_PROGRAM: &str = "./webpbatch";

pub const INPUT_PROMPT: &str = "Enter Input Path: ";
pub const OUTPUT_PROMPT: &str = "Enter Output Path: ";

/// Prompt for both paths on stdin, invoke the converter, and return its
/// exit code.
pub fn run() -> Result<i32> {
    let stdin = std::io::stdin();
    let mut reader = stdin.lock();

    let input_path = prompt_line(&mut reader, INPUT_PROMPT)?;
    let output_path = prompt_line(&mut reader, OUTPUT_PROMPT)?;

    invoke(DOWNSTREAM_PROGRAM, &input_path, &output_path)
}

/// Invoke `program` with `--input`/`--output` and wait for it to finish.
///
/// Both paths are forwarded as discrete arguments, exactly as collected;
/// quoting and validation are the downstream program's business.
pub fn invoke(program: &str, input_path: &str, output_path: &str) -> Result<i32> {
    let status = Command::new(program)
        .arg("--input")
        .arg(input_path)
        .arg("--output")
        .arg(output_path)
        .status()
        .with_context(|| format!("failed to launch {}", program))?;

    Ok(exit_code(status))
}

/// Display `prompt` and read one line, keeping the text verbatim apart from
/// the trailing newline. EOF yields the empty string.
fn prompt_line(reader: &mut impl BufRead, prompt: &str) -> Result<String> {
    let mut stdout = std::io::stdout();
    write!(stdout, "{}", style(prompt).cyan())?;
    stdout.flush()?;

    let mut line = String::new();
    reader
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}

/// Map an exit status to a code, using the shell convention of
/// `128 + signal` for signal-terminated processes.
fn exit_code(status: ExitStatus) -> i32 {
    match status.code() {
        Some(code) => code,
        None => signal_code(status),
    }
}

#[cfg(unix)]
fn signal_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    match status.signal() {
        Some(signal) => 128 + signal,
        None => -1,
    }
}

#[cfg(not(unix))]
fn signal_code(_status: ExitStatus) -> i32 {
    -1
}
