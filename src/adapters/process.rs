use std::ffi::OsStr;
use std::io::Write;
use std::path::Path;
use std::process::{Command, Stdio};

use tracing::warn;

/// Run an external program and return what it wrote to stdout.
///
/// A non-zero exit with output still returns the output (logged as a
/// warning): svn can print a complete log and then exit with an error.
/// Only a spawn/I/O failure, or a failed run with nothing on stdout, is an
/// error.
///
/// When `stdin_data` is given it is written from a separate thread so a
/// child that fills its stdout pipe before draining stdin cannot deadlock.
/// Errors are plain strings; each adapter wraps them in its own variant.
pub fn run<I, A>(program: &Path, args: I, stdin_data: Option<&[u8]>) -> Result<Vec<u8>, String>
where
    I: IntoIterator<Item = A>,
    A: AsRef<OsStr>,
{
    let name = program.display();
    let mut cmd = Command::new(program);
    cmd.args(args)
        .stdin(if stdin_data.is_some() {
            Stdio::piped()
        } else {
            Stdio::null()
        })
        .stdout(Stdio::piped())
        .stderr(Stdio::piped());

    let mut child = cmd
        .spawn()
        .map_err(|e| format!("Failed to run {name}: {e}"))?;

    let output = std::thread::scope(|scope| {
        if let (Some(data), Some(mut stdin)) = (stdin_data, child.stdin.take()) {
            scope.spawn(move || {
                // A child that exits early closes the pipe; its exit status
                // reports the real problem.
                let _ = stdin.write_all(data);
            });
        }
        child.wait_with_output()
    })
    .map_err(|e| format!("{name} process failed: {e}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        if output.stdout.is_empty() {
            return Err(format!(
                "{name} exited with {}: {}",
                output.status,
                stderr.trim()
            ));
        }
        warn!(
            program = %name,
            status = %output.status,
            stderr = %stderr.trim(),
            bytes = output.stdout.len(),
            "process failed after producing output, keeping it"
        );
    }

    Ok(output.stdout)
}
