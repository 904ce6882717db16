//! Script retrieval from an executable.
//!
//! Programs built with clap can print their own nushell completions when
//! invoked as `<exe> generate-shell-completion nushell`. The captured stdout
//! is the script handed to the parser.

use std::path::Path;
use std::process::{Command, Stdio};

use crate::error::{NuexternError, Result};

/// Arguments passed to the executable when none are given explicitly.
pub const DEFAULT_ARGS: [&str; 2] = ["generate-shell-completion", "nushell"];

/// Run `executable` with `args` and return its stdout as UTF-8 text.
///
/// Spawn failures, a non-zero exit status and non-UTF-8 output are all
/// reported as [`NuexternError::Retrieval`].
pub fn script_from_executable<S: AsRef<str>>(executable: &Path, args: &[S]) -> Result<String> {
    let retrieval_error = |message: String, help: Option<String>| NuexternError::Retrieval {
        executable: executable.to_path_buf(),
        message,
        help,
    };

    let output = Command::new(executable)
        .args(args.iter().map(|arg| arg.as_ref()))
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|e| {
            retrieval_error(
                format!("failed to execute: {}", e),
                Some("Check that the path exists and is executable".to_string()),
            )
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        let status = match output.status.code() {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by a signal".to_string(),
        };
        let message = if stderr.is_empty() {
            status
        } else {
            format!("{}: {}", status, stderr)
        };
        return Err(retrieval_error(
            message,
            Some(format!(
                "The executable must support `{}`",
                args.iter().map(|arg| arg.as_ref()).collect::<Vec<&str>>().join(" ")
            )),
        ));
    }

    String::from_utf8(output.stdout)
        .map_err(|e| retrieval_error(format!("output is not valid UTF-8: {}", e), None))
}

/// Run `executable` with [`DEFAULT_ARGS`].
pub fn default_script_from_executable(executable: &Path) -> Result<String> {
    script_from_executable(executable, &DEFAULT_ARGS)
}
