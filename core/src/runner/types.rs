use std::process::{ExitStatus, Output};

/// Everything the runner process left behind on its standard streams.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub stdout: String,
    pub stderr: String,
    /// `None` when the output was not produced by a live process (replay).
    pub exit_code: Option<i32>,
}

impl ProcessOutput {
    pub fn new(stdout: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code: None,
        }
    }

    /// Decodes captured streams lossily; a non-zero exit is still output.
    ///
    /// When the process failed without printing anything, stdout carries an
    /// `Error: ...` line so later diagnostics have something to show.
    pub fn from_process(output: Output) -> Self {
        let code = exit_code(output.status);
        let mut stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        if code != 0 && stdout.trim().is_empty() {
            stdout = format!("Error: process exited with code {code}");
        }
        Self {
            stdout,
            stderr,
            exit_code: Some(code),
        }
    }

    pub fn succeeded(&self) -> bool {
        self.exit_code.map_or(true, |c| c == 0)
    }
}

/// Exit code, mapping signal terminations to `128 + signal` on unix.
pub fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        status
            .code()
            .or_else(|| status.signal().map(|sig| 128 + sig))
            .unwrap_or(1)
    }
    #[cfg(windows)]
    {
        status.code().unwrap_or(1)
    }
}
