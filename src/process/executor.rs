use std::process::{Command, ExitStatus, Stdio};

use log::debug;

use super::ProcessError;

/// Runs external programs found through the host search path.
#[derive(Clone, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `args[0]` with the remaining tokens as arguments and the
    /// shell's standard streams, then waits for it to finish.
    pub fn spawn_process(&self, args: &[String]) -> Result<i32, ProcessError> {
        let (program, rest) = args
            .split_first()
            .ok_or_else(|| ProcessError::Other("empty command".to_string()))?;

        let mut command = Command::new(program);
        command
            .args(rest)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command
            .spawn()
            .map_err(|e| ProcessError::from_io(program, e))?;
        debug!("spawned {} (pid {})", program, child.id());

        let status = child.wait().map_err(|e| ProcessError::from_io(program, e))?;
        let code = exit_code(status);
        debug!("{} exited with {}", program, code);
        Ok(code)
    }
}

#[cfg(unix)]
fn exit_code(status: ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;

    status
        .code()
        .or_else(|| status.signal().map(|signal| 128 + signal))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
