use std::env;
use std::io::Write;

use super::{Command, CommandError, Outcome};
use crate::core::state::SessionState;

#[derive(Clone, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(
        &self,
        _args: &[String],
        _state: &mut SessionState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let cwd = env::current_dir().map_err(|_| CommandError::CurrentDirUnavailable)?;
        writeln!(out, "{}", cwd.display())?;
        Ok(Outcome::Continue(0))
    }
}
