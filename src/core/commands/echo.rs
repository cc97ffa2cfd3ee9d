use std::io::Write;

use super::{Command, CommandError, Outcome};
use crate::core::state::SessionState;

#[derive(Clone, Default)]
pub struct EchoCommand;

impl EchoCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for EchoCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut SessionState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        // `$?` and `$status` are only recognised as the sole argument
        match args {
            [only] if only == "$?" || only == "$status" => {
                writeln!(out, "{}", state.last_exit_code())?
            }
            _ => writeln!(out, "{}", args.join(" "))?,
        }
        Ok(Outcome::Continue(0))
    }
}
