use std::io::Write;

use super::{
    CdCommand, Command, CommandError, EchoCommand, ExitCommand, Outcome, PwdCommand, TypeCommand,
};
use crate::core::state::SessionState;

/// Every name the shell handles itself.
pub const BUILTIN_NAMES: [&str; 5] = ["exit", "echo", "type", "pwd", "cd"];

pub fn is_builtin(name: &str) -> bool {
    BUILTIN_NAMES.contains(&name)
}

#[derive(Clone)]
pub enum Builtin {
    Exit(ExitCommand),
    Echo(EchoCommand),
    Type(TypeCommand),
    Pwd(PwdCommand),
    Cd(CdCommand),
}

impl Builtin {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "exit" => Some(Builtin::Exit(ExitCommand::new())),
            "echo" => Some(Builtin::Echo(EchoCommand::new())),
            "type" => Some(Builtin::Type(TypeCommand::new())),
            "pwd" => Some(Builtin::Pwd(PwdCommand::new())),
            "cd" => Some(Builtin::Cd(CdCommand::new())),
            _ => None,
        }
    }
}

impl Command for Builtin {
    fn execute(
        &self,
        args: &[String],
        state: &mut SessionState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        match self {
            Builtin::Exit(cmd) => cmd.execute(args, state, out),
            Builtin::Echo(cmd) => cmd.execute(args, state, out),
            Builtin::Type(cmd) => cmd.execute(args, state, out),
            Builtin::Pwd(cmd) => cmd.execute(args, state, out),
            Builtin::Cd(cmd) => cmd.execute(args, state, out),
        }
    }
}
