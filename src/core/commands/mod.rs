use std::collections::BTreeMap;
use std::io::Write;

mod builtin;
mod cd;
mod echo;
mod exit;
mod pwd;
mod type_;

pub use builtin::{is_builtin, Builtin, BUILTIN_NAMES};
pub use cd::CdCommand;
pub use echo::EchoCommand;
pub use exit::ExitCommand;
pub use pwd::PwdCommand;
pub use type_::TypeCommand;

use log::{debug, warn};

use crate::core::state::SessionState;
use crate::input::tokenizer::{strip_line_ending, tokenize};
use crate::path::PathError;
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug)]
pub enum CommandError {
    InvalidArguments {
        command: &'static str,
        reason: String,
    },
    NumericArgumentRequired(String),
    ChangeDirectory(String),
    CurrentDirUnavailable,
    PathError(PathError),
    IoError(std::io::Error),
    ProcessError(ProcessError),
}

impl CommandError {
    pub fn invalid_arguments(command: &'static str, reason: &str) -> Self {
        CommandError::InvalidArguments {
            command,
            reason: reason.to_string(),
        }
    }

    /// Status recorded in the session when the error ends a command.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::NumericArgumentRequired(_) => 2,
            CommandError::ProcessError(err) => err.exit_code(),
            CommandError::InvalidArguments { .. }
            | CommandError::ChangeDirectory(_)
            | CommandError::CurrentDirUnavailable
            | CommandError::PathError(_)
            | CommandError::IoError(_) => 1,
        }
    }
}

impl std::fmt::Display for CommandError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CommandError::InvalidArguments { command, reason } => {
                write!(f, "{}: {}", command, reason)
            }
            CommandError::NumericArgumentRequired(arg) => {
                write!(f, "exit: {}: numeric argument required", arg)
            }
            CommandError::ChangeDirectory(msg) => write!(f, "{}", msg),
            CommandError::CurrentDirUnavailable => {
                write!(f, "pwd: an error occurred while retrieving the current path")
            }
            CommandError::PathError(err) => write!(f, "cd: {}", err),
            CommandError::IoError(err) => write!(f, "IO error: {}", err),
            CommandError::ProcessError(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CommandError {}

impl From<std::io::Error> for CommandError {
    fn from(err: std::io::Error) -> Self {
        CommandError::IoError(err)
    }
}

impl From<ProcessError> for CommandError {
    fn from(err: ProcessError) -> Self {
        CommandError::ProcessError(err)
    }
}

impl From<PathError> for CommandError {
    fn from(err: PathError) -> Self {
        CommandError::PathError(err)
    }
}

/// What the shell should do once a command has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue(i32),
    Exit(i32),
}

impl Outcome {
    pub fn code(&self) -> i32 {
        match *self {
            Outcome::Continue(code) | Outcome::Exit(code) => code,
        }
    }
}

pub trait Command {
    fn execute(
        &self,
        args: &[String],
        state: &mut SessionState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError>;
}

/// Routes a tokenized command line to a builtin or an external program and
/// owns the session state those commands act on.
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, Builtin>,
    process_executor: ProcessExecutor,
    state: SessionState,
}

impl CommandExecutor {
    pub fn new(state: SessionState) -> Self {
        let commands = BUILTIN_NAMES
            .iter()
            .filter_map(|&name| Builtin::from_name(name).map(|builtin| (name, builtin)))
            .collect();

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
            state,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut SessionState {
        &mut self.state
    }

    pub fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Runs one non-empty token sequence and returns its outcome. Failures
    /// are reported on `err`; the session's exit code is left untouched.
    pub fn dispatch(
        &mut self,
        tokens: &[String],
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Outcome {
        let Some((command, args)) = tokens.split_first() else {
            return Outcome::Continue(0);
        };

        let result = if let Some(builtin) = self.commands.get(command.as_str()) {
            debug!("dispatching builtin {}", command);
            builtin.execute(args, &mut self.state, out)
        } else {
            debug!("dispatching external {}", command);
            if let Err(e) = out.flush() {
                warn!("failed to flush output before {}: {}", command, e);
            }
            self.process_executor
                .spawn_process(tokens)
                .map(Outcome::Continue)
                .map_err(CommandError::from)
        };

        match result {
            Ok(outcome) => outcome,
            Err(e) => {
                if let Err(write_err) = writeln!(err, "{}", e) {
                    warn!("failed to report error for {}: {}", command, write_err);
                }
                Outcome::Continue(e.exit_code())
            }
        }
    }

    /// Handles one raw input line and stores its exit code in the session.
    /// A blank line succeeds without touching the stored status.
    pub fn run_line(&mut self, line: &str, out: &mut dyn Write, err: &mut dyn Write) -> Outcome {
        let tokens = tokenize(strip_line_ending(line));
        if tokens.is_empty() {
            return Outcome::Continue(0);
        }

        let outcome = self.dispatch(&tokens, out, err);
        self.state.set_last_exit_code(outcome.code());
        outcome
    }
}
