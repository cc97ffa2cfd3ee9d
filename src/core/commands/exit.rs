use std::io::Write;

use super::{Command, CommandError, Outcome};
use crate::core::state::SessionState;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for ExitCommand {
    /// Asks the shell to terminate. A non-numeric status aborts the exit
    /// and leaves the session running.
    fn execute(
        &self,
        args: &[String],
        state: &mut SessionState,
        _out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        match args {
            [] => Ok(Outcome::Exit(state.last_exit_code())),
            [code] => code
                .parse::<i32>()
                .map(Outcome::Exit)
                .map_err(|_| CommandError::NumericArgumentRequired(code.clone())),
            _ => Err(CommandError::invalid_arguments("exit", "too many arguments")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn exit_with(args: &[&str], last: i32) -> Result<Outcome, CommandError> {
        let mut state = SessionState::with_dir(PathBuf::from("/"));
        state.set_last_exit_code(last);
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        ExitCommand::new().execute(&args, &mut state, &mut Vec::new())
    }

    #[test]
    fn test_exit_uses_last_status() {
        assert_eq!(exit_with(&[], 0).unwrap(), Outcome::Exit(0));
        assert_eq!(exit_with(&[], 127).unwrap(), Outcome::Exit(127));
    }

    #[test]
    fn test_exit_with_explicit_status() {
        assert_eq!(exit_with(&["5"], 127).unwrap(), Outcome::Exit(5));
        assert_eq!(exit_with(&["0"], 3).unwrap(), Outcome::Exit(0));
    }

    #[test]
    fn test_exit_non_numeric() {
        let err = exit_with(&["abc"], 0).unwrap_err();
        assert!(matches!(err, CommandError::NumericArgumentRequired(_)));
        assert_eq!(err.exit_code(), 2);
        assert_eq!(err.to_string(), "exit: abc: numeric argument required");
    }

    #[test]
    fn test_exit_too_many_arguments() {
        let err = exit_with(&["1", "2"], 0).unwrap_err();
        assert!(matches!(err, CommandError::InvalidArguments { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
