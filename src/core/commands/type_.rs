use std::env;
use std::io::Write;

use super::{is_builtin, Command, CommandError, Outcome};
use crate::core::state::SessionState;

#[derive(Clone, Default)]
pub struct TypeCommand;

impl TypeCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for TypeCommand {
    /// Builtins are reported without consulting the search path.
    fn execute(
        &self,
        args: &[String],
        state: &mut SessionState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        let [name] = args else {
            return Err(CommandError::invalid_arguments(
                "type",
                "invalid number of arguments",
            ));
        };

        if is_builtin(name) {
            writeln!(out, "{} is a shell builtin", name)?;
            return Ok(Outcome::Continue(0));
        }

        match which::which_in(name, env::var_os("PATH"), state.current_dir()) {
            Ok(path) => {
                writeln!(out, "{} is {}", name, path.display())?;
                Ok(Outcome::Continue(0))
            }
            Err(_) => {
                writeln!(out, "{}: not found", name)?;
                Ok(Outcome::Continue(127))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn type_of(args: &[&str]) -> (Result<Outcome, CommandError>, String) {
        let mut state = SessionState::with_dir(PathBuf::from("/"));
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let result = TypeCommand::new().execute(&args, &mut state, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_type_builtin() {
        let (result, out) = type_of(&["echo"]);
        assert_eq!(result.unwrap(), Outcome::Continue(0));
        assert_eq!(out, "echo is a shell builtin\n");
    }

    #[test]
    fn test_type_not_found() {
        let (result, out) = type_of(&["nonexistent_xyz"]);
        assert_eq!(result.unwrap(), Outcome::Continue(127));
        assert_eq!(out, "nonexistent_xyz: not found\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_type_resolves_executable() {
        let (result, out) = type_of(&["sh"]);
        assert_eq!(result.unwrap(), Outcome::Continue(0));
        assert!(out.starts_with("sh is /"), "unexpected output: {}", out);
        assert!(out.trim_end().ends_with("/sh"));
    }

    #[test]
    fn test_type_argument_count() {
        for args in [&[][..], &["a", "b"][..]] {
            let (result, out) = type_of(args);
            let err = result.unwrap_err();
            assert_eq!(err.exit_code(), 1);
            assert_eq!(err.to_string(), "type: invalid number of arguments");
            assert!(out.is_empty());
        }
    }
}
