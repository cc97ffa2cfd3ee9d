use std::env;
use std::io::{self, Write};
use std::path::PathBuf;

use log::debug;

use super::{Command, CommandError, Outcome};
use crate::core::state::SessionState;
use crate::path::PathExpander;

#[derive(Clone)]
pub struct CdCommand {
    path_expander: PathExpander,
}

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self {
            path_expander: PathExpander::new(),
        }
    }

    fn resolve_target(
        &self,
        arg: Option<&str>,
        state: &SessionState,
    ) -> Result<PathBuf, CommandError> {
        let target = match arg {
            None | Some("") | Some("~") => self.path_expander.get_home_dir()?,
            Some("-") => state
                .previous_dir()
                .unwrap_or_else(|| state.current_dir())
                .to_path_buf(),
            Some(path) => self.path_expander.expand(path)?,
        };
        Ok(target)
    }
}

impl Command for CdCommand {
    fn execute(
        &self,
        args: &[String],
        state: &mut SessionState,
        out: &mut dyn Write,
    ) -> Result<Outcome, CommandError> {
        if args.len() > 1 {
            return Err(CommandError::invalid_arguments("cd", "too many arguments"));
        }
        let arg = args.first().map(String::as_str);
        let target = self.resolve_target(arg, state)?;

        let path = target.to_string_lossy();
        env::set_current_dir(&target)
            .map_err(|e| CommandError::ChangeDirectory(describe_failure(&path, &e)))?;

        let old = state.current_dir().to_path_buf();
        let new = env::current_dir()
            .map_err(|e| CommandError::ChangeDirectory(describe_failure(&path, &e)))?;
        debug!("cd {} -> {}", old.display(), new.display());
        state.update_working_directory(old, new);

        if arg == Some("-") {
            writeln!(out, "{}", state.current_dir().display())?;
        }
        Ok(Outcome::Continue(0))
    }
}

/// Presents an OS directory-change failure as a `cd` error, dropping the
/// `(os error N)` suffix.
fn describe_failure(path: &str, err: &io::Error) -> String {
    let reason = err.to_string();
    let reason = match reason.find(" (os error") {
        Some(idx) => &reason[..idx],
        None => reason.as_str(),
    };
    format!("cd: {}: {}", path, reason)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{lock_process, scratch_dir};

    fn cd(args: &[&str], state: &mut SessionState) -> (Result<Outcome, CommandError>, String) {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let mut out = Vec::new();
        let result = CdCommand::new().execute(&args, state, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_cd_home() {
        let _guard = lock_process();
        let home = scratch_dir("cd_home");
        let saved = env::var_os("HOME");
        env::set_var("HOME", &home);
        let mut state = SessionState::new().unwrap();

        for args in [&[][..], &["~"][..], &[""][..]] {
            let (result, _) = cd(args, &mut state);
            assert_eq!(result.unwrap(), Outcome::Continue(0));
            assert_eq!(env::current_dir().unwrap(), home);
            assert_eq!(state.current_dir(), home);
        }

        match saved {
            Some(value) => env::set_var("HOME", value),
            None => env::remove_var("HOME"),
        }
    }

    #[test]
    fn test_cd_dash_round_trip() {
        let _guard = lock_process();
        let start = scratch_dir("cd_start");
        let target = scratch_dir("cd_target");
        env::set_current_dir(&start).unwrap();
        let mut state = SessionState::new().unwrap();

        let (result, out) = cd(&[target.to_str().unwrap()], &mut state);
        assert_eq!(result.unwrap(), Outcome::Continue(0));
        assert!(out.is_empty());
        assert_eq!(state.previous_dir(), Some(start.as_path()));
        assert_eq!(env::var("PWD").unwrap(), target.to_str().unwrap());
        assert_eq!(env::var("OLDPWD").unwrap(), start.to_str().unwrap());

        let (result, out) = cd(&["-"], &mut state);
        assert_eq!(result.unwrap(), Outcome::Continue(0));
        assert_eq!(out, format!("{}\n", start.display()));
        assert_eq!(env::current_dir().unwrap(), start);
        assert_eq!(state.previous_dir(), Some(target.as_path()));
    }

    #[test]
    fn test_cd_dash_without_history_stays_put() {
        let _guard = lock_process();
        let start = scratch_dir("cd_dash_fresh");
        env::set_current_dir(&start).unwrap();
        let mut state = SessionState::new().unwrap();

        let (result, out) = cd(&["-"], &mut state);
        assert_eq!(result.unwrap(), Outcome::Continue(0));
        assert_eq!(out, format!("{}\n", start.display()));
        assert_eq!(env::current_dir().unwrap(), start);
    }

    #[test]
    fn test_cd_relative_path() {
        let _guard = lock_process();
        let parent = scratch_dir("cd_relative");
        std::fs::create_dir_all(parent.join("child")).unwrap();
        env::set_current_dir(&parent).unwrap();
        let mut state = SessionState::new().unwrap();

        let (result, _) = cd(&["child"], &mut state);
        assert_eq!(result.unwrap(), Outcome::Continue(0));
        assert_eq!(state.current_dir(), parent.join("child"));

        let (result, _) = cd(&[".."], &mut state);
        assert_eq!(result.unwrap(), Outcome::Continue(0));
        assert_eq!(state.current_dir(), parent);
    }

    #[test]
    fn test_cd_invalid() {
        let _guard = lock_process();
        let mut state = SessionState::new().unwrap();
        let before = state.current_dir().to_path_buf();

        let (result, _) = cd(&["/nonexistent/path"], &mut state);
        let err = result.unwrap_err();
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "cd: /nonexistent/path: No such file or directory");
        assert_eq!(state.current_dir(), before);
        assert!(state.previous_dir().is_none());
    }

    #[test]
    fn test_cd_too_many_arguments() {
        let mut state = SessionState::with_dir(PathBuf::from("/"));
        let (result, _) = cd(&["a", "b"], &mut state);
        assert_eq!(result.unwrap_err().to_string(), "cd: too many arguments");
    }

    #[test]
    fn test_describe_failure_names_cd() {
        let err = io::Error::new(io::ErrorKind::PermissionDenied, "Permission denied");
        assert_eq!(describe_failure("/root", &err), "cd: /root: Permission denied");
    }

    #[cfg(unix)]
    #[test]
    fn test_describe_failure_strips_os_error_code() {
        // ENOENT
        let err = io::Error::from_raw_os_error(2);
        assert_eq!(describe_failure("/gone", &err), "cd: /gone: No such file or directory");
    }

    #[cfg(unix)]
    #[test]
    fn test_cd_into_file_reports_as_cd() {
        let _guard = lock_process();
        let file = scratch_dir("cd_file").join("plain");
        std::fs::write(&file, b"").unwrap();
        let mut state = SessionState::new().unwrap();

        let (result, _) = cd(&[file.to_str().unwrap()], &mut state);
        let err = result.unwrap_err();
        assert!(matches!(err, CommandError::ChangeDirectory(_)));
        assert_eq!(err.to_string(), format!("cd: {}: Not a directory", file.display()));
    }
}
