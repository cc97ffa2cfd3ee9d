use std::env;
use std::path::{Path, PathBuf};

/// Per-session shell state carried across commands.
///
/// One instance belongs to exactly one session; it is never shared.
#[derive(Debug, Clone)]
pub struct SessionState {
    last_exit_code: i32,
    current_dir: PathBuf,
    previous_dir: Option<PathBuf>,
}

impl SessionState {
    /// Starts a session rooted at the process working directory.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self::with_dir(env::current_dir()?))
    }

    pub fn with_dir(current_dir: PathBuf) -> Self {
        Self {
            last_exit_code: 0,
            current_dir,
            previous_dir: None,
        }
    }

    pub fn last_exit_code(&self) -> i32 {
        self.last_exit_code
    }

    pub fn set_last_exit_code(&mut self, code: i32) {
        self.last_exit_code = code;
    }

    pub fn current_dir(&self) -> &Path {
        &self.current_dir
    }

    pub fn previous_dir(&self) -> Option<&Path> {
        self.previous_dir.as_deref()
    }

    /// Records a successful directory change and mirrors it into
    /// `OLDPWD`/`PWD` for child processes.
    pub fn update_working_directory(&mut self, old: PathBuf, new: PathBuf) {
        env::set_var("OLDPWD", &old);
        env::set_var("PWD", &new);
        self.previous_dir = Some(old);
        self.current_dir = new;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = SessionState::with_dir(PathBuf::from("/start"));
        assert_eq!(state.last_exit_code(), 0);
        assert_eq!(state.current_dir(), Path::new("/start"));
        assert!(state.previous_dir().is_none());
    }

    #[test]
    fn test_update_working_directory() {
        let _guard = crate::test_support::lock_process();
        let mut state = SessionState::with_dir(PathBuf::from("/a"));

        state.update_working_directory(PathBuf::from("/a"), PathBuf::from("/b"));
        assert_eq!(state.current_dir(), Path::new("/b"));
        assert_eq!(state.previous_dir(), Some(Path::new("/a")));
        assert_eq!(env::var("PWD").unwrap(), "/b");
        assert_eq!(env::var("OLDPWD").unwrap(), "/a");
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut first = SessionState::with_dir(PathBuf::from("/"));
        let second = first.clone();

        first.set_last_exit_code(42);
        assert_eq!(first.last_exit_code(), 42);
        assert_eq!(second.last_exit_code(), 0);
    }
}
