use std::fmt;

pub mod executor;

pub use executor::ProcessExecutor;

#[derive(Debug)]
pub enum ProcessError {
    CommandNotFound(String),
    PermissionDenied(String),
    Failed { program: String, reason: String },
    Other(String),
}

impl ProcessError {
    pub fn exit_code(&self) -> i32 {
        match self {
            ProcessError::CommandNotFound(_) => 127,
            ProcessError::PermissionDenied(_) => 126,
            ProcessError::Failed { .. } | ProcessError::Other(_) => 1,
        }
    }

    /// Classifies an I/O failure of `program`, keeping its name in the message.
    pub fn from_io(program: &str, e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::NotFound => ProcessError::CommandNotFound(program.to_string()),
            std::io::ErrorKind::PermissionDenied => {
                ProcessError::PermissionDenied(program.to_string())
            }
            _ => ProcessError::Failed {
                program: program.to_string(),
                reason: e.to_string(),
            },
        }
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::CommandNotFound(cmd) => write!(f, "{}: command not found", cmd),
            ProcessError::PermissionDenied(cmd) => write!(f, "{}: permission denied", cmd),
            ProcessError::Failed { program, reason } => write!(f, "{}: {}", program, reason),
            ProcessError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for ProcessError {}
