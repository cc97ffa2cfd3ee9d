pub mod commands;
pub mod state;

pub use commands::{CommandError, CommandExecutor, Outcome};
pub use state::SessionState;
