use std::io::{self, IsTerminal, Write};

use log::debug;

use crate::{
    core::{
        commands::{CommandExecutor, Outcome},
        state::SessionState,
    },
    error::ShellError,
    flags::Flags,
    input::{EditorSource, LineSource, ReaderSource},
};

const PROMPT: &str = "$ ";

pub struct Shell {
    source: Box<dyn LineSource>,
    executor: CommandExecutor,
    prompt: String,
    interactive: bool,
    out: Box<dyn Write>,
    err: Box<dyn Write>,
}

impl Shell {
    /// Builds a session on the process streams. A terminal gets line
    /// editing; anything else is read line by line without a prompt.
    pub fn new(flags: &Flags) -> Result<Self, ShellError> {
        let executor = CommandExecutor::new(SessionState::new()?);
        let stdin = io::stdin();
        let interactive = stdin.is_terminal();

        let source: Box<dyn LineSource> = if interactive {
            Box::new(EditorSource::new()?)
        } else {
            Box::new(ReaderSource::new(stdin.lock()))
        };

        let mut shell = Shell::with_source(
            source,
            executor,
            Box::new(io::stdout()),
            Box::new(io::stderr()),
        );
        shell.interactive = interactive;
        if flags.is_set("quiet") {
            shell.prompt.clear();
        }
        Ok(shell)
    }

    pub fn with_source(
        source: Box<dyn LineSource>,
        executor: CommandExecutor,
        out: Box<dyn Write>,
        err: Box<dyn Write>,
    ) -> Self {
        Shell {
            source,
            executor,
            prompt: PROMPT.to_string(),
            interactive: false,
            out,
            err,
        }
    }

    pub fn executor(&self) -> &CommandExecutor {
        &self.executor
    }

    /// Reads and runs lines until `exit` or end of input, returning the
    /// status the process should exit with.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        loop {
            let line = match self.source.next_line(&self.prompt) {
                Ok(Some(line)) => line,
                Ok(None) => {
                    if self.interactive {
                        writeln!(self.out, "exit")?;
                    }
                    let code = self.executor.state().last_exit_code();
                    debug!("end of input, exiting with {}", code);
                    return Ok(code);
                }
                Err(ShellError::InvalidInput(msg)) => {
                    writeln!(self.err, "mysh: {}", msg)?;
                    self.executor.state_mut().set_last_exit_code(1);
                    continue;
                }
                Err(e) => return Err(e),
            };

            let outcome = self.executor.run_line(&line, &mut self.out, &mut self.err);
            if let Outcome::Exit(code) = outcome {
                debug!("exit requested with {}", code);
                self.out.flush()?;
                return Ok(code);
            }
        }
    }

    /// Runs a single command line in a fresh session.
    pub fn run_command(line: &str) -> Result<i32, ShellError> {
        let mut executor = CommandExecutor::new(SessionState::new()?);
        let outcome = executor.run_line(line, &mut io::stdout(), &mut io::stderr());
        io::stdout().flush()?;
        Ok(outcome.code())
    }
}
