use std::io::{BufRead, ErrorKind, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Yields raw command lines until the input is exhausted.
pub trait LineSource {
    /// Returns `Ok(None)` at end of input.
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError>;
}

/// Interactive terminal input with line editing and in-memory history.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, ShellError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        loop {
            match self.editor.readline(prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                            log::warn!("Couldn't add to history: {}", e);
                        }
                    }
                    return Ok(Some(line));
                }
                // Ctrl-C discards the current line
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::WindowResized) => continue,
                Err(ReadlineError::Eof) => return Ok(None),
                Err(ReadlineError::Io(e)) if e.kind() == ErrorKind::InvalidData => {
                    return Err(ShellError::InvalidInput(
                        "input is not valid UTF-8".to_string(),
                    ))
                }
                Err(e) => return Err(e.into()),
            }
        }
    }
}

/// Line-at-a-time input from any buffered reader, e.g. piped stdin.
pub struct ReaderSource<R> {
    reader: R,
    show_prompt: bool,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            show_prompt: false,
        }
    }

    pub fn with_prompt(mut self, show_prompt: bool) -> Self {
        self.show_prompt = show_prompt;
        self
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn next_line(&mut self, prompt: &str) -> Result<Option<String>, ShellError> {
        if self.show_prompt {
            let mut stdout = std::io::stdout();
            write!(stdout, "{}", prompt)?;
            stdout.flush()?;
        }

        // Undecodable bytes become U+FFFD rather than ending the session
        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
