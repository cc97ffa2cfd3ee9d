pub mod source;
pub mod tokenizer;

pub use source::{EditorSource, LineSource, ReaderSource};
pub use tokenizer::{strip_line_ending, tokenize};
