use log::debug;

/// Removes a single trailing `\n` (or `\r\n`) from a raw input line.
pub fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

/// Splits a command line into words.
///
/// Words are separated by ASCII spaces. Text between a pair of single quotes
/// is taken literally, spaces included, and joins whatever word it touches:
/// `'a b'c` is the single word `a bc`. A quoted empty span (`''`) is an
/// empty word; runs of spaces never produce one.
///
/// An unterminated quote keeps the rest of the line literally as the tail
/// of the current word.
pub fn tokenize(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut in_quote = false;

    for c in line.chars() {
        match c {
            '\'' => {
                in_quote = !in_quote;
                in_word = true;
            }
            ' ' if !in_quote => {
                if in_word {
                    tokens.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            _ => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if in_quote {
        debug!("unterminated single quote in {:?}, keeping remainder literally", line);
    }
    if in_word {
        tokens.push(current);
    }

    debug!("tokenized {:?} into {:?}", line, tokens);
    tokens
}
