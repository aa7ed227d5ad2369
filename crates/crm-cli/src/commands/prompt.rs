//! Line-oriented operator I/O

use std::io::{self, BufRead, Write};

/// Reads answers from `input` after writing prompts to `output`
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Write `prompt` and read one line
    ///
    /// Returns `None` at end of input. The line terminator is stripped;
    /// everything else is returned as typed.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }

    /// Write one line of output
    pub fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.output, "{}", line)
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_ask_strips_line_endings_only() {
        let mut p = Prompter::new(Cursor::new(" alice \r\nbob\n"), Vec::new());
        assert_eq!(p.ask("u: ").unwrap().as_deref(), Some(" alice "));
        assert_eq!(p.ask("u: ").unwrap().as_deref(), Some("bob"));
        assert_eq!(p.ask("u: ").unwrap(), None);
        assert_eq!(String::from_utf8(p.into_output()).unwrap(), "u: u: u: ");
    }

    #[test]
    fn test_blank_line_is_empty_answer_not_eof() {
        let mut p = Prompter::new(Cursor::new("\n"), Vec::new());
        assert_eq!(p.ask("> ").unwrap().as_deref(), Some(""));
        assert_eq!(p.ask("> ").unwrap(), None);
    }
}
