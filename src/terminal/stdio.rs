//! Line-oriented console on stdin/stdout

use super::Terminal;
use crate::game::Message;
use crate::output::formatters::styled_line;
use anyhow::Result;
use std::io::{self, BufRead, Write};

/// Terminal backed by the process's standard streams
pub struct StdioTerminal<R, W> {
    input: R,
    output: W,
}

impl StdioTerminal<io::StdinLock<'static>, io::Stdout> {
    /// Terminal on the real stdin and stdout
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> StdioTerminal<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Terminal for StdioTerminal<R, W> {
    fn render_line(&mut self, message: &Message) -> Result<()> {
        writeln!(self.output, "{}", styled_line(message))?;
        Ok(())
    }

    fn request_input(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "> {prompt}: ")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }

        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::MessageStyle;

    #[test]
    fn request_input_shows_prompt_and_reads_line() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut terminal = StdioTerminal::new("Rock\r\npaper\n".as_bytes(), &mut out);

        assert_eq!(
            terminal.request_input("Round 1").unwrap().as_deref(),
            Some("Rock")
        );
        assert_eq!(
            terminal.request_input("Round 2").unwrap().as_deref(),
            Some("paper")
        );
        assert_eq!(terminal.request_input("Round 3").unwrap(), None);
        drop(terminal);

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("> Round 1: > Round 2: > Round 3: "));
    }

    #[test]
    fn render_line_writes_text() {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let mut terminal = StdioTerminal::new(io::empty(), &mut out);

        terminal
            .render_line(&Message::new("You win!", MessageStyle::Success))
            .unwrap();
        drop(terminal);

        assert_eq!(String::from_utf8(out).unwrap(), "You win!\n");
    }
}
