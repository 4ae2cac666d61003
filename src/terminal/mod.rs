//! Console input and output
//!
//! The game never touches stdin or stdout directly. A `Terminal` renders
//! lines and hands back one line of raw input per prompt.

mod scripted;
mod stdio;

pub use scripted::ScriptedTerminal;
pub use stdio::StdioTerminal;

use crate::core::Opponent;
use crate::game::{Message, Session, SessionStats};
use anyhow::Result;

/// Presentation side of the game
pub trait Terminal {
    /// Append one line of output
    ///
    /// # Errors
    /// Returns an error if the line cannot be written.
    fn render_line(&mut self, message: &Message) -> Result<()>;

    /// Show `prompt` and wait for one line of input
    ///
    /// Returns `None` once no more input is available.
    ///
    /// # Errors
    /// Returns an error if reading fails.
    fn request_input(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Drive a session over a terminal until the player quits or input runs out
///
/// # Errors
///
/// Returns an error if the terminal fails to read or write.
pub fn run_console<O, T>(session: &mut Session<O>, terminal: &mut T) -> Result<SessionStats>
where
    O: Opponent,
    T: Terminal + ?Sized,
{
    render_all(terminal, &session.start())?;

    while let Some(prompt) = session.prompt() {
        let Some(input) = terminal.request_input(&prompt)? else {
            log::info!("input closed, leaving session");
            break;
        };
        render_all(terminal, &session.submit(&input))?;
    }

    Ok(*session.stats())
}

fn render_all<T: Terminal + ?Sized>(terminal: &mut T, messages: &[Message]) -> Result<()> {
    for message in messages {
        terminal.render_line(message)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Choice, ScriptedOpponent};
    use crate::game::Phase;
    use std::num::NonZeroU32;

    fn session(script: &[Choice], rounds: u32) -> Session<ScriptedOpponent> {
        Session::new(
            ScriptedOpponent::new(script.to_vec()),
            NonZeroU32::new(rounds).unwrap(),
        )
    }

    #[test]
    fn full_session_transcript() {
        let mut session = session(&[Choice::Scissors, Choice::Paper, Choice::Rock], 3);
        let mut terminal = ScriptedTerminal::new(["rock", "lizard", "paper", "scissors", "no"]);

        let stats = run_console(&mut session, &mut terminal).unwrap();

        assert_eq!(
            terminal.output(),
            [
                "Let's play a game of rock paper scissors! Best of 3...",
                "Computer chose scissors... You win!",
                "Unrecognised Input.",
                "Computer chose paper... It's a tie!",
                "Computer chose rock... Bad luck!",
                "The results are in... It's a tie!",
                "Thank you for playing!",
            ]
        );
        assert_eq!(
            terminal.prompts(),
            [
                "Round 1. Enter choice [rock/paper/scissors]",
                "Round 2. Enter choice [rock/paper/scissors]",
                "Round 2. Enter choice [rock/paper/scissors]",
                "Round 3. Enter choice [rock/paper/scissors]",
                "Would you like to play again? [yes/no]",
            ]
        );
        assert_eq!(stats.matches_tied, 1);
        assert!(session.is_over());
    }

    #[test]
    fn replay_loop() {
        let mut session = session(&[Choice::Scissors], 1);
        let mut terminal = ScriptedTerminal::new(["rock", "what", "Yes", "rock", "N"]);

        let stats = run_console(&mut session, &mut terminal).unwrap();

        assert_eq!(stats.matches_won, 2);
        assert_eq!(stats.total(), 2);
        assert!(
            terminal
                .output()
                .contains(&"Please enter either 'yes' or 'no'".to_string())
        );
        assert_eq!(terminal.remaining(), 0);
    }

    #[test]
    fn stops_when_input_runs_out() {
        let mut session = session(&[Choice::Rock], 5);
        let mut terminal = ScriptedTerminal::new(["paper", "paper"]);

        let stats = run_console(&mut session, &mut terminal).unwrap();

        assert_eq!(stats.total(), 0);
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.state().rounds_played(), 2);
    }
}
