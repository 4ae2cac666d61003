//! TUI application state and logic

use crate::core::Opponent;
use crate::game::{Message, Session};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Oldest transcript lines are dropped past this many
const TRANSCRIPT_LIMIT: usize = 500;

/// One line of the console transcript
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleLine {
    /// Output from the game
    Output(Message),
    /// A prompt together with what the player typed into it
    Echo { prompt: String, input: String },
}

/// Application state
pub struct App<O> {
    pub session: Session<O>,
    pub transcript: Vec<ConsoleLine>,
    pub input_buffer: String,
    pub should_quit: bool,
}

impl<O: Opponent> App<O> {
    #[must_use]
    pub fn new(session: Session<O>) -> Self {
        let mut app = Self {
            session,
            transcript: Vec::new(),
            input_buffer: String::new(),
            should_quit: false,
        };
        let messages = app.session.start();
        app.push_messages(messages);
        app
    }

    /// Submit the current input buffer to the session
    pub fn submit(&mut self) {
        let Some(prompt) = self.session.prompt() else {
            return;
        };
        let input = std::mem::take(&mut self.input_buffer);
        let messages = self.session.submit(&input);

        self.push_line(ConsoleLine::Echo { prompt, input });
        self.push_messages(messages);
    }

    /// React to a single key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.session.is_over() {
            // Any key leaves once the player has said no
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
    }

    fn push_messages(&mut self, messages: Vec<Message>) {
        for message in messages {
            self.push_line(ConsoleLine::Output(message));
        }
    }

    fn push_line(&mut self, line: ConsoleLine) {
        self.transcript.push(line);
        if self.transcript.len() > TRANSCRIPT_LIMIT {
            let excess = self.transcript.len() - TRANSCRIPT_LIMIT;
            self.transcript.drain(..excess);
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui<O: Opponent>(app: App<O>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend, O: Opponent>(
    terminal: &mut Terminal<B>,
    mut app: App<O>,
) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    log::info!("console closed after {} matches", app.session.stats().total());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Choice, ScriptedOpponent};
    use crate::game::Phase;
    use std::num::NonZeroU32;

    fn app(rounds: u32) -> App<ScriptedOpponent> {
        let session = Session::new(
            ScriptedOpponent::new([Choice::Scissors]),
            NonZeroU32::new(rounds).unwrap(),
        );
        App::new(session)
    }

    fn type_line(app: &mut App<ScriptedOpponent>, text: &str) {
        for c in text.chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Enter));
    }

    fn output_texts(app: &App<ScriptedOpponent>) -> Vec<String> {
        app.transcript
            .iter()
            .filter_map(|line| match line {
                ConsoleLine::Output(message) => Some(message.text.clone()),
                ConsoleLine::Echo { .. } => None,
            })
            .collect()
    }

    #[test]
    fn new_app_shows_banner() {
        let app = app(5);
        assert_eq!(
            output_texts(&app),
            ["Let's play a game of rock paper scissors! Best of 5..."]
        );
        assert_eq!(app.session.phase(), Phase::InProgress);
    }

    #[test]
    fn enter_submits_and_echoes() {
        let mut app = app(5);
        type_line(&mut app, "rock");

        assert!(app.input_buffer.is_empty());
        assert_eq!(
            app.transcript[1],
            ConsoleLine::Echo {
                prompt: "Round 1. Enter choice [rock/paper/scissors]".to_string(),
                input: "rock".to_string(),
            }
        );
        assert_eq!(
            output_texts(&app).last().map(String::as_str),
            Some("Computer chose scissors... You win!")
        );
    }

    #[test]
    fn backspace_edits_input() {
        let mut app = app(5);
        for c in "rocx".chars() {
            app.handle_key(KeyEvent::from(KeyCode::Char(c)));
        }
        app.handle_key(KeyEvent::from(KeyCode::Backspace));
        app.handle_key(KeyEvent::from(KeyCode::Char('k')));

        assert_eq!(app.input_buffer, "rock");
    }

    #[test]
    fn declining_replay_then_any_key_quits() {
        let mut app = app(1);
        type_line(&mut app, "rock");
        type_line(&mut app, "no");

        assert!(app.session.is_over());
        assert!(!app.should_quit);
        assert_eq!(
            output_texts(&app).last().map(String::as_str),
            Some("Thank you for playing!")
        );

        app.handle_key(KeyEvent::from(KeyCode::Char('x')));
        assert!(app.should_quit);
    }

    #[test]
    fn ctrl_c_and_esc_quit() {
        let mut interrupted = app(5);
        interrupted.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(interrupted.should_quit);

        let mut escaped = app(5);
        escaped.handle_key(KeyEvent::from(KeyCode::Esc));
        assert!(escaped.should_quit);
    }

    #[test]
    fn transcript_is_bounded() {
        let mut app = app(5);
        for _ in 0..TRANSCRIPT_LIMIT {
            type_line(&mut app, "lizard");
        }
        assert_eq!(app.transcript.len(), TRANSCRIPT_LIMIT);
        assert_eq!(app.session.state().rounds_played(), 0);
    }
}
