//! Simple interactive CLI mode
//!
//! Plays on stdin/stdout without taking over the screen.

use crate::core::Opponent;
use crate::game::{Session, SessionStats};
use crate::terminal::{StdioTerminal, run_console};
use anyhow::Result;
use colored::Colorize;

/// Run the line-oriented console
///
/// # Errors
///
/// Returns an error if reading from stdin or writing to stdout fails.
pub fn run_simple<O: Opponent>(session: &mut Session<O>) -> Result<SessionStats> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Rock Paper Scissors Console                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    let mut terminal = StdioTerminal::stdio();
    let stats = run_console(session, &mut terminal)?;

    if stats.total() > 0 {
        println!(
            "\n  Matches: {}  won {}  lost {}  tied {}\n",
            stats.total().to_string().bright_cyan().bold(),
            stats.matches_won.to_string().green(),
            stats.matches_lost.to_string().yellow(),
            stats.matches_tied
        );
    }

    Ok(stats)
}
