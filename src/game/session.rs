//! Match lifecycle
//!
//! A `Session` turns one line of raw input at a time into console messages.
//! It owns the match state and the opponent, and knows which prompt to show
//! next. Front ends only move text in and out.

use super::message::{Message, MessageStyle};
use crate::core::{Choice, MatchState, Opponent, Outcome, ReplayAnswer};
use std::num::NonZeroU32;

pub const UNRECOGNISED_INPUT: &str = "Unrecognised Input.";
pub const REPLAY_PROMPT: &str = "Would you like to play again? [yes/no]";
pub const REPLAY_REPROMPT: &str = "Please enter either 'yes' or 'no'";
pub const FAREWELL: &str = "Thank you for playing!";

/// Where the session is in the match lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    NotStarted,
    InProgress,
    AwaitingReplayDecision,
    Ended,
}

/// One completed round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: u32,
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

/// Tally of finished matches in this session
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SessionStats {
    pub matches_won: usize,
    pub matches_lost: usize,
    pub matches_tied: usize,
}

impl SessionStats {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.matches_won + self.matches_lost + self.matches_tied
    }

    fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.matches_won += 1,
            Outcome::Lose => self.matches_lost += 1,
            Outcome::Tie => self.matches_tied += 1,
        }
    }
}

/// A run of matches against one opponent
pub struct Session<O> {
    opponent: O,
    rounds_target: NonZeroU32,
    state: MatchState,
    phase: Phase,
    rounds: Vec<RoundRecord>,
    stats: SessionStats,
}

impl<O> Session<O> {
    #[must_use]
    pub fn new(opponent: O, rounds_target: NonZeroU32) -> Self {
        Self {
            opponent,
            rounds_target,
            state: MatchState::new(rounds_target),
            phase: Phase::NotStarted,
            rounds: Vec::new(),
            stats: SessionStats::default(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub const fn state(&self) -> &MatchState {
        &self.state
    }

    /// Rounds completed in the current match
    #[must_use]
    pub fn rounds(&self) -> &[RoundRecord] {
        &self.rounds
    }

    #[must_use]
    pub const fn stats(&self) -> &SessionStats {
        &self.stats
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::Ended
    }

    /// Text to show before the next input, if any input is expected
    #[must_use]
    pub fn prompt(&self) -> Option<String> {
        match self.phase {
            Phase::InProgress => Some(format!(
                "Round {}. Enter choice [rock/paper/scissors]",
                self.state.current_round()
            )),
            Phase::AwaitingReplayDecision => Some(REPLAY_PROMPT.to_string()),
            Phase::NotStarted | Phase::Ended => None,
        }
    }
}

impl<O: Opponent> Session<O> {
    /// Start the first match
    ///
    /// Does nothing once the session has started.
    pub fn start(&mut self) -> Vec<Message> {
        if self.phase != Phase::NotStarted {
            return Vec::new();
        }
        vec![self.begin_match()]
    }

    /// Feed one line of raw input to the session
    ///
    /// Input received before `start` or after the session ended is ignored.
    pub fn submit(&mut self, input: &str) -> Vec<Message> {
        match self.phase {
            Phase::InProgress => match Choice::parse(input) {
                Ok(choice) => self.play_round(choice),
                Err(err) => {
                    log::debug!("round {}: {err}", self.state.current_round());
                    vec![Message::error(UNRECOGNISED_INPUT)]
                }
            },
            Phase::AwaitingReplayDecision => match ReplayAnswer::parse(input) {
                Ok(ReplayAnswer::Yes) => {
                    log::info!("restarting after {} matches", self.stats.total());
                    vec![self.begin_match()]
                }
                Ok(ReplayAnswer::No) => {
                    self.phase = Phase::Ended;
                    log::info!("session ended after {} matches", self.stats.total());
                    vec![Message::info(FAREWELL)]
                }
                Err(err) => {
                    log::debug!("replay answer: {err}");
                    vec![Message::new(REPLAY_REPROMPT, MessageStyle::Warning)]
                }
            },
            Phase::NotStarted | Phase::Ended => Vec::new(),
        }
    }

    fn begin_match(&mut self) -> Message {
        self.state = MatchState::new(self.rounds_target);
        self.rounds.clear();
        self.phase = Phase::InProgress;
        log::info!("match started: best of {}", self.rounds_target);

        Message::info(format!(
            "Let's play a game of rock paper scissors! Best of {}...",
            self.rounds_target
        ))
    }

    fn play_round(&mut self, player: Choice) -> Vec<Message> {
        let computer = self.opponent.choose();
        let outcome = player.compare(computer);

        self.state = match self.state.score_round(outcome) {
            Ok(next) => next,
            Err(err) => {
                log::error!("{err}");
                return Vec::new();
            }
        };
        self.rounds.push(RoundRecord {
            round: self.state.rounds_played(),
            player,
            computer,
            outcome,
        });
        log::debug!(
            "round {}: {player} vs {computer} -> {outcome:?} ({}-{})",
            self.state.rounds_played(),
            self.state.player_score(),
            self.state.computer_score()
        );

        let mut messages = vec![Message::new(
            format!("Computer chose {computer}... {}", outcome.message()),
            MessageStyle::for_outcome(outcome),
        )];

        if self.state.is_complete() {
            let overall = self.state.outcome();
            self.stats.record(overall);
            self.phase = Phase::AwaitingReplayDecision;
            log::info!(
                "match finished {}-{}: {overall:?}",
                self.state.player_score(),
                self.state.computer_score()
            );
            messages.push(Message::new(
                format!("The results are in... {}", overall.message()),
                MessageStyle::for_outcome(overall),
            ));
        }

        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{DEFAULT_ROUNDS, ScriptedOpponent};

    fn session(script: &[Choice], rounds: u32) -> Session<ScriptedOpponent> {
        let mut session = Session::new(
            ScriptedOpponent::new(script.to_vec()),
            NonZeroU32::new(rounds).unwrap(),
        );
        session.start();
        session
    }

    fn texts(messages: &[Message]) -> Vec<&str> {
        messages.iter().map(|m| m.text.as_str()).collect()
    }

    #[test]
    fn start_announces_match() {
        let mut session = Session::new(ScriptedOpponent::new([Choice::Rock]), DEFAULT_ROUNDS);
        assert_eq!(session.phase(), Phase::NotStarted);
        assert_eq!(session.prompt(), None);

        let messages = session.start();
        assert_eq!(
            texts(&messages),
            ["Let's play a game of rock paper scissors! Best of 5..."]
        );
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(
            session.prompt().as_deref(),
            Some("Round 1. Enter choice [rock/paper/scissors]")
        );

        // Starting twice is a no-op
        assert!(session.start().is_empty());
    }

    #[test]
    fn round_result_message() {
        let mut session = session(&[Choice::Scissors], 5);
        let messages = session.submit("rock");

        assert_eq!(texts(&messages), ["Computer chose scissors... You win!"]);
        assert_eq!(messages[0].style, MessageStyle::Success);
        assert_eq!(
            session.prompt().as_deref(),
            Some("Round 2. Enter choice [rock/paper/scissors]")
        );
    }

    #[test]
    fn three_round_scenario_ends_in_tie() {
        let mut session = session(&[Choice::Scissors, Choice::Paper, Choice::Rock], 3);

        assert_eq!(
            texts(&session.submit("Rock")),
            ["Computer chose scissors... You win!"]
        );
        assert_eq!(
            texts(&session.submit("paper")),
            ["Computer chose paper... It's a tie!"]
        );
        assert_eq!(
            texts(&session.submit(" scissors ")),
            [
                "Computer chose rock... Bad luck!",
                "The results are in... It's a tie!"
            ]
        );

        let outcomes: Vec<Outcome> = session.rounds().iter().map(|r| r.outcome).collect();
        assert_eq!(outcomes, [Outcome::Win, Outcome::Tie, Outcome::Lose]);
        assert_eq!(session.state().player_score(), 1);
        assert_eq!(session.state().computer_score(), 1);
        assert_eq!(session.phase(), Phase::AwaitingReplayDecision);
        assert_eq!(session.prompt().as_deref(), Some(REPLAY_PROMPT));
        assert_eq!(session.stats().matches_tied, 1);
    }

    #[test]
    fn invalid_round_input_reprompts_same_round() {
        let mut session = session(&[Choice::Rock], 5);
        session.submit("paper");
        assert_eq!(session.state().rounds_played(), 1);

        let messages = session.submit("lizard");
        assert_eq!(texts(&messages), [UNRECOGNISED_INPUT]);
        assert_eq!(messages[0].style, MessageStyle::Error);
        assert_eq!(session.state().rounds_played(), 1);
        assert_eq!(
            session.prompt().as_deref(),
            Some("Round 2. Enter choice [rock/paper/scissors]")
        );
    }

    #[test]
    fn all_rounds_are_played_even_when_decided() {
        let mut session = session(&[Choice::Scissors], 5);
        for _ in 0..3 {
            session.submit("rock");
        }
        // 3-0 already decides a best of 5, but the match keeps going
        assert_eq!(session.phase(), Phase::InProgress);
        session.submit("rock");
        let last = session.submit("rock");

        assert_eq!(last.len(), 2);
        assert_eq!(last[1].text, "The results are in... You win!");
        assert_eq!(session.state().rounds_played(), 5);
        assert_eq!(session.state().player_score(), 5);
    }

    #[test]
    fn yes_restarts_with_fresh_state() {
        let mut session = session(&[Choice::Scissors], 2);
        session.submit("rock");
        session.submit("rock");
        assert_eq!(session.phase(), Phase::AwaitingReplayDecision);

        let messages = session.submit("YES");
        assert_eq!(
            texts(&messages),
            ["Let's play a game of rock paper scissors! Best of 2..."]
        );
        assert_eq!(session.phase(), Phase::InProgress);
        assert_eq!(session.state().rounds_played(), 0);
        assert_eq!(session.state().player_score(), 0);
        assert_eq!(session.state().computer_score(), 0);
        assert!(session.rounds().is_empty());
        assert_eq!(session.stats().matches_won, 1);
        assert_eq!(
            session.prompt().as_deref(),
            Some("Round 1. Enter choice [rock/paper/scissors]")
        );
    }

    #[test]
    fn unknown_replay_answer_reprompts() {
        let mut session = session(&[Choice::Paper], 1);
        session.submit("rock");

        let messages = session.submit("maybe");
        assert_eq!(texts(&messages), [REPLAY_REPROMPT]);
        assert_eq!(session.phase(), Phase::AwaitingReplayDecision);
        assert_eq!(session.prompt().as_deref(), Some(REPLAY_PROMPT));
    }

    #[test]
    fn no_ends_the_session() {
        let mut session = session(&[Choice::Paper], 1);
        session.submit("rock");

        let messages = session.submit("n");
        assert_eq!(texts(&messages), [FAREWELL]);
        assert!(session.is_over());
        assert_eq!(session.prompt(), None);
        assert_eq!(session.stats().matches_lost, 1);

        // Terminal state: nothing more happens
        assert!(session.submit("yes").is_empty());
        assert!(session.is_over());
    }

    #[test]
    fn rounds_record_choices() {
        let mut session = session(&[Choice::Paper], 5);
        session.submit("scissors");

        assert_eq!(
            session.rounds(),
            [RoundRecord {
                round: 1,
                player: Choice::Scissors,
                computer: Choice::Paper,
                outcome: Outcome::Win,
            }]
        );
    }
}
