//! Simulate command
//!
//! Plays many computer-vs-computer matches and reports how the outcomes and
//! choices are distributed.

use crate::core::{Choice, MatchError, MatchState, Opponent, Outcome, RandomOpponent};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::num::NonZeroU32;
use std::time::{Duration, Instant};

/// Mixed into the per-match seed so both sides draw from different streams
const COMPUTER_STREAM: u64 = 0x9E37_79B9_7F4A_7C15;

/// Parameters for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub matches: usize,
    pub rounds: NonZeroU32,
    pub seed: u64,
    pub show_progress: bool,
}

/// Running counts of match outcomes, round outcomes and choices drawn
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tally {
    pub match_outcomes: FxHashMap<Outcome, usize>,
    pub round_outcomes: FxHashMap<Outcome, usize>,
    pub choice_counts: FxHashMap<Choice, usize>,
}

impl Tally {
    fn record_round(&mut self, player: Choice, computer: Choice, outcome: Outcome) {
        *self.round_outcomes.entry(outcome).or_insert(0) += 1;
        *self.choice_counts.entry(player).or_insert(0) += 1;
        *self.choice_counts.entry(computer).or_insert(0) += 1;
    }

    fn record_match(&mut self, outcome: Outcome) {
        *self.match_outcomes.entry(outcome).or_insert(0) += 1;
    }

    /// Combine two tallies
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        for (outcome, count) in other.match_outcomes {
            *self.match_outcomes.entry(outcome).or_insert(0) += count;
        }
        for (outcome, count) in other.round_outcomes {
            *self.round_outcomes.entry(outcome).or_insert(0) += count;
        }
        for (choice, count) in other.choice_counts {
            *self.choice_counts.entry(choice).or_insert(0) += count;
        }
        self
    }

    /// Matches counted so far
    #[must_use]
    pub fn matches(&self) -> usize {
        self.match_outcomes.values().sum()
    }
}

/// Aggregated results of a simulation run
pub struct SimulationResult {
    pub matches: usize,
    pub rounds_per_match: u32,
    pub match_outcomes: FxHashMap<Outcome, usize>,
    pub round_outcomes: FxHashMap<Outcome, usize>,
    pub choice_counts: FxHashMap<Choice, usize>,
    pub duration: Duration,
    pub matches_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn match_count(&self, outcome: Outcome) -> usize {
        self.match_outcomes.get(&outcome).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn round_count(&self, outcome: Outcome) -> usize {
        self.round_outcomes.get(&outcome).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn choice_count(&self, choice: Choice) -> usize {
        self.choice_counts.get(&choice).copied().unwrap_or(0)
    }

    /// Rounds played across all matches
    #[must_use]
    pub fn total_rounds(&self) -> usize {
        self.round_outcomes.values().sum()
    }
}

/// Play one full match between two opponents, counting it into `tally`
///
/// `player` is the subject: outcomes are expressed from its side. Every round
/// is played even when the result is already decided. Rounds are counted as
/// they are played; none are kept.
///
/// # Errors
///
/// Returns `MatchError` if the match state rejects a round.
pub fn play_auto_match<P, C>(
    player: &mut P,
    computer: &mut C,
    rounds: NonZeroU32,
    tally: &mut Tally,
) -> Result<MatchState, MatchError>
where
    P: Opponent + ?Sized,
    C: Opponent + ?Sized,
{
    let mut state = MatchState::new(rounds);

    while !state.is_complete() {
        let player_choice = player.choose();
        let computer_choice = computer.choose();
        let outcome = player_choice.compare(computer_choice);

        state = state.score_round(outcome)?;
        tally.record_round(player_choice, computer_choice, outcome);
    }

    tally.record_match(state.outcome());
    Ok(state)
}

/// Run `config.matches` random matches in parallel
///
/// Match `i` seeds both sides from `config.seed + i`, so a run is
/// reproducible regardless of thread scheduling.
///
/// # Errors
///
/// Returns `MatchError` if any match rejects a round.
pub fn run_simulation(config: &SimulationConfig) -> Result<SimulationResult, MatchError> {
    let start = Instant::now();

    let pb = if config.show_progress {
        ProgressBar::new(config.matches as u64)
    } else {
        ProgressBar::hidden()
    };
    if let Ok(style) = ProgressStyle::default_bar()
        .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
    {
        pb.set_style(style.progress_chars("█▓▒░"));
    }

    log::info!(
        "simulating {} matches of {} rounds (seed {})",
        config.matches,
        config.rounds,
        config.seed
    );

    // Each worker folds into its own tally; tallies are merged at the end
    let tally = (0..config.matches)
        .into_par_iter()
        .try_fold(Tally::default, |mut tally, index| {
            let seed = config.seed.wrapping_add(index as u64);
            let mut player = RandomOpponent::new(StdRng::seed_from_u64(seed));
            let mut computer = RandomOpponent::new(StdRng::seed_from_u64(seed ^ COMPUTER_STREAM));
            play_auto_match(&mut player, &mut computer, config.rounds, &mut tally)?;
            pb.inc(1);
            Ok::<_, MatchError>(tally)
        })
        .try_reduce(Tally::default, |a, b| Ok(a.merge(b)))?;

    pb.finish_with_message("Complete!");

    let duration = start.elapsed();
    let secs = duration.as_secs_f64();
    let matches = tally.matches();

    Ok(SimulationResult {
        matches,
        rounds_per_match: config.rounds.get(),
        match_outcomes: tally.match_outcomes,
        round_outcomes: tally.round_outcomes,
        choice_counts: tally.choice_counts,
        duration,
        matches_per_second: if secs > 0.0 {
            matches as f64 / secs
        } else {
            0.0
        },
    })
}
