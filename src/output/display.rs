//! Display functions for command results

use super::formatters::{create_progress_bar, percentage};
use crate::commands::SimulationResult;
use crate::core::{Choice, Outcome};
use colored::Colorize;

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Matches played:   {}", result.matches);
    println!("   Rounds per match: {}", result.rounds_per_match);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Matches/second:   {:.1}", result.matches_per_second);

    println!("\n🏆 {}", "Match results (player's view):".bright_cyan().bold());
    for outcome in [Outcome::Win, Outcome::Lose, Outcome::Tie] {
        print_share_row(
            outcome.message(),
            result.match_count(outcome),
            result.matches,
        );
    }

    println!("\n🎲 {}", "Round results:".bright_cyan().bold());
    let total_rounds = result.total_rounds();
    for outcome in [Outcome::Win, Outcome::Lose, Outcome::Tie] {
        print_share_row(outcome.message(), result.round_count(outcome), total_rounds);
    }

    println!("\n✊ {}", "Choices drawn:".bright_cyan().bold());
    let total_choices: usize = result.choice_counts.values().sum();
    for choice in Choice::ALL {
        print_share_row(choice.name(), result.choice_count(choice), total_choices);
    }
}

fn print_share_row(label: &str, count: usize, total: usize) {
    let pct = percentage(count, total);
    let bar = create_progress_bar(pct, 100.0, 40);
    println!("   {label:<12} {} {count:7} ({pct:5.1}%)", bar.green());
}
