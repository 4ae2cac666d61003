//! Rock Paper Scissors Console - CLI
//!
//! Play against the computer in a full-screen console or on plain stdin/stdout,
//! or simulate many matches.

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rps_console::{
    commands::{SimulationConfig, run_simple, run_simulation},
    core::{DEFAULT_ROUNDS, RandomOpponent},
    game::Session,
    output::print_simulation_result,
};
use std::num::NonZeroU32;

#[derive(Parser)]
#[command(
    name = "rps_console",
    about = "Rock paper scissors against the computer in a terminal console",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Rounds per match
    #[arg(short, long, global = true, default_value_t = DEFAULT_ROUNDS)]
    rounds: NonZeroU32,

    /// Seed for the computer's choices (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Full-screen console (default)
    Play,

    /// Line-based console on stdin/stdout
    Simple,

    /// Play many computer-vs-computer matches and report the distribution
    Simulate {
        /// Number of matches to play
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(cli.rounds, cli.seed),
        Commands::Simple => run_simple_command(cli.rounds, cli.seed),
        Commands::Simulate { count } => run_simulate_command(count, cli.rounds, cli.seed),
    }
}

fn computer_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn run_play_command(rounds: NonZeroU32, seed: Option<u64>) -> Result<()> {
    use rps_console::interactive::{App, run_tui};

    let session = Session::new(RandomOpponent::new(computer_rng(seed)), rounds);
    run_tui(App::new(session))
}

fn run_simple_command(rounds: NonZeroU32, seed: Option<u64>) -> Result<()> {
    let mut session = Session::new(RandomOpponent::new(computer_rng(seed)), rounds);
    run_simple(&mut session)?;
    Ok(())
}

fn run_simulate_command(count: usize, rounds: NonZeroU32, seed: Option<u64>) -> Result<()> {
    let seed = seed.unwrap_or_else(|| rand::rng().random());
    println!("Simulating {count} matches of {rounds} rounds (seed {seed})...");

    let config = SimulationConfig {
        matches: count,
        rounds,
        seed,
        show_progress: true,
    };
    let result = run_simulation(&config)?;
    print_simulation_result(&result);
    Ok(())
}
