//! Command implementations

pub mod simple;
pub mod simulate;

pub use simple::run_simple;
pub use simulate::{
    SimulationConfig, SimulationResult, Tally, play_auto_match, run_simulation,
};
