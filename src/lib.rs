//! Breadth-first solver for a tower patience: nine-rank runs from Ace down
//! to 6 are built across a few stacks, and each finished run leaves the
//! board.

pub mod board;
pub mod card;
pub mod config;
pub mod deal;
pub mod notation;
pub mod rules;
pub mod solver;

pub use board::{Board, Move, MoveError};
pub use card::Card;
pub use config::{ConfigError, SolverConfig};
pub use deal::DealError;
pub use rules::Rules;
pub use solver::{solve, Mode, SearchReport, SolveResult, Solver};
