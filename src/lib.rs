//! CFOP Cube Solver Library
//!
//! Models a 3x3x3 cube as 54 facelets, applies face turns through
//! permutation tables derived from the cube's geometry, and solves any
//! legal state with the CFOP method (Cross, F2L, OLL, PLL).
//!
//! ```
//! use cfop::{solve, CubeState};
//!
//! let scrambled = CubeState::solved().apply_sequence("R U R' U' F2 D").unwrap();
//! let moves = solve(&scrambled);
//! assert!(scrambled.apply_all(&moves).is_solved());
//! ```

pub mod error;
pub mod explain;
pub mod facelets;
pub mod geometry;
pub mod moves;
pub mod scramble;
pub mod session;
mod solver;
pub mod state;

pub use error::{CubeError, Defect};
pub use facelets::FaceletString;
pub use moves::{format_sequence, invert_sequence, parse_sequence, Move, Turn};
pub use scramble::{ScrambleHistory, Scrambler, DEFAULT_SCRAMBLE_LENGTH};
pub use session::{Session, SessionStats};
pub use solver::{
    solve, Solution, SolveStep, Solver, SolverConfig, StageKind, StageOutcome, DEFAULT_STEP_LIMIT,
};
pub use state::{Color, CubeState, Face};
