//! A live cube with its history and solve statistics.
//!
//! Statistics only live as long as the session; nothing is written to disk.

use std::fmt;
use std::time::Duration;

use crate::error::CubeError;
use crate::moves::parse_sequence;
use crate::scramble::{ScrambleHistory, Scrambler};
use crate::solver::{Solution, Solver};
use crate::state::CubeState;

/// Counters kept across the session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub scrambles: u32,
    pub solves: u32,
    pub best_time: Option<Duration>,
    pub total_time: Duration,
    pub total_moves: usize,
}

impl SessionStats {
    pub fn average_time(&self) -> Option<Duration> {
        (self.solves > 0).then(|| self.total_time / self.solves)
    }

    pub fn average_moves(&self) -> Option<f64> {
        (self.solves > 0).then(|| self.total_moves as f64 / self.solves as f64)
    }
}

impl fmt::Display for SessionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scrambles: {}", self.scrambles)?;
        writeln!(f, "Solves:    {}", self.solves)?;
        if let (Some(best), Some(average), Some(moves)) =
            (self.best_time, self.average_time(), self.average_moves())
        {
            writeln!(f, "Best time: {best:.2?}")?;
            writeln!(f, "Average:   {average:.2?}")?;
            writeln!(f, "Moves:     {} total, {moves:.1} per solve", self.total_moves)?;
        }
        Ok(())
    }
}

/// A live cube that scrambles, solves and keeps count.
///
/// Every move applied to the cube, whether typed, scrambled or taken from a
/// solution, is appended to the session history.
pub struct Session {
    state: CubeState,
    history: ScrambleHistory,
    scrambler: Scrambler,
    solver: Solver,
    stats: SessionStats,
}

impl Session {
    pub fn new(scrambler: Scrambler, solver: Solver) -> Self {
        Self {
            state: CubeState::solved(),
            history: ScrambleHistory::new(),
            scrambler,
            solver,
            stats: SessionStats::default(),
        }
    }

    pub fn state(&self) -> &CubeState {
        &self.state
    }

    pub fn history(&self) -> &ScrambleHistory {
        &self.history
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Applies a whitespace-separated move sequence to the live cube.
    ///
    /// Nothing is applied if any token is invalid.
    pub fn apply(&mut self, sequence: &str) -> Result<(), CubeError> {
        for mv in parse_sequence(sequence)? {
            self.state.apply_mut(mv);
            self.history.push(mv);
        }
        Ok(())
    }

    /// Restores the solved cube and clears the history.
    pub fn reset(&mut self) {
        self.state.reset();
        self.history.clear();
    }

    /// Scrambles the live cube with `count` random moves.
    pub fn scramble(&mut self, count: usize) -> &CubeState {
        self.state = self.scrambler.scramble(self.state, count, &mut self.history);
        self.stats.scrambles += 1;
        &self.state
    }

    /// Computes a solution for the live cube without changing it.
    pub fn solve(&self) -> Solution {
        self.solver.solve(&self.state)
    }

    /// Plays a solution onto the live cube.
    pub fn apply_solution(&mut self, solution: &Solution) {
        for mv in solution.moves() {
            self.state.apply_mut(mv);
            self.history.push(mv);
        }
        if !self.state.is_solved() {
            log::warn!("Applied solution left the cube unsolved");
        }
    }

    /// Records a finished solve.
    pub fn record_solve(&mut self, elapsed: Duration, moves: usize) {
        self.stats.solves += 1;
        self.stats.total_time += elapsed;
        self.stats.total_moves += moves;
        self.stats.best_time = Some(match self.stats.best_time {
            Some(best) => best.min(elapsed),
            None => elapsed,
        });
    }

    /// Human-readable report of the session statistics.
    pub fn summary(&self) -> String {
        self.stats.to_string()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(Scrambler::new(), Solver::default())
    }
}
