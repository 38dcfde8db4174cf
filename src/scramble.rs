//! Random scrambles and the scramble history.

use std::fmt;

use crate::moves::{format_sequence, Move};
use crate::state::CubeState;

/// Number of moves in a scramble when no length is given.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 25;

/// Append-only record of moves applied since the last reset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScrambleHistory {
    moves: Vec<Move>,
}

impl ScrambleHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    pub fn clear(&mut self) {
        self.moves.clear();
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Replays the history onto a solved cube.
    pub fn replay(&self) -> CubeState {
        CubeState::solved().apply_all(&self.moves)
    }
}

impl fmt::Display for ScrambleHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_sequence(&self.moves))
    }
}

/// Draws random moves from an owned, seedable generator.
pub struct Scrambler {
    rng: fastrand::Rng,
    avoid_same_face: bool,
}

impl Scrambler {
    /// A scrambler seeded from the global generator.
    pub fn new() -> Self {
        Self::from_rng(fastrand::Rng::new())
    }

    /// A reproducible scrambler.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(fastrand::Rng::with_seed(seed))
    }

    pub fn from_rng(rng: fastrand::Rng) -> Self {
        Self {
            rng,
            avoid_same_face: false,
        }
    }

    /// When set, never draws two consecutive moves of the same face, so no
    /// adjacent pair cancels or merges.
    pub fn avoid_same_face(mut self, avoid: bool) -> Self {
        self.avoid_same_face = avoid;
        self
    }

    /// Draws one of the 18 moves uniformly, honoring the same-face rule
    /// against `previous`.
    pub fn next_move(&mut self, previous: Option<Move>) -> Move {
        loop {
            let mv = Move::ALL[self.rng.usize(..Move::ALL.len())];
            match previous {
                Some(prev) if self.avoid_same_face && prev.face == mv.face => continue,
                _ => return mv,
            }
        }
    }

    /// Draws `count` moves.
    pub fn moves(&mut self, count: usize) -> Vec<Move> {
        let mut moves: Vec<Move> = Vec::with_capacity(count);
        for _ in 0..count {
            let mv = self.next_move(moves.last().copied());
            moves.push(mv);
        }
        moves
    }

    /// Applies `count` random moves to `state`, appending each to `history`,
    /// and returns the resulting state.
    pub fn scramble(
        &mut self,
        state: CubeState,
        count: usize,
        history: &mut ScrambleHistory,
    ) -> CubeState {
        let mut state = state;
        let mut previous = history.moves().last().copied();
        for _ in 0..count {
            let mv = self.next_move(previous);
            state.apply_mut(mv);
            history.push(mv);
            previous = Some(mv);
        }
        log::debug!("Scrambled with {count} moves: {history}");
        state
    }

    /// [`Scrambler::scramble`] with [`DEFAULT_SCRAMBLE_LENGTH`] moves.
    pub fn scramble_default(
        &mut self,
        state: CubeState,
        history: &mut ScrambleHistory,
    ) -> CubeState {
        self.scramble(state, DEFAULT_SCRAMBLE_LENGTH, history)
    }
}

impl Default for Scrambler {
    fn default() -> Self {
        Self::new()
    }
}
