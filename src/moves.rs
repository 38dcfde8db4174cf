//! Move notation and the facelet permutation engine.
//!
//! A move is a face letter with an optional `'` (counter-clockwise) or `2`
//! (half turn) suffix. Each of the 18 moves is a fixed permutation of facelet
//! indices, built at compile time from the sticker geometry.

use std::fmt;
use std::str::FromStr;

use crate::error::CubeError;
use crate::geometry::{dot, face_normal, quarter_turn, sticker, sticker_index};
use crate::state::{CubeState, Face, FACELET_COUNT};

/// Amount a face is turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Turn {
    Clockwise,
    Double,
    CounterClockwise,
}

impl Turn {
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::Double, Turn::CounterClockwise];

    /// Number of clockwise quarter turns this amount is equivalent to.
    pub const fn quarter_turns(self) -> u8 {
        match self {
            Turn::Clockwise => 1,
            Turn::Double => 2,
            Turn::CounterClockwise => 3,
        }
    }

    /// Turn for a number of clockwise quarter turns, `None` for a multiple of 4.
    pub const fn from_quarter_turns(quarters: u8) -> Option<Turn> {
        match quarters % 4 {
            1 => Some(Turn::Clockwise),
            2 => Some(Turn::Double),
            3 => Some(Turn::CounterClockwise),
            _ => None,
        }
    }

    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::Double => Turn::Double,
            Turn::CounterClockwise => Turn::Clockwise,
        }
    }

    const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::Double => "2",
            Turn::CounterClockwise => "'",
        }
    }
}

/// A single face turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub face: Face,
    pub turn: Turn,
}

impl Move {
    /// All 18 face turns: every face with every turn amount.
    pub const ALL: [Move; 18] = all_moves();

    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    pub const fn cw(face: Face) -> Self {
        Self::new(face, Turn::Clockwise)
    }

    pub const fn ccw(face: Face) -> Self {
        Self::new(face, Turn::CounterClockwise)
    }

    pub const fn double(face: Face) -> Self {
        Self::new(face, Turn::Double)
    }

    /// The move undoing this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }

    /// The half turn of the same face.
    pub const fn doubled(self) -> Self {
        Self::double(self.face)
    }

    /// `quarters` clockwise quarter turns of `face`, or `None` when that is
    /// the identity.
    pub const fn quarters(face: Face, quarters: u8) -> Option<Self> {
        match Turn::from_quarter_turns(quarters) {
            Some(turn) => Some(Self::new(face, turn)),
            None => None,
        }
    }

    #[inline(always)]
    const fn table_index(self) -> usize {
        self.face.index() * 3 + self.turn.quarter_turns() as usize - 1
    }
}

const fn all_moves() -> [Move; 18] {
    let mut moves = [Move::cw(Face::Up); 18];
    let mut i = 0;
    while i < 18 {
        let turn = match i % 3 {
            0 => Turn::Clockwise,
            1 => Turn::Double,
            _ => Turn::CounterClockwise,
        };
        moves[i] = Move::new(Face::from_index(i / 3), turn);
        i += 1;
    }
    moves
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}

impl FromStr for Move {
    type Err = CubeError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let invalid = || CubeError::InvalidMoveToken(token.to_string());

        let mut chars = token.chars();
        let face = chars
            .next()
            .and_then(Face::from_letter)
            .ok_or_else(invalid)?;
        let turn = match chars.as_str() {
            "" => Turn::Clockwise,
            "2" => Turn::Double,
            "'" => Turn::CounterClockwise,
            _ => return Err(invalid()),
        };

        Ok(Move::new(face, turn))
    }
}

/// Parses a whitespace-separated move sequence.
///
/// Every token is parsed before anything is returned, so a single bad token
/// rejects the whole sequence.
pub fn parse_sequence(sequence: &str) -> Result<Vec<Move>, CubeError> {
    sequence.split_whitespace().map(str::parse).collect()
}

/// Formats moves as a space-separated sequence.
pub fn format_sequence(moves: &[Move]) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// The sequence undoing `moves`: reversed, each move inverted.
pub fn invert_sequence(moves: &[Move]) -> Vec<Move> {
    moves.iter().rev().map(|mv| mv.inverse()).collect()
}

/// Destination table of a clockwise quarter turn of `face`.
///
/// Entry `i` is the index facelet `i` moves to. Facelets on the turning layer
/// are rotated with their cubie; all others map to themselves.
const fn build_quarter_table(face: Face) -> [u8; FACELET_COUNT] {
    let axis = face_normal(face);
    let mut table = [0u8; FACELET_COUNT];

    let mut src = 0;
    while src < FACELET_COUNT {
        let (position, normal) = sticker(src);
        let dest = if dot(position, axis) == 1 {
            sticker_index(quarter_turn(axis, position), quarter_turn(axis, normal))
        } else {
            src
        };
        table[src] = dest as u8;
        src += 1;
    }
    table
}

/// Destination table of applying `first` then `second`.
const fn compose(
    first: &[u8; FACELET_COUNT],
    second: &[u8; FACELET_COUNT],
) -> [u8; FACELET_COUNT] {
    let mut table = [0u8; FACELET_COUNT];
    let mut src = 0;
    while src < FACELET_COUNT {
        table[src] = second[first[src] as usize];
        src += 1;
    }
    table
}

/// Builds the destination tables of all 18 moves, indexed by
/// `face * 3 + quarter_turns - 1`.
const fn build_move_tables() -> [[u8; FACELET_COUNT]; 18] {
    let mut tables = [[0u8; FACELET_COUNT]; 18];

    let mut face_index = 0;
    while face_index < 6 {
        let quarter = build_quarter_table(Face::from_index(face_index));
        let half = compose(&quarter, &quarter);
        let three_quarters = compose(&half, &quarter);
        tables[face_index * 3] = quarter;
        tables[face_index * 3 + 1] = half;
        tables[face_index * 3 + 2] = three_quarters;
        face_index += 1;
    }
    tables
}

static MOVE_TABLES: [[u8; FACELET_COUNT]; 18] = build_move_tables();

/// Index that the facelet at `index` moves to under `mv`.
#[inline(always)]
pub fn track(index: usize, mv: Move) -> usize {
    MOVE_TABLES[mv.table_index()][index] as usize
}

/// Index that the facelet at `index` ends on after all of `moves`.
pub fn track_all(index: usize, moves: &[Move]) -> usize {
    moves.iter().fold(index, |i, &mv| track(i, mv))
}

impl CubeState {
    /// Returns the state after `mv`.
    #[must_use]
    pub fn apply(&self, mv: Move) -> CubeState {
        let mut next = *self;
        next.apply_mut(mv);
        next
    }

    /// Applies `mv` in place.
    pub fn apply_mut(&mut self, mv: Move) {
        let previous = self.facelets;
        for (src, &dest) in MOVE_TABLES[mv.table_index()].iter().enumerate() {
            self.facelets[dest as usize] = previous[src];
        }
    }

    /// Returns the state after every move of `moves`, in order.
    #[must_use]
    pub fn apply_all(&self, moves: &[Move]) -> CubeState {
        let mut next = *self;
        for &mv in moves {
            next.apply_mut(mv);
        }
        next
    }

    /// Parses and applies a single move token.
    pub fn apply_token(&self, token: &str) -> Result<CubeState, CubeError> {
        Ok(self.apply(token.parse()?))
    }

    /// Parses and applies a whitespace-separated sequence.
    ///
    /// Fails without producing a state if any token is malformed.
    pub fn apply_sequence(&self, sequence: &str) -> Result<CubeState, CubeError> {
        Ok(self.apply_all(&parse_sequence(sequence)?))
    }
}
