//! Facelet representation of the cube.
//!
//! The state is a flat array of 54 colors, 9 per face, faces in U, R, F, D, L,
//! B order. Facelet `i` lives on face `i / 9` at row-major position `i % 9`.
//! Centers (position 4) never move under face turns, so the center color of a
//! face identifies it for the lifetime of the state.

use std::fmt;

/// Number of facelets on the cube.
pub const FACELET_COUNT: usize = 54;

/// Position of the center facelet within a face.
pub const CENTER: usize = 4;

/// One of the six faces, in facelet-string order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Face {
    Up,
    Right,
    Front,
    Down,
    Left,
    Back,
}

impl Face {
    /// All faces in facelet-string order.
    pub const ALL: [Face; 6] = [
        Face::Up,
        Face::Right,
        Face::Front,
        Face::Down,
        Face::Left,
        Face::Back,
    ];

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Face for an index in `0..6`; larger values saturate to `Back`.
    pub const fn from_index(index: usize) -> Face {
        match index {
            0 => Face::Up,
            1 => Face::Right,
            2 => Face::Front,
            3 => Face::Down,
            4 => Face::Left,
            _ => Face::Back,
        }
    }

    /// Face that holds the given facelet index.
    #[inline]
    pub const fn of_facelet(index: usize) -> Face {
        Face::from_index(index / 9)
    }

    /// Notation letter of the face.
    pub const fn letter(self) -> char {
        match self {
            Face::Up => 'U',
            Face::Right => 'R',
            Face::Front => 'F',
            Face::Down => 'D',
            Face::Left => 'L',
            Face::Back => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }

    /// Side face to the right of this one when looking at it from outside
    /// with U on top. Only meaningful for the four side faces.
    pub const fn right_neighbor(self) -> Face {
        match self {
            Face::Front => Face::Right,
            Face::Right => Face::Back,
            Face::Back => Face::Left,
            Face::Left => Face::Front,
            other => other,
        }
    }

    /// Facelet index of the center of this face.
    #[inline]
    pub const fn center(self) -> usize {
        self.index() * 9 + CENTER
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Sticker color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Yellow,
    Orange,
    Green,
    White,
    Red,
    Blue,
}

impl Color {
    /// Color of a face in the solved state (yellow up, green front).
    pub const fn home(face: Face) -> Color {
        match face {
            Face::Up => Color::Yellow,
            Face::Right => Color::Orange,
            Face::Front => Color::Green,
            Face::Down => Color::White,
            Face::Left => Color::Red,
            Face::Back => Color::Blue,
        }
    }

    /// Single-letter symbol used by the text net.
    pub const fn symbol(self) -> char {
        match self {
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Green => 'G',
            Color::White => 'W',
            Color::Red => 'R',
            Color::Blue => 'B',
        }
    }

    #[inline(always)]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// A full 54-facelet cube configuration.
///
/// `CubeState` is a plain value: it is `Copy`, compares structurally and can
/// only be changed through the move engine (see [`crate::moves`]), so every
/// state built by this crate is a legal cube configuration.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CubeState {
    pub(crate) facelets: [Color; FACELET_COUNT],
}

impl CubeState {
    /// The solved cube: every face monochrome in its home color.
    pub const fn solved() -> Self {
        let mut facelets = [Color::Yellow; FACELET_COUNT];
        let mut i = 0;
        while i < FACELET_COUNT {
            facelets[i] = Color::home(Face::of_facelet(i));
            i += 1;
        }
        Self { facelets }
    }

    /// Returns true iff every facelet matches the solved reference.
    pub fn is_solved(&self) -> bool {
        *self == SOLVED
    }

    /// Overwrites this state with the solved cube.
    pub fn reset(&mut self) {
        *self = SOLVED;
    }

    #[inline(always)]
    pub fn facelet(&self, index: usize) -> Color {
        self.facelets[index]
    }

    pub fn facelets(&self) -> &[Color; FACELET_COUNT] {
        &self.facelets
    }

    /// The nine facelets of a face, row-major.
    pub fn face(&self, face: Face) -> &[Color] {
        let start = face.index() * 9;
        &self.facelets[start..start + 9]
    }

    /// Color of a face's center, which identifies the face.
    #[inline]
    pub fn center_color(&self, face: Face) -> Color {
        self.facelets[face.center()]
    }

    /// Face whose center shows `color`.
    pub fn face_of_color(&self, color: Color) -> Face {
        Face::ALL
            .into_iter()
            .find(|&face| self.center_color(face) == color)
            .unwrap_or(Face::Up)
    }

    /// Number of facelets of each color, indexed by [`Color::index`].
    pub fn color_counts(&self) -> [usize; 6] {
        let mut counts = [0; 6];
        for color in self.facelets {
            counts[color.index()] += 1;
        }
        counts
    }

    /// Returns true if all facelets outside the U layer are solved.
    pub fn first_two_layers_solved(&self) -> bool {
        (0..FACELET_COUNT)
            .filter(|&i| !crate::geometry::in_top_layer(i))
            .all(|i| self.facelets[i] == SOLVED.facelets[i])
    }
}

/// Solved reference state.
pub const SOLVED: CubeState = CubeState::solved();

impl Default for CubeState {
    fn default() -> Self {
        SOLVED
    }
}

impl fmt::Debug for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbols: String = self.facelets.iter().map(|c| c.symbol()).collect();
        f.debug_tuple("CubeState").field(&symbols).finish()
    }
}

/// Renders the unfolded net: U on top, then L F R B, then D.
///
/// ```text
///     YYY
///     YYY
///     YYY
/// RRR GGG OOO BBB
/// RRR GGG OOO BBB
/// RRR GGG OOO BBB
///     WWW
///     WWW
///     WWW
/// ```
impl fmt::Display for CubeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let row = |face: Face, r: usize| -> String {
            self.face(face)[r * 3..r * 3 + 3]
                .iter()
                .map(|c| c.symbol())
                .collect()
        };

        let mut lines = Vec::with_capacity(9);
        for r in 0..3 {
            lines.push(format!("    {}", row(Face::Up, r)));
        }
        for r in 0..3 {
            let band: Vec<String> = [Face::Left, Face::Front, Face::Right, Face::Back]
                .into_iter()
                .map(|face| row(face, r))
                .collect();
            lines.push(band.join(" "));
        }
        for r in 0..3 {
            lines.push(format!("    {}", row(Face::Down, r)));
        }

        write!(f, "{}", lines.join("\n"))
    }
}
