//! The 54-character facelet string exchanged with external solvers.
//!
//! Faces appear in U, R, F, D, L, B order, 9 characters each, and every
//! facelet is written as the letter of the face whose center shares its color.

use std::fmt;
use std::str::FromStr;

use crate::error::CubeError;
use crate::state::{CubeState, Face, FACELET_COUNT};

/// A validated facelet string.
///
/// Validation only checks the shape (length, alphabet, nine of each letter);
/// whether the configuration is solvable is for the consumer to decide.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FaceletString(String);

impl FaceletString {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&CubeState> for FaceletString {
    fn from(state: &CubeState) -> Self {
        let letters = state
            .facelets()
            .iter()
            .map(|&color| state.face_of_color(color).letter())
            .collect();
        FaceletString(letters)
    }
}

impl FromStr for FaceletString {
    type Err = CubeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let length = s.chars().count();
        if length != FACELET_COUNT {
            return Err(CubeError::FaceletLength(length));
        }

        let mut counts = [0usize; 6];
        for c in s.chars() {
            let face = Face::from_letter(c).ok_or(CubeError::FaceletCharacter(c))?;
            counts[face.index()] += 1;
        }

        if let Some(face) = Face::ALL.into_iter().find(|face| counts[face.index()] != 9) {
            return Err(CubeError::FaceletCount {
                letter: face.letter(),
                count: counts[face.index()],
            });
        }

        Ok(FaceletString(s.to_string()))
    }
}

impl fmt::Display for FaceletString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
