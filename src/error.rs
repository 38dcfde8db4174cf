//! Error and diagnostic types.
//!
//! [`CubeError`] covers malformed input and fails fast. [`Defect`] is never
//! returned as an error: solver gaps are collected on the [`crate::Solution`]
//! and logged, so callers always receive a best-effort move list.

use thiserror::Error;

use crate::solver::StageKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CubeError {
    #[error("Invalid move token {0:?}, expected one of U D F B L R with an optional ' or 2 suffix")]
    InvalidMoveToken(String),
    #[error("Facelet string must have 54 characters but has {0}")]
    FaceletLength(usize),
    #[error("Invalid facelet character {0:?}, expected one of U R F D L B")]
    FaceletCharacter(char),
    #[error("Facelet {letter} appears {count} times, expected 9")]
    FaceletCount { letter: char, count: usize },
}

/// A non-fatal solver diagnostic.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Defect {
    /// A stage could not classify the current state.
    #[error("{stage} found no case for {detail}")]
    CaseUnmatched { stage: StageKind, detail: String },
    /// A stage emitted its maximum number of steps without completing.
    #[error("{stage} stopped after {steps} steps without completing")]
    CeilingReached { stage: StageKind, steps: usize },
    /// The pipeline finished but the cube it worked on is not solved.
    #[error("Cube is not solved after all stages: {facelets}")]
    ResidualUnsolved { facelets: String },
}
