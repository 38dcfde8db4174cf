//! Cross: the four D-layer edges, one at a time.
//!
//! Every emitted sequence leaves the other D-layer edges where they are, so
//! edges can be placed in any order without undoing earlier work.

use crate::error::Defect;
use crate::moves::{track, Move};
use crate::state::{CubeState, Face};

use super::pieces::{edge_facelet, find_edge};
use super::{Progress, SolveStep, Stage, StageKind};

/// Side faces in the order their cross edges are placed.
const CROSS_FACES: [Face; 4] = [Face::Front, Face::Right, Face::Back, Face::Left];

/// Where a cross edge currently sits relative to its target.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum CrossCase {
    /// In the D layer but in the wrong slot or flipped; lifted by a half
    /// turn of the side face it touches.
    Bottom(Face),
    /// In the middle layer; lifted by the conjugate of U by the slot's
    /// right-hand face.
    Middle(Face),
    /// In the U layer but not above its target face.
    Misaligned(u8),
    /// Above its target with the cross color facing up.
    Upright,
    /// Above its target with the cross color facing sideways.
    Flipped,
}

impl CrossCase {
    fn label(self) -> &'static str {
        match self {
            CrossCase::Bottom(_) => "lift from bottom layer",
            CrossCase::Middle(_) => "lift from middle layer",
            CrossCase::Misaligned(_) => "align over center",
            CrossCase::Upright => "insert upright",
            CrossCase::Flipped => "insert flipped",
        }
    }

    fn moves(self, target: Face) -> Vec<Move> {
        match self {
            CrossCase::Bottom(face) => vec![Move::double(face)],
            CrossCase::Middle(right) => {
                vec![Move::cw(right), Move::cw(Face::Up), Move::ccw(right)]
            }
            CrossCase::Misaligned(quarters) => {
                Move::quarters(Face::Up, quarters).into_iter().collect()
            }
            CrossCase::Upright => vec![Move::double(target)],
            CrossCase::Flipped => {
                let right = target.right_neighbor();
                vec![
                    Move::ccw(Face::Up),
                    Move::ccw(right),
                    Move::cw(target),
                    Move::cw(right),
                ]
            }
        }
    }
}

/// Number of clockwise U turns that carry the facelet at `index` onto `target`.
fn up_turns_onto(index: usize, target: Face) -> u8 {
    let mut i = index;
    for quarters in 0..4 {
        if Face::of_facelet(i) == target {
            return quarters;
        }
        i = track(i, Move::cw(Face::Up));
    }
    0
}

/// Returns true if the edge between D and `side` is solved.
fn edge_placed(state: &CubeState, side: Face) -> bool {
    match (edge_facelet(Face::Down, side), edge_facelet(side, Face::Down)) {
        (Some(down), Some(on_side)) => {
            state.facelet(down) == state.center_color(Face::Down)
                && state.facelet(on_side) == state.center_color(side)
        }
        _ => false,
    }
}

fn classify(state: &CubeState, target: Face) -> Result<CrossCase, Defect> {
    let down = state.center_color(Face::Down);
    let (cross_sticker, side_sticker) = find_edge(state, down, state.center_color(target))
        .ok_or_else(|| Defect::CaseUnmatched {
            stage: StageKind::Cross,
            detail: format!("missing D{target} edge"),
        })?;

    let cross_face = Face::of_facelet(cross_sticker);
    let side_face = Face::of_facelet(side_sticker);

    if cross_face == Face::Down || side_face == Face::Down {
        let side = if cross_face == Face::Down { side_face } else { cross_face };
        return Ok(CrossCase::Bottom(side));
    }

    if cross_face != Face::Up && side_face != Face::Up {
        let right = if cross_face.right_neighbor() == side_face {
            side_face
        } else {
            cross_face
        };
        return Ok(CrossCase::Middle(right));
    }

    // in the U layer: the sticker not on U decides alignment
    let outer = if cross_face == Face::Up { side_sticker } else { cross_sticker };
    match up_turns_onto(outer, target) {
        0 if cross_face == Face::Up => Ok(CrossCase::Upright),
        0 => Ok(CrossCase::Flipped),
        quarters => Ok(CrossCase::Misaligned(quarters)),
    }
}

/// Builds the cross on the D face.
pub struct Cross;

impl Stage for Cross {
    fn kind(&self) -> StageKind {
        StageKind::Cross
    }

    fn is_complete(&self, state: &CubeState) -> bool {
        CROSS_FACES.iter().all(|&side| edge_placed(state, side))
    }

    fn next_step(&self, state: &CubeState) -> Result<Progress, Defect> {
        let Some(target) = CROSS_FACES
            .into_iter()
            .find(|&side| !edge_placed(state, side))
        else {
            return Err(Defect::CaseUnmatched {
                stage: StageKind::Cross,
                detail: "no unplaced cross edge".to_string(),
            });
        };

        let case = classify(state, target)?;
        Ok(Progress::Step(SolveStep {
            stage: StageKind::Cross,
            case: format!("D{target} edge: {}", case.label()),
            moves: case.moves(target),
        }))
    }
}
