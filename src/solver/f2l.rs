//! First two layers: one corner/edge pair per slot.
//!
//! Each slot has a case table keyed by where its corner's D sticker and its
//! edge's left sticker currently are. The tables are filled once by a
//! breadth-first search from the solved pair over slot-safe sequences: U
//! turns and the conjugates `R U R'` / `F' U F` of the slot's two faces (shown
//! for the FR slot). Those sequences only ever touch the U layer and the slot
//! itself, so the cross and the other slots survive every case.

use std::collections::VecDeque;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::error::Defect;
use crate::geometry::in_top_layer;
use crate::moves::{invert_sequence, track_all, Move, Turn};
use crate::state::{CubeState, Face, SOLVED};

use super::pieces::{find_corner, find_edge};
use super::{Progress, SolveStep, Stage, StageKind};

/// Case key: (corner D-sticker facelet, edge left-sticker facelet).
type PairKey = (u8, u8);

/// An F2L slot, named by its two side faces as seen from outside with the
/// slot between them: `left` then `right`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Slot {
    left: Face,
    right: Face,
    /// Corner stickers (D, left, right) then edge stickers (left, right).
    stickers: [u8; 5],
}

const SLOTS: [Slot; 4] = [
    Slot { left: Face::Front, right: Face::Right, stickers: [29, 26, 15, 23, 12] },
    Slot { left: Face::Right, right: Face::Back, stickers: [35, 17, 51, 14, 48] },
    Slot { left: Face::Back, right: Face::Left, stickers: [33, 53, 42, 50, 39] },
    Slot { left: Face::Left, right: Face::Front, stickers: [27, 44, 24, 41, 21] },
];

impl Slot {
    #[inline]
    fn facelets(self) -> [usize; 5] {
        self.stickers.map(usize::from)
    }

    fn home_key(self) -> PairKey {
        (self.stickers[0], self.stickers[3])
    }

    fn owns(self, index: usize) -> bool {
        self.facelets().contains(&index)
    }

    fn is_solved(self, state: &CubeState) -> bool {
        self.facelets()
            .iter()
            .all(|&i| state.facelet(i) == SOLVED.facelet(i))
    }

    /// Lifts whatever sits in this slot into the U layer.
    fn extraction(self) -> Vec<Move> {
        vec![Move::cw(self.right), Move::cw(Face::Up), Move::ccw(self.right)]
    }

    /// Sequences that move only the U layer and this slot.
    fn generators(self) -> Vec<Vec<Move>> {
        let mut generators: Vec<Vec<Move>> = Turn::ALL
            .into_iter()
            .map(|turn| vec![Move::new(Face::Up, turn)])
            .collect();
        for turn in Turn::ALL {
            generators.push(vec![
                Move::cw(self.right),
                Move::new(Face::Up, turn),
                Move::ccw(self.right),
            ]);
        }
        for turn in Turn::ALL {
            generators.push(vec![
                Move::ccw(self.left),
                Move::new(Face::Up, turn),
                Move::cw(self.left),
            ]);
        }
        generators
    }
}

/// Breadth-first search from the solved pair, recording for every reachable
/// key the generator sequence that brings the pair home.
fn build_slot_table(slot: Slot) -> FxHashMap<PairKey, Vec<Move>> {
    let generators = slot.generators();
    let inverses: Vec<Vec<Move>> = generators.iter().map(|g| invert_sequence(g)).collect();

    let goal = slot.home_key();
    let mut paths: FxHashMap<PairKey, Vec<Move>> = FxHashMap::default();
    paths.insert(goal, Vec::new());
    let mut queue = VecDeque::from([goal]);

    while let Some(key) = queue.pop_front() {
        for (generator, inverse) in generators.iter().zip(&inverses) {
            let previous = (
                track_all(key.0 as usize, inverse) as u8,
                track_all(key.1 as usize, inverse) as u8,
            );
            if paths.contains_key(&previous) {
                continue;
            }
            let mut path = generator.clone();
            path.extend_from_slice(&paths[&key]);
            paths.insert(previous, path);
            queue.push_back(previous);
        }
    }

    log::debug!("F2L table for {}{} slot has {} cases", slot.left, slot.right, paths.len());
    paths
}

static SLOT_TABLES: LazyLock<Vec<FxHashMap<PairKey, Vec<Move>>>> =
    LazyLock::new(|| SLOTS.iter().map(|&slot| build_slot_table(slot)).collect());

/// Describes a pair for the step label.
fn describe(state: &CubeState, corner: [usize; 3], edge: (usize, usize)) -> &'static str {
    match (in_top_layer(corner[0]), in_top_layer(edge.0)) {
        (true, true) => {
            // paired when every edge sticker has a same-colored corner
            // sticker beside it on the same face
            let paired = [edge.0, edge.1].iter().all(|&e| {
                corner.iter().any(|&c| {
                    Face::of_facelet(c) == Face::of_facelet(e) && state.facelet(c) == state.facelet(e)
                })
            });
            if paired {
                "paired in top layer"
            } else {
                "split in top layer"
            }
        }
        (true, false) => "corner in top layer, edge in slot",
        (false, true) => "corner in slot, edge in top layer",
        (false, false) => "corner and edge in slot",
    }
}

/// Pairs each bottom corner with its middle-layer edge and inserts it.
pub struct FirstTwoLayers;

impl FirstTwoLayers {
    fn slot_step(state: &CubeState, index: usize, slot: Slot) -> Result<Progress, Defect> {
        let unmatched = |detail: String| Defect::CaseUnmatched {
            stage: StageKind::F2l,
            detail,
        };
        let slot_name = format!("{}{}", slot.left, slot.right);

        let down = state.center_color(Face::Down);
        let left = state.center_color(slot.left);
        let right = state.center_color(slot.right);
        let corner = find_corner(state, [down, left, right])
            .ok_or_else(|| unmatched(format!("missing {slot_name} corner")))?;
        let edge = find_edge(state, left, right)
            .ok_or_else(|| unmatched(format!("missing {slot_name} edge")))?;

        // a piece trapped in another slot has to come up first
        for stuck in [corner[0], edge.0] {
            if in_top_layer(stuck) || slot.owns(stuck) {
                continue;
            }
            let holder = SLOTS
                .into_iter()
                .find(|other| other.owns(stuck))
                .ok_or_else(|| unmatched(format!("{slot_name} piece outside every slot")))?;
            return Ok(Progress::Step(SolveStep {
                stage: StageKind::F2l,
                case: format!(
                    "{slot_name} pair: extract from {}{} slot",
                    holder.left, holder.right
                ),
                moves: holder.extraction(),
            }));
        }

        let key = (corner[0] as u8, edge.0 as u8);
        let moves = SLOT_TABLES[index]
            .get(&key)
            .ok_or_else(|| unmatched(format!("{slot_name} pair at {key:?}")))?;
        Ok(Progress::Step(SolveStep {
            stage: StageKind::F2l,
            case: format!("{slot_name} pair: {}", describe(state, corner, edge)),
            moves: moves.clone(),
        }))
    }
}

impl Stage for FirstTwoLayers {
    fn kind(&self) -> StageKind {
        StageKind::F2l
    }

    fn is_complete(&self, state: &CubeState) -> bool {
        state.first_two_layers_solved()
    }

    fn next_step(&self, state: &CubeState) -> Result<Progress, Defect> {
        match SLOTS
            .into_iter()
            .enumerate()
            .find(|(_, slot)| !slot.is_solved(state))
        {
            Some((index, slot)) => Self::slot_step(state, index, slot),
            None => Err(Defect::CaseUnmatched {
                stage: StageKind::F2l,
                detail: "all slots filled but the cross is incomplete".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_sequence;
    use crate::solver::cross::Cross;
    use crate::solver::{Solver, SolverConfig};

    #[test]
    fn test_slot_stickers_match_home_pieces() {
        use crate::solver::pieces::edge_facelet;

        let state = CubeState::solved();
        for slot in SLOTS {
            let [down, left, right, edge_left, edge_right] = slot.facelets();
            let colors = [Face::Down, slot.left, slot.right].map(|face| state.center_color(face));
            assert_eq!(find_corner(&state, colors), Some([down, left, right]), "{slot:?}");
            assert_eq!(edge_facelet(slot.left, slot.right), Some(edge_left), "{slot:?}");
            assert_eq!(edge_facelet(slot.right, slot.left), Some(edge_right), "{slot:?}");
        }
    }

    #[test]
    fn test_generators_preserve_cross_and_other_slots() {
        for (index, slot) in SLOTS.into_iter().enumerate() {
            for generator in slot.generators() {
                let state = CubeState::solved().apply_all(&generator);
                assert!(Cross.is_complete(&state), "{generator:?} breaks the cross");
                for (other_index, other) in SLOTS.into_iter().enumerate() {
                    if other_index != index {
                        assert!(other.is_solved(&state), "{generator:?} breaks {other:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn test_tables_cover_every_top_and_slot_position() {
        // corner: 4 top positions or its own slot, 3 twists each
        // edge: 4 top positions or its own slot, 2 flips each
        for table in SLOT_TABLES.iter() {
            assert_eq!(table.len(), 15 * 10);
        }
    }

    #[test]
    fn test_table_paths_solve_their_case() {
        for (index, slot) in SLOTS.into_iter().enumerate() {
            for (&(corner, edge), path) in &SLOT_TABLES[index] {
                assert_eq!(
                    (
                        track_all(corner as usize, path) as u8,
                        track_all(edge as usize, path) as u8
                    ),
                    slot.home_key()
                );
            }
        }
    }

    #[test]
    fn test_describe_paired_pair() {
        // R U R' lifts the FR pair into the U layer as a connected pair
        let state = CubeState::solved().apply_sequence("R U R'").unwrap();
        let down = state.center_color(Face::Down);
        let front = state.center_color(Face::Front);
        let right = state.center_color(Face::Right);
        let corner = find_corner(&state, [down, front, right]).unwrap();
        let edge = find_edge(&state, front, right).unwrap();
        assert_eq!(describe(&state, corner, edge), "paired in top layer");
    }

    #[test]
    fn test_extracts_pieces_from_foreign_slots() {
        // the FR corner ends up in the RB slot
        let mut state = CubeState::solved()
            .apply_sequence("R U2 R' B U B'")
            .unwrap();
        let solver = Solver::new(SolverConfig::default());
        let outcome = solver.run_stage(StageKind::F2l, &mut state);
        assert!(outcome.defects.is_empty(), "{:?}", outcome.defects);
        assert_eq!(outcome.steps[0].case, "FR pair: extract from RB slot");
        assert_eq!(outcome.steps[0].moves, parse_sequence("B U B'").unwrap());
        assert!(state.first_two_layers_solved());
    }

    #[test]
    fn test_f2l_after_scrambles() {
        let solver = Solver::new(SolverConfig::default());
        for scramble in [
            "R U F' D2 L B R' U2 F D'",
            "D L2 B' U R2 F' D' L U2 B",
            "F2 R' D B2 L' U F R2 D' B' L2 U'",
        ] {
            let mut state = CubeState::solved().apply_sequence(scramble).unwrap();
            let cross = solver.run_stage(StageKind::Cross, &mut state);
            let f2l = solver.run_stage(StageKind::F2l, &mut state);
            assert!(cross.defects.is_empty() && f2l.defects.is_empty());
            assert!(state.first_two_layers_solved(), "F2L unsolved after {scramble}");
        }
    }
}
