//! Orientation of the last layer.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::error::Defect;
use crate::geometry::in_top_layer;
use crate::moves::{invert_sequence, Move};
use crate::state::{CubeState, Face, FACELET_COUNT, SOLVED};

use super::algorithms::{fallback, parse_set, OLL_ALGORITHMS, OLL_FALLBACK};
use super::{Progress, SolveStep, Stage, StageKind};

/// The 20 facelets of the U layer other than the U center, in index order.
pub(super) static TOP_LAYER: LazyLock<Vec<usize>> = LazyLock::new(|| {
    (0..FACELET_COUNT)
        .filter(|&i| in_top_layer(i) && i != Face::Up.center())
        .collect()
});

/// Bit `n` is set when the `n`th top-layer facelet shows the U color.
fn orientation_key(state: &CubeState) -> u32 {
    let up = state.center_color(Face::Up);
    TOP_LAYER
        .iter()
        .enumerate()
        .filter(|&(_, &i)| state.facelet(i) == up)
        .fold(0, |key, (bit, _)| key | 1 << bit)
}

struct OllCase {
    name: &'static str,
    moves: Vec<Move>,
}

/// Pattern lookup covering each algorithm under all four pre-rotations of U.
static OLL_TABLE: LazyLock<FxHashMap<u32, OllCase>> = LazyLock::new(|| {
    let mut table = FxHashMap::default();
    for (name, algorithm) in parse_set(&OLL_ALGORITHMS) {
        for quarters in 0..4 {
            let mut moves: Vec<Move> = Move::quarters(Face::Up, quarters).into_iter().collect();
            moves.extend_from_slice(&algorithm);
            let key = orientation_key(&SOLVED.apply_all(&invert_sequence(&moves)));
            table.entry(key).or_insert(OllCase { name, moves });
        }
    }
    log::debug!("OLL table has {} patterns", table.len());
    table
});

/// Turns the whole U face to the U color without disturbing the first two
/// layers.
pub struct OrientLastLayer;

impl Stage for OrientLastLayer {
    fn kind(&self) -> StageKind {
        StageKind::Oll
    }

    fn is_complete(&self, state: &CubeState) -> bool {
        let up = state.center_color(Face::Up);
        state.face(Face::Up).iter().all(|&c| c == up)
    }

    fn next_step(&self, state: &CubeState) -> Result<Progress, Defect> {
        if !state.first_two_layers_solved() {
            return Err(Defect::CaseUnmatched {
                stage: StageKind::Oll,
                detail: "a cube whose first two layers are unsolved".to_string(),
            });
        }

        let key = orientation_key(state);
        match OLL_TABLE.get(&key) {
            Some(case) => Ok(Progress::Step(SolveStep {
                stage: StageKind::Oll,
                case: case.name.to_string(),
                moves: case.moves.clone(),
            })),
            None => {
                log::warn!("No OLL case for pattern {key:#07x}, applying Sune");
                Ok(Progress::Setup(
                    SolveStep {
                        stage: StageKind::Oll,
                        case: "Sune (setup)".to_string(),
                        moves: fallback(OLL_FALLBACK),
                    },
                    Defect::CaseUnmatched {
                        stage: StageKind::Oll,
                        detail: format!("orientation pattern {key:#07x}"),
                    },
                ))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moves::parse_sequence;
    use crate::solver::{Solver, SolverConfig};

    #[test]
    fn test_top_layer_has_twenty_facelets() {
        assert_eq!(TOP_LAYER.len(), 20);
        assert_eq!(orientation_key(&SOLVED).count_ones(), 8);
    }

    #[test]
    fn test_table_covers_every_orientation() {
        // 216 reachable patterns with F2L solved, one of them the solved one
        assert_eq!(OLL_TABLE.len(), 215);
        assert!(!OLL_TABLE.contains_key(&orientation_key(&SOLVED)));
    }

    #[test]
    fn test_single_look_after_sune() {
        let mut state = SOLVED.apply_all(&invert_sequence(
            &parse_sequence("R U R' U R U2 R'").unwrap(),
        ));
        let outcome = Solver::new(SolverConfig::default()).run_stage(StageKind::Oll, &mut state);
        assert!(outcome.defects.is_empty(), "{:?}", outcome.defects);
        assert_eq!(outcome.steps.len(), 1);
        assert!(OrientLastLayer.is_complete(&state));
        assert!(state.first_two_layers_solved());
    }

    #[test]
    fn test_every_algorithm_is_recognized_under_auf() {
        for (name, algorithm) in parse_set(&OLL_ALGORITHMS) {
            for quarters in 0..4 {
                let setup: Vec<Move> = invert_sequence(&algorithm)
                    .into_iter()
                    .chain(Move::quarters(Face::Up, quarters))
                    .collect();
                let mut state = SOLVED.apply_all(&setup);
                let outcome =
                    Solver::new(SolverConfig::default()).run_stage(StageKind::Oll, &mut state);
                assert!(outcome.defects.is_empty(), "{name}: {:?}", outcome.defects);
                assert!(OrientLastLayer.is_complete(&state), "{name} with U{quarters}");
            }
        }
    }

    #[test]
    fn test_unsolved_first_two_layers_are_rejected() {
        let state = SOLVED.apply_sequence("R").unwrap();
        assert!(matches!(
            OrientLastLayer.next_step(&state),
            Err(Defect::CaseUnmatched { stage: StageKind::Oll, .. })
        ));
    }
}
