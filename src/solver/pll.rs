//! Permutation of the last layer.

use std::sync::LazyLock;

use rustc_hash::FxHashMap;

use crate::error::Defect;
use crate::moves::{invert_sequence, Move};
use crate::state::{CubeState, Face, SOLVED};

use super::algorithms::{fallback, parse_set, PLL_ALGORITHMS, PLL_FALLBACK};
use super::oll::{OrientLastLayer, TOP_LAYER};
use super::{Progress, SolveStep, Stage, StageKind};

/// Colors of the twelve side facelets of the U layer, four bits each.
fn permutation_key(state: &CubeState) -> u64 {
    TOP_LAYER
        .iter()
        .filter(|&&i| Face::of_facelet(i) != Face::Up)
        .fold(0, |key, &i| key << 4 | state.facelet(i).index() as u64)
}

struct PllCase {
    name: &'static str,
    moves: Vec<Move>,
}

fn up_turn(quarters: u8) -> Option<Move> {
    Move::quarters(Face::Up, quarters)
}

/// Pattern lookup for every oriented last layer: bare U adjustments first,
/// then each algorithm between a pre- and post-adjustment.
static PLL_TABLE: LazyLock<FxHashMap<u64, PllCase>> = LazyLock::new(|| {
    let mut table = FxHashMap::default();
    let mut insert = |name: &'static str, moves: Vec<Move>| {
        let key = permutation_key(&SOLVED.apply_all(&invert_sequence(&moves)));
        table.entry(key).or_insert(PllCase { name, moves });
    };

    for quarters in 1..4 {
        insert("AUF", up_turn(quarters).into_iter().collect());
    }
    for (name, algorithm) in parse_set(&PLL_ALGORITHMS) {
        for before in 0..4 {
            for after in 0..4 {
                let moves = up_turn(before)
                    .into_iter()
                    .chain(algorithm.iter().copied())
                    .chain(up_turn(after))
                    .collect();
                insert(name, moves);
            }
        }
    }
    log::debug!("PLL table has {} patterns", table.len());
    table
});

/// Permutes the oriented last layer into the solved cube.
pub struct PermuteLastLayer;

impl Stage for PermuteLastLayer {
    fn kind(&self) -> StageKind {
        StageKind::Pll
    }

    fn is_complete(&self, state: &CubeState) -> bool {
        state.is_solved()
    }

    fn next_step(&self, state: &CubeState) -> Result<Progress, Defect> {
        if !state.first_two_layers_solved() || !OrientLastLayer.is_complete(state) {
            return Err(Defect::CaseUnmatched {
                stage: StageKind::Pll,
                detail: "a cube whose last layer is not oriented".to_string(),
            });
        }

        let key = permutation_key(state);
        match PLL_TABLE.get(&key) {
            Some(case) => Ok(Progress::Step(SolveStep {
                stage: StageKind::Pll,
                case: case.name.to_string(),
                moves: case.moves.clone(),
            })),
            None => {
                log::warn!("No PLL case for pattern {key:#014x}, applying T-perm");
                Ok(Progress::Setup(
                    SolveStep {
                        stage: StageKind::Pll,
                        case: "T (setup)".to_string(),
                        moves: fallback(PLL_FALLBACK),
                    },
                    Defect::CaseUnmatched {
                        stage: StageKind::Pll,
                        detail: format!("permutation pattern {key:#014x}"),
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
    fn test_table_covers_every_permutation() {
        // 4! * 4! / 2 last-layer permutations, less the solved one
        assert_eq!(PLL_TABLE.len(), 287);
        assert!(!PLL_TABLE.contains_key(&permutation_key(&SOLVED)));
    }

    #[test]
    fn test_misaligned_layer_needs_only_auf() {
        let mut state = SOLVED.apply_sequence("U2").unwrap();
        let outcome = Solver::new(SolverConfig::default()).run_stage(StageKind::Pll, &mut state);
        assert!(state.is_solved());
        assert_eq!(outcome.steps.len(), 1);
        assert_eq!(outcome.steps[0].case, "AUF");
        assert_eq!(outcome.steps[0].moves, parse_sequence("U2").unwrap());
    }

    #[test]
    fn test_t_perm_is_recognized() {
        let t_perm = parse_sequence("R U R' U' R' F R2 U' R' U' R U R' F'").unwrap();
        let mut state = SOLVED.apply_all(&t_perm);
        let outcome = Solver::new(SolverConfig::default()).run_stage(StageKind::Pll, &mut state);
        assert!(outcome.defects.is_empty(), "{:?}", outcome.defects);
        assert!(state.is_solved());
        assert_eq!(outcome.steps.len(), 1);
    }

    #[test]
    fn test_every_algorithm_solves_in_one_step() {
        let solver = Solver::new(SolverConfig::default());
        for (name, algorithm) in parse_set(&PLL_ALGORITHMS) {
            let mut state = SOLVED.apply_all(&invert_sequence(&algorithm));
            let outcome = solver.run_stage(StageKind::Pll, &mut state);
            assert!(state.is_solved(), "{name} left the cube unsolved");
            assert_eq!(outcome.steps.len(), 1, "{name}");
        }
    }

    #[test]
    fn test_unoriented_layer_is_rejected() {
        let state = SOLVED.apply_sequence("F R U R' U' F'").unwrap();
        assert!(PermuteLastLayer.next_step(&state).is_err());
    }
}
