//! CFOP solver.
//!
//! Each stage inspects the cube, recognizes a case and emits the moves for
//! it, repeatedly, until its goal holds. Stages run in a fixed order on a
//! private copy of the input: Cross, F2L, OLL, PLL.
//!
//! Recognition gaps never abort a solve. A stage that cannot classify its
//! state, or that exhausts its step ceiling, records a [`Defect`] and hands
//! over to the next stage; the caller always gets a best-effort move list.

mod algorithms;
mod cross;
mod f2l;
mod oll;
mod pieces;
mod pll;

use std::fmt;

use crate::error::Defect;
use crate::facelets::FaceletString;
use crate::moves::{format_sequence, Move};
use crate::state::CubeState;

use cross::Cross;
use f2l::FirstTwoLayers;
use oll::OrientLastLayer;
use pll::PermuteLastLayer;

/// Default maximum number of steps a single stage may emit.
pub const DEFAULT_STEP_LIMIT: usize = 64;

/// The four CFOP stages, in solving order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StageKind {
    Cross,
    F2l,
    Oll,
    Pll,
}

impl StageKind {
    pub const ALL: [StageKind; 4] = [
        StageKind::Cross,
        StageKind::F2l,
        StageKind::Oll,
        StageKind::Pll,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            StageKind::Cross => "Cross",
            StageKind::F2l => "F2L",
            StageKind::Oll => "OLL",
            StageKind::Pll => "PLL",
        }
    }
}

impl fmt::Display for StageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

/// One recognized case and the moves emitted for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveStep {
    pub stage: StageKind,
    /// Human-readable case label.
    pub case: String,
    pub moves: Vec<Move>,
}

impl fmt::Display for SolveStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<5} {:<40} {}", self.stage, self.case, format_sequence(&self.moves))
    }
}

/// What a stage wants done next.
pub(crate) enum Progress {
    /// A recognized case.
    Step(SolveStep),
    /// No case matched; the step is a setup move that should turn the state
    /// into a recognizable one.
    Setup(SolveStep, Defect),
}

/// A single CFOP stage.
pub(crate) trait Stage {
    fn kind(&self) -> StageKind;

    /// Returns true if the stage's goal holds for `state`.
    fn is_complete(&self, state: &CubeState) -> bool;

    /// Classifies `state` and returns the next step towards the goal.
    ///
    /// Only called while the goal does not hold. An `Err` stops the stage.
    fn next_step(&self, state: &CubeState) -> Result<Progress, Defect>;
}

/// Tuning knobs for a [`Solver`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverConfig {
    /// Maximum number of steps per stage before it is abandoned.
    pub step_limit: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            step_limit: DEFAULT_STEP_LIMIT,
        }
    }
}

/// Steps and defects produced by running one stage.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StageOutcome {
    pub steps: Vec<SolveStep>,
    pub defects: Vec<Defect>,
}

/// Result of a full solve.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Solution {
    /// Steps of all stages, in the order they were applied.
    pub steps: Vec<SolveStep>,
    pub defects: Vec<Defect>,
}

impl Solution {
    /// All emitted moves, concatenated in stage order.
    pub fn moves(&self) -> Vec<Move> {
        self.steps.iter().flat_map(|step| step.moves.iter().copied()).collect()
    }

    pub fn move_count(&self) -> usize {
        self.steps.iter().map(|step| step.moves.len()).sum()
    }

    /// Number of moves emitted by one stage.
    pub fn stage_moves(&self, kind: StageKind) -> usize {
        self.steps
            .iter()
            .filter(|step| step.stage == kind)
            .map(|step| step.moves.len())
            .sum()
    }

    /// Returns true if the moves did not solve the cube they were computed on.
    pub fn residual_unsolved(&self) -> bool {
        self.defects
            .iter()
            .any(|defect| matches!(defect, Defect::ResidualUnsolved { .. }))
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{step}")?;
        }
        let counts: Vec<String> = StageKind::ALL
            .iter()
            .map(|&kind| format!("{kind} {}", self.stage_moves(kind)))
            .collect();
        write!(f, "{} moves ({})", self.move_count(), counts.join(", "))?;
        for defect in &self.defects {
            write!(f, "\nwarning: {defect}")?;
        }
        Ok(())
    }
}

fn stage(kind: StageKind) -> &'static dyn Stage {
    match kind {
        StageKind::Cross => &Cross,
        StageKind::F2l => &FirstTwoLayers,
        StageKind::Oll => &OrientLastLayer,
        StageKind::Pll => &PermuteLastLayer,
    }
}

/// Runs the CFOP stages in order.
///
/// A `Solver` holds only its configuration; the case tables behind the
/// stages are shared and built on first use.
#[derive(Clone, Copy, Debug, Default)]
pub struct Solver {
    config: SolverConfig,
}

impl Solver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Runs one stage on `state` until its goal holds, a case goes
    /// unrecognized, or the step limit is reached. `state` is left where the
    /// stage stopped.
    pub fn run_stage(&self, kind: StageKind, state: &mut CubeState) -> StageOutcome {
        self.drive(stage(kind), state)
    }

    fn drive(&self, stage: &dyn Stage, state: &mut CubeState) -> StageOutcome {
        let kind = stage.kind();
        let mut outcome = StageOutcome::default();

        while !stage.is_complete(state) {
            if outcome.steps.len() >= self.config.step_limit {
                log::warn!(
                    "{kind} gave up after {} steps on {}",
                    outcome.steps.len(),
                    FaceletString::from(&*state)
                );
                outcome.defects.push(Defect::CeilingReached {
                    stage: kind,
                    steps: outcome.steps.len(),
                });
                break;
            }

            let step = match stage.next_step(state) {
                Ok(Progress::Step(step)) => step,
                Ok(Progress::Setup(step, defect)) => {
                    outcome.defects.push(defect);
                    step
                }
                Err(defect) => {
                    log::warn!("{defect} on {}", FaceletString::from(&*state));
                    outcome.defects.push(defect);
                    break;
                }
            };

            log::trace!("{kind}: {} -> {}", step.case, format_sequence(&step.moves));
            *state = state.apply_all(&step.moves);
            outcome.steps.push(step);
        }

        log::debug!(
            "{kind} finished in {} steps, {} moves",
            outcome.steps.len(),
            outcome.steps.iter().map(|step| step.moves.len()).sum::<usize>()
        );
        outcome
    }

    /// Solves a copy of `state`; the caller's state is never touched.
    pub fn solve(&self, state: &CubeState) -> Solution {
        let mut work = *state;
        let mut solution = Solution::default();

        for kind in StageKind::ALL {
            let outcome = self.run_stage(kind, &mut work);
            solution.steps.extend(outcome.steps);
            solution.defects.extend(outcome.defects);
        }

        if !work.is_solved() {
            let facelets = FaceletString::from(&work).to_string();
            log::warn!(
                "Solve left the cube unsolved. Input: {}, result: {facelets}",
                FaceletString::from(state)
            );
            solution.defects.push(Defect::ResidualUnsolved { facelets });
        }
        solution
    }
}

/// Solves a copy of `state` with the default configuration and returns the
/// moves to apply to it.
pub fn solve(state: &CubeState) -> Vec<Move> {
    Solver::default().solve(state).moves()
}

#[cfg(test)]
mod tests {
    use super::algorithms::{fallback, PLL_FALLBACK};
    use super::*;
    use crate::scramble::{ScrambleHistory, Scrambler, DEFAULT_SCRAMBLE_LENGTH};

    /// A last-layer stage that recognizes nothing and answers every state
    /// with a T-perm setup.
    struct Unrecognized;

    impl Stage for Unrecognized {
        fn kind(&self) -> StageKind {
            StageKind::Pll
        }

        fn is_complete(&self, state: &CubeState) -> bool {
            state.is_solved()
        }

        fn next_step(&self, _state: &CubeState) -> Result<Progress, Defect> {
            Ok(Progress::Setup(
                SolveStep {
                    stage: StageKind::Pll,
                    case: "T-perm (setup)".to_string(),
                    moves: fallback(PLL_FALLBACK),
                },
                Defect::CaseUnmatched {
                    stage: StageKind::Pll,
                    detail: "unknown pattern".to_string(),
                },
            ))
        }
    }

    #[test_log::test]
    fn test_scramble_then_solve() {
        let solver = Solver::default();
        let mut scrambler = Scrambler::with_seed(2024);
        for _ in 0..100 {
            let mut history = ScrambleHistory::new();
            let scrambled =
                scrambler.scramble(CubeState::solved(), DEFAULT_SCRAMBLE_LENGTH, &mut history);
            let solution = solver.solve(&scrambled);
            assert!(
                solution.defects.is_empty(),
                "Scramble {history} produced {:?}",
                solution.defects
            );
            assert!(
                scrambled.apply_all(&solution.moves()).is_solved(),
                "Scramble {history} was not solved"
            );
        }
    }

    #[test]
    fn test_solve_leaves_input_untouched() {
        let scrambled = CubeState::solved()
            .apply_sequence("R U2 F' L D B2 R' U")
            .unwrap();
        let copy = scrambled;
        let moves = solve(&scrambled);
        assert_eq!(scrambled, copy);
        assert!(scrambled.apply_all(&moves).is_solved());
    }

    #[test]
    fn test_solved_cube_needs_no_moves() {
        let solution = Solver::default().solve(&CubeState::solved());
        assert!(solution.steps.is_empty());
        assert!(solution.defects.is_empty());
        assert_eq!(solution.move_count(), 0);
    }

    #[test]
    fn test_completed_stages_are_noops() {
        let solver = Solver::default();
        for kind in StageKind::ALL {
            let mut state = CubeState::solved();
            let outcome = solver.run_stage(kind, &mut state);
            assert!(outcome.steps.is_empty(), "{kind} emitted steps");
        }
    }

    #[test]
    fn test_stage_move_counts_add_up() {
        let scrambled = CubeState::solved()
            .apply_sequence("D2 F R' B U L2 F' D R2 U'")
            .unwrap();
        let solution = Solver::default().solve(&scrambled);
        let per_stage: usize = StageKind::ALL
            .iter()
            .map(|&kind| solution.stage_moves(kind))
            .sum();
        assert_eq!(per_stage, solution.move_count());
        assert_eq!(solution.moves().len(), solution.move_count());
        assert!(!solution.residual_unsolved());
    }

    #[test_log::test]
    fn test_step_limit_reports_ceiling() {
        let solver = Solver::new(SolverConfig { step_limit: 1 });
        let scrambled = CubeState::solved()
            .apply_sequence("R U F' D2 L B R' U2 F D'")
            .unwrap();
        let solution = solver.solve(&scrambled);
        assert!(solution
            .defects
            .iter()
            .any(|defect| matches!(defect, Defect::CeilingReached { .. })));
        assert!(solution.residual_unsolved());
    }

    #[test]
    fn test_later_stage_reports_unmet_precondition() {
        // OLL refuses to run while F2L is broken
        let mut state = CubeState::solved().apply_sequence("R").unwrap();
        let outcome = Solver::default().run_stage(StageKind::Oll, &mut state);
        assert!(outcome.steps.is_empty());
        assert!(matches!(
            outcome.defects.as_slice(),
            [Defect::CaseUnmatched { stage: StageKind::Oll, .. }]
        ));
    }

    #[test_log::test]
    fn test_setup_step_is_applied_and_recorded() {
        let t_perm = fallback(PLL_FALLBACK);
        let mut state = CubeState::solved().apply_all(&t_perm);
        let outcome = Solver::default().drive(&Unrecognized, &mut state);

        assert!(state.is_solved());
        assert_eq!(outcome.steps.len(), 1);
        assert_eq!(outcome.steps[0].moves, t_perm);
        assert!(matches!(
            outcome.defects.as_slice(),
            [Defect::CaseUnmatched { stage: StageKind::Pll, .. }]
        ));
    }

    #[test_log::test]
    fn test_setup_steps_stop_at_ceiling() {
        let solver = Solver::new(SolverConfig { step_limit: 3 });
        let start = CubeState::solved().apply_sequence("R").unwrap();
        let mut state = start;
        let outcome = solver.drive(&Unrecognized, &mut state);

        assert_eq!(outcome.steps.len(), 3);
        assert_eq!(state, start.apply_all(&fallback(PLL_FALLBACK)));
        assert_eq!(outcome.defects.len(), 4);
        assert!(outcome.defects[..3]
            .iter()
            .all(|defect| matches!(defect, Defect::CaseUnmatched { .. })));
        assert_eq!(
            outcome.defects[3],
            Defect::CeilingReached {
                stage: StageKind::Pll,
                steps: 3
            }
        );
    }

    #[test]
    fn test_solution_display_lists_steps() {
        let scrambled = CubeState::solved().apply_sequence("F R U R' U' F'").unwrap();
        let solution = Solver::default().solve(&scrambled);
        let text = solution.to_string();
        assert!(text.starts_with("OLL"));
        assert!(text.contains("moves (Cross 0, F2L 0, OLL"));
    }
}
