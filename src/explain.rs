//! Interface to an external move-explanation service.
//!
//! The service itself lives outside this crate. Callers implement
//! [`Explainer`] and go through [`explain_or_fallback`], which never fails.

use thiserror::Error;

use crate::facelets::FaceletString;
use crate::moves::{format_sequence, Move};
use crate::solver::{Solution, StageKind};
use crate::state::CubeState;

/// Shown whenever the service cannot produce an explanation.
pub const FALLBACK_EXPLANATION: &str =
    "No explanation is available for this move right now. Keep following the solution.";

/// Experience level the explanation is written for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Audience {
    #[default]
    Beginner,
    Intermediate,
    Advanced,
}

#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("Explanation service unavailable: {0}")]
    Unavailable(String),
    #[error("Explanation service returned an invalid response: {0}")]
    InvalidResponse(String),
}

/// Everything the service is told about one move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExplanationRequest {
    pub mv: Move,
    pub stage: StageKind,
    /// The cube before the move.
    pub facelets: FaceletString,
    /// Zero-based position of the move in the solution.
    pub index: usize,
    pub total: usize,
    pub previous: String,
    pub audience: Audience,
}

impl ExplanationRequest {
    /// One request per move of `solution`, as played from `start`.
    pub fn for_solution(
        start: &CubeState,
        solution: &Solution,
        audience: Audience,
    ) -> Vec<ExplanationRequest> {
        let total = solution.move_count();
        let mut state = *start;
        let mut played: Vec<Move> = Vec::with_capacity(total);
        let mut requests = Vec::with_capacity(total);

        for step in &solution.steps {
            for &mv in &step.moves {
                requests.push(ExplanationRequest {
                    mv,
                    stage: step.stage,
                    facelets: FaceletString::from(&state),
                    index: played.len(),
                    total,
                    previous: format_sequence(&played),
                    audience,
                });
                state.apply_mut(mv);
                played.push(mv);
            }
        }
        requests
    }
}

/// An external service that explains a single move of a solution.
///
/// Implementations may fail; callers go through [`explain_or_fallback`].
pub trait Explainer {
    fn explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError>;
}

/// Asks `explainer` about one move, substituting [`FALLBACK_EXPLANATION`]
/// for any failure.
pub fn explain_or_fallback(explainer: &dyn Explainer, request: &ExplanationRequest) -> String {
    match explainer.explain(request) {
        Ok(text) => text,
        Err(e) => {
            log::warn!("Explaining move {} failed: {e}", request.mv);
            FALLBACK_EXPLANATION.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::Solver;

    struct Echo;

    impl Explainer for Echo {
        fn explain(&self, request: &ExplanationRequest) -> Result<String, ExplainError> {
            Ok(format!("{} during {}", request.mv, request.stage))
        }
    }

    struct Offline;

    impl Explainer for Offline {
        fn explain(&self, _: &ExplanationRequest) -> Result<String, ExplainError> {
            Err(ExplainError::Unavailable("no network".to_string()))
        }
    }

    #[test]
    fn test_requests_follow_solution() {
        let start = CubeState::solved().apply_sequence("R U R' U'").unwrap();
        let solution = Solver::default().solve(&start);
        let requests = ExplanationRequest::for_solution(&start, &solution, Audience::Beginner);

        assert_eq!(requests.len(), solution.move_count());
        assert_eq!(requests[0].facelets, FaceletString::from(&start));
        assert_eq!(requests[0].previous, "");
        for (i, request) in requests.iter().enumerate() {
            assert_eq!(request.index, i);
            assert_eq!(request.total, requests.len());
        }
        let last = requests.last().unwrap();
        assert!(start
            .apply_all(&solution.moves()[..last.index])
            .apply(last.mv)
            .is_solved());
    }

    #[test_log::test]
    fn test_fallback_on_failure() {
        let start = CubeState::solved().apply_sequence("F").unwrap();
        let solution = Solver::default().solve(&start);
        let request = &ExplanationRequest::for_solution(&start, &solution, Audience::Advanced)[0];

        assert_eq!(explain_or_fallback(&Echo, request), format!("{} during Cross", request.mv));
        assert_eq!(explain_or_fallback(&Offline, request), FALLBACK_EXPLANATION);
    }
}
