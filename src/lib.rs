//! Tower of Hanoi Solver Library
//!
//! Computes move sequences for the 3-peg and 4-peg puzzles and validates
//! moves against the physical peg arrangement.

pub mod config;
pub mod error;
pub mod pegs;
pub mod report;
pub mod solver;
pub mod state;
pub mod validator;

pub use error::{ConfigError, HanoiError};
pub use pegs::{format_sequence, parse_sequence, Disk, Move, MoveSequence, Peg};
pub use state::PegState;

const THREE_PEGS: [Peg; 3] = [Peg::A, Peg::B, Peg::C];
const FOUR_PEGS: [Peg; 4] = [Peg::A, Peg::B, Peg::C, Peg::D];

/// Trait that erases which algorithm produces a sequence.
///
/// Every solver starts with all disks on the first of its pegs and finishes
/// on `target`, so callers can compare and verify any of them uniformly.
pub trait Solver {
    fn name(&self) -> &'static str;
    /// Board order; the first peg is the starting peg.
    fn pegs(&self) -> &'static [Peg];
    fn target(&self) -> Peg;
    fn solve(&self, disks: usize) -> Result<MoveSequence, HanoiError>;
}

/// Classic recursive 3-peg solver, `A` to `C`.
pub struct RecursiveSolver;

/// Non-recursive 3-peg solver, `A` to `C`.
pub struct IterativeSolver;

/// Frame–Stewart 4-peg solver, `A` to `D`.
pub struct FrameStewartSolver;

impl Solver for RecursiveSolver {
    fn name(&self) -> &'static str {
        "Recursive"
    }

    fn pegs(&self) -> &'static [Peg] {
        &THREE_PEGS
    }

    fn target(&self) -> Peg {
        Peg::C
    }

    fn solve(&self, disks: usize) -> Result<MoveSequence, HanoiError> {
        solver::solve_recursive(disks, Peg::A, Peg::B, Peg::C)
    }
}

impl Solver for IterativeSolver {
    fn name(&self) -> &'static str {
        "Iterative"
    }

    fn pegs(&self) -> &'static [Peg] {
        &THREE_PEGS
    }

    fn target(&self) -> Peg {
        Peg::C
    }

    fn solve(&self, disks: usize) -> Result<MoveSequence, HanoiError> {
        solver::solve_iterative(disks, Peg::A, Peg::B, Peg::C)
    }
}

impl Solver for FrameStewartSolver {
    fn name(&self) -> &'static str {
        "Frame-Stewart (4 pegs)"
    }

    fn pegs(&self) -> &'static [Peg] {
        &FOUR_PEGS
    }

    fn target(&self) -> Peg {
        Peg::D
    }

    fn solve(&self, disks: usize) -> Result<MoveSequence, HanoiError> {
        solver::solve_frame_stewart(disks, Peg::A, Peg::B, Peg::C, Peg::D)
    }
}

/// Selectable solving algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Recursive,
    Iterative,
    FrameStewart,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [
        Algorithm::Recursive,
        Algorithm::Iterative,
        Algorithm::FrameStewart,
    ];

    pub fn solver(self) -> &'static dyn Solver {
        match self {
            Algorithm::Recursive => &RecursiveSolver,
            Algorithm::Iterative => &IterativeSolver,
            Algorithm::FrameStewart => &FrameStewartSolver,
        }
    }

    /// Algorithm whose sequence serves as the reference on `peg_count` pegs.
    pub fn optimal_for(peg_count: usize) -> Algorithm {
        if peg_count >= 4 {
            Algorithm::FrameStewart
        } else {
            Algorithm::Recursive
        }
    }

    /// Algorithms worth running on a board with `peg_count` pegs.
    ///
    /// The 3-peg solvers stay valid on 4 pegs (they simply ignore `D`).
    pub fn for_pegs(peg_count: usize) -> &'static [Algorithm] {
        if peg_count >= 4 {
            &Self::ALL
        } else {
            &Self::ALL[..2]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_solver_verifies() {
        for algorithm in Algorithm::ALL {
            let solver = algorithm.solver();
            let moves = solver.solve(6).unwrap();
            assert_eq!(
                validator::verify_solution(6, solver.pegs(), solver.target(), &moves),
                Ok(()),
                "{}",
                solver.name()
            );
        }
    }

    #[test]
    fn test_algorithms_for_pegs() {
        assert_eq!(
            Algorithm::for_pegs(3),
            &[Algorithm::Recursive, Algorithm::Iterative]
        );
        assert_eq!(Algorithm::for_pegs(4), &Algorithm::ALL);
    }

    #[test]
    fn test_optimal_for_pegs() {
        assert_eq!(Algorithm::optimal_for(3), Algorithm::Recursive);
        assert_eq!(Algorithm::optimal_for(4), Algorithm::FrameStewart);
        assert_eq!(Algorithm::optimal_for(4).solver().target(), Peg::D);
    }
}
