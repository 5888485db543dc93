//! Timed solver runs for side-by-side comparison.
//!
//! Elapsed time is informational; the move content is deterministic.

use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::info;

use crate::error::HanoiError;
use crate::pegs::{format_sequence, MoveSequence};
use crate::validator::verify_solution;
use crate::Algorithm;

/// Output of one timed solver run.
#[derive(Debug, Clone)]
pub struct SolveReport {
    pub algorithm: Algorithm,
    pub disks: usize,
    pub moves: MoveSequence,
    pub elapsed: Duration,
}

/// Serializable view of a [`SolveReport`], sequence in wire form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub algorithm: Algorithm,
    pub name: &'static str,
    pub pegs: usize,
    pub disks: usize,
    pub move_count: usize,
    pub elapsed_secs: f64,
    pub sequence: String,
}

impl Algorithm {
    /// Solves `disks` disks and records how long the solver took.
    pub fn run_timed(self, disks: usize) -> Result<SolveReport, HanoiError> {
        let start = Instant::now();
        let moves = self.solver().solve(disks)?;
        let elapsed = start.elapsed();

        info!(
            algorithm = self.solver().name(),
            disks,
            moves = moves.len(),
            elapsed_secs = elapsed.as_secs_f64(),
            "solved"
        );

        Ok(SolveReport {
            algorithm: self,
            disks,
            moves,
            elapsed,
        })
    }
}

impl SolveReport {
    /// Replays the moves on a fresh board of the solver's pegs.
    pub fn verify(&self) -> Result<(), HanoiError> {
        let solver = self.algorithm.solver();
        verify_solution(self.disks, solver.pegs(), solver.target(), &self.moves)
    }

    pub fn summary(&self) -> ReportSummary {
        let solver = self.algorithm.solver();
        ReportSummary {
            algorithm: self.algorithm,
            name: solver.name(),
            pegs: solver.pegs().len(),
            disks: self.disks,
            move_count: self.moves.len(),
            elapsed_secs: self.elapsed.as_secs_f64(),
            sequence: format_sequence(&self.moves),
        }
    }
}

/// Runs every algorithm suited to `peg_count` pegs on `disks` disks.
pub fn compare(disks: usize, peg_count: usize) -> Result<Vec<SolveReport>, HanoiError> {
    Algorithm::for_pegs(peg_count)
        .iter()
        .map(|algorithm| algorithm.run_timed(disks))
        .collect()
}
