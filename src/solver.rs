//! Move-sequence solvers for the 3-peg and 4-peg puzzles.
//!
//! - `solve_recursive`: classic divide-and-conquer, the reference sequence
//! - `solve_iterative`: same sequence from the bit pattern of each move index
//! - `solve_frame_stewart`: 4-peg split into a 4-peg sub-tower and a 3-peg run
//!
//! All solvers are deterministic and allocate only the output buffer.

use rustc_hash::FxHashMap;
use tracing::{debug, instrument};

use crate::error::HanoiError;
use crate::pegs::{check_distinct, Move, MoveSequence, Peg, MAX_DISKS};

/// Upper bound on the up-front reservation for the output buffer.
const MAX_PREALLOCATED_MOVES: u64 = 1 << 20;

/// Number of moves in the optimal 3-peg solution: `2^n - 1`, saturating.
#[inline]
pub const fn three_peg_move_count(disks: usize) -> u64 {
    match disks {
        0 => 0,
        1..=63 => u64::MAX >> (64 - disks),
        _ => u64::MAX,
    }
}

fn check_disks(disks: usize) -> Result<(), HanoiError> {
    if disks > MAX_DISKS {
        return Err(HanoiError::TooManyDisks {
            disks,
            max: MAX_DISKS,
        });
    }
    Ok(())
}

fn move_buffer(expected: u64) -> MoveSequence {
    Vec::with_capacity(expected.min(MAX_PREALLOCATED_MOVES) as usize)
}

/// Moves `disks` from `source` to `destination` via `auxiliary`.
///
/// Produces the unique minimal sequence of `2^n - 1` moves.
#[instrument(level = "debug")]
pub fn solve_recursive(
    disks: usize,
    source: Peg,
    auxiliary: Peg,
    destination: Peg,
) -> Result<MoveSequence, HanoiError> {
    check_distinct(&[source, auxiliary, destination])?;
    check_disks(disks)?;

    let mut moves = move_buffer(three_peg_move_count(disks));
    hanoi(disks, source, auxiliary, destination, &mut moves);

    debug!(moves = moves.len(), "recursive solve finished");
    Ok(moves)
}

fn hanoi(disks: usize, source: Peg, auxiliary: Peg, destination: Peg, moves: &mut MoveSequence) {
    if disks == 0 {
        return;
    }
    hanoi(disks - 1, source, destination, auxiliary, moves);
    moves.push(Move::new(source, destination));
    hanoi(disks - 1, auxiliary, source, destination, moves);
}

/// Which unordered peg pair a move of the iterative solution uses.
///
/// Positions refer to `[source, auxiliary, destination]` after the parity swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MoveSlot {
    SourceDestination,
    SourceAuxiliary,
    AuxiliaryDestination,
}

impl MoveSlot {
    /// The slots repeat with period 3 over the 1-based move index.
    #[inline]
    const fn for_index(index: u64) -> Self {
        match index % 3 {
            1 => MoveSlot::SourceDestination,
            2 => MoveSlot::SourceAuxiliary,
            _ => MoveSlot::AuxiliaryDestination,
        }
    }

    #[inline]
    const fn pair(self) -> (usize, usize) {
        match self {
            MoveSlot::SourceDestination => (0, 2),
            MoveSlot::SourceAuxiliary => (0, 1),
            MoveSlot::AuxiliaryDestination => (1, 2),
        }
    }

    /// Orients the slot's pair so the move leaves `from`.
    #[inline]
    fn oriented(self, from: usize) -> (usize, usize) {
        let (first, second) = self.pair();
        debug_assert!(from == first || from == second);
        if from == first {
            (first, second)
        } else {
            (second, first)
        }
    }
}

/// Same sequence as [`solve_recursive`], built without recursion.
///
/// Move `i` (1-based) uses the pair picked by `i mod 3` and leaves the peg at
/// position `(i & (i - 1)) mod 3`. With an even disk count the auxiliary and
/// destination roles are swapped first, since the first move then goes to the
/// auxiliary peg.
#[instrument(level = "debug")]
pub fn solve_iterative(
    disks: usize,
    source: Peg,
    auxiliary: Peg,
    destination: Peg,
) -> Result<MoveSequence, HanoiError> {
    check_distinct(&[source, auxiliary, destination])?;
    check_disks(disks)?;

    let positions = if disks % 2 == 0 {
        [source, destination, auxiliary]
    } else {
        [source, auxiliary, destination]
    };

    let total = three_peg_move_count(disks);
    let mut moves = move_buffer(total);
    for index in 1..=total {
        let from = ((index & (index - 1)) % 3) as usize;
        let (from, to) = MoveSlot::for_index(index).oriented(from);
        moves.push(Move::new(positions[from], positions[to]));
    }

    debug!(moves = moves.len(), "iterative solve finished");
    Ok(moves)
}

/// Frame–Stewart split for a sub-problem of `disks` disks.
///
/// `round(n - sqrt(2n))`, clamped so that `1 <= k < n` whenever `n >= 2`.
pub fn frame_stewart_split(disks: usize) -> usize {
    if disks < 2 {
        return 1;
    }
    let n = disks as f64;
    let k = (n - (2.0 * n).sqrt()).round() as usize;
    k.clamp(1, disks - 1)
}

/// Moves `disks` from `source` to `destination` using all four pegs.
///
/// The top `k` disks go to `aux1` with this same algorithm, the remaining
/// `n - k` go to `destination` with the 3-peg algorithm while `aux1` is left
/// alone, then the `k` disks follow onto `destination`. `k` is recomputed at
/// every level from that level's disk count.
#[instrument(level = "debug")]
pub fn solve_frame_stewart(
    disks: usize,
    source: Peg,
    aux1: Peg,
    aux2: Peg,
    destination: Peg,
) -> Result<MoveSequence, HanoiError> {
    check_distinct(&[source, aux1, aux2, destination])?;
    check_disks(disks)?;

    let mut moves = move_buffer(frame_stewart_move_count(disks));
    frame_stewart(disks, source, aux1, aux2, destination, &mut moves);

    debug!(moves = moves.len(), "frame-stewart solve finished");
    Ok(moves)
}

fn frame_stewart(
    disks: usize,
    source: Peg,
    aux1: Peg,
    aux2: Peg,
    destination: Peg,
    moves: &mut MoveSequence,
) {
    match disks {
        0 => {}
        1 => moves.push(Move::new(source, destination)),
        _ => {
            let k = frame_stewart_split(disks);
            frame_stewart(k, source, destination, aux2, aux1, moves);
            hanoi(disks - k, source, aux2, destination, moves);
            frame_stewart(k, aux1, source, aux2, destination, moves);
        }
    }
}

/// Length of the sequence [`solve_frame_stewart`] produces, without
/// generating it.
pub fn frame_stewart_move_count(disks: usize) -> u64 {
    if disks < 2 {
        return disks as u64;
    }
    let k = frame_stewart_split(disks);
    frame_stewart_move_count(k)
        .saturating_mul(2)
        .saturating_add(three_peg_move_count(disks - k))
}

/// Minimum Frame–Stewart move count over every possible split.
///
/// For 3 pegs this is `2^n - 1`. Saturates at `u64::MAX`.
pub fn optimal_move_count(disks: usize, pegs: usize) -> Result<u64, HanoiError> {
    check_distinct(Peg::ALL.get(..pegs).ok_or(HanoiError::PegCount(pegs))?)?;
    check_disks(disks)?;

    let mut memo = FxHashMap::default();
    Ok(optimal_count_memo(disks, pegs, &mut memo))
}

fn optimal_count_memo(
    disks: usize,
    pegs: usize,
    memo: &mut FxHashMap<(usize, usize), u64>,
) -> u64 {
    if disks < 2 {
        return disks as u64;
    }
    if pegs == 3 {
        return three_peg_move_count(disks);
    }
    if let Some(&count) = memo.get(&(disks, pegs)) {
        return count;
    }

    let mut best = u64::MAX;
    for top in 1..disks {
        let candidate = optimal_count_memo(top, pegs, memo)
            .saturating_mul(2)
            .saturating_add(optimal_count_memo(disks - top, pegs - 1, memo));
        best = best.min(candidate);
    }

    memo.insert((disks, pegs), best);
    best
}
