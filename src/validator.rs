//! Move legality, the single mutation primitive, and the solved check.
//!
//! Shared by interactive play (one `apply` at a time) and by verification of
//! whole sequences replayed from the initial configuration.

use tracing::{debug, instrument};

use crate::error::HanoiError;
use crate::pegs::{Move, Peg};
use crate::state::PegState;

/// True iff `source` has a disk and it is smaller than the top of
/// `destination` (or `destination` is empty). Pegs not on the board are
/// never legal endpoints.
#[inline]
pub fn is_legal(state: &PegState, source: Peg, destination: Peg) -> bool {
    if !state.contains(source) || !state.contains(destination) {
        return false;
    }
    match (state.top(source), state.top(destination)) {
        (None, _) => false,
        (Some(_), None) => true,
        (Some(moving), Some(resting)) => moving < resting,
    }
}

/// Moves the top disk of `source` onto `destination` if legal.
///
/// Returns `false` and leaves `state` untouched otherwise.
pub fn apply(state: &mut PegState, source: Peg, destination: Peg) -> bool {
    if !is_legal(state, source, destination) {
        return false;
    }
    state.transfer(source, destination);
    true
}

/// True iff `target` is on the board and holds all `disks` disks.
///
/// Recomputed from the current state on every call. Ordering needs no
/// re-check because only `apply` can change a stack.
pub fn is_solved(state: &PegState, disks: usize, target: Peg) -> bool {
    if !state.contains(target) {
        return false;
    }
    debug_assert!(state.is_ordered(target));
    state.stack(target).len() == disks
}

/// Applies `moves` in order, stopping at the first illegal one.
///
/// Moves before the rejected one stay applied.
#[instrument(level = "debug", skip(state, moves), fields(len = moves.len()))]
pub fn replay(state: &mut PegState, moves: &[Move]) -> Result<(), HanoiError> {
    for (index, &mv) in moves.iter().enumerate() {
        if !apply(state, mv.source, mv.destination) {
            debug!(index, %mv, "replay rejected move");
            return Err(HanoiError::IllegalMove { index, mv });
        }
    }
    Ok(())
}

/// Replays `moves` on a fresh board and requires every disk to end on `target`.
///
/// The disks start on `pegs[0]`.
#[instrument(level = "debug", skip(moves), fields(len = moves.len()))]
pub fn verify_solution(
    disks: usize,
    pegs: &[Peg],
    target: Peg,
    moves: &[Move],
) -> Result<(), HanoiError> {
    let mut scratch = PegState::initialize(disks, pegs)?;
    if !scratch.contains(target) {
        return Err(HanoiError::UnknownPeg(target.to_string()));
    }
    replay(&mut scratch, moves)?;
    if is_solved(&scratch, disks, target) {
        Ok(())
    } else {
        Err(HanoiError::Unsolved { target })
    }
}

/// Rejects a submitted sequence whose length differs from the count the
/// player declared for it.
pub fn check_move_count(expected: usize, moves: &[Move]) -> Result<(), HanoiError> {
    if moves.len() != expected {
        return Err(HanoiError::MoveCountMismatch {
            expected,
            actual: moves.len(),
        });
    }
    Ok(())
}

/// Next move of `optimal` after `moves_made` moves of play.
///
/// `None` once the player has used up as many moves as the optimal
/// solution needs.
pub fn hint(optimal: &[Move], moves_made: usize) -> Option<Move> {
    optimal.get(moves_made).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pegs::parse_sequence;

    fn three_pegs() -> [Peg; 3] {
        [Peg::A, Peg::B, Peg::C]
    }

    #[test]
    fn test_legal_moves_from_initial_state() {
        let state = PegState::new(3, 3).unwrap();
        assert!(is_legal(&state, Peg::A, Peg::B));
        assert!(is_legal(&state, Peg::A, Peg::C));
        assert!(!is_legal(&state, Peg::B, Peg::A), "empty source");
        assert!(!is_legal(&state, Peg::A, Peg::A), "same peg");
        assert!(!is_legal(&state, Peg::A, Peg::D), "peg not on board");
    }

    #[test]
    fn test_apply_moves_top_disk() {
        let mut state = PegState::new(3, 3).unwrap();
        assert!(apply(&mut state, Peg::A, Peg::C));
        assert_eq!(state.stack(Peg::A), &[3, 2]);
        assert_eq!(state.stack(Peg::C), &[1]);
    }

    #[test]
    fn test_illegal_apply_leaves_state_unchanged() {
        let mut state = PegState::new(3, 3).unwrap();
        assert!(apply(&mut state, Peg::A, Peg::C));
        assert!(apply(&mut state, Peg::A, Peg::B));
        // disk 2 is now on B, disk 1 on C; try to put 2 onto 1
        let before = state.clone();
        assert!(!apply(&mut state, Peg::B, Peg::C));
        assert_eq!(state, before);

        // disk 3 onto disk 1
        assert!(!apply(&mut state, Peg::A, Peg::C));
        assert_eq!(state, before);
    }

    #[test]
    fn test_is_solved_is_recomputed() {
        let mut state = PegState::new(1, 3).unwrap();
        assert!(!is_solved(&state, 1, Peg::C));
        assert!(apply(&mut state, Peg::A, Peg::C));
        assert!(is_solved(&state, 1, Peg::C));
        assert!(apply(&mut state, Peg::C, Peg::B));
        assert!(!is_solved(&state, 1, Peg::C));
    }

    #[test]
    fn test_zero_disks_is_solved() {
        let state = PegState::new(0, 3).unwrap();
        assert!(is_solved(&state, 0, Peg::C));
    }

    #[test]
    fn test_target_off_board_is_never_solved() {
        let state = PegState::new(0, 3).unwrap();
        assert!(!is_solved(&state, 0, Peg::D));
    }

    #[test]
    fn test_replay_reports_first_illegal_move() {
        let mut state = PegState::new(3, 3).unwrap();
        let moves = parse_sequence("A->C,A->C,A->B").unwrap();
        let err = replay(&mut state, &moves).unwrap_err();
        assert_eq!(
            err,
            HanoiError::IllegalMove {
                index: 1,
                mv: Move::new(Peg::A, Peg::C)
            }
        );
        // the first move stays applied
        assert_eq!(state.stack(Peg::C), &[1]);
    }

    #[test]
    fn test_verify_solution() {
        let solution = parse_sequence("A->C,A->B,C->B,A->C,B->A,B->C,A->C").unwrap();
        assert_eq!(verify_solution(3, &three_pegs(), Peg::C, &solution), Ok(()));

        let partial = &solution[..6];
        assert_eq!(
            verify_solution(3, &three_pegs(), Peg::C, partial),
            Err(HanoiError::Unsolved { target: Peg::C })
        );
    }

    #[test]
    fn test_verify_rejects_target_off_board() {
        assert_eq!(
            verify_solution(1, &three_pegs(), Peg::D, &[Move::new(Peg::A, Peg::D)]),
            Err(HanoiError::UnknownPeg("D".to_string()))
        );
    }

    #[test]
    fn test_check_move_count() {
        let moves = parse_sequence("A->C,A->B,C->B").unwrap();
        assert_eq!(check_move_count(3, &moves), Ok(()));
        assert_eq!(
            check_move_count(4, &moves),
            Err(HanoiError::MoveCountMismatch {
                expected: 4,
                actual: 3
            })
        );
    }

    #[test]
    fn test_hint_follows_optimal_sequence() {
        let optimal = parse_sequence("A->C,A->B,C->B,A->C,B->A,B->C,A->C").unwrap();
        assert_eq!(hint(&optimal, 0), Some(Move::new(Peg::A, Peg::C)));
        assert_eq!(hint(&optimal, 4), Some(Move::new(Peg::B, Peg::A)));
        assert_eq!(hint(&optimal, 6), Some(Move::new(Peg::A, Peg::C)));
        assert_eq!(hint(&optimal, 7), None);
        assert_eq!(hint(&optimal, 12), None);
    }
}
