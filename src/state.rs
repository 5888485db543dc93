//! Physical arrangement of disks across pegs.
//!
//! Each peg holds a stack read bottom to top. Every stack is strictly
//! decreasing, and the disks on the board are always exactly `1..=n`.
//! Fields are private: the only mutation path is [`crate::validator::apply`],
//! which refuses any move that would break the ordering.

use std::fmt;

use crate::error::HanoiError;
use crate::pegs::{check_distinct, Disk, Peg, MAX_DISKS, MAX_PEGS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PegState {
    /// Stacks indexed by `Peg::index`, bottom first.
    stacks: [Vec<Disk>; MAX_PEGS],
    /// Bitmask of pegs on this board (bit i set = `Peg::ALL[i]` in play).
    in_play: u8,
    /// Board order, first entry is the starting peg.
    pegs: Vec<Peg>,
    disk_count: usize,
}

impl PegState {
    /// Builds the initial configuration: all `disks` on `pegs[0]`, largest at
    /// the bottom, every other peg empty.
    pub fn initialize(disks: usize, pegs: &[Peg]) -> Result<Self, HanoiError> {
        check_distinct(pegs)?;
        if disks > MAX_DISKS {
            return Err(HanoiError::TooManyDisks {
                disks,
                max: MAX_DISKS,
            });
        }

        let mut stacks: [Vec<Disk>; MAX_PEGS] = Default::default();
        stacks[pegs[0].index()] = (1..=disks as Disk).rev().collect();
        let in_play = pegs.iter().fold(0u8, |mask, peg| mask | peg.bit());

        Ok(Self {
            stacks,
            in_play,
            pegs: pegs.to_vec(),
            disk_count: disks,
        })
    }

    /// Initial configuration on the first `peg_count` labels (`A`, `B`, ...).
    pub fn new(disks: usize, peg_count: usize) -> Result<Self, HanoiError> {
        if !(3..=MAX_PEGS).contains(&peg_count) {
            return Err(HanoiError::PegCount(peg_count));
        }
        Self::initialize(disks, &Peg::ALL[..peg_count])
    }

    /// Number of disks on the board.
    pub fn disk_count(&self) -> usize {
        self.disk_count
    }

    /// Pegs on this board, in board order.
    pub fn pegs(&self) -> &[Peg] {
        &self.pegs
    }

    pub fn contains(&self, peg: Peg) -> bool {
        self.in_play & peg.bit() != 0
    }

    /// Disks on `peg`, bottom first. Empty for pegs not on the board.
    pub fn stack(&self, peg: Peg) -> &[Disk] {
        &self.stacks[peg.index()]
    }

    /// Topmost (smallest) disk on `peg`.
    #[inline]
    pub fn top(&self, peg: Peg) -> Option<Disk> {
        self.stacks[peg.index()].last().copied()
    }

    /// Moves the top disk without checking legality.
    ///
    /// Only the validator calls this, after `is_legal` has accepted the move.
    pub(crate) fn transfer(&mut self, source: Peg, destination: Peg) {
        if let Some(disk) = self.stacks[source.index()].pop() {
            self.stacks[destination.index()].push(disk);
        }
        debug_assert!(self.is_ordered(destination));
    }

    /// Whether `peg` is strictly decreasing from bottom to top.
    pub(crate) fn is_ordered(&self, peg: Peg) -> bool {
        self.stacks[peg.index()].windows(2).all(|pair| pair[0] > pair[1])
    }
}

/// One line per peg, disks listed bottom to top: `A: 3 2 1`.
impl fmt::Display for PegState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for peg in &self.pegs {
            write!(f, "{peg}:")?;
            for disk in self.stack(*peg) {
                write!(f, " {disk}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_configuration() {
        let state = PegState::new(4, 3).unwrap();
        assert_eq!(state.stack(Peg::A), &[4, 3, 2, 1]);
        assert!(state.stack(Peg::B).is_empty());
        assert!(state.stack(Peg::C).is_empty());
        assert_eq!(state.top(Peg::A), Some(1));
        assert!(state.contains(Peg::C));
        assert!(!state.contains(Peg::D));
        assert_eq!(state.disk_count(), 4);
    }

    #[test]
    fn test_initialize_on_custom_start_peg() {
        let state = PegState::initialize(3, &[Peg::C, Peg::A, Peg::D, Peg::B]).unwrap();
        assert_eq!(state.stack(Peg::C), &[3, 2, 1]);
        assert!(state.stack(Peg::A).is_empty());
        assert_eq!(state.pegs(), &[Peg::C, Peg::A, Peg::D, Peg::B]);
    }

    #[test]
    fn test_zero_disks_is_all_empty() {
        let state = PegState::new(0, 4).unwrap();
        for peg in Peg::ALL {
            assert!(state.stack(peg).is_empty());
        }
    }

    #[test]
    fn test_rejects_malformed_boards() {
        assert_eq!(PegState::new(3, 5), Err(HanoiError::PegCount(5)));
        assert_eq!(PegState::new(3, 2), Err(HanoiError::PegCount(2)));
        assert_eq!(
            PegState::initialize(3, &[Peg::A, Peg::A, Peg::B]),
            Err(HanoiError::DuplicatePeg(Peg::A))
        );
        assert_eq!(
            PegState::new(64, 3),
            Err(HanoiError::TooManyDisks { disks: 64, max: 63 })
        );
    }

    #[test]
    fn test_display() {
        let state = PegState::new(3, 4).unwrap();
        insta::assert_snapshot!(state.to_string(), @r"
        A: 3 2 1
        B:
        C:
        D:
        ");
    }
}
