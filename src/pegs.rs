//! Peg labels, moves, and their textual wire form.
//!
//! A move is written as `"X->Y"` and a move sequence as those tokens joined
//! by commas, e.g. `"A->C,A->B,C->B"`.

use std::fmt::{self, Write};
use std::str::FromStr;

use crate::error::HanoiError;

/// A disk size; larger numbers are physically larger disks.
pub type Disk = u32;

/// Maximum number of pegs on any board.
pub const MAX_PEGS: usize = 4;

/// Largest supported disk count. `2^n - 1` moves must fit in a `u64`.
pub const MAX_DISKS: usize = 63;

/// Separator between source and destination in a move token.
const ARROW: &str = "->";

/// Separator between move tokens in a sequence.
const SEQUENCE_SEPARATOR: char = ',';

/// A named peg position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Peg {
    A,
    B,
    C,
    D,
}

impl Peg {
    /// All pegs in board order.
    pub const ALL: [Peg; MAX_PEGS] = [Peg::A, Peg::B, Peg::C, Peg::D];

    /// Position of this peg on the board (0-based).
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character label.
    pub const fn label(self) -> char {
        match self {
            Peg::A => 'A',
            Peg::B => 'B',
            Peg::C => 'C',
            Peg::D => 'D',
        }
    }

    /// Looks up a peg by its label.
    pub fn from_label(label: char) -> Option<Self> {
        Self::ALL.into_iter().find(|peg| peg.label() == label)
    }

    /// Bit for this peg in a peg-set bitmask.
    #[inline]
    pub(crate) const fn bit(self) -> u8 {
        1 << self.index()
    }
}

impl fmt::Display for Peg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Peg {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(label), None) => {
                Self::from_label(label).ok_or_else(|| HanoiError::UnknownPeg(s.to_string()))
            }
            _ => Err(HanoiError::UnknownPeg(s.to_string())),
        }
    }
}

/// Relocation of the top disk of `source` onto `destination`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub source: Peg,
    pub destination: Peg,
}

impl Move {
    pub const fn new(source: Peg, destination: Peg) -> Self {
        Self {
            source,
            destination,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{ARROW}{}", self.source, self.destination)
    }
}

impl FromStr for Move {
    type Err = HanoiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        let (source, destination) = token
            .split_once(ARROW)
            .ok_or_else(|| HanoiError::MalformedMove(token.to_string()))?;
        Ok(Move::new(source.parse()?, destination.parse()?))
    }
}

/// Ordered list of moves, as produced by a solver or supplied by a player.
pub type MoveSequence = Vec<Move>;

/// Formats moves in wire form: tokens joined by commas, in order.
pub fn format_sequence(moves: &[Move]) -> String {
    let mut output = String::with_capacity(moves.len() * 5);
    for (i, mv) in moves.iter().enumerate() {
        if i > 0 {
            output.push(SEQUENCE_SEPARATOR);
        }
        // writing into a String cannot fail
        let _ = write!(output, "{mv}");
    }
    output
}

/// Parses a wire-form sequence. Blank input is the empty sequence.
pub fn parse_sequence(text: &str) -> Result<MoveSequence, HanoiError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    text.split(SEQUENCE_SEPARATOR).map(str::parse).collect()
}

/// Checks that `pegs` is a board of 3 or 4 pairwise-distinct labels.
pub(crate) fn check_distinct(pegs: &[Peg]) -> Result<(), HanoiError> {
    if !(3..=MAX_PEGS).contains(&pegs.len()) {
        return Err(HanoiError::PegCount(pegs.len()));
    }
    let mut seen = 0u8;
    for &peg in pegs {
        if seen & peg.bit() != 0 {
            return Err(HanoiError::DuplicatePeg(peg));
        }
        seen |= peg.bit();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_wire_form() {
        let mv = Move::new(Peg::A, Peg::C);
        assert_eq!(mv.to_string(), "A->C");
        assert_eq!("A->C".parse::<Move>(), Ok(mv));
        assert_eq!(" D->B ".parse::<Move>(), Ok(Move::new(Peg::D, Peg::B)));
    }

    #[test]
    fn test_malformed_moves_are_rejected() {
        assert_eq!(
            "AC".parse::<Move>(),
            Err(HanoiError::MalformedMove("AC".to_string()))
        );
        assert_eq!(
            "A->E".parse::<Move>(),
            Err(HanoiError::UnknownPeg("E".to_string()))
        );
        assert_eq!(
            "AB->C".parse::<Move>(),
            Err(HanoiError::UnknownPeg("AB".to_string()))
        );
    }

    #[test]
    fn test_sequence_format_and_parse() {
        let moves = vec![
            Move::new(Peg::A, Peg::B),
            Move::new(Peg::A, Peg::C),
            Move::new(Peg::B, Peg::C),
        ];
        let text = format_sequence(&moves);
        insta::assert_snapshot!(text, @"A->B,A->C,B->C");
        assert_eq!(parse_sequence(&text), Ok(moves));
        assert_eq!(
            parse_sequence("A->B, A->C ,B->C").map(|m| m.len()),
            Ok(3)
        );
    }

    #[test]
    fn test_empty_sequence() {
        assert_eq!(format_sequence(&[]), "");
        assert_eq!(parse_sequence(""), Ok(Vec::new()));
        assert_eq!(parse_sequence("   "), Ok(Vec::new()));
    }

    #[test]
    fn test_trailing_separator_is_malformed() {
        assert_eq!(
            parse_sequence("A->B,"),
            Err(HanoiError::MalformedMove(String::new()))
        );
    }

    #[test]
    fn test_check_distinct() {
        assert_eq!(check_distinct(&[Peg::A, Peg::B, Peg::C]), Ok(()));
        assert_eq!(check_distinct(&Peg::ALL), Ok(()));
        assert_eq!(
            check_distinct(&[Peg::A, Peg::B, Peg::A]),
            Err(HanoiError::DuplicatePeg(Peg::A))
        );
        assert_eq!(
            check_distinct(&[Peg::A, Peg::B]),
            Err(HanoiError::PegCount(2))
        );
    }
}
