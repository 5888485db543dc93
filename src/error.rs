use std::path::PathBuf;

use crate::pegs::{Move, Peg};

/// Errors raised by the solvers and the sequence-level validator.
///
/// A single illegal `apply` is reported as `false`, not as an error; these
/// variants cover malformed input and whole-sequence checks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HanoiError {
    #[error("{disks} disks requested, at most {max} are supported")]
    TooManyDisks { disks: usize, max: usize },

    #[error("unsupported peg count {0} (expected 3 or 4)")]
    PegCount(usize),

    #[error("peg {0} appears more than once")]
    DuplicatePeg(Peg),

    #[error("unknown peg '{0}'")]
    UnknownPeg(String),

    #[error("malformed move '{0}' (expected 'X->Y')")]
    MalformedMove(String),

    #[error("illegal move {mv} at position {index}")]
    IllegalMove { index: usize, mv: Move },

    #[error("{expected} moves declared but {actual} provided")]
    MoveCountMismatch { expected: usize, actual: usize },

    #[error("sequence does not finish with every disk on peg {target}")]
    Unsolved { target: Peg },
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
