use std::fmt;

use crate::Point;
use crate::turn::Move;

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Violation {
    OffBoard,
    Occupied,
    Suicide,
    Ko,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::OffBoard => write!(f, "not on board"),
            Violation::Occupied => write!(f, "point occupied"),
            Violation::Suicide => write!(f, "suicide"),
            Violation::Ko => write!(f, "ko violation"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum GoError {
    /// Low-level placement on an occupied or off-grid point.
    InvalidPlacement(Point),
    IllegalMove { mv: Move, reason: Violation },
    OutOfBounds(Point),
    InvalidLayout(String),
    InvalidConfig(String),
}

impl fmt::Display for GoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GoError::InvalidPlacement(p) => write!(f, "invalid placement at {p}"),
            GoError::IllegalMove { mv, reason } => write!(f, "illegal move {mv}: {reason}"),
            GoError::OutOfBounds(p) => write!(f, "point {p} is out of bounds"),
            GoError::InvalidLayout(s) => write!(f, "invalid board layout: {s}"),
            GoError::InvalidConfig(s) => write!(f, "invalid config: {s}"),
        }
    }
}

impl std::error::Error for GoError {}
