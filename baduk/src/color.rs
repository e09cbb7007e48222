use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

/// Stone color, also used for the player to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(i8)]
pub enum Color {
    Black = 1,
    White = -1,
}

impl Color {
    pub fn other(self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }

    /// Diagram glyph: `x` for black, `o` for white.
    pub fn glyph(self) -> char {
        match self {
            Color::Black => 'x',
            Color::White => 'o',
        }
    }

    pub fn from_glyph(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Color::Black),
            'o' | 'O' => Some(Color::White),
            _ => None,
        }
    }
}

impl Neg for Color {
    type Output = Self;

    fn neg(self) -> Self {
        self.other()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => write!(f, "Black"),
            Color::White => write!(f, "White"),
        }
    }
}
