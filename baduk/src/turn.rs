use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Point;

/// A player's action on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Play(Point),
    Pass,
    Resign,
}

impl Move {
    pub fn play(row: u8, col: u8) -> Self {
        Move::Play(Point::new(row, col))
    }

    pub fn point(&self) -> Option<Point> {
        match self {
            Move::Play(p) => Some(*p),
            Move::Pass | Move::Resign => None,
        }
    }

    pub fn is_play(&self) -> bool {
        matches!(self, Move::Play(_))
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Move::Pass)
    }

    pub fn is_resign(&self) -> bool {
        matches!(self, Move::Resign)
    }
}

impl From<Point> for Move {
    fn from(point: Point) -> Self {
        Move::Play(point)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Play(p) => write!(f, "play {p}"),
            Move::Pass => write!(f, "pass"),
            Move::Resign => write!(f, "resign"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn play_move() {
        let m = Move::play(16, 16);
        assert_eq!(m.point(), Some(Point::new(16, 16)));
        assert!(m.is_play());
        assert!(!m.is_pass());
        assert!(!m.is_resign());
    }

    #[test]
    fn pass_and_resign_have_no_point() {
        assert_eq!(Move::Pass.point(), None);
        assert_eq!(Move::Resign.point(), None);
        assert!(Move::Pass.is_pass());
        assert!(Move::Resign.is_resign());
    }

    #[test]
    fn usable_as_map_key() {
        let mut moves = HashMap::new();
        moves.insert(Move::play(1, 1), 1);
        moves.insert(Move::Resign, 2);

        assert_eq!(moves[&Move::play(1, 1)], 1);
        assert_eq!(moves[&Move::Resign], 2);
        assert!(!moves.contains_key(&Move::Pass));
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(Move::play(3, 4)).unwrap();
        assert_eq!(json, serde_json::json!({"play": {"row": 3, "col": 4}}));
        assert_eq!(serde_json::to_value(Move::Pass).unwrap(), "pass");
    }

    #[test]
    fn display() {
        assert_eq!(Move::play(3, 4).to_string(), "play (3, 4)");
        assert_eq!(Move::Resign.to_string(), "resign");
    }
}
