use serde::{Deserialize, Serialize};
use std::fmt;

/// A board coordinate. Rows and columns both start at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point {
    pub row: u8,
    pub col: u8,
}

impl Point {
    pub const fn new(row: u8, col: u8) -> Self {
        Point { row, col }
    }
}

impl From<(u8, u8)> for Point {
    fn from((row, col): (u8, u8)) -> Self {
        Point { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn equality_by_value() {
        assert_eq!(Point::new(3, 4), Point::from((3, 4)));
        assert_ne!(Point::new(3, 4), Point::new(4, 3));
    }

    #[test]
    fn hashes_by_value() {
        let set: HashSet<Point> = [Point::new(1, 1), Point::new(1, 1), Point::new(2, 1)]
            .into_iter()
            .collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn json_shape() {
        let json = serde_json::to_value(Point::new(16, 4)).unwrap();
        assert_eq!(json, serde_json::json!({"row": 16, "col": 4}));
    }
}
