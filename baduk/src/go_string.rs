use std::collections::HashSet;

use crate::Point;
use crate::color::Color;

/// A maximal group of orthogonally connected stones of one color, along with
/// the empty points adjacent to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoString {
    color: Color,
    stones: Vec<Point>,
    liberties: HashSet<Point>,
}

impl GoString {
    pub(crate) fn new(color: Color, stone: Point, liberties: HashSet<Point>) -> Self {
        GoString {
            color,
            stones: vec![stone],
            liberties,
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn stones(&self) -> &[Point] {
        &self.stones
    }

    pub fn liberties(&self) -> &HashSet<Point> {
        &self.liberties
    }

    pub fn num_stones(&self) -> usize {
        self.stones.len()
    }

    pub fn num_liberties(&self) -> usize {
        self.liberties.len()
    }

    pub fn contains(&self, point: Point) -> bool {
        self.stones.contains(&point)
    }

    pub fn has_liberty(&self, point: Point) -> bool {
        self.liberties.contains(&point)
    }

    /// Fold `other` into this string. Points of `other` stop being liberties.
    pub(crate) fn absorb(&mut self, other: GoString) {
        debug_assert_eq!(self.color, other.color);
        self.liberties.extend(other.liberties);
        for p in &other.stones {
            self.liberties.remove(p);
        }
        self.stones.extend(other.stones);
    }

    pub(crate) fn into_stones(self) -> Vec<Point> {
        self.stones
    }

    pub(crate) fn add_liberty(&mut self, point: Point) {
        self.liberties.insert(point);
    }

    pub(crate) fn remove_liberty(&mut self, point: Point) {
        self.liberties.remove(&point);
    }
}
