use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use arrayvec::ArrayVec;

use crate::Point;
use crate::color::Color;
use crate::error::GoError;
use crate::go_string::GoString;
use crate::zobrist::{self, MAX_BOARD_SIZE};

/// Column labels used in diagrams. `I` is skipped.
const COLUMN_LABELS: &[u8] = b"ABCDEFGHJKLMNOPQRST";

type StringId = usize;

/// The grid of stones and the strings they form.
///
/// Strings live in a dense table indexed by id and every occupied grid cell
/// stores the id of its string. Ids of captured strings are recycled.
#[derive(Debug, Clone)]
pub struct Board {
    rows: u8,
    cols: u8,
    grid: Vec<Option<StringId>>,
    strings: Vec<Option<GoString>>,
    free: Vec<StringId>,
    hash: u64,
}

impl Board {
    /// Create an empty board.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero or larger than [`MAX_BOARD_SIZE`].
    pub fn new(rows: u8, cols: u8) -> Self {
        assert!(
            (1..=MAX_BOARD_SIZE).contains(&rows) && (1..=MAX_BOARD_SIZE).contains(&cols),
            "board dimensions {rows}x{cols} outside 1..={MAX_BOARD_SIZE}"
        );

        Board {
            rows,
            cols,
            grid: vec![None; rows as usize * cols as usize],
            strings: Vec::new(),
            free: Vec::new(),
            hash: zobrist::EMPTY_BOARD,
        }
    }

    pub fn square(size: u8) -> Self {
        Self::new(size, size)
    }

    // -- Accessors --

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Incrementally maintained position hash.
    pub fn hash(&self) -> u64 {
        self.hash
    }

    pub fn is_on_grid(&self, point: Point) -> bool {
        (1..=self.rows).contains(&point.row) && (1..=self.cols).contains(&point.col)
    }

    pub fn get(&self, point: Point) -> Result<Option<Color>, GoError> {
        if !self.is_on_grid(point) {
            return Err(GoError::OutOfBounds(point));
        }
        Ok(self.stone_at(point))
    }

    pub fn get_string(&self, point: Point) -> Result<Option<&GoString>, GoError> {
        if !self.is_on_grid(point) {
            return Err(GoError::OutOfBounds(point));
        }
        Ok(self.string_at(point))
    }

    pub fn is_empty(&self) -> bool {
        self.grid.iter().all(Option::is_none)
    }

    pub fn num_stones(&self) -> usize {
        self.grid.iter().filter(|id| id.is_some()).count()
    }

    /// All live strings, in no particular order.
    pub fn strings(&self) -> impl Iterator<Item = &GoString> {
        self.strings.iter().flatten()
    }

    /// Every point of the grid in row-major order, starting at (1, 1).
    pub fn points(&self) -> impl Iterator<Item = Point> {
        let cols = self.cols;
        (1..=self.rows).flat_map(move |row| (1..=cols).map(move |col| Point::new(row, col)))
    }

    /// The up to four on-grid orthogonal neighbors of `point`.
    pub fn neighbors(&self, point: Point) -> ArrayVec<Point, 4> {
        let Point { row, col } = point;
        let mut result = ArrayVec::new();
        if row > 1 {
            result.push(Point::new(row - 1, col));
        }
        if row < self.rows {
            result.push(Point::new(row + 1, col));
        }
        if col > 1 {
            result.push(Point::new(row, col - 1));
        }
        if col < self.cols {
            result.push(Point::new(row, col + 1));
        }
        result
    }

    // -- Placement --

    /// Put a `color` stone on `point`, merging it with friendly neighbors and
    /// capturing enemy strings left without liberties. Returns the captured
    /// points.
    ///
    /// Suicide is not rejected here: a placement that captures nothing may
    /// leave its own string with zero liberties. See [`Board::is_self_capture`].
    pub fn place_stone(&mut self, color: Color, point: Point) -> Result<Vec<Point>, GoError> {
        if !self.is_on_grid(point) || self.stone_at(point).is_some() {
            return Err(GoError::InvalidPlacement(point));
        }

        let mut liberties = HashSet::new();
        let mut friends: ArrayVec<StringId, 4> = ArrayVec::new();
        let mut enemies: ArrayVec<StringId, 4> = ArrayVec::new();
        for n in self.neighbors(point) {
            match self.grid[self.idx(n)] {
                None => {
                    liberties.insert(n);
                }
                Some(id) => {
                    let group = if self.string(id).color() == color {
                        &mut friends
                    } else {
                        &mut enemies
                    };
                    if !group.contains(&id) {
                        group.push(id);
                    }
                }
            }
        }

        // The largest friendly string keeps its id; everything else is relabeled into it.
        let mut placed = GoString::new(color, point, liberties);
        let base = friends
            .iter()
            .copied()
            .max_by_key(|&id| self.string(id).num_stones());
        for &id in friends.iter().filter(|&&id| Some(id) != base) {
            let absorbed = self.take_string(id);
            placed.absorb(absorbed);
        }
        match base {
            Some(id) => {
                for &p in placed.stones() {
                    let i = self.idx(p);
                    self.grid[i] = Some(id);
                }
                self.string_mut(id).absorb(placed);
            }
            None => {
                let id = self.alloc(placed);
                let i = self.idx(point);
                self.grid[i] = Some(id);
            }
        }
        self.hash ^= zobrist::toggle(color, point);

        let mut captured = Vec::new();
        for id in enemies {
            let enemy = self.string_mut(id);
            enemy.remove_liberty(point);
            if enemy.num_liberties() == 0 {
                captured.extend(self.remove_string_by_id(id));
            }
        }

        tracing::trace!("{color} stone at {point}, {} captured", captured.len());
        Ok(captured)
    }

    /// Remove the whole string containing `point`, returning its stones.
    /// Neighboring strings regain the vacated points as liberties.
    pub fn remove_string(&mut self, point: Point) -> Result<Vec<Point>, GoError> {
        if !self.is_on_grid(point) {
            return Err(GoError::OutOfBounds(point));
        }
        Ok(self.clear_string(point))
    }

    /// Would a `color` stone on `point` capture at least one enemy string?
    pub fn will_capture(&self, point: Point, color: Color) -> bool {
        self.neighbors(point).iter().any(|&n| {
            self.string_at(n)
                .is_some_and(|s| s.color() != color && s.num_liberties() == 1)
        })
    }

    /// Would a `color` stone on the empty `point` end up in a string with no
    /// liberties once captures are resolved?
    pub fn is_self_capture(&self, point: Point, color: Color) -> bool {
        if self.will_capture(point, color) {
            return false;
        }
        self.neighbors(point).iter().all(|&n| match self.string_at(n) {
            None => false,
            Some(s) if s.color() == color => s.num_liberties() == 1,
            Some(_) => true,
        })
    }

    /// Hash of the current occupancy computed from scratch.
    pub fn compute_hash(&self) -> u64 {
        self.points().fold(zobrist::EMPTY_BOARD, |hash, p| match self.stone_at(p) {
            Some(color) => hash ^ zobrist::toggle(color, p),
            None => hash,
        })
    }

    // -- Internal helpers --

    #[inline]
    fn idx(&self, point: Point) -> usize {
        (point.row as usize - 1) * self.cols as usize + (point.col as usize - 1)
    }

    pub(crate) fn stone_at(&self, point: Point) -> Option<Color> {
        self.string_at(point).map(GoString::color)
    }

    pub(crate) fn string_at(&self, point: Point) -> Option<&GoString> {
        self.grid[self.idx(point)].map(|id| self.string(id))
    }

    fn string(&self, id: StringId) -> &GoString {
        self.strings[id].as_ref().expect("grid refers to a live string")
    }

    fn string_mut(&mut self, id: StringId) -> &mut GoString {
        self.strings[id].as_mut().expect("grid refers to a live string")
    }

    fn alloc(&mut self, string: GoString) -> StringId {
        match self.free.pop() {
            Some(id) => {
                self.strings[id] = Some(string);
                id
            }
            None => {
                self.strings.push(Some(string));
                self.strings.len() - 1
            }
        }
    }

    /// Detach a string from the table. Grid cells still point at the old id.
    fn take_string(&mut self, id: StringId) -> GoString {
        let string = self.strings[id].take().expect("grid refers to a live string");
        self.free.push(id);
        string
    }

    pub(crate) fn clear_string(&mut self, point: Point) -> Vec<Point> {
        match self.grid[self.idx(point)] {
            Some(id) => self.remove_string_by_id(id),
            None => Vec::new(),
        }
    }

    fn remove_string_by_id(&mut self, id: StringId) -> Vec<Point> {
        let string = self.take_string(id);
        let color = string.color();
        let stones = string.into_stones();

        for &p in &stones {
            let i = self.idx(p);
            self.grid[i] = None;
            self.hash ^= zobrist::toggle(color, p);
        }
        for &p in &stones {
            for n in self.neighbors(p) {
                if let Some(nid) = self.grid[self.idx(n)] {
                    self.string_mut(nid).add_liberty(p);
                }
            }
        }

        stones
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.rows == other.rows
            && self.cols == other.cols
            && self.points().all(|p| self.stone_at(p) == other.stone_at(p))
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (1..=self.rows).rev() {
            write!(f, "{row:>2} ")?;
            for col in 1..=self.cols {
                let c = match self.stone_at(Point::new(row, col)) {
                    Some(color) => color.glyph(),
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "   ")?;
        for &label in &COLUMN_LABELS[..self.cols as usize] {
            write!(f, "{}", label as char)?;
        }
        writeln!(f)
    }
}

/// Parses a bare diagram of `x`, `o` and `.`, top line first. Stones are
/// placed left to right, top to bottom.
impl FromStr for Board {
    type Err = GoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();

        let rows = lines.len();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let max = MAX_BOARD_SIZE as usize;
        if !(1..=max).contains(&rows) || !(1..=max).contains(&cols) {
            return Err(GoError::InvalidLayout(format!(
                "{rows}x{cols} is outside 1..={max}"
            )));
        }

        let mut board = Board::new(rows as u8, cols as u8);
        for (i, line) in lines.iter().enumerate() {
            if line.chars().count() != cols {
                return Err(GoError::InvalidLayout(format!(
                    "line {} has {} points, expected {cols}",
                    i + 1,
                    line.chars().count()
                )));
            }
            let row = (rows - i) as u8;
            for (j, c) in line.chars().enumerate() {
                let point = Point::new(row, j as u8 + 1);
                match (c, Color::from_glyph(c)) {
                    (_, Some(color)) => {
                        board.place_stone(color, point)?;
                    }
                    ('.', None) => {}
                    (other, None) => {
                        return Err(GoError::InvalidLayout(format!(
                            "unexpected '{other}' at {point}"
                        )));
                    }
                }
            }
        }

        Ok(board)
    }
}

#[cfg(test)]
impl Board {
    /// Check every string against a recount from the grid: stones, exact
    /// liberty sets, no adjacent strings of one color, and the hash.
    pub(crate) fn assert_consistent(&self) {
        for point in self.points() {
            let Some(id) = self.grid[self.idx(point)] else {
                continue;
            };
            let string = self.string(id);
            assert!(string.contains(point));
            for n in self.neighbors(point) {
                match self.stone_at(n) {
                    None => assert!(string.has_liberty(n), "{n} missing as liberty"),
                    Some(c) if c == string.color() => {
                        assert_eq!(self.grid[self.idx(n)], Some(id), "{n} not merged")
                    }
                    Some(_) => {}
                }
            }
        }
        for string in self.strings() {
            for &lib in string.liberties() {
                assert!(self.stone_at(lib).is_none(), "{lib} is occupied");
                assert!(
                    self.neighbors(lib).iter().any(|&n| string.contains(n)),
                    "{lib} not adjacent"
                );
            }
            for &stone in string.stones() {
                assert_eq!(self.stone_at(stone), Some(string.color()));
            }
        }
        assert_eq!(self.hash(), self.compute_hash());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(row: u8, col: u8) -> Point {
        Point::new(row, col)
    }

    fn board_with(size: u8, stones: &[(Color, (u8, u8))]) -> Board {
        let mut board = Board::square(size);
        for &(color, point) in stones {
            board.place_stone(color, point.into()).unwrap();
        }
        board
    }

    /// Check every string against a from-scratch flood fill of the grid.
    #[test]
    fn creates_empty_board() {
        let board = Board::new(5, 3);
        assert!(board.is_empty());
        assert_eq!(board.rows(), 5);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.points().count(), 15);
        assert_eq!(board.hash(), zobrist::EMPTY_BOARD);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn rejects_oversized_board() {
        Board::square(MAX_BOARD_SIZE + 1);
    }

    #[test]
    fn place_stone() {
        let mut board = Board::square(5);
        assert_eq!(board.get(p(2, 3)).unwrap(), None);
        assert_eq!(board.get(p(3, 3)).unwrap(), None);

        board.place_stone(Color::Black, p(3, 3)).unwrap();

        assert_eq!(board.get(p(2, 3)).unwrap(), None);
        assert_eq!(board.get(p(3, 3)).unwrap(), Some(Color::Black));
    }

    #[test]
    fn queries_off_grid_fail() {
        let board = Board::square(5);
        assert_eq!(board.get(p(0, 1)), Err(GoError::OutOfBounds(p(0, 1))));
        assert_eq!(board.get(p(6, 1)), Err(GoError::OutOfBounds(p(6, 1))));
        assert!(matches!(board.get_string(p(1, 6)), Err(GoError::OutOfBounds(_))));
    }

    #[test]
    fn rejects_occupied_point_without_mutation() {
        let mut board = board_with(5, &[(Color::Black, (3, 3)), (Color::White, (3, 4))]);
        let before = board.clone();

        let result = board.place_stone(Color::White, p(3, 3));

        assert_eq!(result, Err(GoError::InvalidPlacement(p(3, 3))));
        assert_eq!(board, before);
        assert_eq!(board.hash(), before.hash());
        assert_eq!(board.get_string(p(3, 3)).unwrap().unwrap().num_liberties(), 3);
    }

    #[test]
    fn rejects_off_grid_placement() {
        let mut board = Board::square(5);
        assert_eq!(
            board.place_stone(Color::Black, p(6, 1)),
            Err(GoError::InvalidPlacement(p(6, 1)))
        );
        assert!(board.is_empty());
    }

    #[test]
    fn corner_capture() {
        let mut board = Board::square(5);
        board.place_stone(Color::Black, p(1, 1)).unwrap();
        board.place_stone(Color::White, p(1, 2)).unwrap();
        let captured = board.place_stone(Color::White, p(2, 1)).unwrap();

        assert_eq!(captured, vec![p(1, 1)]);
        assert_eq!(board.get(p(1, 1)).unwrap(), None);
        assert_eq!(board.get_string(p(1, 2)).unwrap().unwrap().num_liberties(), 3);
        board.assert_consistent();
    }

    #[test]
    fn captures_two_stone_string_as_a_unit() {
        let mut board = board_with(
            5,
            &[
                (Color::Black, (2, 2)),
                (Color::Black, (2, 3)),
                (Color::White, (1, 2)),
                (Color::White, (1, 3)),
                (Color::White, (3, 2)),
                (Color::White, (3, 3)),
                (Color::White, (2, 1)),
            ],
        );
        assert_eq!(board.get_string(p(2, 2)).unwrap().unwrap().num_liberties(), 1);

        let mut captured = board.place_stone(Color::White, p(2, 4)).unwrap();
        captured.sort();

        assert_eq!(captured, vec![p(2, 2), p(2, 3)]);
        assert_eq!(board.get(p(2, 2)).unwrap(), None);
        assert_eq!(board.get(p(2, 3)).unwrap(), None);
        let right = board.get_string(p(2, 4)).unwrap().unwrap();
        assert!(right.has_liberty(p(2, 3)));
        board.assert_consistent();
    }

    #[test]
    fn merges_four_strings_at_once() {
        let mut board = board_with(
            5,
            &[
                (Color::Black, (2, 1)),
                (Color::Black, (1, 2)),
                (Color::Black, (3, 2)),
                (Color::Black, (2, 3)),
            ],
        );
        assert_eq!(board.strings().count(), 4);

        board.place_stone(Color::Black, p(2, 2)).unwrap();

        assert_eq!(board.strings().count(), 1);
        let string = board.get_string(p(2, 2)).unwrap().unwrap();
        assert_eq!(string.num_stones(), 5);
        assert_eq!(string.num_liberties(), 6);
        assert!(!string.has_liberty(p(2, 2)));
        board.assert_consistent();
    }

    #[test]
    fn l_shape_liberties() {
        let board = board_with(
            9,
            &[
                (Color::Black, (3, 3)),
                (Color::Black, (4, 3)),
                (Color::Black, (5, 3)),
                (Color::Black, (5, 4)),
            ],
        );
        let string = board.get_string(p(4, 3)).unwrap().unwrap();
        assert_eq!(string.num_stones(), 4);
        assert_eq!(string.num_liberties(), 9);
    }

    #[test]
    fn empty_triangle_liberties() {
        let board = board_with(
            9,
            &[
                (Color::White, (3, 3)),
                (Color::White, (3, 4)),
                (Color::White, (4, 3)),
            ],
        );
        let string = board.get_string(p(3, 4)).unwrap().unwrap();
        assert_eq!(string.num_stones(), 3);
        assert_eq!(string.num_liberties(), 7);
    }

    #[test]
    fn enemy_contact_removes_liberty() {
        let board = board_with(5, &[(Color::Black, (3, 3)), (Color::White, (3, 4))]);
        let black = board.get_string(p(3, 3)).unwrap().unwrap();
        let white = board.get_string(p(3, 4)).unwrap().unwrap();
        assert!(!black.has_liberty(p(3, 4)));
        assert!(!white.has_liberty(p(3, 3)));
        assert_eq!(white.num_liberties(), 3);
    }

    #[test]
    fn detects_self_capture() {
        let board = board_with(
            5,
            &[
                (Color::White, (2, 3)),
                (Color::White, (4, 3)),
                (Color::White, (3, 2)),
                (Color::White, (3, 4)),
            ],
        );
        assert!(board.is_self_capture(p(3, 3), Color::Black));
        assert!(!board.will_capture(p(3, 3), Color::Black));
        assert!(!board.is_self_capture(p(3, 3), Color::White));
        assert!(!board.is_self_capture(p(1, 1), Color::Black));
    }

    #[test]
    fn filling_own_last_liberty_is_self_capture() {
        let board = board_with(
            5,
            &[
                (Color::Black, (1, 2)),
                (Color::White, (1, 3)),
                (Color::White, (2, 2)),
                (Color::White, (2, 1)),
            ],
        );
        assert!(board.is_self_capture(p(1, 1), Color::Black));
    }

    #[test]
    fn capturing_placement_is_not_self_capture() {
        let mut board = board_with(
            5,
            &[
                (Color::White, (1, 2)),
                (Color::White, (2, 1)),
                (Color::Black, (1, 3)),
                (Color::Black, (2, 2)),
                (Color::Black, (3, 1)),
            ],
        );
        assert!(board.will_capture(p(1, 1), Color::Black));
        assert!(!board.is_self_capture(p(1, 1), Color::Black));

        let captured = board.place_stone(Color::Black, p(1, 1)).unwrap();

        assert_eq!(captured.len(), 2);
        assert_eq!(board.get_string(p(1, 1)).unwrap().unwrap().num_liberties(), 2);
        board.assert_consistent();
    }

    #[test]
    fn hash_returns_to_baseline_after_capture() {
        let mut board = Board::square(5);
        board.place_stone(Color::Black, p(1, 1)).unwrap();
        let with_black = board.hash();
        assert_ne!(with_black, zobrist::EMPTY_BOARD);

        board.place_stone(Color::White, p(1, 2)).unwrap();
        board.place_stone(Color::White, p(2, 1)).unwrap();

        let expected = board_with(5, &[(Color::White, (2, 1)), (Color::White, (1, 2))]);
        assert_eq!(board.hash(), expected.hash());
        assert_eq!(board.hash(), board.compute_hash());
    }

    #[test]
    fn hash_depends_on_color() {
        let black = board_with(5, &[(Color::Black, (3, 3))]);
        let white = board_with(5, &[(Color::White, (3, 3))]);
        assert_ne!(black.hash(), white.hash());
    }

    #[test]
    fn recycles_string_ids() {
        let mut board = Board::square(5);
        board.place_stone(Color::Black, p(1, 1)).unwrap();
        board.place_stone(Color::White, p(1, 2)).unwrap();
        board.place_stone(Color::White, p(2, 1)).unwrap();
        let slots = board.strings.len();

        board.place_stone(Color::Black, p(5, 5)).unwrap();

        assert_eq!(board.strings.len(), slots);
        board.assert_consistent();
    }

    #[test]
    fn remove_string_restores_liberties() {
        let mut board: Board = "
            .....
            .....
            .ox..
            .ox..
            .....
        "
        .parse()
        .unwrap();

        let mut removed = board.remove_string(p(3, 3)).unwrap();
        removed.sort();

        assert_eq!(removed, vec![p(2, 3), p(3, 3)]);
        assert_eq!(board.get_string(p(3, 2)).unwrap().unwrap().num_liberties(), 6);
        assert!(board.remove_string(p(1, 1)).unwrap().is_empty());
        board.assert_consistent();
    }

    #[test]
    fn equality_ignores_placement_order() {
        let a = board_with(5, &[(Color::Black, (1, 1)), (Color::White, (2, 2))]);
        let b = board_with(5, &[(Color::White, (2, 2)), (Color::Black, (1, 1))]);
        assert_eq!(a, b);
        assert_eq!(a.hash(), b.hash());
        assert_ne!(a, Board::square(5));
        assert_ne!(Board::new(5, 4), Board::new(4, 5));
    }

    #[test]
    fn parses_diagram_top_row_first() {
        let board: Board = "
            x....
            .....
            .....
            .....
            ....o
        "
        .parse()
        .unwrap();
        assert_eq!(board.get(p(5, 1)).unwrap(), Some(Color::Black));
        assert_eq!(board.get(p(1, 5)).unwrap(), Some(Color::White));
        assert_eq!(board.num_stones(), 2);
    }

    #[test]
    fn rejects_malformed_diagrams() {
        assert!(matches!(
            "x..\n..".parse::<Board>(),
            Err(GoError::InvalidLayout(_))
        ));
        assert!(matches!(
            "x.?\n...".parse::<Board>(),
            Err(GoError::InvalidLayout(_))
        ));
        assert!(matches!("".parse::<Board>(), Err(GoError::InvalidLayout(_))));
    }

    #[test]
    fn display_round_trips() {
        let board = board_with(3, &[(Color::Black, (3, 1)), (Color::White, (1, 3))]);
        let text = board.to_string();
        assert_eq!(text, " 3 x..\n 2 ...\n 1 ..o\n   ABC\n");

        let diagram: String = text
            .lines()
            .take(3)
            .map(|l| format!("{}\n", &l[3..]))
            .collect();
        assert_eq!(diagram.parse::<Board>().unwrap(), board);
    }

    #[test]
    fn column_labels_skip_i() {
        let text = Board::new(1, 9).to_string();
        assert!(text.ends_with("ABCDEFGHJ\n"));
    }
}
