//! End-of-game analysis: territory classification and dead stone removal.
//!
//! Dead stones are found by repeated flood fills over the empty regions of the
//! board. Strings of one color that share an empty region are judged together
//! as a cluster. A cluster is enclosed when every empty region it touches is
//! also touched by the opponent, unless it walls in an eye space: a large area
//! whose opposing stones hold no territory of their own. An enclosed cluster
//! dies if any opposing cluster next to it is not enclosed itself; clusters
//! that only enclose each other are left alone. Removing dead clusters can
//! expose more, so passes repeat until nothing changes.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::color::Color;
use crate::game::GameState;
use crate::go_string::GoString;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointStatus {
    Black,
    White,
    Neutral,
}

impl From<Color> for PointStatus {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => PointStatus::Black,
            Color::White => PointStatus::White,
        }
    }
}

/// Status of every point on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerritoryMap {
    rows: u8,
    cols: u8,
    statuses: Vec<PointStatus>,
}

impl TerritoryMap {
    /// `None` off the grid.
    pub fn get(&self, point: Point) -> Option<PointStatus> {
        let on_grid =
            (1..=self.rows).contains(&point.row) && (1..=self.cols).contains(&point.col);
        on_grid.then(|| self.statuses[flat_index(self.cols, point)])
    }
}

#[inline]
fn flat_index(cols: u8, point: Point) -> usize {
    (point.row as usize - 1) * cols as usize + (point.col as usize - 1)
}

/// A maximal connected set of empty points, with the stones adjacent to it.
struct Region {
    points: Vec<Point>,
    border: Vec<Point>,
}

fn empty_regions(board: &Board) -> Vec<Region> {
    let cols = board.cols();
    let mut visited = vec![false; board.rows() as usize * cols as usize];
    let mut regions = Vec::new();

    for start in board.points() {
        if visited[flat_index(cols, start)] || board.stone_at(start).is_some() {
            continue;
        }

        let mut points = Vec::new();
        let mut border = HashSet::new();
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            let pi = flat_index(cols, p);
            if visited[pi] {
                continue;
            }
            visited[pi] = true;
            points.push(p);

            for n in board.neighbors(p) {
                if board.stone_at(n).is_some() {
                    border.insert(n);
                } else if !visited[flat_index(cols, n)] {
                    stack.push(n);
                }
            }
        }

        regions.push(Region {
            points,
            border: border.into_iter().collect(),
        });
    }

    regions
}

/// Classify every point: stones belong to their color, empty regions bordered
/// by a single color belong to it, everything else is neutral.
pub fn evaluate_territory(board: &Board) -> TerritoryMap {
    let mut statuses: Vec<PointStatus> = board
        .points()
        .map(|p| board.stone_at(p).map_or(PointStatus::Neutral, PointStatus::from))
        .collect();

    for region in empty_regions(board) {
        let mut border_colors: u8 = 0; // bit 0 = Black seen, bit 1 = White seen
        for &p in &region.border {
            match board.stone_at(p) {
                Some(Color::Black) => border_colors |= 1,
                Some(Color::White) => border_colors |= 2,
                None => {}
            }
        }
        let owner = match border_colors {
            1 => PointStatus::Black,
            2 => PointStatus::White,
            _ => PointStatus::Neutral,
        };
        for &p in &region.points {
            statuses[flat_index(board.cols(), p)] = owner;
        }
    }

    TerritoryMap {
        rows: board.rows(),
        cols: board.cols(),
        statuses,
    }
}

/// Eye spaces smaller than this can be reduced to a single eye from inside.
const MIN_EYE_SPACE: usize = 7;

/// Connected areas of points not occupied by `color`: empty points together
/// with the opposing stones among them.
fn areas_without(board: &Board, color: Color) -> Vec<Vec<Point>> {
    let cols = board.cols();
    let mut visited = vec![false; board.rows() as usize * cols as usize];
    let mut areas = Vec::new();

    for start in board.points() {
        if visited[flat_index(cols, start)] || board.stone_at(start) == Some(color) {
            continue;
        }

        let mut area = Vec::new();
        let mut stack = vec![start];
        while let Some(p) = stack.pop() {
            let pi = flat_index(cols, p);
            if visited[pi] {
                continue;
            }
            visited[pi] = true;
            area.push(p);

            for n in board.neighbors(p) {
                if board.stone_at(n) != Some(color) && !visited[flat_index(cols, n)] {
                    stack.push(n);
                }
            }
        }
        areas.push(area);
    }

    areas
}

/// Union-find over string indices.
struct Clusters {
    parent: Vec<usize>,
}

impl Clusters {
    fn new(n: usize) -> Self {
        Clusters {
            parent: (0..n).collect(),
        }
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parent[i] != i {
            self.parent[i] = self.parent[self.parent[i]];
            i = self.parent[i];
        }
        i
    }

    fn union(&mut self, a: usize, b: usize) {
        let (ra, rb) = (self.find(a), self.find(b));
        if ra != rb {
            self.parent[rb] = ra;
        }
    }
}

/// One pass of dead stone detection. Returns a single stone of every string
/// judged dead.
fn dead_strings(board: &Board) -> Vec<Point> {
    let strings: Vec<&GoString> = board.strings().collect();
    let n = strings.len();
    let cols = board.cols();

    let mut owner = vec![usize::MAX; board.rows() as usize * cols as usize];
    for (si, s) in strings.iter().enumerate() {
        for &p in s.stones() {
            owner[flat_index(cols, p)] = si;
        }
    }

    let empty = empty_regions(board);
    let mut region_of = vec![usize::MAX; owner.len()];
    for (ri, region) in empty.iter().enumerate() {
        for &p in &region.points {
            region_of[flat_index(cols, p)] = ri;
        }
    }

    // Strings bordering each empty region.
    let regions: Vec<Vec<usize>> = empty
        .iter()
        .map(|region| {
            let mut ids: Vec<usize> = region
                .border
                .iter()
                .map(|&p| owner[flat_index(cols, p)])
                .collect();
            ids.sort_unstable();
            ids.dedup();
            ids
        })
        .collect();

    let mut clusters = Clusters::new(n);
    for ids in &regions {
        for color in [Color::Black, Color::White] {
            let mut same = ids.iter().copied().filter(|&si| strings[si].color() == color);
            if let Some(first) = same.next() {
                for si in same {
                    clusters.union(first, si);
                }
            }
        }
    }
    let roots: Vec<usize> = (0..n).map(|si| clusters.find(si)).collect();

    // Regions touched by each cluster, indexed by root.
    let mut touched: Vec<Vec<usize>> = vec![Vec::new(); n];
    for (ri, ids) in regions.iter().enumerate() {
        for &si in ids {
            let root = roots[si];
            if !touched[root].contains(&ri) {
                touched[root].push(ri);
            }
        }
    }

    let mut eye_space = vec![false; n];
    for color in [Color::Black, Color::White] {
        for area in areas_without(board, color) {
            let empties: Vec<Point> = area
                .iter()
                .copied()
                .filter(|&p| board.stone_at(p).is_none())
                .collect();
            if area.len() < MIN_EYE_SPACE || empties.is_empty() || empties.len() == area.len() {
                continue;
            }
            let opponent_territory = empties.iter().any(|&p| {
                let ids = &regions[region_of[flat_index(cols, p)]];
                !ids.is_empty() && ids.iter().all(|&si| strings[si].color() != color)
            });
            if opponent_territory {
                continue;
            }

            // Only a single cluster can claim the area.
            let walls: HashSet<usize> = area
                .iter()
                .flat_map(|&p| board.neighbors(p))
                .filter(|&nb| board.stone_at(nb) == Some(color))
                .map(|nb| roots[owner[flat_index(cols, nb)]])
                .collect();
            let mut walls = walls.into_iter();
            if let (Some(wall), None) = (walls.next(), walls.next()) {
                eye_space[wall] = true;
            }
        }
    }

    let enclosed: Vec<bool> = (0..n)
        .map(|root| {
            let color = strings[root].color();
            !eye_space[root]
                && !touched[root].is_empty()
                && touched[root]
                    .iter()
                    .all(|&ri| regions[ri].iter().any(|&si| strings[si].color() != color))
        })
        .collect();

    // Opposing clusters in contact with each cluster, directly or across a region.
    let mut opposing: Vec<HashSet<usize>> = vec![HashSet::new(); n];
    for ids in &regions {
        for &a in ids {
            for &b in ids {
                if strings[a].color() != strings[b].color() {
                    opposing[roots[a]].insert(roots[b]);
                }
            }
        }
    }
    for (si, s) in strings.iter().enumerate() {
        for &p in s.stones() {
            for nb in board.neighbors(p) {
                let other = owner[flat_index(cols, nb)];
                if other != usize::MAX && strings[other].color() != s.color() {
                    opposing[roots[si]].insert(roots[other]);
                }
            }
        }
    }

    strings
        .iter()
        .enumerate()
        .filter(|&(si, _)| {
            let root = roots[si];
            enclosed[root] && opposing[root].iter().any(|&o| !enclosed[o])
        })
        .map(|(_, s)| s.stones()[0])
        .collect()
}

/// Remove dead strings until none are left. Every pass removes at least one
/// stone, so the number of passes is bounded by the number of points.
fn settle(board: &Board) -> (Board, HashSet<Point>) {
    let mut board = board.clone();
    let mut dead = HashSet::new();
    let max_passes = board.rows() as usize * board.cols() as usize;

    for pass in 1..=max_passes {
        let strings = dead_strings(&board);
        if strings.is_empty() {
            break;
        }
        for p in strings {
            dead.extend(board.clear_string(p));
        }
        tracing::debug!("dead stone pass {pass}: {} stones removed so far", dead.len());
    }

    (board, dead)
}

/// Every stone that [`remove_dead_stones`] would take off `board`.
pub fn dead_stones(board: &Board) -> HashSet<Point> {
    settle(board).1
}

/// The final board of `game` with dead stones taken off. Dead points become
/// empty; the input is left untouched.
pub fn remove_dead_stones(game: &GameState) -> Board {
    settle(game.board()).0
}
