//! Read-only position hash codes.
//!
//! Every on-grid point has one code for each of its three states. A board's
//! hash is the XOR of the code of every point's current state, so the empty
//! baseline is [`EMPTY_BOARD`] regardless of the board's dimensions.

mod codes;

use crate::Point;
use crate::color::Color;

pub use codes::{BLACK_TO_PLAY, EMPTY_BOARD, WHITE_TO_PLAY};

/// Largest supported number of rows or columns.
pub const MAX_BOARD_SIZE: u8 = 19;

pub(crate) const POINTS: usize = MAX_BOARD_SIZE as usize * MAX_BOARD_SIZE as usize;

#[inline]
fn index(point: Point) -> usize {
    (point.row as usize - 1) * MAX_BOARD_SIZE as usize + (point.col as usize - 1)
}

/// Code for `point` while it is empty.
#[inline]
pub fn empty(point: Point) -> u64 {
    codes::EMPTY_CODES[index(point)]
}

/// Code for `point` while it holds a stone of `color`.
#[inline]
pub fn stone(color: Color, point: Point) -> u64 {
    match color {
        Color::Black => codes::BLACK_CODES[index(point)],
        Color::White => codes::WHITE_CODES[index(point)],
    }
}

/// Hash delta for turning an empty `point` into a `color` stone, or back.
#[inline]
pub fn toggle(color: Color, point: Point) -> u64 {
    empty(point) ^ stone(color, point)
}

pub fn to_play(color: Color) -> u64 {
    match color {
        Color::Black => BLACK_TO_PLAY,
        Color::White => WHITE_TO_PLAY,
    }
}
