pub mod board;
pub mod color;
pub mod config;
pub mod error;
pub mod game;
pub mod go_string;
pub mod point;
pub mod scoring;
pub mod turn;
pub mod zobrist;

pub use board::Board;
pub use color::Color;
pub use config::GameConfig;
pub use error::{GoError, Violation};
pub use game::GameState;
pub use go_string::GoString;
pub use point::Point;
pub use scoring::{PointStatus, TerritoryMap, dead_stones, evaluate_territory, remove_dead_stones};
pub use turn::Move;
pub use zobrist::MAX_BOARD_SIZE;
