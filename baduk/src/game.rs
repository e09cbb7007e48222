use std::sync::Arc;

use crate::board::Board;
use crate::color::Color;
use crate::error::{GoError, Violation};
use crate::turn::Move;
use crate::zobrist::{self, MAX_BOARD_SIZE};

/// One position in a game, linked to the position it was reached from.
///
/// States are never mutated: [`GameState::apply_move`] hands out a new
/// `Arc<GameState>` that shares the earlier ones, so a history can be read
/// from several threads at once.
#[derive(Debug)]
pub struct GameState {
    board: Board,
    next_player: Color,
    previous_state: Option<Arc<GameState>>,
    last_move: Option<Move>,
    komi: f64,
}

impl GameState {
    /// Empty square board, black to play.
    pub fn new_game(board_size: u8, komi: f64) -> Result<Arc<Self>, GoError> {
        if !(1..=MAX_BOARD_SIZE).contains(&board_size) {
            return Err(GoError::InvalidConfig(format!(
                "board size {board_size} outside 1..={MAX_BOARD_SIZE}"
            )));
        }
        Ok(Self::from_board(Board::square(board_size), Color::Black, komi))
    }

    /// Root state for an arbitrary position. It has no history, so no move
    /// made from it can violate ko.
    pub fn from_board(board: Board, next_player: Color, komi: f64) -> Arc<Self> {
        Arc::new(GameState {
            board,
            next_player,
            previous_state: None,
            last_move: None,
            komi,
        })
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn next_player(&self) -> Color {
        self.next_player
    }

    pub fn previous_state(&self) -> Option<&Arc<GameState>> {
        self.previous_state.as_ref()
    }

    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    pub fn komi(&self) -> f64 {
        self.komi
    }

    /// Board hash combined with the side to move.
    pub fn hash(&self) -> u64 {
        self.board.hash() ^ zobrist::to_play(self.next_player)
    }

    /// A resign, or two passes in a row. The state keeps accepting moves
    /// either way.
    pub fn is_over(&self) -> bool {
        match self.last_move {
            Some(Move::Resign) => true,
            Some(Move::Pass) => self
                .previous_state
                .as_ref()
                .is_some_and(|prev| prev.last_move == Some(Move::Pass)),
            Some(Move::Play(_)) | None => false,
        }
    }

    // -- Legality --

    /// The reason `mv` is illegal for the player to move, if it is.
    pub fn violation(&self, mv: Move) -> Option<Violation> {
        let Move::Play(point) = mv else {
            return None;
        };
        if !self.board.is_on_grid(point) {
            Some(Violation::OffBoard)
        } else if self.board.stone_at(point).is_some() {
            Some(Violation::Occupied)
        } else if self.board.is_self_capture(point, self.next_player) {
            Some(Violation::Suicide)
        } else if self.does_move_violate_ko(mv) {
            Some(Violation::Ko)
        } else {
            None
        }
    }

    pub fn is_valid_move(&self, mv: Move) -> bool {
        self.violation(mv).is_none()
    }

    /// Would `mv` recreate the board as it stood before the opponent's last
    /// move? Only the single previous position is compared.
    pub fn does_move_violate_ko(&self, mv: Move) -> bool {
        let Move::Play(point) = mv else {
            return false;
        };
        let Some(previous) = &self.previous_state else {
            return false;
        };
        // Without a capture the stone count grows, so no earlier position can come back.
        if !self.board.is_on_grid(point)
            || self.board.stone_at(point).is_some()
            || !self.board.will_capture(point, self.next_player)
        {
            return false;
        }

        let mut scratch = self.board.clone();
        match scratch.place_stone(self.next_player, point) {
            Ok(_) => scratch.hash() == previous.board.hash(),
            Err(_) => false,
        }
    }

    /// Every legal play in row-major order, followed by a pass.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.board
            .points()
            .map(Move::Play)
            .filter(|&mv| self.is_valid_move(mv))
            .chain(std::iter::once(Move::Pass))
            .collect()
    }

    // -- Game actions --

    /// Play `mv` for the player to move and return the resulting state.
    /// The current state is left as it was.
    pub fn apply_move(self: &Arc<Self>, mv: Move) -> Result<Arc<GameState>, GoError> {
        if let Some(reason) = self.violation(mv) {
            tracing::debug!("rejected {mv} by {}: {reason}", self.next_player);
            return Err(GoError::IllegalMove { mv, reason });
        }

        let mut board = self.board.clone();
        if let Move::Play(point) = mv {
            board.place_stone(self.next_player, point)?;
        }

        Ok(Arc::new(GameState {
            board,
            next_player: self.next_player.other(),
            previous_state: Some(Arc::clone(self)),
            last_move: Some(mv),
            komi: self.komi,
        }))
    }
}

/// Same stones on the board and the same player to move.
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board && self.next_player == other.next_player
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Point;

    fn play(state: &Arc<GameState>, row: u8, col: u8) -> Arc<GameState> {
        state.apply_move(Move::play(row, col)).unwrap()
    }

    /// ```text
    ///  4 ....
    ///  3 .ox.
    ///  2 o.ox
    ///  1 .ox.
    /// ```
    /// White has just taken the ko at (2, 3), capturing (2, 2).
    fn ko_fight() -> Arc<GameState> {
        let mut game = GameState::new_game(19, 0.0).unwrap();
        for (row, col) in [(1, 3), (1, 2), (2, 2), (2, 1), (3, 3), (3, 2), (2, 4), (2, 3)] {
            game = play(&game, row, col);
        }
        game
    }

    #[test]
    fn new_game() {
        let start = GameState::new_game(19, 0.0).unwrap();
        let next = play(&start, 16, 16);

        assert_eq!(next.previous_state(), Some(&start));
        assert_eq!(next.next_player(), Color::White);
        assert_eq!(
            next.board().get(Point::new(16, 16)).unwrap(),
            Some(Color::Black)
        );
        assert!(start.board().is_empty());
    }

    #[test]
    fn is_valid_move() {
        let state = play(&GameState::new_game(19, 0.0).unwrap(), 16, 16);
        assert!(state.is_valid_move(Move::play(16, 17)));
        assert!(!state.is_valid_move(Move::play(16, 16)));
        assert!(state.is_valid_move(Move::Pass));
        assert!(state.is_valid_move(Move::Resign));
    }

    #[test]
    fn last_move() {
        let start = GameState::new_game(19, 0.0).unwrap();
        assert_eq!(start.last_move(), None);

        let state = play(&start, 16, 16);
        assert_eq!(state.last_move(), Some(Move::play(16, 16)));
    }

    #[test]
    fn new_game_rejects_bad_sizes() {
        assert!(matches!(
            GameState::new_game(0, 0.0),
            Err(GoError::InvalidConfig(_))
        ));
        assert!(matches!(
            GameState::new_game(20, 0.0),
            Err(GoError::InvalidConfig(_))
        ));
        assert_eq!(GameState::new_game(1, 0.0).unwrap().legal_moves(), [Move::Pass]);
    }

    #[test]
    fn komi_carries_forward() {
        let start = GameState::new_game(19, 0.5).unwrap();
        let next = play(&start, 16, 16);
        assert_eq!(next.komi(), 0.5);
    }

    #[test]
    fn ko_blocks_immediate_recapture() {
        let game = ko_fight();
        let retake = Move::play(2, 2);

        assert!(game.does_move_violate_ko(retake));
        assert!(!game.is_valid_move(retake));
        assert_eq!(game.violation(retake), Some(Violation::Ko));
        assert_eq!(
            game.apply_move(retake),
            Err(GoError::IllegalMove {
                mv: retake,
                reason: Violation::Ko
            })
        );
    }

    #[test]
    fn ko_lifts_after_exchange_elsewhere() {
        let game = ko_fight();
        let game = play(&game, 19, 19);
        let game = play(&game, 18, 18);
        let retake = Move::play(2, 2);

        assert!(!game.does_move_violate_ko(retake));
        assert!(game.is_valid_move(retake));

        let after = game.apply_move(retake).unwrap();
        assert_eq!(after.board().get(Point::new(2, 3)).unwrap(), None);
    }

    #[test]
    fn ko_check_ignores_non_captures() {
        let game = ko_fight();
        assert!(!game.does_move_violate_ko(Move::play(10, 10)));
        assert!(!game.does_move_violate_ko(Move::Pass));
        assert!(!game.does_move_violate_ko(Move::play(2, 3)));
    }

    #[test]
    fn rejects_suicide() {
        let mut board = Board::square(5);
        for (row, col) in [(2, 3), (4, 3), (3, 2), (3, 4)] {
            board.place_stone(Color::White, Point::new(row, col)).unwrap();
        }
        let game = GameState::from_board(board, Color::Black, 0.0);
        let before = game.board().clone();

        let result = game.apply_move(Move::play(3, 3));

        assert_eq!(
            result,
            Err(GoError::IllegalMove {
                mv: Move::play(3, 3),
                reason: Violation::Suicide
            })
        );
        assert_eq!(game.board(), &before);
        assert_eq!(game.board().hash(), before.hash());
    }

    #[test]
    fn capture_that_looks_like_suicide_is_legal() {
        let board: Board = "
            .....
            .....
            x....
            ox...
            .ox..
        "
        .parse()
        .unwrap();
        let game = GameState::from_board(board, Color::Black, 0.0);

        let after = game.apply_move(Move::play(1, 1)).unwrap();

        assert_eq!(after.board().get(Point::new(1, 2)).unwrap(), None);
        assert_eq!(after.board().get(Point::new(2, 1)).unwrap(), None);
        assert_eq!(
            after.board().get(Point::new(1, 1)).unwrap(),
            Some(Color::Black)
        );
    }

    #[test]
    fn rejects_occupied_and_off_board() {
        let game = play(&GameState::new_game(9, 0.0).unwrap(), 5, 5);
        assert_eq!(game.violation(Move::play(5, 5)), Some(Violation::Occupied));
        assert_eq!(game.violation(Move::play(10, 1)), Some(Violation::OffBoard));
        assert_eq!(game.violation(Move::play(0, 0)), Some(Violation::OffBoard));
        assert!(matches!(
            game.apply_move(Move::play(10, 1)),
            Err(GoError::IllegalMove {
                reason: Violation::OffBoard,
                ..
            })
        ));
    }

    #[test]
    fn from_board() {
        let mut board = Board::square(5);
        board.place_stone(Color::Black, Point::new(2, 2)).unwrap();
        board.place_stone(Color::Black, Point::new(4, 4)).unwrap();
        let game = GameState::from_board(board, Color::White, 0.0);

        assert_eq!(game.next_player(), Color::White);
        assert!(game.previous_state().is_none());
        assert!(!game.is_valid_move(Move::play(2, 2)));
        assert!(game.is_valid_move(Move::play(3, 3)));
    }

    #[test]
    fn pass_keeps_board_and_flips_player() {
        let start = GameState::new_game(9, 0.0).unwrap();
        let passed = start.apply_move(Move::Pass).unwrap();

        assert_eq!(passed.board(), start.board());
        assert_eq!(passed.next_player(), Color::White);
        assert_ne!(passed.hash(), start.hash());
        assert_ne!(*passed, *start);
    }

    #[test]
    fn game_over_by_convention() {
        let start = GameState::new_game(9, 0.0).unwrap();
        let one_pass = start.apply_move(Move::Pass).unwrap();
        assert!(!one_pass.is_over());

        let two_passes = one_pass.apply_move(Move::Pass).unwrap();
        assert!(two_passes.is_over());

        let resumed = play(&two_passes, 5, 5);
        assert!(!resumed.is_over());

        let resigned = resumed.apply_move(Move::Resign).unwrap();
        assert!(resigned.is_over());
        assert!(resigned.apply_move(Move::play(1, 1)).is_ok());
    }

    #[test]
    fn pass_then_play_is_not_over() {
        let start = GameState::new_game(9, 0.0).unwrap();
        let game = start.apply_move(Move::Pass).unwrap();
        let game = play(&game, 3, 3);
        let game = game.apply_move(Move::Pass).unwrap();
        assert!(!game.is_over());
    }

    #[test]
    fn legal_moves_exclude_stones_suicide_and_ko() {
        let start = GameState::new_game(5, 0.0).unwrap();
        assert_eq!(start.legal_moves().len(), 26);
        assert_eq!(start.legal_moves().last(), Some(&Move::Pass));

        let game = ko_fight();
        let moves = game.legal_moves();
        assert!(!moves.contains(&Move::play(2, 2)));
        assert!(!moves.contains(&Move::play(2, 3)));
        assert!(!moves.contains(&Move::play(1, 1)));
        assert_eq!(moves.len(), 19 * 19 - 7 - 2 + 1);
    }

    #[test]
    fn history_is_shared_across_threads() {
        let game = ko_fight();
        let hashes: Vec<u64> = std::thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    let game = Arc::clone(&game);
                    s.spawn(move || {
                        let mut state = game;
                        let mut depth = 0;
                        while let Some(prev) = state.previous_state() {
                            let prev = Arc::clone(prev);
                            state = prev;
                            depth += 1;
                        }
                        assert_eq!(depth, 8);
                        state.hash()
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });
        assert!(hashes.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn random_games_keep_strings_consistent() {
        let mut rng = fastrand::Rng::with_seed(0x5eed);
        for size in [7, 7, 9, 9, 13] {
            let mut game = GameState::new_game(size, 0.0).unwrap();
            for _ in 0..250 {
                let moves = game.legal_moves();
                let plays: Vec<Move> = moves.into_iter().filter(Move::is_play).collect();
                let mv = if plays.is_empty() {
                    Move::Pass
                } else {
                    plays[rng.usize(..plays.len())]
                };
                game = game.apply_move(mv).unwrap();

                let board = game.board();
                board.assert_consistent();
                for string in board.strings() {
                    assert!(string.num_liberties() > 0);
                }
            }
        }
    }
}
