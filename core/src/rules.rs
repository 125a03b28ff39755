// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game rules and validation logic

use crate::{board::Board, group::find_group, Color, Coord, MoveRejection};

/// Result of a legal placement, not yet committed to any session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Board after the stone is placed and captures are removed
    pub board: Board,
    /// Opponent stones removed by the move
    pub captured: Vec<Coord>,
}

impl Placement {
    /// Number of opponent stones removed
    pub fn captured_count(&self) -> usize {
        self.captured.len()
    }
}

/// Validates game rules for Go
pub struct RuleValidator<'a> {
    /// The board being checked
    board: &'a Board,
    /// Board before the opponent's last move, for the ko rule
    previous_board: Option<&'a Board>,
}

impl<'a> RuleValidator<'a> {
    /// Create a new rules validator. `previous_board` is `None` before the first move.
    pub fn new(board: &'a Board, previous_board: Option<&'a Board>) -> Self {
        Self {
            board,
            previous_board,
        }
    }

    /// Play `color` at `coord` on a working copy of the board.
    ///
    /// Checks run in order: occupancy, capture of opponent groups, suicide,
    /// then ko against the single previous snapshot. The borrowed board is
    /// never modified.
    pub fn apply(&self, coord: Coord, color: Color) -> Result<Placement, MoveRejection> {
        if !self.board.is_empty_at(coord) {
            tracing::debug!(?coord, ?color, "Spot taken or off the board");
            return Err(MoveRejection::SpotTaken);
        }

        let mut working = self.board.clone();
        working.place(coord, color);

        let opponent = color.opposite();
        let mut captured = Vec::new();
        for neighbor in working.adjacent_coords(coord) {
            if working.get(neighbor) != Some(opponent) {
                continue;
            }
            // A neighbor already removed with an earlier group reads as empty here
            if let Some(group) = find_group(&working, neighbor) {
                if group.liberty_count() == 0 {
                    for stone in &group.stones {
                        working.remove(*stone);
                    }
                    captured.extend(group.stones);
                }
            }
        }

        let own_liberties = find_group(&working, coord).map_or(0, |g| g.liberty_count());
        if own_liberties == 0 && captured.is_empty() {
            tracing::debug!(?coord, ?color, "Suicide move rejected");
            return Err(MoveRejection::SuicideMove);
        }

        if self.previous_board == Some(&working) {
            tracing::debug!(?coord, ?color, "Ko violation detected");
            return Err(MoveRejection::KoViolation);
        }

        Ok(Placement {
            board: working,
            captured,
        })
    }

    /// Check if a move is valid without keeping the resulting board
    pub fn check_move(&self, coord: Coord, color: Color) -> Result<(), MoveRejection> {
        self.apply(coord, color).map(|_| ())
    }

    /// Every point where `color` may legally play, in row-major order
    pub fn legal_moves(&self, color: Color) -> Vec<Coord> {
        self.board
            .coords()
            .filter(|c| self.board.is_empty_at(*c))
            .filter(|c| self.check_move(*c, color).is_ok())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::BoardSize;

    fn board_with(stones: &[(u8, u8, Color)]) -> Board {
        let mut board = Board::new(BoardSize::Nine);
        for &(row, col, color) in stones {
            board.place(Coord::new(row, col), color);
        }
        board
    }

    #[test]
    fn occupied_and_off_board_are_spot_taken() {
        let board = board_with(&[(3, 3, Color::White)]);
        let validator = RuleValidator::new(&board, None);

        assert_eq!(
            validator.check_move(Coord::new(3, 3), Color::Black),
            Err(MoveRejection::SpotTaken)
        );
        assert_eq!(
            validator.check_move(Coord::new(9, 2), Color::Black),
            Err(MoveRejection::SpotTaken)
        );
    }

    #[test]
    fn captures_two_groups_at_once() {
        // W . W B
        // B . B .    black at (0,1) takes both white corner stones
        let board = board_with(&[
            (0, 0, Color::White),
            (0, 2, Color::White),
            (0, 3, Color::Black),
            (1, 0, Color::Black),
            (1, 2, Color::Black),
        ]);
        let validator = RuleValidator::new(&board, None);

        let placement = validator.apply(Coord::new(0, 1), Color::Black).unwrap();
        assert_eq!(placement.captured, vec![Coord::new(0, 0), Coord::new(0, 2)]);
        assert_eq!(placement.board.count_stones(Color::White), 0);
        assert_eq!(placement.board.count_stones(Color::Black), 4);
    }

    #[test]
    fn capture_beats_suicide() {
        // . B W .
        // B W . W    black fills (1,2): no liberties of its own until
        // . B W .    the white stone at (1,1) is taken
        let board = board_with(&[
            (0, 1, Color::Black),
            (0, 2, Color::White),
            (1, 0, Color::Black),
            (1, 1, Color::White),
            (1, 3, Color::White),
            (2, 1, Color::Black),
            (2, 2, Color::White),
        ]);
        let validator = RuleValidator::new(&board, None);

        let placement = validator.apply(Coord::new(1, 2), Color::Black).unwrap();
        assert_eq!(placement.captured, vec![Coord::new(1, 1)]);
        assert_eq!(placement.board.get(Coord::new(1, 1)), None);
        assert_eq!(placement.board.get(Coord::new(1, 2)), Some(Color::Black));
        // the source board is untouched
        assert_eq!(board.get(Coord::new(1, 1)), Some(Color::White));
    }

    #[test]
    fn suicide_rejected() {
        let board = board_with(&[(0, 1, Color::White), (1, 0, Color::White)]);
        let validator = RuleValidator::new(&board, None);

        assert_eq!(
            validator.check_move(Coord::new(0, 0), Color::Black),
            Err(MoveRejection::SuicideMove)
        );
        assert!(validator.check_move(Coord::new(0, 0), Color::White).is_ok());
    }

    #[test]
    fn multi_stone_suicide_rejected() {
        // B B W
        // . W .    black at (1,0) joins (0,0),(0,1) with no liberties left
        // W . .
        let board = board_with(&[
            (0, 0, Color::Black),
            (0, 1, Color::Black),
            (0, 2, Color::White),
            (1, 1, Color::White),
            (2, 0, Color::White),
        ]);
        let validator = RuleValidator::new(&board, None);

        assert_eq!(
            validator.check_move(Coord::new(1, 0), Color::Black),
            Err(MoveRejection::SuicideMove)
        );
    }

    #[test]
    fn ko_compares_previous_board_only() {
        let before_capture = board_with(&[
            (0, 1, Color::Black),
            (0, 2, Color::White),
            (1, 0, Color::Black),
            (1, 1, Color::White),
            (1, 3, Color::White),
            (2, 1, Color::Black),
            (2, 2, Color::White),
        ]);
        let after_capture = RuleValidator::new(&before_capture, None)
            .apply(Coord::new(1, 2), Color::Black)
            .unwrap()
            .board;

        // white retakes: this recreates the board before black's capture
        let validator = RuleValidator::new(&after_capture, Some(&before_capture));
        assert_eq!(
            validator.check_move(Coord::new(1, 1), Color::White),
            Err(MoveRejection::KoViolation)
        );

        // against any other snapshot the recapture is fine
        let unrelated = Board::new(BoardSize::Nine);
        let validator = RuleValidator::new(&after_capture, Some(&unrelated));
        let retake = validator.apply(Coord::new(1, 1), Color::White).unwrap();
        assert_eq!(retake.captured, vec![Coord::new(1, 2)]);
    }

    #[test]
    fn legal_moves_skip_suicide_points() {
        let board = board_with(&[(0, 1, Color::White), (1, 0, Color::White)]);
        let validator = RuleValidator::new(&board, None);

        let black = validator.legal_moves(Color::Black);
        assert!(!black.contains(&Coord::new(0, 0)));
        assert_eq!(black.len(), 81 - 3);

        let white = validator.legal_moves(Color::White);
        assert!(white.contains(&Coord::new(0, 0)));
    }
}
