// SPDX-License-Identifier: MIT OR Apache-2.0

//! Game session: turn order, passes, termination and the move record

use crate::rules::RuleValidator;
use crate::scoring::{score, Captures, Outcome};
use crate::{Board, BoardSize, Color, Coord, GameError, Move, MoveRejection};
use serde::Serialize;

/// Where the session stands between operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Waiting for this player to move or pass
    AwaitingMove(Color),
    /// Finished; the session is read-only
    Terminal,
}

/// The most recent refused placement, kept until consumed or superseded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rejection {
    pub coord: Coord,
    pub player: Color,
    pub reason: MoveRejection,
}

/// Represents the current state of a Go game
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    current_player: Color,
    /// Number of consecutive passes
    pass_count: u8,
    /// Board before each placed stone, oldest first
    history: Vec<Board>,
    /// Append-only log of placements and passes
    moves: Vec<Move>,
    captures: Captures,
    last_move: Option<Coord>,
    last_rejection: Option<Rejection>,
    outcome: Option<Outcome>,
}

impl GameState {
    /// Create a new game with an empty board and Black to move
    pub fn new(size: BoardSize) -> Self {
        Self::from_position(Board::new(size), Color::Black)
    }

    /// Start from a prepared position, e.g. handicap stones or a problem.
    /// The move record starts empty, so no ko is active.
    pub fn from_position(board: Board, to_move: Color) -> Self {
        Self {
            board,
            current_player: to_move,
            pass_count: 0,
            history: Vec::new(),
            moves: Vec::new(),
            captures: Captures::default(),
            last_move: None,
            last_rejection: None,
            outcome: None,
        }
    }

    /// Rebuild a session by replaying a move log from an empty board.
    ///
    /// Stops at the first entry the rules refuse.
    pub fn replay(size: BoardSize, moves: &[Move]) -> Result<Self, GameError> {
        let mut game = Self::new(size);
        for mv in moves {
            match *mv {
                Move::Place(coord) => {
                    game.play(coord)?;
                }
                Move::Pass => {
                    game.pass()?;
                }
            }
        }
        Ok(game)
    }

    /// Place a stone for the current player.
    ///
    /// Returns the number of opponent stones captured. A rejected move leaves
    /// the session unchanged apart from [`GameState::last_rejection`].
    pub fn play(&mut self, coord: Coord) -> Result<usize, GameError> {
        self.ensure_active()?;
        let player = self.current_player;

        let validator = RuleValidator::new(&self.board, self.history.last());
        let placement = match validator.apply(coord, player) {
            Ok(placement) => placement,
            Err(reason) => {
                self.last_rejection = Some(Rejection {
                    coord,
                    player,
                    reason,
                });
                return Err(reason.into());
            }
        };

        let captured = placement.captured_count();
        let previous = std::mem::replace(&mut self.board, placement.board);
        self.history.push(previous);
        self.moves.push(Move::Place(coord));
        self.captures.add(player, captured);
        self.pass_count = 0;
        self.last_move = Some(coord);
        self.last_rejection = None;
        self.current_player = player.opposite();

        if captured > 0 {
            tracing::debug!(?player, ?coord, captured, "Stones captured");
        }
        Ok(captured)
    }

    /// Pass the turn. The second consecutive pass ends and scores the game.
    pub fn pass(&mut self) -> Result<Status, GameError> {
        self.ensure_active()?;

        self.moves.push(Move::Pass);
        self.last_rejection = None;
        self.pass_count += 1;

        if self.pass_count >= 2 {
            self.finish();
        } else {
            self.current_player = self.current_player.opposite();
        }
        Ok(self.status())
    }

    /// End the game because `loser` ran out of time. No counting is done.
    pub fn expire_clock(&mut self, loser: Color) -> Result<(), GameError> {
        self.ensure_active()?;
        let winner = loser.opposite();
        tracing::info!(?loser, ?winner, "Clock expired");
        self.last_rejection = None;
        self.outcome = Some(Outcome::Timeout { winner });
        Ok(())
    }

    fn ensure_active(&self) -> Result<(), GameError> {
        if self.is_game_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn finish(&mut self) {
        let breakdown = score(&self.board, self.captures);
        tracing::info!(
            black_total = breakdown.black_total,
            white_total = breakdown.white_total,
            dead = breakdown.dead_stones.len(),
            "Game over after two passes"
        );
        self.outcome = Some(Outcome::Scored(breakdown));
    }

    /// Current state machine position
    pub fn status(&self) -> Status {
        if self.is_game_over() {
            Status::Terminal
        } else {
            Status::AwaitingMove(self.current_player)
        }
    }

    /// Check if the game is over
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn pass_count(&self) -> u8 {
        self.pass_count
    }

    /// Board snapshots taken before each placed stone
    pub fn history(&self) -> &[Board] {
        &self.history
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn captures(&self) -> Captures {
        self.captures
    }

    /// Coordinate of the most recent stone placed
    pub fn last_move(&self) -> Option<Coord> {
        self.last_move
    }

    pub fn last_rejection(&self) -> Option<Rejection> {
        self.last_rejection
    }

    /// Consume the rejection signal so it is shown once
    pub fn take_rejection(&mut self) -> Option<Rejection> {
        self.last_rejection.take()
    }

    /// Final result, set once the session is terminal
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Read-only snapshot for the presentation layer
    pub fn view(&self) -> GameView {
        GameView {
            board: self.board.clone(),
            status: self.status(),
            current_player: self.current_player,
            game_over: self.is_game_over(),
            last_move: self.last_move,
            last_rejection: self.last_rejection,
            captures: self.captures,
            moves: self.moves.clone(),
            outcome: self.outcome.clone(),
        }
    }
}

/// Everything a front end needs to draw the game after an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameView {
    pub board: Board,
    pub status: Status,
    pub current_player: Color,
    pub game_over: bool,
    pub last_move: Option<Coord>,
    pub last_rejection: Option<Rejection>,
    pub captures: Captures,
    pub moves: Vec<Move>,
    /// Score breakdown and territory map once the game has ended
    pub outcome: Option<Outcome>,
}
