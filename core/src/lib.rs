// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weiqi Core - Go rules engine
//!
//! This crate provides the rules of the game:
//! - Fixed-size board representation (9x9, 13x13, 19x19)
//! - Group and liberty analysis, territory flood fill
//! - Move validation with capture, suicide and ko rules
//! - Game session state machine and end-of-game scoring
//! - A narrow interface for an untrusted move-suggestion collaborator

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod board;
pub mod config;
pub mod engine;
pub mod game;
pub mod group;
pub mod rules;
pub mod scoring;

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

pub use board::{Board, BoardSize};
pub use config::{ConfigError, GameConfig};
pub use engine::{
    play_suggested, Difficulty, MoveSuggester, PassReason, SuggestError, SuggestedPlay, Suggestion,
    SuggestionRequest, DEFAULT_MAX_ATTEMPTS,
};
pub use game::{GameState, GameView, Rejection, Status};
pub use group::{classify_empty_regions, find_group, Group, Ownership, TerritoryMap};
pub use rules::{Placement, RuleValidator};
pub use scoring::{score, Captures, Outcome, ScoreBreakdown};

/// Player color in a Go game (Black or White)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    /// Black player (moves first)
    Black,
    /// White player
    White,
}

impl Color {
    /// Returns the opposite color
    pub fn opposite(&self) -> Self {
        match self {
            Color::Black => Color::White,
            Color::White => Color::Black,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("Black"),
            Color::White => f.write_str("White"),
        }
    }
}

/// Board coordinate, zero-based from the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    /// Row index (0 is the top edge)
    pub row: u8,
    /// Column index (0 is the left edge)
    pub col: u8,
}

impl Coord {
    /// Create a new coordinate
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Check if coordinate is valid for a board of given size
    pub fn is_valid(&self, board_size: u8) -> bool {
        self.row < board_size && self.col < board_size
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// An entry of the append-only move log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    /// Place a stone at the specified coordinate
    Place(Coord),
    /// Pass the turn
    Pass,
}

/// Reasons a placement is refused. The session is left untouched and the
/// same player moves again.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveRejection {
    /// The point is occupied or lies outside the board
    #[error("Invalid move: spot is taken")]
    SpotTaken,

    /// The placed group would have no liberties and captures nothing
    #[error("Illegal suicide move")]
    SuicideMove,

    /// The move recreates the position before the opponent's last move
    #[error("Illegal ko move")]
    KoViolation,
}

/// Errors returned by game session operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GameError {
    /// The move is illegal in the current position
    #[error(transparent)]
    Rejected(#[from] MoveRejection),

    /// The session is terminal and accepts no further operations
    #[error("Game is already over")]
    GameOver,
}
