// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move-suggestion collaborator interface
//!
//! A suggester (remote service, bot, ...) is never trusted: every answer goes
//! through the ordinary rules pipeline of [`GameState::play`], and anything it
//! gets wrong degrades to a pass.

use crate::{Board, Color, Coord, GameError, GameState, MoveRejection, Status};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of suggestions tried before a pass is forced
pub const DEFAULT_MAX_ATTEMPTS: u8 = 3;

/// Playing strength requested from the suggester; passed through unchanged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    #[default]
    Skilled,
    Pro,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Difficulty::Beginner => f.write_str("beginner"),
            Difficulty::Skilled => f.write_str("skilled"),
            Difficulty::Pro => f.write_str("pro"),
        }
    }
}

/// What the suggester gets to look at
#[derive(Debug, Clone, Copy)]
pub struct SuggestionRequest<'a> {
    pub board: &'a Board,
    pub to_move: Color,
    /// Board snapshots before each placed stone; the last one is the ko reference
    pub history: &'a [Board],
    pub difficulty: Difficulty,
    /// 1-based attempt number for this turn
    pub attempt: u8,
    /// Why the previous attempt this turn was refused
    pub previous_rejection: Option<MoveRejection>,
}

/// A suggester's answer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Suggestion {
    Place(Coord),
    Pass,
}

/// Failures of the collaborator itself
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// No answer could be obtained (service down, missing key, timeout)
    #[error("Suggestion service unavailable: {0}")]
    Unavailable(String),

    /// The answer could not be understood
    #[error("Malformed suggestion: {0}")]
    Malformed(String),

    /// The request was cancelled before an answer arrived
    #[error("Suggestion cancelled")]
    Cancelled,
}

/// Source of candidate moves for one side
pub trait MoveSuggester {
    /// Propose a move for `request.to_move`
    fn suggest(&mut self, request: &SuggestionRequest<'_>) -> Result<Suggestion, SuggestError>;
}

/// Why a suggested turn ended in a pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PassReason {
    /// The suggester chose to pass
    Suggested,
    /// Every attempt was refused by the rules
    AttemptsExhausted {
        attempts: u8,
        last_rejection: MoveRejection,
    },
    /// The suggester failed outright
    SuggesterFailed(SuggestError),
}

/// Result of one suggested turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestedPlay {
    /// A suggestion was accepted and committed
    Placed {
        coord: Coord,
        captured: usize,
        attempts: u8,
    },
    /// The turn was passed
    Passed { reason: PassReason, status: Status },
}

/// Let `suggester` play the current player's turn.
///
/// Each suggestion is validated by [`GameState::play`]. A refused suggestion
/// is retried up to `max_attempts` times in total, after which a pass is
/// forced. A failing suggester forces a pass straight away. The only error
/// returned is [`GameError::GameOver`] for a finished session.
pub fn play_suggested<S: MoveSuggester + ?Sized>(
    game: &mut GameState,
    suggester: &mut S,
    difficulty: Difficulty,
    max_attempts: u8,
) -> Result<SuggestedPlay, GameError> {
    if game.is_game_over() {
        return Err(GameError::GameOver);
    }

    let max_attempts = max_attempts.max(1);
    let mut previous_rejection = None;

    for attempt in 1..=max_attempts {
        let request = SuggestionRequest {
            board: game.board(),
            to_move: game.current_player(),
            history: game.history(),
            difficulty,
            attempt,
            previous_rejection,
        };

        let coord = match suggester.suggest(&request) {
            Ok(Suggestion::Place(coord)) => coord,
            Ok(Suggestion::Pass) => {
                let status = game.pass()?;
                return Ok(SuggestedPlay::Passed {
                    reason: PassReason::Suggested,
                    status,
                });
            }
            Err(err) => {
                tracing::warn!(%err, attempt, "Suggester failed, passing instead");
                let status = game.pass()?;
                return Ok(SuggestedPlay::Passed {
                    reason: PassReason::SuggesterFailed(err),
                    status,
                });
            }
        };

        match game.play(coord) {
            Ok(captured) => {
                return Ok(SuggestedPlay::Placed {
                    coord,
                    captured,
                    attempts: attempt,
                })
            }
            Err(GameError::Rejected(reason)) => {
                tracing::debug!(?coord, %reason, attempt, "Suggested move refused");
                previous_rejection = Some(reason);
            }
            Err(err) => return Err(err),
        }
    }

    let last_rejection = previous_rejection.unwrap_or(MoveRejection::SpotTaken);
    tracing::info!(max_attempts, %last_rejection, "No legal suggestion, forcing a pass");
    let status = game.pass()?;
    Ok(SuggestedPlay::Passed {
        reason: PassReason::AttemptsExhausted {
            attempts: max_attempts,
            last_rejection,
        },
        status,
    })
}
