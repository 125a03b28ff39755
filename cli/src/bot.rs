// SPDX-License-Identifier: MIT OR Apache-2.0

//! A random-move opponent.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use weiqi_core::{
    Board, Color, Coord, Difficulty, MoveSuggester, RuleValidator, SuggestError, Suggestion,
    SuggestionRequest,
};

/// Picks random points, never filling its own eyes, and passes when
/// nothing is left.
///
/// - `beginner` picks among empty points without checking legality, so
///   some picks are refused and retried.
/// - `skilled` only picks legal points.
/// - `pro` also prefers a point that captures.
#[derive(Debug)]
pub struct RandomSuggester {
    rng: StdRng,
}

impl RandomSuggester {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }
}

/// An empty point whose neighbors are all `color`
fn is_own_eye(board: &Board, coord: Coord, color: Color) -> bool {
    board.is_empty_at(coord) && board.adjacent_coords(coord).all(|n| board.get(n) == Some(color))
}

impl MoveSuggester for RandomSuggester {
    fn suggest(&mut self, request: &SuggestionRequest<'_>) -> Result<Suggestion, SuggestError> {
        let board = request.board;
        let color = request.to_move;
        let validator = RuleValidator::new(board, request.history.last());

        let candidates: Vec<Coord> = match request.difficulty {
            Difficulty::Beginner => board
                .coords()
                .filter(|c| board.is_empty_at(*c))
                .collect(),
            Difficulty::Skilled | Difficulty::Pro => validator.legal_moves(color),
        };
        let candidates: Vec<Coord> = candidates
            .into_iter()
            .filter(|c| !is_own_eye(board, *c, color))
            .collect();

        if request.difficulty == Difficulty::Pro {
            let captures: Vec<Coord> = candidates
                .iter()
                .copied()
                .filter(|c| {
                    validator
                        .apply(*c, color)
                        .map_or(false, |p| p.captured_count() > 0)
                })
                .collect();
            if let Some(coord) = captures.choose(&mut self.rng) {
                tracing::debug!(%coord, "Bot plays a capture");
                return Ok(Suggestion::Place(*coord));
            }
        }

        match candidates.choose(&mut self.rng) {
            Some(coord) => {
                tracing::debug!(%coord, attempt = request.attempt, "Bot picks a point");
                Ok(Suggestion::Place(*coord))
            }
            None => Ok(Suggestion::Pass),
        }
    }
}
