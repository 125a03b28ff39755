// SPDX-License-Identifier: MIT OR Apache-2.0

//! End-of-game scoring: territory, captures and dead-stone inference

use crate::group::{classify_empty_regions, find_group, TerritoryMap};
use crate::{board::Board, Color, Coord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Stones captured by each player during play
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captures {
    /// Stones Black has taken
    pub black: usize,
    /// Stones White has taken
    pub white: usize,
}

impl Captures {
    pub fn get(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }

    pub(crate) fn add(&mut self, color: Color, count: usize) {
        match color {
            Color::Black => self.black += count,
            Color::White => self.white += count,
        }
    }
}

/// Final per-player breakdown, computed once when the game ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreBreakdown {
    pub black_territory: usize,
    pub white_territory: usize,
    /// In-game captures plus white stones judged dead
    pub black_captures: usize,
    /// In-game captures plus black stones judged dead
    pub white_captures: usize,
    pub black_total: usize,
    pub white_total: usize,
    /// Stones removed as dead before the final territory count
    pub dead_stones: Vec<Coord>,
    /// Ownership after dead stones are removed
    pub territory: TerritoryMap,
}

impl ScoreBreakdown {
    /// Territory of one player
    pub fn territory_of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black_territory,
            Color::White => self.white_territory,
        }
    }

    /// Captures of one player, dead stones included
    pub fn captures_of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black_captures,
            Color::White => self.white_captures,
        }
    }

    /// Territory plus captures of one player
    pub fn total_of(&self, color: Color) -> usize {
        match color {
            Color::Black => self.black_total,
            Color::White => self.white_total,
        }
    }

    /// Player with the higher total, `None` on a tie
    pub fn winner(&self) -> Option<Color> {
        match self.black_total.cmp(&self.white_total) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// How a finished game was decided
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Two consecutive passes, counted on the board
    Scored(ScoreBreakdown),
    /// The other player's clock ran out; no counting takes place
    Timeout {
        /// Player awarded the game
        winner: Color,
    },
}

impl Outcome {
    /// Winning player, `None` for a drawn count
    pub fn winner(&self) -> Option<Color> {
        match self {
            Outcome::Scored(breakdown) => breakdown.winner(),
            Outcome::Timeout { winner } => Some(*winner),
        }
    }

    /// The score breakdown, if the game was counted
    pub fn breakdown(&self) -> Option<&ScoreBreakdown> {
        match self {
            Outcome::Scored(breakdown) => Some(breakdown),
            Outcome::Timeout { .. } => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Scored(b) => {
                write!(
                    f,
                    "Game Over. Final Score: Black {} - White {}. ",
                    b.black_total, b.white_total
                )?;
                match b.winner() {
                    Some(color) => write!(f, "{color} wins!"),
                    None => f.write_str("It's a draw!"),
                }
            }
            Outcome::Timeout { winner } => {
                write!(f, "Game Over. {} ran out of time. {winner} wins!", winner.opposite())
            }
        }
    }
}

/// Score a finished board.
///
/// 1. Classify empty regions on the board as it stands.
/// 2. Judge each group dead if it has no liberties, or if every liberty lies
///    in territory of the opposing color. Dead stones are removed from a
///    working copy and credited to the opponent as captures.
/// 3. Classify empty regions again on the cleaned board.
///
/// The inference has no lookahead and can misjudge contested groups.
pub fn score(board: &Board, captures: Captures) -> ScoreBreakdown {
    let provisional = classify_empty_regions(board);

    let mut cleaned = board.clone();
    let mut visited = vec![false; board.board_size().area()];
    let mut dead_stones = Vec::new();
    let mut dead = Captures::default();

    for coord in board.coords() {
        if visited[board.coord_to_index(coord)] {
            continue;
        }
        let Some(group) = find_group(board, coord) else {
            continue;
        };
        for stone in &group.stones {
            visited[board.coord_to_index(*stone)] = true;
        }

        let opponent = group.color.opposite();
        let is_dead = group
            .liberties
            .iter()
            .all(|lib| provisional.owner(*lib) == Some(opponent));
        if is_dead {
            tracing::debug!(
                color = ?group.color,
                stones = group.len(),
                origin = ?coord,
                "Group judged dead"
            );
            for stone in &group.stones {
                cleaned.remove(*stone);
            }
            // dead stones count as prisoners for the opponent
            dead.add(opponent, group.len());
            dead_stones.extend(group.stones);
        }
    }

    let territory = classify_empty_regions(&cleaned);
    let black_territory = territory.territory(Color::Black);
    let white_territory = territory.territory(Color::White);
    let black_captures = captures.black + dead.black;
    let white_captures = captures.white + dead.white;

    ScoreBreakdown {
        black_territory,
        white_territory,
        black_captures,
        white_captures,
        black_total: black_territory + black_captures,
        white_total: white_territory + white_captures,
        dead_stones,
        territory,
    }
}
