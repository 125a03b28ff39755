// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use weiqi_core::{Board, Color, Coord, GameState, Outcome, Ownership, Status, TerritoryMap};

/// Render the board as ASCII art.
///
/// When a territory map is given (after counting), empty points and dead
/// stones show who owns them: `x` for Black, `o` for White.
pub fn render_board(board: &Board, territory: Option<&TerritoryMap>) -> String {
    let size = board.size();
    let mut output = String::new();

    push_column_labels(&mut output, size);

    for row in 0..size {
        output.push_str(&format!("{:2} ", row + 1));

        for col in 0..size {
            let coord = Coord::new(row, col);
            let owned = territory.and_then(|map| match map.get(coord) {
                Some(Ownership::Territory(color)) => Some(color),
                _ => None,
            });

            let symbol = match (owned, board.get(coord)) {
                (Some(Color::Black), _) => "x",
                (Some(Color::White), _) => "o",
                (None, Some(Color::Black)) => "●",
                (None, Some(Color::White)) => "○",
                (None, None) if is_star_point(coord, size) => "*",
                (None, None) => "+",
            };

            output.push_str(&format!(" {}", symbol));
        }

        output.push_str(&format!(" {}", row + 1));
        output.push('\n');
    }

    push_column_labels(&mut output, size);
    output
}

fn push_column_labels(output: &mut String, size: u8) {
    output.push_str("   ");
    for col in 0..size {
        output.push_str(&format!(" {}", coord_to_column_char(col)));
    }
    output.push('\n');
}

/// One-line summary under the board
pub fn render_status(game: &GameState) -> String {
    let captures = game.captures();
    let mut line = match game.status() {
        Status::AwaitingMove(color) => format!("{} to move.", color),
        Status::Terminal => "Game over.".to_string(),
    };
    line.push_str(&format!(
        " Captures: Black {}, White {}.",
        captures.black, captures.white
    ));
    if let Some(coord) = game.last_move() {
        line.push_str(&format!(" Last move: {}.", coord_label(coord)));
    }
    if game.pass_count() > 0 && !game.is_game_over() {
        line.push_str(" Opponent passed.");
    }
    line
}

/// Final board with territory marks plus the result message
pub fn render_outcome(game: &GameState) -> Option<String> {
    let outcome = game.outcome()?;
    let territory = outcome.breakdown().map(|b| &b.territory);
    let mut output = render_board(game.board(), territory);
    if let Outcome::Scored(breakdown) = outcome {
        output.push_str(&format!(
            "Black: {} territory + {} captures = {}\n",
            breakdown.black_territory, breakdown.black_captures, breakdown.black_total
        ));
        output.push_str(&format!(
            "White: {} territory + {} captures = {}\n",
            breakdown.white_territory, breakdown.white_captures, breakdown.white_total
        ));
    }
    output.push_str(&outcome.to_string());
    output.push('\n');
    Some(output)
}

/// Human-readable label such as `D4`
pub fn coord_label(coord: Coord) -> String {
    format!("{}{}", coord_to_column_char(coord.col), coord.row + 1)
}

/// Convert a column index to a column character (A-T, skipping I)
pub(crate) fn coord_to_column_char(col: u8) -> char {
    if col < 8 {
        (b'A' + col) as char
    } else {
        (b'A' + col + 1) as char
    }
}

/// Check if a coordinate is a star point on the board
fn is_star_point(coord: Coord, board_size: u8) -> bool {
    let points: &[u8] = match board_size {
        9 => &[2, 6],
        13 => &[3, 9],
        19 => &[3, 9, 15],
        _ => return false,
    };
    let center = board_size / 2;
    (coord.row == center && coord.col == center)
        || (points.contains(&coord.row) && points.contains(&coord.col))
}
