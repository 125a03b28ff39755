// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parsing of typed commands.

use anyhow::{anyhow, Result};
use weiqi_core::Coord;

/// A line typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(Coord),
    Pass,
    Quit,
}

/// Parse `pass`, `quit`, or a coordinate like `D4` (columns A-T skip I,
/// rows count from the top starting at 1).
pub fn parse_command(input: &str, board_size: u8) -> Result<Command> {
    let input = input.trim().to_lowercase();

    match input.as_str() {
        "pass" => return Ok(Command::Pass),
        "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let mut chars = input.chars();
    let col_char = chars
        .next()
        .ok_or_else(|| anyhow!("Empty input. Enter a move like 'D4', 'pass' or 'quit'."))?;
    let row_str = chars.as_str();

    let col = match col_char {
        'a'..='h' => col_char as u8 - b'a',
        'j'..='t' => col_char as u8 - b'a' - 1,
        _ => return Err(anyhow!("Invalid column. Must be A-T (excluding I).")),
    };

    let row = match row_str.parse::<u8>() {
        Ok(r) if r > 0 && r <= board_size => r - 1,
        _ => {
            return Err(anyhow!(
                "Invalid row. Must be between 1 and {}.",
                board_size
            ))
        }
    };

    let coord = Coord::new(row, col);
    if !coord.is_valid(board_size) {
        return Err(anyhow!("Coordinate is outside the {}x{} board.", board_size, board_size));
    }
    Ok(Command::Play(coord))
}
