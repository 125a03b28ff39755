// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use crate::{Color, Coord};
use serde::Serialize;
use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use thiserror::Error;

/// Supported board sizes. The size is fixed when a board is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum BoardSize {
    /// 9x9, the default for quick games
    #[default]
    Nine = 9,
    /// 13x13
    Thirteen = 13,
    /// 19x19, the full board
    Nineteen = 19,
}

impl BoardSize {
    /// Number of lines along one edge
    pub fn lines(self) -> u8 {
        self as u8
    }

    /// Number of intersections on the board
    pub fn area(self) -> usize {
        let n = self.lines() as usize;
        n * n
    }
}

/// Returned when a board size other than 9, 13 or 19 is requested
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Invalid board size {0}. Must be 9, 13, or 19.")]
pub struct InvalidBoardSize(pub u8);

impl TryFrom<u8> for BoardSize {
    type Error = InvalidBoardSize;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            9 => Ok(BoardSize::Nine),
            13 => Ok(BoardSize::Thirteen),
            19 => Ok(BoardSize::Nineteen),
            other => Err(InvalidBoardSize(other)),
        }
    }
}

impl fmt::Display for BoardSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{0}x{0}", self.lines())
    }
}

/// Represents the Go board with stones and empty positions
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    size: BoardSize,
    /// Row-major intersections, `None` for an empty point
    positions: Vec<Option<Color>>,
}

impl Board {
    /// Create a new empty board with the specified size
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            positions: vec![None; size.area()],
        }
    }

    /// Number of lines along one edge
    pub fn size(&self) -> u8 {
        self.size.lines()
    }

    /// The board size as a validated enum
    pub fn board_size(&self) -> BoardSize {
        self.size
    }

    /// Get the stone at the specified coordinate. Off-board points read as empty.
    pub fn get(&self, coord: Coord) -> Option<Color> {
        if !coord.is_valid(self.size()) {
            return None;
        }
        self.positions[self.coord_to_index(coord)]
    }

    /// True if the coordinate is on the board and holds no stone
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        coord.is_valid(self.size()) && self.positions[self.coord_to_index(coord)].is_none()
    }

    /// Place a stone at the specified coordinate
    pub fn place(&mut self, coord: Coord, color: Color) -> bool {
        if !self.is_empty_at(coord) {
            return false;
        }
        let idx = self.coord_to_index(coord);
        self.positions[idx] = Some(color);
        true
    }

    /// Remove a stone at the specified coordinate
    pub fn remove(&mut self, coord: Coord) -> bool {
        if self.get(coord).is_none() {
            return false;
        }
        let idx = self.coord_to_index(coord);
        self.positions[idx] = None;
        true
    }

    /// Row-major index of an on-board coordinate
    pub(crate) fn coord_to_index(&self, coord: Coord) -> usize {
        coord.row as usize * self.size() as usize + coord.col as usize
    }

    /// Adjacent coordinates (up, down, left, right), clipped at the edges
    pub fn adjacent_coords(&self, coord: Coord) -> impl Iterator<Item = Coord> {
        let last = self.size() - 1;
        let Coord { row, col } = coord;
        [
            (row > 0).then(|| Coord::new(row - 1, col)),
            (row < last).then(|| Coord::new(row + 1, col)),
            (col > 0).then(|| Coord::new(row, col - 1)),
            (col < last).then(|| Coord::new(row, col + 1)),
        ]
        .into_iter()
        .flatten()
    }

    /// Every coordinate on the board in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let n = self.size();
        (0..n).flat_map(move |row| (0..n).map(move |col| Coord::new(row, col)))
    }

    /// Count stones of specified color on the board
    pub fn count_stones(&self, color: Color) -> usize {
        self.positions
            .iter()
            .filter(|stone| **stone == Some(color))
            .count()
    }

    /// True if no stone is on the board
    pub fn is_clear(&self) -> bool {
        self.positions.iter().all(Option::is_none)
    }
}

impl fmt::Display for Board {
    /// One row per line, `B`/`W`/`.` separated by spaces
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.size();
        for row in 0..n {
            for col in 0..n {
                if col > 0 {
                    f.write_str(" ")?;
                }
                let ch = match self.get(Coord::new(row, col)) {
                    Some(Color::Black) => 'B',
                    Some(Color::White) => 'W',
                    None => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
