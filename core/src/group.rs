// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connectivity analysis: stone groups, liberties and empty-region ownership

use crate::{board::Board, Color, Coord};
use serde::Serialize;
use std::collections::VecDeque;

/// A maximal set of orthogonally connected stones of one color
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    /// Color of every stone in the group
    pub color: Color,
    /// Stones in breadth-first discovery order, origin first
    pub stones: Vec<Coord>,
    /// Distinct empty points adjacent to the group
    pub liberties: Vec<Coord>,
}

impl Group {
    /// Number of stones in the group
    pub fn len(&self) -> usize {
        self.stones.len()
    }

    /// Groups always hold at least their origin stone
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }

    /// Number of distinct liberties
    pub fn liberty_count(&self) -> usize {
        self.liberties.len()
    }
}

/// Find the group containing the stone at `origin`.
///
/// Returns `None` when `origin` is empty or off the board. Each coordinate is
/// enqueued at most once, and a liberty shared by several stones is counted once.
pub fn find_group(board: &Board, origin: Coord) -> Option<Group> {
    let color = board.get(origin)?;

    let mut visited = vec![false; board.board_size().area()];
    let mut stones = Vec::new();
    let mut liberties = Vec::new();
    let mut queue = VecDeque::from([origin]);
    visited[board.coord_to_index(origin)] = true;

    while let Some(current) = queue.pop_front() {
        stones.push(current);

        for neighbor in board.adjacent_coords(current) {
            let idx = board.coord_to_index(neighbor);
            if visited[idx] {
                continue;
            }
            match board.get(neighbor) {
                Some(c) if c == color => {
                    visited[idx] = true;
                    queue.push_back(neighbor);
                }
                None => {
                    visited[idx] = true;
                    liberties.push(neighbor);
                }
                Some(_) => {}
            }
        }
    }

    Some(Group {
        color,
        stones,
        liberties,
    })
}

/// Ownership of a single intersection after territory analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Ownership {
    /// A stone of this color stands on the point
    Stone(Color),
    /// Empty point inside a region bordered only by this color
    Territory(Color),
    /// Empty point bordered by both colors, or by none
    Neutral,
}

/// A maximal connected region of empty points
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Owning color, `None` when neutral
    pub owner: Option<Color>,
    /// Points in the region
    pub points: Vec<Coord>,
}

/// Per-point ownership of a whole board
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TerritoryMap {
    size: u8,
    cells: Vec<Ownership>,
    regions: Vec<Region>,
}

impl TerritoryMap {
    /// Ownership of a point, `None` when off the board
    pub fn get(&self, coord: Coord) -> Option<Ownership> {
        if !coord.is_valid(self.size) {
            return None;
        }
        Some(self.cells[coord.row as usize * self.size as usize + coord.col as usize])
    }

    /// Owner of an empty point; `None` for neutral points and stones
    pub fn owner(&self, coord: Coord) -> Option<Color> {
        match self.get(coord) {
            Some(Ownership::Territory(color)) => Some(color),
            _ => None,
        }
    }

    /// Number of empty points owned by `color`
    pub fn territory(&self, color: Color) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Ownership::Territory(color))
            .count()
    }

    /// Empty regions in discovery order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Board size the map was computed for
    pub fn size(&self) -> u8 {
        self.size
    }
}

/// Flood-fill every empty region and assign it an owner.
///
/// A region belongs to a color only if every stone bordering it has that
/// color. The visited set is shared across regions, so each empty point is
/// processed exactly once for the whole board.
pub fn classify_empty_regions(board: &Board) -> TerritoryMap {
    let mut cells: Vec<Ownership> = board
        .coords()
        .map(|c| match board.get(c) {
            Some(color) => Ownership::Stone(color),
            None => Ownership::Neutral,
        })
        .collect();
    let mut visited = vec![false; cells.len()];
    let mut regions = Vec::new();

    for start in board.coords() {
        let start_idx = board.coord_to_index(start);
        if visited[start_idx] || board.get(start).is_some() {
            continue;
        }

        let (points, borders) = region_and_borders(board, start, &mut visited);
        let owner = match borders {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        };
        if let Some(color) = owner {
            for p in &points {
                cells[board.coord_to_index(*p)] = Ownership::Territory(color);
            }
        }
        regions.push(Region { owner, points });
    }

    TerritoryMap {
        size: board.size(),
        cells,
        regions,
    }
}

/// BFS over empty points; returns the region and whether it touches black / white stones
fn region_and_borders(
    board: &Board,
    start: Coord,
    visited: &mut [bool],
) -> (Vec<Coord>, (bool, bool)) {
    let mut queue = VecDeque::from([start]);
    let mut region = Vec::new();
    let (mut touches_black, mut touches_white) = (false, false);
    visited[board.coord_to_index(start)] = true;

    while let Some(current) = queue.pop_front() {
        region.push(current);
        for n in board.adjacent_coords(current) {
            match board.get(n) {
                Some(Color::Black) => touches_black = true,
                Some(Color::White) => touches_white = true,
                None => {
                    let idx = board.coord_to_index(n);
                    if !visited[idx] {
                        visited[idx] = true;
                        queue.push_back(n);
                    }
                }
            }
        }
    }

    (region, (touches_black, touches_white))
}
