use serde::{Deserialize, Serialize};

use crate::Direction;

/// One grid-aligned cell, in board units. Coordinates are always multiples
/// of the owning board's cell size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The cell one step over in the given direction.
    pub fn stepped(self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.offset();
        Position {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// What happens when the snake's head leaves the board. Resolved once at
/// session start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EdgePolicy {
    /// Exiting one side re-enters on the opposite side.
    Wrap,
    /// Exiting the board ends the session.
    Lethal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    pub width: i32,
    pub height: i32,
    pub cell_size: i32,
}

impl Board {
    /// Dimensions are truncated down to whole cells.
    pub fn new(width: i32, height: i32, cell_size: i32) -> Self {
        Board {
            width: width - width % cell_size,
            height: height - height % cell_size,
            cell_size,
        }
    }

    pub fn columns(&self) -> i32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> i32 {
        self.height / self.cell_size
    }

    pub fn contains(&self, position: Position) -> bool {
        position.x >= 0 && position.x < self.width && position.y >= 0 && position.y < self.height
    }

    /// Fold an out-of-range coordinate back onto the board, one axis at a
    /// time. Stepping off the right edge lands on column 0; stepping off the
    /// left edge lands on the last column. Same for rows.
    pub fn wrapped(&self, position: Position) -> Position {
        Position {
            x: position.x.rem_euclid(self.width),
            y: position.y.rem_euclid(self.height),
        }
    }

    /// The grid-aligned cell closest to the board center. Used as the spawn
    /// cell for a new session.
    pub fn center_cell(&self) -> Position {
        Position {
            x: self.columns() / 2 * self.cell_size,
            y: self.rows() / 2 * self.cell_size,
        }
    }
}
