use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::{Board, EdgePolicy, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit offset in grid space; y grows downward.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when the two headings cancel out geometrically.
    pub fn is_opposite_of(self, other: Direction) -> bool {
        let (dx, dy) = self.offset();
        let (ox, oy) = other.offset();
        (dx, dy) == (-ox, -oy)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snake {
    /// Head at the front. Non-empty for as long as the session lives.
    pub body: VecDeque<Position>,
    pub direction: Direction,
    /// Requested headings, consumed at most one per step.
    pub pending_directions: VecDeque<Direction>,
    /// Set on food consumption, cleared after one growth application.
    pub pending_growth: bool,
    /// Food eaten this session.
    pub food: u32,
}

impl Snake {
    pub fn new(head: Position, direction: Direction) -> Self {
        Snake {
            body: VecDeque::from([head]),
            direction,
            pending_directions: VecDeque::new(),
            pending_growth: false,
            food: 0,
        }
    }

    pub fn head(&self) -> &Position {
        self.body.front().expect("Snake body should not be empty")
    }

    pub fn tail(&self) -> &Position {
        self.body.back().expect("Snake body should not be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, position: &Position) -> bool {
        self.body.contains(position)
    }

    /// Record a direction request. No validation happens here; an illegal
    /// reversal is dropped when it is consumed by `step`.
    pub fn enqueue_direction(&mut self, direction: Direction) {
        self.pending_directions.push_back(direction);
    }

    /// Arm growth for the next `step`. Calling this repeatedly between two
    /// steps still grows the body by exactly one segment.
    pub fn mark_growth(&mut self) {
        self.pending_growth = true;
    }

    /// Advance the snake by exactly one cell.
    ///
    /// Consumes at most one pending direction, discarding it if it would
    /// reverse the current heading. The new head is one cell size from the
    /// old head along the resolved heading; under `EdgePolicy::Wrap` it is
    /// folded back onto the board, under `EdgePolicy::Lethal` it is left
    /// out of bounds for `has_wall_collision` to catch. Every surviving
    /// segment ends up in its predecessor's prior cell.
    pub fn step(&mut self, board: &Board, edge_policy: EdgePolicy) {
        if let Some(requested) = self.pending_directions.pop_front() {
            if !requested.is_opposite_of(self.direction) {
                self.direction = requested;
            }
        }

        let mut head = self.head().stepped(self.direction, board.cell_size);
        if edge_policy == EdgePolicy::Wrap {
            head = board.wrapped(head);
        }

        if self.pending_growth {
            self.pending_growth = false;
        } else {
            self.body.pop_back();
        }
        self.body.push_front(head);
    }

    /// True if the head cell duplicates any non-head body cell.
    pub fn has_self_collision(&self) -> bool {
        let head = *self.head();
        self.body.iter().skip(1).any(|segment| *segment == head)
    }

    /// Lethal-wall variant only: true if the head has left the board.
    pub fn has_wall_collision(&self, board: &Board) -> bool {
        !board.contains(*self.head())
    }
}
