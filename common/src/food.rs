use serde::{Deserialize, Serialize};

use crate::util::PseudoRandom;
use crate::{Board, Position, Snake};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    pub position: Position,
}

impl Food {
    /// Spawn food on a random cell the snake does not occupy.
    ///
    /// Callers must guarantee at least one free cell exists; a snake
    /// covering the whole board would keep this sampling loop spinning
    /// forever. The win-by-filling-the-board case is not handled anywhere
    /// in this crate.
    pub fn spawn(board: &Board, rng: &mut PseudoRandom, snake: &Snake) -> Self {
        Food {
            position: random_free_cell(board, rng, snake),
        }
    }

    /// Re-roll the position after consumption. Same free-cell precondition
    /// as `spawn`.
    pub fn replace(&mut self, board: &Board, rng: &mut PseudoRandom, snake: &Snake) {
        self.position = random_free_cell(board, rng, snake);
    }
}

fn random_free_cell(board: &Board, rng: &mut PseudoRandom, snake: &Snake) -> Position {
    debug_assert!(
        (snake.len() as i32) < board.columns() * board.rows(),
        "no free cell left to place food on"
    );
    loop {
        let position = Position::new(
            rng.next_below(board.columns() as u32) as i32 * board.cell_size,
            rng.next_below(board.rows() as u32) as i32 * board.cell_size,
        );
        if !snake.contains(&position) {
            return position;
        }
    }
}
