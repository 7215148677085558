use common::GameState;

use super::traits::GlyphRenderer;
use super::types::{CharGrid, RenderConfig};

pub struct BoardRenderer<R: GlyphRenderer> {
    renderer: R,
}

impl<R: GlyphRenderer> BoardRenderer<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer }
    }

    /// Draw one frame of the session onto a fresh grid: food first, then
    /// the snake body over it, head last. Board positions are in board
    /// units; the grid is addressed in whole cells.
    pub fn render(&self, state: &GameState, config: &RenderConfig) -> CharGrid {
        let board = &state.board;
        let mut grid = CharGrid::new(
            board.columns() as usize,
            board.rows() as usize,
            config.chars_per_cell,
        );

        let food = state.food.position;
        if board.contains(food) {
            let pattern = self.renderer.food();
            grid.fill_cell(
                (food.x / board.cell_size) as usize,
                (food.y / board.cell_size) as usize,
                &pattern,
            );
        }

        for (i, segment) in state.snake.body.iter().enumerate().rev() {
            if board.contains(*segment) {
                let pattern = self.renderer.snake_segment(i == 0);
                grid.fill_cell(
                    (segment.x / board.cell_size) as usize,
                    (segment.y / board.cell_size) as usize,
                    &pattern,
                );
            }
        }

        grid
    }
}
